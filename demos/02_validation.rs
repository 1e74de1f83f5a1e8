/// validation - strict vs permissive handling of bad input
use balloon_mortgage_rs::{CalculatorConfig, LoanForm};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    println!("=== validation example ===\n");

    let mut strict = LoanForm::new(CalculatorConfig::strict());

    // unparsable text is rejected, the old value stays
    if let Err(e) = strict.set_interest_rate("3,9") {
        println!("rejected edit: {}", e);
    }
    println!("interest rate is still {}\n", strict.inputs().interest_rate());

    // negative rates parse, but strict evaluation refuses them
    strict.set_amortization_rate("-1")?;
    match strict.results() {
        Ok(results) => println!("unexpected results: {:?}", results),
        Err(e) => println!("strict evaluation failed: {}\n", e),
    }

    // permissive evaluation calculates whatever was entered
    let mut permissive = LoanForm::new(CalculatorConfig::permissive());
    permissive.set_amortization_rate("-1")?;
    println!("permissive summary:");
    println!("{}", permissive.summary()?);

    Ok(())
}
