/// form session - edit fields one at a time, recalculating after each edit
use balloon_mortgage_rs::{CalculatorConfig, LoanField, LoanForm};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug")))
        .init();

    println!("=== form session example ===\n");

    let mut form = LoanForm::new(CalculatorConfig::default());
    for field in LoanField::ALL {
        println!("{}: {}", field.label(), form.value(field));
    }
    println!("\n{}", form.summary()?);

    // simulate typing into the fields
    let edits = [
        (LoanField::Principal, "500000"),
        (LoanField::Years, "15"),
        (LoanField::AmortizationRate, "2"),
    ];
    for (field, text) in edits {
        form.edit(field, text)?;
        println!("after setting {} to {}:", field, text);
        println!("{}", form.summary()?);
    }

    Ok(())
}
