/// json summary - configure display from json and print the summary view
use balloon_mortgage_rs::{CalculatorConfig, LoanForm};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== json summary ===\n");

    let config = CalculatorConfig::from_json(
        r#"{
            "validation": "Strict",
            "display": { "currency_symbol": "EUR ", "decimal_places": 2 }
        }"#,
    )?;

    let mut form = LoanForm::new(config);
    form.set_principal("500000")?;

    let summary = form.summary()?;
    println!("{}", summary.to_json_pretty()?);

    Ok(())
}
