/// quick start - calculate a balloon mortgage
use balloon_mortgage_rs::{LoanInputs, MortgageCalculator};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 465,000 at 3.9% interest, 1.5% amortization, 10 years
    let inputs = LoanInputs::from_f64(465_000.0, 3.9, 1.5, 10)?;
    let results = MortgageCalculator::calculate(&inputs);

    println!("monthly payment:    {}", results.monthly_payment.to_fixed(2));
    println!("  amortization:     {}", results.monthly_amortization.to_fixed(2));
    println!("  interest:         {}", results.monthly_interest.to_fixed(2));
    println!("total amortization: {}", results.total_amortization.to_fixed(2));
    println!("balloon payment:    {}", results.balloon_payment.to_fixed(2));

    Ok(())
}
