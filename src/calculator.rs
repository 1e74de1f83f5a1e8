use rust_decimal::Decimal;

use crate::config::CalculatorConfig;
use crate::decimal::MonthlyAmount;
use crate::errors::Result;
use crate::types::{LoanInputs, LoanResults};
use crate::validation::validate;

/// balloon mortgage calculator
///
/// Uses the straight-line model of an endfaelliges Darlehen: annual
/// interest and annual amortization are flat percentages of the
/// original principal, not of a declining balance. Whatever has not
/// been amortized after `years` is due as a single balloon payment.
#[derive(Debug, Clone, Default)]
pub struct MortgageCalculator {
    config: CalculatorConfig,
}

impl MortgageCalculator {
    pub fn new(config: CalculatorConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &CalculatorConfig {
        &self.config
    }

    /// derive the payment figures from the inputs as entered
    ///
    /// No policy checks or clamping: zero and negative values flow
    /// through the arithmetic. [`LoanInputs`] are range-checked when
    /// built, so this never overflows. Callers handling untrusted input
    /// should go through [`MortgageCalculator::evaluate`].
    pub fn calculate(inputs: &LoanInputs) -> LoanResults {
        let principal = inputs.principal();
        let annual_amortization = principal.portion(inputs.amortization_rate());
        let annual_interest = principal.portion(inputs.interest_rate());

        let monthly_amortization = MonthlyAmount::from_annual(annual_amortization);
        let monthly_interest = MonthlyAmount::from_annual(annual_interest);
        let monthly_payment = monthly_amortization + monthly_interest;

        let total_amortization = annual_amortization * Decimal::from(inputs.years());
        let balloon_payment = principal - total_amortization;

        LoanResults {
            monthly_payment,
            monthly_amortization,
            monthly_interest,
            total_amortization,
            balloon_payment,
            annual_amortization,
            annual_interest,
        }
    }

    /// validate under the configured policy, then calculate
    pub fn evaluate(&self, inputs: &LoanInputs) -> Result<LoanResults> {
        if let Err(e) = validate(inputs, self.config.validation) {
            tracing::warn!(error = %e, policy = ?self.config.validation, "rejected loan inputs");
            return Err(e);
        }

        let results = Self::calculate(inputs);
        tracing::debug!(
            principal = %inputs.principal(),
            interest_rate = %inputs.interest_rate(),
            amortization_rate = %inputs.amortization_rate(),
            years = inputs.years(),
            monthly_payment = %results.monthly_payment,
            balloon_payment = %results.balloon_payment,
            "calculated balloon mortgage"
        );
        Ok(results)
    }
}
