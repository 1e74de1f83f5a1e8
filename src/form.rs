use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::calculator::MortgageCalculator;
use crate::config::CalculatorConfig;
use crate::decimal::{Money, Rate};
use crate::errors::{CalculatorError, Result};
use crate::summary::PaymentSummary;
use crate::types::{LoanInputs, LoanResults};

/// editable input fields
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LoanField {
    Principal,
    InterestRate,
    AmortizationRate,
    Years,
}

impl LoanField {
    pub const ALL: [LoanField; 4] = [
        LoanField::Principal,
        LoanField::InterestRate,
        LoanField::AmortizationRate,
        LoanField::Years,
    ];

    /// field label shown next to the input
    pub fn label(&self) -> &'static str {
        match self {
            LoanField::Principal => "Principal Amount (€)",
            LoanField::InterestRate => "Interest Rate (% per year)",
            LoanField::AmortizationRate => "Amortization Rate (% per year)",
            LoanField::Years => "Term (years)",
        }
    }

    fn name(&self) -> &'static str {
        match self {
            LoanField::Principal => "principal",
            LoanField::InterestRate => "interest rate",
            LoanField::AmortizationRate => "amortization rate",
            LoanField::Years => "years",
        }
    }
}

impl fmt::Display for LoanField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// one calculator session: current inputs, recalculated on every read
///
/// Nothing is cached. Each edit overwrites one input and the next call
/// to [`LoanForm::results`] recomputes every figure from scratch.
#[derive(Debug, Clone, Default)]
pub struct LoanForm {
    calculator: MortgageCalculator,
    inputs: LoanInputs,
}

impl LoanForm {
    /// form pre-filled with the default loan
    pub fn new(config: CalculatorConfig) -> Self {
        Self::with_inputs(config, LoanInputs::default())
    }

    pub fn with_inputs(config: CalculatorConfig, inputs: LoanInputs) -> Self {
        Self {
            calculator: MortgageCalculator::new(config),
            inputs,
        }
    }

    pub fn inputs(&self) -> &LoanInputs {
        &self.inputs
    }

    pub fn config(&self) -> &CalculatorConfig {
        self.calculator.config()
    }

    /// apply raw text typed into a field
    ///
    /// Empty text reads as zero. Text that is not a number, or a number
    /// outside the accepted range, leaves the previous value in place
    /// and returns an error.
    pub fn edit(&mut self, field: LoanField, text: &str) -> Result<()> {
        let current = self.inputs;
        let updated = match field {
            LoanField::Years => parse_years(text).map(|years| current.with_years(years)),
            LoanField::Principal => parse_number(field, text).and_then(|d| {
                LoanInputs::new(
                    Money::from_decimal(d),
                    current.interest_rate(),
                    current.amortization_rate(),
                    current.years(),
                )
            }),
            LoanField::InterestRate => parse_number(field, text).and_then(|d| {
                LoanInputs::new(
                    current.principal(),
                    Rate::from_percentage(d),
                    current.amortization_rate(),
                    current.years(),
                )
            }),
            LoanField::AmortizationRate => parse_number(field, text).and_then(|d| {
                LoanInputs::new(
                    current.principal(),
                    current.interest_rate(),
                    Rate::from_percentage(d),
                    current.years(),
                )
            }),
        };

        match updated {
            Ok(inputs) => {
                self.inputs = inputs;
                tracing::debug!(%field, text, "loan input updated");
                Ok(())
            }
            Err(e) => {
                tracing::warn!(%field, text, error = %e, "loan input rejected");
                Err(e)
            }
        }
    }

    pub fn set_principal(&mut self, text: &str) -> Result<()> {
        self.edit(LoanField::Principal, text)
    }

    pub fn set_interest_rate(&mut self, text: &str) -> Result<()> {
        self.edit(LoanField::InterestRate, text)
    }

    pub fn set_amortization_rate(&mut self, text: &str) -> Result<()> {
        self.edit(LoanField::AmortizationRate, text)
    }

    pub fn set_years(&mut self, text: &str) -> Result<()> {
        self.edit(LoanField::Years, text)
    }

    /// current value of a field, formatted for an input box
    pub fn value(&self, field: LoanField) -> String {
        match field {
            LoanField::Principal => self.inputs.principal().as_decimal().normalize().to_string(),
            LoanField::InterestRate => self.inputs.interest_rate().as_percentage().to_string(),
            LoanField::AmortizationRate => self.inputs.amortization_rate().as_percentage().to_string(),
            LoanField::Years => self.inputs.years().to_string(),
        }
    }

    /// recalculate from the current inputs
    pub fn results(&self) -> Result<LoanResults> {
        self.calculator.evaluate(&self.inputs)
    }

    /// recalculate and build the display view
    pub fn summary(&self) -> Result<PaymentSummary> {
        let results = self.results()?;
        Ok(PaymentSummary::new(&self.inputs, &results, &self.config().display))
    }
}

/// parse a numeric field the way a number input coerces its text
fn parse_number(field: LoanField, text: &str) -> Result<Decimal> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Ok(Decimal::ZERO);
    }

    let parsed = if trimmed.contains(['e', 'E']) {
        Decimal::from_scientific(trimmed)
    } else {
        Decimal::from_str(trimmed)
    };

    parsed.map_err(|_| CalculatorError::InvalidNumber {
        field: field.name(),
        input: text.to_string(),
    })
}

/// parse the term; must be a non-negative whole number of years
fn parse_years(text: &str) -> Result<u32> {
    let value = parse_number(LoanField::Years, text)?;
    if !value.fract().is_zero() || (value.is_sign_negative() && !value.is_zero()) {
        return Err(CalculatorError::InvalidTerm {
            input: text.to_string(),
        });
    }
    value.trunc().to_u32().ok_or_else(|| CalculatorError::InvalidTerm {
        input: text.to_string(),
    })
}
