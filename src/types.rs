use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::decimal::{Money, MonthlyAmount, Rate};
use crate::errors::{CalculatorError, Result};
use crate::validation::{check_range, MAX_PRINCIPAL, MAX_RATE_PERCENT};

/// the four values a borrower enters
///
/// Only constructible inside the accepted magnitude range, so every
/// value of this type can be calculated without overflow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawLoanInputs")]
pub struct LoanInputs {
    principal: Money,
    /// annual interest rate on the original principal
    interest_rate: Rate,
    /// annual repayment (tilgung) rate on the original principal
    amortization_rate: Rate,
    years: u32,
}

/// wire form of [`LoanInputs`] before the range check
#[derive(Deserialize)]
struct RawLoanInputs {
    principal: Money,
    interest_rate: Rate,
    amortization_rate: Rate,
    years: u32,
}

impl TryFrom<RawLoanInputs> for LoanInputs {
    type Error = CalculatorError;

    fn try_from(raw: RawLoanInputs) -> Result<Self> {
        LoanInputs::new(raw.principal, raw.interest_rate, raw.amortization_rate, raw.years)
    }
}

impl LoanInputs {
    pub fn new(principal: Money, interest_rate: Rate, amortization_rate: Rate, years: u32) -> Result<Self> {
        check_range(principal, interest_rate, amortization_rate)?;
        Ok(Self {
            principal,
            interest_rate,
            amortization_rate,
            years,
        })
    }

    /// create from plain floats, rates given in percent per year
    pub fn from_f64(
        principal: f64,
        interest_percent: f64,
        amortization_percent: f64,
        years: u32,
    ) -> Result<Self> {
        let fields = [
            ("principal", principal),
            ("interest rate", interest_percent),
            ("amortization rate", amortization_percent),
        ];
        for (field, value) in fields {
            if !value.is_finite() {
                return Err(CalculatorError::NonFiniteInput { field });
            }
        }

        // finite but beyond the decimal range
        let principal = Money::from_f64(principal).ok_or(CalculatorError::OutOfRange {
            field: "principal",
            limit: MAX_PRINCIPAL,
        })?;
        let interest_rate = Rate::from_percentage_f64(interest_percent).ok_or(CalculatorError::OutOfRange {
            field: "interest rate",
            limit: MAX_RATE_PERCENT,
        })?;
        let amortization_rate =
            Rate::from_percentage_f64(amortization_percent).ok_or(CalculatorError::OutOfRange {
                field: "amortization rate",
                limit: MAX_RATE_PERCENT,
            })?;

        Self::new(principal, interest_rate, amortization_rate, years)
    }

    pub fn principal(&self) -> Money {
        self.principal
    }

    pub fn interest_rate(&self) -> Rate {
        self.interest_rate
    }

    pub fn amortization_rate(&self) -> Rate {
        self.amortization_rate
    }

    pub fn years(&self) -> u32 {
        self.years
    }

    /// same loan over a different term; the term never affects the range
    pub fn with_years(self, years: u32) -> Self {
        Self { years, ..self }
    }
}

impl Default for LoanInputs {
    /// 465,000 at 3.9% interest and 1.5% amortization over 10 years
    fn default() -> Self {
        Self {
            principal: Money::from_major(465_000),
            interest_rate: Rate::from_percentage(dec!(3.9)),
            amortization_rate: Rate::from_percentage(dec!(1.5)),
            years: 10,
        }
    }
}

/// derived payment figures for one set of inputs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LoanResults {
    pub monthly_payment: MonthlyAmount,
    pub monthly_amortization: MonthlyAmount,
    pub monthly_interest: MonthlyAmount,
    /// principal repaid by the end of the term
    pub total_amortization: Money,
    /// principal still owed at the end of the term
    pub balloon_payment: Money,
    pub annual_amortization: Money,
    pub annual_interest: Money,
}

impl LoanResults {
    /// true when nothing is left to pay at maturity
    pub fn is_fully_amortized(&self) -> bool {
        !self.balloon_payment.is_positive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_inputs_match_form_defaults() {
        let inputs = LoanInputs::default();

        assert_eq!(inputs.principal(), Money::from_major(465_000));
        assert_eq!(inputs.interest_rate().as_percentage(), dec!(3.9));
        assert_eq!(inputs.amortization_rate().as_percentage(), dec!(1.5));
        assert_eq!(inputs.years(), 10);
    }

    #[test]
    fn test_from_f64() {
        let inputs = LoanInputs::from_f64(500_000.0, 3.9, 1.5, 10).unwrap();

        assert_eq!(inputs.principal(), Money::from_major(500_000));
        assert_eq!(inputs.interest_rate(), Rate::from_percentage(dec!(3.9)));
        assert_eq!(inputs.amortization_rate(), Rate::from_percentage(dec!(1.5)));
    }

    #[test]
    fn test_from_f64_rejects_nan() {
        let err = LoanInputs::from_f64(f64::NAN, 3.9, 1.5, 10).unwrap_err();
        assert_eq!(err, CalculatorError::NonFiniteInput { field: "principal" });

        let err = LoanInputs::from_f64(465_000.0, 3.9, f64::INFINITY, 10).unwrap_err();
        assert_eq!(err, CalculatorError::NonFiniteInput { field: "amortization rate" });
    }

    #[test]
    fn test_from_f64_finite_but_too_large() {
        let err = LoanInputs::from_f64(1e30, 3.9, 1.5, 10).unwrap_err();
        assert_eq!(err, CalculatorError::OutOfRange { field: "principal", limit: MAX_PRINCIPAL });

        let err = LoanInputs::from_f64(465_000.0, -1e40, 1.5, 10).unwrap_err();
        assert!(matches!(err, CalculatorError::OutOfRange { field: "interest rate", .. }));
    }

    #[test]
    fn test_new_rejects_out_of_range() {
        let err = LoanInputs::new(
            Money::from_decimal(dec!(100000000000000000000)),
            Rate::from_percentage(dec!(3.9)),
            Rate::from_percentage(dec!(1.5)),
            10,
        )
        .unwrap_err();
        assert_eq!(err, CalculatorError::OutOfRange { field: "principal", limit: MAX_PRINCIPAL });

        let err = LoanInputs::new(
            Money::from_major(465_000),
            Rate::from_percentage(dec!(3.9)),
            Rate::from_percentage(dec!(200000)),
            10,
        )
        .unwrap_err();
        assert!(matches!(err, CalculatorError::OutOfRange { field: "amortization rate", .. }));
    }

    #[test]
    fn test_with_years_keeps_the_rest() {
        let inputs = LoanInputs::default().with_years(u32::MAX);

        assert_eq!(inputs.years(), u32::MAX);
        assert_eq!(inputs.principal(), Money::from_major(465_000));
    }

    #[test]
    fn test_inputs_json_shape() {
        let json = serde_json::to_value(LoanInputs::default()).unwrap();

        assert_eq!(json["principal"], "465000");
        assert_eq!(json["years"], 10);

        let back: LoanInputs = serde_json::from_value(json).unwrap();
        assert_eq!(back, LoanInputs::default());
    }

    #[test]
    fn test_deserialize_checks_range() {
        let json = r#"{
            "principal": "100000000000000000000",
            "interest_rate": "0.039",
            "amortization_rate": "0.015",
            "years": 4294967295
        }"#;

        let err = serde_json::from_str::<LoanInputs>(json).unwrap_err();
        assert!(err.to_string().contains("principal"));
    }

    #[test]
    fn test_results_serialize_monthly_values() {
        let results = crate::calculator::MortgageCalculator::calculate(&LoanInputs::default());
        let json = serde_json::to_value(results).unwrap();

        let figure = |key: &str| json[key].as_str().unwrap().parse::<rust_decimal::Decimal>().unwrap();
        assert_eq!(figure("monthly_payment"), dec!(2092.5));
        assert_eq!(figure("monthly_amortization"), dec!(581.25));
        assert_eq!(figure("balloon_payment"), dec!(395250));
    }
}
