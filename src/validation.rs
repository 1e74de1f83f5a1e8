use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::config::ValidationPolicy;
use crate::decimal::{Money, Rate};
use crate::errors::{CalculatorError, Result};
use crate::types::LoanInputs;

/// largest principal magnitude accepted, in currency units
pub const MAX_PRINCIPAL: Decimal = dec!(1000000000000000);

/// largest rate magnitude accepted, in percent per year
pub const MAX_RATE_PERCENT: Decimal = dec!(100000);

/// reject magnitudes whose products could leave the decimal range
///
/// Runs whenever [`LoanInputs`] are built, whatever the policy. With
/// u32 years the largest product is below 5e27, inside the ~7.9e28
/// decimal limit.
pub fn check_range(principal: Money, interest_rate: Rate, amortization_rate: Rate) -> Result<()> {
    if principal.as_decimal().abs() > MAX_PRINCIPAL {
        return Err(CalculatorError::OutOfRange {
            field: "principal",
            limit: MAX_PRINCIPAL,
        });
    }
    let rates = [("interest rate", interest_rate), ("amortization rate", amortization_rate)];
    for (field, rate) in rates {
        if rate.as_decimal().abs() > MAX_RATE_PERCENT / Decimal::ONE_HUNDRED {
            return Err(CalculatorError::OutOfRange {
                field,
                limit: MAX_RATE_PERCENT,
            });
        }
    }
    Ok(())
}

/// check inputs against the policy before calculating
///
/// A zero-year term is always accepted: it simply leaves the whole
/// principal as the balloon payment.
pub fn validate(inputs: &LoanInputs, policy: ValidationPolicy) -> Result<()> {
    match policy {
        ValidationPolicy::Permissive => Ok(()),
        ValidationPolicy::Strict => {
            if !inputs.principal().is_positive() {
                return Err(CalculatorError::NonPositivePrincipal {
                    principal: inputs.principal(),
                });
            }
            if inputs.interest_rate().is_negative() {
                return Err(CalculatorError::NegativeRate {
                    field: "interest rate",
                    rate: inputs.interest_rate(),
                });
            }
            if inputs.amortization_rate().is_negative() {
                return Err(CalculatorError::NegativeRate {
                    field: "amortization rate",
                    rate: inputs.amortization_rate(),
                });
            }
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn loan(principal: i64, interest: Decimal, amortization: Decimal) -> LoanInputs {
        LoanInputs::new(
            Money::from_major(principal),
            Rate::from_percentage(interest),
            Rate::from_percentage(amortization),
            10,
        )
        .unwrap()
    }

    #[test]
    fn test_defaults_pass_strict() {
        assert!(validate(&LoanInputs::default(), ValidationPolicy::Strict).is_ok());
    }

    #[test]
    fn test_strict_rejects_non_positive_principal() {
        assert_eq!(
            validate(&loan(0, dec!(3.9), dec!(1.5)), ValidationPolicy::Strict),
            Err(CalculatorError::NonPositivePrincipal { principal: Money::ZERO })
        );
        assert!(validate(&loan(-1, dec!(3.9), dec!(1.5)), ValidationPolicy::Strict).is_err());
    }

    #[test]
    fn test_strict_rejects_negative_rates() {
        let err = validate(&loan(465_000, dec!(-0.5), dec!(1.5)), ValidationPolicy::Strict).unwrap_err();
        assert_eq!(
            err,
            CalculatorError::NegativeRate {
                field: "interest rate",
                rate: Rate::from_percentage(dec!(-0.5)),
            }
        );

        assert!(matches!(
            validate(&loan(465_000, dec!(3.9), dec!(-1)), ValidationPolicy::Strict),
            Err(CalculatorError::NegativeRate { field: "amortization rate", .. })
        ));
    }

    #[test]
    fn test_zero_rates_and_term_are_valid() {
        let inputs = loan(100_000, dec!(0), dec!(0)).with_years(0);
        assert!(validate(&inputs, ValidationPolicy::Strict).is_ok());
    }

    #[test]
    fn test_range_check_applies_to_huge_values() {
        let defaults = LoanInputs::default();
        assert!(check_range(defaults.principal(), defaults.interest_rate(), defaults.amortization_rate()).is_ok());

        assert_eq!(
            check_range(
                Money::from_decimal(dec!(100000000000000000000)),
                defaults.interest_rate(),
                defaults.amortization_rate(),
            ),
            Err(CalculatorError::OutOfRange { field: "principal", limit: MAX_PRINCIPAL })
        );

        assert!(matches!(
            check_range(
                defaults.principal(),
                Rate::from_percentage(dec!(-200000)),
                defaults.amortization_rate(),
            ),
            Err(CalculatorError::OutOfRange { field: "interest rate", .. })
        ));

        // the limits themselves are accepted
        assert!(check_range(
            Money::from_decimal(-MAX_PRINCIPAL),
            Rate::from_percentage(MAX_RATE_PERCENT),
            Rate::from_percentage(-MAX_RATE_PERCENT),
        )
        .is_ok());
    }

    #[test]
    fn test_permissive_accepts_anything() {
        let inputs = loan(-5, dec!(-3), dec!(-1)).with_years(0);
        assert!(validate(&inputs, ValidationPolicy::Permissive).is_ok());
    }
}
