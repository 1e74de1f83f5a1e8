use thiserror::Error;

use crate::decimal::{Money, Rate};

#[derive(Error, Debug, Clone, PartialEq)]
pub enum CalculatorError {
    #[error("invalid number for {field}: {input:?}")]
    InvalidNumber {
        field: &'static str,
        input: String,
    },

    #[error("non-finite value for {field}")]
    NonFiniteInput {
        field: &'static str,
    },

    #[error("principal must be positive: {principal}")]
    NonPositivePrincipal {
        principal: Money,
    },

    #[error("{field} must not be negative: {rate}")]
    NegativeRate {
        field: &'static str,
        rate: Rate,
    },

    #[error("{field} is outside the supported range of +/-{limit}")]
    OutOfRange {
        field: &'static str,
        limit: rust_decimal::Decimal,
    },

    #[error("invalid term: {input:?} is not a whole number of years")]
    InvalidTerm {
        input: String,
    },

    #[error("invalid configuration: {message}")]
    InvalidConfiguration {
        message: String,
    },
}

pub type Result<T> = std::result::Result<T, CalculatorError>;
