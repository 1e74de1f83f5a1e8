pub mod calculator;
pub mod config;
pub mod decimal;
pub mod errors;
pub mod form;
pub mod summary;
pub mod types;
pub mod validation;

// re-export key types
pub use calculator::MortgageCalculator;
pub use config::{CalculatorConfig, DisplayConfig, ValidationPolicy};
pub use decimal::{Money, MonthlyAmount, Rate};
pub use errors::{CalculatorError, Result};
pub use form::{LoanField, LoanForm};
pub use summary::{PaymentSummary, SummaryLine};
pub use types::{LoanInputs, LoanResults};

// re-export external dependencies that users will need
pub use rust_decimal::Decimal;
