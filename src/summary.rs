//! display view of a calculation, labelled like the results panel

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::config::DisplayConfig;
use crate::decimal::{Money, MonthlyAmount, Rate};
use crate::types::{LoanInputs, LoanResults};

/// one labelled figure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryLine {
    pub label: String,
    pub amount: Money,
    /// amount rounded for display, e.g. "€2092.50"
    pub formatted: String,
}

impl SummaryLine {
    fn new(label: impl Into<String>, amount: Money, display: &DisplayConfig) -> Self {
        Self {
            label: label.into(),
            amount,
            formatted: with_symbol(amount.to_fixed(display.decimal_places), display),
        }
    }

    /// monthly figures round once, straight from the yearly total
    fn monthly(label: impl Into<String>, amount: MonthlyAmount, display: &DisplayConfig) -> Self {
        Self {
            label: label.into(),
            amount: amount.as_money(),
            formatted: with_symbol(amount.to_fixed(display.decimal_places), display),
        }
    }
}

/// serializable payment summary
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentSummary {
    pub loan: LoanView,
    pub monthly_payment: SummaryLine,
    pub monthly_amortization: SummaryLine,
    pub monthly_interest: SummaryLine,
    pub total_amortization: SummaryLine,
    pub balloon_payment: SummaryLine,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoanView {
    pub principal: Money,
    pub interest_rate: Rate,
    pub amortization_rate: Rate,
    pub years: u32,
}

impl PaymentSummary {
    pub fn new(inputs: &LoanInputs, results: &LoanResults, display: &DisplayConfig) -> Self {
        PaymentSummary {
            loan: LoanView {
                principal: inputs.principal(),
                interest_rate: inputs.interest_rate(),
                amortization_rate: inputs.amortization_rate(),
                years: inputs.years(),
            },
            monthly_payment: SummaryLine::monthly("Monthly Payment", results.monthly_payment, display),
            monthly_amortization: SummaryLine::monthly(
                "Monthly Amortization",
                results.monthly_amortization,
                display,
            ),
            monthly_interest: SummaryLine::monthly("Monthly Interest", results.monthly_interest, display),
            total_amortization: SummaryLine::new(
                format!("Total Amortization After {} Years", inputs.years()),
                results.total_amortization,
                display,
            ),
            balloon_payment: SummaryLine::new("Balloon Payment", results.balloon_payment, display),
        }
    }

    /// figures in the order they appear on the results panel
    pub fn lines(&self) -> [&SummaryLine; 5] {
        [
            &self.monthly_payment,
            &self.monthly_amortization,
            &self.monthly_interest,
            &self.total_amortization,
            &self.balloon_payment,
        ]
    }

    /// convert to pretty-printed json string
    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

impl fmt::Display for PaymentSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in self.lines() {
            writeln!(f, "{}: {}", line.label, line.formatted)?;
        }
        Ok(())
    }
}

fn with_symbol(fixed: String, display: &DisplayConfig) -> String {
    match fixed.strip_prefix('-') {
        Some(digits) => format!("-{}{}", display.currency_symbol, digits),
        None => format!("{}{}", display.currency_symbol, fixed),
    }
}
