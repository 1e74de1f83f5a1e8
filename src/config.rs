use serde::{Deserialize, Serialize};

use crate::errors::{CalculatorError, Result};

/// calculator configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct CalculatorConfig {
    pub validation: ValidationPolicy,
    pub display: DisplayConfig,
}

/// how inputs are checked before calculating
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum ValidationPolicy {
    /// positive principal and non-negative rates required
    #[default]
    Strict,
    /// any finite value is calculated as entered
    Permissive,
}

/// display settings for the payment summary
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    pub currency_symbol: String,
    pub decimal_places: u32,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            currency_symbol: "€".to_string(),
            decimal_places: 2,
        }
    }
}

impl CalculatorConfig {
    /// create strict configuration
    pub fn strict() -> Self {
        Self::default()
    }

    /// create configuration that calculates whatever is entered
    pub fn permissive() -> Self {
        Self {
            validation: ValidationPolicy::Permissive,
            ..Self::default()
        }
    }

    /// load from json, missing fields take their defaults
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json).map_err(|e| {
            CalculatorError::InvalidConfiguration {
                message: e.to_string(),
            }
        })?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        // Decimal carries at most 28 fractional digits
        if self.display.decimal_places > 28 {
            return Err(CalculatorError::InvalidConfiguration {
                message: format!(
                    "decimal_places must be at most 28, got {}",
                    self.display.decimal_places
                ),
            });
        }
        Ok(())
    }
}
