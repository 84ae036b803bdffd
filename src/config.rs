use serde::{Deserialize, Serialize};

use crate::decimal::{Money, MONEY_SCALE};
use crate::errors::{Result, ScheduleError};

/// schedule generation settings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct ScheduleConfig {
    /// decimal places the level payment and each interest charge are rounded to;
    /// `None` keeps full internal precision
    #[serde(default)]
    pub currency_scale: Option<u32>,
}

impl ScheduleConfig {
    /// statement amounts in whole cents
    pub fn cents() -> Self {
        Self {
            currency_scale: Some(2),
        }
    }

    pub fn with_currency_scale(scale: u32) -> Result<Self> {
        let config = Self {
            currency_scale: Some(scale),
        };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        match self.currency_scale {
            Some(scale) if scale > MONEY_SCALE => Err(ScheduleError::InvalidConfiguration {
                message: format!("currency scale {scale} exceeds internal precision {MONEY_SCALE}"),
            }),
            _ => Ok(()),
        }
    }

    /// load from json
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| ScheduleError::InvalidConfiguration {
                message: e.to_string(),
            })?;
        config.validate()?;
        Ok(config)
    }

    /// apply the configured rounding to an amount
    pub fn round(&self, amount: Money) -> Money {
        match self.currency_scale {
            Some(scale) => amount.round_dp(scale),
            None => amount,
        }
    }
}
