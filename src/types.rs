use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

use crate::errors::ScheduleError;

/// unique identifier for a loan
pub type LoanId = Uuid;

/// how often installments fall due
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum PaymentFrequency {
    #[default]
    Monthly,
    Quarterly,
    Annually,
}

impl fmt::Display for PaymentFrequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PaymentFrequency::Monthly => "monthly",
            PaymentFrequency::Quarterly => "quarterly",
            PaymentFrequency::Annually => "annually",
        };
        f.write_str(name)
    }
}

impl FromStr for PaymentFrequency {
    type Err = ScheduleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "monthly" => Ok(PaymentFrequency::Monthly),
            "quarterly" => Ok(PaymentFrequency::Quarterly),
            "annually" | "annual" | "yearly" => Ok(PaymentFrequency::Annually),
            other => Err(ScheduleError::InvalidConfiguration {
                message: format!("unknown payment frequency: {other}"),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frequency_parsing() {
        assert_eq!("Monthly".parse::<PaymentFrequency>().unwrap(), PaymentFrequency::Monthly);
        assert_eq!(" quarterly ".parse::<PaymentFrequency>().unwrap(), PaymentFrequency::Quarterly);
        assert_eq!("annual".parse::<PaymentFrequency>().unwrap(), PaymentFrequency::Annually);
        assert!("weekly".parse::<PaymentFrequency>().is_err());
    }

    #[test]
    fn test_frequency_serde_names() {
        let json = serde_json::to_string(&PaymentFrequency::Quarterly).unwrap();
        assert_eq!(json, "\"quarterly\"");

        let parsed: PaymentFrequency = serde_json::from_str("\"annually\"").unwrap();
        assert_eq!(parsed, PaymentFrequency::Annually);
        assert_eq!(parsed.to_string(), "annually");
    }
}
