use chrono::NaiveDate;
use hourglass_rs::{SafeTimeProvider, TimeSource};
use serde::{Deserialize, Serialize};

use crate::decimal::{Money, Rate};
use crate::errors::{Result, ScheduleError};
use crate::schedule::maturity;
use crate::types::PaymentFrequency;

/// contractual terms a schedule is generated from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoanTerms {
    pub principal: Money,
    pub annual_interest_rate: Rate,
    pub term_months: u32,
    #[serde(default)]
    pub frequency: PaymentFrequency,
    pub start_date: NaiveDate,
}

impl LoanTerms {
    pub fn new(
        principal: Money,
        annual_interest_rate: Rate,
        term_months: u32,
        frequency: PaymentFrequency,
        start_date: NaiveDate,
    ) -> Self {
        Self {
            principal,
            annual_interest_rate,
            term_months,
            frequency,
            start_date,
        }
    }

    pub fn builder<'a>() -> LoanTermsBuilder<'a> {
        LoanTermsBuilder::new()
    }

    /// 30-year monthly mortgage
    pub fn mortgage(principal: Money, rate: Rate, start_date: NaiveDate) -> Self {
        Self::new(principal, rate, 360, PaymentFrequency::Monthly, start_date)
    }

    /// monthly personal loan
    pub fn personal_loan(
        principal: Money,
        rate: Rate,
        term_months: u32,
        start_date: NaiveDate,
    ) -> Self {
        Self::new(principal, rate, term_months, PaymentFrequency::Monthly, start_date)
    }

    /// true when the engine would produce an empty schedule
    pub fn is_degenerate(&self) -> bool {
        !self.principal.is_positive() || self.term_months == 0
    }

    /// strict validation for callers that want errors instead of an empty schedule
    pub fn validate(&self) -> Result<()> {
        if !self.principal.is_positive() {
            return Err(ScheduleError::InvalidPrincipal {
                amount: self.principal,
            });
        }

        if self.term_months == 0 {
            return Err(ScheduleError::InvalidTerm {
                months: self.term_months,
            });
        }

        if self.annual_interest_rate.is_negative() {
            return Err(ScheduleError::InvalidInterestRate {
                rate: self.annual_interest_rate,
            });
        }

        Ok(())
    }

    pub fn maturity_date(&self) -> Result<NaiveDate> {
        maturity::maturity_date(self.start_date, self.term_months)
    }

    /// parse terms from json, validating them strictly
    pub fn from_json(json: &str) -> Result<Self> {
        let terms: Self =
            serde_json::from_str(json).map_err(|e| ScheduleError::InvalidConfiguration {
                message: e.to_string(),
            })?;
        terms.validate()?;
        Ok(terms)
    }
}

/// builder for loan terms
pub struct LoanTermsBuilder<'a> {
    principal: Option<Money>,
    rate: Option<Rate>,
    term_months: Option<u32>,
    frequency: PaymentFrequency,
    start_date: Option<NaiveDate>,
    time_provider: Option<&'a SafeTimeProvider>,
}

impl<'a> Default for LoanTermsBuilder<'a> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> LoanTermsBuilder<'a> {
    pub fn new() -> Self {
        Self {
            principal: None,
            rate: None,
            term_months: None,
            frequency: PaymentFrequency::Monthly,
            start_date: None,
            time_provider: None,
        }
    }

    /// start date defaults to this provider's current date
    pub fn set_time(mut self, time: &'a SafeTimeProvider) -> Self {
        self.time_provider = Some(time);
        self
    }

    pub fn principal(mut self, principal: Money) -> Self {
        self.principal = Some(principal);
        self
    }

    pub fn rate(mut self, rate: Rate) -> Self {
        self.rate = Some(rate);
        self
    }

    pub fn term_months(mut self, months: u32) -> Self {
        self.term_months = Some(months);
        self
    }

    pub fn frequency(mut self, frequency: PaymentFrequency) -> Self {
        self.frequency = frequency;
        self
    }

    pub fn start_date(mut self, date: NaiveDate) -> Self {
        self.start_date = Some(date);
        self
    }

    /// Build with the stored time provider, or system time if none was set
    pub fn build(self) -> Result<LoanTerms> {
        match self.time_provider {
            Some(time) => self.build_with_time(time),
            None => {
                let time = SafeTimeProvider::new(TimeSource::System);
                self.build_with_time(&time)
            }
        }
    }

    pub fn build_with_time(self, time_provider: &SafeTimeProvider) -> Result<LoanTerms> {
        let principal = self.principal.ok_or(ScheduleError::InvalidConfiguration {
            message: "Principal required".to_string(),
        })?;

        let rate = self.rate.ok_or(ScheduleError::InvalidConfiguration {
            message: "Rate required".to_string(),
        })?;

        let term_months = self.term_months.ok_or(ScheduleError::InvalidConfiguration {
            message: "Term required".to_string(),
        })?;

        let start_date = self
            .start_date
            .unwrap_or_else(|| time_provider.now().date_naive());

        let terms = LoanTerms::new(principal, rate, term_months, self.frequency, start_date);
        terms.validate()?;
        Ok(terms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use rust_decimal_macros::dec;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_builder_defaults_start_date_from_time_provider() {
        let time = SafeTimeProvider::new(TimeSource::Test(
            Utc.with_ymd_and_hms(2024, 3, 15, 9, 30, 0).unwrap(),
        ));

        let terms = LoanTerms::builder()
            .principal(Money::from_major(25_000))
            .rate(Rate::from_bps(725))
            .term_months(60)
            .set_time(&time)
            .build()
            .unwrap();

        assert_eq!(terms.start_date, date(2024, 3, 15));
        assert_eq!(terms.frequency, PaymentFrequency::Monthly);
        assert_eq!(terms.annual_interest_rate.as_decimal(), dec!(0.0725));
    }

    #[test]
    fn test_builder_explicit_start_date_wins() {
        let time = SafeTimeProvider::new(TimeSource::Test(
            Utc.with_ymd_and_hms(2024, 3, 15, 0, 0, 0).unwrap(),
        ));

        let terms = LoanTerms::builder()
            .principal(Money::from_major(10_000))
            .rate(Rate::from_percentage(5))
            .term_months(24)
            .frequency(PaymentFrequency::Quarterly)
            .start_date(date(2023, 1, 31))
            .build_with_time(&time)
            .unwrap();

        assert_eq!(terms.start_date, date(2023, 1, 31));
        assert_eq!(terms.frequency, PaymentFrequency::Quarterly);
    }

    #[test]
    fn test_builder_missing_fields() {
        let result = LoanTerms::builder()
            .rate(Rate::from_percentage(5))
            .term_months(12)
            .build();
        assert!(matches!(result, Err(ScheduleError::InvalidConfiguration { .. })));

        let result = LoanTerms::builder()
            .principal(Money::from_major(1_000))
            .term_months(12)
            .build();
        assert!(matches!(result, Err(ScheduleError::InvalidConfiguration { .. })));
    }

    #[test]
    fn test_strict_validation() {
        let start = date(2024, 1, 1);

        let terms = LoanTerms::personal_loan(Money::ZERO, Rate::from_percentage(5), 12, start);
        assert!(terms.is_degenerate());
        assert!(matches!(terms.validate(), Err(ScheduleError::InvalidPrincipal { .. })));

        let terms = LoanTerms::personal_loan(Money::from_major(1_000), Rate::ZERO, 0, start);
        assert!(terms.is_degenerate());
        assert!(matches!(terms.validate(), Err(ScheduleError::InvalidTerm { months: 0 })));

        let terms = LoanTerms::personal_loan(
            Money::from_major(1_000),
            Rate::from_decimal(dec!(-0.01)),
            12,
            start,
        );
        assert!(!terms.is_degenerate());
        assert!(matches!(terms.validate(), Err(ScheduleError::InvalidInterestRate { .. })));

        // zero-rate loans are valid
        let terms = LoanTerms::personal_loan(Money::from_major(1_000), Rate::ZERO, 12, start);
        assert!(terms.validate().is_ok());
    }

    #[test]
    fn test_mortgage_preset() {
        let terms = LoanTerms::mortgage(
            Money::from_major(300_000),
            Rate::from_bps(650),
            date(2024, 1, 1),
        );
        assert_eq!(terms.term_months, 360);
        assert_eq!(terms.frequency, PaymentFrequency::Monthly);
        assert_eq!(terms.maturity_date().unwrap(), date(2054, 1, 1));
    }

    #[test]
    fn test_from_json() {
        let json = r#"{
            "principal": "100000",
            "annual_interest_rate": "0.06",
            "term_months": 360,
            "frequency": "quarterly",
            "start_date": "2024-01-01"
        }"#;

        let terms = LoanTerms::from_json(json).unwrap();
        assert_eq!(terms.principal, Money::from_major(100_000));
        assert_eq!(terms.annual_interest_rate, Rate::from_percentage(6));
        assert_eq!(terms.frequency, PaymentFrequency::Quarterly);

        // frequency is optional and defaults to monthly
        let json = r#"{
            "principal": "5000",
            "annual_interest_rate": "0",
            "term_months": 10,
            "start_date": "2024-06-30"
        }"#;
        let terms = LoanTerms::from_json(json).unwrap();
        assert_eq!(terms.frequency, PaymentFrequency::Monthly);

        let json = r#"{
            "principal": "0",
            "annual_interest_rate": "0.05",
            "term_months": 12,
            "start_date": "2024-01-01"
        }"#;
        assert!(matches!(LoanTerms::from_json(json), Err(ScheduleError::InvalidPrincipal { .. })));
    }
}
