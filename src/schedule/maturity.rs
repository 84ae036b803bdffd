use chrono::{Months, NaiveDate};

use crate::errors::{Result, ScheduleError};

/// contractual end date: start plus the full term in calendar months.
/// month-end starts clamp to the last day of the target month.
pub fn maturity_date(start_date: NaiveDate, term_months: u32) -> Result<NaiveDate> {
    add_months(start_date, term_months)
}

pub(crate) fn add_months(date: NaiveDate, months: u32) -> Result<NaiveDate> {
    date.checked_add_months(Months::new(months))
        .ok_or_else(|| ScheduleError::InvalidDate {
            message: format!("{date} plus {months} months is out of range"),
        })
}
