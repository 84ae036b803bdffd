use rust_decimal::Decimal;

use crate::config::ScheduleConfig;
use crate::decimal::{Money, Rate};
use crate::errors::{Result, ScheduleError};
use crate::terms::LoanTerms;

/// level payment for the terms' frequency.
///
/// The monthly annuity payment is scaled by the number of months per
/// installment (x3 quarterly, x12 annually) rather than re-solved with a
/// compounded period rate. Quarterly and annual amounts therefore differ
/// slightly from a true period annuity.
pub fn level_payment(terms: &LoanTerms, config: &ScheduleConfig) -> Result<Money> {
    let monthly = monthly_payment(terms.principal, terms.annual_interest_rate, terms.term_months)?;
    let months = Decimal::from(terms.frequency.months_between_installments());

    Ok(config.round(monthly * months))
}

/// monthly annuity payment; zero for non-positive principal or an empty term
pub fn monthly_payment(principal: Money, annual_rate: Rate, term_months: u32) -> Result<Money> {
    if !principal.is_positive() || term_months == 0 {
        return Ok(Money::ZERO);
    }

    let r = annual_rate.monthly_rate().as_decimal();

    // straight line: the annuity formula is 0/0 at a zero rate
    if r.is_zero() {
        return Ok(principal / Decimal::from(term_months));
    }

    // P * r * (1 + r)^n / ((1 + r)^n - 1)
    let compound = compound_factor(r, term_months)?;
    let numerator = principal
        .as_decimal()
        .checked_mul(r)
        .and_then(|x| x.checked_mul(compound))
        .ok_or_else(|| overflow(principal, annual_rate, term_months))?;
    let denominator = compound - Decimal::ONE;

    // the factor can collapse back to one; fall back to straight line as at a zero rate
    if denominator.is_zero() {
        return Ok(principal / Decimal::from(term_months));
    }

    numerator
        .checked_div(denominator)
        .map(Money::from_decimal)
        .ok_or_else(|| overflow(principal, annual_rate, term_months))
}

/// (1 + r)^n
fn compound_factor(r: Decimal, n: u32) -> Result<Decimal> {
    let base = Decimal::ONE + r;
    let mut compound = Decimal::ONE;
    for _ in 0..n {
        compound = compound
            .checked_mul(base)
            .ok_or_else(|| ScheduleError::CalculationError {
                message: format!("compound factor overflowed at monthly rate {r} over {n} months"),
            })?;
    }
    Ok(compound)
}

fn overflow(principal: Money, rate: Rate, term_months: u32) -> ScheduleError {
    ScheduleError::CalculationError {
        message: format!(
            "payment for {principal} at {rate} over {term_months} months overflowed"
        ),
    }
}
