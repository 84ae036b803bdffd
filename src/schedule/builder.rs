use log::{debug, trace, warn};
use rust_decimal::Decimal;

use crate::config::ScheduleConfig;
use crate::decimal::Money;
use crate::errors::Result;
use crate::schedule::{maturity, sizing, AmortizationSchedule, Installment};
use crate::terms::LoanTerms;
use crate::types::LoanId;

/// builds level-payment schedules on a declining balance
#[derive(Debug, Clone, Copy, Default)]
pub struct ScheduleBuilder {
    config: ScheduleConfig,
}

impl ScheduleBuilder {
    pub fn new(config: ScheduleConfig) -> Self {
        Self { config }
    }

    /// Generate the full schedule for `terms`.
    ///
    /// Each installment charges interest on the outstanding balance for the
    /// months it covers; the rest of the level payment retires principal. The
    /// final installment takes whatever balance is left, so the schedule always
    /// ends at exactly zero and the principal column sums to the loan amount.
    ///
    /// Non-positive principal or a zero term yields an empty schedule.
    pub fn build(&self, loan_id: LoanId, terms: &LoanTerms) -> Result<AmortizationSchedule> {
        if terms.is_degenerate() {
            // an empty schedule never fails, even when the term overruns the calendar
            let maturity_date = maturity::maturity_date(terms.start_date, terms.term_months)
                .unwrap_or(terms.start_date);
            debug!(
                "loan {loan_id}: principal {} over {} months produces an empty schedule",
                terms.principal, terms.term_months
            );
            return Ok(AmortizationSchedule {
                loan_id,
                terms: *terms,
                maturity_date,
                installments: Vec::new(),
                total_payments: 0,
                recurring_payment_amount: Money::ZERO,
                total_interest: Money::ZERO,
                total_principal: Money::ZERO,
                total_amount_due: Money::ZERO,
            });
        }

        let maturity_date = maturity::maturity_date(terms.start_date, terms.term_months)?;

        let count = terms.frequency.number_of_installments(terms.term_months);
        let period_months = terms.frequency.months_between_installments();
        let period_rate =
            terms.annual_interest_rate.monthly_rate().as_decimal() * Decimal::from(period_months);
        let payment = sizing::level_payment(terms, &self.config)?;

        debug!(
            "loan {loan_id}: {} installments of {payment} ({}) for {} at {} over {} months",
            count, terms.frequency, terms.principal, terms.annual_interest_rate, terms.term_months
        );

        let mut installments = Vec::with_capacity(count as usize);
        let mut remaining_balance = terms.principal;
        let mut current_date = terms.start_date;

        for payment_number in 1..=count {
            let interest_amount = self.config.round(remaining_balance * period_rate);
            let is_final = payment_number == count;

            let (principal_amount, amount_due) = if is_final {
                // absorb any drift so the loan closes at exactly zero
                (remaining_balance, remaining_balance + interest_amount)
            } else {
                let scheduled = payment - interest_amount;
                let principal_amount = scheduled.min(remaining_balance).max(Money::ZERO);
                if principal_amount != scheduled {
                    warn!(
                        "loan {loan_id}: installment {payment_number} principal {scheduled} clamped to {principal_amount} against balance {remaining_balance}"
                    );
                }
                (principal_amount, payment)
            };

            remaining_balance -= principal_amount;

            trace!(
                "loan {loan_id}: #{payment_number} {current_date} due {amount_due} = principal {principal_amount} + interest {interest_amount}, balance {remaining_balance}"
            );

            installments.push(Installment {
                payment_number,
                scheduled_date: current_date,
                due_date: current_date,
                amount_due,
                principal_amount,
                interest_amount,
                remaining_balance,
            });

            if !is_final {
                // step from the start date so month-end anchors do not drift
                current_date =
                    maturity::add_months(terms.start_date, payment_number * period_months)?;
            }
        }

        let total_interest = installments
            .iter()
            .map(|i| i.interest_amount)
            .fold(Money::ZERO, |acc, x| acc + x);

        let total_principal = installments
            .iter()
            .map(|i| i.principal_amount)
            .fold(Money::ZERO, |acc, x| acc + x);

        let total_amount_due = installments
            .iter()
            .map(|i| i.amount_due)
            .fold(Money::ZERO, |acc, x| acc + x);

        Ok(AmortizationSchedule {
            loan_id,
            terms: *terms,
            maturity_date,
            total_payments: count,
            installments,
            recurring_payment_amount: payment,
            total_interest,
            total_principal,
            total_amount_due,
        })
    }
}
