/// serialization support for schedules
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::decimal::{Money, Rate};
use crate::schedule::{AmortizationSchedule, Installment};
use crate::types::{LoanId, PaymentFrequency};

/// serializable view of a generated schedule
#[derive(Debug, Serialize, Deserialize)]
pub struct ScheduleView {
    pub loan_id: LoanId,
    pub summary: SummaryView,
    pub installments: Vec<InstallmentView>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SummaryView {
    pub principal: Money,
    pub annual_interest_rate: Rate,
    pub term_months: u32,
    pub frequency: PaymentFrequency,
    pub start_date: NaiveDate,
    pub maturity_date: NaiveDate,
    pub total_payments: u32,
    pub recurring_payment_amount: Money,
    pub final_payment_amount: Option<Money>,
    pub total_interest: Money,
    pub total_principal: Money,
    pub total_amount_due: Money,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct InstallmentView {
    pub payment_number: u32,
    pub scheduled_date: NaiveDate,
    pub due_date: NaiveDate,
    pub amount_due: Money,
    pub principal_amount: Money,
    pub interest_amount: Money,
    pub remaining_balance: Money,
}

impl From<&Installment> for InstallmentView {
    fn from(installment: &Installment) -> Self {
        InstallmentView {
            payment_number: installment.payment_number,
            scheduled_date: installment.scheduled_date,
            due_date: installment.due_date,
            amount_due: installment.amount_due,
            principal_amount: installment.principal_amount,
            interest_amount: installment.interest_amount,
            remaining_balance: installment.remaining_balance,
        }
    }
}

impl ScheduleView {
    /// build a view, optionally rounding every amount for display
    pub fn from_schedule(schedule: &AmortizationSchedule, display_scale: Option<u32>) -> Self {
        let show = |amount: Money| match display_scale {
            Some(dp) => amount.round_dp(dp),
            None => amount,
        };

        ScheduleView {
            loan_id: schedule.loan_id,
            summary: SummaryView {
                principal: show(schedule.terms.principal),
                annual_interest_rate: schedule.terms.annual_interest_rate,
                term_months: schedule.terms.term_months,
                frequency: schedule.terms.frequency,
                start_date: schedule.terms.start_date,
                maturity_date: schedule.maturity_date,
                total_payments: schedule.total_payments,
                recurring_payment_amount: show(schedule.recurring_payment_amount),
                final_payment_amount: schedule.final_installment().map(|i| show(i.amount_due)),
                total_interest: show(schedule.total_interest),
                total_principal: show(schedule.total_principal),
                total_amount_due: show(schedule.total_amount_due),
            },
            installments: schedule
                .installments
                .iter()
                .map(|i| {
                    let mut view = InstallmentView::from(i);
                    view.amount_due = show(view.amount_due);
                    view.principal_amount = show(view.principal_amount);
                    view.interest_amount = show(view.interest_amount);
                    view.remaining_balance = show(view.remaining_balance);
                    view
                })
                .collect(),
        }
    }

    /// convert to pretty-printed json string
    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

impl AmortizationSchedule {
    pub fn view(&self) -> ScheduleView {
        ScheduleView::from_schedule(self, None)
    }

    /// pretty json with amounts shown in whole cents
    pub fn json(&self) -> Result<String, serde_json::Error> {
        ScheduleView::from_schedule(self, Some(2)).to_json_pretty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::terms::LoanTerms;
    use rust_decimal_macros::dec;
    use uuid::Uuid;

    fn schedule() -> AmortizationSchedule {
        let terms = LoanTerms::new(
            Money::from_major(10_000),
            Rate::from_bps(650),
            12,
            PaymentFrequency::Quarterly,
            NaiveDate::from_ymd_opt(2024, 2, 1).unwrap(),
        );
        AmortizationSchedule::generate(Uuid::new_v4(), &terms).unwrap()
    }

    #[test]
    fn test_view_summary() {
        let schedule = schedule();
        let view = schedule.view();

        assert_eq!(view.loan_id, schedule.loan_id);
        assert_eq!(view.summary.total_payments, 4);
        assert_eq!(view.summary.maturity_date, NaiveDate::from_ymd_opt(2025, 2, 1).unwrap());
        assert_eq!(view.installments.len(), 4);
        assert_eq!(
            view.summary.final_payment_amount,
            Some(schedule.installments[3].amount_due)
        );
    }

    #[test]
    fn test_display_rounding() {
        let schedule = schedule();
        let view = ScheduleView::from_schedule(&schedule, Some(2));

        for row in &view.installments {
            assert_eq!(row.amount_due, row.amount_due.round_dp(2));
            assert_eq!(row.interest_amount, row.interest_amount.round_dp(2));
        }
        assert_eq!(view.summary.principal.as_decimal(), dec!(10000));
    }

    #[test]
    fn test_json_output() {
        let schedule = schedule();
        let json = schedule.json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["summary"]["frequency"], "quarterly");
        assert_eq!(value["summary"]["total_payments"], 4);
        assert_eq!(value["installments"][0]["payment_number"], 1);
        assert_eq!(value["installments"][0]["due_date"], "2024-02-01");
        // 10,000 * 6.5% / 12 * 3
        assert_eq!(value["installments"][0]["interest_amount"], "162.50");
    }
}
