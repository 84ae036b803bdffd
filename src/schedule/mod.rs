pub mod builder;
pub mod maturity;
pub mod period;
pub mod sizing;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::config::ScheduleConfig;
use crate::decimal::Money;
use crate::errors::Result;
use crate::terms::LoanTerms;
use crate::types::LoanId;

pub use builder::ScheduleBuilder;
pub use maturity::maturity_date;
pub use period::{months_between_installments, number_of_installments};
pub use sizing::{level_payment, monthly_payment};

/// one row of an amortization schedule
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Installment {
    pub payment_number: u32,
    pub scheduled_date: NaiveDate,
    /// always equal to `scheduled_date`; there is no grace period
    pub due_date: NaiveDate,
    pub amount_due: Money,
    pub principal_amount: Money,
    pub interest_amount: Money,
    pub remaining_balance: Money,
}

/// amortization schedule
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AmortizationSchedule {
    pub loan_id: LoanId,
    pub terms: LoanTerms,
    pub maturity_date: NaiveDate,
    pub installments: Vec<Installment>,
    pub total_payments: u32,
    pub recurring_payment_amount: Money,
    pub total_interest: Money,
    pub total_principal: Money,
    pub total_amount_due: Money,
}

impl AmortizationSchedule {
    /// generate payment schedule at full internal precision
    pub fn generate(loan_id: LoanId, terms: &LoanTerms) -> Result<Self> {
        ScheduleBuilder::default().build(loan_id, terms)
    }

    pub fn generate_with_config(
        loan_id: LoanId,
        terms: &LoanTerms,
        config: ScheduleConfig,
    ) -> Result<Self> {
        ScheduleBuilder::new(config).build(loan_id, terms)
    }

    pub fn is_empty(&self) -> bool {
        self.installments.is_empty()
    }

    /// get installment by its 1-based payment number
    pub fn get_installment(&self, payment_number: u32) -> Option<&Installment> {
        let index = payment_number.checked_sub(1)?;
        self.installments.get(index as usize)
    }

    pub fn final_installment(&self) -> Option<&Installment> {
        self.installments.last()
    }

    /// outstanding balance once `payment_number` installments have been paid
    pub fn balance_after_payment(&self, payment_number: u32) -> Money {
        if payment_number == 0 || self.is_empty() {
            return self.terms.principal.max(Money::ZERO);
        }

        self.get_installment(payment_number)
            .or_else(|| self.final_installment())
            .map(|i| i.remaining_balance)
            .unwrap_or(Money::ZERO)
    }

    /// installments falling due strictly after `date`
    pub fn remaining_installments_after(&self, date: NaiveDate) -> &[Installment] {
        let paid = self.installments.partition_point(|i| i.due_date <= date);
        &self.installments[paid..]
    }

    /// the first installment due on or after `date`
    pub fn next_due_on_or_after(&self, date: NaiveDate) -> Option<&Installment> {
        let index = self.installments.partition_point(|i| i.due_date < date);
        self.installments.get(index)
    }
}
