use crate::types::PaymentFrequency;

impl PaymentFrequency {
    /// calendar months from one installment to the next
    pub fn months_between_installments(self) -> u32 {
        match self {
            PaymentFrequency::Monthly => 1,
            PaymentFrequency::Quarterly => 3,
            PaymentFrequency::Annually => 12,
        }
    }

    /// installments needed to cover the term; a trailing partial period still
    /// gets its own installment
    pub fn number_of_installments(self, term_months: u32) -> u32 {
        match self {
            PaymentFrequency::Monthly => term_months,
            PaymentFrequency::Quarterly | PaymentFrequency::Annually => {
                term_months.div_ceil(self.months_between_installments())
            }
        }
    }
}

pub fn months_between_installments(frequency: PaymentFrequency) -> u32 {
    frequency.months_between_installments()
}

pub fn number_of_installments(term_months: u32, frequency: PaymentFrequency) -> u32 {
    frequency.number_of_installments(term_months)
}
