/// frequencies - the same loan paid monthly, quarterly and annually
use chrono::NaiveDate;
use loan_amortization_rs::{
    AmortizationSchedule, LoanTerms, Money, PaymentFrequency, Rate, ScheduleConfig, Uuid,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let start = NaiveDate::from_ymd_opt(2024, 1, 31).ok_or("invalid start date")?;

    println!("=== $50,000 at 7.25% over 62 months ===\n");

    for frequency in [
        PaymentFrequency::Monthly,
        PaymentFrequency::Quarterly,
        PaymentFrequency::Annually,
    ] {
        let terms = LoanTerms::new(
            Money::from_major(50_000),
            Rate::from_bps(725),
            62,
            frequency,
            start,
        );
        let schedule =
            AmortizationSchedule::generate_with_config(Uuid::new_v4(), &terms, ScheduleConfig::cents())?;

        let last = schedule.final_installment().ok_or("empty schedule")?;
        println!(
            "{:<9} {:>3} installments of {:>9}, final {:>9} on {}, interest {:>9}",
            frequency.to_string(),
            schedule.total_payments,
            schedule.recurring_payment_amount,
            last.amount_due,
            last.due_date,
            schedule.total_interest,
        );
    }

    Ok(())
}
