/// quick start - minimal example to get started
use loan_amortization_rs::{AmortizationSchedule, LoanTerms, Money, Rate, Uuid};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    // $100,000 at 6% over 30 years, monthly
    let terms = LoanTerms::builder()
        .principal(Money::from_major(100_000))
        .rate(Rate::from_percentage(6))
        .term_months(360)
        .build()?;

    let schedule = AmortizationSchedule::generate(Uuid::new_v4(), &terms)?;

    println!("monthly payment: {}", schedule.recurring_payment_amount.round_dp(2));
    println!("total interest:  {}", schedule.total_interest.round_dp(2));
    println!("maturity date:   {}", schedule.maturity_date);

    for installment in schedule.installments.iter().take(3) {
        println!(
            "#{:<3} {}  interest {:>8}  principal {:>8}  balance {:>10}",
            installment.payment_number,
            installment.due_date,
            installment.interest_amount.round_dp(2),
            installment.principal_amount.round_dp(2),
            installment.remaining_balance.round_dp(2),
        );
    }

    Ok(())
}
