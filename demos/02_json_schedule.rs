/// json schedule - load terms from json and print the schedule view
use loan_amortization_rs::{AmortizationSchedule, LoanTerms, Uuid};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let terms = LoanTerms::from_json(
        r#"{
            "principal": "12000",
            "annual_interest_rate": "0",
            "term_months": 12,
            "frequency": "quarterly",
            "start_date": "2024-03-01"
        }"#,
    )?;

    let schedule = AmortizationSchedule::generate(Uuid::new_v4(), &terms)?;
    println!("{}", schedule.json()?);

    Ok(())
}
