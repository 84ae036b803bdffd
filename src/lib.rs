pub mod config;
pub mod decimal;
pub mod errors;
pub mod schedule;
pub mod serialization;
pub mod terms;
pub mod types;

// re-export key types
pub use config::ScheduleConfig;
pub use decimal::{Money, Rate};
pub use errors::{Result, ScheduleError};
pub use schedule::{
    level_payment, maturity_date, monthly_payment, months_between_installments,
    number_of_installments, AmortizationSchedule, Installment, ScheduleBuilder,
};
pub use serialization::ScheduleView;
pub use terms::{LoanTerms, LoanTermsBuilder};
pub use types::{LoanId, PaymentFrequency};

// re-export external dependencies that users will need
pub use chrono;
pub use hourglass_rs::{SafeTimeProvider, TimeSource};
pub use rust_decimal::Decimal;
pub use uuid::Uuid;
