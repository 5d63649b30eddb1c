//! Mortgage amortization engine and schedule output

mod engine;
mod schedule;

pub use engine::{LoanParameters, MortgageEngine, MAXIMUM_ANNUAL_INTEREST_RATE};
pub use schedule::{AmortizationRow, AmortizationSchedule, ScheduleSummary};
