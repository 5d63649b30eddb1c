//! Smartvesting - Home-affordability planning engine
//!
//! This library provides:
//! - Net income derivation from gross salary under statutory deduction rates
//! - Month-by-month mortgage amortization with insurance and extra payments
//! - Rule-based budgeting, emergency-fund checks, and borrowing limits
//! - Savings-horizon projections for mortgage and cash purchase strategies

pub mod error;
pub mod person;
pub mod rates;
pub mod mortgage;
pub mod planner;

// Re-export commonly used types
pub use error::PlanError;
pub use person::{IncomeModel, Person};
pub use rates::Rates;
pub use mortgage::{AmortizationRow, AmortizationSchedule, LoanParameters, MortgageEngine};
pub use planner::{AffordabilityPlanner, BudgetAllocation, HouseStrategy};
