//! Affordability planning: budgets, stability checks, borrowing limits, and
//! purchase timelines

mod budget;
mod engine;

pub use budget::{BudgetAllocation, BudgetCategory};
pub use engine::{
    AffordabilityPlanner, BorrowingCapacity, FinancialStability, HouseStrategy, HouseTimeline,
    EMERGENCY_FUND_MONTHS,
};
