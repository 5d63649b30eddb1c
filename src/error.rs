//! Error taxonomy for affordability calculations
//!
//! Every failure is raised at the point of detection; the engine performs no
//! retries and never returns partial results.

use thiserror::Error;

/// Errors produced by the income model, mortgage engine, and planner
#[derive(Debug, Clone, Error, PartialEq)]
pub enum PlanError {
    /// Negative or out-of-domain input (salary, price, rate, ...)
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Rounded budget categories do not sum to rounded net monthly income.
    /// Signals a misconfigured weight table.
    #[error(
        "budget categories sum to {allocated:.0} but net monthly income rounds to \
         {net_monthly_income:.0}; check that the budget weights add up to 1"
    )]
    BudgetIntegrity {
        allocated: f64,
        net_monthly_income: f64,
    },

    /// A savings target remains unmet while the monthly contribution is <= 0,
    /// so the savings horizon would never terminate.
    #[error("savings plan cannot converge: monthly saving is {monthly_saving:.2}")]
    NonConvergingPlan { monthly_saving: f64 },

    /// Strategy outside the supported set
    #[error("unsupported strategy '{0}'; supported strategies: mortgage, cash")]
    UnsupportedStrategy(String),
}

pub type Result<T> = std::result::Result<T, PlanError>;
