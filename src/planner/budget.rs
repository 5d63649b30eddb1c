//! Budget categories and the monthly allocation

use serde::{Deserialize, Serialize};

/// Closed set of budget categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BudgetCategory {
    Housing,
    Groceries,
    SavingsAndInvestments,
    Leisure,
}

impl BudgetCategory {
    pub const ALL: [BudgetCategory; 4] = [
        BudgetCategory::Housing,
        BudgetCategory::Groceries,
        BudgetCategory::SavingsAndInvestments,
        BudgetCategory::Leisure,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            BudgetCategory::Housing => "housing",
            BudgetCategory::Groceries => "groceries",
            BudgetCategory::SavingsAndInvestments => "savings_and_investments",
            BudgetCategory::Leisure => "leisure",
        }
    }
}

/// Monthly budget amounts per category
///
/// Each amount is independently rounded to the nearest whole currency unit;
/// the planner validates that the four amounts sum to rounded net monthly
/// income at construction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BudgetAllocation {
    pub housing: f64,
    pub groceries: f64,
    pub savings_and_investments: f64,
    pub leisure: f64,
}

impl BudgetAllocation {
    /// Amount allocated to one category
    pub fn amount(&self, category: BudgetCategory) -> f64 {
        match category {
            BudgetCategory::Housing => self.housing,
            BudgetCategory::Groceries => self.groceries,
            BudgetCategory::SavingsAndInvestments => self.savings_and_investments,
            BudgetCategory::Leisure => self.leisure,
        }
    }

    /// Sum across all categories
    pub fn total(&self) -> f64 {
        BudgetCategory::ALL
            .iter()
            .map(|&category| self.amount(category))
            .sum()
    }
}
