//! Rate tables: statutory deductions, budget weights, borrowing limits, and
//! down-payment interest discounts

mod borrowing;
mod budget;
mod deductions;
mod discount;
pub mod loader;

pub use borrowing::{BorrowingLimits, LimitTier};
pub use budget::{BudgetWeights, CategoryWeights};
pub use deductions::DeductionRates;
pub use discount::{DiscountBand, RateDiscountTable};
pub use loader::LoadedRates;

use std::path::Path;

/// Container for all configuration tables used by the planner
#[derive(Debug, Clone, Default)]
pub struct Rates {
    pub deductions: DeductionRates,
    pub budget: BudgetWeights,
    pub borrowing: BorrowingLimits,
    pub discounts: RateDiscountTable,
}

impl Rates {
    /// Create rates with the built-in values (Czech statutory rates, 2023)
    pub fn default_czech_2023() -> Self {
        Self::default()
    }

    /// Load rates from CSV files in the default location (data/rates/)
    pub fn from_csv() -> Result<Self, Box<dyn std::error::Error>> {
        Self::from_csv_path(Path::new(loader::DEFAULT_RATES_PATH))
    }

    /// Load rates from CSV files in a specific directory
    pub fn from_csv_path(path: &Path) -> Result<Self, Box<dyn std::error::Error>> {
        let loaded = LoadedRates::load_from(path)?;

        Ok(Self {
            deductions: DeductionRates::from_loaded(&loaded),
            budget: BudgetWeights::from_loaded(&loaded),
            borrowing: BorrowingLimits::from_loaded(&loaded),
            discounts: RateDiscountTable::from_loaded(&loaded),
        })
    }
}
