//! Budget weight tables tiered by gross salary

/// Per-category budget fractions of net monthly income
///
/// The four weights are expected to sum to 1; the planner validates the
/// resulting allocation against net income at construction.
#[derive(Debug, Clone, Copy)]
pub struct CategoryWeights {
    pub housing: f64,
    pub groceries: f64,
    pub savings_and_investments: f64,
    pub leisure: f64,
}

/// Budget weights with a gross-salary tier split
///
/// Higher earners spend proportionally less on groceries and shift the
/// difference into savings; housing is capped at 30% and leisure at 20%
/// regardless of income.
#[derive(Debug, Clone)]
pub struct BudgetWeights {
    /// Gross monthly salary at or below which the standard tier applies
    pub gross_salary_threshold: f64,

    /// Weights for gross salary <= threshold
    pub standard: CategoryWeights,

    /// Weights for gross salary > threshold
    pub high_income: CategoryWeights,
}

impl Default for BudgetWeights {
    fn default() -> Self {
        Self {
            gross_salary_threshold: 110_000.0,
            standard: CategoryWeights {
                housing: 0.30,
                groceries: 0.20,
                savings_and_investments: 0.30,
                leisure: 0.20,
            },
            high_income: CategoryWeights {
                housing: 0.30,
                groceries: 0.15,
                savings_and_investments: 0.35,
                leisure: 0.20,
            },
        }
    }
}

impl BudgetWeights {
    /// Select the weight tier for a given gross monthly salary
    pub fn for_gross_salary(&self, gross_salary: f64) -> &CategoryWeights {
        if gross_salary <= self.gross_salary_threshold {
            &self.standard
        } else {
            &self.high_income
        }
    }

    /// Create from loaded CSV rates, falling back to defaults for missing keys
    pub fn from_loaded(loaded: &super::loader::LoadedRates) -> Self {
        let defaults = Self::default();
        Self {
            gross_salary_threshold: loaded
                .budget_weight("gross_salary_threshold", defaults.gross_salary_threshold),
            standard: CategoryWeights {
                housing: loaded.budget_weight("housing", defaults.standard.housing),
                groceries: loaded.budget_weight("groceries_standard", defaults.standard.groceries),
                savings_and_investments: loaded.budget_weight(
                    "savings_standard",
                    defaults.standard.savings_and_investments,
                ),
                leisure: loaded.budget_weight("leisure", defaults.standard.leisure),
            },
            high_income: CategoryWeights {
                housing: loaded.budget_weight("housing", defaults.high_income.housing),
                groceries: loaded
                    .budget_weight("groceries_high_income", defaults.high_income.groceries),
                savings_and_investments: loaded.budget_weight(
                    "savings_high_income",
                    defaults.high_income.savings_and_investments,
                ),
                leisure: loaded.budget_weight("leisure", defaults.high_income.leisure),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tier_boundary() {
        let weights = BudgetWeights::default();

        // Exactly at the threshold selects the standard tier
        let at = weights.for_gross_salary(110_000.0);
        assert_eq!(at.groceries, 0.20);
        assert_eq!(at.savings_and_investments, 0.30);

        let above = weights.for_gross_salary(110_000.01);
        assert_eq!(above.groceries, 0.15);
        assert_eq!(above.savings_and_investments, 0.35);

        // Housing and leisure do not move across tiers
        assert_eq!(at.housing, above.housing);
        assert_eq!(at.leisure, above.leisure);
    }
}
