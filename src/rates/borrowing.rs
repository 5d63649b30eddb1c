//! Age-tiered borrowing limits (DTI and LTV caps)

/// Caps for one age bracket
///
/// DTI is the total debt allowed relative to net annual income; LTV is the
/// maximum loan relative to the property price.
#[derive(Debug, Clone, Copy)]
pub struct LimitTier {
    pub max_dti: f64,
    pub max_ltv: f64,
}

/// Borrowing limits split at an age threshold
#[derive(Debug, Clone)]
pub struct BorrowingLimits {
    /// Age below which the younger tier applies
    pub age_threshold: u8,

    /// Tier for age < threshold
    pub under_threshold: LimitTier,

    /// Tier for age >= threshold
    pub over_threshold: LimitTier,
}

impl Default for BorrowingLimits {
    fn default() -> Self {
        Self {
            age_threshold: 35,
            under_threshold: LimitTier {
                max_dti: 9.5,
                max_ltv: 0.9,
            },
            over_threshold: LimitTier {
                max_dti: 8.5,
                max_ltv: 0.8,
            },
        }
    }
}

impl BorrowingLimits {
    /// Select the tier for a given age
    pub fn tier_for_age(&self, age: u8) -> &LimitTier {
        if age < self.age_threshold {
            &self.under_threshold
        } else {
            &self.over_threshold
        }
    }

    /// Maximum total debt permitted for a given net annual income
    pub fn max_debt(&self, age: u8, net_annual_income: f64) -> f64 {
        net_annual_income * self.tier_for_age(age).max_dti
    }

    /// Maximum amount a bank will lend against a given property price
    pub fn max_loan_value(&self, age: u8, property_price: f64) -> f64 {
        property_price * self.tier_for_age(age).max_ltv
    }

    /// Create from loaded CSV rates, falling back to defaults for missing tiers
    pub fn from_loaded(loaded: &super::loader::LoadedRates) -> Self {
        let mut limits = Self::default();
        if let Some(tier) = loaded.borrowing_tier("under_35") {
            limits.under_threshold = tier;
        }
        if let Some(tier) = loaded.borrowing_tier("35_and_over") {
            limits.over_threshold = tier;
        }
        limits
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_age_tiers() {
        let limits = BorrowingLimits::default();

        assert_eq!(limits.tier_for_age(34).max_dti, 9.5);
        assert_eq!(limits.tier_for_age(35).max_dti, 8.5);
        assert_eq!(limits.tier_for_age(60).max_ltv, 0.8);
    }

    #[test]
    fn test_limit_amounts() {
        let limits = BorrowingLimits::default();

        // Age 30, net annual income 600k: 600000 * 9.5
        assert_relative_eq!(limits.max_debt(30, 600_000.0), 5_700_000.0);
        // Property 2M at 90% LTV
        assert_relative_eq!(limits.max_loan_value(30, 2_000_000.0), 1_800_000.0);

        // Older tier
        assert_relative_eq!(limits.max_debt(40, 600_000.0), 5_100_000.0);
        assert_relative_eq!(limits.max_loan_value(40, 2_000_000.0), 1_600_000.0);
    }
}
