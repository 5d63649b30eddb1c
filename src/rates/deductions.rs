//! Statutory deduction rates applied to gross salary

/// Flat deduction rates and the monthly taxpayer credit
///
/// These are static configuration, not computed from external sources; the
/// defaults match the Czech rates for 2023.
#[derive(Debug, Clone)]
pub struct DeductionRates {
    /// Income tax rate on gross salary
    pub income_tax: f64,

    /// Social security contribution rate
    pub social_security: f64,

    /// Health care contribution rate
    pub health_care: f64,

    /// Flat monthly credit added back after deductions
    pub taxpayer_monthly_credit: f64,
}

impl Default for DeductionRates {
    fn default() -> Self {
        Self {
            income_tax: 0.15,
            social_security: 0.065,
            health_care: 0.045,
            taxpayer_monthly_credit: 2570.0,
        }
    }
}

impl DeductionRates {
    /// Combined deduction rate applied to gross salary
    pub fn total_rate(&self) -> f64 {
        self.income_tax + self.social_security + self.health_care
    }

    /// Create from loaded CSV rates, falling back to defaults for missing keys
    pub fn from_loaded(loaded: &super::loader::LoadedRates) -> Self {
        let defaults = Self::default();
        Self {
            income_tax: loaded.deduction("income_tax", defaults.income_tax),
            social_security: loaded.deduction("social_security", defaults.social_security),
            health_care: loaded.deduction("health_care", defaults.health_care),
            taxpayer_monthly_credit: loaded
                .deduction("taxpayer_monthly_credit", defaults.taxpayer_monthly_credit),
        }
    }
}
