//! CSV-based rate loader
//!
//! Loads rate tables from CSV files in data/rates/

use std::collections::HashMap;
use std::error::Error;
use std::fs::File;
use std::path::Path;

use super::discount::DiscountBand;
use super::LimitTier;

/// Default path to the rates directory
pub const DEFAULT_RATES_PATH: &str = "data/rates";

/// Load key/value deduction rates from CSV
pub fn load_deduction_rates(path: &Path) -> Result<HashMap<String, f64>, Box<dyn Error>> {
    let file = File::open(path.join("deduction_rates.csv"))?;
    let mut reader = csv::Reader::from_reader(file);

    let mut rates = HashMap::new();

    for result in reader.records() {
        let record = result?;
        let name = record[0].to_string();
        let value: f64 = record[1].parse()?;
        rates.insert(name, value);
    }

    Ok(rates)
}

/// Load key/value budget weights from CSV
pub fn load_budget_weights(path: &Path) -> Result<HashMap<String, f64>, Box<dyn Error>> {
    let file = File::open(path.join("budget_weights.csv"))?;
    let mut reader = csv::Reader::from_reader(file);

    let mut weights = HashMap::new();

    for result in reader.records() {
        let record = result?;
        let name = record[0].to_string();
        let value: f64 = record[1].parse()?;
        weights.insert(name, value);
    }

    Ok(weights)
}

/// Load borrowing limit tiers from CSV
/// Returns tier name -> (max_dti, max_ltv)
pub fn load_borrowing_limits(path: &Path) -> Result<HashMap<String, (f64, f64)>, Box<dyn Error>> {
    let file = File::open(path.join("borrowing_limits.csv"))?;
    let mut reader = csv::Reader::from_reader(file);

    let mut tiers = HashMap::new();

    for result in reader.records() {
        let record = result?;
        let tier = record[0].to_string();
        let max_dti: f64 = record[1].parse()?;
        let max_ltv: f64 = record[2].parse()?;
        tiers.insert(tier, (max_dti, max_ltv));
    }

    Ok(tiers)
}

/// Load rate discount bands from CSV
pub fn load_rate_discounts(path: &Path) -> Result<Vec<DiscountBand>, Box<dyn Error>> {
    let file = File::open(path.join("rate_discounts.csv"))?;
    let mut reader = csv::Reader::from_reader(file);

    let mut bands = Vec::new();

    for result in reader.records() {
        let record = result?;
        bands.push(DiscountBand {
            min_down_pct: record[0].parse()?,
            max_down_pct: record[1].parse()?,
            multiplier: record[2].parse()?,
        });
    }

    Ok(bands)
}

/// All rate tables loaded from a directory
#[derive(Debug, Clone)]
pub struct LoadedRates {
    pub deductions: HashMap<String, f64>,
    pub budget_weights: HashMap<String, f64>,
    pub borrowing: HashMap<String, (f64, f64)>,
    /// None when the optional rate_discounts.csv is absent
    pub discount_bands: Option<Vec<DiscountBand>>,
}

impl LoadedRates {
    /// Load from the default rates directory
    pub fn load_default() -> Result<Self, Box<dyn Error>> {
        Self::load_from(Path::new(DEFAULT_RATES_PATH))
    }

    /// Load all rate files from a directory
    pub fn load_from(path: &Path) -> Result<Self, Box<dyn Error>> {
        let discount_bands = if path.join("rate_discounts.csv").exists() {
            Some(load_rate_discounts(path)?)
        } else {
            log::debug!("no rate_discounts.csv in {}, using built-in bands", path.display());
            None
        };

        Ok(Self {
            deductions: load_deduction_rates(path)?,
            budget_weights: load_budget_weights(path)?,
            borrowing: load_borrowing_limits(path)?,
            discount_bands,
        })
    }

    /// Look up a deduction rate, falling back to a default
    pub fn deduction(&self, key: &str, default: f64) -> f64 {
        self.deductions.get(key).copied().unwrap_or(default)
    }

    /// Look up a budget weight, falling back to a default
    pub fn budget_weight(&self, key: &str, default: f64) -> f64 {
        self.budget_weights.get(key).copied().unwrap_or(default)
    }

    /// Look up a borrowing tier by name
    pub fn borrowing_tier(&self, name: &str) -> Option<LimitTier> {
        self.borrowing.get(name).map(|&(max_dti, max_ltv)| LimitTier { max_dti, max_ltv })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rates::Rates;

    #[test]
    fn test_load_default_rates() {
        let rates = Rates::from_csv().expect("Failed to load rates");

        assert_eq!(rates.deductions.income_tax, 0.15);
        assert_eq!(rates.budget.gross_salary_threshold, 110_000.0);
        assert_eq!(rates.borrowing.under_threshold.max_dti, 9.5);
    }

    #[test]
    fn test_missing_keys_fall_back() {
        let loaded = LoadedRates {
            deductions: HashMap::new(),
            budget_weights: HashMap::new(),
            borrowing: HashMap::new(),
            discount_bands: None,
        };

        assert_eq!(loaded.deduction("income_tax", 0.15), 0.15);
        assert_eq!(loaded.budget_weight("housing", 0.30), 0.30);
        assert!(loaded.borrowing_tier("under_35").is_none());
    }
}
