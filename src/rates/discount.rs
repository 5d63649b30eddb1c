//! Down-payment-tier interest rate discounts
//!
//! Banks quote a lower rate when the buyer brings a larger down payment; the
//! table maps down-payment percentage ranges to a multiplier on the nominal
//! annual rate.

/// One discount band over a normalized down-payment percentage range
#[derive(Debug, Clone, Copy)]
pub struct DiscountBand {
    /// Inclusive lower bound of the down-payment percentage
    pub min_down_pct: f64,

    /// Exclusive upper bound of the down-payment percentage
    pub max_down_pct: f64,

    /// Multiplier applied to the nominal annual rate
    pub multiplier: f64,
}

/// Ordered discount bands; an empty table leaves the rate unmodified
#[derive(Debug, Clone)]
pub struct RateDiscountTable {
    bands: Vec<DiscountBand>,
}

impl Default for RateDiscountTable {
    fn default() -> Self {
        Self {
            bands: vec![
                DiscountBand {
                    min_down_pct: 30.0,
                    max_down_pct: 40.0,
                    multiplier: 0.95,
                },
                DiscountBand {
                    min_down_pct: 40.0,
                    max_down_pct: 100.0,
                    multiplier: 0.90,
                },
            ],
        }
    }
}

impl RateDiscountTable {
    /// Table that never discounts (the plain calculator behavior)
    pub fn none() -> Self {
        Self { bands: Vec::new() }
    }

    pub fn from_bands(bands: Vec<DiscountBand>) -> Self {
        Self { bands }
    }

    /// Apply the discount for a given down-payment percentage, if any band
    /// matches; the nominal rate is returned unchanged otherwise
    pub fn apply(&self, annual_rate: f64, down_payment_pct: f64) -> f64 {
        for band in &self.bands {
            if down_payment_pct >= band.min_down_pct && down_payment_pct < band.max_down_pct {
                return annual_rate * band.multiplier;
            }
        }
        annual_rate
    }

    /// Create from loaded CSV rates; an absent file keeps the default bands
    pub fn from_loaded(loaded: &super::loader::LoadedRates) -> Self {
        match &loaded.discount_bands {
            Some(bands) => Self::from_bands(bands.clone()),
            None => Self::default(),
        }
    }
}
