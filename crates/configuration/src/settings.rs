use serde::Deserialize;

/// The root configuration structure for the shamba CLI.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub valuation: ValuationDefaults,
}

/// Default parameters for the discounted-cash-flow valuation model.
///
/// These mirror `valuation::DcfParams`; the CLI copies them over field by
/// field so this crate stays below the analytics layer.
#[derive(Debug, Clone, Deserialize)]
pub struct ValuationDefaults {
    /// Annual rate at which projected profits are discounted back.
    pub discount_rate: f64,
    /// Number of explicitly projected periods beyond the last recorded year.
    pub projection_years: u32,
    /// Assumed annual profit growth, also the Gordon-growth perpetuity rate.
    pub perpetuity_growth_rate: f64,
}

impl Default for ValuationDefaults {
    fn default() -> Self {
        Self {
            discount_rate: 0.10,
            projection_years: 5,
            perpetuity_growth_rate: 0.02,
        }
    }
}
