use serde::{Deserialize, Serialize};

/// Risk rating stamped on every row. No risk model exists yet; this is a
/// documented placeholder, not a computed figure.
pub(crate) const RISK_LEVEL_PLACEHOLDER: &str = "Medium";

/// One display-ready summary row per crop.
///
/// The numeric columns are formatted strings because this struct is handed
/// straight to presentation: `market_price` as "KSH {v:.2}/kg", `avg_roi` as
/// "{v:.2}%", `investment_volume` as "KSH {v/1e6:.1}M".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CropPerformance {
    pub crop_type: String,
    /// Variety of the first valid record in encounter order. A display
    /// convenience, not a true aggregate.
    pub crop_variety: Option<String>,
    pub market_price: String,
    pub avg_roi: String,
    pub investment_volume: String,
    pub risk_level: String,
}

pub(crate) fn format_market_price(value: f64) -> String {
    format!("KSH {value:.2}/kg")
}

pub(crate) fn format_roi(value: f64) -> String {
    format!("{value:.2}%")
}

pub(crate) fn format_investment_volume(value: f64) -> String {
    format!("KSH {:.1}M", value / 1_000_000.0)
}
