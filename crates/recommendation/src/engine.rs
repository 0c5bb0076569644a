use crate::error::RecommendationError;
use core_types::SeasonRecord;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

const MSG_NO_DATA: &str = "Not enough data for recommendations.";
const MSG_NO_ELIGIBLE_CROPS: &str = "No profitable crops found in historical data.";
const MSG_NO_RISK_SCORE: &str = "Could not calculate risk-adjusted return for any crop.";

/// The crop with the highest mean profit per season.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CropRecommendation {
    pub recommendation: String,
    pub best_crop: String,
    pub average_profit_per_season: f64,
}

/// The crop with the best risk-adjusted return.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskAdjustedRecommendation {
    pub recommendation: String,
    pub best_crop: String,
    pub sharpe_ratio: f64,
}

/// A stateless calculator that ranks crops by historical profitability.
#[derive(Debug, Default)]
pub struct RecommendationEngine {}

impl RecommendationEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Recommends the crop with the highest average profit per season.
    ///
    /// Only seasons with both a crop name and a recorded revenue count.
    /// Ties go to the crop encountered first in the input.
    ///
    /// # Errors
    ///
    /// `RecommendationError::InsufficientData` when the input is empty or no
    /// season passes the eligibility filter.
    pub fn recommend_best_crop(
        &self,
        seasons: &[SeasonRecord],
    ) -> Result<CropRecommendation, RecommendationError> {
        if seasons.is_empty() {
            return Err(RecommendationError::InsufficientData(MSG_NO_DATA.into()));
        }

        let series = profit_series(seasons);
        tracing::debug!(crops = series.len(), "grouped season profits by crop");

        let mut best: Option<(String, f64)> = None;
        for (crop, profits) in series {
            let average = profits.iter().sum::<f64>() / profits.len() as f64;
            // Strictly-greater keeps the first-encountered crop on ties.
            if best.as_ref().is_none_or(|(_, top)| average > *top) {
                best = Some((crop, average));
            }
        }

        match best {
            Some((best_crop, average_profit_per_season)) => Ok(CropRecommendation {
                recommendation: format!(
                    "Based on historical data, '{best_crop}' is the most profitable crop to plant."
                ),
                best_crop,
                average_profit_per_season,
            }),
            None => Err(RecommendationError::InsufficientData(
                MSG_NO_ELIGIBLE_CROPS.into(),
            )),
        }
    }

    /// Recommends the crop with the best risk-adjusted return: mean profit
    /// divided by its population standard deviation.
    ///
    /// Crops with fewer than two profit observations are excluded, since a
    /// single observation has no variance to speak of. A crop whose profits
    /// never vary scores its raw mean rather than dividing by zero.
    ///
    /// # Errors
    ///
    /// `RecommendationError::InsufficientData` when the input is empty, no
    /// season is eligible, or no crop has enough observations to score.
    pub fn recommend_best_crop_risk_adjusted(
        &self,
        seasons: &[SeasonRecord],
    ) -> Result<RiskAdjustedRecommendation, RecommendationError> {
        if seasons.is_empty() {
            return Err(RecommendationError::InsufficientData(MSG_NO_DATA.into()));
        }

        let series = profit_series(seasons);
        if series.is_empty() {
            return Err(RecommendationError::InsufficientData(
                MSG_NO_ELIGIBLE_CROPS.into(),
            ));
        }

        let mut best: Option<(String, f64)> = None;
        for (crop, profits) in series {
            if profits.len() < 2 {
                continue;
            }
            let mean = profits.iter().sum::<f64>() / profits.len() as f64;
            let std_dev = population_std_dev(&profits, mean);
            let score = if std_dev > 0.0 { mean / std_dev } else { mean };
            if best.as_ref().is_none_or(|(_, top)| score > *top) {
                best = Some((crop, score));
            }
        }

        match best {
            Some((best_crop, sharpe_ratio)) => Ok(RiskAdjustedRecommendation {
                recommendation: format!(
                    "Based on risk-adjusted return, '{best_crop}' is the recommended crop to plant."
                ),
                best_crop,
                sharpe_ratio,
            }),
            None => Err(RecommendationError::InsufficientData(
                MSG_NO_RISK_SCORE.into(),
            )),
        }
    }
}

/// Groups per-season profit by crop, preserving the order in which crops
/// first appear in the input. Seasons missing either a crop name or a
/// recorded revenue are ineligible.
fn profit_series(seasons: &[SeasonRecord]) -> Vec<(String, Vec<f64>)> {
    let mut slots: HashMap<String, usize> = HashMap::new();
    let mut series: Vec<(String, Vec<f64>)> = Vec::new();
    for season in seasons {
        let (Some(crop), Some(profit)) = (season.crop.as_ref(), season.net_profit()) else {
            continue;
        };
        let slot = *slots.entry(crop.clone()).or_insert_with(|| {
            series.push((crop.clone(), Vec::new()));
            series.len() - 1
        });
        series[slot].1.push(profit);
    }
    series
}

fn population_std_dev(values: &[f64], mean: f64) -> f64 {
    let variance = values
        .iter()
        .map(|v| (v - mean) * (v - mean))
        .sum::<f64>()
        / values.len() as f64;
    variance.sqrt()
}
