use crate::report::{
    CropPerformance, RISK_LEVEL_PLACEHOLDER, format_investment_volume, format_market_price,
    format_roi,
};
use core_types::{SeasonRecord, finite};
use std::collections::HashMap;

/// A record that survived the validity filter, with the fields the summary
/// actually aggregates.
struct ValidRecord {
    market_price: f64,
    profit: f64,
    revenue: f64,
    total_cost: f64,
    crop_variety: Option<String>,
}

/// A stateless aggregator producing per-crop performance summaries.
#[derive(Debug, Default)]
pub struct ReportingEngine {}

impl ReportingEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Summarizes performance per crop, in crop encounter order.
    ///
    /// A record only counts when `market_price`, `profit` and `revenue` are
    /// all present and finite; a present-but-NaN value is treated as absent,
    /// never as zero. Crops left with no valid records produce no row.
    pub fn crop_performance_summary(&self, seasons: &[SeasonRecord]) -> Vec<CropPerformance> {
        let mut slots: HashMap<String, usize> = HashMap::new();
        let mut groups: Vec<(String, Vec<ValidRecord>)> = Vec::new();

        for season in seasons {
            let Some(crop) = season.crop.as_ref() else {
                continue;
            };
            let slot = *slots.entry(crop.clone()).or_insert_with(|| {
                groups.push((crop.clone(), Vec::new()));
                groups.len() - 1
            });
            if let Some(valid) = validate(season) {
                groups[slot].1.push(valid);
            }
        }
        tracing::debug!(crops = groups.len(), "aggregated crop performance");

        groups
            .into_iter()
            .filter_map(|(crop_type, records)| summarize(crop_type, &records))
            .collect()
    }
}

fn validate(season: &SeasonRecord) -> Option<ValidRecord> {
    Some(ValidRecord {
        market_price: finite(season.market_price)?,
        profit: finite(season.profit)?,
        revenue: finite(season.revenue)?,
        total_cost: season.total_cost(),
        crop_variety: season.crop_variety.clone(),
    })
}

fn summarize(crop_type: String, records: &[ValidRecord]) -> Option<CropPerformance> {
    let first = records.first()?;

    let count = records.len() as f64;
    let avg_market_price = records.iter().map(|r| r.market_price).sum::<f64>() / count;
    let total_profit: f64 = records.iter().map(|r| r.profit).sum();
    let total_cost: f64 = records.iter().map(|r| r.total_cost).sum();
    let avg_roi = if total_cost == 0.0 {
        0.0
    } else {
        total_profit / total_cost * 100.0
    };
    let investment_volume: f64 = records.iter().map(|r| r.revenue).sum();

    Some(CropPerformance {
        crop_variety: first.crop_variety.clone(),
        crop_type,
        market_price: format_market_price(avg_market_price),
        avg_roi: format_roi(avg_roi),
        investment_volume: format_investment_volume(investment_volume),
        risk_level: RISK_LEVEL_PLACEHOLDER.to_string(),
    })
}
