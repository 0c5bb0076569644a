use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One cropping cycle's recorded financial and agronomic data for a farm.
///
/// Every numeric field is optional because the upstream dataset is sparse:
/// smallholder records frequently omit individual cost lines, revenue, or
/// dates. The defaulting policy is uniform:
///
/// - A missing cost component means "no cost incurred" and sums as 0.
/// - A missing revenue means "unrecorded", and gates the record out of
///   revenue-based aggregations rather than counting as a zero-profit season.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SeasonRecord {
    /// Name of the crop planted this season. Required for recommendation
    /// grouping and the per-crop performance summary.
    pub crop: Option<String>,
    pub crop_variety: Option<String>,
    pub planted_area_acres: Option<f64>,
    pub yield_kg: Option<f64>,
    /// Market price in KES per kg.
    pub market_price: Option<f64>,
    /// Gross revenue for the season in KES.
    pub revenue: Option<f64>,
    pub seed_cost: Option<f64>,
    pub fertilizer_cost: Option<f64>,
    pub pesticide_cost: Option<f64>,
    pub labor_cost: Option<f64>,
    pub machinery_cost: Option<f64>,
    pub other_costs: Option<f64>,
    /// Profit as recorded upstream, when the dataset carries one. The
    /// valuation and recommendation engines derive their own profit from
    /// revenue and costs; only the reporting aggregator reads this field.
    pub profit: Option<f64>,
    pub planting_date: Option<NaiveDate>,
    /// Buckets profit by calendar year for the DCF valuation.
    pub harvest_date: Option<NaiveDate>,
}

impl SeasonRecord {
    /// Total cost of production: the sum of the six cost components, with
    /// absent or non-finite components contributing 0.
    pub fn total_cost(&self) -> f64 {
        cost_or_zero(self.seed_cost)
            + cost_or_zero(self.fertilizer_cost)
            + cost_or_zero(self.pesticide_cost)
            + cost_or_zero(self.labor_cost)
            + cost_or_zero(self.machinery_cost)
            + cost_or_zero(self.other_costs)
    }

    /// Revenue minus total cost, or `None` when revenue was never recorded.
    ///
    /// Callers that gate on revenue presence (simple valuation, both
    /// recommendation heuristics) use this; the DCF bucketing deliberately
    /// does not.
    pub fn net_profit(&self) -> Option<f64> {
        self.revenue.map(|revenue| revenue - self.total_cost())
    }
}

/// Keeps a value only when it is present and finite. The upstream dataset
/// uses NaN as a missing-value sentinel, which must never leak into a sum.
pub fn finite(value: Option<f64>) -> Option<f64> {
    value.filter(|v| v.is_finite())
}

fn cost_or_zero(component: Option<f64>) -> f64 {
    finite(component).unwrap_or(0.0)
}
