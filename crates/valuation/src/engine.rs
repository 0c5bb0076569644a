use crate::error::ValuationError;
use chrono::Datelike;
use core_types::SeasonRecord;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Multiple of total recorded profit used by the simple valuation model.
/// A deliberately crude heuristic, not a market-calibrated figure.
const PROFIT_MULTIPLE: f64 = 5.0;

/// Parameters for the discounted-cash-flow model.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DcfParams {
    /// Annual rate at which projected profits are discounted back.
    pub discount_rate: f64,
    /// Number of explicitly projected periods beyond the last recorded year.
    pub projection_years: u32,
    /// Assumed annual profit growth, also the Gordon-growth perpetuity rate.
    pub perpetuity_growth_rate: f64,
}

impl Default for DcfParams {
    fn default() -> Self {
        Self {
            discount_rate: 0.10,
            projection_years: 5,
            perpetuity_growth_rate: 0.02,
        }
    }
}

/// A stateless calculator for deriving a farm's worth from season records.
#[derive(Debug, Default)]
pub struct ValuationEngine {}

impl ValuationEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Values a farm at a fixed multiple of its total recorded profit.
    ///
    /// Seasons with no recorded revenue are excluded from the sum entirely;
    /// an unrecorded revenue is not a zero-profit season.
    pub fn simple_valuation(&self, seasons: &[SeasonRecord]) -> f64 {
        let total_profit: f64 = seasons.iter().filter_map(SeasonRecord::net_profit).sum();
        total_profit * PROFIT_MULTIPLE
    }

    /// Values a farm by projecting its most recent annual profit forward and
    /// discounting the projection plus a Gordon-growth terminal value.
    ///
    /// Returns `Ok(0.0)` when no season carries a harvest date, since there
    /// is then no annual history to project from.
    ///
    /// # Errors
    ///
    /// `ValuationError::DegenerateParameters` when the discount rate does not
    /// exceed the perpetuity growth rate, which would make the terminal-value
    /// denominator zero or negative.
    pub fn dcf_valuation(
        &self,
        seasons: &[SeasonRecord],
        params: &DcfParams,
    ) -> Result<f64, ValuationError> {
        let DcfParams {
            discount_rate,
            projection_years,
            perpetuity_growth_rate,
        } = *params;

        // Parameter validation comes before any look at the data: a
        // degenerate rate pair is a caller error even on an empty history.
        if discount_rate <= perpetuity_growth_rate {
            return Err(ValuationError::DegenerateParameters {
                discount_rate,
                perpetuity_growth_rate,
            });
        }

        // Historical profit bucketed by harvest year. Unlike the simple
        // model, a season with a harvest date but no recorded revenue
        // contributes revenue 0 here, so its costs still count.
        let mut annual_profits: HashMap<i32, f64> = HashMap::new();
        for season in seasons {
            if let Some(harvest_date) = season.harvest_date {
                let profit = season.revenue.unwrap_or(0.0) - season.total_cost();
                *annual_profits.entry(harvest_date.year()).or_insert(0.0) += profit;
            }
        }

        let Some(last_year) = annual_profits.keys().max().copied() else {
            return Ok(0.0);
        };
        let last_year_profit = annual_profits[&last_year];
        tracing::debug!(
            years = annual_profits.len(),
            last_year,
            last_year_profit,
            "projecting cash flows from most recent harvest year"
        );

        // Project the most recent year's profit forward.
        let growth = 1.0 + perpetuity_growth_rate;
        let projected: Vec<f64> = (1..=projection_years)
            .map(|i| last_year_profit * growth.powi(i as i32))
            .collect();

        // Discount each projected period back to the present. The i-th
        // 0-based period discounts at power i + 1.
        let discount = 1.0 + discount_rate;
        let discounted: f64 = projected
            .iter()
            .enumerate()
            .map(|(i, profit)| profit / discount.powi(i as i32 + 1))
            .sum();

        // Gordon-growth terminal value for everything beyond the horizon.
        let last_projected_profit = projected.last().copied().unwrap_or(0.0);
        let terminal_value = last_projected_profit * growth
            / (discount_rate - perpetuity_growth_rate);
        let discounted_terminal_value = terminal_value / discount.powi(projection_years as i32);

        Ok(discounted + discounted_terminal_value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn season(revenue: Option<f64>, labor_cost: Option<f64>) -> SeasonRecord {
        SeasonRecord {
            revenue,
            labor_cost,
            ..Default::default()
        }
    }

    fn harvested(revenue: Option<f64>, labor_cost: Option<f64>, date: &str) -> SeasonRecord {
        SeasonRecord {
            harvest_date: Some(date.parse::<NaiveDate>().unwrap()),
            ..season(revenue, labor_cost)
        }
    }

    #[test]
    fn simple_valuation_of_empty_history_is_zero() {
        let engine = ValuationEngine::new();
        assert_eq!(engine.simple_valuation(&[]), 0.0);
    }

    #[test]
    fn simple_valuation_is_five_times_total_profit() {
        let engine = ValuationEngine::new();
        let seasons = vec![season(Some(10_000.0), None)];
        assert_eq!(engine.simple_valuation(&seasons), 50_000.0);
    }

    #[test]
    fn simple_valuation_excludes_seasons_without_revenue() {
        let engine = ValuationEngine::new();
        // Costs on a revenue-less season must not drag the total down.
        let seasons = vec![
            season(Some(5_000.0), Some(1_000.0)),
            season(None, Some(99_000.0)),
        ];
        assert_eq!(engine.simple_valuation(&seasons), 20_000.0);
    }

    #[test]
    fn simple_valuation_is_linear_in_profit() {
        let engine = ValuationEngine::new();
        let base = vec![
            season(Some(8_000.0), Some(3_000.0)),
            season(Some(2_500.0), Some(500.0)),
        ];
        let scaled: Vec<SeasonRecord> = base
            .iter()
            .map(|s| season(s.revenue.map(|r| r * 3.0), s.labor_cost.map(|c| c * 3.0)))
            .collect();
        assert_eq!(
            engine.simple_valuation(&scaled),
            engine.simple_valuation(&base) * 3.0
        );
    }

    #[test]
    fn dcf_valuation_of_empty_history_is_zero() {
        let engine = ValuationEngine::new();
        assert_eq!(engine.dcf_valuation(&[], &DcfParams::default()), Ok(0.0));
    }

    #[test]
    fn dcf_valuation_without_harvest_dates_is_zero() {
        let engine = ValuationEngine::new();
        let seasons = vec![season(Some(50_000.0), Some(10_000.0))];
        assert_eq!(
            engine.dcf_valuation(&seasons, &DcfParams::default()),
            Ok(0.0)
        );
    }

    #[test]
    fn dcf_valuation_rejects_discount_rate_equal_to_growth_rate() {
        let engine = ValuationEngine::new();
        let seasons = vec![harvested(Some(10_000.0), None, "2023-09-01")];
        let params = DcfParams {
            discount_rate: 0.02,
            perpetuity_growth_rate: 0.02,
            ..DcfParams::default()
        };
        let result = engine.dcf_valuation(&seasons, &params);
        assert!(matches!(
            result,
            Err(ValuationError::DegenerateParameters { .. })
        ));
    }

    #[test]
    fn dcf_valuation_rejects_degenerate_rates_before_checking_history() {
        let engine = ValuationEngine::new();
        let params = DcfParams {
            discount_rate: 0.02,
            perpetuity_growth_rate: 0.02,
            ..DcfParams::default()
        };
        // Even with nothing to value, a degenerate rate pair is refused.
        assert!(matches!(
            engine.dcf_valuation(&[], &params),
            Err(ValuationError::DegenerateParameters { .. })
        ));
    }

    #[test]
    fn dcf_valuation_rejects_growth_rate_above_discount_rate() {
        let engine = ValuationEngine::new();
        let seasons = vec![harvested(Some(10_000.0), None, "2023-09-01")];
        let params = DcfParams {
            discount_rate: 0.01,
            perpetuity_growth_rate: 0.02,
            ..DcfParams::default()
        };
        assert!(engine.dcf_valuation(&seasons, &params).is_err());
    }

    #[test]
    fn dcf_valuation_matches_hand_expanded_formula_for_one_year_history() {
        let engine = ValuationEngine::new();
        let seasons = vec![harvested(Some(120_000.0), Some(20_000.0), "2023-09-01")];
        let params = DcfParams::default();

        let profit = 100_000.0;
        let (r, g): (f64, f64) = (0.10, 0.02);
        let mut expected = 0.0;
        for i in 1..=5 {
            expected += profit * (1.0 + g).powi(i) / (1.0 + r).powi(i);
        }
        let last_projected = profit * (1.0 + g).powi(5);
        let terminal = last_projected * (1.0 + g) / (r - g);
        expected += terminal / (1.0 + r).powi(5);

        let value = engine.dcf_valuation(&seasons, &params).unwrap();
        assert!((value - expected).abs() < 1e-6);
    }

    #[test]
    fn dcf_valuation_projects_from_the_most_recent_year() {
        let engine = ValuationEngine::new();
        // 2022 was far more profitable, but 2023 is the projection base.
        let newer_only = vec![harvested(Some(30_000.0), None, "2023-04-10")];
        let both = vec![
            harvested(Some(900_000.0), None, "2022-04-10"),
            harvested(Some(30_000.0), None, "2023-04-10"),
        ];
        let params = DcfParams::default();
        assert_eq!(
            engine.dcf_valuation(&both, &params),
            engine.dcf_valuation(&newer_only, &params)
        );
    }

    #[test]
    fn dcf_valuation_zeroes_missing_revenue_in_yearly_buckets() {
        let engine = ValuationEngine::new();
        // A harvested season with costs but no revenue pulls its year
        // negative instead of being excluded.
        let seasons = vec![harvested(None, Some(10_000.0), "2023-09-01")];
        let value = engine
            .dcf_valuation(&seasons, &DcfParams::default())
            .unwrap();
        assert!(value < 0.0);
    }

    #[test]
    fn dcf_valuation_accumulates_profit_within_a_year() {
        let engine = ValuationEngine::new();
        let split = vec![
            harvested(Some(40_000.0), Some(5_000.0), "2023-03-01"),
            harvested(Some(60_000.0), Some(15_000.0), "2023-10-01"),
        ];
        let merged = vec![harvested(Some(100_000.0), Some(20_000.0), "2023-06-01")];
        let params = DcfParams::default();
        let split_value = engine.dcf_valuation(&split, &params).unwrap();
        let merged_value = engine.dcf_valuation(&merged, &params).unwrap();
        assert!((split_value - merged_value).abs() < 1e-9);
    }
}
