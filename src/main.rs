use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use comfy_table::Table;
use core_types::SeasonRecord;
use recommendation::{RecommendationEngine, RecommendationError};
use reporting::ReportingEngine;
use std::fs;
use std::path::{Path, PathBuf};
use valuation::{DcfParams, ValuationEngine};

/// The main entry point for the shamba farm-analytics CLI.
fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Value(args) => handle_value(args),
        Commands::Recommend(args) => handle_recommend(args),
        Commands::Report(args) => handle_report(args),
    }
}

// ==============================================================================
// CLI Structure
// ==============================================================================

/// Farm analytics: valuation, crop recommendation and performance reporting
/// from a history of season records.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Estimate a farm's worth from its season history.
    Value(ValueArgs),
    /// Recommend the best crop to plant next.
    Recommend(RecommendArgs),
    /// Summarize per-crop performance across all records.
    Report(ReportArgs),
}

#[derive(Parser)]
struct ValueArgs {
    /// Path to a JSON array of season records.
    #[arg(long)]
    seasons: PathBuf,

    /// Use the discounted-cash-flow model instead of the simple multiple.
    #[arg(long)]
    dcf: bool,

    /// Annual discount rate for the DCF model (overrides config).
    #[arg(long)]
    discount_rate: Option<f64>,

    /// Number of projected years for the DCF model (overrides config).
    #[arg(long)]
    projection_years: Option<u32>,

    /// Perpetuity growth rate for the DCF model (overrides config).
    #[arg(long)]
    growth_rate: Option<f64>,

    /// Optional config file supplying DCF defaults.
    #[arg(long)]
    config: Option<String>,
}

#[derive(Parser)]
struct RecommendArgs {
    /// Path to a JSON array of season records.
    #[arg(long)]
    seasons: PathBuf,

    /// Rank crops by risk-adjusted return instead of raw average profit.
    #[arg(long)]
    risk_adjusted: bool,
}

#[derive(Parser)]
struct ReportArgs {
    /// Path to a JSON array of season records.
    #[arg(long)]
    seasons: PathBuf,
}

// ==============================================================================
// Command Logic
// ==============================================================================

fn handle_value(args: ValueArgs) -> Result<()> {
    let seasons = load_seasons(&args.seasons)?;
    let engine = ValuationEngine::new();

    if args.dcf {
        let mut params = match &args.config {
            Some(path) => {
                let config = configuration::load_config_from(path)?;
                DcfParams {
                    discount_rate: config.valuation.discount_rate,
                    projection_years: config.valuation.projection_years,
                    perpetuity_growth_rate: config.valuation.perpetuity_growth_rate,
                }
            }
            None => DcfParams::default(),
        };
        if let Some(rate) = args.discount_rate {
            params.discount_rate = rate;
        }
        if let Some(years) = args.projection_years {
            params.projection_years = years;
        }
        if let Some(growth) = args.growth_rate {
            params.perpetuity_growth_rate = growth;
        }

        let value = engine.dcf_valuation(&seasons, &params)?;
        println!("DCF valuation: KSH {value:.2}");
    } else {
        let value = engine.simple_valuation(&seasons);
        println!("Simple valuation: KSH {value:.2}");
    }
    Ok(())
}

fn handle_recommend(args: RecommendArgs) -> Result<()> {
    let seasons = load_seasons(&args.seasons)?;
    let engine = RecommendationEngine::new();

    if args.risk_adjusted {
        match engine.recommend_best_crop_risk_adjusted(&seasons) {
            Ok(rec) => {
                println!("{}", rec.recommendation);
                println!("Sharpe ratio: {:.2}", rec.sharpe_ratio);
            }
            // Not enough data is a domain answer, not a failure.
            Err(RecommendationError::InsufficientData(message)) => println!("{message}"),
        }
    } else {
        match engine.recommend_best_crop(&seasons) {
            Ok(rec) => {
                println!("{}", rec.recommendation);
                println!(
                    "Average profit per season: KSH {:.2}",
                    rec.average_profit_per_season
                );
            }
            Err(RecommendationError::InsufficientData(message)) => println!("{message}"),
        }
    }
    Ok(())
}

fn handle_report(args: ReportArgs) -> Result<()> {
    let seasons = load_seasons(&args.seasons)?;
    let rows = ReportingEngine::new().crop_performance_summary(&seasons);

    let mut table = Table::new();
    table.set_header(vec![
        "Crop",
        "Variety",
        "Avg Market Price",
        "Avg ROI",
        "Investment Volume",
        "Risk",
    ]);
    for row in rows {
        table.add_row(vec![
            row.crop_type,
            row.crop_variety.unwrap_or_else(|| "-".to_string()),
            row.market_price,
            row.avg_roi,
            row.investment_volume,
            row.risk_level,
        ]);
    }
    println!("{table}");
    Ok(())
}

fn load_seasons(path: &Path) -> Result<Vec<SeasonRecord>> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("failed to read season file {}", path.display()))?;
    let seasons: Vec<SeasonRecord> =
        serde_json::from_str(&raw).context("season file is not a JSON array of season records")?;
    tracing::debug!(records = seasons.len(), "loaded season records");
    Ok(seasons)
}
