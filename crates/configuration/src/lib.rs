//! # Shamba Configuration
//!
//! Strongly-typed configuration loading for the CLI: DCF valuation defaults
//! live in a `config.toml` so analysts can adjust them without recompiling.

use crate::error::ConfigError;

// Declare the modules that make up this crate.
pub mod error;
pub mod settings;

// Re-export the core types to provide a clean public API.
pub use settings::{Config, ValuationDefaults};

/// Loads the application configuration from the `config.toml` file.
pub fn load_config() -> Result<Config, ConfigError> {
    load_config_from("config.toml")
}

/// Loads configuration from an explicit path (the CLI's `--config` flag).
pub fn load_config_from(path: &str) -> Result<Config, ConfigError> {
    let builder = config::Config::builder()
        // Tells the builder to look for the named configuration file.
        .add_source(config::File::with_name(path))
        .build()?;

    // Attempt to deserialize the entire configuration into our `Config` struct.
    let config = builder.try_deserialize::<Config>()?;

    validate(&config)?;
    Ok(config)
}

fn validate(config: &Config) -> Result<(), ConfigError> {
    let v = &config.valuation;
    if v.discount_rate <= v.perpetuity_growth_rate {
        return Err(ConfigError::ValidationError(format!(
            "discount_rate ({}) must exceed perpetuity_growth_rate ({})",
            v.discount_rate, v.perpetuity_growth_rate
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::ValuationDefaults;

    fn parse(toml: &str) -> Result<Config, ConfigError> {
        let builder = config::Config::builder()
            .add_source(config::File::from_str(toml, config::FileFormat::Toml))
            .build()?;
        let config = builder.try_deserialize::<Config>()?;
        validate(&config)?;
        Ok(config)
    }

    #[test]
    fn defaults_match_the_dcf_model_defaults() {
        let defaults = ValuationDefaults::default();
        assert_eq!(defaults.discount_rate, 0.10);
        assert_eq!(defaults.projection_years, 5);
        assert_eq!(defaults.perpetuity_growth_rate, 0.02);
    }

    #[test]
    fn parses_a_valuation_section() {
        let config = parse(
            r#"
            [valuation]
            discount_rate = 0.12
            projection_years = 7
            perpetuity_growth_rate = 0.03
            "#,
        )
        .unwrap();
        assert_eq!(config.valuation.discount_rate, 0.12);
        assert_eq!(config.valuation.projection_years, 7);
        assert_eq!(config.valuation.perpetuity_growth_rate, 0.03);
    }

    #[test]
    fn rejects_a_degenerate_rate_pair_at_load_time() {
        let result = parse(
            r#"
            [valuation]
            discount_rate = 0.02
            projection_years = 5
            perpetuity_growth_rate = 0.02
            "#,
        );
        assert!(matches!(result, Err(ConfigError::ValidationError(_))));
    }
}
