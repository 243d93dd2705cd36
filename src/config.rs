//! Configuration module
//!
//! Loads configuration from environment variables.

use std::env;
use std::str::FromStr;

use rust_decimal::Decimal;

use crate::domain::{DiscountTier, Money, PricingPolicy};

/// Log output format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Text,
    Json,
}

impl FromStr for LogFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            _ => Err(ConfigError::InvalidValue("LOG_FORMAT")),
        }
    }
}

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Environment (development, production)
    pub environment: String,

    /// Log output format
    pub log_format: LogFormat,

    /// Cleaning fee and length-of-stay discounts
    pub pricing: PricingPolicy,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration from an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let environment = lookup("ENVIRONMENT").unwrap_or_else(|| "development".to_string());

        let log_format = match lookup("LOG_FORMAT") {
            Some(value) => value.parse()?,
            None => LogFormat::Text,
        };

        let defaults = PricingPolicy::default();

        let cleaning_fee = match lookup("CLEANING_FEE") {
            Some(value) => value
                .parse::<Money>()
                .map_err(|_| ConfigError::InvalidValue("CLEANING_FEE"))?,
            None => defaults.cleaning_fee(),
        };

        let tiers = match lookup("DISCOUNT_TIERS") {
            Some(value) => parse_discount_tiers(&value)?,
            None => defaults.tiers().to_vec(),
        };

        let pricing = PricingPolicy::new(cleaning_fee, tiers)
            .map_err(|_| ConfigError::InvalidValue("DISCOUNT_TIERS"))?;

        Ok(Self {
            environment,
            log_format,
            pricing,
        })
    }

    /// Check if running in production
    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }
}

/// Parse `"15:0.20,10:0.10"` into discount tiers. An empty string disables discounts.
fn parse_discount_tiers(value: &str) -> Result<Vec<DiscountTier>, ConfigError> {
    value
        .split(',')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(|entry| {
            let (days, rate) = entry
                .split_once(':')
                .ok_or(ConfigError::InvalidValue("DISCOUNT_TIERS"))?;
            let days = days
                .trim()
                .parse::<u32>()
                .map_err(|_| ConfigError::InvalidValue("DISCOUNT_TIERS"))?;
            let rate = Decimal::from_str(rate.trim())
                .map_err(|_| ConfigError::InvalidValue("DISCOUNT_TIERS"))?;
            DiscountTier::new(days, rate).map_err(|_| ConfigError::InvalidValue("DISCOUNT_TIERS"))
        })
        .collect()
}

/// Configuration error types
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for environment variable: {0}")]
    InvalidValue(&'static str),
}
