//! Storefront configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Optional
//! - `MAJIK_BLOOM_CART_PATH` - Path of the persisted cart document
//!   (default: `majik-bloom-cart.json`)
//! - `MAJIK_BLOOM_TAX_RATE` - Sales tax rate as a decimal fraction
//!   (default: `0.08`)

use std::path::PathBuf;

use rust_decimal::Decimal;
use thiserror::Error;

/// Default path of the persisted cart document.
pub const DEFAULT_CART_PATH: &str = "majik-bloom-cart.json";

/// Default sales tax rate (8%).
pub const DEFAULT_TAX_RATE: Decimal = Decimal::from_parts(8, 0, 0, false, 2);

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Storefront application configuration.
#[derive(Debug, Clone)]
pub struct StorefrontConfig {
    /// Path of the persisted cart document
    pub cart_path: PathBuf,
    /// Sales tax rate as a decimal fraction (e.g., 0.08 for 8%)
    pub tax_rate: Decimal,
}

impl StorefrontConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set but does not parse, or if
    /// the tax rate is negative.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let cart_path =
            PathBuf::from(get_env_or_default("MAJIK_BLOOM_CART_PATH", DEFAULT_CART_PATH));

        let tax_rate = match std::env::var("MAJIK_BLOOM_TAX_RATE") {
            Ok(raw) => parse_tax_rate(&raw)?,
            Err(_) => DEFAULT_TAX_RATE,
        };

        Ok(Self {
            cart_path,
            tax_rate,
        })
    }
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self {
            cart_path: PathBuf::from(DEFAULT_CART_PATH),
            tax_rate: DEFAULT_TAX_RATE,
        }
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

/// Parse a tax rate, rejecting values that are not non-negative decimals.
fn parse_tax_rate(raw: &str) -> Result<Decimal, ConfigError> {
    let rate = raw.parse::<Decimal>().map_err(|e| {
        ConfigError::InvalidEnvVar("MAJIK_BLOOM_TAX_RATE".to_string(), e.to_string())
    })?;

    if rate.is_sign_negative() {
        return Err(ConfigError::InvalidEnvVar(
            "MAJIK_BLOOM_TAX_RATE".to_string(),
            format!("must be non-negative (got {rate})"),
        ));
    }

    Ok(rate)
}
