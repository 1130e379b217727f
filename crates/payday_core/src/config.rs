//! # Payday Configuration
//!
//! Tunables for the payday plugin, loaded once at startup from a TOML file.
//! Every field has a default so a partial (or missing) config file still
//! yields a working setup.

use std::path::Path;

use serde::Deserialize;

use crate::error::{PaydayError, PaydayResult};

/// Top-level plugin configuration.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct PaydayConfig {
    /// Collection name and diagnostics.
    pub general: GeneralConfig,
    /// Payment amounts and timing.
    pub payments: PaymentsConfig,
    /// Optional collaborator toggles.
    pub plugins: PluginsConfig,
}

/// General plugin settings.
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// Document store collection holding the payday records.
    pub db_collection: String,
    /// Enables diagnostic console logging.
    pub debug: bool,
}

/// Payment tunables.
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct PaymentsConfig {
    /// Milliseconds between scheduled payday ticks.
    pub interval_ms: u64,
    /// Sentinel sender marking the unemployed/default state.
    pub default_sender: String,
    /// Base stipend paid per period while unemployed.
    pub unemployed_amount: u64,
}

/// Toggles for optional collaborator integrations.
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct PluginsConfig {
    /// Send an on-screen notice after each successful payment.
    pub notifications: bool,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            db_collection: "payday".to_string(),
            debug: false,
        }
    }
}

impl Default for PaymentsConfig {
    fn default() -> Self {
        Self {
            interval_ms: 15_000,
            default_sender: "GOVERNMENT".to_string(),
            unemployed_amount: 25,
        }
    }
}

impl Default for PluginsConfig {
    fn default() -> Self {
        Self {
            notifications: true,
        }
    }
}

impl PaydayConfig {
    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or fails validation.
    pub fn from_toml(path: impl AsRef<Path>) -> PaydayResult<Self> {
        let raw = std::fs::read_to_string(path)?;
        Self::from_toml_str(&raw)
    }

    /// Parses configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error on malformed TOML or invalid values.
    pub fn from_toml_str(raw: &str) -> PaydayResult<Self> {
        let config: Self =
            toml::from_str(raw).map_err(|err| PaydayError::InvalidConfig(err.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Checks semantic constraints that serde cannot express.
    ///
    /// # Errors
    ///
    /// Returns an error if the payday interval is zero.
    pub fn validate(&self) -> PaydayResult<()> {
        if self.payments.interval_ms == 0 {
            return Err(PaydayError::InvalidConfig(
                "payments.interval_ms must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }
}
