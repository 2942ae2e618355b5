//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for building an
//! [`EarningsConfig`] from a YAML file or from configuration store entries.

use std::fs;
use std::path::Path;

use tracing::{debug, info};

use crate::error::{EarningsError, EarningsResult};

use super::types::{ConfigEntry, EarningsConfig};

/// Loads and provides access to the earnings configuration.
///
/// Both entry points validate the resulting config before returning it.
///
/// # File Format
///
/// ```text
/// lunch_food_base_income: 8000
/// lunch_food_overage_share_percent: 0.5
/// lunch_drink_share_percent: 0.25
/// dinner_food_our_share_percent: 0.75
/// dinner_food_common_pool_percent: 0.25
/// dinner_drink_common_pool_percent: 0.25
/// ```
///
/// # Example
///
/// ```no_run
/// use phulkas_earnings::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/earnings.yaml").unwrap();
/// println!("Lunch base income: {}", loader.config().lunch_food_base_income);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ConfigLoader {
    config: EarningsConfig,
}

impl ConfigLoader {
    /// Loads configuration from a YAML file.
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` on success, or an error if:
    /// - The file is missing or unreadable (`ConfigNotFound`)
    /// - The file is not valid YAML or lacks a field (`ConfigParseError`)
    /// - A value is out of range (`InvalidConfigValue`)
    pub fn load<P: AsRef<Path>>(path: P) -> EarningsResult<Self> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EarningsError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        let config: EarningsConfig =
            serde_yaml::from_str(&content).map_err(|e| EarningsError::ConfigParseError {
                path: path_str.clone(),
                message: e.to_string(),
            })?;

        config.validate()?;
        info!(path = %path_str, "Loaded earnings configuration");

        Ok(Self { config })
    }

    /// Builds configuration from key/value store entries.
    ///
    /// Keys missing from `entries` keep their default value. Unknown keys are
    /// ignored. When a key appears more than once, the last entry wins.
    ///
    /// # Example
    ///
    /// ```
    /// use phulkas_earnings::config::{ConfigEntry, ConfigLoader};
    /// use rust_decimal::Decimal;
    ///
    /// let entries = vec![ConfigEntry::new("LUNCH_FOOD_BASE_INCOME", Decimal::new(6000, 0))];
    /// let loader = ConfigLoader::from_entries(&entries)?;
    /// assert_eq!(loader.config().lunch_food_base_income, Decimal::new(6000, 0));
    /// # Ok::<(), phulkas_earnings::error::EarningsError>(())
    /// ```
    pub fn from_entries(entries: &[ConfigEntry]) -> EarningsResult<Self> {
        let mut config = EarningsConfig::default();

        for entry in entries {
            if !config.set(&entry.key, entry.value) {
                debug!(key = %entry.key, "Ignoring unknown configuration key");
            }
        }

        config.validate()?;
        Ok(Self { config })
    }

    /// Returns the loaded configuration.
    pub fn config(&self) -> &EarningsConfig {
        &self.config
    }

    /// Consumes the loader and returns the configuration.
    pub fn into_config(self) -> EarningsConfig {
        self.config
    }

    /// Returns the configuration as store entries, in a fixed key order.
    pub fn to_entries(&self) -> Vec<ConfigEntry> {
        self.config
            .entries()
            .into_iter()
            .map(|(key, value)| ConfigEntry::new(key, value))
            .collect()
    }
}
