//! Configuration types for the earnings calculator.
//!
//! This module contains the [`EarningsConfig`] value consumed by every
//! calculation, and the [`ConfigEntry`] shape used by the key/value
//! configuration store.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EarningsError, EarningsResult};

/// Store key for [`EarningsConfig::lunch_food_base_income`].
pub const LUNCH_FOOD_BASE_INCOME: &str = "LUNCH_FOOD_BASE_INCOME";
/// Store key for [`EarningsConfig::lunch_food_overage_share_percent`].
pub const LUNCH_FOOD_OVERAGE_SHARE_PERCENT: &str = "LUNCH_FOOD_OVERAGE_SHARE_PERCENT";
/// Store key for [`EarningsConfig::lunch_drink_share_percent`].
pub const LUNCH_DRINK_SHARE_PERCENT: &str = "LUNCH_DRINK_SHARE_PERCENT";
/// Store key for [`EarningsConfig::dinner_food_our_share_percent`].
pub const DINNER_FOOD_OUR_SHARE_PERCENT: &str = "DINNER_FOOD_OUR_SHARE_PERCENT";
/// Store key for [`EarningsConfig::dinner_food_common_pool_percent`].
pub const DINNER_FOOD_COMMON_POOL_PERCENT: &str = "DINNER_FOOD_COMMON_POOL_PERCENT";
/// Store key for [`EarningsConfig::dinner_drink_common_pool_percent`].
pub const DINNER_DRINK_COMMON_POOL_PERCENT: &str = "DINNER_DRINK_COMMON_POOL_PERCENT";

/// The percentages and threshold that drive the earnings split.
///
/// The calculator takes this value as given; range checks happen in
/// [`EarningsConfig::validate`], which the loader runs.
///
/// # Example
///
/// ```
/// use phulkas_earnings::config::EarningsConfig;
/// use rust_decimal::Decimal;
///
/// let config = EarningsConfig::default();
/// assert_eq!(config.lunch_food_base_income, Decimal::new(8000, 0));
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EarningsConfig {
    /// Lunch food income the operator always receives.
    pub lunch_food_base_income: Decimal,
    /// Fraction of lunch food sales above the base income that goes to the operator.
    pub lunch_food_overage_share_percent: Decimal,
    /// Fraction of lunch drink sales that goes to the operator.
    pub lunch_drink_share_percent: Decimal,
    /// Fraction of dinner food sales the operator takes directly when the food is ours.
    pub dinner_food_our_share_percent: Decimal,
    /// Fraction of dinner food sales paid into the common pool.
    pub dinner_food_common_pool_percent: Decimal,
    /// Fraction of dinner drink sales paid into the common pool.
    pub dinner_drink_common_pool_percent: Decimal,
}

impl Default for EarningsConfig {
    fn default() -> Self {
        Self {
            lunch_food_base_income: Decimal::new(8000, 0),
            lunch_food_overage_share_percent: Decimal::new(5, 1),
            lunch_drink_share_percent: Decimal::new(25, 2),
            dinner_food_our_share_percent: Decimal::new(75, 2),
            dinner_food_common_pool_percent: Decimal::new(25, 2),
            dinner_drink_common_pool_percent: Decimal::new(25, 2),
        }
    }
}

impl EarningsConfig {
    /// Sets the field named by a store key. Returns false for unknown keys.
    pub(crate) fn set(&mut self, key: &str, value: Decimal) -> bool {
        let field = match key {
            LUNCH_FOOD_BASE_INCOME => &mut self.lunch_food_base_income,
            LUNCH_FOOD_OVERAGE_SHARE_PERCENT => &mut self.lunch_food_overage_share_percent,
            LUNCH_DRINK_SHARE_PERCENT => &mut self.lunch_drink_share_percent,
            DINNER_FOOD_OUR_SHARE_PERCENT => &mut self.dinner_food_our_share_percent,
            DINNER_FOOD_COMMON_POOL_PERCENT => &mut self.dinner_food_common_pool_percent,
            DINNER_DRINK_COMMON_POOL_PERCENT => &mut self.dinner_drink_common_pool_percent,
            _ => return false,
        };
        *field = value;
        true
    }

    /// Returns every value paired with its store key.
    pub fn entries(&self) -> [(&'static str, Decimal); 6] {
        [
            (LUNCH_FOOD_BASE_INCOME, self.lunch_food_base_income),
            (
                LUNCH_FOOD_OVERAGE_SHARE_PERCENT,
                self.lunch_food_overage_share_percent,
            ),
            (LUNCH_DRINK_SHARE_PERCENT, self.lunch_drink_share_percent),
            (
                DINNER_FOOD_OUR_SHARE_PERCENT,
                self.dinner_food_our_share_percent,
            ),
            (
                DINNER_FOOD_COMMON_POOL_PERCENT,
                self.dinner_food_common_pool_percent,
            ),
            (
                DINNER_DRINK_COMMON_POOL_PERCENT,
                self.dinner_drink_common_pool_percent,
            ),
        ]
    }

    /// Checks that every percentage lies in `[0, 1]` and the base income is not negative.
    ///
    /// # Returns
    ///
    /// Returns `InvalidConfigValue` naming the first offending key.
    pub fn validate(&self) -> EarningsResult<()> {
        for (key, value) in self.entries() {
            if key == LUNCH_FOOD_BASE_INCOME {
                if value < Decimal::ZERO {
                    return Err(EarningsError::InvalidConfigValue {
                        key: key.to_string(),
                        message: format!("must not be negative, got {}", value),
                    });
                }
            } else if value < Decimal::ZERO || value > Decimal::ONE {
                return Err(EarningsError::InvalidConfigValue {
                    key: key.to_string(),
                    message: format!("must be between 0 and 1, got {}", value),
                });
            }
        }
        Ok(())
    }
}

/// A single row of the key/value configuration store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfigEntry {
    /// The store key, e.g. `LUNCH_FOOD_BASE_INCOME`.
    pub key: String,
    /// The stored value.
    pub value: Decimal,
    /// Optional description shown next to the setting.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl ConfigEntry {
    /// Creates an entry without a description.
    pub fn new(key: impl Into<String>, value: Decimal) -> Self {
        Self {
            key: key.into(),
            value,
            description: None,
        }
    }
}
