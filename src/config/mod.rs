//! Configuration loading and management for the earnings calculator.
//!
//! The calculator takes an [`EarningsConfig`] by reference on every call. This
//! module builds one from a YAML file or from the application's key/value
//! configuration store, and validates it.
//!
//! # Example
//!
//! ```no_run
//! use phulkas_earnings::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/earnings.yaml").unwrap().into_config();
//! println!("Lunch base income: {}", config.lunch_food_base_income);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{
    ConfigEntry, DINNER_DRINK_COMMON_POOL_PERCENT, DINNER_FOOD_COMMON_POOL_PERCENT,
    DINNER_FOOD_OUR_SHARE_PERCENT, EarningsConfig, LUNCH_DRINK_SHARE_PERCENT,
    LUNCH_FOOD_BASE_INCOME, LUNCH_FOOD_OVERAGE_SHARE_PERCENT,
};
