//! Dinner earnings calculation.
//!
//! Dinner revenue is split two ways. When the food is ours, the operator takes
//! `dinner_food_our_share_percent` of food sales directly. Independently, a
//! fixed share of food and of drink sales goes into a common pool that is
//! divided evenly among the people working the shift, the operator included.

use rust_decimal::Decimal;

use crate::config::EarningsConfig;
use crate::models::MealSummary;

/// Returns the worker count used to divide the common pool.
///
/// Zero or negative counts are clamped to 1.
pub fn effective_workers(number_of_people_working_dinner: i32) -> i32 {
    number_of_people_working_dinner.max(1)
}

/// The intermediate values of a dinner split.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DinnerSplit {
    /// Operator's direct share of food sales (zero when the food is not ours).
    pub direct_food_earnings: Decimal,
    /// Food sales paid into the common pool.
    pub common_pool_food: Decimal,
    /// Drink sales paid into the common pool.
    pub common_pool_drink: Decimal,
    /// `common_pool_food + common_pool_drink`.
    pub total_common_pool: Decimal,
    /// Clamped worker count.
    pub effective_workers: i32,
    /// `total_common_pool / effective_workers`.
    pub our_share_from_common_pool: Decimal,
}

/// Splits dinner sales into the direct share and the common pool.
///
/// The food pool share is `dinner_food_common_pool_percent` of food sales
/// whether or not the food is ours.
pub fn split_dinner(
    food_amount: Decimal,
    drink_amount: Decimal,
    is_our_food: bool,
    number_of_people_working_dinner: i32,
    config: &EarningsConfig,
) -> DinnerSplit {
    let effective_workers = effective_workers(number_of_people_working_dinner);

    let common_pool_food = food_amount * config.dinner_food_common_pool_percent;
    let common_pool_drink = drink_amount * config.dinner_drink_common_pool_percent;
    let direct_food_earnings = if is_our_food {
        food_amount * config.dinner_food_our_share_percent
    } else {
        Decimal::ZERO
    };

    let total_common_pool = common_pool_food + common_pool_drink;
    let our_share_from_common_pool = total_common_pool / Decimal::from(effective_workers);

    DinnerSplit {
        direct_food_earnings,
        common_pool_food,
        common_pool_drink,
        total_common_pool,
        effective_workers,
        our_share_from_common_pool,
    }
}

/// Computes the dinner summary from aggregated food and drink totals.
///
/// `food_earnings` holds the direct food share and `drink_earnings` holds the
/// whole common pool share (food and drink contributions together). The
/// summary carries `is_our_food` and the effective worker count, so any
/// worker count at or below zero gives the same result as one worker.
///
/// # Examples
///
/// ```
/// use phulkas_earnings::calculation::compute_dinner_summary;
/// use phulkas_earnings::config::EarningsConfig;
/// use rust_decimal::Decimal;
///
/// let config = EarningsConfig::default();
/// let summary = compute_dinner_summary(
///     Decimal::new(5000, 0),
///     Decimal::new(1000, 0),
///     true,
///     2,
///     &config,
/// );
///
/// assert_eq!(summary.food_earnings, Decimal::new(3750, 0));
/// assert_eq!(summary.drink_earnings, Decimal::new(750, 0));
/// assert_eq!(summary.phulkas_earnings, Decimal::new(4500, 0));
/// ```
pub fn compute_dinner_summary(
    food_amount: Decimal,
    drink_amount: Decimal,
    is_our_food: bool,
    number_of_people_working_dinner: i32,
    config: &EarningsConfig,
) -> MealSummary {
    let split = split_dinner(
        food_amount,
        drink_amount,
        is_our_food,
        number_of_people_working_dinner,
        config,
    );

    MealSummary {
        raw_food_total: food_amount,
        raw_drink_total: drink_amount,
        food_earnings: split.direct_food_earnings,
        drink_earnings: split.our_share_from_common_pool,
        phulkas_earnings: split.direct_food_earnings + split.our_share_from_common_pool,
        is_our_food: Some(is_our_food),
        number_of_people_working_dinner: Some(split.effective_workers),
    }
}
