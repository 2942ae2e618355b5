//! Lunch earnings calculation.
//!
//! Lunch food earns the operator a fixed base income plus a share of any
//! sales above that base. Lunch drinks earn a flat share.

use rust_decimal::Decimal;

use crate::config::EarningsConfig;
use crate::models::MealSummary;

/// Returns how far lunch food sales exceed the base income, or zero.
pub fn lunch_food_overage(food_amount: Decimal, config: &EarningsConfig) -> Decimal {
    (food_amount - config.lunch_food_base_income).max(Decimal::ZERO)
}

/// Computes the lunch summary from aggregated food and drink totals.
///
/// The operator always earns at least `lunch_food_base_income` from food,
/// however low the sales; only the overage is shared at
/// `lunch_food_overage_share_percent`.
///
/// # Examples
///
/// ```
/// use phulkas_earnings::calculation::compute_lunch_summary;
/// use phulkas_earnings::config::EarningsConfig;
/// use rust_decimal::Decimal;
///
/// let config = EarningsConfig::default();
/// let summary = compute_lunch_summary(Decimal::new(10000, 0), Decimal::new(2000, 0), &config);
///
/// assert_eq!(summary.food_earnings, Decimal::new(9000, 0));
/// assert_eq!(summary.drink_earnings, Decimal::new(500, 0));
/// assert_eq!(summary.phulkas_earnings, Decimal::new(9500, 0));
/// ```
pub fn compute_lunch_summary(
    food_amount: Decimal,
    drink_amount: Decimal,
    config: &EarningsConfig,
) -> MealSummary {
    let overage = lunch_food_overage(food_amount, config);
    let food_earnings =
        config.lunch_food_base_income + overage * config.lunch_food_overage_share_percent;
    let drink_earnings = drink_amount * config.lunch_drink_share_percent;

    MealSummary {
        raw_food_total: food_amount,
        raw_drink_total: drink_amount,
        food_earnings,
        drink_earnings,
        phulkas_earnings: food_earnings + drink_earnings,
        is_our_food: None,
        number_of_people_working_dinner: None,
    }
}
