//! Earnings breakdown for display.
//!
//! Rebuilds the intermediate values behind a summary (base income, overage
//! share, common pool contributions) from its raw totals and the config, and
//! records each one as a [`BreakdownStep`].

use serde_json::json;

use crate::config::EarningsConfig;
use crate::models::{BreakdownStep, DailySummary, EarningsBreakdown, MealSummary};

use super::dinner::split_dinner;
use super::lunch::lunch_food_overage;

fn step(
    step_number: u32,
    rule_id: &str,
    rule_name: &str,
    input: serde_json::Value,
    output: serde_json::Value,
    reasoning: String,
) -> BreakdownStep {
    BreakdownStep {
        step_number,
        rule_id: rule_id.to_string(),
        rule_name: rule_name.to_string(),
        input,
        output,
        reasoning,
    }
}

fn no_bills_step(step_number: u32, meal: &str) -> BreakdownStep {
    step(
        step_number,
        &format!("{}_no_bills", meal),
        "No Bills",
        json!({}),
        json!({ "phulkas_earnings": "0" }),
        format!("No {} bills recorded", meal),
    )
}

/// Explains a lunch summary, numbering steps from `first_step`.
///
/// Steps: base income, overage share (only when food sales exceed the base),
/// drink share, meal total. An empty summary gets a single no-bills step.
pub fn explain_lunch(
    summary: &MealSummary,
    config: &EarningsConfig,
    first_step: u32,
) -> Vec<BreakdownStep> {
    if *summary == MealSummary::default() {
        return vec![no_bills_step(first_step, "lunch")];
    }

    let base = config.lunch_food_base_income;
    let mut steps = Vec::with_capacity(4);
    let mut step_number = first_step;

    steps.push(step(
        step_number,
        "lunch_base_income",
        "Lunch Base Income",
        json!({
            "raw_food_total": summary.raw_food_total.normalize().to_string(),
            "base_income": base.normalize().to_string()
        }),
        json!({ "base_income": base.normalize().to_string() }),
        format!(
            "Base income of {} applies to lunch food sales of {}",
            base.normalize(),
            summary.raw_food_total.normalize()
        ),
    ));
    step_number += 1;

    if summary.raw_food_total > base {
        let overage = lunch_food_overage(summary.raw_food_total, config);
        let share_percent = config.lunch_food_overage_share_percent;
        let overage_share = overage * share_percent;
        steps.push(step(
            step_number,
            "lunch_overage_share",
            "Lunch Overage Share",
            json!({
                "raw_food_total": summary.raw_food_total.normalize().to_string(),
                "base_income": base.normalize().to_string(),
                "share_percent": share_percent.normalize().to_string()
            }),
            json!({
                "overage": overage.normalize().to_string(),
                "overage_share": overage_share.normalize().to_string()
            }),
            format!(
                "({} - {}) x {} = {}",
                summary.raw_food_total.normalize(),
                base.normalize(),
                share_percent.normalize(),
                overage_share.normalize()
            ),
        ));
        step_number += 1;
    }

    let drink_percent = config.lunch_drink_share_percent;
    steps.push(step(
        step_number,
        "lunch_drink_share",
        "Lunch Drink Share",
        json!({
            "raw_drink_total": summary.raw_drink_total.normalize().to_string(),
            "share_percent": drink_percent.normalize().to_string()
        }),
        json!({ "drink_earnings": summary.drink_earnings.normalize().to_string() }),
        format!(
            "{} x {} = {}",
            summary.raw_drink_total.normalize(),
            drink_percent.normalize(),
            summary.drink_earnings.normalize()
        ),
    ));
    step_number += 1;

    steps.push(meal_total_step(step_number, "lunch", summary));
    steps
}

/// Explains a dinner summary, numbering steps from `first_step`.
///
/// Steps: direct food share (only when the food is ours), food and drink
/// common pool contributions, pool share per effective worker, meal total.
/// Missing flags are read as our food and one worker. An empty summary gets
/// a single no-bills step.
pub fn explain_dinner(
    summary: &MealSummary,
    config: &EarningsConfig,
    first_step: u32,
) -> Vec<BreakdownStep> {
    if *summary == MealSummary::default() {
        return vec![no_bills_step(first_step, "dinner")];
    }

    let is_our_food = summary.is_our_food.unwrap_or(true);
    let split = split_dinner(
        summary.raw_food_total,
        summary.raw_drink_total,
        is_our_food,
        summary.number_of_people_working_dinner.unwrap_or(1),
        config,
    );

    let mut steps = Vec::with_capacity(5);
    let mut step_number = first_step;

    if is_our_food {
        let percent = config.dinner_food_our_share_percent;
        steps.push(step(
            step_number,
            "dinner_direct_food_share",
            "Dinner Direct Food Share",
            json!({
                "raw_food_total": summary.raw_food_total.normalize().to_string(),
                "share_percent": percent.normalize().to_string()
            }),
            json!({ "direct_food_earnings": split.direct_food_earnings.normalize().to_string() }),
            format!(
                "{} x {} = {}",
                summary.raw_food_total.normalize(),
                percent.normalize(),
                split.direct_food_earnings.normalize()
            ),
        ));
        step_number += 1;
    }

    let food_pool_percent = config.dinner_food_common_pool_percent;
    steps.push(step(
        step_number,
        "dinner_common_pool_food",
        "Dinner Common Pool (Food)",
        json!({
            "raw_food_total": summary.raw_food_total.normalize().to_string(),
            "pool_percent": food_pool_percent.normalize().to_string()
        }),
        json!({ "common_pool_food": split.common_pool_food.normalize().to_string() }),
        format!(
            "{} x {} = {}",
            summary.raw_food_total.normalize(),
            food_pool_percent.normalize(),
            split.common_pool_food.normalize()
        ),
    ));
    step_number += 1;

    let drink_pool_percent = config.dinner_drink_common_pool_percent;
    steps.push(step(
        step_number,
        "dinner_common_pool_drinks",
        "Dinner Common Pool (Drinks)",
        json!({
            "raw_drink_total": summary.raw_drink_total.normalize().to_string(),
            "pool_percent": drink_pool_percent.normalize().to_string()
        }),
        json!({ "common_pool_drink": split.common_pool_drink.normalize().to_string() }),
        format!(
            "{} x {} = {}",
            summary.raw_drink_total.normalize(),
            drink_pool_percent.normalize(),
            split.common_pool_drink.normalize()
        ),
    ));
    step_number += 1;

    steps.push(step(
        step_number,
        "dinner_pool_share",
        "Dinner Common Pool Share",
        json!({
            "total_common_pool": split.total_common_pool.normalize().to_string(),
            "effective_workers": split.effective_workers
        }),
        json!({
            "our_share_from_common_pool": split.our_share_from_common_pool.normalize().to_string()
        }),
        format!(
            "({} + {}) / {} = {}",
            split.common_pool_food.normalize(),
            split.common_pool_drink.normalize(),
            split.effective_workers,
            split.our_share_from_common_pool.normalize()
        ),
    ));
    step_number += 1;

    steps.push(meal_total_step(step_number, "dinner", summary));
    steps
}

fn meal_total_step(step_number: u32, meal: &str, summary: &MealSummary) -> BreakdownStep {
    step(
        step_number,
        &format!("{}_total", meal),
        "Meal Total",
        json!({
            "food_earnings": summary.food_earnings.normalize().to_string(),
            "drink_earnings": summary.drink_earnings.normalize().to_string()
        }),
        json!({ "phulkas_earnings": summary.phulkas_earnings.normalize().to_string() }),
        format!(
            "{} + {} = {}",
            summary.food_earnings.normalize(),
            summary.drink_earnings.normalize(),
            summary.phulkas_earnings.normalize()
        ),
    )
}

/// Explains a daily summary: lunch steps, dinner steps, then the day total.
///
/// Step numbers run from 1 without gaps.
///
/// # Examples
///
/// ```
/// use phulkas_earnings::calculation::{compute_daily_earnings, explain_daily};
/// use phulkas_earnings::config::EarningsConfig;
/// use phulkas_earnings::models::BillRecord;
/// use rust_decimal::Decimal;
///
/// let config = EarningsConfig::default();
/// let bills = vec![BillRecord::lunch("2025-06-03", Decimal::new(10000, 0), Decimal::ZERO)];
/// let summary = compute_daily_earnings(&bills, &config);
///
/// let breakdown = explain_daily(&summary, &config);
/// let overage = breakdown.step("lunch_overage_share").unwrap();
/// assert_eq!(overage.reasoning, "(10000 - 8000) x 0.5 = 1000");
/// ```
pub fn explain_daily(summary: &DailySummary, config: &EarningsConfig) -> EarningsBreakdown {
    let mut steps = explain_lunch(&summary.lunch, config, 1);
    let next = steps.len() as u32 + 1;
    steps.extend(explain_dinner(&summary.dinner, config, next));

    let total_step_number = steps.len() as u32 + 1;
    let lunch = summary.lunch.phulkas_earnings;
    let dinner = summary.dinner.phulkas_earnings;
    steps.push(step(
        total_step_number,
        "day_total",
        "Day Total",
        json!({
            "lunch_earnings": lunch.normalize().to_string(),
            "dinner_earnings": dinner.normalize().to_string()
        }),
        json!({ "day_total_earnings": summary.day_total_earnings.normalize().to_string() }),
        format!(
            "{} + {} = {}",
            lunch.normalize(),
            dinner.normalize(),
            summary.day_total_earnings.normalize()
        ),
    ));

    EarningsBreakdown { steps }
}
