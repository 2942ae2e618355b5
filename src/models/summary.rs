//! Earnings summary models.
//!
//! This module contains the output values of the calculator: per-meal
//! summaries, the per-day summary, dated entries for a range, and the two
//! range-level aggregates.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Earnings for a single meal (lunch or dinner) on one day.
///
/// `is_our_food` and `number_of_people_working_dinner` are only set on dinner
/// summaries computed from at least one dinner bill.
///
/// # Example
///
/// ```
/// use phulkas_earnings::models::MealSummary;
/// use rust_decimal::Decimal;
///
/// let empty = MealSummary::default();
/// assert_eq!(empty.phulkas_earnings, Decimal::ZERO);
/// assert_eq!(empty.is_our_food, None);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MealSummary {
    /// Sum of food amounts across the meal's bills.
    pub raw_food_total: Decimal,
    /// Sum of drink amounts across the meal's bills.
    pub raw_drink_total: Decimal,
    /// Earnings derived from food.
    pub food_earnings: Decimal,
    /// Earnings derived from drinks. For dinner this is the whole common pool share.
    pub drink_earnings: Decimal,
    /// Total earnings for the meal (`food_earnings + drink_earnings`).
    pub phulkas_earnings: Decimal,
    /// Whether the dinner food was ours.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_our_food: Option<bool>,
    /// Effective number of people the dinner common pool was divided by.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub number_of_people_working_dinner: Option<i32>,
}

/// Earnings for a single day.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailySummary {
    /// Lunch earnings.
    pub lunch: MealSummary,
    /// Dinner earnings.
    pub dinner: MealSummary,
    /// `lunch.phulkas_earnings + dinner.phulkas_earnings`.
    pub day_total_earnings: Decimal,
}

/// A daily summary paired with the day it covers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatedSummary {
    /// The calendar day.
    pub date: NaiveDate,
    /// The earnings for that day.
    pub summary: DailySummary,
}

/// Earnings aggregated over a date range.
///
/// Shaped like [`DailySummary`], with these aggregation rules:
/// - `lunch.raw_food_total` and `lunch.raw_drink_total` hold the totals of
///   both meals across the range; the dinner raw totals stay zero.
/// - `lunch.phulkas_earnings` and `dinner.phulkas_earnings` are summed per meal.
/// - `food_earnings` and `drink_earnings` are not broken down and stay zero.
/// - `day_total_earnings` is the sum of every day's total.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RangeSummary {
    /// Range-level lunch aggregate (also carries the cross-meal raw totals).
    pub lunch: MealSummary,
    /// Range-level dinner aggregate.
    pub dinner: MealSummary,
    /// Sum of the daily totals.
    pub day_total_earnings: Decimal,
}

/// Raw sales totals for a date range, split by meal type.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RangeTotals {
    /// Food sales across both meals.
    pub total_food: Decimal,
    /// Drink sales across both meals.
    pub total_drinks: Decimal,
    /// Lunch food sales.
    pub total_lunch_food: Decimal,
    /// Lunch drink sales.
    pub total_lunch_drinks: Decimal,
    /// Dinner food sales.
    pub total_dinner_food: Decimal,
    /// Dinner drink sales.
    pub total_dinner_drinks: Decimal,
    /// Sum of the daily earnings totals.
    pub total_phulkas_earnings: Decimal,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lunch_summary_omits_dinner_fields() {
        let summary = MealSummary {
            raw_food_total: Decimal::new(8000, 0),
            raw_drink_total: Decimal::new(1000, 0),
            food_earnings: Decimal::new(8000, 0),
            drink_earnings: Decimal::new(250, 0),
            phulkas_earnings: Decimal::new(8250, 0),
            is_our_food: None,
            number_of_people_working_dinner: None,
        };

        let json = serde_json::to_value(&summary).unwrap();
        assert!(json.get("is_our_food").is_none());
        assert!(json.get("number_of_people_working_dinner").is_none());
        assert_eq!(json["phulkas_earnings"], "8250");
    }

    #[test]
    fn test_dinner_summary_includes_dinner_fields() {
        let summary = MealSummary {
            is_our_food: Some(false),
            number_of_people_working_dinner: Some(2),
            ..MealSummary::default()
        };

        let json = serde_json::to_value(&summary).unwrap();
        assert_eq!(json["is_our_food"], false);
        assert_eq!(json["number_of_people_working_dinner"], 2);
    }

    #[test]
    fn test_daily_summary_deserialization_without_optional_fields() {
        let json = r#"{
            "lunch": {
                "raw_food_total": "0",
                "raw_drink_total": "0",
                "food_earnings": "0",
                "drink_earnings": "0",
                "phulkas_earnings": "0"
            },
            "dinner": {
                "raw_food_total": "0",
                "raw_drink_total": "0",
                "food_earnings": "0",
                "drink_earnings": "0",
                "phulkas_earnings": "0"
            },
            "day_total_earnings": "0"
        }"#;

        let summary: DailySummary = serde_json::from_str(json).unwrap();
        assert_eq!(summary, DailySummary::default());
    }

    #[test]
    fn test_dated_summary_serializes_iso_date() {
        let dated = DatedSummary {
            date: NaiveDate::from_ymd_opt(2025, 6, 3).unwrap(),
            summary: DailySummary::default(),
        };

        let json = serde_json::to_value(&dated).unwrap();
        assert_eq!(json["date"], "2025-06-03");
    }
}
