//! Bill record model and meal types.
//!
//! A [`BillRecord`] is a single logged bill: the food and drink amounts taken
//! for one lunch or dinner sitting. Records are produced by the persistence
//! layer and handed to the calculator as plain values.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize};

use super::parse_record_date;

/// The meal a bill was taken for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MealType {
    /// Lunch service.
    #[serde(alias = "LUNCH")]
    Lunch,
    /// Dinner service.
    #[serde(alias = "DINNER")]
    Dinner,
}

/// A single bill entry.
///
/// When deserialized, a missing or `null` `is_our_food` defaults to `true` and
/// a missing or `null` `number_of_people_working_dinner` defaults to `1`.
///
/// # Example
///
/// ```
/// use phulkas_earnings::models::{BillRecord, MealType};
///
/// let bill: BillRecord = serde_json::from_str(r#"{
///     "date": "2025-06-03",
///     "meal_type": "dinner",
///     "food_amount": 5000,
///     "drink_amount": 1000
/// }"#).unwrap();
///
/// assert_eq!(bill.meal_type, MealType::Dinner);
/// assert!(bill.is_our_food);
/// assert_eq!(bill.number_of_people_working_dinner, 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BillRecord {
    /// The bill date as supplied by the retrieval layer.
    pub date: String,
    /// Whether the bill belongs to lunch or dinner.
    pub meal_type: MealType,
    /// Food sales on this bill.
    pub food_amount: Decimal,
    /// Drink sales on this bill.
    pub drink_amount: Decimal,
    /// Whether the food sold was ours. Only meaningful for dinner.
    #[serde(default = "default_is_our_food", deserialize_with = "null_as_our_food")]
    pub is_our_food: bool,
    /// Staff working the dinner shift. Only meaningful for dinner.
    #[serde(default = "default_workers", deserialize_with = "null_as_one_worker")]
    pub number_of_people_working_dinner: i32,
}

fn default_is_our_food() -> bool {
    true
}

fn default_workers() -> i32 {
    1
}

fn null_as_our_food<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<bool>::deserialize(deserializer)?.unwrap_or_else(default_is_our_food))
}

fn null_as_one_worker<'de, D>(deserializer: D) -> Result<i32, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<i32>::deserialize(deserializer)?.unwrap_or_else(default_workers))
}

impl BillRecord {
    /// Creates a lunch bill. The dinner-only fields take their defaults.
    pub fn lunch(date: impl Into<String>, food_amount: Decimal, drink_amount: Decimal) -> Self {
        Self {
            date: date.into(),
            meal_type: MealType::Lunch,
            food_amount,
            drink_amount,
            is_our_food: default_is_our_food(),
            number_of_people_working_dinner: default_workers(),
        }
    }

    /// Creates a dinner bill.
    pub fn dinner(
        date: impl Into<String>,
        food_amount: Decimal,
        drink_amount: Decimal,
        is_our_food: bool,
        number_of_people_working_dinner: i32,
    ) -> Self {
        Self {
            date: date.into(),
            meal_type: MealType::Dinner,
            food_amount,
            drink_amount,
            is_our_food,
            number_of_people_working_dinner,
        }
    }

    /// Returns the calendar date of this bill, or `None` if the date does not parse.
    pub fn parsed_date(&self) -> Option<NaiveDate> {
        parse_record_date(&self.date)
    }

    /// Returns true if this is a lunch bill.
    pub fn is_lunch(&self) -> bool {
        self.meal_type == MealType::Lunch
    }

    /// Returns true if this is a dinner bill.
    pub fn is_dinner(&self) -> bool {
        self.meal_type == MealType::Dinner
    }
}
