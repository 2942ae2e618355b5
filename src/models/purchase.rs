//! Purchase expense models.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::parse_record_date;

/// A purchase expense logged against a day (ingredients, supplies).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PurchaseExpense {
    /// The purchase date as supplied by the retrieval layer.
    pub date: String,
    /// Amount spent.
    pub amount: Decimal,
    /// What was bought.
    pub description: String,
    /// Free-form notes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comments: Option<String>,
}

impl PurchaseExpense {
    /// Returns the calendar date of this expense, or `None` if it does not parse.
    pub fn parsed_date(&self) -> Option<NaiveDate> {
        parse_record_date(&self.date)
    }
}

/// Purchase expenses for a single day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyPurchaseTotal {
    /// The calendar day.
    pub date: NaiveDate,
    /// Sum of the day's expense amounts.
    pub total: Decimal,
    /// Number of expenses logged that day.
    pub count: usize,
}

/// Purchase expenses over a range, most recent day first.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PurchaseSummary {
    /// Per-day totals, sorted by date descending.
    pub days: Vec<DailyPurchaseTotal>,
    /// Sum over all days.
    pub total_amount: Decimal,
}
