//! Data models for the earnings calculator.
//!
//! Inputs are [`BillRecord`] and [`PurchaseExpense`] values; everything else
//! is an output value computed fresh on each call.

mod bill;
mod breakdown;
mod purchase;
mod record_date;
mod summary;

pub use bill::{BillRecord, MealType};
pub use breakdown::{BreakdownStep, EarningsBreakdown};
pub use purchase::{DailyPurchaseTotal, PurchaseExpense, PurchaseSummary};
pub use record_date::parse_record_date;
pub use summary::{DailySummary, DatedSummary, MealSummary, RangeSummary, RangeTotals};
