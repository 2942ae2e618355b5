//! Calculation logic for the earnings split.
//!
//! This module contains the lunch and dinner earnings formulas, daily
//! aggregation with the last-wins rule for dinner flags, grouping of bills by
//! date, range summaries, the display breakdown of a summary, and purchase
//! expense totals. Every function here is pure: the config is passed in by
//! reference and nothing is cached between calls.

mod breakdown;
mod daily;
mod dinner;
mod grouping;
mod lunch;
mod purchases;
mod range;

pub use breakdown::{explain_daily, explain_dinner, explain_lunch};
pub use daily::compute_daily_earnings;
pub use dinner::{DinnerSplit, compute_dinner_summary, effective_workers, split_dinner};
pub use grouping::group_by_date;
pub use lunch::{compute_lunch_summary, lunch_food_overage};
pub use purchases::summarize_purchases;
pub use range::{compute_daily_summaries_for_range, compute_range_summary, compute_range_totals};
