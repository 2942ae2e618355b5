//! Purchase expense aggregation.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use tracing::debug;

use crate::models::{DailyPurchaseTotal, PurchaseExpense, PurchaseSummary};

/// Totals purchase expenses per day and overall.
///
/// Expenses with unparseable dates are dropped, as bills are. Days are
/// sorted most recent first.
///
/// # Examples
///
/// ```
/// use phulkas_earnings::calculation::summarize_purchases;
/// use phulkas_earnings::models::PurchaseExpense;
/// use rust_decimal::Decimal;
///
/// let expenses = vec![PurchaseExpense {
///     date: "2025-06-02".to_string(),
///     amount: Decimal::new(3480, 0),
///     description: "Flour".to_string(),
///     comments: None,
/// }];
///
/// let summary = summarize_purchases(&expenses);
/// assert_eq!(summary.total_amount, Decimal::new(3480, 0));
/// assert_eq!(summary.days.len(), 1);
/// ```
pub fn summarize_purchases(expenses: &[PurchaseExpense]) -> PurchaseSummary {
    let mut by_date: BTreeMap<NaiveDate, (Decimal, usize)> = BTreeMap::new();

    for expense in expenses {
        let Some(date) = expense.parsed_date() else {
            debug!(date = %expense.date, "Dropping purchase with unparseable date");
            continue;
        };
        let (total, count) = by_date.entry(date).or_insert((Decimal::ZERO, 0));
        *total += expense.amount;
        *count += 1;
    }

    let days: Vec<DailyPurchaseTotal> = by_date
        .into_iter()
        .rev()
        .map(|(date, (total, count))| DailyPurchaseTotal { date, total, count })
        .collect();
    let total_amount = days.iter().map(|day| day.total).sum();

    PurchaseSummary { days, total_amount }
}
