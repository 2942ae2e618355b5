//! Grouping of bills by calendar day.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use tracing::debug;

use crate::models::BillRecord;

/// Groups bills by their calendar date.
///
/// Bills whose date does not parse are dropped. Within each day, bills keep
/// their input order, which the dinner flag rule in
/// [`compute_daily_earnings`](super::compute_daily_earnings) relies on.
///
/// # Examples
///
/// ```
/// use phulkas_earnings::calculation::group_by_date;
/// use phulkas_earnings::models::BillRecord;
/// use rust_decimal::Decimal;
///
/// let bills = vec![
///     BillRecord::lunch("2025-06-03", Decimal::new(9000, 0), Decimal::ZERO),
///     BillRecord::lunch("2025-06-03T20:00:00", Decimal::new(100, 0), Decimal::ZERO),
///     BillRecord::lunch("garbage", Decimal::new(100, 0), Decimal::ZERO),
/// ];
///
/// let groups = group_by_date(&bills);
/// assert_eq!(groups.len(), 1);
/// assert_eq!(groups.values().next().unwrap().len(), 2);
/// ```
pub fn group_by_date(bills: &[BillRecord]) -> BTreeMap<NaiveDate, Vec<&BillRecord>> {
    let mut groups: BTreeMap<NaiveDate, Vec<&BillRecord>> = BTreeMap::new();

    for bill in bills {
        match bill.parsed_date() {
            Some(date) => groups.entry(date).or_default().push(bill),
            None => debug!(date = %bill.date, "Dropping bill with unparseable date"),
        }
    }

    groups
}
