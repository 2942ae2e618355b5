//! Date range calculations.
//!
//! These build on [`group_by_date`] and [`compute_daily_earnings`] to produce
//! per-day summaries for a range and the two range-level aggregates.

use rust_decimal::Decimal;

use crate::config::EarningsConfig;
use crate::models::{BillRecord, DatedSummary, MealType, RangeSummary, RangeTotals};

use super::daily::compute_daily_earnings;
use super::grouping::group_by_date;

/// Computes one daily summary per distinct valid date, most recent first.
///
/// Bills with unparseable dates are dropped.
///
/// # Examples
///
/// ```
/// use phulkas_earnings::calculation::compute_daily_summaries_for_range;
/// use phulkas_earnings::config::EarningsConfig;
/// use phulkas_earnings::models::BillRecord;
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let bills = vec![
///     BillRecord::lunch("2025-06-01", Decimal::new(8000, 0), Decimal::ZERO),
///     BillRecord::lunch("2025-06-03", Decimal::new(8000, 0), Decimal::ZERO),
/// ];
///
/// let days = compute_daily_summaries_for_range(&bills, &EarningsConfig::default());
/// assert_eq!(days[0].date, NaiveDate::from_ymd_opt(2025, 6, 3).unwrap());
/// assert_eq!(days[1].date, NaiveDate::from_ymd_opt(2025, 6, 1).unwrap());
/// ```
pub fn compute_daily_summaries_for_range(
    bills: &[BillRecord],
    config: &EarningsConfig,
) -> Vec<DatedSummary> {
    group_by_date(bills)
        .into_iter()
        .rev()
        .map(|(date, bills_for_day)| DatedSummary {
            date,
            summary: compute_daily_earnings(bills_for_day, config),
        })
        .collect()
}

/// Aggregates a range of bills into a [`RangeSummary`].
///
/// - `lunch.raw_food_total` / `lunch.raw_drink_total` hold the lunch and
///   dinner raw totals of every day combined; the dinner raw totals are zero.
/// - Meal earnings are summed per meal; the food/drink split is not carried.
/// - `day_total_earnings` sums the daily totals.
///
/// Empty input gives [`RangeSummary::default`].
///
/// # Examples
///
/// ```
/// use phulkas_earnings::calculation::compute_range_summary;
/// use phulkas_earnings::config::EarningsConfig;
/// use phulkas_earnings::models::BillRecord;
/// use rust_decimal::Decimal;
///
/// let bills = vec![
///     BillRecord::lunch("2025-06-03", Decimal::new(8000, 0), Decimal::new(1000, 0)),
///     BillRecord::dinner("2025-06-03", Decimal::new(5000, 0), Decimal::new(1000, 0), true, 2),
/// ];
///
/// let range = compute_range_summary(&bills, &EarningsConfig::default());
/// assert_eq!(range.lunch.raw_food_total, Decimal::new(13000, 0));
/// assert_eq!(range.dinner.raw_food_total, Decimal::ZERO);
/// assert_eq!(range.day_total_earnings, Decimal::new(12750, 0));
/// ```
pub fn compute_range_summary(bills: &[BillRecord], config: &EarningsConfig) -> RangeSummary {
    compute_daily_summaries_for_range(bills, config)
        .iter()
        .fold(RangeSummary::default(), |mut range, day| {
            let summary = &day.summary;
            range.lunch.raw_food_total +=
                summary.lunch.raw_food_total + summary.dinner.raw_food_total;
            range.lunch.raw_drink_total +=
                summary.lunch.raw_drink_total + summary.dinner.raw_drink_total;
            range.lunch.phulkas_earnings += summary.lunch.phulkas_earnings;
            range.dinner.phulkas_earnings += summary.dinner.phulkas_earnings;
            range.day_total_earnings += summary.day_total_earnings;
            range
        })
}

/// Computes raw sales totals per meal type and the summed daily earnings.
///
/// Only bills with a valid date are counted, matching the bills that
/// contribute to `total_phulkas_earnings`.
pub fn compute_range_totals(bills: &[BillRecord], config: &EarningsConfig) -> RangeTotals {
    let mut totals = RangeTotals::default();

    for bill in bills.iter().filter(|bill| bill.parsed_date().is_some()) {
        totals.total_food += bill.food_amount;
        totals.total_drinks += bill.drink_amount;
        match bill.meal_type {
            MealType::Lunch => {
                totals.total_lunch_food += bill.food_amount;
                totals.total_lunch_drinks += bill.drink_amount;
            }
            MealType::Dinner => {
                totals.total_dinner_food += bill.food_amount;
                totals.total_dinner_drinks += bill.drink_amount;
            }
        }
    }

    totals.total_phulkas_earnings = compute_daily_summaries_for_range(bills, config)
        .iter()
        .map(|day| day.summary.day_total_earnings)
        .sum::<Decimal>();

    totals
}
