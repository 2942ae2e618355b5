//! Daily earnings calculation.
//!
//! A day's bills are split by meal. Amounts are summed per meal and the meal
//! formula is applied once to the totals, not bill by bill.

use rust_decimal::Decimal;

use crate::config::EarningsConfig;
use crate::models::{BillRecord, DailySummary, MealSummary, MealType};

use super::dinner::compute_dinner_summary;
use super::lunch::compute_lunch_summary;

#[derive(Debug, Default)]
struct LunchTotals {
    food: Decimal,
    drink: Decimal,
    bills: usize,
}

/// Dinner totals. The two flags are overwritten by every dinner bill, so the
/// last bill in input order decides them.
#[derive(Debug, Default)]
struct DinnerTotals {
    food: Decimal,
    drink: Decimal,
    flags: Option<(bool, i32)>,
}

/// Computes the earnings summary for one day's bills.
///
/// - Lunch uses the summed lunch amounts.
/// - Dinner uses the summed dinner amounts with `is_our_food` and
///   `number_of_people_working_dinner` taken from the last dinner bill.
/// - A meal without bills gets the all-zero [`MealSummary::default`]. Lunch
///   does not receive its base income on a day without lunch bills.
///
/// Bill dates are not inspected; callers group bills by day first (see
/// [`group_by_date`](super::group_by_date)).
///
/// # Examples
///
/// ```
/// use phulkas_earnings::calculation::compute_daily_earnings;
/// use phulkas_earnings::config::EarningsConfig;
/// use phulkas_earnings::models::BillRecord;
/// use rust_decimal::Decimal;
///
/// let bills = vec![
///     BillRecord::lunch("2025-06-03", Decimal::new(8000, 0), Decimal::new(1000, 0)),
///     BillRecord::dinner("2025-06-03", Decimal::new(5000, 0), Decimal::new(1000, 0), true, 2),
/// ];
///
/// let summary = compute_daily_earnings(&bills, &EarningsConfig::default());
/// assert_eq!(summary.day_total_earnings, Decimal::new(12750, 0));
/// ```
pub fn compute_daily_earnings<'a, I>(bills: I, config: &EarningsConfig) -> DailySummary
where
    I: IntoIterator<Item = &'a BillRecord>,
{
    let mut lunch = LunchTotals::default();
    let mut dinner = DinnerTotals::default();

    for bill in bills {
        match bill.meal_type {
            MealType::Lunch => {
                lunch.food += bill.food_amount;
                lunch.drink += bill.drink_amount;
                lunch.bills += 1;
            }
            MealType::Dinner => {
                dinner.food += bill.food_amount;
                dinner.drink += bill.drink_amount;
                dinner.flags = Some((bill.is_our_food, bill.number_of_people_working_dinner));
            }
        }
    }

    let lunch = if lunch.bills > 0 {
        compute_lunch_summary(lunch.food, lunch.drink, config)
    } else {
        MealSummary::default()
    };

    let dinner = match dinner.flags {
        Some((is_our_food, workers)) => {
            compute_dinner_summary(dinner.food, dinner.drink, is_our_food, workers, config)
        }
        None => MealSummary::default(),
    };

    let day_total_earnings = lunch.phulkas_earnings + dinner.phulkas_earnings;

    DailySummary {
        lunch,
        dinner,
        day_total_earnings,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    const DAY: &str = "2025-06-03";

    #[test]
    fn test_no_bills_is_all_zero() {
        let bills: Vec<BillRecord> = vec![];
        let summary = compute_daily_earnings(&bills, &EarningsConfig::default());

        assert_eq!(summary, DailySummary::default());
        assert_eq!(summary.lunch.phulkas_earnings, Decimal::ZERO);
        assert_eq!(summary.dinner.is_our_food, None);
    }

    #[test]
    fn test_lunch_bills_are_aggregated_before_formula() {
        // Each bill alone is under the base; together they exceed it by 2000.
        let bills = vec![
            BillRecord::lunch(DAY, dec("6000"), dec("1200")),
            BillRecord::lunch(DAY, dec("4000"), dec("800")),
        ];

        let summary = compute_daily_earnings(&bills, &EarningsConfig::default());

        assert_eq!(summary.lunch.raw_food_total, dec("10000"));
        assert_eq!(summary.lunch.raw_drink_total, dec("2000"));
        assert_eq!(summary.lunch.food_earnings, dec("9000"));
        assert_eq!(summary.lunch.phulkas_earnings, dec("9500"));
        assert_eq!(summary.dinner, MealSummary::default());
        assert_eq!(summary.day_total_earnings, dec("9500"));
    }

    #[test]
    fn test_dinner_only_day_has_zero_lunch() {
        let bills = vec![BillRecord::dinner(DAY, dec("1000"), dec("500"), false, 0)];

        let summary = compute_daily_earnings(&bills, &EarningsConfig::default());

        assert_eq!(summary.lunch, MealSummary::default());
        assert_eq!(summary.dinner.phulkas_earnings, dec("375"));
        assert_eq!(summary.day_total_earnings, dec("375"));
    }

    /// The last dinner bill decides the flags; amounts are cumulative.
    #[test]
    fn test_dinner_flags_last_wins() {
        let bills = vec![
            BillRecord::dinner(DAY, dec("2000"), dec("400"), false, 1),
            BillRecord::dinner(DAY, dec("1000"), dec("200"), true, 3),
        ];

        let summary = compute_daily_earnings(&bills, &EarningsConfig::default());

        let expected =
            compute_dinner_summary(dec("3000"), dec("600"), true, 3, &EarningsConfig::default());
        assert_eq!(summary.dinner, expected);
        assert_eq!(summary.dinner.is_our_food, Some(true));
        assert_eq!(summary.dinner.number_of_people_working_dinner, Some(3));
        // 3000 * 0.75 + (750 + 150) / 3
        assert_eq!(summary.dinner.phulkas_earnings, dec("2550"));
    }

    #[test]
    fn test_last_wins_ignores_interleaved_lunch_bills() {
        let bills = vec![
            BillRecord::dinner(DAY, dec("1000"), dec("0"), true, 2),
            BillRecord::lunch(DAY, dec("8000"), dec("0")),
            BillRecord::dinner(DAY, dec("1000"), dec("0"), false, 4),
            BillRecord::lunch(DAY, dec("500"), dec("0")),
        ];

        let summary = compute_daily_earnings(&bills, &EarningsConfig::default());

        assert_eq!(summary.dinner.is_our_food, Some(false));
        assert_eq!(summary.dinner.number_of_people_working_dinner, Some(4));
        assert_eq!(summary.dinner.phulkas_earnings, dec("125"));
        assert_eq!(summary.lunch.raw_food_total, dec("8500"));
    }

    #[test]
    fn test_day_total_is_sum_of_meals() {
        let bills = vec![
            BillRecord::lunch(DAY, dec("8000"), dec("1000")),
            BillRecord::dinner(DAY, dec("5000"), dec("1000"), true, 2),
        ];

        let summary = compute_daily_earnings(&bills, &EarningsConfig::default());

        assert_eq!(summary.lunch.phulkas_earnings, dec("8250"));
        assert_eq!(summary.dinner.phulkas_earnings, dec("4500"));
        assert_eq!(summary.day_total_earnings, dec("12750"));
    }

    #[test]
    fn test_accepts_borrowed_bills() {
        let bills = [
            BillRecord::lunch(DAY, dec("8000"), dec("0")),
            BillRecord::dinner(DAY, dec("400"), dec("0"), true, 1),
        ];
        let refs: Vec<&BillRecord> = bills.iter().collect();

        let from_refs = compute_daily_earnings(refs, &EarningsConfig::default());
        let from_slice = compute_daily_earnings(&bills, &EarningsConfig::default());
        assert_eq!(from_refs, from_slice);
    }
}
