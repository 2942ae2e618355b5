//! Date parsing for bill and purchase records.
//!
//! Records arrive with their date as a raw string, in whichever form the
//! retrieval layer produced it. Everything is normalized to a calendar date;
//! the time of day is discarded.

use chrono::{DateTime, NaiveDate, NaiveDateTime};

const DATE_FORMAT: &str = "%Y-%m-%d";
const DATETIME_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];

/// Parses a record date into its calendar day.
///
/// Accepts `YYYY-MM-DD`, naive timestamps (`YYYY-MM-DDTHH:MM:SS` with an
/// optional fraction, `T` or space separated) and RFC 3339 timestamps. An RFC
/// 3339 value keeps the date as written in its own offset. Returns `None` for
/// anything else.
///
/// # Examples
///
/// ```
/// use phulkas_earnings::models::parse_record_date;
/// use chrono::NaiveDate;
///
/// let day = NaiveDate::from_ymd_opt(2025, 6, 3).unwrap();
/// assert_eq!(parse_record_date("2025-06-03"), Some(day));
/// assert_eq!(parse_record_date("2025-06-03T21:15:00+09:00"), Some(day));
/// assert_eq!(parse_record_date("not a date"), None);
/// ```
pub fn parse_record_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();

    if let Ok(date) = NaiveDate::parse_from_str(raw, DATE_FORMAT) {
        return Some(date);
    }

    if let Ok(datetime) = DateTime::parse_from_rfc3339(raw) {
        return Some(datetime.date_naive());
    }

    DATETIME_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(raw, format).ok())
        .map(|datetime| datetime.date())
}
