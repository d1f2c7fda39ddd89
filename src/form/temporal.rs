//! Conversions between timestamps and their form transport values.
//!
//! Forms carry dates as float seconds since the Unix epoch. Submissions may
//! also come back as text, so a few textual formats are accepted as well.

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Utc};

const NANOS_PER_SECOND: f64 = 1_000_000_000.0;

/// Textual formats tried after RFC 3339
const DATETIME_FORMATS: &[&str] = &["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S"];
const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%Y/%m/%d"];

/// Seconds since the epoch, with sub-second precision
#[must_use]
pub fn to_epoch_seconds(ts: &DateTime<Utc>) -> f64 {
    ts.timestamp() as f64 + f64::from(ts.timestamp_subsec_nanos()) / NANOS_PER_SECOND
}

/// Timestamp at `seconds` past the epoch
///
/// Returns `None` for non-finite or out-of-range input.
#[must_use]
pub fn from_epoch_seconds(seconds: f64) -> Option<DateTime<Utc>> {
    if !seconds.is_finite() {
        return None;
    }

    let mut whole = seconds.floor();
    let mut nanos = ((seconds - whole) * NANOS_PER_SECOND).round();
    if nanos >= NANOS_PER_SECOND {
        whole += 1.0;
        nanos = 0.0;
    }

    if whole < i64::MIN as f64 || whole >= i64::MAX as f64 {
        return None;
    }

    DateTime::from_timestamp(whole as i64, nanos as u32)
}

/// Parse a submitted textual timestamp
///
/// Tries RFC 3339, then date-time and date formats (interpreted as UTC), and
/// finally a plain number of epoch seconds.
#[must_use]
pub fn parse_timestamp(s: &str) -> Option<DateTime<Utc>> {
    let s = s.trim();

    if let Ok(ts) = DateTime::parse_from_rfc3339(s) {
        return Some(ts.with_timezone(&Utc));
    }

    for format in DATETIME_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(s, format) {
            return Some(naive.and_utc());
        }
    }

    for format in DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(s, format) {
            return Some(date.and_time(NaiveTime::MIN).and_utc());
        }
    }

    s.parse::<f64>().ok().and_then(from_epoch_seconds)
}
