// File: crates/trend-core/src/format.rs
// Summary: Number, date and coordinate formatting for labels and path data.

use chrono::{DateTime, NaiveDate};

use crate::error::ChartError;

/// Abbreviate a count: `1.5K`, `2.3M`, otherwise the integer itself.
/// Thresholds apply to the raw value, so negative numbers are never abbreviated.
/// The single decimal rounds half up (`1250` -> `1.3K`).
pub fn format_number(n: i64) -> String {
    if n >= 1_000_000 {
        format!("{}M", tenths(n, 1_000_000))
    } else if n >= 1_000 {
        format!("{}K", tenths(n, 1_000))
    } else {
        n.to_string()
    }
}

/// `n / unit` rounded half up to one decimal, for positive `n`.
fn tenths(n: i64, unit: i64) -> String {
    let step = i128::from(unit / 10);
    let t = (i128::from(n) + step / 2) / step;
    format!("{}.{}", t / 10, t % 10)
}

/// Lossless `u64` to `i64` for display, saturating at `i64::MAX`.
#[inline]
pub fn saturating_i64(v: u64) -> i64 {
    i64::try_from(v).unwrap_or(i64::MAX)
}

/// Parse a sample date, accepting `YYYY-MM-DD` or an RFC 3339 timestamp.
pub fn parse_date(date: &str) -> Result<NaiveDate, ChartError> {
    let s = date.trim();
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .or_else(|e| DateTime::parse_from_rfc3339(s).map(|dt| dt.date_naive()).map_err(|_| e))
        .map_err(|source| ChartError::InvalidDate { date: date.to_string(), source })
}

/// Short axis label: English month abbreviation and day of month, e.g. `Mar 7`. No year.
pub fn format_date(date: &str) -> Result<String, ChartError> {
    Ok(parse_date(date)?.format("%b %-d").to_string())
}

/// Two-decimal coordinate used in every emitted path and position.
#[inline]
pub fn coord(v: f64) -> String {
    format!("{:.2}", v)
}

/// `+` prefix for non-negative values (zero included).
#[inline]
pub fn sign_prefix(non_negative: bool) -> &'static str {
    if non_negative { "+" } else { "" }
}
