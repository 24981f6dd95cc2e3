// File: crates/ma-chart-core/src/series.rs
// Summary: Daily price records and the moving-average points derived from them.
// Notes:
// - Only the close price is kept; the loader drops the other OHLCV fields.
// - Dates stay as the ISO-8601 strings the fixture carries; `day_label`
//   trims them to a calendar day for axis labels and tooltips.

use chrono::{DateTime, NaiveDate, NaiveDateTime};

/// One daily record from the input series.
#[derive(Clone, Debug, PartialEq)]
pub struct PricePoint {
    pub date: String,
    pub close: f64,
}

impl PricePoint {
    pub fn new(date: impl Into<String>, close: f64) -> Self {
        Self { date: date.into(), close }
    }
}

/// Average of one trailing window, labeled with the day it is "as of"
/// (the day right after the window).
#[derive(Clone, Debug, PartialEq)]
pub struct MovingAveragePoint {
    pub date: String,
    pub value: f64,
}

impl MovingAveragePoint {
    pub fn new(date: impl Into<String>, value: f64) -> Self {
        Self { date: date.into(), value }
    }

    /// Calendar-day label for this point, e.g. `2023-05-12`.
    pub fn day_label(&self) -> String {
        day_label(&self.date)
    }
}

/// Reduce an ISO-8601 date or timestamp to `YYYY-MM-DD`.
///
/// Unparseable input falls back to the text before the first `T`.
pub fn day_label(raw: &str) -> String {
    let raw = raw.trim();
    if let Ok(d) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return d.format("%Y-%m-%d").to_string();
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return dt.date_naive().format("%Y-%m-%d").to_string();
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return dt.date().format("%Y-%m-%d").to_string();
    }
    raw.split('T').next().unwrap_or(raw).to_string()
}
