//! Reporting window and label helpers shared by the analytics endpoints.

use chrono::{Datelike, Months, NaiveDate};

use crate::models::analytics::AnalyticsRange;

/// First day of the month that opens an analytics window.
///
/// Subtracts the range from `today`, then truncates to the first of that
/// month, so `6m` asked on 2025-08-22 starts at 2025-02-01 and covers up to
/// seven calendar months inclusive.
pub fn window_start(today: NaiveDate, range: AnalyticsRange) -> NaiveDate {
    let shifted = today
        .checked_sub_months(Months::new(range.months()))
        .unwrap_or(today);
    NaiveDate::from_ymd_opt(shifted.year(), shifted.month(), 1).unwrap_or(shifted)
}

/// Renders a `YYYY-MM` bucket key as a human label like `Jan 2025`.
///
/// A key that does not parse is returned as-is.
pub fn month_label(month_key: &str) -> String {
    match NaiveDate::parse_from_str(&format!("{}-01", month_key), "%Y-%m-%d") {
        Ok(date) => date.format("%b %Y").to_string(),
        Err(_) => month_key.to_string(),
    }
}

/// Rounds to two decimal places for presentation.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
