//! Display formatting for prices and timestamps.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;

/// Render a price as dollars with two decimals (`$12.50`).
pub fn format_price(value: f64) -> String {
    format!("${value:.2}")
}

/// Render a server timestamp as a calendar date (`YYYY-MM-DD`).
///
/// Accepts RFC 3339 strings and epoch milliseconds; anything else is
/// returned unchanged.
pub fn format_date(raw: &str) -> String {
    let trimmed = raw.trim();
    if let Ok(millis) = trimmed.parse::<i64>() {
        let nanos = i128::from(millis) * 1_000_000;
        if let Ok(ts) = OffsetDateTime::from_unix_timestamp_nanos(nanos) {
            return ts.date().to_string();
        }
    }
    match OffsetDateTime::parse(trimmed, &Rfc3339) {
        Ok(ts) => ts.date().to_string(),
        Err(_) => raw.to_owned(),
    }
}
