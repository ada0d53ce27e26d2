//! Wall-clock helpers for transcript timestamps and the system time note
//! injected into the outgoing conversation history.
//!
//! The backend prompt expects times in EST; a fixed UTC-5 offset is applied
//! rather than querying the browser's locale database, matching what the
//! backend itself assumes.

#[cfg(test)]
#[path = "time_test.rs"]
mod time_test;

use chrono::{DateTime, FixedOffset};

const EST_OFFSET_SECS: i32 = -5 * 3600;

/// Current time in epoch milliseconds, from the browser clock.
pub fn now_ms() -> f64 {
    #[cfg(feature = "hydrate")]
    {
        js_sys::Date::now()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        0.0
    }
}

fn to_est(timestamp_ms: f64) -> Option<DateTime<FixedOffset>> {
    let est = FixedOffset::east_opt(EST_OFFSET_SECS)?;
    #[allow(clippy::cast_possible_truncation)]
    let dt = DateTime::from_timestamp_millis(timestamp_ms as i64)?;
    Some(dt.with_timezone(&est))
}

/// Format epoch milliseconds as `YYYY-MM-DD HH:MM:SS EST` for the system
/// time note sent with each turn.
pub fn format_est(timestamp_ms: f64) -> String {
    match to_est(timestamp_ms) {
        Some(dt) => format!("{} EST", dt.format("%Y-%m-%d %H:%M:%S")),
        None => "unknown EST".to_owned(),
    }
}

/// Format epoch milliseconds as `HH:MM:SS` for display under a transcript
/// entry.
pub fn format_clock(timestamp_ms: f64) -> String {
    match to_est(timestamp_ms) {
        Some(dt) => dt.format("%H:%M:%S").to_string(),
        None => "--:--:--".to_owned(),
    }
}
