//! Timestamp and elapsed-time formatting for notification bodies.

use chrono::{DateTime, TimeDelta, Utc};
use chrono_tz::Tz;

/// Format used for every absolute timestamp in the email.
const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S %Z";

/// Convert epoch seconds (fractional part allowed) into a UTC timestamp.
///
/// Returns `None` for non-finite input or values outside chrono's range.
pub fn from_epoch_seconds(seconds: f64) -> Option<DateTime<Utc>> {
    if !seconds.is_finite() {
        return None;
    }
    let whole = seconds.floor();
    let nanos = ((seconds - whole) * 1_000_000_000.0) as u32;
    if whole < i64::MIN as f64 || whole > i64::MAX as f64 {
        return None;
    }
    DateTime::from_timestamp(whole as i64, nanos.min(999_999_999))
}

/// Format a UTC timestamp in the given timezone, e.g. `2026-01-15 10:49:35 UTC`.
pub fn format_timestamp(dt: DateTime<Utc>, tz: Tz) -> String {
    dt.with_timezone(&tz).format(TIMESTAMP_FORMAT).to_string()
}

/// Format an elapsed duration as `H:MM:SS`, prefixed by `N day(s), ` past 24h.
///
/// Negative durations are clamped to zero.
pub fn format_elapsed(elapsed: TimeDelta) -> String {
    let total = elapsed.num_seconds().max(0);
    let days = total / 86_400;
    let hours = (total % 86_400) / 3_600;
    let minutes = (total % 3_600) / 60;
    let seconds = total % 60;

    match days {
        0 => format!("{}:{:02}:{:02}", hours, minutes, seconds),
        1 => format!("1 day, {}:{:02}:{:02}", hours, minutes, seconds),
        n => format!("{} days, {}:{:02}:{:02}", n, hours, minutes, seconds),
    }
}
