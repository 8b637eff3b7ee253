//! Deviation calculator: signed minutes between an actual punch time and
//! the expected schedule time, on the same calendar date.

use chrono::{NaiveDate, NaiveTime};

/// Integer division rounding half away from zero.
fn div_round_half_away(n: i64, d: i64) -> i64 {
    let q = n / d;
    let r = n % d;
    if 2 * r.abs() >= d { q + n.signum() } else { q }
}

/// Signed minute deviation of `actual` against `expected` on `date`.
/// Positive = late, negative = early, zero = on time.
pub fn deviation_minutes(date: NaiveDate, actual: NaiveTime, expected: NaiveTime) -> i64 {
    let actual_dt = date.and_time(actual);
    let expected_dt = date.and_time(expected);

    let secs = actual_dt.signed_duration_since(expected_dt).num_seconds();
    div_round_half_away(secs, 60)
}

/// Human wording for a deviation, used in punch and correction messages.
pub fn describe_deviation(mins: i64) -> String {
    if mins > 0 {
        format!("{} min late", mins)
    } else if mins < 0 {
        format!("{} min early", -mins)
    } else {
        "on time".to_string()
    }
}

/// Compact signed form for table cells: "+10", "-5", "0".
pub fn format_deviation(mins: i64) -> String {
    if mins > 0 {
        format!("+{}", mins)
    } else {
        mins.to_string()
    }
}
