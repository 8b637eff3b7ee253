/// ANSI color helper utilities for terminal output.
pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";
pub const WHITE: &str = "\x1b[37m";

pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";

pub const YELLOW: &str = "\x1b[33m";
pub const BLUE: &str = "\x1b[34m";
pub const CYAN: &str = "\x1b[36m";

/// Remove ANSI escape sequences so padding math sees the visible text.
pub fn strip_ansi(s: &str) -> String {
    let re = regex::Regex::new(r"\x1B\[[0-9;]*[mK]").unwrap();
    re.replace_all(s, "").into_owned()
}

/// Deviation color:
/// \>0 (late) → red
/// \<0 (early) → green
/// 0 → reset
pub fn color_for_deviation(minutes: i64) -> &'static str {
    if minutes > 0 {
        RED
    } else if minutes < 0 {
        GREEN
    } else {
        RESET
    }
}

/// Grey out placeholder cells so real times stand out in listings.
///
/// Example:
/// `colorize_optional("N/A")` → "<grey>N/A<reset>"
pub fn colorize_optional(value: &str) -> String {
    if value.trim().is_empty() || value.trim() == crate::models::report::MISSING_SLOT {
        format!("{GREY}{value}{RESET}")
    } else {
        value.to_string()
    }
}
