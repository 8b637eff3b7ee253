// src/export/range.rs

use crate::errors::{AppError, AppResult};
use chrono::NaiveDate;

/// Resolve an optional `--range` / `--period` argument into date bounds.
///
/// `None` and `"all"` both mean unbounded.
pub(crate) fn parse_bounds(range: &Option<String>) -> AppResult<Option<(NaiveDate, NaiveDate)>> {
    match range {
        None => Ok(None),
        Some(r) if r.eq_ignore_ascii_case("all") => Ok(None),
        Some(r) => parse_range(r).map(Some),
    }
}

/// Parse a period expression (year / month / day / interval).
///
/// Supported:
/// - YYYY
/// - YYYY-MM
/// - YYYY-MM-DD
/// - YYYY:YYYY
/// - YYYY-MM:YYYY-MM
/// - YYYY-MM-DD:YYYY-MM-DD
pub(crate) fn parse_range(r: &str) -> AppResult<(NaiveDate, NaiveDate)> {
    if !r.is_ascii() {
        return Err(AppError::InvalidDate(format!(
            "'{r}': unsupported period format"
        )));
    }

    if let Some((start_raw, end_raw)) = r.split_once(':') {
        let start = start_raw.trim();
        let end = end_raw.trim();

        if start.len() != end.len() {
            return Err(AppError::InvalidDate(format!(
                "'{r}': start and end must use the same format"
            )));
        }

        match start.len() {
            // YYYY:YYYY
            4 => {
                let ys = parse_year(start)?;
                let ye = parse_year(end)?;
                Ok((year_start(ys)?, year_end(ye)?))
            }
            // YYYY-MM:YYYY-MM
            7 => {
                let (ys, ms) = parse_year_month(start)?;
                let (ye, me) = parse_year_month(end)?;
                Ok((month_start(ys, ms)?, month_end(ye, me)?))
            }
            // YYYY-MM-DD:YYYY-MM-DD
            10 => Ok((parse_day(start)?, parse_day(end)?)),
            _ => Err(AppError::InvalidDate(format!(
                "'{r}': unsupported range format"
            ))),
        }
    } else {
        match r.len() {
            // YYYY
            4 => {
                let y = parse_year(r)?;
                Ok((year_start(y)?, year_end(y)?))
            }
            // YYYY-MM
            7 => {
                let (y, m) = parse_year_month(r)?;
                Ok((month_start(y, m)?, month_end(y, m)?))
            }
            // YYYY-MM-DD
            10 => {
                let d = parse_day(r)?;
                Ok((d, d))
            }
            _ => Err(AppError::InvalidDate(format!(
                "'{r}': unsupported period format"
            ))),
        }
    }
}

fn parse_year(s: &str) -> AppResult<i32> {
    s.parse()
        .map_err(|_| AppError::InvalidDate(format!("'{s}' is not a valid year")))
}

fn parse_year_month(s: &str) -> AppResult<(i32, u32)> {
    if s.as_bytes().get(4) != Some(&b'-') {
        return Err(AppError::InvalidDate(format!("'{s}' is not a valid month")));
    }
    let y = parse_year(&s[0..4])?;
    let m: u32 = s[5..7]
        .parse()
        .map_err(|_| AppError::InvalidDate(format!("'{s}' is not a valid month")))?;
    Ok((y, m))
}

fn parse_day(s: &str) -> AppResult<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .map_err(|_| AppError::InvalidDate(format!("'{s}' is not a valid date")))
}

fn year_start(y: i32) -> AppResult<NaiveDate> {
    NaiveDate::from_ymd_opt(y, 1, 1)
        .ok_or_else(|| AppError::InvalidDate(format!("invalid year {y}")))
}

fn year_end(y: i32) -> AppResult<NaiveDate> {
    NaiveDate::from_ymd_opt(y, 12, 31)
        .ok_or_else(|| AppError::InvalidDate(format!("invalid year {y}")))
}

fn month_start(y: i32, m: u32) -> AppResult<NaiveDate> {
    NaiveDate::from_ymd_opt(y, m, 1)
        .ok_or_else(|| AppError::InvalidDate(format!("invalid month {y}-{m:02}")))
}

fn month_end(y: i32, m: u32) -> AppResult<NaiveDate> {
    let last = month_last_day(y, m)
        .ok_or_else(|| AppError::InvalidDate(format!("invalid month {y}-{m:02}")))?;
    NaiveDate::from_ymd_opt(y, m, last)
        .ok_or_else(|| AppError::InvalidDate(format!("invalid month {y}-{m:02}")))
}

fn month_last_day(y: i32, m: u32) -> Option<u32> {
    match m {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => Some(31),
        4 | 6 | 9 | 11 => Some(30),
        2 => {
            let leap = (y % 4 == 0 && y % 100 != 0) || (y % 400 == 0);
            Some(if leap { 29 } else { 28 })
        }
        _ => None,
    }
}
