//! UTC calendar helpers without timezone dependencies.

use std::time::{SystemTime, UNIX_EPOCH};

/// Seconds per day.
const DAY_SECS: u64 = 86_400;

/// Current year in UTC.
pub fn current_year() -> i32 {
    let secs = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0);
    year_from_unix_days((secs / DAY_SECS) as i64)
}

/// Civil year of a day count since 1970-01-01.
///
/// Uses the era-based conversion (400-year cycles of 146097 days).
pub fn year_from_unix_days(days: i64) -> i32 {
    let z = days + 719_468;
    let era = z.div_euclid(146_097);
    let doe = z.rem_euclid(146_097);
    let yoe = (doe - doe / 1460 + doe / 36_524 - doe / 146_096) / 365;
    let doy = doe - (365 * yoe + yoe / 4 - yoe / 100);
    let mp = (5 * doy + 2) / 153;
    let month = if mp < 10 { mp + 3 } else { mp - 9 };
    let year = yoe + era * 400 + i64::from(month <= 2);
    year as i32
}
