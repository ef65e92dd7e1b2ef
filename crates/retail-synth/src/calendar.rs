//! Calendar axis and derived calendar fields.
//!
//! Nothing here consumes randomness: the date axis, day of week and weekend
//! flag are pure functions of the start date and the row index.

use chrono::{Datelike, NaiveDate};

/// Year of the first simulated day.
pub const START_YEAR: i32 = 2023;
/// Month of the first simulated day.
pub const START_MONTH: u32 = 1;
/// Day of month of the first simulated day.
pub const START_DAY: u32 = 1;

/// First simulated day, 2023-01-01 (a Sunday).
#[must_use]
pub fn start_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(START_YEAR, START_MONTH, START_DAY)
        .expect("2023-01-01 is a valid calendar date")
}

/// Returns `n` consecutive days beginning at `start`.
#[must_use]
pub fn date_axis(start: NaiveDate, n: usize) -> Vec<NaiveDate> {
    start.iter_days().take(n).collect()
}

/// Day of week with Monday = 0 and Sunday = 6.
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn day_of_week(date: NaiveDate) -> u8 {
    // num_days_from_monday is always in 0..7
    date.weekday().num_days_from_monday() as u8
}

/// Saturday (5) and Sunday (6) are weekend days.
#[inline]
#[must_use]
pub const fn is_weekend(day_of_week: u8) -> bool {
    day_of_week >= 5
}
