//! Proleptic Gregorian arithmetic: leap years, month tables and the
//! (year, month, day) <-> day number conversion.
//!
//! Day numbers follow the Julian Day Number convention: 2000-01-01 is
//! 2451545 and 0001-01-01 is [`JULIAN_DAY_ZERO`] + 1.

use crate::error::{DateError, Result};

/// Day number of 0000-12-31 (the day before 0001-01-01).
pub const JULIAN_DAY_ZERO: i64 = 1_721_425;

const DAYS_PER_400_YEARS: i64 = 146_097;
const DAYS_PER_100_YEARS: i64 = 36_524;
const DAYS_PER_4_YEARS: i64 = 1_461;

/// Length of each month in a common year. Index 0 and 13 are sentinels.
pub(crate) const MONTH_LENGTH: [u8; 14] =
    [0, 31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31, 0];

/// Days elapsed before the start of each month, `[leap][month]`.
///
/// Index 13 holds the year length so the month scan in
/// [`civil_from_day_number`] always terminates.
#[rustfmt::skip]
pub(crate) const CUMULATIVE: [[u16; 15]; 2] = [
    [0, 0, 31, 59, 90, 120, 151, 181, 212, 243, 273, 304, 334, 365, 400],
    [0, 0, 31, 60, 91, 121, 152, 182, 213, 244, 274, 305, 335, 366, 400],
];

/// Floor division for a positive divisor: rounds toward negative infinity.
///
/// `floor_div(-1, 4) == -1`, whereas truncating division gives `0`. The
/// day-number formulas depend on this for years before 0001.
pub fn floor_div(a: i64, b: i64) -> i64 {
    debug_assert!(b > 0, "floor_div requires a positive divisor");
    let q = a / b;
    if a % b < 0 {
        q - 1
    } else {
        q
    }
}

/// Whether `year` is a leap year in the proleptic Gregorian calendar.
pub fn is_leap_year(year: i32) -> bool {
    is_leap_year_wide(i64::from(year))
}

/// Leap rule on a year that may not fit `i32` yet.
fn is_leap_year_wide(year: i64) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

fn leap_index(year: i32) -> usize {
    usize::from(is_leap_year(year))
}

/// Number of days in `month` of `year`, or `None` if the month is not 1..=12.
pub fn days_in_month(year: i32, month: u8) -> Option<u8> {
    if !(1..=12).contains(&month) {
        return None;
    }
    let extra = u8::from(month == 2 && is_leap_year(year));
    Some(MONTH_LENGTH[month as usize] + extra)
}

/// 365 or 366.
pub fn days_in_year(year: i32) -> u16 {
    365 + u16::from(is_leap_year(year))
}

/// Days elapsed in `year` before the first of `month`.
pub(crate) fn days_before_month(year: i32, month: u8) -> u16 {
    CUMULATIVE[leap_index(year)][month as usize]
}

/// Coarse validity check of a (year, month, day) triple.
///
/// Rejects months outside 1..=12, negative days, days above 31 and days past
/// the end of the month. A day of `0` passes; it is not a real calendar day
/// and [`CalendarDate::new`](crate::CalendarDate::new) rejects it.
pub fn is_valid(year: i32, month: i32, day: i32) -> bool {
    if !(1..=12).contains(&month) || !(0..=31).contains(&day) {
        return false;
    }
    let max_day = MONTH_LENGTH[month as usize] as i32
        + i32::from(month == 2 && is_leap_year(year));
    day <= max_day
}

/// Day number of a (year, month, day) triple. The triple must be valid.
pub(crate) fn day_number_from_civil(year: i32, month: u8, day: u8) -> i64 {
    let y = i64::from(year) - 1;
    y * 365 + floor_div(y, 4) + floor_div(y, 400) - floor_div(y, 100)
        + i64::from(days_before_month(year, month))
        + i64::from(day)
        + JULIAN_DAY_ZERO
}

/// Inverse of [`day_number_from_civil`].
///
/// Peels whole 400-, 100- and 4-year blocks off the offset from 0001-01-01,
/// then up to three common years. An offset that lands exactly on a
/// 100-year block boundary is the last day (day 366) of a leap century year.
pub(crate) fn civil_from_day_number(day_number: i64) -> Result<(i32, u8, u8)> {
    let mut dn = day_number
        .checked_sub(JULIAN_DAY_ZERO + 1)
        .ok_or(DateError::OutOfRange(day_number))?;

    let mut century_end = false;

    let blocks = floor_div(dn, DAYS_PER_400_YEARS);
    let mut year = 400 * blocks;
    dn -= DAYS_PER_400_YEARS * blocks;

    if dn > 0 {
        let blocks = floor_div(dn, DAYS_PER_100_YEARS);
        year += 100 * blocks;
        dn -= DAYS_PER_100_YEARS * blocks;
        century_end = dn == 0;
        if dn > 0 {
            let blocks = floor_div(dn, DAYS_PER_4_YEARS);
            year += 4 * blocks;
            dn -= DAYS_PER_4_YEARS * blocks;
            let mut single = 0;
            while dn > 365 && single < 3 {
                year += 1;
                dn -= 365;
                single += 1;
            }
        }
    }

    if century_end {
        dn = 366;
    } else {
        year += 1;
        dn += 1;
    }

    let leap = usize::from(is_leap_year_wide(year));
    let mut month = 1usize;
    while i64::from(CUMULATIVE[leap][month]) < dn {
        month += 1;
    }
    month -= 1;
    dn -= i64::from(CUMULATIVE[leap][month]);
    if month == 13 {
        month = 1;
        year += 1;
    }

    let year = i32::try_from(year).map_err(|_| DateError::OutOfRange(day_number))?;
    // month is in 1..=12 and dn in 1..=31 here
    Ok((year, month as u8, dn as u8))
}
