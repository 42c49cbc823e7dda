//! Validated proleptic Gregorian date backed by a Julian day number.

use std::fmt;
use std::ops::Sub;
use std::str::FromStr;

use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::clock::{Clock, SystemClock};
use crate::error::{DateError, Result};
use crate::gregorian;

/// A calendar date in the proleptic Gregorian calendar.
///
/// The day number is the canonical value; year, month and day are kept in
/// sync with it by every constructor. Dates order by day number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CalendarDate {
    day_number: i64,
    year: i32,
    month: u8,
    day: u8,
}

impl PartialOrd for CalendarDate {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for CalendarDate {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.day_number.cmp(&other.day_number)
    }
}

const WEEKDAYS: [Weekday; 7] = [
    Weekday::Sun,
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
];

impl CalendarDate {
    // ── Construction ───────────────────────────────────────────────────

    /// Creates a date from year, month (1..=12) and day (1..=month length).
    ///
    /// # Errors
    ///
    /// Returns [`DateError::InvalidDate`] if the triple is not a real date,
    /// including day `0`.
    ///
    /// # Examples
    ///
    /// ```
    /// use almanac::CalendarDate;
    ///
    /// let date = CalendarDate::new(2024, 1, 1).unwrap();
    /// assert_eq!(date.day_number(), 2_460_311);
    /// assert!(CalendarDate::new(2023, 2, 29).is_err());
    /// ```
    pub fn new(year: i32, month: i32, day: i32) -> Result<Self> {
        if day == 0 || !gregorian::is_valid(year, month, day) {
            return Err(DateError::InvalidDate { year, month, day });
        }
        // validated: month in 1..=12, day in 1..=31
        let (month, day) = (month as u8, day as u8);
        Ok(Self {
            day_number: gregorian::day_number_from_civil(year, month, day),
            year,
            month,
            day,
        })
    }

    /// Creates the date with the given Julian day number.
    ///
    /// # Errors
    ///
    /// Returns [`DateError::OutOfRange`] if the year would not fit in an `i32`.
    pub fn from_day_number(day_number: i64) -> Result<Self> {
        let (year, month, day) = gregorian::civil_from_day_number(day_number)?;
        Ok(Self {
            day_number,
            year,
            month,
            day,
        })
    }

    /// Parses the fixed `YYYY-MM-DD` form. Same as `str::parse`.
    pub fn parse_iso(text: &str) -> Result<Self> {
        let (year, month, day) =
            parse_iso_triple(text).ok_or_else(|| DateError::Malformed(text.to_string()))?;
        Self::new(year, month, day)
    }

    /// The current UTC date from the system clock.
    pub fn today() -> Result<Self> {
        Self::today_from(&SystemClock)
    }

    /// The current UTC date as reported by `clock`.
    pub fn today_from<C: Clock + ?Sized>(clock: &C) -> Result<Self> {
        Self::try_from(clock.current_utc_date())
    }

    // ── Accessors ──────────────────────────────────────────────────────

    /// Calendar year; `0` is 1 BC and negative years continue backwards.
    pub fn year(&self) -> i32 {
        self.year
    }

    /// Month, 1..=12.
    pub fn month(&self) -> u32 {
        u32::from(self.month)
    }

    /// Day of the month, 1..=31.
    pub fn day(&self) -> u32 {
        u32::from(self.day)
    }

    /// Julian day number.
    pub fn day_number(&self) -> i64 {
        self.day_number
    }

    // ── Arithmetic ─────────────────────────────────────────────────────

    /// Returns the date `days` days later (earlier for negative `days`).
    ///
    /// # Errors
    ///
    /// Returns [`DateError::OutOfRange`] on day-number overflow or if the
    /// resulting year does not fit in an `i32`.
    pub fn add_days(&self, days: i64) -> Result<Self> {
        let day_number = self
            .day_number
            .checked_add(days)
            .ok_or(DateError::OutOfRange(self.day_number))?;
        Self::from_day_number(day_number)
    }

    /// The following day.
    pub fn succ(&self) -> Result<Self> {
        self.add_days(1)
    }

    /// The preceding day.
    pub fn pred(&self) -> Result<Self> {
        self.add_days(-1)
    }

    // ── Derived queries ────────────────────────────────────────────────

    /// Whether this date's year has a 29 February.
    pub fn is_leap_year(&self) -> bool {
        gregorian::is_leap_year(self.year)
    }

    /// 365 or 366.
    pub fn days_in_year(&self) -> u16 {
        gregorian::days_in_year(self.year)
    }

    /// Length of this date's month, 28..=31.
    pub fn days_in_month(&self) -> u8 {
        // month is always 1..=12 here
        gregorian::days_in_month(self.year, self.month).unwrap_or(0)
    }

    /// 1-based ordinal day within the year.
    pub fn day_of_year(&self) -> u16 {
        gregorian::days_before_month(self.year, self.month) + u16::from(self.day)
    }

    /// Weekday index with Sunday = 0 through Saturday = 6.
    pub fn weekday_index(&self) -> u8 {
        weekday_index_of(self.day_number)
    }

    /// The weekday as a chrono [`Weekday`].
    pub fn weekday(&self) -> Weekday {
        WEEKDAYS[self.weekday_index() as usize]
    }

    // ── Text ───────────────────────────────────────────────────────────

    /// Zero-padded `YYYY-MM-DD`.
    pub fn iso_date(&self) -> String {
        self.to_string()
    }

    /// Converts to a chrono date, if chrono can represent the year.
    pub fn to_naive_date(&self) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month(), self.day())
    }
}

/// Weekday index (Sunday = 0) of a day number.
pub(crate) fn weekday_index_of(day_number: i64) -> u8 {
    // JDN 0 is a Monday, so shift by one to land Sunday on 0
    (day_number + 1).rem_euclid(7) as u8
}

/// Formats a year with at least four digits; negative years get a leading `-`.
pub(crate) fn format_year(year: i32) -> String {
    if year < 0 {
        format!("-{:04}", year.unsigned_abs())
    } else {
        format!("{year:04}")
    }
}

/// Parse `[-]YYYY-MM-DD` into a raw triple without validating it.
///
/// The year takes four or more digits, month and day exactly two.
pub(crate) fn parse_iso_triple(text: &str) -> Option<(i32, i32, i32)> {
    let (negative, rest) = match text.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, text),
    };

    let mut parts = rest.splitn(3, '-');
    let year = parts.next()?;
    let month = parts.next()?;
    let day = parts.next()?;

    let all_digits = |s: &str| !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit());
    if year.len() < 4 || month.len() != 2 || day.len() != 2 {
        return None;
    }
    if !all_digits(year) || !all_digits(month) || !all_digits(day) {
        return None;
    }

    let magnitude: i64 = year.parse().ok()?;
    let year = i32::try_from(if negative { -magnitude } else { magnitude }).ok()?;
    Some((year, month.parse().ok()?, day.parse().ok()?))
}

impl fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}-{:02}-{:02}",
            format_year(self.year),
            self.month,
            self.day
        )
    }
}

impl FromStr for CalendarDate {
    type Err = DateError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse_iso(s)
    }
}

impl TryFrom<NaiveDate> for CalendarDate {
    type Error = DateError;

    fn try_from(date: NaiveDate) -> Result<Self> {
        Self::new(date.year(), date.month() as i32, date.day() as i32)
    }
}

/// Signed number of days from `rhs` to `self`.
impl Sub for CalendarDate {
    type Output = i64;

    fn sub(self, rhs: Self) -> i64 {
        self.day_number - rhs.day_number
    }
}

impl Serialize for CalendarDate {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for CalendarDate {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        text.parse().map_err(serde::de::Error::custom)
    }
}
