//! A date that may be undefined.
//!
//! [`LenientDate`] never fails. Invalid input leaves it undefined, and every
//! query on an undefined date logs a warning on the `almanac::diagnostic`
//! target and returns an empty value (`0`, `""`, the unchanged date or the
//! unmodified template).

use tracing::warn;

use crate::clock::{Clock, SystemClock};
use crate::date::CalendarDate;
use crate::error::{DateError, Result};
use crate::names::NameLookup;

fn diagnostic(operation: &str, message: &str) {
    warn!(target: "almanac::diagnostic", "{operation}: {message}");
}

/// A [`CalendarDate`] or nothing. The default value is undefined.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct LenientDate {
    inner: Option<CalendarDate>,
}

impl LenientDate {
    // ── Construction ───────────────────────────────────────────────────

    /// A date with no value.
    pub fn undefined() -> Self {
        Self { inner: None }
    }

    /// Build from a triple; an invalid triple gives an undefined date.
    pub fn new(year: i32, month: i32, day: i32) -> Self {
        let mut date = Self::undefined();
        date.set_date(year, month, day);
        date
    }

    /// Build from `YYYY-MM-DD` text; malformed or invalid text gives an
    /// undefined date.
    pub fn parse(text: &str) -> Self {
        let mut date = Self::undefined();
        date.set_date_str(text);
        date
    }

    /// Today's UTC date from the system clock.
    pub fn today() -> Self {
        Self::today_from(&SystemClock)
    }

    /// Today's date from `clock`.
    pub fn today_from<C: Clock + ?Sized>(clock: &C) -> Self {
        match CalendarDate::today_from(clock) {
            Ok(date) => date.into(),
            Err(e) => {
                diagnostic("today", &e.to_string());
                Self::undefined()
            }
        }
    }

    /// Replace the date with a triple; an invalid triple leaves it undefined.
    pub fn set_date(&mut self, year: i32, month: i32, day: i32) {
        self.inner = match CalendarDate::new(year, month, day) {
            Ok(date) => Some(date),
            Err(e) => {
                diagnostic("setDate", &e.to_string());
                None
            }
        };
    }

    /// Replace the date with parsed `YYYY-MM-DD` text; bad text leaves it
    /// undefined.
    pub fn set_date_str(&mut self, text: &str) {
        self.inner = match CalendarDate::parse_iso(text) {
            Ok(date) => Some(date),
            Err(e) => {
                diagnostic("setDate", &e.to_string());
                None
            }
        };
    }

    /// Move to the given day number. No-op on an undefined date.
    pub fn set_day_number(&mut self, day_number: i64) {
        if self.check("setDayNumber", "date is undefined").is_none() {
            return;
        }
        match CalendarDate::from_day_number(day_number) {
            Ok(date) => self.inner = Some(date),
            Err(e) => diagnostic("setDayNumber", &e.to_string()),
        }
    }

    // ── Access ─────────────────────────────────────────────────────────

    /// Whether the date has no value.
    pub fn is_undefined(&self) -> bool {
        self.inner.is_none()
    }

    /// The wrapped date.
    ///
    /// # Errors
    ///
    /// Returns [`DateError::Undefined`] if the date is undefined.
    pub fn get(&self) -> Result<CalendarDate> {
        self.inner.ok_or(DateError::Undefined)
    }

    fn check(&self, operation: &str, message: &str) -> Option<CalendarDate> {
        if self.inner.is_none() {
            diagnostic(operation, message);
        }
        self.inner
    }

    /// Year, or `0` when undefined.
    pub fn year(&self) -> i32 {
        self.inner.map_or(0, |d| d.year())
    }

    /// Month, or `0` when undefined.
    pub fn month(&self) -> u32 {
        self.inner.map_or(0, |d| d.month())
    }

    /// Day of the month, or `0` when undefined.
    pub fn day(&self) -> u32 {
        self.inner.map_or(0, |d| d.day())
    }

    /// Julian day number, or `0` when undefined.
    pub fn day_number(&self) -> i64 {
        self.inner.map_or(0, |d| d.day_number())
    }

    // ── Arithmetic and queries ─────────────────────────────────────────

    /// Shift by `days`. No-op on an undefined date or on overflow.
    pub fn add_days(&mut self, days: i64) {
        let Some(date) = self.check("addDays", "can't add days, date is undefined") else {
            return;
        };
        match date.add_days(days) {
            Ok(shifted) => self.inner = Some(shifted),
            Err(e) => diagnostic("addDays", &e.to_string()),
        }
    }

    pub fn days_in_year(&self) -> u16 {
        self.check("daysInYear", "date is undefined")
            .map_or(0, |d| d.days_in_year())
    }

    pub fn days_in_month(&self) -> u8 {
        self.check("daysInMonth", "date is undefined")
            .map_or(0, |d| d.days_in_month())
    }

    pub fn day_of_year(&self) -> u16 {
        self.check("dayOfYear", "date is undefined")
            .map_or(0, |d| d.day_of_year())
    }

    pub fn weekday_index(&self) -> u8 {
        self.check("weekday", "date is undefined")
            .map_or(0, |d| d.weekday_index())
    }

    pub fn week_number(&self) -> u8 {
        self.check("weekNo", "date is undefined, can't compute week number")
            .map_or(0, |d| d.week_number())
    }

    /// Easter Sunday of the same year; an undefined date stays undefined.
    pub fn easter_sunday(&self) -> LenientDate {
        let Some(date) = self.check("easterSunday", "date is undefined, can't find easter") else {
            return *self;
        };
        match date.easter_sunday() {
            Ok(easter) => easter.into(),
            Err(e) => {
                diagnostic("easterSunday", &e.to_string());
                Self::undefined()
            }
        }
    }

    // ── Text ───────────────────────────────────────────────────────────

    /// `YYYY-MM-DD`; an undefined date renders as `0000-00-00`.
    pub fn iso_date(&self) -> String {
        match self.check("isoDate", "date is undefined") {
            Some(date) => date.iso_date(),
            None => "0000-00-00".to_string(),
        }
    }

    pub fn weekday_name<N: NameLookup + ?Sized>(&self, names: &N) -> String {
        self.check("weekday", "date is undefined, can't find weekday")
            .map_or_else(String::new, |d| d.weekday_name(names).to_string())
    }

    pub fn short_weekday_name<N: NameLookup + ?Sized>(&self, names: &N) -> String {
        self.check("shortWeekday", "date is undefined, can't find weekday")
            .map_or_else(String::new, |d| d.short_weekday_name(names).to_string())
    }

    pub fn month_name<N: NameLookup + ?Sized>(&self, names: &N) -> String {
        self.check("monthName", "date is undefined, can't return month name")
            .map_or_else(String::new, |d| d.month_name(names).to_string())
    }

    pub fn short_month_name<N: NameLookup + ?Sized>(&self, names: &N) -> String {
        self.check("shortMonthName", "date is undefined, can't return month name")
            .map_or_else(String::new, |d| d.short_month_name(names).to_string())
    }

    /// See [`CalendarDate::format`]. An undefined date returns `template`
    /// unchanged.
    pub fn format<N: NameLookup + ?Sized>(&self, template: &str, names: &N) -> String {
        match self.inner {
            Some(date) => date.format(template, names),
            None => template.to_string(),
        }
    }
}

impl From<CalendarDate> for LenientDate {
    fn from(date: CalendarDate) -> Self {
        Self { inner: Some(date) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::names::Language;

    #[test]
    fn invalid_triple_is_undefined() {
        let date = LenientDate::new(2023, 2, 30);
        assert!(date.is_undefined());
        assert_eq!((date.year(), date.month(), date.day()), (0, 0, 0));
        assert_eq!(date.day_number(), 0);
        assert_eq!(date.get(), Err(DateError::Undefined));
    }

    #[test]
    fn malformed_text_is_undefined() {
        assert!(LenientDate::parse("2023-2-3").is_undefined());
        assert!(LenientDate::parse("garbage").is_undefined());
        assert!(!LenientDate::parse("2023-02-03").is_undefined());
    }

    #[test]
    fn reassignment_recovers() {
        let mut date = LenientDate::new(2023, 2, 30);
        date.set_date(2023, 2, 28);
        assert_eq!(date.iso_date(), "2023-02-28");
        date.set_date_str("nope");
        assert!(date.is_undefined());
    }

    #[test]
    fn undefined_queries_return_empty_values() {
        let date = LenientDate::undefined();
        assert_eq!(date.iso_date(), "0000-00-00");
        assert_eq!(date.days_in_year(), 0);
        assert_eq!(date.days_in_month(), 0);
        assert_eq!(date.day_of_year(), 0);
        assert_eq!(date.weekday_index(), 0);
        assert_eq!(date.week_number(), 0);
        assert_eq!(date.weekday_name(&Language::English), "");
        assert_eq!(date.short_weekday_name(&Language::English), "");
        assert_eq!(date.month_name(&Language::English), "");
        assert_eq!(date.short_month_name(&Language::English), "");
        assert_eq!(date.format("%Y-%m-%d", &Language::English), "%Y-%m-%d");
        assert!(date.easter_sunday().is_undefined());
    }

    #[test]
    fn undefined_mutations_are_no_ops() {
        let mut date = LenientDate::undefined();
        date.add_days(10);
        assert!(date.is_undefined());
        date.set_day_number(2_460_311);
        assert!(date.is_undefined());
    }

    #[test]
    fn defined_date_delegates() {
        let mut date = LenientDate::new(2024, 1, 1);
        assert_eq!(date.weekday_name(&Language::German), "Montag");
        assert_eq!(date.week_number(), 1);
        assert_eq!(date.easter_sunday().iso_date(), "2024-03-31");
        date.add_days(-1);
        assert_eq!(date.iso_date(), "2023-12-31");
        date.set_day_number(2_451_545);
        assert_eq!(date.iso_date(), "2000-01-01");
    }

    #[test]
    fn today_is_defined() {
        let today = LenientDate::today();
        assert!(!today.is_undefined());
        let diff = today.get().unwrap() - CalendarDate::today().unwrap();
        assert!((-1..=0).contains(&diff), "diff = {diff}");
    }

    #[test]
    fn overflowing_add_keeps_date() {
        let mut date = LenientDate::new(2024, 1, 1);
        date.add_days(i64::MAX);
        assert_eq!(date.iso_date(), "2024-01-01");
    }
}
