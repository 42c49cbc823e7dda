//! # almanac
//!
//! Proleptic Gregorian date arithmetic.
//!
//! A [`CalendarDate`] is a validated (year, month, day) triple backed by a
//! Julian day number. From it the crate derives weekdays, ISO week numbers,
//! Easter Sunday and localized, template-driven text.
//!
//! ## Modules
//!
//! - [`gregorian`]: leap years, month tables, floor division and validity
//! - [`date`]: the [`CalendarDate`] value type and its day-number conversion
//! - [`week`]: ISO 8601 week numbering
//! - [`easter`]: Easter Sunday via the Gauss/Meeus congruence
//! - [`names`]: weekday/month name tables and language resolution
//! - [`format`]: `%`-token formatting
//! - [`lenient`]: [`LenientDate`], the never-failing wrapper that logs diagnostics
//! - [`clock`]: the source of "today"
//! - [`error`]: error types
//!
//! ## Quick Start
//!
//! ```
//! use almanac::{CalendarDate, Language};
//!
//! let date: CalendarDate = "2024-01-01".parse().unwrap();
//! assert_eq!(date.week_number(), 1);
//! assert_eq!(date.weekday_name(&Language::German), "Montag");
//! assert_eq!(date.add_days(90).unwrap().iso_date(), "2024-03-31");
//! assert_eq!(date.easter_sunday().unwrap().iso_date(), "2024-03-31");
//! ```

pub mod clock;
pub mod date;
pub mod easter;
pub mod error;
pub mod format;
pub mod gregorian;
pub mod lenient;
pub mod names;
pub mod week;

pub use clock::{Clock, FixedClock, SystemClock};
pub use date::CalendarDate;
pub use easter::easter_sunday;
pub use error::DateError;
pub use gregorian::{floor_div, is_leap_year, is_valid, JULIAN_DAY_ZERO};
pub use lenient::LenientDate;
pub use names::{Language, Locale, NameCategory, NameLookup};
pub use week::IsoWeek;

/// Whether `text` is a `YYYY-MM-DD` string naming a valid date.
///
/// Day `00` passes, matching [`is_valid`].
pub fn is_valid_str(text: &str) -> bool {
    date::parse_iso_triple(text).is_some_and(|(y, m, d)| is_valid(y, m, d))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_strings() {
        assert!(is_valid_str("2024-02-29"));
        assert!(is_valid_str("2024-02-00"));
        assert!(!is_valid_str("2023-02-29"));
        assert!(!is_valid_str("2023-13-01"));
        assert!(!is_valid_str("2023-1-01"));
        assert!(!is_valid_str("not a date"));
    }

    #[test]
    fn value_types_are_send_sync() {
        fn assert_impl<T: Send + Sync>() {}
        assert_impl::<CalendarDate>();
        assert_impl::<LenientDate>();
        assert_impl::<Language>();
        assert_impl::<Locale>();
    }
}
