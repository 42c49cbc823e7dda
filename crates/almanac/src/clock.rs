//! Source of "today".
//!
//! Date computations never read the system clock directly; [`CalendarDate::today`]
//! goes through a [`Clock`] so tests can pin the current date.
//!
//! [`CalendarDate::today`]: crate::CalendarDate::today

use chrono::{NaiveDate, Utc};

/// Supplies the current date.
pub trait Clock {
    /// The current calendar date in UTC.
    fn current_utc_date(&self) -> NaiveDate;
}

/// Reads the operating system clock via `chrono::Utc::now()`.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn current_utc_date(&self) -> NaiveDate {
        Utc::now().date_naive()
    }
}

/// A clock stuck on one date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn current_utc_date(&self) -> NaiveDate {
        self.0
    }
}
