//! ISO 8601 week numbering.
//!
//! Week 1 of a year is the week (Monday to Sunday) that contains the year's
//! first Thursday. Days before that week belong to the last week of the
//! previous year; days from the next year's week 1 onward belong to it.

use serde::Serialize;

use crate::date::{weekday_index_of, CalendarDate};
use crate::gregorian::day_number_from_civil;

/// An ISO week together with its week-based year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct IsoWeek {
    /// Week-based year; differs from the calendar year around New Year.
    pub year: i32,
    /// 1..=53.
    pub week: u8,
}

/// Day number of the Monday that starts week 1 of `year`.
fn week_one_monday(year: i32) -> i64 {
    let jan1 = day_number_from_civil(year, 1, 1);
    let from_monday = i64::from((weekday_index_of(jan1) + 6) % 7);
    if from_monday < 4 {
        jan1 - from_monday
    } else {
        jan1 + 7 - from_monday
    }
}

impl CalendarDate {
    /// ISO week number, 1..=53.
    ///
    /// ```
    /// use almanac::CalendarDate;
    ///
    /// assert_eq!(CalendarDate::new(2024, 1, 1).unwrap().week_number(), 1);
    /// // a Sunday, still in the last week of 2022
    /// assert_eq!(CalendarDate::new(2023, 1, 1).unwrap().week_number(), 52);
    /// ```
    pub fn week_number(&self) -> u8 {
        self.iso_week().week
    }

    /// ISO week and week-based year.
    pub fn iso_week(&self) -> IsoWeek {
        let dn = self.day_number();

        if let Some(next) = self.year().checked_add(1) {
            if dn >= week_one_monday(next) {
                return IsoWeek {
                    year: next,
                    week: 1,
                };
            }
        }

        let mut year = self.year();
        let mut start = week_one_monday(year);
        if dn < start {
            if let Some(prev) = year.checked_sub(1) {
                year = prev;
                start = week_one_monday(prev);
            }
        }

        IsoWeek {
            year,
            week: ((dn - start).max(0) / 7 + 1) as u8,
        }
    }
}
