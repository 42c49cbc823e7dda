//! Easter Sunday via the Gauss/Meeus congruence.

use crate::date::CalendarDate;
use crate::error::{DateError, Result};

/// Gregorian Easter Sunday of `year`.
///
/// All divisions are plain truncating divisions; the operands are
/// non-negative for every year the formula accepts.
///
/// # Errors
///
/// Returns [`DateError::UnsupportedYear`] for negative years.
///
/// # Examples
///
/// ```
/// use almanac::{easter_sunday, CalendarDate};
///
/// assert_eq!(easter_sunday(2024).unwrap(), CalendarDate::new(2024, 3, 31).unwrap());
/// ```
pub fn easter_sunday(year: i32) -> Result<CalendarDate> {
    if year < 0 {
        return Err(DateError::UnsupportedYear(year));
    }
    let y = i64::from(year);

    let g = y % 19;
    let c = y / 100;
    let h = (c - c / 4 - (8 * c + 13) / 25 + 19 * g + 15) % 30;
    let i = h - (h / 28) * (1 - (h / 28) * (29 / (h + 1)) * ((21 - g) / 11));
    let j = (y + y / 4 + i + 2 - c + c / 4) % 7;
    let l = i - j;

    let month = 3 + (l + 40) / 44;
    let day = l + 28 - 31 * (month / 4);

    // month is 3 or 4 and day within 1..=31
    CalendarDate::new(year, month as i32, day as i32)
}

impl CalendarDate {
    /// Easter Sunday of this date's year.
    pub fn easter_sunday(&self) -> Result<CalendarDate> {
        easter_sunday(self.year())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(d: CalendarDate) -> (i32, u32, u32) {
        (d.year(), d.month(), d.day())
    }

    #[test]
    fn known_easter_dates() {
        assert_eq!(ymd(easter_sunday(2023).unwrap()), (2023, 4, 9));
        assert_eq!(ymd(easter_sunday(2024).unwrap()), (2024, 3, 31));
        assert_eq!(ymd(easter_sunday(2000).unwrap()), (2000, 4, 23));
        assert_eq!(ymd(easter_sunday(2025).unwrap()), (2025, 4, 20));
        assert_eq!(ymd(easter_sunday(1961).unwrap()), (1961, 4, 2));
    }

    #[test]
    fn always_a_sunday_between_march_22_and_april_25() {
        for year in 1583..=4099 {
            let easter = easter_sunday(year).unwrap();
            assert_eq!(easter.weekday_index(), 0, "{year}");
            let md = (easter.month(), easter.day());
            assert!((3, 22) <= md && md <= (4, 25), "{year}: {md:?}");
        }
    }

    #[test]
    fn ignores_month_and_day() {
        let christmas = CalendarDate::new(2024, 12, 25).unwrap();
        assert_eq!(christmas.easter_sunday(), easter_sunday(2024));
    }

    #[test]
    fn negative_year_rejected() {
        assert_eq!(easter_sunday(-1), Err(DateError::UnsupportedYear(-1)));
    }
}
