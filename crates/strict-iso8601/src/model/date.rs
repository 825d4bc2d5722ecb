//! Calendar dates without a time or offset.

use std::fmt;
use std::str::FromStr;

use crate::error::{ParseError, RangeError};
use crate::limits::MAX_YEAR;

/// Returns true if the given year is a leap year in the proleptic Gregorian
/// calendar.
pub fn is_leap_year(year: u16) -> bool {
    (year % 4 == 0 && year % 100 != 0) || (year % 400 == 0)
}

/// Returns the number of days in a given month (1-indexed), or 0 for a month
/// outside 1-12.
pub fn days_in_month(year: u16, month: u8) -> u8 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 => {
            if is_leap_year(year) {
                29
            } else {
                28
            }
        }
        _ => 0,
    }
}

/// A date in the proleptic Gregorian calendar, year 0 through 9999.
///
/// A `CalendarDate` can only be built through [`CalendarDate::new`] (or by
/// parsing), so the day is always valid for its month and year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CalendarDate {
    year: u16,
    month: u8,
    day: u8,
}

impl CalendarDate {
    /// Creates a date, checking every field.
    pub fn new(year: u16, month: u8, day: u8) -> Result<Self, RangeError> {
        if year > MAX_YEAR {
            return Err(RangeError::field("year", year, 0, MAX_YEAR.into()));
        }
        if !(1..=12).contains(&month) {
            return Err(RangeError::field("month", month, 1, 12));
        }
        if day < 1 || day > days_in_month(year, month) {
            return Err(RangeError::DayOfMonth { year, month, day });
        }
        Ok(Self { year, month, day })
    }

    pub fn year(&self) -> u16 {
        self.year
    }

    /// Month of the year, 1 (January) through 12 (December).
    pub fn month(&self) -> u8 {
        self.month
    }

    pub fn day(&self) -> u8 {
        self.day
    }

    pub fn is_leap_year(&self) -> bool {
        is_leap_year(self.year)
    }
}

impl fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        crate::codec::date::write_date(f, self)
    }
}

impl FromStr for CalendarDate {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        crate::codec::parse_date(s)
    }
}
