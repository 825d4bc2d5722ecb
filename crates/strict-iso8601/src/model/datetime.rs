//! Date-times carrying a UTC offset.

use std::fmt;
use std::str::FromStr;

use crate::error::ParseError;
use crate::model::{CalendarDate, TimeOfDay, UtcOffset};

/// A calendar date and time of day at a fixed offset from UTC.
///
/// Equality compares fields, not instants: `09:00+01:00` and `08:00Z` are
/// different values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct OffsetDateTime {
    date: CalendarDate,
    time: TimeOfDay,
    offset: UtcOffset,
}

impl OffsetDateTime {
    pub fn new(date: CalendarDate, time: TimeOfDay, offset: UtcOffset) -> Self {
        Self { date, time, offset }
    }

    pub fn date(&self) -> CalendarDate {
        self.date
    }

    pub fn time(&self) -> TimeOfDay {
        self.time
    }

    pub fn offset(&self) -> UtcOffset {
        self.offset
    }
}

impl fmt::Display for OffsetDateTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        crate::codec::datetime::write_offset_datetime(f, self)
    }
}

impl FromStr for OffsetDateTime {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        crate::codec::parse_offset_datetime(s)
    }
}
