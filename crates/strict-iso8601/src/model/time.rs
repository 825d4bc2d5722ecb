//! Times of day without a date or offset.

use std::fmt;
use std::str::FromStr;

use crate::error::{ParseError, RangeError};
use crate::limits::NANOS_PER_SECOND;

/// A wall-clock time with nanosecond precision.
///
/// There is no representation for leap seconds: `second` is always 0-59.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimeOfDay {
    hour: u8,
    minute: u8,
    second: u8,
    nanosecond: u32,
}

impl TimeOfDay {
    pub const MIDNIGHT: TimeOfDay = TimeOfDay {
        hour: 0,
        minute: 0,
        second: 0,
        nanosecond: 0,
    };

    /// Creates a time, checking every field.
    pub fn new(hour: u8, minute: u8, second: u8, nanosecond: u32) -> Result<Self, RangeError> {
        if hour > 23 {
            return Err(RangeError::field("hour", hour, 0, 23));
        }
        if minute > 59 {
            return Err(RangeError::field("minute", minute, 0, 59));
        }
        if second > 59 {
            return Err(RangeError::field("second", second, 0, 59));
        }
        if nanosecond >= NANOS_PER_SECOND {
            return Err(RangeError::field(
                "nanosecond",
                nanosecond,
                0,
                i64::from(NANOS_PER_SECOND) - 1,
            ));
        }
        Ok(Self {
            hour,
            minute,
            second,
            nanosecond,
        })
    }

    pub fn hour(&self) -> u8 {
        self.hour
    }

    pub fn minute(&self) -> u8 {
        self.minute
    }

    pub fn second(&self) -> u8 {
        self.second
    }

    /// Sub-second part in nanoseconds, 0 through 999,999,999.
    pub fn nanosecond(&self) -> u32 {
        self.nanosecond
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        crate::codec::time::write_time(f, self)
    }
}

impl FromStr for TimeOfDay {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        crate::codec::parse_time(s)
    }
}
