//! UTC offsets attached to date-times.

use std::fmt;

use crate::error::RangeError;
use crate::limits::{MAX_OFFSET_HOURS, MAX_OFFSET_MINUTES};

/// Direction of an offset from UTC.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Sign {
    Plus,
    Minus,
}

impl Sign {
    pub fn as_char(self) -> char {
        match self {
            Sign::Plus => '+',
            Sign::Minus => '-',
        }
    }
}

/// A signed hour:minute displacement from UTC, bounded by `±18:00`.
///
/// Stored as a total number of minutes, so `-00:00` and `+00:00` are the
/// same value and a zero offset always reports [`Sign::Plus`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct UtcOffset {
    minutes: i16,
}

impl UtcOffset {
    pub const UTC: UtcOffset = UtcOffset { minutes: 0 };

    /// Creates an offset from its sign, hour and minute fields.
    pub fn new(sign: Sign, hours: u8, minutes: u8) -> Result<Self, RangeError> {
        if hours > MAX_OFFSET_HOURS {
            return Err(RangeError::field(
                "offset hour",
                hours,
                0,
                MAX_OFFSET_HOURS.into(),
            ));
        }
        if minutes > 59 {
            return Err(RangeError::field("offset minute", minutes, 0, 59));
        }
        let magnitude = i16::from(hours) * 60 + i16::from(minutes);
        let total = match sign {
            Sign::Plus => magnitude,
            Sign::Minus => -magnitude,
        };
        Self::from_total_minutes(total)
    }

    /// Creates an offset from a signed number of minutes east of UTC.
    pub fn from_total_minutes(minutes: i16) -> Result<Self, RangeError> {
        if !(-MAX_OFFSET_MINUTES..=MAX_OFFSET_MINUTES).contains(&minutes) {
            return Err(RangeError::field(
                "offset in minutes",
                minutes,
                (-MAX_OFFSET_MINUTES).into(),
                MAX_OFFSET_MINUTES.into(),
            ));
        }
        Ok(Self { minutes })
    }

    pub fn sign(&self) -> Sign {
        if self.minutes < 0 {
            Sign::Minus
        } else {
            Sign::Plus
        }
    }

    /// Absolute hour part of the offset.
    pub fn hours(&self) -> u8 {
        (self.minutes.unsigned_abs() / 60) as u8
    }

    /// Absolute minute part of the offset.
    pub fn minutes(&self) -> u8 {
        (self.minutes.unsigned_abs() % 60) as u8
    }

    pub fn total_minutes(&self) -> i16 {
        self.minutes
    }

    pub fn is_utc(&self) -> bool {
        self.minutes == 0
    }
}

impl Default for UtcOffset {
    fn default() -> Self {
        Self::UTC
    }
}

impl fmt::Display for UtcOffset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        crate::codec::datetime::write_offset(f, self)
    }
}
