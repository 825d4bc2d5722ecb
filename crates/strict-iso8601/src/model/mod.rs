//! Value objects produced by parsing and consumed by formatting.
//!
//! This module contains the four value types:
//! - Calendar dates (year, month, day)
//! - Times of day (hour, minute, second, nanosecond)
//! - UTC offsets (sign, hour, minute)
//! - Offset date-times (date + time + offset)
//!
//! Every type is validated on construction, so a value that exists is in
//! range and always formats to exactly one string.

pub mod date;
pub mod datetime;
pub mod offset;
pub mod time;

pub use date::{days_in_month, is_leap_year, CalendarDate};
pub use datetime::OffsetDateTime;
pub use offset::{Sign, UtcOffset};
pub use time::TimeOfDay;
