//! Strict ISO 8601 text for dates, times and offset date-times.
//!
//! This crate converts calendar values to and from a constrained subset of
//! ISO 8601 for serialization layers that need deterministic,
//! round-trippable text.
//!
//! # Overview
//!
//! The grammar is deliberately narrower than typical ISO 8601 parsers:
//! - **Fixed widths**: four-digit years, two-digit fields, no padding omitted
//! - **Literal separators**: `-`, `:`, `T`, `.` exactly where expected
//! - **No silent coercion**: out-of-range fields, impossible days and leap
//!   seconds are rejected rather than clamped
//!
//! Formatting is canonical: every value produces exactly one string, with
//! fractional seconds printed in groups of 3, 6 or 9 digits.
//!
//! # Quick Start
//!
//! ```rust
//! use strict_iso8601::{Converter, OffsetDateTimeConverter, TimeConverter};
//!
//! let time = TimeConverter.parse(Some("09:05:03.9")).unwrap();
//! assert_eq!(time.nanosecond(), 900_000_000);
//! assert_eq!(TimeConverter.format(Some(&time)).as_deref(), Some("09:05:03.900"));
//!
//! let value = OffsetDateTimeConverter
//!     .parse(Some("2021-07-05T02:45:37Z"))
//!     .unwrap();
//! assert_eq!(value.to_string(), "2021-07-05T02:45:37+00:00");
//!
//! // A leap second is a format error, not a value
//! assert!(OffsetDateTimeConverter
//!     .parse(Some("2015-06-30T23:59:60.999Z"))
//!     .is_err());
//! ```
//!
//! # Modules
//!
//! - [`model`]: Value objects (CalendarDate, TimeOfDay, UtcOffset, OffsetDateTime)
//! - [`codec`]: The three converters and their parse/format functions
//! - [`error`]: Error types
//! - [`limits`]: Widths and ranges of the grammar
//!
//! # Features
//!
//! - `logging`: emit `trace`/`debug` records through the `log` crate
//! - `serde`: (de)serialize the value types as their canonical strings

#[macro_use]
mod logging;

pub mod codec;
pub mod error;
pub mod limits;
pub mod model;

// Re-export commonly used types at crate root
pub use codec::{
    format_date, format_offset_datetime, format_time, parse_date, parse_offset_datetime,
    parse_time, Converter, DateConverter, OffsetDateTimeConverter, TimeConverter,
};
pub use error::{ErrorKind, FormatViolation, ParseError, RangeError};
pub use model::{CalendarDate, OffsetDateTime, Sign, TimeOfDay, UtcOffset};

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
