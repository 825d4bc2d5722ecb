//! Strict text conversion for the value types.
//!
//! Each converter pairs a parser that accepts exactly one grammar with a
//! formatter that produces exactly one string per value:
//!
//! | Converter                   | Pattern                                 |
//! |-----------------------------|-----------------------------------------|
//! | [`DateConverter`]           | `YYYY-MM-DD`                            |
//! | [`TimeConverter`]           | `HH:MM[:SS[.F]]`                        |
//! | [`OffsetDateTimeConverter`] | `YYYY-MM-DDTHH:MM:SS[.F](Z\|±HH:MM)`    |
//!
//! `F` is 1 to 9 fraction digits on input; output always uses 3, 6 or 9.

mod cursor;
mod fraction;

pub mod date;
pub mod datetime;
pub mod time;

#[cfg(feature = "serde")]
mod serde;

pub use date::{format_date, parse_date, DateConverter};
pub use datetime::{format_offset_datetime, parse_offset_datetime, OffsetDateTimeConverter};
pub use time::{format_time, parse_time, TimeConverter};

use crate::error::ParseError;

/// A bidirectional text conversion for one value type.
///
/// `parse` and `format` take optional arguments so that a binding layer can
/// hand over whatever it holds: absent text is a [`ParseError::MissingInput`]
/// while an absent value simply formats to no text.
pub trait Converter {
    type Value;

    /// The accepted textual shape, used in error messages.
    const PATTERN: &'static str;

    /// Parses text that is known to be present.
    fn parse_str(&self, text: &str) -> Result<Self::Value, ParseError>;

    /// Formats a value that is known to be present.
    fn format_value(&self, value: &Self::Value) -> String;

    #[cfg_attr(not(feature = "logging"), allow(unused_variables))]
    fn parse(&self, text: Option<&str>) -> Result<Self::Value, ParseError> {
        let Some(text) = text else {
            trace!("no text given for pattern {}", Self::PATTERN);
            return Err(ParseError::MissingInput {
                pattern: Self::PATTERN,
            });
        };
        let result = self.parse_str(text);
        if let Err(ref err) = result {
            trace!("rejected {:?}: {}", text, err);
        }
        result
    }

    fn format(&self, value: Option<&Self::Value>) -> Option<String> {
        value.map(|value| self.format_value(value))
    }
}
