//! Serde support.
//!
//! [`CalendarDate`], [`TimeOfDay`] and [`OffsetDateTime`] serialize as their
//! canonical strings and deserialize through the strict parsers. Wrap a field
//! in `Option` to get `null` for an absent value.
//!
//! ```
//! use strict_iso8601::{CalendarDate, OffsetDateTime};
//!
//! #[derive(Debug, serde::Deserialize, serde::Serialize)]
//! struct Record {
//!     born: CalendarDate,
//!     seen: Option<OffsetDateTime>,
//! }
//!
//! let json = r#"{"born":"0997-07-21","seen":"2021-07-05T02:45:37+00:00"}"#;
//! let got: Record = serde_json::from_str(json)?;
//! assert_eq!(got.born.year(), 997);
//! assert_eq!(serde_json::to_string(&got)?, json);
//!
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

use std::fmt;

use serde::de;

use crate::codec::{parse_date, parse_offset_datetime, parse_time};
use crate::error::ParseError;
use crate::model::{CalendarDate, OffsetDateTime, TimeOfDay};

/// A visitor that hands a string to one of the strict parsers.
struct StrVisitor<T> {
    expecting: &'static str,
    parse: fn(&str) -> Result<T, ParseError>,
}

impl<'de, T> de::Visitor<'de> for StrVisitor<T> {
    type Value = T;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.expecting)
    }

    #[inline]
    fn visit_str<E: de::Error>(self, value: &str) -> Result<T, E> {
        (self.parse)(value).map_err(de::Error::custom)
    }

    #[inline]
    fn visit_bytes<E: de::Error>(self, value: &[u8]) -> Result<T, E> {
        let text = std::str::from_utf8(value)
            .map_err(|_| de::Error::invalid_value(de::Unexpected::Bytes(value), &self))?;
        self.visit_str(text)
    }
}

macro_rules! serde_as_str {
    ($ty:ty, $parse:path, $expecting:expr) => {
        impl serde::Serialize for $ty {
            #[inline]
            fn serialize<S: serde::Serializer>(&self, se: S) -> Result<S::Ok, S::Error> {
                se.collect_str(self)
            }
        }

        impl<'de> serde::Deserialize<'de> for $ty {
            #[inline]
            fn deserialize<D: serde::Deserializer<'de>>(de: D) -> Result<$ty, D::Error> {
                de.deserialize_str(StrVisitor {
                    expecting: $expecting,
                    parse: $parse,
                })
            }
        }
    };
}

serde_as_str!(CalendarDate, parse_date, "a date string in the form YYYY-MM-DD");
serde_as_str!(TimeOfDay, parse_time, "a time string in the form HH:MM[:SS[.F]]");
serde_as_str!(
    OffsetDateTime,
    parse_offset_datetime,
    "a date-time string in the form YYYY-MM-DDTHH:MM:SS[.F](Z|±HH:MM)"
);
