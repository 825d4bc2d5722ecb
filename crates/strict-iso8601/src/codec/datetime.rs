//! `YYYY-MM-DDTHH:MM:SS[.F]±HH:MM` date-times.
//!
//! The date and time fields follow the same rules as the standalone date
//! and time grammars, except that seconds are mandatory. The offset is
//! mandatory too: either `Z` or a signed `±HH:MM`. On output a zero offset
//! is always written `+00:00`.

use std::fmt;

use crate::codec::cursor::{parse_complete, Cursor};
use crate::codec::date::{read_date, write_date};
use crate::codec::time::{read_time, write_time_with_seconds, Seconds};
use crate::codec::Converter;
use crate::error::{FormatViolation, ParseError};
use crate::limits::FIELD_DIGITS;
use crate::model::{OffsetDateTime, Sign, UtcOffset};

/// Converts between [`OffsetDateTime`] and
/// `YYYY-MM-DDTHH:MM:SS[.F](Z|±HH:MM)`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OffsetDateTimeConverter;

impl Converter for OffsetDateTimeConverter {
    type Value = OffsetDateTime;

    const PATTERN: &'static str = "YYYY-MM-DDTHH:MM:SS[.F](Z|±HH:MM)";

    fn parse_str(&self, text: &str) -> Result<OffsetDateTime, ParseError> {
        parse_offset_datetime(text)
    }

    fn format_value(&self, value: &OffsetDateTime) -> String {
        format_offset_datetime(value)
    }
}

/// Parses exactly `YYYY-MM-DDTHH:MM:SS[.F]` followed by `Z` or `±HH:MM`.
///
/// The `T` separator and `Z` designator are upper case only. Leap seconds
/// are rejected even at instants where one really occurred.
pub fn parse_offset_datetime(text: &str) -> Result<OffsetDateTime, ParseError> {
    parse_complete(text, OffsetDateTimeConverter::PATTERN, |cursor| {
        let date = read_date(cursor)?;
        cursor.expect(b'T')?;
        let time = read_time(cursor, Seconds::Required)?;
        let offset = read_offset(cursor)?;
        Ok(OffsetDateTime::new(date, time, offset))
    })
}

/// Formats a date-time with seconds always present, a grouped fraction when
/// non-zero, and a `±HH:MM` offset (`+00:00` for UTC).
pub fn format_offset_datetime(value: &OffsetDateTime) -> String {
    value.to_string()
}

fn read_offset(cursor: &mut Cursor<'_>) -> Result<UtcOffset, FormatViolation> {
    if cursor.eat(b'Z') {
        return Ok(UtcOffset::UTC);
    }
    let sign = if cursor.eat(b'+') {
        Sign::Plus
    } else if cursor.eat(b'-') {
        Sign::Minus
    } else {
        return Err(cursor.violation(|pos, found| FormatViolation::ExpectedOffset { pos, found }));
    };
    let hours = cursor.read_digits(FIELD_DIGITS, "offset hour")?;
    cursor.expect(b':')?;
    let minutes = cursor.read_digits(FIELD_DIGITS, "offset minute")?;
    if sign == Sign::Minus && hours == 0 && minutes == 0 {
        debug!("normalizing offset -00:00 to +00:00");
    }
    Ok(UtcOffset::new(sign, hours as u8, minutes as u8)?)
}

pub(crate) fn write_offset<W: fmt::Write>(w: &mut W, offset: &UtcOffset) -> fmt::Result {
    write!(
        w,
        "{}{:02}:{:02}",
        offset.sign().as_char(),
        offset.hours(),
        offset.minutes()
    )
}

pub(crate) fn write_offset_datetime<W: fmt::Write>(
    w: &mut W,
    value: &OffsetDateTime,
) -> fmt::Result {
    write_date(w, &value.date())?;
    w.write_char('T')?;
    write_time_with_seconds(w, &value.time())?;
    write_offset(w, &value.offset())
}
