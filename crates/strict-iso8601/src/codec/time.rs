//! `HH:MM[:SS[.F]]` times of day.

use std::fmt;

use crate::codec::cursor::{parse_complete, Cursor};
use crate::codec::fraction::{read_nanos, write_fraction};
use crate::codec::Converter;
use crate::error::{FormatViolation, ParseError};
use crate::limits::FIELD_DIGITS;
use crate::model::TimeOfDay;

/// Converts between [`TimeOfDay`] and `HH:MM[:SS[.F]]`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TimeConverter;

impl Converter for TimeConverter {
    type Value = TimeOfDay;

    const PATTERN: &'static str = "HH:MM[:SS[.F]]";

    fn parse_str(&self, text: &str) -> Result<TimeOfDay, ParseError> {
        parse_time(text)
    }

    fn format_value(&self, value: &TimeOfDay) -> String {
        format_time(value)
    }
}

/// Whether a grammar lets the seconds group be left out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Seconds {
    Optional,
    Required,
}

/// Parses exactly `HH:MM[:SS[.F]]`, where `F` is 1 to 9 digits.
///
/// Missing seconds default to zero. A seconds value of 60 is rejected.
pub fn parse_time(text: &str) -> Result<TimeOfDay, ParseError> {
    parse_complete(text, TimeConverter::PATTERN, |cursor| {
        read_time(cursor, Seconds::Optional)
    })
}

/// Formats a time as `HH:MM`, adding `:SS` only when the second or
/// nanosecond is non-zero and a 3, 6 or 9 digit fraction only when the
/// nanosecond is non-zero.
pub fn format_time(time: &TimeOfDay) -> String {
    time.to_string()
}

/// Reads the time fields shared by the time and date-time grammars.
pub(crate) fn read_time(
    cursor: &mut Cursor<'_>,
    seconds: Seconds,
) -> Result<TimeOfDay, FormatViolation> {
    let hour = cursor.read_digits(FIELD_DIGITS, "hour")?;
    cursor.expect(b':')?;
    let minute = cursor.read_digits(FIELD_DIGITS, "minute")?;

    let has_seconds = match seconds {
        Seconds::Required => {
            cursor.expect(b':')?;
            true
        }
        Seconds::Optional => cursor.eat(b':'),
    };
    let (second, nanosecond) = if has_seconds {
        let second = cursor.read_digits(FIELD_DIGITS, "second")?;
        if second == 60 {
            return Err(FormatViolation::LeapSecond);
        }
        let nanosecond = if cursor.eat(b'.') {
            read_nanos(cursor)?
        } else {
            0
        };
        (second, nanosecond)
    } else {
        (0, 0)
    };

    Ok(TimeOfDay::new(
        hour as u8,
        minute as u8,
        second as u8,
        nanosecond,
    )?)
}

/// Writes `HH:MM:SS` and the fraction, always including seconds.
pub(crate) fn write_time_with_seconds<W: fmt::Write>(w: &mut W, time: &TimeOfDay) -> fmt::Result {
    write!(
        w,
        "{:02}:{:02}:{:02}",
        time.hour(),
        time.minute(),
        time.second()
    )?;
    write_fraction(w, time.nanosecond())
}

pub(crate) fn write_time<W: fmt::Write>(w: &mut W, time: &TimeOfDay) -> fmt::Result {
    if time.second() == 0 && time.nanosecond() == 0 {
        return write!(w, "{:02}:{:02}", time.hour(), time.minute());
    }
    write_time_with_seconds(w, time)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{ErrorKind, RangeError};

    fn time(hour: u8, minute: u8, second: u8, nanosecond: u32) -> TimeOfDay {
        TimeOfDay::new(hour, minute, second, nanosecond).unwrap()
    }

    fn violation(text: &str) -> FormatViolation {
        parse_time(text).unwrap_err().violation().cloned().unwrap()
    }

    #[test]
    fn test_parse_time_basic() {
        assert_eq!(parse_time("09:00").unwrap(), time(9, 0, 0, 0));
        assert_eq!(parse_time("09:05:03").unwrap(), time(9, 5, 3, 0));
        assert_eq!(parse_time("09:05:03.9").unwrap(), time(9, 5, 3, 900_000_000));
        assert_eq!(parse_time("09:05:03.987").unwrap(), time(9, 5, 3, 987_000_000));
        assert_eq!(
            parse_time("09:05:03.987654321").unwrap(),
            time(9, 5, 3, 987_654_321)
        );
        assert_eq!(parse_time("00:00").unwrap(), TimeOfDay::MIDNIGHT);
        assert_eq!(
            parse_time("23:59:59.999999999").unwrap(),
            time(23, 59, 59, 999_999_999)
        );
    }

    #[test]
    fn test_parse_time_malformed() {
        let inputs = [
            "T09:00",                // leading T
            "2021-07-05T02:45:37",   // with date
            "09",                    // hour only
            "09:05:03.9876543212",   // ten fraction digits
            "09:00+08:00",           // with offset
            "09:00Z",                // with zero offset
            "23:59.60",              // fraction without seconds
            "2A:59",                 // letter in hour
            "9:00",                  // single digit hour
            "09:5",                  // single digit minute
            "09:05:3",               // single digit second
            "09:05:03.",             // empty fraction
            "09:05:03,5",            // comma as decimal mark
            "09-05",                 // wrong separator
            "",
        ];
        for input in inputs {
            let err = parse_time(input).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::InvalidFormat, "{:?}", input);
        }
    }

    #[test]
    fn test_parse_time_violations() {
        assert_eq!(
            violation("09:05:03.9876543212"),
            FormatViolation::TooManyFractionDigits
        );
        assert_eq!(
            violation("09:00+08:00"),
            FormatViolation::TrailingInput { pos: 5 }
        );
        assert_eq!(
            violation("09:05:03."),
            FormatViolation::UnexpectedEnd { pos: 9 }
        );
    }

    #[test]
    fn test_parse_time_out_of_range() {
        assert!(matches!(
            violation("24:00"),
            FormatViolation::OutOfRange(RangeError::Field { field: "hour", .. })
        ));
        assert!(matches!(
            violation("23:60"),
            FormatViolation::OutOfRange(RangeError::Field { field: "minute", .. })
        ));
        assert!(matches!(
            violation("23:59:61"),
            FormatViolation::OutOfRange(RangeError::Field { field: "second", .. })
        ));
    }

    #[test]
    fn test_leap_second_rejected() {
        assert_eq!(violation("23:59:60"), FormatViolation::LeapSecond);
        assert_eq!(violation("23:59:60.5"), FormatViolation::LeapSecond);
    }

    #[test]
    fn test_format_time() {
        assert_eq!(format_time(&time(7, 1, 0, 0)), "07:01");
        assert_eq!(format_time(&time(23, 1, 5, 0)), "23:01:05");
        assert_eq!(format_time(&time(7, 1, 5, 987_000_000)), "07:01:05.987");
        assert_eq!(format_time(&time(7, 1, 5, 987_600_000)), "07:01:05.987600");
        assert_eq!(format_time(&time(7, 1, 5, 987_654_300)), "07:01:05.987654300");
        // seconds are shown when only the fraction is non-zero
        assert_eq!(format_time(&time(7, 1, 0, 900)), "07:01:00.000000900");
    }

    #[test]
    fn test_converter() {
        let converter = TimeConverter;
        assert_eq!(
            converter.parse(Some("09:05:03.9")).unwrap(),
            time(9, 5, 3, 900_000_000)
        );
        assert_eq!(
            converter.format(Some(&time(7, 1, 5, 987_600_000))).as_deref(),
            Some("07:01:05.987600")
        );
        assert_eq!(
            converter.parse(None).unwrap_err().kind(),
            ErrorKind::MissingInput
        );
    }

    #[test]
    fn test_time_roundtrip() {
        let times = [
            "00:00",
            "07:01",
            "23:01:05",
            "07:01:05.987",
            "07:01:05.987600",
            "07:01:05.987654300",
            "23:59:59.999999999",
        ];
        for text in times {
            let parsed: TimeOfDay = text.parse().unwrap();
            assert_eq!(parsed.to_string(), text, "Roundtrip failed for {}", text);
        }
    }

    #[test]
    fn test_non_canonical_keeps_value() {
        // "00" seconds and short fractions parse but print canonically
        assert_eq!(parse_time("07:01:00").unwrap().to_string(), "07:01");
        assert_eq!(parse_time("07:01:05.9876").unwrap().to_string(), "07:01:05.987600");
        assert_eq!(parse_time("07:01:05.5").unwrap().nanosecond(), 500_000_000);
    }
}
