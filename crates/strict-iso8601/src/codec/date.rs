//! `YYYY-MM-DD` dates.

use std::fmt;

use crate::codec::cursor::{parse_complete, Cursor};
use crate::codec::Converter;
use crate::error::{FormatViolation, ParseError};
use crate::limits::{FIELD_DIGITS, YEAR_DIGITS};
use crate::model::CalendarDate;

/// Converts between [`CalendarDate`] and `YYYY-MM-DD`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DateConverter;

impl Converter for DateConverter {
    type Value = CalendarDate;

    const PATTERN: &'static str = "YYYY-MM-DD";

    fn parse_str(&self, text: &str) -> Result<CalendarDate, ParseError> {
        parse_date(text)
    }

    fn format_value(&self, value: &CalendarDate) -> String {
        format_date(value)
    }
}

/// Parses exactly `YYYY-MM-DD`.
///
/// The year must have four digits even below 1000 (`0997-07-21`), and the
/// day must exist in the given month and year.
pub fn parse_date(text: &str) -> Result<CalendarDate, ParseError> {
    parse_complete(text, DateConverter::PATTERN, read_date)
}

/// Formats a date as `YYYY-MM-DD`, zero-padding every field.
pub fn format_date(date: &CalendarDate) -> String {
    date.to_string()
}

/// Reads the date fields of any grammar that starts with a date.
pub(crate) fn read_date(cursor: &mut Cursor<'_>) -> Result<CalendarDate, FormatViolation> {
    let year = cursor.read_digits(YEAR_DIGITS, "year")?;
    cursor.expect(b'-')?;
    let month = cursor.read_digits(FIELD_DIGITS, "month")?;
    cursor.expect(b'-')?;
    let day = cursor.read_digits(FIELD_DIGITS, "day")?;
    Ok(CalendarDate::new(year as u16, month as u8, day as u8)?)
}

pub(crate) fn write_date<W: fmt::Write>(w: &mut W, date: &CalendarDate) -> fmt::Result {
    write!(
        w,
        "{:04}-{:02}-{:02}",
        date.year(),
        date.month(),
        date.day()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{ErrorKind, RangeError};

    fn date(year: u16, month: u8, day: u8) -> CalendarDate {
        CalendarDate::new(year, month, day).unwrap()
    }

    fn violation(text: &str) -> FormatViolation {
        parse_date(text).unwrap_err().violation().cloned().unwrap()
    }

    #[test]
    fn test_parse_date_basic() {
        assert_eq!(parse_date("2021-07-21").unwrap(), date(2021, 7, 21));
        assert_eq!(parse_date("1997-07-21").unwrap(), date(1997, 7, 21));
        assert_eq!(parse_date("0997-07-21").unwrap(), date(997, 7, 21));
        assert_eq!(parse_date("0000-01-01").unwrap(), date(0, 1, 1));
        assert_eq!(parse_date("9999-12-31").unwrap(), date(9999, 12, 31));
    }

    #[test]
    fn test_parse_date_malformed() {
        let inputs = [
            "2021-07-21T09:00", // with time
            "2021/07/21",       // slash separator
            "2021-07",          // no day
            "2021-7-21",        // single digit month
            "2021-07-1",        // single digit day
            "997-07-21",        // three digit year
            "202A-02-28",       // letter in year
            "20211-07-21",      // five digit year
            " 2021-07-21",      // leading space
            "2021-07-21 ",      // trailing space
            "+2021-07-21",      // signed year
            "",
        ];
        for input in inputs {
            let err = parse_date(input).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::InvalidFormat, "{:?}", input);
        }
    }

    #[test]
    fn test_parse_date_violations() {
        assert_eq!(
            violation("2021/07/21"),
            FormatViolation::ExpectedSeparator {
                expected: '-',
                pos: 4,
                found: '/'
            }
        );
        assert_eq!(
            violation("997-07-21"),
            FormatViolation::ExpectedDigit {
                field: "year",
                pos: 3,
                found: '-'
            }
        );
        assert_eq!(
            violation("2021-07-21T09:00"),
            FormatViolation::TrailingInput { pos: 10 }
        );
        assert_eq!(violation(""), FormatViolation::UnexpectedEnd { pos: 0 });
    }

    #[test]
    fn test_parse_date_out_of_range() {
        assert!(matches!(
            violation("2021-13-21"),
            FormatViolation::OutOfRange(RangeError::Field { field: "month", .. })
        ));
        assert!(matches!(
            violation("2021-00-21"),
            FormatViolation::OutOfRange(RangeError::Field { field: "month", .. })
        ));
        assert_eq!(
            violation("2021-02-29"),
            FormatViolation::OutOfRange(RangeError::DayOfMonth {
                year: 2021,
                month: 2,
                day: 29
            })
        );
        assert!(parse_date("2021-04-31").is_err());
        assert!(parse_date("2021-01-00").is_err());
    }

    #[test]
    fn test_leap_day() {
        assert!(parse_date("2000-02-29").is_ok());
        assert!(parse_date("2020-02-29").is_ok());
        assert!(parse_date("1900-02-29").is_err());
        assert!(parse_date("2021-02-29").is_err());
    }

    #[test]
    fn test_format_date() {
        assert_eq!(format_date(&date(2021, 7, 5)), "2021-07-05");
        assert_eq!(format_date(&date(997, 7, 5)), "0997-07-05");
        assert_eq!(format_date(&date(0, 1, 1)), "0000-01-01");
    }

    #[test]
    fn test_converter() {
        let converter = DateConverter;
        assert_eq!(
            converter.parse(Some("2021-07-21")).unwrap(),
            date(2021, 7, 21)
        );
        assert_eq!(
            converter.format(Some(&date(997, 7, 21))).as_deref(),
            Some("0997-07-21")
        );
        assert_eq!(
            converter.parse(None).unwrap_err(),
            ParseError::MissingInput {
                pattern: "YYYY-MM-DD"
            }
        );
    }

    #[test]
    fn test_date_roundtrip() {
        let dates = ["2021-07-21", "0997-07-21", "2000-02-29", "0001-12-31"];
        for text in dates {
            let parsed: CalendarDate = text.parse().unwrap();
            assert_eq!(parsed.to_string(), text, "Roundtrip failed for {}", text);
        }
    }
}
