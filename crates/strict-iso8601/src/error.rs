//! Error types for strict ISO 8601 parsing and value construction.

use thiserror::Error;

/// The two ways a parse can fail.
///
/// Callers that only need to tell "nothing was passed" apart from "garbage
/// was passed" can branch on this instead of matching [`ParseError`] fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The input was absent (as opposed to present but empty).
    MissingInput,
    /// The input was present but not exactly well-formed.
    InvalidFormat,
}

/// Error returned by the parsing side of the converters.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("no text given to parse with pattern {pattern}")]
    MissingInput { pattern: &'static str },

    #[error("text {input:?} could not be parsed with pattern {pattern}: {violation}")]
    InvalidFormat {
        input: String,
        pattern: &'static str,
        #[source]
        violation: FormatViolation,
    },
}

impl ParseError {
    pub(crate) fn invalid(input: &str, pattern: &'static str, violation: FormatViolation) -> Self {
        ParseError::InvalidFormat {
            input: input.to_string(),
            pattern,
            violation,
        }
    }

    /// Returns which of the two failure kinds this is.
    pub fn kind(&self) -> ErrorKind {
        match self {
            ParseError::MissingInput { .. } => ErrorKind::MissingInput,
            ParseError::InvalidFormat { .. } => ErrorKind::InvalidFormat,
        }
    }

    /// Returns the pattern the text was checked against.
    pub fn pattern(&self) -> &'static str {
        match self {
            ParseError::MissingInput { pattern } | ParseError::InvalidFormat { pattern, .. } => {
                *pattern
            }
        }
    }

    /// Returns the reason a present input was rejected.
    pub fn violation(&self) -> Option<&FormatViolation> {
        match self {
            ParseError::MissingInput { .. } => None,
            ParseError::InvalidFormat { violation, .. } => Some(violation),
        }
    }
}

/// The precise grammar or range rule a present input broke.
///
/// Positions are byte offsets into the input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum FormatViolation {
    #[error("text ended at position {pos}")]
    UnexpectedEnd { pos: usize },

    #[error("expected an ASCII digit of the {field} at position {pos}, found {found:?}")]
    ExpectedDigit {
        field: &'static str,
        pos: usize,
        found: char,
    },

    #[error("expected {expected:?} at position {pos}, found {found:?}")]
    ExpectedSeparator {
        expected: char,
        pos: usize,
        found: char,
    },

    #[error("expected an offset ('+', '-' or 'Z') at position {pos}, found {found:?}")]
    ExpectedOffset { pos: usize, found: char },

    #[error("unexpected trailing text at position {pos}")]
    TrailingInput { pos: usize },

    #[error("fraction of a second has more than 9 digits")]
    TooManyFractionDigits,

    #[error("leap seconds are not supported")]
    LeapSecond,

    #[error(transparent)]
    OutOfRange(#[from] RangeError),
}

/// Error returned when constructing a value object from out-of-range fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RangeError {
    #[error("{field} {value} out of range [{min}, {max}]")]
    Field {
        field: &'static str,
        value: i64,
        min: i64,
        max: i64,
    },

    #[error("day {day} does not exist in {year:04}-{month:02}")]
    DayOfMonth { year: u16, month: u8, day: u8 },
}

impl RangeError {
    pub(crate) fn field(field: &'static str, value: impl Into<i64>, min: i64, max: i64) -> Self {
        RangeError::Field {
            field,
            value: value.into(),
            min,
            max,
        }
    }
}
