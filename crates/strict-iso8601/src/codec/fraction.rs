//! Fractional seconds.
//!
//! Parsing accepts 1 to 9 digits and right-pads them to nanoseconds.
//! Formatting prints 3, 6 or 9 digits (milli, micro or nanosecond groups),
//! whichever is the shortest that loses nothing, and nothing at all for zero.

use std::fmt;

use crate::codec::cursor::Cursor;
use crate::error::FormatViolation;
use crate::limits::MAX_FRACTION_DIGITS;

/// Reads the digits following a decimal point and returns nanoseconds.
pub(crate) fn read_nanos(cursor: &mut Cursor<'_>) -> Result<u32, FormatViolation> {
    let mut nanos = cursor.read_digit("fraction")?;
    let mut digits = 1;
    while let Some(digit) = cursor.peek_digit() {
        if digits == MAX_FRACTION_DIGITS {
            return Err(FormatViolation::TooManyFractionDigits);
        }
        cursor.read_digit("fraction")?;
        nanos = nanos * 10 + digit;
        digits += 1;
    }
    for _ in digits..MAX_FRACTION_DIGITS {
        nanos *= 10;
    }
    Ok(nanos)
}

/// Splits nanoseconds into the digits to print and their width.
///
/// Returns `None` when there is no fractional part.
pub(crate) fn grouped_digits(nanos: u32) -> Option<(u32, usize)> {
    if nanos == 0 {
        None
    } else if nanos % 1_000_000 == 0 {
        Some((nanos / 1_000_000, 3))
    } else if nanos % 1_000 == 0 {
        Some((nanos / 1_000, 6))
    } else {
        Some((nanos, 9))
    }
}

/// Writes `.` and the grouped fraction digits, or nothing for zero.
pub(crate) fn write_fraction<W: fmt::Write>(w: &mut W, nanos: u32) -> fmt::Result {
    match grouped_digits(nanos) {
        Some((digits, width)) => write!(w, ".{:0width$}", digits, width = width),
        None => Ok(()),
    }
}
