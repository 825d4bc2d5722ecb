//! Fixed widths and ranges of the accepted grammar.

/// Largest year representable with exactly four digits.
pub const MAX_YEAR: u16 = 9999;

/// Number of digits in the year field.
pub const YEAR_DIGITS: usize = 4;

/// Number of digits in every other numeric field (month, day, hour, minute,
/// second, offset hour, offset minute).
pub const FIELD_DIGITS: usize = 2;

/// Maximum number of digits after the decimal point (nanosecond precision).
pub const MAX_FRACTION_DIGITS: usize = 9;

/// Largest absolute offset hour; the whole offset is bounded by `±18:00`.
pub const MAX_OFFSET_HOURS: u8 = 18;

/// Largest absolute offset in minutes.
pub const MAX_OFFSET_MINUTES: i16 = MAX_OFFSET_HOURS as i16 * 60;

pub const NANOS_PER_SECOND: u32 = 1_000_000_000;
