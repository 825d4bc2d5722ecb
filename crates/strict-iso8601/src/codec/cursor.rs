//! Fixed-width tokenizer shared by every grammar.
//!
//! Fields are read with exact digit counts and separators are matched
//! literally. Nothing is skipped, trimmed or case-folded.

use crate::error::{FormatViolation, ParseError};

/// Cursor over the text being parsed.
///
/// Only ASCII bytes are ever consumed, so the position always sits on a
/// character boundary and the character found there can be reported.
#[derive(Debug, Clone)]
pub(crate) struct Cursor<'a> {
    text: &'a str,
    pos: usize,
}

impl<'a> Cursor<'a> {
    pub(crate) fn new(text: &'a str) -> Self {
        Self { text, pos: 0 }
    }

    /// Returns the current byte position.
    #[cfg(test)]
    pub(crate) fn position(&self) -> usize {
        self.pos
    }

    fn current(&self) -> Option<char> {
        self.text[self.pos..].chars().next()
    }

    /// Builds the violation for whatever sits at the current position:
    /// `at_char` is given the position and character, or the text has ended.
    pub(crate) fn violation(
        &self,
        at_char: impl FnOnce(usize, char) -> FormatViolation,
    ) -> FormatViolation {
        match self.current() {
            Some(found) => at_char(self.pos, found),
            None => FormatViolation::UnexpectedEnd { pos: self.pos },
        }
    }

    /// Consumes `byte` if it is next. Returns whether it was consumed.
    #[inline]
    pub(crate) fn eat(&mut self, byte: u8) -> bool {
        if self.text.as_bytes().get(self.pos) == Some(&byte) {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    /// Consumes the literal separator `byte`.
    pub(crate) fn expect(&mut self, byte: u8) -> Result<(), FormatViolation> {
        if self.eat(byte) {
            return Ok(());
        }
        Err(self.violation(|pos, found| FormatViolation::ExpectedSeparator {
            expected: char::from(byte),
            pos,
            found,
        }))
    }

    /// Returns the value of the next character if it is an ASCII digit,
    /// without consuming it.
    #[inline]
    pub(crate) fn peek_digit(&self) -> Option<u32> {
        match self.text.as_bytes().get(self.pos).copied() {
            Some(b @ b'0'..=b'9') => Some(u32::from(b - b'0')),
            _ => None,
        }
    }

    /// Reads one ASCII digit of `field`.
    #[inline]
    pub(crate) fn read_digit(&mut self, field: &'static str) -> Result<u32, FormatViolation> {
        match self.peek_digit() {
            Some(digit) => {
                self.pos += 1;
                Ok(digit)
            }
            None => Err(self.violation(|pos, found| FormatViolation::ExpectedDigit {
                field,
                pos,
                found,
            })),
        }
    }

    /// Reads exactly `width` ASCII digits of `field` as a number.
    pub(crate) fn read_digits(
        &mut self,
        width: usize,
        field: &'static str,
    ) -> Result<u32, FormatViolation> {
        let mut value = 0u32;
        for _ in 0..width {
            value = value * 10 + self.read_digit(field)?;
        }
        Ok(value)
    }

    /// Fails unless all of the text has been consumed.
    pub(crate) fn finish(&self) -> Result<(), FormatViolation> {
        if self.pos < self.text.len() {
            return Err(FormatViolation::TrailingInput { pos: self.pos });
        }
        Ok(())
    }
}

/// Runs `read` over the whole of `text`, requiring every character to be
/// consumed. Any violation is reported against `pattern`.
pub(crate) fn parse_complete<T>(
    text: &str,
    pattern: &'static str,
    read: impl FnOnce(&mut Cursor<'_>) -> Result<T, FormatViolation>,
) -> Result<T, ParseError> {
    let mut cursor = Cursor::new(text);
    read(&mut cursor)
        .and_then(|value| cursor.finish().map(|()| value))
        .map_err(|violation| ParseError::invalid(text, pattern, violation))
}
