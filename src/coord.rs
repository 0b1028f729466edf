//! Coordinate tokens such as `"B2"` or `"J10"`.
//!
//! The row is the first character (`A` = 0), the column is the 1-based number
//! that follows it. Only one row letter is read, so grids larger than 26 rows
//! cannot be addressed.

use core::fmt;

use crate::common::ParseError;

/// A validated 0-based row/column pair on a grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RowCol {
    pub row: usize,
    pub col: usize,
}

impl RowCol {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

impl fmt::Display for RowCol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match u8::try_from(self.row) {
            Ok(row) if row < 26 => write!(f, "{}{}", (b'A' + row) as char, self.col + 1),
            // no letter for this row
            _ => write!(f, "#{}:{}", self.row + 1, self.col + 1),
        }
    }
}

/// Parse a single coordinate token against a grid of `size` rows and columns.
pub fn parse(token: &str, size: usize) -> Result<RowCol, ParseError> {
    let mut chars = token.chars();
    let first = chars.next().ok_or(ParseError::Empty)?;
    let letter = first.to_ascii_uppercase();
    if !letter.is_ascii_uppercase() {
        return Err(ParseError::InvalidRow(first));
    }
    let row = (letter as u8 - b'A') as usize;
    if row >= size {
        return Err(ParseError::RowOutOfRange(letter));
    }

    let digits = chars.as_str();
    if digits.is_empty() {
        return Err(ParseError::MissingColumn);
    }
    if !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ParseError::InvalidColumn(digits.to_owned()));
    }
    // overlong digit strings are out of range anyway
    let number: usize = digits
        .parse()
        .map_err(|_| ParseError::ColumnOutOfRange(digits.to_owned()))?;
    if number == 0 || number > size {
        return Err(ParseError::ColumnOutOfRange(digits.to_owned()));
    }
    Ok(RowCol::new(row, number - 1))
}

/// Parse a placement command: exactly two whitespace-separated tokens.
pub fn parse_pair(line: &str, size: usize) -> Result<(RowCol, RowCol), ParseError> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    match tokens.as_slice() {
        [a, b] => Ok((parse(a, size)?, parse(b, size)?)),
        _ => Err(ParseError::ExpectedTwoTokens(tokens.len())),
    }
}
