//! Board coordinates and their two-character notation.

use super::board::SIZE;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// A (row, col) pair. Row 0 is the top, col 0 the leftmost column.
///
/// Coordinates are not validated on construction; consumers range-check
/// with [`Coordinate::is_in_bounds`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Coordinate {
    /// Row index.
    pub row: usize,
    /// Column index.
    pub col: usize,
}

impl Coordinate {
    /// Creates a coordinate.
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Checks that both indices fall on the board.
    pub fn is_in_bounds(self) -> bool {
        self.row < SIZE && self.col < SIZE
    }

    /// Steps once in the given direction, or `None` if the step leaves the board.
    pub fn offset(self, d_row: isize, d_col: isize) -> Option<Self> {
        let row = self.row.checked_add_signed(d_row)?;
        let col = self.col.checked_add_signed(d_col)?;
        let next = Self::new(row, col);
        next.is_in_bounds().then_some(next)
    }

    /// Every coordinate on the board in row-major order.
    pub fn all() -> impl Iterator<Item = Coordinate> {
        (0..SIZE).flat_map(|row| (0..SIZE).map(move |col| Coordinate::new(row, col)))
    }
}

impl std::fmt::Display for Coordinate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if !self.is_in_bounds() {
            return write!(f, "({}, {})", self.row, self.col);
        }
        let col = char::from(b'a' + self.col as u8);
        let row = char::from(b'1' + self.row as u8);
        write!(f, "{}{}", col, row)
    }
}

/// Malformed move text.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum CoordinateParseError {
    /// Input was not exactly two characters.
    #[display("Input must be length 2 (got {})", _0)]
    WrongLength(usize),

    /// Row digit outside '1'..='8'.
    #[display("Row out of bounds: {:?}", _0)]
    RowOutOfRange(char),

    /// Column letter outside 'a'..='h'.
    #[display("Column out of bounds: {:?}", _0)]
    ColumnOutOfRange(char),
}

impl std::error::Error for CoordinateParseError {}

impl FromStr for Coordinate {
    type Err = CoordinateParseError;

    /// Parses notation like `"d3"`: a column letter then a row digit.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let chars: Vec<char> = s.chars().collect();
        let [col_char, row_char] = chars.as_slice() else {
            return Err(CoordinateParseError::WrongLength(chars.len()));
        };

        let row = index_in_range(*row_char, '1')
            .ok_or(CoordinateParseError::RowOutOfRange(*row_char))?;
        let col = index_in_range(*col_char, 'a')
            .ok_or(CoordinateParseError::ColumnOutOfRange(*col_char))?;

        Ok(Coordinate::new(row, col))
    }
}

fn index_in_range(c: char, base: char) -> Option<usize> {
    let index = (c as u32).checked_sub(base as u32)? as usize;
    (index < SIZE).then_some(index)
}
