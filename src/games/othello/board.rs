//! The 8x8 Othello board.

use super::coordinate::Coordinate;
use super::types::{Cell, Color};
use std::str::FromStr;

/// Board edge length.
pub const SIZE: usize = 8;

/// Grid of cells indexed `[row][col]`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [[Cell; SIZE]; SIZE],
}

impl Board {
    /// Creates the starting position: d4/e5 white, e4/d5 black.
    pub fn new() -> Self {
        let mut cells = [[Cell::Empty; SIZE]; SIZE];
        cells[3][3] = Cell::Occupied(Color::White);
        cells[3][4] = Cell::Occupied(Color::Black);
        cells[4][3] = Cell::Occupied(Color::Black);
        cells[4][4] = Cell::Occupied(Color::White);
        Self { cells }
    }

    /// Creates a board with no pieces.
    pub fn empty() -> Self {
        Self {
            cells: [[Cell::Empty; SIZE]; SIZE],
        }
    }

    /// Creates a board from explicit cell contents.
    pub fn from_cells(cells: [[Cell; SIZE]; SIZE]) -> Self {
        Self { cells }
    }

    /// Gets the cell at the coordinate, or `None` when out of bounds.
    pub fn get(&self, coordinate: Coordinate) -> Option<Cell> {
        self.cells
            .get(coordinate.row)
            .and_then(|row| row.get(coordinate.col))
            .copied()
    }

    /// Checks if an in-bounds cell is empty.
    pub fn is_empty(&self, coordinate: Coordinate) -> bool {
        matches!(self.get(coordinate), Some(Cell::Empty))
    }

    /// Returns all rows.
    pub fn cells(&self) -> &[[Cell; SIZE]; SIZE] {
        &self.cells
    }

    /// Counts pieces of one color.
    pub fn count(&self, color: Color) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|cell| **cell == Cell::Occupied(color))
            .count()
    }

    /// Counts occupied cells of either color.
    pub fn occupied(&self) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|cell| **cell != Cell::Empty)
            .count()
    }

    /// Places a piece and turns every flipped cell to `color`.
    ///
    /// Callers must have validated the move; see `rules::apply_move`.
    pub(crate) fn place(&mut self, coordinate: Coordinate, color: Color, flips: &[Coordinate]) {
        for flip in flips {
            self.cells[flip.row][flip.col] = Cell::Occupied(color);
        }
        self.cells[coordinate.row][coordinate.col] = Cell::Occupied(color);
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for Board {
    /// Column letters across the top, row numbers down the left,
    /// `B`/`W` for pieces and a space for empty cells.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "  ")?;
        for col in 0..SIZE {
            write!(f, "{} ", char::from(b'a' + col as u8))?;
        }
        writeln!(f)?;

        for (row, cells) in self.cells.iter().enumerate() {
            write!(f, "{}", char::from(b'1' + row as u8))?;
            for cell in cells {
                write!(f, " {}", cell.symbol())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Failure to read a board diagram.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum BoardParseError {
    /// A line that is neither the column header nor a numbered row.
    #[display("Unrecognized board line: {:?}", _0)]
    InvalidLine(String),

    /// A cell symbol other than `B`, `W`, or space.
    #[display("Invalid cell {:?} at row {}, col {}", symbol, row, col)]
    InvalidCell {
        /// Row index.
        row: usize,
        /// Column index.
        col: usize,
        /// Offending character.
        symbol: char,
    },
}

impl std::error::Error for BoardParseError {}

impl FromStr for Board {
    type Err = BoardParseError;

    /// Reads the rendered diagram format. Rows may be omitted (they are empty),
    /// trailing empty cells may be trimmed, and the header line is optional.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut board = Board::empty();

        for line in s.lines() {
            if line.trim().is_empty() || is_header(line) {
                continue;
            }

            let invalid = || BoardParseError::InvalidLine(line.to_string());
            let chars: Vec<char> = line.chars().collect();
            let row = match chars.as_slice() {
                [digit, ' ', ..] | [digit] => digit
                    .to_digit(10)
                    .filter(|d| (1..=SIZE as u32).contains(d))
                    .map(|d| d as usize - 1)
                    .ok_or_else(invalid)?,
                _ => return Err(invalid()),
            };

            // Cells sit at even offsets from 2; everything between and after is blank.
            let cells_end = 2 * SIZE + 1;
            for (index, &symbol) in chars.iter().enumerate().skip(2) {
                let is_cell = index < cells_end && index % 2 == 0;
                if !is_cell && symbol != ' ' {
                    return Err(invalid());
                }
            }

            for col in 0..SIZE {
                let symbol = chars.get(2 + 2 * col).copied().unwrap_or(' ');
                board.cells[row][col] = match symbol {
                    ' ' => Cell::Empty,
                    other => Color::from_abbreviation(other)
                        .map(Cell::Occupied)
                        .ok_or(BoardParseError::InvalidCell { row, col, symbol })?,
                };
            }
        }

        Ok(board)
    }
}

/// Matches the column-letter line, with or without its trailing space.
fn is_header(line: &str) -> bool {
    let letters = (0..SIZE).flat_map(|col| [b' ', b'a' + col as u8]).skip(1);
    line.trim().bytes().eq(letters)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_position() {
        let board = Board::new();
        assert_eq!(board.occupied(), 4);
        assert_eq!(board.count(Color::Black), 2);
        assert_eq!(board.count(Color::White), 2);
        assert_eq!(board.get(Coordinate::new(3, 3)), Some(Cell::Occupied(Color::White)));
        assert_eq!(board.get(Coordinate::new(3, 4)), Some(Cell::Occupied(Color::Black)));
        assert_eq!(board.get(Coordinate::new(8, 0)), None);
    }

    #[test]
    fn test_render_initial_position() {
        let rendered = Board::new().to_string();
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines.len(), 9);
        assert_eq!(lines[0], "  a b c d e f g h ");
        assert_eq!(lines[1], "1                ");
        assert_eq!(lines[4], "4       W B      ");
        assert_eq!(lines[5], "5       B W      ");
    }

    #[test]
    fn test_parse_rendered_board() {
        let board = Board::new();
        let parsed: Board = board.to_string().parse().unwrap();
        assert_eq!(parsed, board);
    }

    #[test]
    fn test_parse_rejects_bad_symbol() {
        let err = "4       X B".parse::<Board>().unwrap_err();
        assert_eq!(
            err,
            BoardParseError::InvalidCell {
                row: 3,
                col: 3,
                symbol: 'X'
            }
        );
        assert!(matches!(
            "junk".parse::<Board>(),
            Err(BoardParseError::InvalidLine(_))
        ));
    }

    #[test]
    fn test_parse_rejects_two_digit_row() {
        assert_eq!(
            "10 B W".parse::<Board>(),
            Err(BoardParseError::InvalidLine("10 B W".to_string()))
        );
        assert!(matches!(
            "0 B W".parse::<Board>(),
            Err(BoardParseError::InvalidLine(_))
        ));
        assert!(matches!(
            "9 B W".parse::<Board>(),
            Err(BoardParseError::InvalidLine(_))
        ));
    }

    #[test]
    fn test_parse_rejects_missing_separators() {
        assert!(matches!(
            "1XBxW".parse::<Board>(),
            Err(BoardParseError::InvalidLine(_))
        ));
        assert!(matches!(
            "1 BxW".parse::<Board>(),
            Err(BoardParseError::InvalidLine(_))
        ));
    }

    #[test]
    fn test_parse_rejects_text_past_last_column() {
        assert!(matches!(
            "1 B W B W B W B W X Y".parse::<Board>(),
            Err(BoardParseError::InvalidLine(_))
        ));
        assert!(matches!(
            "1 B W B W B W B WX".parse::<Board>(),
            Err(BoardParseError::InvalidLine(_))
        ));
    }

    #[test]
    fn test_parse_accepts_trimmed_and_padded_rows() {
        let board: Board = "1 B\n2 B W B W B W B W   ".parse().unwrap();
        assert_eq!(board.get(Coordinate::new(0, 0)), Some(Cell::Occupied(Color::Black)));
        assert_eq!(board.get(Coordinate::new(0, 1)), Some(Cell::Empty));
        assert_eq!(board.count(Color::Black) + board.count(Color::White), 9);
        assert_eq!("1".parse::<Board>(), Ok(Board::empty()));
    }

    #[test]
    fn test_parse_rejects_unknown_header() {
        assert!(matches!(
            "  a b c".parse::<Board>(),
            Err(BoardParseError::InvalidLine(_))
        ));
    }
}
