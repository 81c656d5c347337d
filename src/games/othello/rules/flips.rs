//! Flip detection: which opponent pieces a placement bookends.

use super::super::action::MoveError;
use super::super::{Board, Cell, Color, Coordinate};
use std::collections::BTreeSet;
use tracing::{debug, instrument};

/// The eight (row, col) steps of the Moore neighborhood.
pub const DIRECTIONS: [(isize, isize); 8] = [
    (0, 1),
    (0, -1),
    (1, 0),
    (-1, 0),
    (1, 1),
    (-1, -1),
    (-1, 1),
    (1, -1),
];

/// Walks from `origin` in one direction and returns the opponent pieces
/// bookended by `color`.
///
/// Returns an empty line if the walk runs off the board or reaches an empty
/// cell before finding a piece of `color`.
pub fn scan_line(
    board: &Board,
    origin: Coordinate,
    (d_row, d_col): (isize, isize),
    color: Color,
) -> Vec<Coordinate> {
    let opponent = Cell::Occupied(color.opponent());
    let mut line = Vec::new();
    let mut cursor = origin.offset(d_row, d_col);

    while let Some(coordinate) = cursor {
        match board.get(coordinate) {
            Some(cell) if cell == opponent => line.push(coordinate),
            Some(Cell::Occupied(c)) if c == color => return line,
            _ => return Vec::new(),
        }
        cursor = coordinate.offset(d_row, d_col);
    }

    Vec::new()
}

/// Computes every opponent piece that placing `color` at `coordinate` would flip.
///
/// Empty when the cell is occupied, out of bounds, or bookends nothing.
#[instrument(skip(board))]
pub fn compute_flips(board: &Board, coordinate: Coordinate, color: Color) -> BTreeSet<Coordinate> {
    if !board.is_empty(coordinate) {
        return BTreeSet::new();
    }

    let flips: BTreeSet<Coordinate> = DIRECTIONS
        .iter()
        .flat_map(|&direction| scan_line(board, coordinate, direction, color))
        .collect();

    debug!(flipped = flips.len(), "Computed flips");
    flips
}

/// Checks whether a placement is legal (empty cell, at least one flip).
pub fn is_legal(board: &Board, coordinate: Coordinate, color: Color) -> bool {
    !compute_flips(board, coordinate, color).is_empty()
}

/// Returns every legal placement for `color`, row-major.
#[instrument(skip(board))]
pub fn legal_moves(board: &Board, color: Color) -> Vec<Coordinate> {
    Coordinate::all()
        .filter(|&coordinate| is_legal(board, coordinate, color))
        .collect()
}

/// Checks whether `color` has any legal placement.
#[instrument(skip(board))]
pub fn has_any_legal_move(board: &Board, color: Color) -> bool {
    Coordinate::all().any(|coordinate| is_legal(board, coordinate, color))
}

/// Places `color` at `coordinate` and flips every bookended piece.
///
/// Legality is recomputed here. On error the board is untouched.
///
/// # Errors
///
/// - `MoveError::OutOfBounds` if the coordinate is off the board.
/// - `MoveError::Occupied` if the cell already holds a piece.
/// - `MoveError::NoFlips` if the placement bookends nothing.
#[instrument(skip(board))]
pub fn apply_move(
    board: &mut Board,
    coordinate: Coordinate,
    color: Color,
) -> Result<BTreeSet<Coordinate>, MoveError> {
    match board.get(coordinate) {
        None => return Err(MoveError::OutOfBounds(coordinate)),
        Some(Cell::Occupied(_)) => return Err(MoveError::Occupied(coordinate)),
        Some(Cell::Empty) => {}
    }

    let flips = compute_flips(board, coordinate, color);
    if flips.is_empty() {
        return Err(MoveError::NoFlips(coordinate));
    }

    let flipped: Vec<Coordinate> = flips.iter().copied().collect();
    board.place(coordinate, color, &flipped);
    Ok(flips)
}
