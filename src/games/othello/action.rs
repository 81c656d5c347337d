//! First-class action types for Othello.
//!
//! Moves are domain events: a color placing a piece at a coordinate.
//! Passes are never represented as moves.

use super::{Color, Coordinate};
use serde::{Deserialize, Serialize};

/// A placement by one color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// The color placing the piece.
    pub color: Color,
    /// Where the piece is placed.
    pub coordinate: Coordinate,
}

impl Move {
    /// Creates a new move.
    pub fn new(color: Color, coordinate: Coordinate) -> Self {
        Self { color, coordinate }
    }

    /// Returns the moving color.
    pub fn color(&self) -> Color {
        self.color
    }

    /// Returns the target coordinate.
    pub fn coordinate(&self) -> Coordinate {
        self.coordinate
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.color, self.coordinate)
    }
}

/// Why a move was refused. The game is unchanged whenever this is returned.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The coordinate is off the board.
    #[display("Coordinate {} is off the board", _0)]
    OutOfBounds(Coordinate),

    /// The target cell already holds a piece.
    #[display("Coordinate {} is already taken", _0)]
    Occupied(Coordinate),

    /// The placement would not flip any piece.
    #[display("No pieces would be turned by playing {}", _0)]
    NoFlips(Coordinate),

    /// It's not this color's turn.
    #[display("It's not {}'s turn", _0)]
    WrongColor(Color),

    /// The game is already over.
    #[display("Game is already over")]
    GameOver,
}

impl std::error::Error for MoveError {}
