//! Final tallies and outcome.

use super::super::{Board, Color};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Result of comparing piece counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// Black holds more pieces.
    BlackWins,
    /// White holds more pieces.
    WhiteWins,
    /// Equal counts.
    Tie,
}

impl Outcome {
    /// Returns the winning color, if any.
    pub fn winner(self) -> Option<Color> {
        match self {
            Outcome::BlackWins => Some(Color::Black),
            Outcome::WhiteWins => Some(Color::White),
            Outcome::Tie => None,
        }
    }
}

/// Piece counts and the outcome they imply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Score {
    /// Black pieces on the board.
    pub black: usize,
    /// White pieces on the board.
    pub white: usize,
    /// Outcome by strict comparison.
    pub outcome: Outcome,
}

/// Tallies the board.
#[instrument(skip(board))]
pub fn evaluate(board: &Board) -> Score {
    let black = board.count(Color::Black);
    let white = board.count(Color::White);
    let outcome = match black.cmp(&white) {
        std::cmp::Ordering::Greater => Outcome::BlackWins,
        std::cmp::Ordering::Less => Outcome::WhiteWins,
        std::cmp::Ordering::Equal => Outcome::Tie,
    };
    Score {
        black,
        white,
        outcome,
    }
}

impl std::fmt::Display for Score {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Black score: {}", self.black)?;
        writeln!(f, "White score: {}", self.white)?;
        match self.outcome.winner() {
            Some(color) => write!(f, "The winner is {}", color),
            None => write!(f, "ITS A TIE!"),
        }
    }
}
