//! Othello rules engine.

mod action;
mod board;
mod coordinate;
mod game;
pub mod invariants;
pub mod rules;
mod types;

pub use action::{Move, MoveError};
pub use board::{Board, BoardParseError, SIZE};
pub use coordinate::{Coordinate, CoordinateParseError};
pub use game::{Game, MoveReport, TurnState};
pub use rules::{Outcome, Score};
pub use types::{Cell, Color};
