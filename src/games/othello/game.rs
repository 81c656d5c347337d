//! Turn sequencing for Othello.
//!
//! [`Game`] owns the board and drives the `AwaitingMove(color) -> ... -> GameOver`
//! state machine: it alternates colors, silently skips a color with no legal
//! move, and ends the game when neither color can move.

use super::action::{Move, MoveError};
#[cfg(debug_assertions)]
use super::invariants::assert_invariants;
use super::rules::{self, Score};
use super::{Board, Color, Coordinate};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use tracing::{debug, info, instrument};

/// Where the game stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TurnState {
    /// Waiting for this color to place a piece.
    AwaitingMove(Color),
    /// Neither color can move. Terminal.
    GameOver,
}

impl TurnState {
    /// Returns the color to move, if the game is still running.
    pub fn to_move(self) -> Option<Color> {
        match self {
            TurnState::AwaitingMove(color) => Some(color),
            TurnState::GameOver => None,
        }
    }

    /// Checks for the terminal state.
    pub fn is_over(self) -> bool {
        self == TurnState::GameOver
    }

    /// Picks the next state, preferring `color` and falling back to its opponent.
    fn resolve(board: &Board, color: Color) -> Self {
        if rules::has_any_legal_move(board, color) {
            TurnState::AwaitingMove(color)
        } else if rules::has_any_legal_move(board, color.opponent()) {
            debug!(passed = %color, "No legal move, turn skipped");
            TurnState::AwaitingMove(color.opponent())
        } else {
            TurnState::GameOver
        }
    }
}

/// What an accepted move did.
#[derive(Debug, Clone, PartialEq, Eq, Getters)]
pub struct MoveReport {
    /// The applied move.
    mv: Move,
    /// Opponent pieces turned by the move.
    flipped: BTreeSet<Coordinate>,
    /// State after the move.
    next: TurnState,
}

/// An Othello match: board, turn state, and applied-move history.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    pub(super) initial: Board,
    pub(super) board: Board,
    pub(super) state: TurnState,
    pub(super) history: Vec<Move>,
}

impl Game {
    /// Creates a game at the starting position with Black to move.
    #[instrument]
    pub fn new() -> Self {
        Self::from_position(Board::new(), Color::Black)
    }

    /// Creates a game from an arbitrary position.
    ///
    /// If `to_move` has no legal move the turn passes to the opponent, and if
    /// neither color can move the game starts finished.
    #[instrument(skip(board))]
    pub fn from_position(board: Board, to_move: Color) -> Self {
        let state = TurnState::resolve(&board, to_move);
        Self {
            initial: board.clone(),
            board,
            state,
            history: Vec::new(),
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the position the game started from.
    pub fn initial(&self) -> &Board {
        &self.initial
    }

    /// Returns the current state.
    pub fn state(&self) -> TurnState {
        self.state
    }

    /// Returns the color to move, or `None` once the game is over.
    pub fn to_move(&self) -> Option<Color> {
        self.state.to_move()
    }

    /// Checks whether the game is over.
    pub fn is_over(&self) -> bool {
        self.state.is_over()
    }

    /// Returns the applied moves in order. Passes do not appear.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Returns legal placements for the color to move.
    pub fn legal_moves(&self) -> Vec<Coordinate> {
        self.to_move()
            .map(|color| rules::legal_moves(&self.board, color))
            .unwrap_or_default()
    }

    /// Scores the current board.
    pub fn score(&self) -> Score {
        rules::evaluate(&self.board)
    }

    /// Applies a move and advances the turn.
    ///
    /// # Errors
    ///
    /// - `MoveError::GameOver` once the game has ended.
    /// - `MoveError::WrongColor` if `mv.color` is not the color to move.
    /// - `MoveError::OutOfBounds`, `Occupied`, or `NoFlips` for illegal placements.
    ///
    /// The game is unchanged on error.
    #[instrument(skip(self), fields(mv = %mv))]
    pub fn make_move(&mut self, mv: Move) -> Result<MoveReport, MoveError> {
        let to_move = self.state.to_move().ok_or(MoveError::GameOver)?;
        if mv.color != to_move {
            return Err(MoveError::WrongColor(mv.color));
        }

        let flipped = rules::apply_move(&mut self.board, mv.coordinate, mv.color)?;
        self.history.push(mv);
        self.state = TurnState::resolve(&self.board, mv.color.opponent());

        #[cfg(debug_assertions)]
        assert_invariants(self);

        info!(flipped = flipped.len(), next = ?self.state, "Move applied");
        Ok(MoveReport {
            mv,
            flipped,
            next: self.state,
        })
    }

    /// Plays `coordinate` for the color to move.
    pub fn play(&mut self, coordinate: Coordinate) -> Result<MoveReport, MoveError> {
        let color = self.to_move().ok_or(MoveError::GameOver)?;
        self.make_move(Move::new(color, coordinate))
    }

    /// Replays moves from the starting position.
    #[instrument]
    pub fn replay(moves: &[Move]) -> Result<Self, MoveError> {
        let mut game = Self::new();
        for mv in moves {
            game.make_move(*mv)?;
        }
        Ok(game)
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}
