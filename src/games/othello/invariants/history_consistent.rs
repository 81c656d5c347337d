//! History consistency: replaying moves reproduces the board.

use super::super::{Game, rules};
use super::Invariant;

/// Invariant: applying the history to the starting board yields the current board.
pub struct HistoryConsistentInvariant;

impl Invariant<Game> for HistoryConsistentInvariant {
    fn holds(game: &Game) -> bool {
        let mut board = game.initial().clone();
        for mv in game.history() {
            if rules::apply_move(&mut board, mv.coordinate, mv.color).is_err() {
                return false;
            }
        }
        board == *game.board()
    }

    fn description() -> &'static str {
        "History replays to the current board"
    }
}
