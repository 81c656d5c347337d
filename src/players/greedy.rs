//! Local automated player (not using an LLM).

use super::MoveProvider;
use crate::games::othello::{Board, Color, rules};
use anyhow::Result;
use tracing::debug;

/// Picks the move that flips the most pieces, first in row-major order on ties.
pub struct GreedyPlayer {
    name: String,
}

impl GreedyPlayer {
    /// Creates a new greedy player.
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    /// Chooses a move on `board` for `color`, if any is legal.
    pub fn choose(board: &Board, color: Color) -> Option<String> {
        rules::legal_moves(board, color)
            .into_iter()
            .map(|coordinate| (rules::compute_flips(board, coordinate, color).len(), coordinate))
            .fold(None, |best, (flips, coordinate)| match best {
                Some((best_flips, _)) if best_flips >= flips => best,
                _ => Some((flips, coordinate)),
            })
            .map(|(_, coordinate)| coordinate.to_string())
    }
}

#[async_trait::async_trait]
impl MoveProvider for GreedyPlayer {
    async fn request_move(&mut self, board: &Board, color: Color) -> Result<String> {
        let choice = Self::choose(board, color)
            .ok_or_else(|| anyhow::anyhow!("No legal moves available for {}", color))?;
        debug!(player = %self.name, choice = %choice, "Greedy player chose move");
        Ok(choice)
    }

    fn name(&self) -> &str {
        &self.name
    }
}
