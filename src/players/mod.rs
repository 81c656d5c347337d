//! Move providers: anything that can answer "what does this color play?".

mod agent;
mod greedy;
mod human;

pub use agent::{AgentPlayer, extract_coordinate, system_prompt, user_prompt};
pub use greedy::GreedyPlayer;
pub use human::HumanPlayer;

use crate::games::othello::{Board, Color};
use crate::orchestrator::RejectedMove;
use anyhow::Result;

/// Source of moves for one side of a match.
///
/// Human and automated players implement the same capability; the
/// orchestrator never distinguishes between them.
#[async_trait::async_trait]
pub trait MoveProvider: Send {
    /// Asks for the next move as two-character notation (e.g. `"d3"`).
    ///
    /// May wait indefinitely. Errors are fatal to the match.
    async fn request_move(&mut self, board: &Board, color: Color) -> Result<String>;

    /// Informs the provider that its last answer was refused.
    fn rejected(&mut self, _input: &str, _reason: &RejectedMove) {}

    /// Returns the player's display name.
    fn name(&self) -> &str;
}
