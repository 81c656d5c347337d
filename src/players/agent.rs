//! AI agent player that asks an LLM for moves.

use super::MoveProvider;
use crate::games::othello::{Board, Color};
use crate::llm_client::LlmClient;
use crate::orchestrator::RejectedMove;
use anyhow::Result;
use tracing::{debug, info, instrument};

/// Agent player backed by an LLM completion API.
pub struct AgentPlayer {
    name: String,
    client: LlmClient,
    last_rejection: Option<String>,
}

impl AgentPlayer {
    /// Creates a new agent player.
    pub fn new(name: impl Into<String>, client: LlmClient) -> Self {
        let name = name.into();
        info!(agent = %name, "Creating agent player");
        Self {
            name,
            client,
            last_rejection: None,
        }
    }
}

#[async_trait::async_trait]
impl MoveProvider for AgentPlayer {
    #[instrument(skip(self, board), fields(agent = %self.name))]
    async fn request_move(&mut self, board: &Board, color: Color) -> Result<String> {
        let prompt = user_prompt(board, color, self.last_rejection.take().as_deref());

        info!("Sending prompt to agent");
        let response = self.client.generate(&system_prompt(), &prompt).await?;
        let coordinate = extract_coordinate(&response);

        debug!(response = %response, coordinate = %coordinate, "Agent responded");
        Ok(coordinate)
    }

    fn rejected(&mut self, input: &str, reason: &RejectedMove) {
        self.last_rejection = Some(format!("{:?} was rejected: {}", input, reason));
    }

    fn name(&self) -> &str {
        &self.name
    }
}

/// Rules of the game as given to the model.
pub fn system_prompt() -> String {
    let start = Board::new();
    format!(
        "You are playing Othello (also called Reversi), a two-player game between black and white.\n\
         \n\
         The board is an 8x8 grid. Columns are lettered a-h from left to right and rows are \
         numbered 1-8 from top to bottom, so a coordinate is a column letter followed by a row \
         digit (for example d3). Boards are drawn with B for a black piece, W for a white piece, \
         and a space for an empty cell. The game starts from this position:\n\
         \n\
         {start}\n\
         Black moves first and the colors alternate.\n\
         \n\
         A move places one piece of your color on an empty cell. Every straight line (horizontal, \
         vertical, or diagonal) of one or more opponent pieces that runs from the new piece to \
         another of your pieces, with no gaps, is flipped to your color. Several lines may flip \
         at once. A move that flips nothing is illegal.\n\
         \n\
         A color with no legal move is skipped. When neither color can move the game ends, and \
         the color with more pieces wins; equal counts are a tie."
    )
}

/// Builds the per-turn request.
pub fn user_prompt(board: &Board, color: Color, last_rejection: Option<&str>) -> String {
    let mut prompt = format!("The current board is:\n\n{board}\nYou are {color}.\n");
    if let Some(rejection) = last_rejection {
        prompt.push_str(&format!("Your previous answer {rejection}. Choose a different move.\n"));
    }
    prompt.push_str(
        "Choose the move that will give you the most pieces at the end of the game. \
         It must be a legal move.\n\
         Reply with only the two-character coordinate (for example f4 or g5), with no other text.",
    );
    prompt
}

/// Strips the decoration models tend to add around a bare coordinate.
pub fn extract_coordinate(response: &str) -> String {
    response
        .trim()
        .trim_matches(|c: char| matches!(c, '`' | '"' | '\'' | '.' | '*'))
        .trim()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::othello::{Coordinate, MoveError};

    #[test]
    fn test_extract_bare_coordinate() {
        assert_eq!(extract_coordinate("d3"), "d3");
        assert_eq!(extract_coordinate("  f4\n"), "f4");
        assert_eq!(extract_coordinate("`g5`."), "g5");
        assert_eq!(extract_coordinate("\"C4\""), "C4");
        assert_eq!(extract_coordinate("**e6**"), "e6");
    }

    #[test]
    fn test_extract_leaves_prose_for_parser() {
        assert_eq!(extract_coordinate("I play d3"), "I play d3");
    }

    #[test]
    fn test_system_prompt_shows_start_position() {
        let prompt = system_prompt();
        assert!(prompt.contains(&Board::new().to_string()));
        assert!(prompt.contains("Black moves first"));
    }

    #[test]
    fn test_user_prompt_includes_board_and_color() {
        let prompt = user_prompt(&Board::new(), Color::White, None);
        assert!(prompt.contains("4       W B      "));
        assert!(prompt.contains("You are white."));
        assert!(!prompt.contains("previous answer"));
    }

    #[test]
    fn test_user_prompt_mentions_rejection() {
        let reason = RejectedMove::from(MoveError::Occupied(Coordinate::new(3, 3)));
        let rejection = format!("{:?} was rejected: {}", "d4", reason);
        let prompt = user_prompt(&Board::new(), Color::Black, Some(&rejection));
        assert!(prompt.contains("\"d4\" was rejected: Coordinate d4 is already taken"));
    }
}
