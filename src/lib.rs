//! Strictly Othello library - a type-safe Othello rules engine
//!
//! The engine decides legality, computes flips, applies moves atomically,
//! skips a color that cannot move, and scores the final position. Players
//! are pluggable move providers, so a console human, a local bot, and an
//! LLM agent all drive the same match loop.
//!
//! # Architecture
//!
//! - **Games**: Othello board, flip rules, turn state machine, scoring
//! - **Players**: `MoveProvider` implementations (human, greedy, LLM agent)
//! - **Orchestrator**: match loop with recoverable and fatal error handling
//! - **LLM client**: OpenAI and Anthropic chat endpoints
//!
//! # Example
//!
//! ```
//! use strictly_othello::{Color, Coordinate, Game, TurnState};
//!
//! let mut game = Game::new();
//! let report = game.play("d3".parse::<Coordinate>()?)?;
//! assert_eq!(report.flipped().len(), 1);
//! assert_eq!(game.state(), TurnState::AwaitingMove(Color::White));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod agent_config;
mod games;
mod llm_client;
mod orchestrator;
mod players;

// Crate-level exports - Agent configuration
pub use agent_config::{AgentConfig, ConfigError};

// Crate-level exports - LLM client
pub use llm_client::{LlmClient, LlmConfig, LlmError, LlmProvider};

// Crate-level exports - Match orchestration
pub use orchestrator::{MatchEvent, MoveProviderFailure, Orchestrator, RejectedMove, normalize_input};

// Crate-level exports - Players
pub use players::{
    AgentPlayer, GreedyPlayer, HumanPlayer, MoveProvider, extract_coordinate, system_prompt,
    user_prompt,
};

// Crate-level exports - Game types
pub use games::othello::{
    Board, BoardParseError, Cell, Color, Coordinate, CoordinateParseError, Game, Move, MoveError,
    MoveReport, Outcome, SIZE, Score, TurnState,
};

// Crate-level exports - Rules and invariants
pub use games::othello::{invariants, rules};
