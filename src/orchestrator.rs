//! Match orchestration between two move providers.

use crate::games::othello::{
    Board, Color, Coordinate, CoordinateParseError, Game, Move, MoveError, MoveReport, Score,
};
use crate::players::MoveProvider;
use derive_more::{Display, Error, From};
use tokio::sync::mpsc;
use tracing::{debug, info, instrument, warn};

/// Why provider input was refused. Always recoverable: the same color is asked again.
#[derive(Debug, Clone, PartialEq, Eq, Display, From)]
pub enum RejectedMove {
    /// The text was not a coordinate.
    #[display("{_0}")]
    Parse(CoordinateParseError),
    /// The coordinate was not a legal move.
    #[display("{_0}")]
    Illegal(MoveError),
}

impl std::error::Error for RejectedMove {}

/// A move provider failed. Fatal to the match.
#[derive(Debug, Clone, Display, Error)]
#[display("Move provider {} failed: {} at {}:{}", provider, message, file, line)]
pub struct MoveProviderFailure {
    /// Name of the failing provider.
    pub provider: String,
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl MoveProviderFailure {
    /// Creates a new provider failure.
    #[track_caller]
    pub fn new(provider: impl Into<String>, message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            provider: provider.into(),
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}

/// Messages sent from the orchestrator to observers.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum MatchEvent {
    /// Provider input was refused; the same color will be asked again.
    #[display("{color} answered {input:?}: {reason}")]
    MoveRejected {
        /// Color that was asked.
        color: Color,
        /// Text as received from the provider.
        input: String,
        /// Human-readable reason.
        reason: String,
    },
    /// A move was applied.
    #[display("{mv} flipped {flipped}\n{board}")]
    MoveMade {
        /// The move.
        mv: Move,
        /// Number of pieces flipped.
        flipped: usize,
        /// Board after the move.
        board: Board,
    },
    /// Neither color can move.
    #[display("{_0}")]
    GameOver(Score),
}

/// Runs a match between two providers.
pub struct Orchestrator {
    game: Game,
    black: Box<dyn MoveProvider>,
    white: Box<dyn MoveProvider>,
    event_tx: Option<mpsc::UnboundedSender<MatchEvent>>,
}

impl Orchestrator {
    /// Creates an orchestrator at the starting position.
    pub fn new(black: Box<dyn MoveProvider>, white: Box<dyn MoveProvider>) -> Self {
        Self::from_game(Game::new(), black, white)
    }

    /// Creates an orchestrator that continues an existing game.
    pub fn from_game(game: Game, black: Box<dyn MoveProvider>, white: Box<dyn MoveProvider>) -> Self {
        Self {
            game,
            black,
            white,
            event_tx: None,
        }
    }

    /// Sends match events to `event_tx`.
    pub fn with_events(mut self, event_tx: mpsc::UnboundedSender<MatchEvent>) -> Self {
        self.event_tx = Some(event_tx);
        self
    }

    /// Returns the game.
    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Consumes the orchestrator, closing the event channel.
    pub fn into_game(self) -> Game {
        self.game
    }

    /// Runs the match to completion and returns the final score.
    ///
    /// # Errors
    ///
    /// Returns `MoveProviderFailure` as soon as a provider fails; nothing is retried.
    #[instrument(skip(self))]
    pub async fn run(&mut self) -> Result<Score, MoveProviderFailure> {
        info!(black = %self.black.name(), white = %self.white.name(), "Starting match");

        while let Some(color) = self.game.to_move() {
            let provider = match color {
                Color::Black => &mut self.black,
                Color::White => &mut self.white,
            };

            debug!(player = %provider.name(), %color, "Waiting for move");
            let input = provider
                .request_move(self.game.board(), color)
                .await
                .map_err(|e| MoveProviderFailure::new(provider.name(), format!("{:#}", e)))?;

            match Self::play_input(&mut self.game, &input) {
                Ok(report) => {
                    info!(mv = %report.mv(), flipped = report.flipped().len(), "Move made");
                    Self::emit(
                        &self.event_tx,
                        MatchEvent::MoveMade {
                            mv: *report.mv(),
                            flipped: report.flipped().len(),
                            board: self.game.board().clone(),
                        },
                    );
                }
                Err(reason) => {
                    warn!(player = %provider.name(), input = %input, %reason, "Invalid move");
                    provider.rejected(&input, &reason);
                    Self::emit(
                        &self.event_tx,
                        MatchEvent::MoveRejected {
                            color,
                            input,
                            reason: reason.to_string(),
                        },
                    );
                }
            }
        }

        let score = self.game.score();
        info!(black = score.black, white = score.white, outcome = ?score.outcome, "Game over");
        Self::emit(&self.event_tx, MatchEvent::GameOver(score));
        Ok(score)
    }

    /// Parses provider text and plays it for the color to move.
    fn play_input(game: &mut Game, input: &str) -> Result<MoveReport, RejectedMove> {
        let coordinate: Coordinate = normalize_input(input).parse()?;
        Ok(game.play(coordinate)?)
    }

    fn emit(event_tx: &Option<mpsc::UnboundedSender<MatchEvent>>, event: MatchEvent) {
        if let Some(tx) = event_tx
            && tx.send(event).is_err()
        {
            debug!("Event receiver dropped");
        }
    }
}

/// Trims surrounding whitespace and lowercases the column letter.
pub fn normalize_input(input: &str) -> String {
    input.trim().to_ascii_lowercase()
}
