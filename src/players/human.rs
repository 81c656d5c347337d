//! Human player reading moves from a line-oriented console.

use super::MoveProvider;
use crate::games::othello::{Board, Color};
use crate::orchestrator::RejectedMove;
use anyhow::{Context, Result};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt, BufReader, Lines, Stdin, Stdout};
use tracing::{debug, instrument};

/// Human player: prints the board, prompts, and reads one line per move.
pub struct HumanPlayer<R, W> {
    name: String,
    lines: Lines<R>,
    output: W,
    pending_rejection: Option<String>,
}

impl HumanPlayer<BufReader<Stdin>, Stdout> {
    /// Creates a human player on the process's stdin and stdout.
    pub fn stdio(name: impl Into<String>) -> Self {
        Self::new(name, BufReader::new(tokio::io::stdin()), tokio::io::stdout())
    }
}

impl<R, W> HumanPlayer<R, W>
where
    R: AsyncBufRead + Unpin + Send,
    W: AsyncWrite + Unpin + Send,
{
    /// Creates a human player over arbitrary input and output streams.
    pub fn new(name: impl Into<String>, input: R, output: W) -> Self {
        Self {
            name: name.into(),
            lines: input.lines(),
            output,
            pending_rejection: None,
        }
    }

    /// Consumes the player, returning the output stream.
    pub fn into_output(self) -> W {
        self.output
    }
}

#[async_trait::async_trait]
impl<R, W> MoveProvider for HumanPlayer<R, W>
where
    R: AsyncBufRead + Unpin + Send,
    W: AsyncWrite + Unpin + Send,
{
    #[instrument(skip(self, board), fields(player = %self.name))]
    async fn request_move(&mut self, board: &Board, color: Color) -> Result<String> {
        let mut prompt = String::new();
        if let Some(reason) = self.pending_rejection.take() {
            prompt.push_str(&format!("Invalid move: {}\n\n", reason));
        }
        prompt.push_str(&board.to_string());
        prompt.push_str(&format!("Enter move for {}: ", color));

        self.output
            .write_all(prompt.as_bytes())
            .await
            .context("Failed to write prompt")?;
        self.output.flush().await.context("Failed to flush prompt")?;

        debug!("Waiting for human input");
        match self.lines.next_line().await.context("Failed to read move")? {
            Some(line) => Ok(line),
            None => anyhow::bail!("Input closed"),
        }
    }

    fn rejected(&mut self, _input: &str, reason: &RejectedMove) {
        self.pending_rejection = Some(reason.to_string());
    }

    fn name(&self) -> &str {
        &self.name
    }
}
