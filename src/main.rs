//! Strictly Othello - command-line front end.

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command, PlayerKind};
use std::path::{Path, PathBuf};
use strictly_othello::{
    AgentConfig, AgentPlayer, Color, Coordinate, Game, GreedyPlayer, HumanPlayer, LlmClient,
    MatchEvent, MoveProvider, Orchestrator, normalize_input,
};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{info, instrument};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    initialize_tracing();

    match cli.command {
        Command::Play {
            black,
            white,
            agent_config,
        } => run_play(black, white, agent_config).await,
        Command::Replay { moves } => run_replay(&moves),
    }
}

/// Logs go to stderr so they never interleave with the board on stdout.
fn initialize_tracing() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

/// Play a match between the chosen providers.
#[instrument(skip(agent_config))]
async fn run_play(black: PlayerKind, white: PlayerKind, agent_config: PathBuf) -> Result<()> {
    let spectating = black != PlayerKind::Human && white != PlayerKind::Human;
    let black = build_provider(black, Color::Black, &agent_config)?;
    let white = build_provider(white, Color::White, &agent_config)?;

    let mut orchestrator = Orchestrator::new(black, white);

    // A human prompt already shows the board, so moves are only narrated between bots.
    let display = if spectating {
        let (event_tx, event_rx) = mpsc::unbounded_channel();
        orchestrator = orchestrator.with_events(event_tx);
        Some(spawn_display(event_rx))
    } else {
        None
    };

    let score = orchestrator.run().await?;
    let game = orchestrator.into_game();
    if let Some(display) = display {
        let rejected = display.await.context("Display task failed")?;
        info!(rejected, "Display finished");
    }
    info!(moves = game.history().len(), "Match finished");

    println!("Game is over no more possible moves.");
    println!("{}", game.board());
    println!("{}", score);
    Ok(())
}

/// Prints moves and rejections as they happen. Returns the rejection count.
fn spawn_display(mut event_rx: mpsc::UnboundedReceiver<MatchEvent>) -> JoinHandle<usize> {
    tokio::spawn(async move {
        let mut rejected = 0;
        while let Some(event) = event_rx.recv().await {
            match event {
                MatchEvent::MoveRejected { .. } => {
                    rejected += 1;
                    println!("Invalid move: {}\n", event);
                }
                MatchEvent::MoveMade { .. } => println!("{}", event),
                MatchEvent::GameOver(_) => {}
            }
        }
        rejected
    })
}

#[instrument(skip(agent_config))]
fn build_provider(
    kind: PlayerKind,
    color: Color,
    agent_config: &Path,
) -> Result<Box<dyn MoveProvider>> {
    let provider: Box<dyn MoveProvider> = match kind {
        PlayerKind::Human => Box::new(HumanPlayer::stdio(format!("Human ({})", color))),
        PlayerKind::Greedy => Box::new(GreedyPlayer::new(format!("Greedy ({})", color))),
        PlayerKind::Agent => {
            let config = AgentConfig::load_or_default(agent_config)?;
            let client = LlmClient::new(config.create_llm_config()?);
            Box::new(AgentPlayer::new(format!("{} ({})", config.name(), color), client))
        }
    };
    info!(player = %provider.name(), %kind, "Player ready");
    Ok(provider)
}

/// Replay moves from the starting position.
fn run_replay(moves: &[String]) -> Result<()> {
    let mut game = Game::new();
    for (index, text) in moves.iter().enumerate() {
        let coordinate: Coordinate = normalize_input(text)
            .parse()
            .with_context(|| format!("Move {} ({:?})", index + 1, text))?;
        game.play(coordinate)
            .with_context(|| format!("Move {} ({:?})", index + 1, text))?;
    }

    println!("{}", game.board());
    match game.to_move() {
        Some(color) => println!("{} to move", color),
        None => println!("{}", game.score()),
    }
    Ok(())
}
