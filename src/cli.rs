//! Command-line interface for strictly_othello.

use clap::{Parser, Subcommand, ValueEnum};

/// Strictly Othello - Othello rules engine with pluggable players
#[derive(Parser, Debug)]
#[command(name = "strictly_othello")]
#[command(about = "Play Othello against humans, a greedy bot, or an LLM agent", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Who supplies moves for one color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, strum::Display)]
#[strum(serialize_all = "lowercase")]
pub enum PlayerKind {
    /// Moves typed at the console
    Human,
    /// Local bot that maximizes flips
    Greedy,
    /// LLM agent (see --agent-config)
    Agent,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play a match
    Play {
        /// Player for black (moves first)
        #[arg(long, value_enum, default_value_t = PlayerKind::Human)]
        black: PlayerKind,

        /// Player for white
        #[arg(long, value_enum, default_value_t = PlayerKind::Greedy)]
        white: PlayerKind,

        /// Path to agent configuration file (defaults are used if missing)
        #[arg(short, long, default_value = "agent_config.toml")]
        agent_config: std::path::PathBuf,
    },

    /// Replay a list of moves from the starting position and print the result
    Replay {
        /// Moves in order, e.g. d3 c3 c4
        moves: Vec<String>,
    },
}
