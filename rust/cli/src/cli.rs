//! Command-line surface of the `onecard` binary.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "onecard",
    version,
    about = "One Card: a two-player shedding game for the terminal"
)]
pub struct OneCardCli {
    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Play a game against the AI, or watch two AIs play
    Play {
        #[arg(long, value_enum, default_value_t = Vs::Ai)]
        vs: Vs,
        #[arg(long)]
        seed: Option<u64>,
        /// Stop after this many turns (defaults to the configured max_turns)
        #[arg(long)]
        turns: Option<u32>,
        #[arg(long)]
        hand_size: Option<usize>,
        /// AI policy for the opponent seat
        #[arg(long)]
        ai: Option<String>,
        /// Write every game event to this file as JSON lines
        #[arg(long)]
        events: Option<PathBuf>,
    },
    /// Deal a game and print both hands
    Deal {
        #[arg(long)]
        seed: Option<u64>,
        #[arg(long)]
        hand_size: Option<usize>,
    },
    /// Show resolved configuration and where each value came from
    Cfg,
}

/// Who sits in the human seat for the `play` command.
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum Vs {
    /// A person at the terminal, reading moves from stdin.
    Human,
    /// A second AI, for unattended games.
    Ai,
}

impl Vs {
    /// Returns the string representation of the opponent type.
    ///
    /// # Examples
    ///
    /// ```
    /// # use onecard_cli::Vs;
    /// assert_eq!(Vs::Ai.as_str(), "ai");
    /// ```
    pub fn as_str(&self) -> &'static str {
        match self {
            Vs::Human => "human",
            Vs::Ai => "ai",
        }
    }
}
