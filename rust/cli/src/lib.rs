//! # One Card CLI Library
//!
//! Command-line front end for the One Card rules engine.
//!
//! ## Main Entry Point
//!
//! [`run`] parses command-line arguments and executes the chosen
//! subcommand against real stdin; [`run_with_input`] takes the input stream
//! explicitly, which is how the tests script a human player.
//!
//! ## Example Usage
//!
//! ```
//! use std::io;
//! let args = vec!["onecard", "play", "--vs", "ai", "--seed", "7", "--turns", "10"];
//! let code = onecard_cli::run(args, &mut io::sink(), &mut io::sink());
//! assert_eq!(code, 0);
//! ```
//!
//! ## Available Subcommands
//!
//! - `play`: play against the AI over stdin, or watch two AIs
//! - `deal`: deal a game and print both hands
//! - `cfg`: display resolved configuration settings

use clap::Parser;
use std::io::{BufRead, Write};

pub mod cli;
mod commands;
pub mod config;
mod error;
pub mod exit_code;
pub mod formatters;
pub mod human;
pub mod io_utils;
pub mod logging;
mod macros;
pub mod ui;
pub mod validation;

use cli::{Commands, OneCardCli};
use commands::{PlayOptions, handle_cfg_command, handle_deal_command, handle_play_command};

pub use cli::Vs;
pub use error::CliError;

/// Main entry point for the CLI application.
///
/// Returns the process exit code: `0` for success, `2` for errors, `130`
/// when interactive input closes mid-game.
///
/// # Example
///
/// ```
/// use std::io;
/// let args = vec!["onecard", "deal", "--seed", "42"];
/// let code = onecard_cli::run(args, &mut io::stdout(), &mut io::stderr());
/// assert_eq!(code, 0);
/// ```
pub fn run<I, S>(args: I, out: &mut dyn Write, err: &mut dyn Write) -> i32
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let stdin = std::io::stdin();
    let mut stdin_lock = stdin.lock();
    run_with_input(args, &mut stdin_lock, out, err)
}

/// Same as [`run`], reading interactive input from `input`.
pub fn run_with_input<I, S>(
    args: I,
    input: &mut dyn BufRead,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> i32
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    const COMMANDS: &[&str] = &["play", "deal", "cfg"];
    let argv: Vec<String> = args.into_iter().map(|s| s.as_ref().to_string()).collect();

    let cli = match OneCardCli::try_parse_from(&argv) {
        Ok(cli) => cli,
        Err(e) => {
            use clap::error::ErrorKind;

            // Help and version go to stdout and succeed
            if matches!(
                e.kind(),
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion
            ) {
                if write!(out, "{}", e).is_err() {
                    return exit_code::ERROR;
                }
                return exit_code::SUCCESS;
            }
            write_or_exit!(err, "{}", e);
            write_or_exit!(err, "One Card CLI");
            write_or_exit!(err, "Usage: onecard <command> [options]\n");
            write_or_exit!(err, "Commands:");
            for c in COMMANDS {
                write_or_exit!(err, "  {}", c);
            }
            write_or_exit!(err, "\nFor full help, run: onecard --help");
            return exit_code::ERROR;
        }
    };

    let result = match cli.cmd {
        Commands::Play {
            vs,
            seed,
            turns,
            hand_size,
            ai,
            events,
        } => {
            let opts = PlayOptions {
                vs,
                seed,
                turns,
                hand_size,
                ai,
                events,
            };
            handle_play_command(&opts, input, out, err)
        }
        Commands::Deal { seed, hand_size } => handle_deal_command(seed, hand_size, out),
        Commands::Cfg => handle_cfg_command(out),
    };

    match result {
        Ok(()) => exit_code::SUCCESS,
        Err(CliError::Interrupted(msg)) => {
            write_or_exit!(err, "Interrupted: {}", msg);
            exit_code::INTERRUPTED
        }
        Err(e) => {
            write_or_exit!(err, "Error: {}", e);
            exit_code::ERROR
        }
    }
}
