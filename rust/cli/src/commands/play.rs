//! # Play Command
//!
//! Runs a game in one of two modes:
//!
//! - **Human vs AI**: the human seat reads moves from stdin
//!   (`play <n> [suit]`, `draw`, `concede`, `q`) and is asked for a defence
//!   card whenever it is attacked
//! - **AI vs AI**: both seats are AI policies; useful for demos and soak runs
//!
//! Every game event is echoed to `out` as `[turn] text`. With `--events PATH`
//! the same events are also written as JSON lines.
//!
//! Rejected human moves are reported on `err` and the same seat is asked
//! again. `q` concedes and exits cleanly; closing stdin mid-game is treated
//! as an interruption.

use crate::cli::Vs;
use crate::config::{self, Config};
use crate::error::CliError;
use crate::formatters::format_cards;
use crate::human::HumanParticipant;
use crate::ui;
use onecard_ai::create_ai;
use onecard_engine::engine::{Engine, TurnReport};
use onecard_engine::errors::GameError;
use onecard_engine::game::GameStatus;
use onecard_engine::logger::EventWriter;
use onecard_engine::player::Seat;
use std::fs::File;
use std::io::{BufRead, BufWriter, Write};
use std::path::PathBuf;
use tracing::{info, warn};

/// Command-line overrides for `play`; unset fields fall back to configuration.
#[derive(Debug, Clone)]
pub struct PlayOptions {
    pub vs: Vs,
    pub seed: Option<u64>,
    pub turns: Option<u32>,
    pub hand_size: Option<usize>,
    pub ai: Option<String>,
    pub events: Option<PathBuf>,
}

impl PlayOptions {
    fn resolve(&self, cfg: Config) -> Result<Config, CliError> {
        let merged = Config {
            seed: self.seed.or(cfg.seed),
            hand_size: self.hand_size.unwrap_or(cfg.hand_size),
            max_turns: self.turns.unwrap_or(cfg.max_turns),
            ai: self.ai.clone().unwrap_or(cfg.ai),
        };
        config::validate(&merged)?;
        Ok(merged)
    }
}

/// Handle the play command.
///
/// # Errors
///
/// - `CliError::Config` for invalid settings after merging flags
/// - `CliError::Engine` if the game cannot continue
/// - `CliError::Interrupted` if stdin closes during a human game
/// - `CliError::Io` for output failures
pub fn handle_play_command(
    opts: &PlayOptions,
    stdin: &mut dyn BufRead,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<(), CliError> {
    let cfg = opts.resolve(config::load()?)?;
    let seed = cfg.seed.unwrap_or_else(rand::random);

    let mut opponent = create_ai(&cfg.ai, seed.wrapping_add(1))
        .ok_or_else(|| CliError::InvalidInput(format!("unknown ai '{}'", cfg.ai)))?;
    let mut stand_in = match opts.vs {
        Vs::Human => None,
        Vs::Ai => create_ai(&cfg.ai, seed.wrapping_add(2)),
    };

    let mut events = match &opts.events {
        Some(path) => Some(EventWriter::new(BufWriter::new(File::create(path)?))),
        None => None,
    };

    writeln!(
        out,
        "play: vs={} seed={} hand_size={} ai={}",
        opts.vs.as_str(),
        seed,
        cfg.hand_size,
        cfg.ai
    )?;

    let mut engine = Engine::new(Some(seed), cfg.hand_size);
    for event in engine.state().events() {
        writeln!(out, "[0] {}", event)?;
        if let Some(w) = events.as_mut() {
            w.write(0, event)?;
        }
    }

    let mut played = 0u32;
    let mut quit = false;
    let mut interrupted = false;

    while played < cfg.max_turns && !engine.state().is_over() {
        let result = match stand_in.as_mut() {
            Some(south) => engine.play_turn(&mut **south, &mut *opponent),
            None => {
                let mut human = HumanParticipant::new(stdin, out);
                let result = engine.play_turn(&mut human, &mut *opponent);
                if let Some(e) = human.take_io_error() {
                    return Err(e.into());
                }
                quit = human.quit_requested();
                interrupted = human.input_closed();
                result
            }
        };

        match result {
            Ok(report) => {
                write_report(&report, out, events.as_mut())?;
                played += 1;
            }
            Err(e @ (GameError::CardNotInHand { .. } | GameError::IllegalCard { .. }))
                if opts.vs == Vs::Human && engine.current_seat() == Seat::Human =>
            {
                ui::write_error(err, &e.to_string())?;
            }
            Err(GameError::DeckExhaustedAndDiscardEmpty) => {
                warn!(seed, played, "no cards left to draw");
                ui::display_warning(err, "No cards left to draw; stopping.")?;
                break;
            }
            Err(e) => return Err(e.into()),
        }

        if quit {
            // A quit while defending leaves the game running.
            if !engine.state().is_over() {
                engine.concede(Seat::Human)?;
                let turn = engine.state().turn_number();
                if let Some(event) = engine.state().events().last() {
                    writeln!(out, "[{}] {}", turn, event)?;
                    if let Some(w) = events.as_mut() {
                        w.write(turn, event)?;
                    }
                }
            }
            break;
        }
    }

    let state = engine.state();
    match state.status() {
        GameStatus::Conceded { by } => writeln!(out, "Game over: {} conceded", by)?,
        GameStatus::InProgress => writeln!(out, "Stopped after {} turns", played)?,
    }
    writeln!(
        out,
        "Human: {} cards {}",
        state.hand(Seat::Human).len(),
        format_cards(state.hand(Seat::Human).cards())
    )?;
    writeln!(out, "AI: {} cards", state.hand(Seat::Ai).len())?;
    info!(seed, played, "play finished");

    if interrupted {
        return Err(CliError::Interrupted("input closed".to_string()));
    }
    Ok(())
}

fn write_report(
    report: &TurnReport,
    out: &mut dyn Write,
    events: Option<&mut EventWriter<BufWriter<File>>>,
) -> Result<(), CliError> {
    for event in &report.events {
        writeln!(out, "[{}] {}", report.turn_number, event)?;
    }
    if let Some(w) = events {
        for event in &report.events {
            w.write(report.turn_number, event)?;
        }
    }
    Ok(())
}
