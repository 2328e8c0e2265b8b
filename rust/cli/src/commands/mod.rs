//! Command handlers for the `onecard` CLI.
//!
//! Each subcommand lives in its own module and exposes one
//! `handle_<command>_command` function that takes its output streams as
//! `&mut dyn Write` and reports failures through [`CliError`](crate::CliError).

mod cfg;
mod deal;
mod play;

pub use cfg::handle_cfg_command;
pub use deal::handle_deal_command;
pub use play::{PlayOptions, handle_play_command};
