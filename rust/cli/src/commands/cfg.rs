//! Configuration command handler.
//!
//! Prints the resolved configuration as JSON, one object per setting with
//! its value and source (`default`, `file` or `env`):
//!
//! ```json
//! {
//!   "hand_size": { "value": 7, "source": "default" },
//!   "seed": { "value": 42, "source": "env" },
//!   ...
//! }
//! ```

use crate::config;
use crate::error::CliError;
use std::io::Write;

pub fn handle_cfg_command(out: &mut dyn Write) -> Result<(), CliError> {
    let config::ConfigResolved { config, sources } = config::load_with_sources()?;
    let display = serde_json::json!({
        "seed": {
            "value": config.seed,
            "source": sources.seed,
        },
        "hand_size": {
            "value": config.hand_size,
            "source": sources.hand_size,
        },
        "max_turns": {
            "value": config.max_turns,
            "source": sources.max_turns,
        },
        "ai": {
            "value": config.ai,
            "source": sources.ai,
        }
    });
    let json_str = serde_json::to_string_pretty(&display).map_err(std::io::Error::other)?;
    writeln!(out, "{}", json_str)?;
    Ok(())
}
