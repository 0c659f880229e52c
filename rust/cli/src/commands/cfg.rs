//! `cfg`: prints the resolved configuration and the source of every value.
//!
//! ```json
//! {
//!   "matches_per_pair": { "value": 100, "source": "default" },
//!   "hands_per_match": { "value": 20, "source": "env" },
//!   ...
//! }
//! ```

use crate::config::{self, CliOverrides};
use crate::error::CliError;
use std::io::Write;

pub fn handle_cfg_command(overrides: &CliOverrides, out: &mut dyn Write) -> Result<(), CliError> {
    let config::ConfigResolved { config, sources } = config::load_with_sources(overrides)?;
    let display = serde_json::json!({
        "matches_per_pair": {
            "value": config.matches_per_pair,
            "source": sources.matches_per_pair,
        },
        "hands_per_match": {
            "value": config.hands_per_match,
            "source": sources.hands_per_match,
        },
        "starting_stack": {
            "value": config.starting_stack,
            "source": sources.starting_stack,
        },
        "seed": {
            "value": config.seed,
            "source": sources.seed,
        },
        "timeout_ms": {
            "value": config.timeout_ms,
            "source": sources.timeout_ms,
        },
        "handshake_timeout_ms": {
            "value": config.handshake_timeout_ms,
            "source": sources.handshake_timeout_ms,
        },
        "log_level": {
            "value": config.log_level,
            "source": sources.log_level,
        },
        "output_dir": {
            "value": config.output_dir,
            "source": sources.output_dir,
        },
        "bots": {
            "value": config.bots,
            "source": sources.bots,
        }
    });
    let json_str = serde_json::to_string_pretty(&display).map_err(std::io::Error::other)?;
    writeln!(out, "{}", json_str)?;
    Ok(())
}
