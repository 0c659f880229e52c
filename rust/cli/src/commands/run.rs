//! `run`: resolves the roster, plays the round robin and saves the results.

use std::io::Write;
use std::time::Duration;

use pokerduel_runner::channel::Timeouts;
use pokerduel_runner::logging::{init_json_logging, init_logging};
use pokerduel_runner::results::{JsonResultSink, standings};
use pokerduel_runner::tournament::{TournamentConfig, TournamentScheduler};
use tracing::{error, info};

use crate::config::{self, CliOverrides};
use crate::error::CliError;
use crate::formatters::{format_record, format_standings};
use crate::roster::build_roster;
use crate::ui;

#[derive(Debug, Clone, Default)]
pub struct RunOptions {
    pub overrides: CliOverrides,
    pub json_logs: bool,
}

pub fn handle_run_command(options: RunOptions, out: &mut dyn Write, err: &mut dyn Write) -> Result<(), CliError> {
    let config = config::load_with_sources(&options.overrides)?.config;
    if options.json_logs {
        init_json_logging(&config.log_level);
    } else {
        init_logging(&config.log_level);
    }

    let mut scheduler = TournamentScheduler::new(TournamentConfig {
        matches_per_pair: config.matches_per_pair,
        hands_per_match: config.hands_per_match,
        starting_stack: config.starting_stack,
        seed: config.seed,
    })?;
    let timeouts = Timeouts {
        handshake: Duration::from_millis(config.handshake_timeout_ms),
        action: Duration::from_millis(config.timeout_ms),
    };

    let bots = build_roster(&config.bots, timeouts, err)?;
    info!(entered = bots.len(), listed = config.bots.len(), "roster ready");

    let mut sink = JsonResultSink::new(&config.output_dir);
    let report = scheduler.run(bots, &mut sink).map_err(|e| {
        error!(error = %e, "tournament aborted");
        CliError::from(e)
    })?;

    writeln!(out, "Results:")?;
    for record in &report.records {
        writeln!(out, "  {}", format_record(record))?;
    }
    writeln!(out)?;
    write!(out, "{}", format_standings(&standings(&report.records)))?;
    for bot in &report.disqualified {
        ui::display_warning(err, &format!("{bot} was disqualified"))?;
    }
    for path in sink.written() {
        writeln!(out, "Saved {}", path.display())?;
    }
    Ok(())
}
