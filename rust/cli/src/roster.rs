//! Turns roster entries into live bots.

use std::io::Write;

use pokerduel_engine::bot::PokerBot;
use pokerduel_runner::channel::{ProcessBot, Timeouts};
use tracing::{info, warn};

use crate::config::{BotEntry, BotSource};
use crate::error::CliError;
use crate::ui;

/// Builds every bot in `entries`, in order.
///
/// External bots that fail to start or to introduce themselves are reported on
/// `err` and left out; the tournament goes ahead with the rest. An unknown
/// builtin name is a configuration mistake and stops the run.
pub fn build_roster(
    entries: &[BotEntry],
    timeouts: Timeouts,
    err: &mut dyn Write,
) -> Result<Vec<Box<dyn PokerBot>>, CliError> {
    let mut bots: Vec<Box<dyn PokerBot>> = Vec::with_capacity(entries.len());
    for entry in entries {
        match entry.source()? {
            BotSource::Builtin(name) => {
                let bot = pokerduel_ai::create_bot(&name)
                    .ok_or_else(|| CliError::InvalidInput(format!("unknown builtin bot '{name}'")))?;
                info!(bot = bot.name(), "builtin bot registered");
                bots.push(Box::new(bot));
            }
            BotSource::Process(launcher) => match ProcessBot::spawn(&launcher, timeouts) {
                Ok(bot) => {
                    info!(bot = bot.name(), %launcher, "external bot registered");
                    bots.push(Box::new(bot));
                }
                Err(e) => {
                    warn!(bot = %e.bot, cause = %e.fault, "bot failed to start, excluded");
                    ui::display_warning(err, &format!("skipping {e}"))?;
                }
            },
        }
    }
    Ok(bots)
}
