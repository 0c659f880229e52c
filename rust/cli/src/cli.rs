//! Command-line argument definitions.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::config::{BotEntry, CliOverrides};

#[derive(Parser, Debug)]
#[command(
    name = "pokerduel",
    version,
    about = "Heads-up one-card poker tournaments between bots"
)]
pub struct PokerDuelCli {
    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Play a round-robin tournament and save the results
    Run {
        #[command(flatten)]
        settings: Settings,
        /// Built-in bot to enter (repeatable)
        #[arg(long = "builtin", value_name = "NAME")]
        builtins: Vec<String>,
        /// Local bot executable to enter (repeatable)
        #[arg(long = "bot", value_name = "PROGRAM")]
        programs: Vec<PathBuf>,
        /// Docker image to enter as a bot (repeatable)
        #[arg(long = "image", value_name = "IMAGE")]
        images: Vec<String>,
        /// Log one JSON object per line instead of text
        #[arg(long)]
        json_logs: bool,
    },
    /// Show the resolved configuration and where each value came from
    Cfg {
        #[command(flatten)]
        settings: Settings,
    },
    /// List the built-in bots
    Bots,
}

/// Flags shared by commands that resolve the configuration.
#[derive(Args, Debug, Clone, Default)]
pub struct Settings {
    /// TOML configuration file (overrides POKERDUEL_CONFIG)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,
    /// Matches per ordered pair
    #[arg(long)]
    pub matches: Option<u32>,
    /// Hands per match
    #[arg(long)]
    pub hands: Option<u32>,
    /// Chips each bot starts a match with
    #[arg(long)]
    pub stack: Option<u32>,
    /// Deck seed for reproducible runs
    #[arg(long)]
    pub seed: Option<u64>,
    /// Per-request bot timeout in milliseconds
    #[arg(long, value_name = "MS")]
    pub timeout_ms: Option<u64>,
    /// Directory for results files
    #[arg(long, value_name = "DIR")]
    pub output: Option<PathBuf>,
    /// error, warn, info, debug or trace
    #[arg(long, value_name = "LEVEL")]
    pub log_level: Option<String>,
}

impl Settings {
    pub fn into_overrides(self, bots: Vec<BotEntry>) -> CliOverrides {
        CliOverrides {
            config: self.config,
            matches: self.matches,
            hands: self.hands,
            starting_stack: self.stack,
            seed: self.seed,
            timeout_ms: self.timeout_ms,
            log_level: self.log_level,
            output_dir: self.output,
            bots,
        }
    }
}

/// Roster entries named on the command line, built-ins first.
pub fn roster_from_flags(builtins: Vec<String>, programs: Vec<PathBuf>, images: Vec<String>) -> Vec<BotEntry> {
    builtins
        .into_iter()
        .map(BotEntry::builtin)
        .chain(programs.into_iter().map(BotEntry::program))
        .chain(images.into_iter().map(BotEntry::image))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn command_definition_is_consistent() {
        PokerDuelCli::command().debug_assert();
    }

    #[test]
    fn run_collects_repeated_bot_flags() {
        let cli = PokerDuelCli::try_parse_from([
            "pokerduel", "run", "--builtin", "smart", "--builtin", "random", "--bot", "./mybot", "--hands", "5",
        ])
        .unwrap();
        let Commands::Run {
            settings,
            builtins,
            programs,
            images,
            ..
        } = cli.cmd
        else {
            panic!("expected run");
        };
        assert_eq!(settings.hands, Some(5));
        let roster = roster_from_flags(builtins, programs, images);
        assert_eq!(
            roster,
            vec![
                BotEntry::builtin("smart"),
                BotEntry::builtin("random"),
                BotEntry::program("./mybot"),
            ]
        );
    }
}
