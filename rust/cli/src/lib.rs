//! # PokerDuel CLI Library
//!
//! Command-line front end for bot tournaments. The primary entry point is
//! [`run`], which parses arguments and dispatches to a subcommand.
//!
//! ## Available Subcommands
//!
//! - `run`: Play a round-robin tournament between built-in and external bots
//! - `cfg`: Display the resolved configuration with value sources
//! - `bots`: List the built-in bots
//!
//! ## Example Usage
//!
//! ```no_run
//! use std::io;
//! let args = vec!["pokerduel", "run", "--builtin", "smart", "--builtin", "random"];
//! let code = pokerduel_cli::run(args, &mut io::stdout(), &mut io::stderr());
//! assert_eq!(code, 0);
//! ```

use clap::Parser;
use std::io::Write;

pub mod cli;
mod commands;
pub mod config;
mod error;
pub mod exit_code;
pub mod formatters;
#[macro_use]
mod macros;
pub mod roster;
pub mod ui;

use cli::{Commands, PokerDuelCli, roster_from_flags};
use commands::{RunOptions, handle_bots_command, handle_cfg_command, handle_run_command};

pub use error::CliError;

const COMMANDS: &[&str] = &["run", "cfg", "bots"];

/// Parses `args` and runs the selected subcommand.
///
/// Returns the process exit code: `0` on success (including `--help` and
/// `--version`), `2` for argument, configuration, and tournament errors.
///
/// ```
/// let mut out = Vec::new();
/// let mut err = Vec::new();
/// let code = pokerduel_cli::run(["pokerduel", "bots"], &mut out, &mut err);
/// assert_eq!(code, 0);
/// assert!(String::from_utf8(out).unwrap().contains("random"));
/// ```
pub fn run<I, S>(args: I, out: &mut dyn Write, err: &mut dyn Write) -> i32
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let argv: Vec<String> = args.into_iter().map(|s| s.as_ref().to_string()).collect();

    let parsed = match PokerDuelCli::try_parse_from(&argv) {
        Ok(parsed) => parsed,
        Err(e) => {
            use clap::error::ErrorKind;

            return match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
                    write_or_exit!(out, "{}", e);
                    exit_code::SUCCESS
                }
                _ => {
                    write_or_exit!(err, "{}", e);
                    write_or_exit!(err, "PokerDuel tournament runner");
                    write_or_exit!(err, "Usage: pokerduel <command> [options]\n");
                    write_or_exit!(err, "Commands:");
                    for c in COMMANDS {
                        write_or_exit!(err, "  {}", c);
                    }
                    exit_code::ERROR
                }
            };
        }
    };

    let result = match parsed.cmd {
        Commands::Run {
            settings,
            builtins,
            programs,
            images,
            json_logs,
        } => {
            let bots = roster_from_flags(builtins, programs, images);
            let options = RunOptions {
                overrides: settings.into_overrides(bots),
                json_logs,
            };
            handle_run_command(options, out, err)
        }
        Commands::Cfg { settings } => handle_cfg_command(&settings.into_overrides(Vec::new()), out),
        Commands::Bots => handle_bots_command(out),
    };

    match result {
        Ok(()) => exit_code::SUCCESS,
        Err(e) => {
            let _ = ui::write_error(err, &e.to_string());
            exit_code::ERROR
        }
    }
}
