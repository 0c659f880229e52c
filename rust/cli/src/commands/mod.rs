//! Command handlers, one module per subcommand.
//!
//! Each handler takes its output streams as `&mut dyn Write` and returns
//! `Result<(), CliError>`; [`crate::run`] maps the result to an exit code.

mod bots;
mod cfg;
mod run;

pub use bots::handle_bots_command;
pub use cfg::handle_cfg_command;
pub use run::{RunOptions, handle_run_command};
