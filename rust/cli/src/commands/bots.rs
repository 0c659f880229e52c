use std::io::Write;

use pokerduel_engine::bot::PokerBot;

use crate::error::CliError;

/// Lists the names accepted by `--builtin` and `builtin = "..."`.
pub fn handle_bots_command(out: &mut dyn Write) -> Result<(), CliError> {
    writeln!(out, "Built-in bots:")?;
    for key in pokerduel_ai::REGISTERED {
        let display = pokerduel_ai::create_bot(key)
            .map(|bot| bot.name().to_string())
            .unwrap_or_default();
        writeln!(out, "  {key:<10} {display}")?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lists_every_registered_bot() {
        let mut out = Vec::new();
        handle_bots_command(&mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert_eq!(text.lines().count(), pokerduel_ai::REGISTERED.len() + 1);
        assert!(text.contains("  smart      SmartBot"));
    }
}
