//! Plain-text tables for tournament output.
//!
//! Pure functions so the layout can be tested without running a tournament.
//!
//! ```rust
//! use pokerduel_cli::formatters::format_standings;
//!
//! let table = format_standings(&[("SmartBot".to_string(), 12), ("RandomBot".to_string(), 3)]);
//! assert!(table.lines().nth(1).unwrap().contains("SmartBot"));
//! ```

use pokerduel_runner::results::MatchRecord;

/// One line per ordered pair: `A 6 - 3 B (1 tied, 10 matches, 812 hands)`.
pub fn format_record(record: &MatchRecord) -> String {
    format!(
        "{} {} - {} {} ({} tied, {} matches, {} hands)",
        record.bot_a,
        record.bot_a_wins,
        record.bot_b_wins,
        record.bot_b,
        record.ties(),
        record.matches_played,
        record.hands_played
    )
}

/// Ranked table of match wins. Rows keep the order given.
pub fn format_standings(standings: &[(String, u32)]) -> String {
    let width = standings
        .iter()
        .map(|(name, _)| name.chars().count())
        .max()
        .unwrap_or(0)
        .max("Bot".len());

    let mut table = format!("{:>4}  {:<width$}  {:>5}\n", "#", "Bot", "Wins");
    for (rank, (name, wins)) in standings.iter().enumerate() {
        table.push_str(&format!("{:>4}  {:<width$}  {:>5}\n", rank + 1, name, wins));
    }
    table
}
