use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::errors::ResultError;

/// Aggregate of all matches one ordered pair played.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct MatchRecord {
    pub bot_a: String,
    pub bot_b: String,
    pub bot_a_wins: u32,
    pub bot_b_wins: u32,
    pub matches_played: u32,
    pub hands_played: u32,
}

impl MatchRecord {
    pub fn new(bot_a: impl Into<String>, bot_b: impl Into<String>) -> Self {
        Self {
            bot_a: bot_a.into(),
            bot_b: bot_b.into(),
            bot_a_wins: 0,
            bot_b_wins: 0,
            matches_played: 0,
            hands_played: 0,
        }
    }

    pub fn ties(&self) -> u32 {
        self.matches_played
            .saturating_sub(self.bot_a_wins)
            .saturating_sub(self.bot_b_wins)
    }
}

/// The durable output of a run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct TournamentResults {
    /// Local time, `yyyy-MM-dd HH:mm:ss`.
    pub date: String,
    pub results: Vec<MatchRecord>,
}

impl TournamentResults {
    pub fn new(at: DateTime<Local>, results: Vec<MatchRecord>) -> Self {
        Self {
            date: at.format("%Y-%m-%d %H:%M:%S").to_string(),
            results,
        }
    }
}

/// Receives match records as they are finalized.
pub trait ResultSink {
    fn record(&mut self, record: &MatchRecord) -> Result<(), ResultError>;

    /// Called once after the last pairing, whether or not bots were disqualified.
    fn finish(&mut self) -> Result<(), ResultError>;
}

/// Keeps records in memory.
#[derive(Debug, Default, Clone)]
pub struct MemorySink {
    pub records: Vec<MatchRecord>,
    pub finished: bool,
}

impl ResultSink for MemorySink {
    fn record(&mut self, record: &MatchRecord) -> Result<(), ResultError> {
        self.records.push(record.clone());
        Ok(())
    }

    fn finish(&mut self) -> Result<(), ResultError> {
        self.finished = true;
        Ok(())
    }
}

/// Writes pretty JSON to `results_YYYYMMDD_HHMMSS.json` and `results.json`.
#[derive(Debug)]
pub struct JsonResultSink {
    dir: PathBuf,
    records: Vec<MatchRecord>,
    written: Vec<PathBuf>,
}

impl JsonResultSink {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            records: Vec::new(),
            written: Vec::new(),
        }
    }

    /// Files produced by the last `finish`.
    pub fn written(&self) -> &[PathBuf] {
        &self.written
    }

    pub fn write_at(&mut self, at: DateTime<Local>) -> Result<(), ResultError> {
        let results = TournamentResults::new(at, self.records.clone());
        let json = serde_json::to_string_pretty(&results)?;
        fs::create_dir_all(&self.dir).map_err(|source| ResultError::Write {
            path: self.dir.clone(),
            source,
        })?;

        let stamped = self
            .dir
            .join(format!("results_{}.json", at.format("%Y%m%d_%H%M%S")));
        let latest = self.dir.join("results.json");
        for path in [&stamped, &latest] {
            write_file(path, &json)?;
        }
        info!(
            stamped = %stamped.display(),
            latest = %latest.display(),
            "results saved"
        );
        self.written = vec![stamped, latest];
        Ok(())
    }
}

fn write_file(path: &Path, contents: &str) -> Result<(), ResultError> {
    fs::write(path, contents).map_err(|source| ResultError::Write {
        path: path.to_path_buf(),
        source,
    })
}

impl ResultSink for JsonResultSink {
    fn record(&mut self, record: &MatchRecord) -> Result<(), ResultError> {
        self.records.push(record.clone());
        Ok(())
    }

    fn finish(&mut self) -> Result<(), ResultError> {
        self.write_at(Local::now())
    }
}

/// Loads a results artifact written by [`JsonResultSink`].
pub fn load_results(path: &Path) -> Result<TournamentResults, ResultError> {
    let text = fs::read_to_string(path).map_err(|source| ResultError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(serde_json::from_str(&text)?)
}

/// Total match wins per bot, best first; ties broken by name.
pub fn standings(records: &[MatchRecord]) -> Vec<(String, u32)> {
    let mut totals: BTreeMap<&str, u32> = BTreeMap::new();
    for r in records {
        *totals.entry(&r.bot_a).or_default() += r.bot_a_wins;
        *totals.entry(&r.bot_b).or_default() += r.bot_b_wins;
    }
    let mut table: Vec<(String, u32)> = totals
        .into_iter()
        .map(|(name, wins)| (name.to_string(), wins))
        .collect();
    table.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    table
}
