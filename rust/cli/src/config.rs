use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use pokerduel_runner::channel::{DEFAULT_ACTION_TIMEOUT, DEFAULT_HANDSHAKE_TIMEOUT, Launcher};

pub const CONFIG_ENV: &str = "POKERDUEL_CONFIG";
pub const MATCHES_ENV: &str = "POKERDUEL_MATCHES";
pub const HANDS_ENV: &str = "POKERDUEL_HANDS";
pub const SEED_ENV: &str = "POKERDUEL_SEED";
pub const TIMEOUT_ENV: &str = "POKERDUEL_TIMEOUT_MS";
pub const LOG_ENV: &str = "POKERDUEL_LOG";

const LOG_LEVELS: &[&str] = &["error", "warn", "info", "debug", "trace"];

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    pub matches_per_pair: u32,
    pub hands_per_match: u32,
    pub starting_stack: u32,
    pub seed: Option<u64>,
    pub timeout_ms: u64,
    pub handshake_timeout_ms: u64,
    pub log_level: String,
    pub output_dir: PathBuf,
    pub bots: Vec<BotEntry>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            matches_per_pair: 100,
            hands_per_match: 100,
            starting_stack: 1000,
            seed: None,
            timeout_ms: DEFAULT_ACTION_TIMEOUT.as_millis() as u64,
            handshake_timeout_ms: DEFAULT_HANDSHAKE_TIMEOUT.as_millis() as u64,
            log_level: "info".into(),
            output_dir: PathBuf::from("."),
            bots: Vec::new(),
        }
    }
}

/// One `[[bots]]` roster entry. Exactly one of `builtin`, `program` or `image`
/// must be set.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct BotEntry {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub builtin: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub program: Option<PathBuf>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub args: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub command: Option<String>,
}

/// Where a roster entry's bot comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BotSource {
    Builtin(String),
    Process(Launcher),
}

impl BotEntry {
    pub fn builtin(name: impl Into<String>) -> Self {
        Self {
            builtin: Some(name.into()),
            ..Default::default()
        }
    }

    pub fn program(program: impl Into<PathBuf>) -> Self {
        Self {
            program: Some(program.into()),
            ..Default::default()
        }
    }

    pub fn image(image: impl Into<String>) -> Self {
        Self {
            image: Some(image.into()),
            ..Default::default()
        }
    }

    pub fn source(&self) -> Result<BotSource, ConfigError> {
        match (&self.builtin, &self.program, &self.image) {
            (Some(name), None, None) => {
                if !self.args.is_empty() || self.command.is_some() {
                    return Err(ConfigError::Invalid(format!(
                        "builtin bot '{name}' takes no args or command"
                    )));
                }
                let known = pokerduel_ai::REGISTERED
                    .iter()
                    .any(|n| n.eq_ignore_ascii_case(name));
                if !known {
                    return Err(ConfigError::Invalid(format!(
                        "unknown builtin bot '{name}' (available: {})",
                        pokerduel_ai::REGISTERED.join(", ")
                    )));
                }
                Ok(BotSource::Builtin(name.clone()))
            }
            (None, Some(program), None) => {
                if self.command.is_some() {
                    return Err(ConfigError::Invalid(format!(
                        "bot '{}': command is only valid with image",
                        program.display()
                    )));
                }
                Ok(BotSource::Process(Launcher::Local {
                    program: program.clone(),
                    args: self.args.clone(),
                }))
            }
            (None, None, Some(image)) => {
                if !self.args.is_empty() {
                    return Err(ConfigError::Invalid(format!(
                        "bot '{image}': args are only valid with program"
                    )));
                }
                Ok(BotSource::Process(Launcher::container(
                    image.clone(),
                    self.command.as_deref(),
                )))
            }
            _ => Err(ConfigError::Invalid(
                "each bot needs exactly one of builtin, program or image".into(),
            )),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueSource {
    Default,
    File,
    Env,
    Cli,
}

#[derive(Debug, Clone, Copy)]
pub struct ConfigSources {
    pub matches_per_pair: ValueSource,
    pub hands_per_match: ValueSource,
    pub starting_stack: ValueSource,
    pub seed: ValueSource,
    pub timeout_ms: ValueSource,
    pub handshake_timeout_ms: ValueSource,
    pub log_level: ValueSource,
    pub output_dir: ValueSource,
    pub bots: ValueSource,
}

impl Default for ConfigSources {
    fn default() -> Self {
        Self {
            matches_per_pair: ValueSource::Default,
            hands_per_match: ValueSource::Default,
            starting_stack: ValueSource::Default,
            seed: ValueSource::Default,
            timeout_ms: ValueSource::Default,
            handshake_timeout_ms: ValueSource::Default,
            log_level: ValueSource::Default,
            output_dir: ValueSource::Default,
            bots: ValueSource::Default,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ConfigResolved {
    pub config: Config,
    pub sources: ConfigSources,
}

/// Values given on the command line. They win over the file and the environment.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub config: Option<PathBuf>,
    pub matches: Option<u32>,
    pub hands: Option<u32>,
    pub starting_stack: Option<u32>,
    pub seed: Option<u64>,
    pub timeout_ms: Option<u64>,
    pub log_level: Option<String>,
    pub output_dir: Option<PathBuf>,
    /// Replaces the file roster when non-empty.
    pub bots: Vec<BotEntry>,
}

#[derive(Debug)]
pub enum ConfigError {
    Io { path: PathBuf, source: std::io::Error },
    Parse(toml::de::Error),
    Invalid(String),
}

impl From<toml::de::Error> for ConfigError {
    fn from(e: toml::de::Error) -> Self {
        ConfigError::Parse(e)
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io { path, source } => write!(f, "cannot read {}: {}", path.display(), source),
            ConfigError::Parse(e) => write!(f, "malformed config file: {}", e),
            ConfigError::Invalid(msg) => f.write_str(msg),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Io { source, .. } => Some(source),
            ConfigError::Parse(e) => Some(e),
            ConfigError::Invalid(_) => None,
        }
    }
}

/// Resolves the configuration from the process environment.
pub fn load_with_sources(cli: &CliOverrides) -> Result<ConfigResolved, ConfigError> {
    resolve(cli, |key| std::env::var(key).ok())
}

/// Layers defaults, the TOML file, `POKERDUEL_*` variables and `cli`, in that
/// order, then validates the result.
pub fn resolve<F>(cli: &CliOverrides, env: F) -> Result<ConfigResolved, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let mut cfg = Config::default();
    let mut sources = ConfigSources::default();
    let var = |key: &str| env(key).filter(|v| !v.is_empty());

    let file = cli.config.clone().or_else(|| var(CONFIG_ENV).map(PathBuf::from));
    if let Some(path) = file {
        apply_file(&mut cfg, &mut sources, &path)?;
    }

    if let Some(v) = var(MATCHES_ENV) {
        cfg.matches_per_pair = parse_env(MATCHES_ENV, &v)?;
        sources.matches_per_pair = ValueSource::Env;
    }
    if let Some(v) = var(HANDS_ENV) {
        cfg.hands_per_match = parse_env(HANDS_ENV, &v)?;
        sources.hands_per_match = ValueSource::Env;
    }
    if let Some(v) = var(SEED_ENV) {
        cfg.seed = Some(parse_env(SEED_ENV, &v)?);
        sources.seed = ValueSource::Env;
    }
    if let Some(v) = var(TIMEOUT_ENV) {
        cfg.timeout_ms = parse_env(TIMEOUT_ENV, &v)?;
        sources.timeout_ms = ValueSource::Env;
    }
    if let Some(v) = var(LOG_ENV) {
        cfg.log_level = v;
        sources.log_level = ValueSource::Env;
    }

    if let Some(v) = cli.matches {
        cfg.matches_per_pair = v;
        sources.matches_per_pair = ValueSource::Cli;
    }
    if let Some(v) = cli.hands {
        cfg.hands_per_match = v;
        sources.hands_per_match = ValueSource::Cli;
    }
    if let Some(v) = cli.starting_stack {
        cfg.starting_stack = v;
        sources.starting_stack = ValueSource::Cli;
    }
    if let Some(v) = cli.seed {
        cfg.seed = Some(v);
        sources.seed = ValueSource::Cli;
    }
    if let Some(v) = cli.timeout_ms {
        cfg.timeout_ms = v;
        sources.timeout_ms = ValueSource::Cli;
    }
    if let Some(v) = &cli.log_level {
        cfg.log_level = v.clone();
        sources.log_level = ValueSource::Cli;
    }
    if let Some(v) = &cli.output_dir {
        cfg.output_dir = v.clone();
        sources.output_dir = ValueSource::Cli;
    }
    if !cli.bots.is_empty() {
        cfg.bots = cli.bots.clone();
        sources.bots = ValueSource::Cli;
    }

    cfg.log_level = cfg.log_level.to_ascii_lowercase();
    validate(&cfg)?;
    Ok(ConfigResolved {
        config: cfg,
        sources,
    })
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct FileConfig {
    #[serde(default)]
    matches_per_pair: Option<u32>,
    #[serde(default)]
    hands_per_match: Option<u32>,
    #[serde(default)]
    starting_stack: Option<u32>,
    #[serde(default)]
    seed: Option<u64>,
    #[serde(default)]
    timeout_ms: Option<u64>,
    #[serde(default)]
    handshake_timeout_ms: Option<u64>,
    #[serde(default)]
    log_level: Option<String>,
    #[serde(default)]
    output_dir: Option<PathBuf>,
    #[serde(default)]
    bots: Option<Vec<BotEntry>>,
}

fn apply_file(cfg: &mut Config, sources: &mut ConfigSources, path: &Path) -> Result<(), ConfigError> {
    let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let f: FileConfig = toml::from_str(&text)?;

    if let Some(v) = f.matches_per_pair {
        cfg.matches_per_pair = v;
        sources.matches_per_pair = ValueSource::File;
    }
    if let Some(v) = f.hands_per_match {
        cfg.hands_per_match = v;
        sources.hands_per_match = ValueSource::File;
    }
    if let Some(v) = f.starting_stack {
        cfg.starting_stack = v;
        sources.starting_stack = ValueSource::File;
    }
    if let Some(v) = f.seed {
        cfg.seed = Some(v);
        sources.seed = ValueSource::File;
    }
    if let Some(v) = f.timeout_ms {
        cfg.timeout_ms = v;
        sources.timeout_ms = ValueSource::File;
    }
    if let Some(v) = f.handshake_timeout_ms {
        cfg.handshake_timeout_ms = v;
        sources.handshake_timeout_ms = ValueSource::File;
    }
    if let Some(v) = f.log_level {
        cfg.log_level = v;
        sources.log_level = ValueSource::File;
    }
    if let Some(v) = f.output_dir {
        cfg.output_dir = v;
        sources.output_dir = ValueSource::File;
    }
    if let Some(v) = f.bots {
        cfg.bots = v;
        sources.bots = ValueSource::File;
    }
    Ok(())
}

fn parse_env<T: std::str::FromStr>(key: &str, value: &str) -> Result<T, ConfigError> {
    value
        .trim()
        .parse()
        .map_err(|_| ConfigError::Invalid(format!("Invalid {key}: '{value}'")))
}

fn validate(cfg: &Config) -> Result<(), ConfigError> {
    if cfg.matches_per_pair == 0 {
        return Err(ConfigError::Invalid(
            "Invalid configuration: matches_per_pair must be >= 1".into(),
        ));
    }
    if cfg.hands_per_match == 0 {
        return Err(ConfigError::Invalid(
            "Invalid configuration: hands_per_match must be >= 1".into(),
        ));
    }
    if cfg.starting_stack < pokerduel_engine::rules::BIG_BLIND {
        return Err(ConfigError::Invalid(format!(
            "Invalid configuration: starting_stack must be >= {}",
            pokerduel_engine::rules::BIG_BLIND
        )));
    }
    if cfg.timeout_ms == 0 || cfg.handshake_timeout_ms == 0 {
        return Err(ConfigError::Invalid(
            "Invalid configuration: timeouts must be >= 1 ms".into(),
        ));
    }
    if !LOG_LEVELS.contains(&cfg.log_level.as_str()) {
        return Err(ConfigError::Invalid(format!(
            "Invalid configuration: log_level must be one of {}",
            LOG_LEVELS.join(", ")
        )));
    }
    for entry in &cfg.bots {
        entry.source()?;
    }
    Ok(())
}
