//! Line-oriented channel to an external bot process.
//!
//! Every request is one line on the bot's stdin and every reply one line on its
//! stdout. Each [`ProcessBot`] owns a single-threaded tokio runtime so the caller
//! stays synchronous while reads are still bounded by a timeout: a hung bot
//! cannot stall the tournament.

use std::fmt;
use std::io::ErrorKind;
use std::path::PathBuf;
use std::process::Stdio;
use std::time::Duration;

use pokerduel_engine::bot::PokerBot;
use pokerduel_engine::errors::{BotError, BotFault};
use pokerduel_engine::protocol::{GameState, PokerAction, NAME_REQUEST, RESET_REQUEST};
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader, Lines};
use tokio::process::{Child, ChildStdin, ChildStdout, Command};
use tokio::runtime::{Builder, Runtime};
use tokio::task::JoinHandle;
use tracing::{debug, trace};

pub const DEFAULT_ACTION_TIMEOUT: Duration = Duration::from_millis(1000);
pub const DEFAULT_HANDSHAKE_TIMEOUT: Duration = Duration::from_secs(10);

// How long dispose waits for a killed process to be reaped.
const REAP_GRACE: Duration = Duration::from_millis(500);

/// How to start a bot process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Launcher {
    /// A local executable.
    Local { program: PathBuf, args: Vec<String> },
    /// `docker run -i --rm <image> [command...]`
    Container { image: String, command: Vec<String> },
}

impl Launcher {
    pub fn local(program: impl Into<PathBuf>) -> Self {
        Launcher::Local {
            program: program.into(),
            args: Vec::new(),
        }
    }

    pub fn container(image: impl Into<String>, command: Option<&str>) -> Self {
        Launcher::Container {
            image: image.into(),
            command: command
                .map(|c| c.split_whitespace().map(str::to_string).collect())
                .unwrap_or_default(),
        }
    }

    fn command(&self) -> Command {
        match self {
            Launcher::Local { program, args } => {
                let mut cmd = Command::new(program);
                cmd.args(args);
                cmd
            }
            Launcher::Container { image, command } => {
                let mut cmd = Command::new("docker");
                cmd.args(["run", "-i", "--rm"]).arg(image).args(command);
                cmd
            }
        }
    }
}

impl fmt::Display for Launcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Launcher::Local { program, args } => {
                write!(f, "{}", program.display())?;
                for arg in args {
                    write!(f, " {arg}")?;
                }
                Ok(())
            }
            Launcher::Container { image, .. } => write!(f, "docker:{image}"),
        }
    }
}

/// Per-request time limits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timeouts {
    pub handshake: Duration,
    pub action: Duration,
}

impl Default for Timeouts {
    fn default() -> Self {
        Self {
            handshake: DEFAULT_HANDSHAKE_TIMEOUT,
            action: DEFAULT_ACTION_TIMEOUT,
        }
    }
}

/// An external bot behind a spawned process.
///
/// Any fault tears the process down: a bot that missed a deadline may still
/// answer late, and that answer must never be read as the next reply.
pub struct ProcessBot {
    name: String,
    runtime: Runtime,
    child: Option<Child>,
    stdin: Option<ChildStdin>,
    stdout: Lines<BufReader<ChildStdout>>,
    stderr_drain: Option<JoinHandle<()>>,
    action_timeout: Duration,
}

impl ProcessBot {
    /// Starts the process and performs the name handshake.
    ///
    /// A bot that cannot be started or does not introduce itself is rejected here
    /// and never enters the tournament.
    pub fn spawn(launcher: &Launcher, timeouts: Timeouts) -> Result<Self, BotError> {
        let label = launcher.to_string();
        let runtime = Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(|e| BotError::new(label.clone(), BotFault::Spawn(e)))?;

        let mut child = {
            let _guard = runtime.enter();
            launcher
                .command()
                .stdin(Stdio::piped())
                .stdout(Stdio::piped())
                .stderr(Stdio::piped())
                .kill_on_drop(true)
                .spawn()
                .map_err(|e| BotError::new(label.clone(), BotFault::Spawn(e)))?
        };

        let closed = || BotError::new(label.clone(), BotFault::Handshake(Box::new(BotFault::Closed)));
        let stdin = child.stdin.take().ok_or_else(closed)?;
        let stdout = child.stdout.take().ok_or_else(closed)?;
        let stderr_drain = child.stderr.take().map(|stderr| {
            let source = label.clone();
            runtime.spawn(async move {
                let mut lines = BufReader::new(stderr).lines();
                while let Ok(Some(line)) = lines.next_line().await {
                    debug!(bot = %source, stderr = %line);
                }
            })
        });

        let mut bot = Self {
            name: label.clone(),
            runtime,
            child: Some(child),
            stdin: Some(stdin),
            stdout: BufReader::new(stdout).lines(),
            stderr_drain,
            action_timeout: timeouts.action,
        };

        let name = bot
            .request(NAME_REQUEST, timeouts.handshake)
            .and_then(|reply| {
                // Only the line ending is stripped; the rest is the display name as sent.
                let name = reply.trim_end_matches(['\r', '\n']);
                if name.trim().is_empty() {
                    Err(BotFault::Other("empty name".to_string()))
                } else {
                    Ok(name.to_string())
                }
            })
            .map_err(|fault| BotError::new(label.clone(), BotFault::Handshake(Box::new(fault))))?;

        debug!(launcher = %label, %name, "bot registered");
        bot.name = name;
        Ok(bot)
    }

    pub fn is_alive(&self) -> bool {
        self.child.is_some()
    }

    /// Writes one line and waits for one reply line. The write and the read share
    /// the deadline.
    fn request(&mut self, line: &str, wait: Duration) -> Result<String, BotFault> {
        let result = match self.stdin.as_mut() {
            None => Err(BotFault::Closed),
            Some(stdin) => {
                let stdout = &mut self.stdout;
                self.runtime.block_on(async {
                    let exchange = async {
                        stdin.write_all(line.as_bytes()).await?;
                        stdin.write_all(b"\n").await?;
                        stdin.flush().await?;
                        stdout.next_line().await
                    };
                    match tokio::time::timeout(wait, exchange).await {
                        Err(_) => Err(BotFault::Timeout { after: wait }),
                        Ok(Ok(Some(reply))) => Ok(reply),
                        Ok(Ok(None)) => Err(BotFault::Closed),
                        Ok(Err(e)) if e.kind() == ErrorKind::BrokenPipe => Err(BotFault::Closed),
                        Ok(Err(e)) => Err(BotFault::Io(e)),
                    }
                })
            }
        };
        if result.is_err() {
            self.dispose();
        }
        result
    }

    fn fault(&self, fault: BotFault) -> BotError {
        BotError::new(self.name.clone(), fault)
    }

    /// Kills the process and releases its pipes. Safe to call any number of times.
    pub fn dispose(&mut self) {
        self.stdin = None;
        if let Some(task) = self.stderr_drain.take() {
            task.abort();
        }
        if let Some(mut child) = self.child.take() {
            let _ = child.start_kill();
            let _ = self
                .runtime
                .block_on(async { tokio::time::timeout(REAP_GRACE, child.wait()).await });
            trace!(bot = %self.name, "process disposed");
        }
    }
}

impl fmt::Debug for ProcessBot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProcessBot")
            .field("name", &self.name)
            .field("alive", &self.is_alive())
            .field("action_timeout", &self.action_timeout)
            .finish()
    }
}

impl PokerBot for ProcessBot {
    fn name(&self) -> &str {
        &self.name
    }

    fn get_action(&mut self, state: &GameState) -> Result<PokerAction, BotError> {
        let line = state.to_line().map_err(|e| self.fault(BotFault::Encode(e)))?;
        let reply = self
            .request(&line, self.action_timeout)
            .map_err(|f| self.fault(f))?;
        debug!(bot = %self.name, %reply);
        PokerAction::from_line(&reply).map_err(|source| {
            self.dispose();
            self.fault(BotFault::Malformed {
                line: reply.clone(),
                source,
            })
        })
    }

    fn reset(&mut self) -> Result<(), BotError> {
        self.request(RESET_REQUEST, self.action_timeout)
            .map(|_| ())
            .map_err(|f| self.fault(f))
    }

    fn observe_result(&mut self, state: &GameState) -> Result<(), BotError> {
        let line = state.to_line().map_err(|e| self.fault(BotFault::Encode(e)))?;
        self.request(&line, self.action_timeout)
            .map(|_| ())
            .map_err(|f| self.fault(f))
    }
}

impl Drop for ProcessBot {
    fn drop(&mut self) {
        self.dispose();
    }
}
