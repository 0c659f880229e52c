//! Shared helpers for CLI integration tests.
//!
//! `run_cli` calls the library entry point with captured streams; `EnvGuard`
//! sets `POKERDUEL_*` variables for the duration of a test and restores them on
//! drop. Tests that touch the environment must be `#[serial]`.

#![allow(dead_code)]

use std::path::{Path, PathBuf};

pub struct CliResult {
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

pub fn run_cli(args: &[&str]) -> CliResult {
    let mut out = Vec::new();
    let mut err = Vec::new();
    let argv: Vec<String> = std::iter::once("pokerduel".to_string())
        .chain(args.iter().map(|s| s.to_string()))
        .collect();
    let exit_code = pokerduel_cli::run(argv, &mut out, &mut err);
    CliResult {
        exit_code,
        stdout: String::from_utf8_lossy(&out).into_owned(),
        stderr: String::from_utf8_lossy(&err).into_owned(),
    }
}

pub fn run_cli_with_env(args: &[&str], env: &[(&str, &str)]) -> CliResult {
    let _guard = EnvGuard::apply(env);
    run_cli(args)
}

pub struct EnvGuard {
    restores: Vec<(String, Option<String>)>,
}

impl EnvGuard {
    pub fn apply(pairs: &[(&str, &str)]) -> Self {
        let mut restores = Vec::new();
        for (key, value) in pairs {
            let previous = std::env::var(key).ok();
            // Callers are #[serial], so no other test thread reads the environment.
            unsafe { std::env::set_var(key, value) };
            restores.push((key.to_string(), previous));
        }
        EnvGuard { restores }
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        for (key, previous) in self.restores.iter().rev() {
            match previous {
                Some(val) => unsafe { std::env::set_var(key, val) },
                None => unsafe { std::env::remove_var(key) },
            }
        }
    }
}

pub fn write_config(dir: &Path, toml: &str) -> PathBuf {
    let path = dir.join("pokerduel.toml");
    std::fs::write(&path, toml).expect("write config");
    path
}

/// A `[[bots]]` entry for an `sh -c` bot that answers every state with a call.
pub fn shell_bot_entry(name: &str) -> String {
    let script = format!(
        r#"while IFS= read -r line; do case "$line" in __name__) echo {name} ;; __reset__) echo OK ;; *) echo '{{"ActionType":"Call"}}' ;; esac; done"#
    );
    format!(
        "[[bots]]\nprogram = \"sh\"\nargs = [\"-c\", '''{script}''']\n"
    )
}
