//! End-to-end `run` invocations through the library entry point.

mod helpers;

use helpers::{run_cli, write_config};
use pokerduel_runner::results::load_results;
use serial_test::serial;

#[test]
#[serial]
fn builtin_round_robin_writes_results() {
    let dir = tempfile::tempdir().unwrap();
    let out_dir = dir.path().to_str().unwrap();
    let res = run_cli(&[
        "run", "--builtin", "calling", "--builtin", "smart", "--builtin", "random", "--matches", "2", "--hands",
        "6", "--seed", "42", "--output", out_dir, "--log-level", "error",
    ]);
    assert_eq!(res.exit_code, 0, "{}", res.stderr);
    assert!(res.stdout.contains("Results:"));
    assert!(res.stdout.contains("Saved"));

    let results = load_results(&dir.path().join("results.json")).unwrap();
    assert_eq!(results.results.len(), 6);
    for record in &results.results {
        assert_eq!(record.matches_played, 2);
        assert!(record.hands_played <= 12);
    }
}

#[test]
#[serial]
fn single_bot_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let res = run_cli(&[
        "run", "--builtin", "smart", "--output", dir.path().to_str().unwrap(), "--log-level", "error",
    ]);
    assert_eq!(res.exit_code, 2);
    assert!(res.stderr.contains("need at least two bots, got 1"), "{}", res.stderr);
}

#[test]
#[serial]
fn unstartable_program_is_skipped() {
    let dir = tempfile::tempdir().unwrap();
    let res = run_cli(&[
        "run", "--builtin", "calling", "--builtin", "allin", "--bot", "/definitely/not/a/bot", "--matches", "1",
        "--hands", "3", "--output", dir.path().to_str().unwrap(), "--log-level", "error",
    ]);
    assert_eq!(res.exit_code, 0, "{}", res.stderr);
    assert!(res.stderr.contains("WARNING: skipping bot '/definitely/not/a/bot'"), "{}", res.stderr);
    let results = load_results(&dir.path().join("results.json")).unwrap();
    assert_eq!(results.results.len(), 2);
}

#[cfg(unix)]
#[test]
#[serial]
fn external_bots_from_config_file() {
    let dir = tempfile::tempdir().unwrap();
    let toml = format!(
        "matches_per_pair = 1\nhands_per_match = 4\ntimeout_ms = 2000\nlog_level = \"error\"\noutput_dir = '{}'\n\n{}\n[[bots]]\nbuiltin = \"calling\"\n",
        dir.path().display(),
        helpers::shell_bot_entry("ShellCaller"),
    );
    let config = write_config(dir.path(), &toml);

    let res = run_cli(&["run", "--config", config.to_str().unwrap()]);
    assert_eq!(res.exit_code, 0, "{}", res.stderr);
    assert!(res.stdout.contains("ShellCaller"), "{}", res.stdout);

    let results = load_results(&dir.path().join("results.json")).unwrap();
    assert_eq!(results.results.len(), 2);
    assert_eq!(results.results[0].bot_a, "ShellCaller");
    assert_eq!(results.results[0].bot_b, "CallingBot");
}
