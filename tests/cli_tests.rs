//! CLI integration tests.

use std::fs;

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use predicates::prelude::*;

fn intellisql() -> Command {
    let mut cmd = cargo_bin_cmd!("intellisql");
    for var in ["GEMINI_API_KEY", "OPENAI_API_KEY", "ANTHROPIC_API_KEY", "API_KEY"] {
        cmd.env_remove(var);
    }
    cmd
}

#[test]
fn help_lists_commands() {
    intellisql()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("serve"))
        .stdout(predicate::str::contains("ask"))
        .stdout(predicate::str::contains("config"));
}

#[test]
fn version() {
    intellisql()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("intellisql"));
}

#[test]
fn config_validate_rejects_bad_value() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, "[llm.gemini]\ntemperature = 7.0\n").unwrap();

    intellisql()
        .args(["config", "validate", "--config"])
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("temperature"));
}

#[test]
fn config_init_then_validate() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");

    intellisql()
        .args(["config", "init"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Created configuration file"));

    intellisql()
        .args(["config", "validate", "-c"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Config file is valid"))
        .stdout(predicate::str::contains("GEMINI_API_KEY is not set"));

    intellisql()
        .args(["config", "init"])
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("--force"));
}

#[test]
fn config_show_json() {
    let dir = tempfile::tempdir().unwrap();

    intellisql()
        .args(["--json", "config", "show", "-c"])
        .arg(dir.path().join("missing.toml"))
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""provider":"gemini""#))
        .stdout(predicate::str::contains(r#""model":"gemini-2.5-flash""#))
        .stdout(predicate::str::contains(r#""api_key_loaded":false"#));
}

#[test]
fn ask_without_api_key_fails_before_any_request() {
    let dir = tempfile::tempdir().unwrap();

    intellisql()
        .current_dir(dir.path())
        .args(["ask", "-c"])
        .arg(dir.path().join("missing.toml"))
        .args(["how", "many", "students?"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("GEMINI_API_KEY"));
}

#[test]
fn serve_rejects_port_zero() {
    let dir = tempfile::tempdir().unwrap();

    intellisql()
        .args(["serve", "--port", "0", "-c"])
        .arg(dir.path().join("missing.toml"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("server.port"));
}
