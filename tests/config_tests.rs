//! Integration tests for configuration handling

use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

mod common;
use common::sinaxar_cmd;

#[test]
fn test_defaults_without_any_config() {
    sinaxar_cmd()
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("lookahead_days = 30"))
        .stdout(predicate::str::contains("names = romanian"));
}

#[test]
fn test_env_config_is_picked_up() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("config.toml");
    fs::write(&path, "lookahead_days = 5\n").unwrap();

    sinaxar_cmd()
        .env("SINAXAR_CONFIG", &path)
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("lookahead_days = 5"));
}

#[test]
fn test_config_lookahead_drives_recommendations() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("config.toml");
    fs::write(&path, "lookahead_days = 5\n").unwrap();

    // Pentecost (2025-06-15) sits inside a 5-day window from 2025-06-12
    sinaxar_cmd()
        .env("SINAXAR_CONFIG", &path)
        .args(["recommend", "--from", "2025-06-12"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Israel"));

    // ...but outside a 2-day window from the same date
    fs::write(&path, "lookahead_days = 2\n").unwrap();
    sinaxar_cmd()
        .env("SINAXAR_CONFIG", &path)
        .args(["recommend", "--from", "2025-06-12"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No destinations to recommend"));
}

#[test]
fn test_canonical_names_style() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("config.toml");
    fs::write(&path, "names = \"canonical\"\n").unwrap();

    sinaxar_cmd()
        .env("SINAXAR_CONFIG", &path)
        .arg("2025-08-15")
        .assert()
        .success()
        .stdout(predicate::str::contains("Dormition of the Theotokos"));
}

#[test]
fn test_config_flag_overrides_env() {
    let temp = TempDir::new().unwrap();
    let env_path = temp.path().join("env.toml");
    let flag_path = temp.path().join("flag.toml");
    fs::write(&env_path, "lookahead_days = 5\n").unwrap();
    fs::write(&flag_path, "lookahead_days = 60\n").unwrap();

    sinaxar_cmd()
        .env("SINAXAR_CONFIG", &env_path)
        .args(["config", "--config"])
        .arg(&flag_path)
        .assert()
        .success()
        .stdout(predicate::str::contains("lookahead_days = 60"));
}

#[test]
fn test_missing_explicit_config_file() {
    let temp = TempDir::new().unwrap();

    sinaxar_cmd()
        .env("SINAXAR_CONFIG", temp.path().join("missing.toml"))
        .arg("config")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Config file not found"));
}

#[test]
fn test_malformed_config_file() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("config.toml");
    fs::write(&path, "lookahead_days = \"soon\"\n").unwrap();

    sinaxar_cmd()
        .env("SINAXAR_CONFIG", &path)
        .arg("config")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Failed to parse"))
        .stderr(predicate::str::contains("lookahead_days (integer)"));
}
