use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;

#[test]
fn test_help_shows_all_commands() {
    cargo_bin_cmd!("notas")
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("config"))
        .stdout(predicate::str::contains("--notifications"));
}

#[test]
fn test_config_help_shows_subcommands() {
    cargo_bin_cmd!("notas")
        .args(["config", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("path"))
        .stdout(predicate::str::contains("init"))
        .stdout(predicate::str::contains("notifications"));
}

#[test]
fn test_version_flag() {
    cargo_bin_cmd!("notas")
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("0.1"));
}

#[test]
fn test_unknown_notification_style_is_rejected() {
    cargo_bin_cmd!("notas")
        .args(["--notifications", "popup"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown style"));
}

#[test]
fn test_help_shows_log_filter_env() {
    cargo_bin_cmd!("notas")
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--log"))
        .stdout(predicate::str::contains("NOTAS_LOG"));
}

#[test]
fn test_invalid_log_filter_from_env_is_rejected() {
    let dir = tempfile::tempdir().unwrap();

    cargo_bin_cmd!("notas")
        .env("NOTAS_HOME", dir.path())
        .env("NOTAS_LOG", "notas=loud")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid log filter 'notas=loud'"));
}

#[test]
fn test_log_flag_overrides_env() {
    let dir = tempfile::tempdir().unwrap();

    cargo_bin_cmd!("notas")
        .env("NOTAS_HOME", dir.path())
        .env("NOTAS_LOG", "debug")
        .args(["--log", "notas=loud"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid log filter 'notas=loud'"));
}
