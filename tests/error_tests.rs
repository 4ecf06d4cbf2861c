//! Error scenario integration tests

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn notificator_bin(config_home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("notificator").expect("binary should build");
    cmd.env("HOME", config_home.path())
        .env("XDG_CONFIG_HOME", config_home.path())
        .env_remove("SLACK_WEBHOOK_URL")
        .env_remove("DISCORD_WEBHOOK_URL")
        .env_remove("LINE_NOTIFY_TOKEN");
    cmd
}

#[test]
fn slack_without_url_is_a_usage_error() {
    let home = TempDir::new().unwrap();
    notificator_bin(&home)
        .args(["slack", "-m", "Hi"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Missing Slack webhook URL"));
}

#[test]
fn discord_without_url_is_a_usage_error() {
    let home = TempDir::new().unwrap();
    notificator_bin(&home)
        .arg("discord")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("DISCORD_WEBHOOK_URL"));
}

#[test]
fn line_without_token_is_a_usage_error() {
    let home = TempDir::new().unwrap();
    notificator_bin(&home)
        .arg("line")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("LINE Notify token"));
}

#[test]
fn non_numeric_times_is_rejected() {
    let home = TempDir::new().unwrap();
    notificator_bin(&home)
        .args(["beep", "--times", "abc"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid value"));
}

#[test]
fn unknown_subcommand_is_rejected() {
    let home = TempDir::new().unwrap();
    notificator_bin(&home).arg("pager").assert().failure();
}

#[test]
fn config_get_unknown_key() {
    let home = TempDir::new().unwrap();
    notificator_bin(&home)
        .args(["config", "get", "unknown_key"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Unknown key"));
}

#[test]
fn config_set_invalid_times() {
    let home = TempDir::new().unwrap();
    notificator_bin(&home)
        .args(["config", "set", "beep.times", "many"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("integer"));
}

#[test]
fn config_set_invalid_boolean() {
    let home = TempDir::new().unwrap();
    notificator_bin(&home)
        .args(["config", "set", "desktop.sound", "maybe"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("true").or(predicate::str::contains("false")));
}

#[test]
fn config_init_twice_fails() {
    let home = TempDir::new().unwrap();
    notificator_bin(&home).args(["config", "init"]).assert().success();
    notificator_bin(&home)
        .args(["config", "init"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));
}

#[test]
fn malformed_config_file_does_not_block_usage_errors() {
    let home = TempDir::new().unwrap();
    let dir = home.path().join("notificator");
    std::fs::create_dir_all(&dir).unwrap();
    std::fs::write(dir.join("config.toml"), "this is = = not toml").unwrap();

    notificator_bin(&home)
        .args(["slack", "-m", "Hi"])
        .assert()
        .code(2);
}
