use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::process::Command;
use tempfile::tempdir;

#[test]
fn doctor_fails_when_config_missing() {
    let tmp = tempdir().unwrap();
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("mdg"));
    cmd.env("XDG_CONFIG_HOME", tmp.path()); // empty dir → no config
    cmd.arg("doctor");
    cmd.assert()
        .failure()
        .stdout(predicate::str::contains("FAIL mdgarden doctor"))
        .stdout(predicate::str::contains("looked for:"));
}

#[test]
fn doctor_fails_on_unknown_profile() {
    let tmp = tempdir().unwrap();
    let cfg = tmp.path().join("config.toml");
    std::fs::write(&cfg, "version = 1\n[profiles.default]\nvault_root = \"/tmp/v\"\n")
        .unwrap();

    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("mdg"));
    cmd.args(["doctor", "--config", cfg.to_str().unwrap(), "--profile", "nope"]);
    cmd.assert()
        .failure()
        .stdout(predicate::str::contains("profile 'nope' not found"));
}
