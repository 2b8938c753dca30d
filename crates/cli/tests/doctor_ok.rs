use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::fs;
use std::path::PathBuf;
use std::process::Command;
use tempfile::tempdir;

fn write_file(path: &PathBuf, content: &str) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, content).unwrap();
}

#[test]
fn doctor_reads_provided_config_path() {
    let tmp = tempdir().unwrap();
    let cfg = tmp.path().join("config.toml");
    let toml = r#"
version = 1
profile = "default"

[profiles.default]
vault_root = "/tmp/v"
output_dir = "{{vault_root}}/dist"
base_url = "https://notes.example.com/"
excluded_folders = ["drafts"]
"#;
    write_file(&cfg, toml);

    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("mdg"));
    cmd.args(["doctor", "--config", cfg.to_str().unwrap()]);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("OK   mdgarden doctor"))
        .stdout(predicate::str::contains("profile: default"))
        .stdout(predicate::str::contains("vault_root: /tmp/v"))
        .stdout(predicate::str::contains("output_dir: /tmp/v/dist"))
        .stdout(predicate::str::contains("base_url: https://notes.example.com/"))
        .stdout(predicate::str::contains("excluded: drafts"));
}

#[test]
fn doctor_uses_xdg_default_when_present() {
    let tmp = tempdir().unwrap();
    let cfg_path = tmp.path().join("mdgarden").join("config.toml");
    write_file(
        &cfg_path,
        r#"
version = 1
profile = "default"
[profiles.default]
vault_root = "/tmp/v"
"#,
    );

    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("mdg"));
    cmd.env("XDG_CONFIG_HOME", tmp.path());
    cmd.arg("doctor");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("OK   mdgarden doctor"))
        .stdout(predicate::str::contains("vault_root: /tmp/v"));
}

#[test]
fn doctor_accepts_vault_without_config() {
    let tmp = tempdir().unwrap();
    let vault = tmp.path().join("notes");
    fs::create_dir_all(&vault).unwrap();

    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("mdg"));
    cmd.env("XDG_CONFIG_HOME", tmp.path().join("empty"));
    cmd.args(["doctor", "--vault", vault.to_str().unwrap()]);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("profile: cli"))
        .stdout(predicate::str::contains(format!("vault_root: {}", vault.display())));
}
