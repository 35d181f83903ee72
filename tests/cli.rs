//
//  community-sdk
//  tests/cli.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! End-to-end checks of the `community` binary.

use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn community(config: &Path) -> Command {
    let mut cmd = Command::cargo_bin("community").unwrap();
    cmd.env("COMMUNITY_CONFIG", config)
        .env_remove("COMMUNITY_HOST")
        .env_remove("COMMUNITY_URL")
        .env_remove("COMMUNITY_USERNAME")
        .env_remove("COMMUNITY_PASSWORD")
        .env_remove("COMMUNITY_DEBUG");
    cmd
}

fn config_in(dir: &TempDir) -> std::path::PathBuf {
    dir.path().join("config.toml")
}

#[test]
fn test_help_lists_commands() {
    let dir = TempDir::new().unwrap();
    community(&config_in(&dir))
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("people"))
        .stdout(predicate::str::contains("search"));
}

#[test]
fn test_version() {
    let dir = TempDir::new().unwrap();
    community(&config_in(&dir))
        .arg("version")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("community version "));
}

#[test]
fn test_config_path_honours_env() {
    let dir = TempDir::new().unwrap();
    let path = config_in(&dir);
    community(&path)
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains(path.display().to_string()));
}

#[test]
fn test_set_host_becomes_default() {
    let dir = TempDir::new().unwrap();
    let path = config_in(&dir);

    community(&path)
        .args(["config", "set-host", "community.example.com", "--username", "jdoe"])
        .assert()
        .success();

    community(&path)
        .args(["config", "get", "default_host"])
        .assert()
        .success()
        .stdout("community.example.com\n");

    let written = std::fs::read_to_string(&path).unwrap();
    assert!(written.contains("https://community.example.com"));
    assert!(!written.contains("password"));
}

#[test]
fn test_invalid_output_format_is_rejected() {
    let dir = TempDir::new().unwrap();
    community(&config_in(&dir))
        .args(["config", "set", "output", "yaml"])
        .assert()
        .failure();
}

#[test]
fn test_missing_url_is_reported() {
    let dir = TempDir::new().unwrap();
    community(&config_in(&dir))
        .args(["people", "view", "me"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("No community URL configured"));
}

#[test]
fn test_bad_date_is_a_usage_error() {
    let dir = TempDir::new().unwrap();
    community(&config_in(&dir))
        .args(["activity", "list", "--after", "last tuesday"])
        .assert()
        .code(2);
}
