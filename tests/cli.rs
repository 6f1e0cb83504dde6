// SPDX-FileCopyrightText: 2026 Sephyi <me@sephy.io>
//
// SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-Commercial

//! End-to-end runs of the `hecele` binary against a temporary word list.

use std::path::PathBuf;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

struct Sandbox {
    dir: TempDir,
}

impl Sandbox {
    fn new() -> Self {
        Self {
            dir: TempDir::new().unwrap(),
        }
    }

    fn words(&self) -> PathBuf {
        self.dir.path().join("words.json")
    }

    fn cmd(&self) -> Command {
        let mut cmd = Command::cargo_bin("hecele").unwrap();
        cmd.current_dir(self.dir.path())
            .env("HECELE_DATA_FILE", self.words())
            .env("XDG_CONFIG_HOME", self.dir.path().join("config"))
            .env("NO_COLOR", "1")
            .env_remove("RUST_LOG");
        cmd
    }
}

// ─── Read-only commands ──────────────────────────────────────────────────────

#[test]
fn split_prints_comma_separated_syllables() {
    let sb = Sandbox::new();
    sb.cmd()
        .args(["split", "kitap"])
        .assert()
        .success()
        .stdout("Ki,tap\n");
    assert!(!sb.words().exists());
}

#[test]
fn check_reports_inappropriate_word() {
    Sandbox::new()
        .cmd()
        .args(["check", "aptal"])
        .assert()
        .success()
        .stdout(predicate::str::contains("inappropriate"));
}

#[test]
fn config_shows_defaults() {
    Sandbox::new()
        .cmd()
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("random_count = 10"));
}

#[test]
fn completions_for_bash() {
    Sandbox::new()
        .cmd()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("hecele"));
}

// ─── Word list ───────────────────────────────────────────────────────────────

#[test]
fn first_run_lists_defaults() {
    let sb = Sandbox::new();
    sb.cmd()
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("1. Anne (An-ne)"))
        .stdout(predicate::str::contains("6. Defter (Def-ter)"));
    assert!(sb.words().exists());
}

#[test]
fn add_then_list() {
    let sb = Sandbox::new();
    sb.cmd().args(["add", "kalem"]).assert().success();
    sb.cmd()
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("7. kalem (Ka-lem)"));
}

#[test]
fn add_with_inappropriate_syllable_fails() {
    let sb = Sandbox::new();
    sb.cmd()
        .args(["add", "siktap", "-s", "sik,tap"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("inappropriate"));
    sb.cmd()
        .arg("list")
        .assert()
        .stdout(predicate::str::contains("siktap").not());
}

#[test]
fn add_phrase_stores_letters_only() {
    let sb = Sandbox::new();
    sb.cmd().args(["add", "iyi günler"]).assert().success();
    let text = std::fs::read_to_string(sb.words()).unwrap();
    assert!(text.contains(r#""text": "yi""#));
    assert!(!text.contains(r#""text": "yi ""#));
}

#[test]
fn mismatched_syllables_exit_with_rejection_status() {
    Sandbox::new()
        .cmd()
        .args(["add", "kitap", "-s", "ki,tep"])
        .assert()
        .code(2);
}

#[test]
fn delete_out_of_range_fails() {
    Sandbox::new()
        .cmd()
        .args(["delete", "99"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("No word at position 99"));
}

#[test]
fn delete_with_yes() {
    let sb = Sandbox::new();
    sb.cmd().args(["--yes", "delete", "1"]).assert().success();
    sb.cmd()
        .arg("list")
        .assert()
        .stdout(predicate::str::contains("1. Baba (Ba-ba)"));
}

#[test]
fn clear_without_terminal_is_aborted() {
    let sb = Sandbox::new();
    sb.cmd()
        .arg("clear")
        .assert()
        .success()
        .stderr(predicate::str::contains("Aborted."));
    sb.cmd()
        .arg("list")
        .assert()
        .stdout(predicate::str::contains("Anne"));
}

#[test]
fn random_with_count() {
    let sb = Sandbox::new();
    sb.cmd()
        .args(["-y", "random", "--count", "4"])
        .assert()
        .success()
        .stderr(predicate::str::contains("4 random words added"));
    let text = std::fs::read_to_string(sb.words()).unwrap();
    let words: Vec<serde_json::Value> = serde_json::from_str(&text).unwrap();
    assert_eq!(words.len(), 4);
}
