//! End-to-end tests for `devsync add`, `list`, and `delete` against a
//! conf file in a temp directory.

use assert_cmd::Command;
use devsync_core::SyncEntry;
use predicates::prelude::*;
use tempfile::TempDir;

fn devsync() -> Command {
    Command::cargo_bin("devsync").expect("devsync binary")
}

fn conf_in(dir: &TempDir) -> std::path::PathBuf {
    dir.path().join("lsyncd.conf.lua")
}

#[test]
fn add_then_list_json_roundtrip() {
    let tmp = TempDir::new().unwrap();
    let conf = conf_in(&tmp);

    devsync()
        .args(["add", "--conf"])
        .arg(&conf)
        .args([
            "--source",
            "/code/api",
            "--target",
            "dev:/srv/api",
            "--alias",
            "api",
            "--port",
            "2222",
            "--binary",
            "/opt/handler.sh",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Sync added successfully!"));

    let output = devsync()
        .args(["list", "--json", "--conf"])
        .arg(&conf)
        .output()
        .expect("list --json");
    assert!(output.status.success());

    let entries: Vec<SyncEntry> =
        serde_json::from_slice(&output.stdout).expect("valid JSON entry list");
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].alias.as_deref(), Some("api"));
    assert_eq!(entries[0].source, "/code/api");
    assert_eq!(entries[0].target, "dev:/srv/api");
    assert_eq!(entries[0].port, 2222);
    assert_eq!(entries[0].binary.as_deref(), Some("/opt/handler.sh"));
}

#[test]
fn add_dot_source_resolves_to_cwd() {
    let tmp = TempDir::new().unwrap();
    let workdir = TempDir::new().unwrap();
    let conf = conf_in(&tmp);

    devsync()
        .current_dir(workdir.path())
        .args(["add", "--conf"])
        .arg(&conf)
        .args(["--source", ".", "--target", "dev:/srv/x"])
        .assert()
        .success();

    let output = devsync()
        .args(["list", "--json", "--conf"])
        .arg(&conf)
        .output()
        .expect("list --json");
    let entries: Vec<SyncEntry> =
        serde_json::from_slice(&output.stdout).expect("valid JSON entry list");

    let expected = workdir
        .path()
        .canonicalize()
        .expect("canonicalize workdir");
    assert_eq!(entries[0].source, expected.to_string_lossy());
}

#[test]
fn add_preserves_existing_entries_in_order() {
    let tmp = TempDir::new().unwrap();
    let conf = conf_in(&tmp);

    for (alias, source) in [("a", "/1"), ("b", "/2"), ("e", "/3")] {
        devsync()
            .args(["add", "--conf"])
            .arg(&conf)
            .args(["--source", source, "--target", "h:/x", "--alias", alias])
            .assert()
            .success();
    }

    let output = devsync()
        .args(["list", "--json", "--conf"])
        .arg(&conf)
        .output()
        .expect("list --json");
    let entries: Vec<SyncEntry> =
        serde_json::from_slice(&output.stdout).expect("valid JSON entry list");
    let aliases: Vec<_> = entries.iter().map(|e| e.alias.as_deref()).collect();
    assert_eq!(aliases, vec![Some("a"), Some("b"), Some("e")]);
}

#[test]
fn list_on_missing_conf_reports_empty() {
    let tmp = TempDir::new().unwrap();
    devsync()
        .args(["list", "--conf"])
        .arg(conf_in(&tmp))
        .assert()
        .success()
        .stdout(predicate::str::contains("No sync entries found."));
}

#[test]
fn delete_by_alias_removes_every_match() {
    let tmp = TempDir::new().unwrap();
    let conf = conf_in(&tmp);

    for (alias, source) in [("a", "/1"), ("b", "/2"), ("a", "/3")] {
        devsync()
            .args(["add", "--conf"])
            .arg(&conf)
            .args(["--source", source, "--target", "h:/x", "--alias", alias])
            .assert()
            .success();
    }

    devsync()
        .args(["delete", "--alias", "a", "--conf"])
        .arg(&conf)
        .assert()
        .success()
        .stdout(predicate::str::contains("2 entry(ies) removed."));

    let output = devsync()
        .args(["list", "--json", "--conf"])
        .arg(&conf)
        .output()
        .expect("list --json");
    let entries: Vec<SyncEntry> =
        serde_json::from_slice(&output.stdout).expect("valid JSON entry list");
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].alias.as_deref(), Some("b"));
}

#[test]
fn delete_by_pair_leaves_non_matching_targets() {
    let tmp = TempDir::new().unwrap();
    let conf = conf_in(&tmp);

    for target in ["h:/y", "h:/z", "h:/y"] {
        devsync()
            .args(["add", "--conf"])
            .arg(&conf)
            .args(["--source", "/x", "--target", target])
            .assert()
            .success();
    }

    devsync()
        .args(["delete", "--source", "/x", "--target", "h:/y", "--conf"])
        .arg(&conf)
        .assert()
        .success()
        .stdout(predicate::str::contains("2 entry(ies) removed."));

    let output = devsync()
        .args(["list", "--json", "--conf"])
        .arg(&conf)
        .output()
        .expect("list --json");
    let entries: Vec<SyncEntry> =
        serde_json::from_slice(&output.stdout).expect("valid JSON entry list");
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].target, "h:/z");
}

#[test]
fn delete_with_zero_matches_is_soft_and_rewrites() {
    let tmp = TempDir::new().unwrap();
    let conf = conf_in(&tmp);

    devsync()
        .args(["delete", "--alias", "ghost", "--conf"])
        .arg(&conf)
        .assert()
        .success()
        .stdout(predicate::str::contains("No matching entry found to remove."));

    // Idempotent rewrite: the conf file now exists with just the settings
    // block.
    let doc = std::fs::read_to_string(&conf).expect("conf written");
    assert!(doc.starts_with("settings {"));
}
