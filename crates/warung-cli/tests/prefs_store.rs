use std::fs;

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use tempfile::tempdir;

#[test]
fn test_prefs_path_command() {
    let dir = tempdir().unwrap();

    cargo_bin_cmd!("warung")
        .env("WARUNG_HOME", dir.path())
        .args(["prefs", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains("prefs.toml"));
}

#[test]
fn test_prefs_show_defaults_without_file() {
    let dir = tempdir().unwrap();

    cargo_bin_cmd!("warung")
        .env("WARUNG_HOME", dir.path())
        .args(["prefs", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("remember_me:  false"))
        .stdout(predicate::str::contains("is_logged_in: false"));
}

#[test]
fn test_prefs_show_never_prints_the_password() {
    let dir = tempdir().unwrap();
    fs::write(
        dir.path().join("prefs.toml"),
        "remember_me = true\nemail = \"budi@kampus.ac.id\"\npassword = \"rahasia1\"\nis_logged_in = true\nuser_role = \"BUYER\"\n",
    )
    .unwrap();

    cargo_bin_cmd!("warung")
        .env("WARUNG_HOME", dir.path())
        .args(["prefs", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("budi@kampus.ac.id"))
        .stdout(predicate::str::contains("(tersimpan)"))
        .stdout(predicate::str::contains("rahasia1").not());
}

#[test]
fn test_logout_without_remember_clears_credentials() {
    let dir = tempdir().unwrap();
    let prefs_path = dir.path().join("prefs.toml");
    fs::write(
        &prefs_path,
        "remember_me = false\nemail = \"budi@kampus.ac.id\"\npassword = \"rahasia1\"\nis_logged_in = true\n",
    )
    .unwrap();

    cargo_bin_cmd!("warung")
        .env("WARUNG_HOME", dir.path())
        .arg("logout")
        .assert()
        .success();

    let contents = fs::read_to_string(&prefs_path).unwrap();
    assert!(!contents.contains("budi@kampus.ac.id"));
    assert!(!contents.contains("rahasia1"));
    assert!(!contents.contains("is_logged_in = true"));
}

#[test]
fn test_logout_with_remember_keeps_credentials() {
    let dir = tempdir().unwrap();
    let prefs_path = dir.path().join("prefs.toml");
    fs::write(
        &prefs_path,
        "remember_me = true\nemail = \"budi@kampus.ac.id\"\npassword = \"rahasia1\"\nis_logged_in = true\n",
    )
    .unwrap();

    cargo_bin_cmd!("warung")
        .env("WARUNG_HOME", dir.path())
        .arg("logout")
        .assert()
        .success();

    let contents = fs::read_to_string(&prefs_path).unwrap();
    assert!(contents.contains("budi@kampus.ac.id"));
    assert!(contents.contains("is_logged_in = false"));
}

#[test]
fn test_prefs_clear_removes_the_file() {
    let dir = tempdir().unwrap();
    let prefs_path = dir.path().join("prefs.toml");
    fs::write(&prefs_path, "is_logged_in = true\n").unwrap();

    cargo_bin_cmd!("warung")
        .env("WARUNG_HOME", dir.path())
        .args(["prefs", "clear"])
        .assert()
        .success();

    assert!(!prefs_path.exists());
}
