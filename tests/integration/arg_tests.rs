//! These tests are mostly here just to ensure that invalid results will be
//! caught when passing arguments.

use assert_cmd::prelude::*;
use predicates::prelude::*;

use crate::util::shoplist_command;

#[test]
fn test_help() {
    shoplist_command(&["--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--config_location"))
        .stdout(predicate::str::contains("--disable_click"))
        .stdout(predicate::str::contains("--no_write"));
}

#[test]
fn test_kebab_case_flags_are_rejected() {
    shoplist_command(&["--disable-click"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unexpected argument '--disable-click'"));
}

#[test]
fn test_short_help() {
    shoplist_command(&["-h"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage: shoplist [OPTIONS]"));
}

#[test]
fn test_version() {
    shoplist_command(&["-V"])
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_invalid_theme() {
    shoplist_command(&["--theme", "pink"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid value 'pink'"));
}

#[test]
fn test_missing_config_location() {
    shoplist_command(&["-C"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("a value is required"));
}

#[test]
fn test_unknown_argument() {
    shoplist_command(&["--quantity", "2"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unexpected argument"));
}
