//! These tests are for testing some invalid config-file-specific options.

use assert_cmd::prelude::*;
use predicates::prelude::*;

use crate::util::shoplist_command;

#[test]
fn test_toml_mismatch_type() {
    shoplist_command(&["-C", "./tests/invalid_configs/toml_mismatch_type.toml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid type"));
}

#[test]
fn test_unknown_key() {
    shoplist_command(&["-C", "./tests/invalid_configs/unknown_key.toml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown field"));
}

/// Checks for if a hex is valid
#[test]
fn test_invalid_colour_hex() {
    shoplist_command(&["-C", "./tests/invalid_configs/invalid_colour_hex.toml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid hex color"));
}

/// Checks for if a hex is too long
#[test]
fn test_invalid_colour_hex_2() {
    shoplist_command(&["-C", "./tests/invalid_configs/invalid_colour_hex_2.toml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid hex color"));
}

#[test]
fn test_invalid_colour_name() {
    shoplist_command(&["-C", "./tests/invalid_configs/invalid_colour_name.toml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid named color"));
}

#[test]
fn test_invalid_colour_rgb() {
    shoplist_command(&["-C", "./tests/invalid_configs/invalid_colour_rgb.toml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid RGB"));
}

#[test]
fn test_invalid_theme_in_config() {
    shoplist_command(&["-C", "./tests/invalid_configs/invalid_theme.toml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("'neon'"));
}

#[test]
fn test_config_location_is_directory() {
    shoplist_command(&["-C", "./tests/invalid_configs"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("is a directory"));
}
