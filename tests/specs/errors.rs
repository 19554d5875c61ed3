//! CLI error specs
//!
//! Verify bad configuration is rejected up front with a clear message.

use crate::prelude::*;

#[test]
fn zero_tellers_is_rejected() {
    lobby()
        .args(&["--tellers", "0", "--customers", "0"])
        .fails()
        .stderr_has("at least one teller is required");
}

#[test]
fn zero_safe_capacity_is_rejected() {
    lobby()
        .args(&["--safe-capacity", "0", "--customers", "0"])
        .fails()
        .stderr_has("safe capacity must be at least 1");
}

#[test]
fn zero_door_capacity_is_rejected() {
    lobby()
        .args(&["--door-capacity", "0", "--customers", "0"])
        .fails()
        .stderr_has("door capacity must be at least 1");
}

#[test]
fn missing_config_file_is_reported() {
    lobby()
        .args(&["--config", "/nonexistent/lobby.toml"])
        .fails()
        .stderr_has("reading config file");
}

#[test]
fn malformed_config_file_is_reported() {
    let ws = Workspace::new();
    let path = ws.config("tellers = \"three\"\n");

    lobby()
        .args(&["--config", path.to_str().unwrap()])
        .fails()
        .stderr_has("parsing config file");
}

#[test]
fn unknown_config_keys_are_rejected() {
    let ws = Workspace::new();
    let path = ws.config("tellres = 3\n");

    lobby()
        .args(&["--config", path.to_str().unwrap()])
        .fails()
        .stderr_has("parsing config file");
}
