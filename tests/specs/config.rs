//! Config file specs
//!
//! Verify TOML config loading and flag precedence.

use crate::prelude::*;

#[test]
fn config_file_drives_the_run() {
    let ws = Workspace::new();
    let path = ws.config(FAST_CONFIG);

    lobby()
        .args(&["--config", path.to_str().unwrap()])
        .passes()
        .stdout_has("Served 4 customers.");
}

#[test]
fn flags_override_the_config_file() {
    let ws = Workspace::new();
    let path = ws.config(FAST_CONFIG);

    lobby()
        .args(&["--config", path.to_str().unwrap(), "--customers", "2"])
        .passes()
        .stdout_has("Served 2 customers.");
}

#[test]
fn partial_config_files_fall_back_to_defaults() {
    let ws = Workspace::new();
    let path = ws.config("tellers = 4\ncustomers = 0\n");

    lobby()
        .args(&["--config", path.to_str().unwrap()])
        .passes()
        .stdout_has("Served 0 customers.");
}
