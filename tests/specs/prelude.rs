//! Shared helpers for lobby CLI specs.
//!
//! Wraps `assert_cmd` so specs read as one fluent chain:
//! `lobby().args(&[..]).passes().stdout_has(..)`.

use std::path::PathBuf;

use assert_cmd::assert::Assert;
use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

pub struct Lobby {
    cmd: Command,
}

pub fn lobby() -> Lobby {
    let cmd = Command::cargo_bin("lobby").expect("lobby binary built");
    Lobby { cmd }
}

impl Lobby {
    pub fn args(mut self, args: &[&str]) -> Self {
        self.cmd.args(args);
        self
    }

    pub fn passes(mut self) -> Spec {
        Spec(self.cmd.assert().success())
    }

    pub fn fails(mut self) -> Spec {
        Spec(self.cmd.assert().failure())
    }
}

pub struct Spec(Assert);

impl Spec {
    pub fn stdout_has(self, needle: &str) -> Self {
        Spec(self.0.stdout(predicate::str::contains(needle.to_owned())))
    }

    pub fn stdout_lacks(self, needle: &str) -> Self {
        Spec(self.0.stdout(predicate::str::contains(needle.to_owned()).not()))
    }

    pub fn stderr_has(self, needle: &str) -> Self {
        Spec(self.0.stderr(predicate::str::contains(needle.to_owned())))
    }
}

/// Scratch directory for config-file specs.
pub struct Workspace {
    dir: TempDir,
}

impl Workspace {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("create temp dir"),
        }
    }

    /// Writes `contents` as a config file and returns its path.
    pub fn config(&self, contents: &str) -> PathBuf {
        let path = self.dir.path().join("lobby.toml");
        std::fs::write(&path, contents).expect("write config file");
        path
    }
}

/// A config that finishes in well under a second.
pub const FAST_CONFIG: &str = r#"
tellers = 2
customers = 4
safe_work = { min = "0ms", max = "2ms" }
manager_consult = { min = "0ms", max = "2ms" }
arrival_spread = { min = "0ms", max = "2ms" }
seed = 7
"#;
