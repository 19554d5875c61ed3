// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! The simulation transcript.
//!
//! Every observable event is one line of the form
//! `<Actor> <id> [<Counterpart> <id>]: <event>` (empty brackets when
//! the event has no counterpart). Lines never interleave mid-message:
//! the stdout journal serializes writers behind one mutex, the
//! original's dedicated print lock.
//!
//! `Journal` is a seam so tests can capture the transcript instead of
//! printing it.

use std::fmt::Display;
use std::io::Write;
use std::sync::{Mutex, PoisonError};

/// Sink for transcript lines.
pub trait Journal: Send + Sync {
    fn record(&self, line: String);

    /// Formats and records one actor event with no counterpart.
    fn event(&self, actor: &dyn Display, what: &str) {
        self.record(format!("{actor} []: {what}"));
    }

    /// Formats and records one actor event naming a counterpart.
    fn event_with(&self, actor: &dyn Display, other: &dyn Display, what: &str) {
        self.record(format!("{actor} [{other}]: {what}"));
    }
}

/// Journal that writes to standard output behind a print mutex.
#[derive(Debug, Default)]
pub struct StdoutJournal {
    print_lock: Mutex<()>,
}

impl StdoutJournal {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Journal for StdoutJournal {
    fn record(&self, line: String) {
        let guard = self.print_lock.lock().unwrap_or_else(PoisonError::into_inner);
        let mut out = std::io::stdout().lock();
        let _ = writeln!(out, "{line}");
        drop(guard);
    }
}

/// Journal that keeps the transcript in memory for assertions.
#[derive(Debug, Default)]
pub struct MemoryJournal {
    lines: Mutex<Vec<String>>,
}

impl MemoryJournal {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> Vec<String> {
        self.lines
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl Journal for MemoryJournal {
    fn record(&self, line: String) {
        self.lines
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(line);
    }
}

/// Journal that discards everything (quiet runs).
#[derive(Debug, Default)]
pub struct NullJournal;

impl Journal for NullJournal {
    fn record(&self, _line: String) {}
}

#[cfg(test)]
#[path = "journal_tests.rs"]
mod tests;
