// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Simulation-level errors.
//!
//! Only startup can fail: bad configuration or the OS refusing a
//! thread. A worker panic is reported after the fact when the
//! lifecycle joins it. A missing semaphore signal is not detectable at
//! runtime; the scenario tests bound wall-clock time instead.

use thiserror::Error;

use crate::config::ConfigError;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),

    #[error("failed to spawn {role} thread {index}: {source}")]
    Spawn {
        role: &'static str,
        index: usize,
        #[source]
        source: std::io::Error,
    },

    #[error("{role} thread {index} panicked")]
    WorkerPanicked { role: &'static str, index: usize },
}
