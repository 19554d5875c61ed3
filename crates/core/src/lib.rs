// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! lobby-core: bank-floor concurrency simulation library
//!
//! This crate provides:
//! - Blocking counting semaphores and capacity gates built on them
//! - The shared bank floor state (teller slots, wait line, handshakes)
//! - Teller and customer worker protocols
//! - The simulation lifecycle: startup barrier, shutdown broadcast
//! - A journal seam for the human-readable transcript

pub mod config;
pub mod id;
pub mod journal;
pub mod pacing;

pub mod bank;
pub mod error;
pub mod sync;

// Re-exports
pub use bank::{Assignment, Bank, RunReport, Simulation, TxKind};
pub use config::{ConfigError, DelayRange, SimConfig};
pub use error::SimError;
pub use id::{CustomerId, TellerId};
pub use journal::{Journal, MemoryJournal, NullJournal, StdoutJournal};
pub use sync::{Gate, GateGuard, Semaphore, SemaphoreError};
