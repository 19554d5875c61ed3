// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Simulation configuration.
//!
//! Defaults reproduce the original floor: 3 tellers, 50 customers, a
//! two-slot safe, a two-slot door, and millisecond-scale simulated
//! work. `for_testing` shrinks everything so scenario tests run in
//! well under a second per run.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("at least one teller is required")]
    NoTellers,
    #[error("{gate} capacity must be at least 1")]
    ZeroCapacity { gate: &'static str },
    #[error("{name} delay range is inverted ({min:?} > {max:?})")]
    InvertedRange {
        name: &'static str,
        min: Duration,
        max: Duration,
    },
}

/// An inclusive min/max window for a simulated delay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DelayRange {
    #[serde(with = "humantime_serde")]
    pub min: Duration,
    #[serde(with = "humantime_serde")]
    pub max: Duration,
}

impl DelayRange {
    pub fn new(min: Duration, max: Duration) -> Self {
        Self { min, max }
    }

    pub const fn millis(min: u64, max: u64) -> Self {
        Self {
            min: Duration::from_millis(min),
            max: Duration::from_millis(max),
        }
    }
}

/// Startup constants for one simulation run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SimConfig {
    /// Long-lived teller workers.
    pub tellers: usize,
    /// Customers spawned for the run.
    pub customers: usize,
    /// Simultaneous tellers allowed in the safe.
    pub safe_capacity: usize,
    /// Simultaneous customers allowed through the door. Advisory only:
    /// the door is held just across the "entering" transcript line.
    pub door_capacity: usize,
    /// Time a teller spends inside the safe.
    pub safe_work: DelayRange,
    /// Time a teller spends consulting the manager for a withdrawal.
    pub manager_consult: DelayRange,
    /// Random stagger before each customer heads to the bank.
    pub arrival_spread: DelayRange,
    /// Seed for reproducible runs; `None` seeds from the OS.
    pub seed: Option<u64>,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            tellers: 3,
            customers: 50,
            safe_capacity: 2,
            door_capacity: 2,
            safe_work: DelayRange::millis(10, 50),
            manager_consult: DelayRange::millis(5, 30),
            arrival_spread: DelayRange::millis(0, 100),
            seed: None,
        }
    }
}

impl SimConfig {
    /// Config suitable for tests: small delays so a full run finishes
    /// in tens of milliseconds.
    pub fn for_testing() -> Self {
        Self {
            tellers: 3,
            customers: 10,
            safe_work: DelayRange::millis(0, 2),
            manager_consult: DelayRange::millis(0, 2),
            arrival_spread: DelayRange::millis(0, 2),
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.tellers == 0 {
            return Err(ConfigError::NoTellers);
        }
        if self.safe_capacity == 0 {
            return Err(ConfigError::ZeroCapacity { gate: "safe" });
        }
        if self.door_capacity == 0 {
            return Err(ConfigError::ZeroCapacity { gate: "door" });
        }
        for (name, range) in [
            ("safe_work", self.safe_work),
            ("manager_consult", self.manager_consult),
            ("arrival_spread", self.arrival_spread),
        ] {
            if range.min > range.max {
                return Err(ConfigError::InvertedRange {
                    name,
                    min: range.min,
                    max: range.max,
                });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
