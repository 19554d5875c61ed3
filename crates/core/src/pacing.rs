// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Simulated-work delays.
//!
//! Each worker thread owns a `Pacer`: a seedable RNG plus the
//! configured delay windows. With a config seed, worker `k` gets
//! `StdRng::seed_from_u64(seed + k)` so runs are reproducible while
//! threads still diverge from each other.

use std::time::Duration;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::config::{DelayRange, SimConfig};

pub struct Pacer {
    rng: StdRng,
    safe_work: DelayRange,
    manager_consult: DelayRange,
    arrival_spread: DelayRange,
}

impl Pacer {
    /// Pacer for worker `stream` (tellers and customers draw from
    /// disjoint streams).
    pub fn for_worker(config: &SimConfig, stream: u64) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed.wrapping_add(stream)),
            None => StdRng::from_entropy(),
        };
        Self {
            rng,
            safe_work: config.safe_work,
            manager_consult: config.manager_consult,
            arrival_spread: config.arrival_spread,
        }
    }

    fn sample(&mut self, range: DelayRange) -> Duration {
        if range.min >= range.max {
            return range.min;
        }
        let span = range.max - range.min;
        let offset = self.rng.gen_range(0..=span.as_millis() as u64);
        range.min + Duration::from_millis(offset)
    }

    /// Time inside the safe for one transaction.
    pub fn safe_work(&mut self) {
        std::thread::sleep(self.sample(self.safe_work));
    }

    /// Time consulting the manager for a withdrawal.
    pub fn manager_consult(&mut self) {
        std::thread::sleep(self.sample(self.manager_consult));
    }

    /// Stagger before a customer heads to the bank.
    pub fn arrival_delay(&mut self) {
        std::thread::sleep(self.sample(self.arrival_spread));
    }

    /// Uniform coin flip for the transaction kind.
    pub fn coin(&mut self) -> bool {
        self.rng.gen_bool(0.5)
    }
}

#[cfg(test)]
#[path = "pacing_tests.rs"]
mod tests;
