// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Capacity-bounded resource gate.
//!
//! A gate bounds how many threads occupy a physical resource (the safe,
//! the manager, the door) at once. `acquire` blocks on the inner
//! semaphore and returns a guard that releases on drop. Occupancy is
//! instrumented with a high-water mark so tests and the run report can
//! check the bound was honored.

use std::sync::atomic::{AtomicUsize, Ordering};

use super::Semaphore;

/// A named, capacity-bounded resource.
#[derive(Debug)]
pub struct Gate {
    name: &'static str,
    capacity: usize,
    sem: Semaphore,
    in_use: AtomicUsize,
    high_water: AtomicUsize,
}

impl Gate {
    pub fn new(name: &'static str, capacity: usize) -> Self {
        Self {
            name,
            capacity,
            sem: Semaphore::new(capacity),
            in_use: AtomicUsize::new(0),
            high_water: AtomicUsize::new(0),
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Blocks until an occupancy slot is free, then takes it.
    pub fn acquire(&self) -> GateGuard<'_> {
        self.sem.wait();
        let now = self.in_use.fetch_add(1, Ordering::SeqCst) + 1;
        self.high_water.fetch_max(now, Ordering::SeqCst);
        GateGuard { gate: self }
    }

    /// Threads currently inside the gate.
    pub fn in_use(&self) -> usize {
        self.in_use.load(Ordering::SeqCst)
    }

    /// Peak simultaneous occupancy observed over the gate's lifetime.
    pub fn high_water(&self) -> usize {
        self.high_water.load(Ordering::SeqCst)
    }
}

/// Occupancy slot held in a [`Gate`]; released on drop.
#[must_use = "dropping the guard immediately releases the slot"]
#[derive(Debug)]
pub struct GateGuard<'a> {
    gate: &'a Gate,
}

impl Drop for GateGuard<'_> {
    fn drop(&mut self) {
        self.gate.in_use.fetch_sub(1, Ordering::SeqCst);
        self.gate.sem.signal();
    }
}

#[cfg(test)]
#[path = "gate_tests.rs"]
mod tests;
