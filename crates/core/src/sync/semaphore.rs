// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Blocking counting semaphore.
//!
//! `wait` blocks while the count is zero, then decrements; `signal`
//! increments and lets exactly one waiter through. Waiters are granted
//! in strict arrival order: each `wait` takes a ticket and only the
//! front ticket may consume a unit. The baton-passing wakeup in the
//! customer protocol relies on that ordering.
//!
//! There is no timeout and no cancellation; a wait with no matching
//! signal blocks forever.

use std::collections::VecDeque;
use std::sync::{Condvar, Mutex, MutexGuard, PoisonError};

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SemaphoreError {
    /// `initialize` was called on a semaphore that already has a count.
    #[error("semaphore already initialized")]
    AlreadyInitialized,
}

/// A blocking counting semaphore with FIFO-fair waiters.
#[derive(Debug)]
pub struct Semaphore {
    state: Mutex<State>,
    signaled: Condvar,
}

#[derive(Debug)]
struct State {
    count: usize,
    initialized: bool,
    /// Next ticket to hand out to a waiter.
    next_ticket: u64,
    /// Tickets of blocked waiters, front first.
    waiters: VecDeque<u64>,
}

/// Recover the guard from a poisoned mutex.
///
/// Worker panics are surfaced by the lifecycle join; the semaphore
/// itself stays usable so the remaining threads can drain.
fn relock<'a, T>(
    result: Result<MutexGuard<'a, T>, PoisonError<MutexGuard<'a, T>>>,
) -> MutexGuard<'a, T> {
    result.unwrap_or_else(|e| e.into_inner())
}

impl Semaphore {
    /// Creates a semaphore with the given initial count.
    pub fn new(count: usize) -> Self {
        Self {
            state: Mutex::new(State {
                count,
                initialized: true,
                next_ticket: 0,
                waiters: VecDeque::new(),
            }),
            signaled: Condvar::new(),
        }
    }

    /// Creates a semaphore whose count is supplied later via [`initialize`].
    ///
    /// Waiting on an uninitialized semaphore blocks as if the count were
    /// zero.
    ///
    /// [`initialize`]: Semaphore::initialize
    pub fn uninitialized() -> Self {
        Self {
            state: Mutex::new(State {
                count: 0,
                initialized: false,
                next_ticket: 0,
                waiters: VecDeque::new(),
            }),
            signaled: Condvar::new(),
        }
    }

    /// Supplies the initial count for a deferred-init semaphore.
    ///
    /// Initializing twice is a logic error and leaves the semaphore
    /// untouched.
    pub fn initialize(&self, count: usize) -> Result<(), SemaphoreError> {
        let mut state = relock(self.state.lock());
        if state.initialized {
            return Err(SemaphoreError::AlreadyInitialized);
        }
        state.initialized = true;
        state.count = count;
        drop(state);
        self.signaled.notify_all();
        Ok(())
    }

    /// Blocks until the count is positive, then decrements it.
    pub fn wait(&self) {
        let mut state = relock(self.state.lock());
        let ticket = state.next_ticket;
        state.next_ticket = state.next_ticket.wrapping_add(1);
        state.waiters.push_back(ticket);
        // Only the front ticket may take a unit; everyone else re-sleeps.
        while state.count == 0 || state.waiters.front() != Some(&ticket) {
            state = relock(self.signaled.wait(state));
        }
        state.waiters.pop_front();
        state.count -= 1;
        drop(state);
        // A unit may remain for the next waiter in line.
        self.signaled.notify_all();
    }

    /// Increments the count and wakes one eligible waiter, if any.
    pub fn signal(&self) {
        let mut state = relock(self.state.lock());
        state.count = state.count.saturating_add(1);
        drop(state);
        // notify_all rather than notify_one: only the front ticket may
        // proceed, and notify_one could pick a non-front waiter.
        self.signaled.notify_all();
    }

    /// Current count. Diagnostics and tests only; the value is stale the
    /// moment the lock is released.
    pub fn available(&self) -> usize {
        relock(self.state.lock()).count
    }
}

#[cfg(test)]
#[path = "semaphore_tests.rs"]
mod tests;
