// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Simulation driver: spawns the teller and customer threads, waits for
//! the day to finish, and broadcasts shutdown to the tellers.

use std::sync::Arc;
use std::thread::{self, JoinHandle};

use tracing::{debug, info};

use crate::bank::{customer, teller, Bank};
use crate::config::SimConfig;
use crate::error::SimError;
use crate::id::{CustomerId, TellerId};
use crate::journal::{Journal, StdoutJournal};
use crate::pacing::Pacer;

/// Gate occupancy and service totals observed over one simulated day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunReport {
    pub customers_served: usize,
    pub safe_high_water: usize,
    pub manager_high_water: usize,
    pub door_high_water: usize,
}

/// One configured bank day, ready to run.
///
/// Owns the config and the journal; [`run`](Simulation::run) consumes the
/// simulation and blocks until every worker thread has exited.
pub struct Simulation {
    config: SimConfig,
    journal: Arc<dyn Journal>,
}

impl Simulation {
    pub fn new(config: SimConfig) -> Self {
        Self { config, journal: Arc::new(StdoutJournal::new()) }
    }

    /// Replaces the default stdout journal, e.g. with a
    /// [`MemoryJournal`](crate::journal::MemoryJournal) in tests.
    #[must_use]
    pub fn with_journal(mut self, journal: Arc<dyn Journal>) -> Self {
        self.journal = journal;
        self
    }

    /// Runs the full day: open, serve every customer, close.
    ///
    /// Tellers are spawned first and the doors stay shut until each one
    /// has signalled readiness, so no customer can observe a bank with
    /// absent tellers. Returns once all threads have been joined.
    pub fn run(self) -> Result<RunReport, SimError> {
        self.config.validate()?;
        let config = self.config;
        let journal = self.journal;
        let bank = Arc::new(Bank::new(&config));

        info!(
            tellers = config.tellers,
            customers = config.customers,
            "bank opening"
        );

        let mut teller_handles = Vec::with_capacity(config.tellers);
        for index in 0..config.tellers {
            match spawn_teller(&bank, &journal, &config, index) {
                Ok(handle) => teller_handles.push(handle),
                Err(err) => {
                    broadcast_shutdown(&bank);
                    let _ = join_all(teller_handles, "teller");
                    return Err(err);
                }
            }
        }

        // Startup barrier: one readiness signal per teller.
        for _ in 0..config.tellers {
            bank.open.wait();
        }
        debug!("all tellers ready, opening the doors");

        let mut customer_handles = Vec::with_capacity(config.customers);
        let mut spawn_failure = None;
        for index in 0..config.customers {
            match spawn_customer(&bank, &journal, &config, index) {
                Ok(handle) => customer_handles.push(handle),
                Err(err) => {
                    spawn_failure = Some(err);
                    break;
                }
            }
        }

        let customer_result = join_all(customer_handles, "customer");
        debug!("all customers have left, closing");

        broadcast_shutdown(&bank);
        let teller_result = join_all(teller_handles, "teller");

        journal.record("The bank closes for the day.".to_string());

        if let Some(err) = spawn_failure {
            return Err(err);
        }
        customer_result?;
        teller_result?;

        let report = RunReport {
            customers_served: bank.customers_served(),
            safe_high_water: bank.safe().high_water(),
            manager_high_water: bank.manager().high_water(),
            door_high_water: bank.door().high_water(),
        };
        info!(served = report.customers_served, "bank closed");
        Ok(report)
    }
}

fn spawn_teller(
    bank: &Arc<Bank>,
    journal: &Arc<dyn Journal>,
    config: &SimConfig,
    index: usize,
) -> Result<JoinHandle<()>, SimError> {
    let bank = Arc::clone(bank);
    let journal = Arc::clone(journal);
    let config = config.clone();
    thread::Builder::new()
        .name(format!("teller-{index}"))
        .spawn(move || {
            let mut pacer = Pacer::for_worker(&config, index as u64);
            teller::run(&bank, TellerId(index), journal.as_ref(), &mut pacer);
        })
        .map_err(|source| SimError::Spawn { role: "teller", index, source })
}

fn spawn_customer(
    bank: &Arc<Bank>,
    journal: &Arc<dyn Journal>,
    config: &SimConfig,
    index: usize,
) -> Result<JoinHandle<()>, SimError> {
    let bank = Arc::clone(bank);
    let journal = Arc::clone(journal);
    let config = config.clone();
    // Customer rng streams follow the teller streams.
    let stream = (config.tellers + index) as u64;
    thread::Builder::new()
        .name(format!("customer-{index}"))
        .spawn(move || {
            let mut pacer = Pacer::for_worker(&config, stream);
            customer::run(&bank, CustomerId(index), journal.as_ref(), &mut pacer);
        })
        .map_err(|source| SimError::Spawn { role: "customer", index, source })
}

/// Marks every teller slot as shutting down and wakes each teller out of
/// whichever handshake wait it is parked in.
fn broadcast_shutdown(bank: &Bank) {
    bank.floor().close_all();
    for handshake in bank.handshakes() {
        handshake.teller_ready.signal();
        handshake.customer_ready.signal();
    }
}

fn join_all(handles: Vec<JoinHandle<()>>, role: &'static str) -> Result<(), SimError> {
    let mut first_panic = None;
    for (index, handle) in handles.into_iter().enumerate() {
        if handle.join().is_err() && first_panic.is_none() {
            first_panic = Some(SimError::WorkerPanicked { role, index });
        }
    }
    first_panic.map_or(Ok(()), Err)
}

#[cfg(test)]
#[path = "lifecycle_tests.rs"]
mod tests;
