// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Shared bank-floor state and the worker protocols.
//!
//! Everything the threads share lives here: the teller slots and wait
//! line behind one coarse mutex, the served counter behind its own
//! mutex, the per-teller handshake semaphore sets, and the resource
//! gates. The teller and customer protocols are in the submodules; the
//! lifecycle spawns and joins them.

pub(crate) mod customer;
pub mod lifecycle;
pub(crate) mod teller;

use std::collections::VecDeque;
use std::fmt;
use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::config::SimConfig;
use crate::id::{CustomerId, TellerId};
use crate::sync::{Gate, Semaphore};

/// The two transaction kinds a customer can declare.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TxKind {
    Deposit,
    Withdrawal,
}

impl fmt::Display for TxKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Deposit => write!(f, "deposit"),
            Self::Withdrawal => write!(f, "withdrawal"),
        }
    }
}

/// What a teller's assignment slot holds.
///
/// The original encoded "shut down now" as customer id -1, overloading
/// the "no customer" sentinel; the three states keep those apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Assignment {
    /// No customer has ever been assigned.
    Unassigned,
    /// Customer currently (or most recently) at this teller's window.
    /// The slot is not cleared after service; `available` says whether
    /// the teller is serving.
    Assigned(CustomerId),
    /// Coordinator broadcast: finish up and leave.
    ShuttingDown,
}

/// Per-teller view the floor mutex guards.
#[derive(Debug)]
pub(crate) struct TellerSlot {
    pub available: bool,
    pub assignment: Assignment,
    pub declared: Option<TxKind>,
}

/// Everything guarded by the single coarse floor mutex.
#[derive(Debug)]
pub(crate) struct FloorState {
    pub slots: Vec<TellerSlot>,
    /// Customers with no teller yet, oldest first.
    pub line: VecDeque<CustomerId>,
}

impl FloorState {
    fn new(tellers: usize) -> Self {
        Self {
            slots: (0..tellers)
                .map(|_| TellerSlot {
                    available: false,
                    assignment: Assignment::Unassigned,
                    declared: None,
                })
                .collect(),
            line: VecDeque::new(),
        }
    }

    /// Teller side: mark the teller available, then immediately take
    /// the line head if anyone is waiting (FIFO).
    pub fn make_available(&mut self, teller: TellerId) -> Option<CustomerId> {
        self.slots[teller.index()].available = true;
        let customer = self.line.pop_front()?;
        let slot = &mut self.slots[teller.index()];
        slot.available = false;
        slot.assignment = Assignment::Assigned(customer);
        Some(customer)
    }

    /// Customer side: claim the lowest-indexed available teller.
    pub fn claim_available(&mut self, customer: CustomerId) -> Option<TellerId> {
        let index = self.slots.iter().position(|slot| slot.available)?;
        let slot = &mut self.slots[index];
        slot.available = false;
        slot.assignment = Assignment::Assigned(customer);
        Some(TellerId(index))
    }

    /// Customer side: the teller that pulled this customer off the
    /// line, if any.
    pub fn find_assigned(&self, customer: CustomerId) -> Option<TellerId> {
        self.slots
            .iter()
            .position(|slot| slot.assignment == Assignment::Assigned(customer) && !slot.available)
            .map(TellerId)
    }

    pub fn remove_from_line(&mut self, customer: CustomerId) {
        self.line.retain(|&waiting| waiting != customer);
    }

    /// Coordinator: broadcast the shutdown state to every slot.
    pub fn close_all(&mut self) {
        for slot in &mut self.slots {
            slot.available = true;
            slot.assignment = Assignment::ShuttingDown;
        }
    }
}

/// The six-semaphore handshake set owned per teller, all starting at 0.
#[derive(Debug)]
pub(crate) struct Handshake {
    pub teller_ready: Semaphore,
    pub customer_ready: Semaphore,
    pub ask_transaction: Semaphore,
    pub tell_transaction: Semaphore,
    pub transaction_done: Semaphore,
    pub customer_leave: Semaphore,
}

impl Handshake {
    fn new() -> Self {
        Self {
            teller_ready: Semaphore::new(0),
            customer_ready: Semaphore::new(0),
            ask_transaction: Semaphore::new(0),
            tell_transaction: Semaphore::new(0),
            transaction_done: Semaphore::new(0),
            customer_leave: Semaphore::new(0),
        }
    }
}

/// State shared by every thread for the run's duration.
#[derive(Debug)]
pub struct Bank {
    floor: Mutex<FloorState>,
    /// Completed transactions; its own mutex, independent of the floor.
    served: Mutex<usize>,
    /// Tellers signal once each at startup; the coordinator collects
    /// them before any customer is spawned.
    pub(crate) open: Semaphore,
    /// Global availability signal queued customers block on.
    pub(crate) teller_available: Semaphore,
    handshakes: Vec<Handshake>,
    safe: Gate,
    manager: Gate,
    door: Gate,
}

impl Bank {
    pub fn new(config: &SimConfig) -> Self {
        Self {
            floor: Mutex::new(FloorState::new(config.tellers)),
            served: Mutex::new(0),
            open: Semaphore::new(0),
            teller_available: Semaphore::new(0),
            handshakes: (0..config.tellers).map(|_| Handshake::new()).collect(),
            safe: Gate::new("safe", config.safe_capacity),
            manager: Gate::new("manager", 1),
            door: Gate::new("door", config.door_capacity),
        }
    }

    pub(crate) fn floor(&self) -> MutexGuard<'_, FloorState> {
        self.floor.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub(crate) fn handshake(&self, teller: TellerId) -> &Handshake {
        &self.handshakes[teller.index()]
    }

    pub(crate) fn handshakes(&self) -> &[Handshake] {
        &self.handshakes
    }

    pub(crate) fn record_served(&self) {
        *self.served.lock().unwrap_or_else(PoisonError::into_inner) += 1;
    }

    /// Transactions completed so far.
    pub fn customers_served(&self) -> usize {
        *self.served.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn safe(&self) -> &Gate {
        &self.safe
    }

    pub fn manager(&self) -> &Gate {
        &self.manager
    }

    pub fn door(&self) -> &Gate {
        &self.door
    }
}

pub use lifecycle::{RunReport, Simulation};
