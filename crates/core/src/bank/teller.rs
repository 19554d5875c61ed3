// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Teller worker: one long-lived thread per teller.
//!
//! The loop is: become available (taking the line head if anyone is
//! waiting), rendezvous with the customer, ask for and receive the
//! transaction kind, execute it against the gates, complete the
//! done/leave handshake, count the service. The coordinator ends the
//! loop by writing `Assignment::ShuttingDown` and faking one arrival
//! rendezvous.

use tracing::debug;

use super::{Assignment, Bank, TxKind};
use crate::id::{CustomerId, TellerId};
use crate::journal::Journal;
use crate::pacing::Pacer;

pub(crate) fn run(bank: &Bank, id: TellerId, journal: &dyn Journal, pacer: &mut Pacer) {
    journal.event(&id, "ready to serve");
    // One-time startup event: the coordinator opens the bank once every
    // teller has signaled.
    bank.open.signal();

    loop {
        journal.event(&id, "waiting for a customer");
        let hs = bank.handshake(id);

        let popped = {
            let mut floor = bank.floor();
            floor.make_available(id)
        };

        let customer = match popped {
            Some(customer) => {
                // Serve-from-queue path. The popped customer is blocked
                // on the global availability signal; post one so it can
                // re-derive the assignment from the floor state.
                bank.teller_available.signal();
                hs.teller_ready.signal();
                // The customer must still rendezvous before any other
                // per-teller semaphore is touched.
                hs.customer_ready.wait();
                customer
            }
            None => {
                // Await-direct path: publish availability, then park
                // until a customer (or the shutdown broadcast) arrives.
                bank.teller_available.signal();
                hs.teller_ready.wait();
                hs.customer_ready.wait();
                let floor = bank.floor();
                match floor.slots[id.index()].assignment {
                    Assignment::ShuttingDown => break,
                    Assignment::Assigned(customer) => customer,
                    Assignment::Unassigned => {
                        // The arrival rendezvous completed, so whoever
                        // signaled has already written the slot.
                        unreachable!("arrival rendezvous completed without an assignment")
                    }
                }
            }
        };

        serve(bank, id, customer, journal, pacer);

        // Completion rendezvous, then count the service under its own
        // lock.
        journal.event_with(&id, &customer, "wait for customer to leave.");
        hs.transaction_done.signal();
        hs.customer_leave.wait();
        bank.record_served();
    }

    debug!(teller = id.index(), "teller shutting down");
    journal.event(&id, "leaving for the day");
}

fn serve(
    bank: &Bank,
    id: TellerId,
    customer: CustomerId,
    journal: &dyn Journal,
    pacer: &mut Pacer,
) {
    let hs = bank.handshake(id);

    journal.event_with(&id, &customer, "serving a customer");
    journal.event_with(&id, &customer, "asks for transaction");
    hs.ask_transaction.signal();
    hs.tell_transaction.wait();

    let kind = {
        let mut floor = bank.floor();
        match floor.slots[id.index()].declared.take() {
            Some(kind) => kind,
            // tell_transaction is signaled strictly after the customer
            // writes the slot.
            None => unreachable!("transaction declared without a kind"),
        }
    };

    match kind {
        TxKind::Deposit => {
            journal.event_with(&id, &customer, "handling deposit transaction");
            visit_safe(bank, id, customer, journal, pacer);
            journal.event_with(&id, &customer, "finishes deposit transaction.");
        }
        TxKind::Withdrawal => {
            journal.event_with(&id, &customer, "handling withdrawal transaction");
            journal.event_with(&id, &customer, "going to the manager");
            let permission = bank.manager().acquire();
            journal.event_with(&id, &customer, "getting manager's permission");
            pacer.manager_consult();
            journal.event_with(&id, &customer, "got manager's permission");
            drop(permission);
            visit_safe(bank, id, customer, journal, pacer);
            journal.event_with(&id, &customer, "finishes withdrawal transaction.");
        }
    }
}

fn visit_safe(
    bank: &Bank,
    id: TellerId,
    customer: CustomerId,
    journal: &dyn Journal,
    pacer: &mut Pacer,
) {
    journal.event_with(&id, &customer, "going to safe");
    let slot = bank.safe().acquire();
    journal.event_with(&id, &customer, "enter safe");
    pacer.safe_work();
    journal.event_with(&id, &customer, "leaving safe");
    drop(slot);
}
