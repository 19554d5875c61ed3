// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Customer worker: one short-lived thread per customer.
//!
//! Arrive, pass the (advisory) door, obtain a teller, run the
//! handshake, declare the transaction, wait for completion, leave.
//!
//! Obtaining a teller is the delicate part. A customer that finds an
//! idle teller claims it directly; otherwise it joins the wait line
//! and blocks on the global availability signal. The signal does not
//! say which teller woke it, so the woken customer re-derives the
//! teller from the floor state: first a slot already assigned to it
//! (a teller pulled it off the line), else any available slot. On a
//! miss it passes the signal on and re-blocks; availability signals
//! are posted exactly once per event and consumed exactly once, so
//! nothing is ever stranded (see DESIGN.md).

use tracing::trace;

use super::{Bank, TxKind};
use crate::id::{CustomerId, TellerId};
use crate::journal::Journal;
use crate::pacing::Pacer;

pub(crate) fn run(bank: &Bank, id: CustomerId, journal: &dyn Journal, pacer: &mut Pacer) {
    let kind = if pacer.coin() {
        TxKind::Deposit
    } else {
        TxKind::Withdrawal
    };
    journal.event(&id, &format!("wants to perform a {kind} transaction"));

    pacer.arrival_delay();
    journal.event(&id, "going to bank.");

    // The door gate is held only across the "entering" line; it never
    // bounds how long the customer stays inside.
    {
        let _entry = bank.door().acquire();
        journal.event(&id, "entering bank.");
    }

    journal.event(&id, "getting in line.");
    let teller = obtain_teller(bank, id);

    journal.event(&id, "selecting a teller.");
    journal.event_with(&id, &teller, "selects teller");
    journal.event_with(&id, &teller, "introduces itself");

    // Arrival rendezvous: the teller proceeds only once both are
    // signaled, whichever path assigned it.
    let hs = bank.handshake(teller);
    hs.teller_ready.signal();
    hs.customer_ready.signal();

    hs.ask_transaction.wait();
    journal.event_with(&id, &teller, &format!("asks for {kind} transaction"));
    {
        let mut floor = bank.floor();
        floor.slots[teller.index()].declared = Some(kind);
    }
    hs.tell_transaction.signal();

    hs.transaction_done.wait();
    journal.event_with(&id, &teller, "leaves teller");
    hs.customer_leave.signal();

    journal.event(&id, "goes to door");
    journal.event(&id, "leaves the bank");
}

fn obtain_teller(bank: &Bank, id: CustomerId) -> TellerId {
    let claimed = {
        let mut floor = bank.floor();
        match floor.claim_available(id) {
            Some(teller) => Some(teller),
            None => {
                floor.line.push_back(id);
                None
            }
        }
    };

    if let Some(teller) = claimed {
        // Direct assignment. The claimed teller posted one availability
        // signal when it went idle; absorb it so posted signals and
        // consumers stay in one-to-one balance.
        bank.teller_available.wait();
        return teller;
    }

    loop {
        bank.teller_available.wait();
        {
            let mut floor = bank.floor();
            if let Some(teller) = floor.find_assigned(id) {
                return teller;
            }
            if let Some(teller) = floor.claim_available(id) {
                floor.remove_from_line(id);
                return teller;
            }
        }
        // The signal was meant for someone else still blocked behind
        // us; pass it on before re-blocking. The semaphore's FIFO
        // grant order moves the baton forward, never in a cycle.
        trace!(customer = id.index(), "availability signal missed, re-posting");
        bank.teller_available.signal();
    }
}
