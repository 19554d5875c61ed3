// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used, clippy::expect_used)]

use super::*;
use crate::id::{CustomerId, TellerId};

#[test]
fn event_formats_counterpart_brackets() {
    let journal = MemoryJournal::new();
    journal.event_with(&TellerId(0), &CustomerId(7), "serving a customer");
    journal.event(&CustomerId(7), "going to bank.");

    assert_eq!(
        journal.lines(),
        vec![
            "Teller 0 [Customer 7]: serving a customer".to_string(),
            "Customer 7 []: going to bank.".to_string(),
        ]
    );
}

#[test]
fn null_journal_discards() {
    let journal = NullJournal;
    journal.event(&TellerId(0), "ready to serve");
}

#[test]
fn memory_journal_is_shared_across_threads() {
    use std::sync::Arc;
    use std::thread;

    let journal = Arc::new(MemoryJournal::new());
    let handles: Vec<_> = (0..4)
        .map(|i| {
            let journal = Arc::clone(&journal);
            thread::spawn(move || journal.record(format!("line {i}")))
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }
    assert_eq!(journal.lines().len(), 4);
}
