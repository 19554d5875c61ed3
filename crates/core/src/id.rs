// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Dense identities for the two actor kinds.
//!
//! Tellers and customers are numbered 0..N at spawn time; the newtypes
//! keep the two index spaces from being mixed up.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Identity of a long-lived teller worker (0..teller count).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TellerId(pub usize);

/// Identity of a short-lived customer worker (0..customer count).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CustomerId(pub usize);

impl TellerId {
    /// Index into per-teller storage (slots, handshake sets).
    pub fn index(self) -> usize {
        self.0
    }
}

impl CustomerId {
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for TellerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Teller {}", self.0)
    }
}

impl fmt::Display for CustomerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Customer {}", self.0)
    }
}

#[cfg(test)]
#[path = "id_tests.rs"]
mod tests;
