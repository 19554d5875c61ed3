// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Low-level blocking synchronization primitives
//!
//! This module provides:
//! - **Semaphore** - Blocking FIFO counting semaphore
//! - **Gate** - Capacity-bounded resource with occupancy instrumentation

pub mod gate;
pub mod semaphore;

pub use gate::{Gate, GateGuard};
pub use semaphore::{Semaphore, SemaphoreError};
