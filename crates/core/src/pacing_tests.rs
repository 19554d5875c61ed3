// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used, clippy::expect_used)]

use std::time::Duration;

use super::*;
use crate::config::DelayRange;

fn seeded(seed: u64) -> Pacer {
    let config = SimConfig {
        seed: Some(seed),
        ..SimConfig::for_testing()
    };
    Pacer::for_worker(&config, 0)
}

#[test]
fn sample_stays_inside_the_window() {
    let mut pacer = seeded(7);
    let range = DelayRange::millis(5, 20);
    for _ in 0..100 {
        let d = pacer.sample(range);
        assert!(d >= Duration::from_millis(5) && d <= Duration::from_millis(20));
    }
}

#[test]
fn degenerate_window_is_constant() {
    let mut pacer = seeded(7);
    let range = DelayRange::millis(3, 3);
    assert_eq!(pacer.sample(range), Duration::from_millis(3));
}

#[test]
fn same_seed_same_stream() {
    let mut a = seeded(42);
    let mut b = seeded(42);
    let range = DelayRange::millis(0, 1000);
    for _ in 0..20 {
        assert_eq!(a.sample(range), b.sample(range));
    }
}

#[test]
fn coin_lands_on_both_sides_eventually() {
    let mut pacer = seeded(1);
    let flips: Vec<bool> = (0..64).map(|_| pacer.coin()).collect();
    assert!(flips.iter().any(|&b| b));
    assert!(flips.iter().any(|&b| !b));
}
