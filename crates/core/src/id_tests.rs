// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;

#[test]
fn display_matches_transcript_actor_names() {
    assert_eq!(TellerId(2).to_string(), "Teller 2");
    assert_eq!(CustomerId(17).to_string(), "Customer 17");
}

#[test]
fn ids_index_their_own_space() {
    assert_eq!(TellerId(3).index(), 3);
    assert_eq!(CustomerId(0).index(), 0);
}
