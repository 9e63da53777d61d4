// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use crate::rounds::{DEFAULT_ROUNDS, MAX_ROUNDS, MIN_ROUNDS, Rounds};

#[test]
fn test_normalize_absent_uses_default_without_explicit_flag() {
    let rounds = Rounds::normalize(None);
    assert_eq!(rounds.value(), DEFAULT_ROUNDS);
    assert!(!rounds.is_explicit());
}

#[test]
fn test_normalize_clamps_below_minimum() {
    let rounds = Rounds::normalize(Some(500));
    assert_eq!(rounds.value(), MIN_ROUNDS);
    assert!(rounds.is_explicit());
}

#[test]
fn test_normalize_clamps_above_maximum() {
    let rounds = Rounds::normalize(Some(2_000_000_000));
    assert_eq!(rounds.value(), MAX_ROUNDS);
    assert!(rounds.is_explicit());
}

#[test]
fn test_normalize_explicit_default_stays_explicit() {
    // Explicitness, not value equality, controls the rounds= clause
    let rounds = Rounds::normalize(Some(DEFAULT_ROUNDS));
    assert_eq!(rounds.value(), DEFAULT_ROUNDS);
    assert!(rounds.is_explicit());
}

#[test]
fn test_normalize_keeps_in_range_values() {
    for value in [MIN_ROUNDS, 1_001, 77_777, MAX_ROUNDS] {
        let rounds = Rounds::normalize(Some(value));
        assert_eq!(rounds.value(), value);
        assert!(rounds.is_explicit());
    }
}

#[test]
fn test_from_parsed_clamps_and_is_explicit() {
    assert_eq!(Rounds::from_parsed(10).value(), MIN_ROUNDS);
    assert_eq!(Rounds::from_parsed(u64::MAX).value(), MAX_ROUNDS);
    assert_eq!(Rounds::from_parsed(5_000).value(), 5_000);
    assert!(Rounds::from_parsed(5_000).is_explicit());
}
