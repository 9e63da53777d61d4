// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use crate::fill_with_random_bytes;

#[test]
fn test_fill_with_random_bytes_ok() {
    let mut buf = [0u8; 32];
    assert!(fill_with_random_bytes(&mut buf).is_ok());
}

#[test]
fn test_fill_with_random_bytes_empty_slice_ok() {
    let mut buf = [];
    assert!(fill_with_random_bytes(&mut buf).is_ok());
}

#[test]
fn test_fill_with_random_bytes_distinct_draws() {
    let mut a = [0u8; 32];
    let mut b = [0u8; 32];
    fill_with_random_bytes(&mut a).expect("Failed to fill_with_random_bytes(..)");
    fill_with_random_bytes(&mut b).expect("Failed to fill_with_random_bytes(..)");

    // 2^-256 collision chance; a repeat means the source is not random
    assert_ne!(a, b);
}
