// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use alloc::string::String;

use crate::b64::{ALPHABET, decode_digest, encode_digest};
use crate::consts::{DIGEST_B64_LEN, DIGEST_LEN};

#[test]
fn test_alphabet_is_64_distinct_ascii_characters() {
    let mut seen = [false; 128];
    for &c in ALPHABET {
        assert!(c.is_ascii());
        assert!(!seen[c as usize], "duplicate alphabet character {c}");
        seen[c as usize] = true;
    }
}

#[test]
fn test_encode_length_is_fixed() {
    assert_eq!(encode_digest(&[0u8; DIGEST_LEN]).len(), DIGEST_B64_LEN);
    assert_eq!(encode_digest(&[0xffu8; DIGEST_LEN]).len(), DIGEST_B64_LEN);
}

#[test]
fn test_encode_decode_round_trip() {
    let mut digest = [0u8; DIGEST_LEN];
    for (i, byte) in digest.iter_mut().enumerate() {
        *byte = (i as u8).wrapping_mul(37).wrapping_add(11);
    }

    let encoded = encode_digest(&digest);
    let decoded = decode_digest(encoded.as_bytes()).expect("Failed to decode_digest(..)");

    assert_eq!(decoded, digest);
}

#[test]
fn test_decode_reference_segment_round_trips() {
    // Digest segment of a published $6$ vector
    let segment = "svn8UoSVapNtMuq1ukKS4tPQd8iKwSMHWjl/O817G3uBnIFNjnQJuesI68u4OTLi\
                   BFdcbYEdFCoEOfaS35inz1";
    let digest = decode_digest(segment.as_bytes()).expect("Failed to decode_digest(..)");

    assert_eq!(encode_digest(&digest), segment);
}

#[test]
fn test_decode_rejects_wrong_length() {
    assert!(decode_digest(&[b'.'; DIGEST_B64_LEN - 1]).is_none());
    assert!(decode_digest(&[b'.'; DIGEST_B64_LEN + 1]).is_none());
    assert!(decode_digest(b"").is_none());
}

#[test]
fn test_decode_rejects_out_of_alphabet_characters() {
    for bad in [b'$', b'=', b'+', b' ', b'-', 0xc3] {
        let mut segment = [b'.'; DIGEST_B64_LEN];
        segment[40] = bad;
        assert!(decode_digest(&segment).is_none(), "accepted {bad:#04x}");
    }
}

#[test]
fn test_decode_rejects_non_canonical_final_group() {
    // The last character may only carry the top 2 bits of byte 63
    let mut segment = String::with_capacity(DIGEST_B64_LEN);
    for _ in 0..DIGEST_B64_LEN - 1 {
        segment.push('.');
    }
    segment.push('z');

    assert!(decode_digest(segment.as_bytes()).is_none());
}
