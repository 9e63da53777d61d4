// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! SHA-512-crypt digest schedule per the SHA-crypt specification (version
//! 0.4), steps 1-21.
//!
//! The schedule mixes password and salt material through length- and
//! bit-pattern-dependent repetitions before the rounds loop, so the salt
//! affects every output byte instead of merely prefixing the input.

use alloc::vec::Vec;

use zeroize::Zeroize;

use crate::consts::DIGEST_LEN;
use crate::sha512::Sha512;

/// Byte sequence of length `len` built from a digest repeated and truncated
/// (steps 10 and 14 of the specification).
fn repeat_to_len(digest: &[u8; DIGEST_LEN], len: usize) -> Vec<u8> {
    let mut seq = Vec::with_capacity(len);
    while seq.len() + DIGEST_LEN <= len {
        seq.extend_from_slice(digest);
    }
    seq.extend_from_slice(&digest[..len - seq.len()]);
    seq
}

/// Computes the raw 64-byte SHA-512-crypt digest for `(password, salt,
/// rounds)` into `out`.
///
/// Deterministic; salt validity (length, alphabet) is the caller's concern
/// and is established by [`Salt`](crate::Salt) before this runs. `rounds`
/// must already be normalized into the legal range.
pub(crate) fn crypt_digest(password: &[u8], salt: &[u8], rounds: u32, out: &mut [u8; DIGEST_LEN]) {
    // Steps 4-8: digest B = SHA-512(password, salt, password)
    let mut ctx = Sha512::new();
    ctx.update(password);
    ctx.update(salt);
    ctx.update(password);
    let mut digest_b = [0u8; DIGEST_LEN];
    ctx.finalize(&mut digest_b);

    // Steps 1-3, 9-12: digest A over password and salt, extended with B for
    // each 64-byte span of the password, then with B or the password for
    // each bit of the password length (LSB first)
    let mut ctx = Sha512::new();
    ctx.update(password);
    ctx.update(salt);
    let mut len = password.len();
    while len > DIGEST_LEN {
        ctx.update(&digest_b);
        len -= DIGEST_LEN;
    }
    ctx.update(&digest_b[..len]);
    let mut bits = password.len();
    while bits > 0 {
        if bits & 1 != 0 {
            ctx.update(&digest_b);
        } else {
            ctx.update(password);
        }
        bits >>= 1;
    }
    let mut digest_a = [0u8; DIGEST_LEN];
    ctx.finalize(&mut digest_a);

    // Steps 13-16: sequence P from a digest of the password repeated
    // len(password) times
    let mut ctx = Sha512::new();
    for _ in 0..password.len() {
        ctx.update(password);
    }
    let mut digest_p = [0u8; DIGEST_LEN];
    ctx.finalize(&mut digest_p);
    let mut p_seq = repeat_to_len(&digest_p, password.len());

    // Steps 17-20: sequence S from a digest of the salt repeated
    // 16 + A[0] times
    let mut ctx = Sha512::new();
    for _ in 0..(16 + usize::from(digest_a[0])) {
        ctx.update(salt);
    }
    let mut digest_s = [0u8; DIGEST_LEN];
    ctx.finalize(&mut digest_s);
    let mut s_seq = repeat_to_len(&digest_s, salt.len());

    // Step 21: the rounds loop, alternating password- and digest-derived
    // input on round parity, salt on rounds not divisible by 3, password on
    // rounds not divisible by 7
    out.copy_from_slice(&digest_a);
    for round in 0..rounds {
        let mut ctx = Sha512::new();
        if round & 1 != 0 {
            ctx.update(&p_seq);
        } else {
            ctx.update(&out[..]);
        }
        if round % 3 != 0 {
            ctx.update(&s_seq);
        }
        if round % 7 != 0 {
            ctx.update(&p_seq);
        }
        if round & 1 != 0 {
            ctx.update(&out[..]);
        } else {
            ctx.update(&p_seq);
        }
        ctx.finalize(out);
    }

    // Wipe password-derived intermediates (step 22); the salt and the final
    // digest are public
    digest_a.zeroize();
    digest_b.zeroize();
    digest_p.zeroize();
    digest_s.zeroize();
    p_seq.zeroize();
    s_seq.zeroize();
}
