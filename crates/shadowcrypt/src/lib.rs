// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! SHA-512-crypt (`$6$`) password hashing with secure memory handling
//!
//! Self-contained implementation of the SHA-crypt scheme used by Unix
//! `/etc/shadow`: the iterated salt-mixed SHA-512 digest schedule, salt
//! generation and validation, rounds normalization, and the canonical
//! `$6$[rounds=N$]salt$hash` encoding. No OS `crypt(3)` routine is involved,
//! so output is identical across platforms. Password-derived intermediates
//! are zeroized.
//!
//! References:
//! - Ulrich Drepper, "Unix crypt using SHA-256 and SHA-512" (specification
//!   version 0.4) <https://www.akkadia.org/drepper/SHA-crypt.txt>
//! - RFC 6234: US Secure Hash Algorithms (SHA-512)
//!   <https://datatracker.ietf.org/doc/html/rfc6234>
//!
//! # Example
//!
//! ```rust
//! use shadowcrypt::{sha512_crypt_system, sha512_verify};
//!
//! let encoded = sha512_crypt_system(b"hunter2", None, None).expect("Failed to hash");
//! assert!(sha512_verify(b"hunter2", &encoded).expect("Failed to verify"));
//! assert!(!sha512_verify(b"*******", &encoded).expect("Failed to verify"));
//! ```
//!
//! Rounds below 1000 or above 999999999 are clamped, matching the reference
//! scheme; the effective value is embedded in the encoded hash and exposed
//! through [`Rounds::value`], never silently hidden.

#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]

extern crate alloc;

#[cfg(test)]
mod tests;

mod b64;
mod consts;
mod crypt;
mod engine;
mod error;
mod format;
mod rounds;
mod salt;
mod sha512;

pub use consts::{DIGEST_B64_LEN, DIGEST_LEN};
pub use crypt::{sha512_crypt, sha512_crypt_system, sha512_verify};
pub use error::{CryptError, SaltError};
pub use format::{ParseError, ParsedHash, parse};
pub use rounds::{DEFAULT_ROUNDS, MAX_ROUNDS, MIN_ROUNDS, Rounds};
pub use salt::{GENERATED_SALT_LEN, MAX_SALT_LEN, Salt};
