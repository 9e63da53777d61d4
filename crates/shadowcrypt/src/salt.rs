// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use alloc::string::String;

use shadowcrypt_rand::{EntropyError, EntropySource};

use crate::b64::ALPHABET;
use crate::error::SaltError;

/// Maximum salt length the format allows, in characters.
pub const MAX_SALT_LEN: usize = 16;

/// Length of generated salts, in characters.
pub const GENERATED_SALT_LEN: usize = 8;

/// A validated SHA-512-crypt salt: 0 to 16 characters of `[A-Za-z0-9./]`.
///
/// Salts are public randomization inputs, not secrets; they defeat
/// precomputed dictionaries across hashes of the same password. Validation
/// happens on construction, before any digest work.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Salt {
    value: String,
}

impl Salt {
    /// Validates and wraps a caller-supplied salt.
    ///
    /// # Errors
    ///
    /// [`SaltError::TooLong`] beyond 16 characters,
    /// [`SaltError::ContainsSeparator`] for `$`,
    /// [`SaltError::OutOfAlphabet`] for anything outside `[A-Za-z0-9./]`.
    pub fn new(value: &str) -> Result<Self, SaltError> {
        if value.len() > MAX_SALT_LEN {
            return Err(SaltError::TooLong);
        }
        if value.bytes().any(|b| b == b'$') {
            return Err(SaltError::ContainsSeparator);
        }
        if !value.bytes().all(is_salt_char) {
            return Err(SaltError::OutOfAlphabet);
        }

        Ok(Self {
            value: String::from(value),
        })
    }

    /// Generates an 8-character salt from the given entropy source.
    ///
    /// One random byte per character, masked to 6 bits; 256 ≡ 0 (mod 64), so
    /// the draw over the alphabet stays uniform.
    ///
    /// # Errors
    ///
    /// Returns [`EntropyError::EntropyUnavailable`] if the source cannot be
    /// read. There is no fallback to a non-secure generator.
    pub fn generate<E: EntropySource>(entropy: &E) -> Result<Self, EntropyError> {
        let mut raw = [0u8; GENERATED_SALT_LEN];
        entropy.fill_bytes(&mut raw)?;

        let mut value = String::with_capacity(GENERATED_SALT_LEN);
        for byte in raw {
            value.push(char::from(ALPHABET[usize::from(byte & 0x3f)]));
        }

        Ok(Self { value })
    }

    /// The salt as a string slice.
    pub fn as_str(&self) -> &str {
        &self.value
    }

    /// The salt bytes fed to the digest schedule.
    pub fn as_bytes(&self) -> &[u8] {
        self.value.as_bytes()
    }

    /// Salt length in characters.
    pub fn len(&self) -> usize {
        self.value.len()
    }

    /// Whether the salt is empty (the format allows it).
    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }
}

#[inline(always)]
fn is_salt_char(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'.' || b == b'/'
}
