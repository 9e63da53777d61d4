// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use thiserror::Error;

use shadowcrypt_rand::EntropyError;

/// Salt format violation
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaltError {
    /// Salt contains the `$` field separator
    #[error("contains the '$' field separator")]
    ContainsSeparator,
    /// Salt is longer than 16 characters
    #[error("longer than 16 characters")]
    TooLong,
    /// Salt contains a character outside `[A-Za-z0-9./]`
    #[error("contains a character outside [A-Za-z0-9./]")]
    OutOfAlphabet,
}

/// Hashing error
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CryptError {
    /// The secure random source failed during salt generation
    #[error("salt generation failed: {0}")]
    EntropyUnavailable(#[from] EntropyError),
    /// Caller-supplied salt violates the format constraints
    #[error("invalid salt: {0}")]
    InvalidSalt(#[from] SaltError),
}
