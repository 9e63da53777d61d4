// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use crate::error::EntropyError;
use crate::traits::EntropySource;

/// OS-level CSPRNG backed by `getrandom`.
///
/// Stateless; every call reads the platform source directly. A read failure
/// is reported as [`EntropyError::EntropyUnavailable`]; there is no retry
/// and no fallback generator.
pub struct SystemEntropySource;

impl EntropySource for SystemEntropySource {
    fn fill_bytes(&self, dest: &mut [u8]) -> Result<(), EntropyError> {
        getrandom::fill(dest).map_err(|_| EntropyError::EntropyUnavailable)
    }
}

/// Fills `dest` with random bytes from the system CSPRNG.
///
/// Convenience wrapper over [`SystemEntropySource`].
///
/// # Errors
///
/// Returns [`EntropyError::EntropyUnavailable`] if the platform source
/// cannot be read.
pub fn fill_with_random_bytes(dest: &mut [u8]) -> Result<(), EntropyError> {
    SystemEntropySource {}.fill_bytes(dest)
}
