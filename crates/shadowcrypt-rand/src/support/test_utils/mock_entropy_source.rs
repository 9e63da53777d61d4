// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use core::cell::Cell;

use crate::error::EntropyError;
use crate::system::SystemEntropySource;
use crate::traits::EntropySource;

/// Fill behaviour for [`MockEntropySource`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MockFill {
    /// Delegate to the real system source.
    System,
    /// Repeat the given byte pattern (deterministic output for tests).
    ///
    /// The pattern must be non-empty; an empty pattern leaves the
    /// destination untouched.
    Cycle(&'static [u8]),
    /// Fail every call with [`EntropyError::EntropyUnavailable`].
    Unavailable,
}

/// Mock entropy source for testing.
///
/// Lets tests pin the bytes an [`EntropySource`] consumer sees, or simulate
/// a platform source that cannot be read. Tracks how often it was called so
/// fail-fast paths can assert that no entropy was drawn.
pub struct MockEntropySource {
    fill: MockFill,
    calls: Cell<usize>,
}

impl MockEntropySource {
    /// Creates a new mock with the given fill behaviour.
    pub fn new(fill: MockFill) -> Self {
        Self {
            fill,
            calls: Cell::new(0),
        }
    }

    /// Number of `fill_bytes` calls made so far.
    pub fn calls(&self) -> usize {
        self.calls.get()
    }
}

impl EntropySource for MockEntropySource {
    fn fill_bytes(&self, dest: &mut [u8]) -> Result<(), EntropyError> {
        self.calls.set(self.calls.get() + 1);

        match self.fill {
            MockFill::System => SystemEntropySource {}.fill_bytes(dest),
            MockFill::Cycle(pattern) => {
                for (dst, &src) in dest.iter_mut().zip(pattern.iter().cycle()) {
                    *dst = src;
                }
                Ok(())
            }
            MockFill::Unavailable => Err(EntropyError::EntropyUnavailable),
        }
    }
}
