// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

/// Rounds used when the caller does not request a count.
pub const DEFAULT_ROUNDS: u32 = 5_000;

/// Smallest rounds count the format permits.
pub const MIN_ROUNDS: u32 = 1_000;

/// Largest rounds count the format permits.
pub const MAX_ROUNDS: u32 = 999_999_999;

/// A normalized rounds count plus whether the caller asked for it.
///
/// Explicitness, not value equality, controls whether the `rounds=` clause
/// appears in the encoded hash: a requested 5000 is emitted even though it
/// equals the default. Keeping the flag next to the value avoids sentinel
/// tricks that conflate "default chosen" with "value equals default".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rounds {
    value: u32,
    explicit: bool,
}

impl Rounds {
    /// Normalizes an optional requested rounds count.
    ///
    /// `None` yields the default with `explicit == false`. A requested value
    /// is clamped into `[MIN_ROUNDS, MAX_ROUNDS]` and marked explicit, never
    /// rejected, matching the reference scheme's treatment of out-of-range
    /// requests. The clamped value is what gets hashed and emitted; callers
    /// can observe the adjustment through [`Rounds::value`].
    pub fn normalize(requested: Option<u32>) -> Self {
        match requested {
            None => Self {
                value: DEFAULT_ROUNDS,
                explicit: false,
            },
            Some(value) => Self {
                value: value.clamp(MIN_ROUNDS, MAX_ROUNDS),
                explicit: true,
            },
        }
    }

    /// Clamps a `rounds=` value read from an encoded hash.
    ///
    /// Existing credential stores may carry out-of-range values; the
    /// reference implementation hashes them with the clamped count, so the
    /// parser does the same.
    pub(crate) fn from_parsed(value: u64) -> Self {
        Self {
            value: value.clamp(u64::from(MIN_ROUNDS), u64::from(MAX_ROUNDS)) as u32,
            explicit: true,
        }
    }

    /// The effective rounds count.
    pub fn value(self) -> u32 {
        self.value
    }

    /// Whether the caller explicitly requested a rounds count.
    pub fn is_explicit(self) -> bool {
        self.explicit
    }
}
