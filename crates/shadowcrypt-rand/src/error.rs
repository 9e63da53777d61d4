// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use thiserror::Error;

/// Entropy acquisition error
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntropyError {
    /// The platform's secure random source could not be read
    #[error("system entropy source unavailable")]
    EntropyUnavailable,
}
