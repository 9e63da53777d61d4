// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

/// SHA-512 output length in bytes.
pub const DIGEST_LEN: usize = 64;

/// Length of the crypt(3) base64 digest segment of an encoded hash.
///
/// 64 digest bytes at 6 bits per character: 21 four-character groups plus a
/// final two-character group.
pub const DIGEST_B64_LEN: usize = 86;

/// SHA-512 message block length in bytes.
pub(crate) const BLOCK_LEN: usize = 128;
