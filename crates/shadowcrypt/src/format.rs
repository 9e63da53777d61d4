// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Canonical `$6$[rounds=N$]salt$digest` encoding and parsing.

use alloc::string::{String, ToString};

use thiserror::Error;

use crate::b64;
use crate::consts::{DIGEST_B64_LEN, DIGEST_LEN};
use crate::error::SaltError;
use crate::rounds::Rounds;
use crate::salt::Salt;

pub(crate) const SCHEME_PREFIX: &str = "$6$";
pub(crate) const ROUNDS_PREFIX: &str = "rounds=";

/// Encoded hash parse error
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseError {
    /// Input does not start with the `$6$` scheme prefix
    #[error("missing '$6$' scheme prefix")]
    UnsupportedScheme,
    /// `rounds=` clause is not a `$`-terminated decimal number
    #[error("malformed rounds clause")]
    MalformedRounds,
    /// Salt field violates the format constraints
    #[error("invalid salt: {0}")]
    InvalidSalt(#[from] SaltError),
    /// Digest segment is not exactly 86 canonical crypt(3) base64 characters
    #[error("malformed digest segment")]
    MalformedDigest,
}

/// A decoded `$6$` hash: effective rounds, salt, and raw digest bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedHash {
    /// Rounds count and whether the string carried a `rounds=` clause
    pub rounds: Rounds,
    /// The salt field
    pub salt: Salt,
    /// The 64 digest bytes recovered from the base64 segment
    pub digest: [u8; DIGEST_LEN],
}

/// Renders the canonical encoded hash.
///
/// The `rounds=` clause appears exactly when the rounds were explicitly
/// requested, even if the value equals the default.
pub(crate) fn encode(rounds: Rounds, salt: &Salt, digest: &[u8; DIGEST_LEN]) -> String {
    let mut encoded = String::with_capacity(
        SCHEME_PREFIX.len() + ROUNDS_PREFIX.len() + 10 + 1 + salt.len() + 1 + DIGEST_B64_LEN,
    );
    encoded.push_str(SCHEME_PREFIX);
    if rounds.is_explicit() {
        encoded.push_str(ROUNDS_PREFIX);
        encoded.push_str(&rounds.value().to_string());
        encoded.push('$');
    }
    encoded.push_str(salt.as_str());
    encoded.push('$');
    encoded.push_str(&b64::encode_digest(digest));
    encoded
}

/// Parses an encoded `$6$` hash.
///
/// Strict on shape: only the `$6$` scheme, an all-digit `$`-terminated
/// `rounds=` clause, a format-legal salt, and an 86-character canonical
/// digest segment are accepted. An out-of-range `rounds=` value is clamped,
/// the way the reference implementation treats existing shadow entries.
///
/// # Errors
///
/// See [`ParseError`].
pub fn parse(encoded: &str) -> Result<ParsedHash, ParseError> {
    let rest = encoded
        .strip_prefix(SCHEME_PREFIX)
        .ok_or(ParseError::UnsupportedScheme)?;

    let (rounds, rest) = match rest.strip_prefix(ROUNDS_PREFIX) {
        Some(tail) => {
            let (digits, tail) = tail.split_once('$').ok_or(ParseError::MalformedRounds)?;
            // reject empty, signs, and whitespace that integer parsing allows
            if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
                return Err(ParseError::MalformedRounds);
            }
            let value: u64 = digits.parse().map_err(|_| ParseError::MalformedRounds)?;
            (Rounds::from_parsed(value), tail)
        }
        None => (Rounds::normalize(None), rest),
    };

    let (salt, digest_segment) = rest.split_once('$').ok_or(ParseError::MalformedDigest)?;
    let salt = Salt::new(salt)?;
    let digest =
        b64::decode_digest(digest_segment.as_bytes()).ok_or(ParseError::MalformedDigest)?;

    Ok(ParsedHash {
        rounds,
        salt,
        digest,
    })
}
