// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use alloc::string::String;

use subtle::ConstantTimeEq;
use zeroize::Zeroize;

use shadowcrypt_rand::{EntropySource, SystemEntropySource};

use crate::consts::DIGEST_LEN;
use crate::engine::crypt_digest;
use crate::error::CryptError;
use crate::format;
use crate::format::ParseError;
use crate::rounds::Rounds;
use crate::salt::Salt;

/// Hashes a password into an encoded `$6$` string.
///
/// `salt` and `rounds` are overrides: a missing salt is generated from
/// `entropy` (8 characters, uniform over the crypt alphabet); missing rounds
/// fall back to the default with no `rounds=` clause in the output. A
/// supplied rounds count is clamped into the legal range and embedded, even
/// when it equals the default, since the caller asked for it.
///
/// The password is an opaque byte sequence; it is never logged or retained,
/// and intermediate buffers derived from it are zeroized before returning.
///
/// # Errors
///
/// [`CryptError::InvalidSalt`] for a format-illegal caller salt (raised
/// before any digest work), [`CryptError::EntropyUnavailable`] if salt
/// generation cannot read the secure random source.
pub fn sha512_crypt<E: EntropySource>(
    password: &[u8],
    salt: Option<&str>,
    rounds: Option<u32>,
    entropy: &E,
) -> Result<String, CryptError> {
    let rounds = Rounds::normalize(rounds);
    let salt = match salt {
        Some(salt) => Salt::new(salt)?,
        None => Salt::generate(entropy)?,
    };

    let mut digest = [0u8; DIGEST_LEN];
    crypt_digest(password, salt.as_bytes(), rounds.value(), &mut digest);

    Ok(format::encode(rounds, &salt, &digest))
}

/// [`sha512_crypt`] with the system CSPRNG as the entropy source.
///
/// # Errors
///
/// Same as [`sha512_crypt`].
pub fn sha512_crypt_system(
    password: &[u8],
    salt: Option<&str>,
    rounds: Option<u32>,
) -> Result<String, CryptError> {
    sha512_crypt(password, salt, rounds, &SystemEntropySource {})
}

/// Checks a password against an encoded `$6$` hash.
///
/// Recomputes the digest with the salt and effective rounds recovered from
/// `encoded` and compares in constant time, so the comparison leaks nothing
/// about where the digests diverge.
///
/// # Errors
///
/// Returns [`ParseError`] when `encoded` is not a well-formed `$6$` hash; a
/// wrong password is `Ok(false)`, not an error.
pub fn sha512_verify(password: &[u8], encoded: &str) -> Result<bool, ParseError> {
    let parsed = format::parse(encoded)?;

    let mut computed = [0u8; DIGEST_LEN];
    crypt_digest(
        password,
        parsed.salt.as_bytes(),
        parsed.rounds.value(),
        &mut computed,
    );

    let matches = computed.ct_eq(&parsed.digest).into();
    computed.zeroize();

    Ok(matches)
}
