// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Protection profiles.
//!
//! | Profile | Transform | Nonce | Backing memory | Decoy | Integrity checks |
//! |---------|-----------|-------|----------------|-------|------------------|
//! | [`Guarded`] | ChaCha20 | 12 bytes | yes | yes | backing, checksum, round-trip |
//! | [`Lightweight`] | XOR with a value-sized key | none | no | no | none |

use shroud_cipher::{ChaCha20, KEY_SIZE, NONCE_SIZE, StreamCipher};
use shroud_rand::{EntropyError, EntropySource};
use zeroize::Zeroizing;

mod sealed {
    pub trait Sealed {}
}

/// Selects how a container encrypts and protects its value.
///
/// Sealed; the two implementations are [`Guarded`] and [`Lightweight`].
pub trait Profile: sealed::Sealed + Send + Sync + 'static {
    /// Short name, used in `Debug` output.
    const NAME: &'static str;

    /// Whether the container mirrors ciphertext into backing memory, issues a
    /// decoy address and verifies integrity on read.
    const GUARDED: bool;

    /// Length of the serialized nonce field.
    const NONCE_LEN: usize;

    /// Draws fresh key material into `key` (and `nonce`, if used).
    ///
    /// # Errors
    ///
    /// Propagates [`EntropyError`] from the random source.
    fn generate(
        entropy: &dyn EntropySource,
        key: &mut [u8],
        nonce: &mut [u8; NONCE_SIZE],
    ) -> Result<(), EntropyError>;

    /// Encrypts or decrypts `data` in place. Applying it twice is the identity.
    fn apply(key: &[u8], nonce: &[u8; NONCE_SIZE], data: &mut [u8]);

    /// Serialized size of a container holding `value_len` bytes.
    fn serialized_len(value_len: usize) -> usize {
        Self::NONCE_LEN + 2 * value_len
    }
}

/// ChaCha20 with backing memory, decoy address and integrity validation.
///
/// The key field has the size of the value. Only its first `min(size, 32)`
/// bytes are random; the cipher sees them zero-padded to 32 bytes.
#[derive(Debug, Clone, Copy, Default)]
pub struct Guarded;

impl sealed::Sealed for Guarded {}

impl Profile for Guarded {
    const NAME: &'static str = "guarded";
    const GUARDED: bool = true;
    const NONCE_LEN: usize = NONCE_SIZE;

    fn generate(
        entropy: &dyn EntropySource,
        key: &mut [u8],
        nonce: &mut [u8; NONCE_SIZE],
    ) -> Result<(), EntropyError> {
        let random = key.len().min(KEY_SIZE);

        key.fill(0);
        entropy.fill_bytes(&mut key[..random])?;
        entropy.fill_bytes(nonce)
    }

    fn apply(key: &[u8], nonce: &[u8; NONCE_SIZE], data: &mut [u8]) {
        let mut full_key = Zeroizing::new([0u8; KEY_SIZE]);
        let used = key.len().min(KEY_SIZE);
        full_key[..used].copy_from_slice(&key[..used]);

        ChaCha20::default().apply_keystream(&full_key, nonce, 0, data);
    }
}

/// XOR with a value-sized random key. No nonce, no backing, no validation.
#[derive(Debug, Clone, Copy, Default)]
pub struct Lightweight;

impl sealed::Sealed for Lightweight {}

impl Profile for Lightweight {
    const NAME: &'static str = "lightweight";
    const GUARDED: bool = false;
    const NONCE_LEN: usize = 0;

    fn generate(
        entropy: &dyn EntropySource,
        key: &mut [u8],
        nonce: &mut [u8; NONCE_SIZE],
    ) -> Result<(), EntropyError> {
        nonce.fill(0);
        entropy.fill_bytes(key)
    }

    fn apply(key: &[u8], _nonce: &[u8; NONCE_SIZE], data: &mut [u8]) {
        for (byte, k) in data.iter_mut().zip(key.iter()) {
            *byte ^= k;
        }
    }
}
