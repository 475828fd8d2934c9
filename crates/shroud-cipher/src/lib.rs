// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! ChaCha20 keystream transform.
//!
//! The transform XORs its input with a deterministic keystream, so the same
//! call both encrypts and decrypts:
//!
//! ```rust
//! use shroud_cipher::{KEY_SIZE, NONCE_SIZE, transform};
//!
//! let key = [7u8; KEY_SIZE];
//! let nonce = [9u8; NONCE_SIZE];
//!
//! let ciphertext = transform(b"health=100", &key, &nonce, 0);
//! let plaintext = transform(&ciphertext, &key, &nonce, 0);
//!
//! assert_eq!(plaintext, b"health=100");
//! ```
//!
//! # State layout
//!
//! | words  | content                                   |
//! |--------|-------------------------------------------|
//! | 0..4   | `"expand 32-byte k"`                      |
//! | 4..12  | key, little-endian                        |
//! | 12     | block counter (low word)                  |
//! | 13     | block counter (high word), zero below 2^32 blocks |
//! | 14..16 | nonce bytes `0..8`, little-endian         |
//!
//! Nonce bytes `8..12` are carried by callers but do not reach the state.
//!
//! No authentication tag is produced. Callers layer their own integrity
//! checks on top.

#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]

extern crate alloc;

#[cfg(test)]
mod tests;

mod chacha20;
mod consts;
mod error;
mod traits;

use alloc::vec::Vec;

pub use chacha20::ChaCha20;
pub use consts::{BLOCK_SIZE, KEY_SIZE, NONCE_SIZE};
pub use error::CipherError;
pub use traits::StreamCipher;

/// Transforms `input` under `key`/`nonce`, starting at block `counter`.
///
/// Applying the transform twice with identical parameters returns the
/// original input.
pub fn transform(
    input: &[u8],
    key: &[u8; KEY_SIZE],
    nonce: &[u8; NONCE_SIZE],
    counter: u32,
) -> Vec<u8> {
    let mut output = input.to_vec();
    ChaCha20::default().apply_keystream(key, nonce, counter, &mut output);
    output
}

/// Transforms `input` into `output` without allocating.
///
/// # Errors
///
/// Returns [`CipherError::LengthMismatch`] if the buffers differ in length.
pub fn transform_into(
    input: &[u8],
    output: &mut [u8],
    key: &[u8; KEY_SIZE],
    nonce: &[u8; NONCE_SIZE],
    counter: u32,
) -> Result<(), CipherError> {
    if input.len() != output.len() {
        return Err(CipherError::LengthMismatch {
            input: input.len(),
            output: output.len(),
        });
    }

    output.copy_from_slice(input);
    ChaCha20::default().apply_keystream(key, nonce, counter, output);

    Ok(())
}
