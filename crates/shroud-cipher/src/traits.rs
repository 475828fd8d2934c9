// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use crate::consts::{KEY_SIZE, NONCE_SIZE};

/// A keystream cipher whose encryption and decryption are the same operation.
///
/// Containers call [`apply_keystream`](StreamCipher::apply_keystream) once to
/// encrypt and once more to decrypt. An implementation that is not its own
/// inverse must not implement this trait.
pub trait StreamCipher {
    /// XORs `data` in place with the keystream starting at block `counter`.
    fn apply_keystream(
        &mut self,
        key: &[u8; KEY_SIZE],
        nonce: &[u8; NONCE_SIZE],
        counter: u32,
        data: &mut [u8],
    );
}
