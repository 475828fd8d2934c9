// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

/// Key width in bytes.
pub const KEY_SIZE: usize = 32;

/// Nonce width in bytes.
pub const NONCE_SIZE: usize = 12;

/// Keystream block size in bytes.
pub const BLOCK_SIZE: usize = 64;

/// "expand 32-byte k"
pub(crate) const SIGMA: [u32; 4] = [0x61707865, 0x3320646e, 0x79622d32, 0x6b206574];

pub(crate) const DOUBLE_ROUNDS: usize = 10;
