// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! ChaCha20 block function and keystream XOR.
//!
//! All intermediate state is zeroized after each call and on drop.

use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::consts::{BLOCK_SIZE, DOUBLE_ROUNDS, KEY_SIZE, NONCE_SIZE, SIGMA};
use crate::traits::StreamCipher;

/// ChaCha20 cipher state with guaranteed zeroization.
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct ChaCha20 {
    initial: [u32; 16],
    working: [u32; 16],
    keystream: [u8; BLOCK_SIZE],
}

impl Default for ChaCha20 {
    fn default() -> Self {
        Self {
            initial: [0; 16],
            working: [0; 16],
            keystream: [0; BLOCK_SIZE],
        }
    }
}

#[inline(always)]
fn load_le32(bytes: &[u8]) -> u32 {
    u32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]])
}

impl ChaCha20 {
    #[inline(always)]
    fn quarter_round(&mut self, a: usize, b: usize, c: usize, d: usize) {
        let s = &mut self.working;

        s[a] = s[a].wrapping_add(s[b]);
        s[d] ^= s[a];
        s[d] = s[d].rotate_left(16);

        s[c] = s[c].wrapping_add(s[d]);
        s[b] ^= s[c];
        s[b] = s[b].rotate_left(12);

        s[a] = s[a].wrapping_add(s[b]);
        s[d] ^= s[a];
        s[d] = s[d].rotate_left(8);

        s[c] = s[c].wrapping_add(s[d]);
        s[b] ^= s[c];
        s[b] = s[b].rotate_left(7);
    }

    #[inline(always)]
    fn init_state(&mut self, key: &[u8; KEY_SIZE], nonce: &[u8; NONCE_SIZE], block: u64) {
        self.initial[..4].copy_from_slice(&SIGMA);

        for i in 0..8 {
            self.initial[4 + i] = load_le32(&key[i * 4..i * 4 + 4]);
        }

        self.initial[12] = block as u32;
        self.initial[13] = (block >> 32) as u32;
        self.initial[14] = load_le32(&nonce[0..4]);
        self.initial[15] = load_le32(&nonce[4..8]);
    }

    #[inline(always)]
    fn do_rounds(&mut self) {
        for _ in 0..DOUBLE_ROUNDS {
            // Columns
            self.quarter_round(0, 4, 8, 12);
            self.quarter_round(1, 5, 9, 13);
            self.quarter_round(2, 6, 10, 14);
            self.quarter_round(3, 7, 11, 15);

            // Diagonals
            self.quarter_round(0, 5, 10, 15);
            self.quarter_round(1, 6, 11, 12);
            self.quarter_round(2, 7, 8, 13);
            self.quarter_round(3, 4, 9, 14);
        }
    }

    /// Generate keystream block into self.keystream
    #[inline(always)]
    fn generate_block(&mut self, key: &[u8; KEY_SIZE], nonce: &[u8; NONCE_SIZE], block: u64) {
        self.init_state(key, nonce, block);
        self.working.copy_from_slice(&self.initial);

        self.do_rounds();

        for i in 0..16 {
            self.working[i] = self.working[i].wrapping_add(self.initial[i]);
            self.keystream[i * 4..i * 4 + 4].copy_from_slice(&self.working[i].to_le_bytes());
        }

        self.initial.zeroize();
        self.working.zeroize();
    }

    /// Writes one raw keystream block for `counter` into `output`.
    pub fn block(
        &mut self,
        key: &[u8; KEY_SIZE],
        nonce: &[u8; NONCE_SIZE],
        counter: u32,
        output: &mut [u8; BLOCK_SIZE],
    ) {
        self.generate_block(key, nonce, u64::from(counter));
        output.copy_from_slice(&self.keystream);
        self.keystream.zeroize();
    }
}

impl StreamCipher for ChaCha20 {
    fn apply_keystream(
        &mut self,
        key: &[u8; KEY_SIZE],
        nonce: &[u8; NONCE_SIZE],
        counter: u32,
        data: &mut [u8],
    ) {
        for (i, chunk) in data.chunks_mut(BLOCK_SIZE).enumerate() {
            self.generate_block(key, nonce, u64::from(counter) + i as u64);

            // A trailing partial chunk only consumes the keystream prefix.
            for (byte, ks_byte) in chunk.iter_mut().zip(self.keystream.iter()) {
                *byte ^= ks_byte;
            }
        }

        self.keystream.zeroize();
    }
}

impl core::fmt::Debug for ChaCha20 {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "ChaCha20 {{ [protected] }}")
    }
}
