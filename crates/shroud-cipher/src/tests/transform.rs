// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use proptest::prelude::*;

use crate::consts::{KEY_SIZE, NONCE_SIZE};
use crate::error::CipherError;
use crate::{transform, transform_into};

fn symmetry_key() -> [u8; KEY_SIZE] {
    let mut key = [0u8; KEY_SIZE];
    key[..4].copy_from_slice(&[0x9f, 0x5d, 0x21, 0x6c]);
    key
}

const SYMMETRY_NONCE: [u8; NONCE_SIZE] = [
    0xcc, 0xbc, 0x54, 0xf1, 0x01, 0xf9, 0xf5, 0x7c, 0x78, 0x58, 0x6b, 0xeb,
];

#[test]
fn test_transform_symmetry_vector() {
    let plaintext = [0u8; 64];

    let ciphertext = transform(&plaintext, &symmetry_key(), &SYMMETRY_NONCE, 0);
    assert_eq!(ciphertext.len(), plaintext.len());
    assert_ne!(ciphertext.as_slice(), &plaintext[..]);

    let decrypted = transform(&ciphertext, &symmetry_key(), &SYMMETRY_NONCE, 0);
    assert_eq!(decrypted.as_slice(), &plaintext[..]);
}

#[test]
fn test_transform_empty_input() {
    let out = transform(&[], &symmetry_key(), &SYMMETRY_NONCE, 0);
    assert!(out.is_empty());
}

#[test]
fn test_transform_into_matches_transform() {
    let input = *b"score=1337";
    let mut output = [0u8; 10];

    transform_into(&input, &mut output, &symmetry_key(), &SYMMETRY_NONCE, 0)
        .expect("Failed to transform_into()");

    assert_eq!(
        output.as_slice(),
        transform(&input, &symmetry_key(), &SYMMETRY_NONCE, 0).as_slice()
    );
}

#[test]
fn test_transform_into_rejects_length_mismatch() {
    let input = [0u8; 8];
    let mut output = [0u8; 4];

    let result = transform_into(&input, &mut output, &symmetry_key(), &SYMMETRY_NONCE, 0);

    assert_eq!(
        result,
        Err(CipherError::LengthMismatch {
            input: 8,
            output: 4
        })
    );
}

#[test]
fn test_different_nonces_give_different_ciphertexts() {
    let plaintext = [0u8; 16];
    let mut other_nonce = SYMMETRY_NONCE;
    other_nonce[0] ^= 1;

    let a = transform(&plaintext, &symmetry_key(), &SYMMETRY_NONCE, 0);
    let b = transform(&plaintext, &symmetry_key(), &other_nonce, 0);

    assert_ne!(a, b);
}

proptest! {
    #[test]
    fn prop_transform_is_self_inverse(
        data in proptest::collection::vec(any::<u8>(), 0..300),
        key in any::<[u8; KEY_SIZE]>(),
        nonce in any::<[u8; NONCE_SIZE]>(),
        counter in any::<u32>(),
    ) {
        let once = transform(&data, &key, &nonce, counter);
        let twice = transform(&once, &key, &nonce, counter);

        prop_assert_eq!(twice, data);
    }
}
