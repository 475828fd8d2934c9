// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use shroud_cipher::{KEY_SIZE, NONCE_SIZE, transform};
use shroud_rand::support::test_utils::{MockEntropySource, MockEntropySourceBehaviour};

use crate::profile::{Guarded, Lightweight, Profile};

#[test]
fn test_guarded_generate_pads_short_keys() {
    let entropy = MockEntropySource::new(MockEntropySourceBehaviour::Constant(0xAB));
    let mut key = [0xFFu8; 4];
    let mut nonce = [0u8; NONCE_SIZE];

    Guarded::generate(&entropy, &mut key, &mut nonce).expect("Failed to generate()");

    assert_eq!(key, [0xAB; 4]);
    assert_eq!(nonce, [0xAB; NONCE_SIZE]);
    assert_eq!(entropy.call_count(), 2);
}

#[test]
fn test_guarded_generate_zeroes_key_beyond_cipher_width() {
    let entropy = MockEntropySource::new(MockEntropySourceBehaviour::Constant(0x11));
    let mut key = [0xFFu8; 40];
    let mut nonce = [0u8; NONCE_SIZE];

    Guarded::generate(&entropy, &mut key, &mut nonce).expect("Failed to generate()");

    assert!(key[..KEY_SIZE].iter().all(|b| *b == 0x11));
    assert!(key[KEY_SIZE..].iter().all(|b| *b == 0));
}

#[test]
fn test_guarded_apply_matches_zero_padded_chacha20() {
    let key = [0x9f, 0x5d, 0x21, 0x6c];
    let nonce = [
        0xcc, 0xbc, 0x54, 0xf1, 0x01, 0xf9, 0xf5, 0x7c, 0x78, 0x58, 0x6b, 0xeb,
    ];
    let mut data = [0u8; 64];

    Guarded::apply(&key, &nonce, &mut data);

    let mut full_key = [0u8; KEY_SIZE];
    full_key[..4].copy_from_slice(&key);
    assert_eq!(data.to_vec(), transform(&[0u8; 64], &full_key, &nonce, 0));

    Guarded::apply(&key, &nonce, &mut data);
    assert_eq!(data, [0u8; 64]);
}

#[test]
fn test_guarded_generate_propagates_entropy_failure() {
    let entropy = MockEntropySource::new(MockEntropySourceBehaviour::FailAtNthFillBytes(2));
    let mut key = [0u8; 8];
    let mut nonce = [0u8; NONCE_SIZE];

    assert!(Guarded::generate(&entropy, &mut key, &mut nonce).is_err());
}

#[test]
fn test_lightweight_is_plain_xor() {
    let key = [0x0F, 0xF0, 0xAA];
    let nonce = [0u8; NONCE_SIZE];
    let mut data = [0xFF, 0xFF, 0x00];

    Lightweight::apply(&key, &nonce, &mut data);
    assert_eq!(data, [0xF0, 0x0F, 0xAA]);

    Lightweight::apply(&key, &nonce, &mut data);
    assert_eq!(data, [0xFF, 0xFF, 0x00]);
}

#[test]
fn test_lightweight_generate_fills_whole_key_and_no_nonce() {
    let entropy = MockEntropySource::new(MockEntropySourceBehaviour::Constant(0x5A));
    let mut key = [0u8; 40];
    let mut nonce = [0xFFu8; NONCE_SIZE];

    Lightweight::generate(&entropy, &mut key, &mut nonce).expect("Failed to generate()");

    assert_eq!(key, [0x5A; 40]);
    assert_eq!(nonce, [0; NONCE_SIZE]);
    assert_eq!(entropy.call_count(), 1);
}

#[test]
fn test_serialized_len() {
    assert_eq!(Guarded::serialized_len(4), 12 + 4 + 4);
    assert_eq!(Lightweight::serialized_len(4), 8);
}
