// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use shroud_cipher::NONCE_SIZE;

use crate::container::{GuardedContainer, LightweightContainer};
use crate::error::{ContainerError, IntegrityViolation};
use crate::state::ContainerState;

use super::test_runtime;

#[test]
fn test_guarded_layout() {
    let runtime = test_runtime();
    let container = GuardedContainer::new_in(0xABCDu32, &runtime).expect("Failed to new_in()");

    let bytes = container.serialize();

    assert_eq!(GuardedContainer::<u32>::serialized_len(), 12 + 4 + 4);
    assert_eq!(bytes.len(), 20);
    assert_eq!(&bytes[NONCE_SIZE + 4..], container.ciphertext());
}

#[test]
fn test_lightweight_layout() {
    let runtime = test_runtime();
    let container = LightweightContainer::new_in(0xABCDu32, &runtime).expect("Failed to new_in()");

    let bytes = container.serialize();

    assert_eq!(LightweightContainer::<u32>::serialized_len(), 8);
    assert_eq!(&bytes[4..], container.ciphertext());
}

#[test]
fn test_guarded_roundtrip_into_fresh_container() {
    let runtime = test_runtime();
    let original = GuardedContainer::new_in(-123_456i64, &runtime).expect("Failed to new_in()");
    let bytes = original.serialize();

    let mut restored = GuardedContainer::new_in(0i64, &runtime).expect("Failed to new_in()");
    restored.deserialize(&bytes).expect("Failed to deserialize()");

    assert_eq!(restored.get().expect("Failed to get()"), -123_456);
    assert_eq!(restored.ciphertext(), original.ciphertext());
    assert_ne!(restored.real_address(), original.real_address());
}

#[test]
fn test_lightweight_roundtrip_into_fresh_container() {
    let runtime = test_runtime();
    let original = LightweightContainer::new_in([1.0f32, -2.0, 3.5], &runtime).expect("Failed to new_in()");
    let bytes = original.serialize();

    let mut restored = LightweightContainer::new_in([0.0f32; 3], &runtime).expect("Failed to new_in()");
    restored.deserialize(&bytes).expect("Failed to deserialize()");

    assert_eq!(restored.get().expect("Failed to get()"), [1.0, -2.0, 3.5]);
}

#[test]
fn test_wide_value_key_field_is_zero_padded() {
    let runtime = test_runtime();
    let value = [u64::MAX; 6];
    let original = GuardedContainer::new_in(value, &runtime).expect("Failed to new_in()");

    let bytes = original.serialize();
    let key = &bytes[NONCE_SIZE..NONCE_SIZE + 48];

    assert!(key[32..].iter().all(|b| *b == 0));

    let mut restored = GuardedContainer::new_in([0u64; 6], &runtime).expect("Failed to new_in()");
    restored.deserialize(&bytes).expect("Failed to deserialize()");
    assert_eq!(restored.get().expect("Failed to get()"), value);
}

#[test]
fn test_length_mismatch_leaves_state() {
    let runtime = test_runtime();
    let mut container = GuardedContainer::new_in(5u16, &runtime).expect("Failed to new_in()");
    let before = container.ciphertext().to_vec();

    assert_eq!(
        container.deserialize(&[0u8; 17]),
        Err(ContainerError::DeserializeLengthMismatch {
            expected: 16,
            actual: 17
        })
    );
    assert_eq!(container.deserialize(&[]).err().map(|e| e.to_string()),
        Some("deserialize length mismatch: expected 16 bytes, got 0".to_string()));

    assert_eq!(container.ciphertext(), before.as_slice());
    assert_eq!(container.get().expect("Failed to get()"), 5);
}

#[test]
fn test_deserialize_into_cleared_container() {
    let runtime = test_runtime();
    let original = GuardedContainer::new_in(77u8, &runtime).expect("Failed to new_in()");
    let bytes = original.serialize();

    let mut restored = GuardedContainer::new_in(0u8, &runtime).expect("Failed to new_in()");
    restored.clear();
    restored.deserialize(&bytes).expect("Failed to deserialize()");

    assert_eq!(restored.state(), ContainerState::Valid);
    assert!(restored.real_address().is_some());
    assert_eq!(restored.get().expect("Failed to get()"), 77);
}

#[test]
fn test_deserialize_replaces_tampered_material() {
    let runtime = test_runtime();
    let original = GuardedContainer::new_in(9u32, &runtime).expect("Failed to new_in()");
    let bytes = original.serialize();

    let mut target = GuardedContainer::new_in(1u32, &runtime).expect("Failed to new_in()");
    target.__unsafe_backing_mut().expect("Expected backing memory")[0] ^= 0x01;
    assert_eq!(
        target.get(),
        Err(ContainerError::IntegrityFailure(IntegrityViolation::BackingMismatch))
    );

    target.deserialize(&bytes).expect("Failed to deserialize()");

    assert_eq!(target.get().expect("Failed to get()"), 9);
}

#[test]
fn test_deserialize_unvalidated_garbage_still_decrypts() {
    let runtime = test_runtime();
    let mut container = GuardedContainer::new_in(0u32, &runtime).expect("Failed to new_in()");

    container
        .deserialize(&[0x42u8; 20])
        .expect("Failed to deserialize()");

    // Whatever the bytes decrypt to is accepted; only the length was checked.
    assert!(container.get().is_ok());
}
