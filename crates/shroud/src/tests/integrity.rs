// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use crate::container::GuardedContainer;
use crate::error::{ContainerError, IntegrityViolation};
use crate::state::ContainerState;

use super::test_runtime;

#[test]
fn test_backing_tamper_detected() {
    let runtime = test_runtime();
    let mut container = GuardedContainer::new_in(100u32, &runtime).expect("Failed to new_in()");

    container.__unsafe_backing_mut().expect("Expected backing memory")[0] ^= 0xFF;

    assert_eq!(
        container.get(),
        Err(ContainerError::IntegrityFailure(IntegrityViolation::BackingMismatch))
    );
    assert_eq!(container.state(), ContainerState::Tampered);
}

#[test]
fn test_external_write_through_real_address_detected() {
    let runtime = test_runtime();
    let container = GuardedContainer::new_in(100u32, &runtime).expect("Failed to new_in()");

    let addr = container.real_address().expect("Expected backing memory");
    unsafe { core::ptr::write_volatile(addr as *mut u32, 9999) };

    assert!(matches!(container.get(), Err(ContainerError::IntegrityFailure(_))));
}

#[test]
fn test_tampered_is_terminal_for_reads() {
    let runtime = test_runtime();
    let mut container = GuardedContainer::new_in(5u64, &runtime).expect("Failed to new_in()");
    let backup = container.ciphertext().to_vec();

    container.__unsafe_backing_mut().expect("Expected backing memory")[1] ^= 0x01;
    assert!(container.get().is_err());

    // Restoring the bytes does not restore trust.
    container
        .__unsafe_backing_mut()
        .expect("Expected backing memory")
        .copy_from_slice(&backup);

    let tampered = Err(ContainerError::IntegrityFailure(IntegrityViolation::Tampered));
    assert_eq!(container.get(), tampered);
    assert_eq!(container.get_raw(), tampered);
    assert_eq!(container.rekey(), Err(ContainerError::IntegrityFailure(IntegrityViolation::Tampered)));
}

#[test]
fn test_set_recovers_from_tampered() {
    let runtime = test_runtime();
    let mut container = GuardedContainer::new_in(5u64, &runtime).expect("Failed to new_in()");

    container.__unsafe_backing_mut().expect("Expected backing memory")[0] ^= 0x80;
    assert!(container.get().is_err());

    container.set(6).expect("Failed to set()");

    assert_eq!(container.state(), ContainerState::Valid);
    assert_eq!(container.get().expect("Failed to get()"), 6);
}

#[test]
fn test_ciphertext_and_backing_edited_together_fails_checksum() {
    let runtime = test_runtime();
    let mut container = GuardedContainer::new_in(42u32, &runtime).expect("Failed to new_in()");

    container.__unsafe_ciphertext_mut()[2] ^= 0x10;
    container.__unsafe_backing_mut().expect("Expected backing memory")[2] ^= 0x10;

    assert_eq!(
        container.get(),
        Err(ContainerError::IntegrityFailure(IntegrityViolation::ChecksumMismatch))
    );
}

#[test]
fn test_ciphertext_edit_without_backing_fails_backing_check() {
    let runtime = test_runtime();
    let mut container = GuardedContainer::new_in(42u32, &runtime).expect("Failed to new_in()");

    container.__unsafe_ciphertext_mut()[0] ^= 0x01;

    assert_eq!(
        container.get_raw(),
        Err(ContainerError::IntegrityFailure(IntegrityViolation::BackingMismatch))
    );
}

#[test]
fn test_clear_from_tampered() {
    let runtime = test_runtime();
    let mut container = GuardedContainer::new_in(42u32, &runtime).expect("Failed to new_in()");

    container.__unsafe_backing_mut().expect("Expected backing memory")[0] ^= 0x01;
    assert!(container.get().is_err());

    container.clear();

    assert_eq!(container.state(), ContainerState::Uninitialized);
    assert_eq!(runtime.pool_stats().pooled, 1);
}

#[test]
fn test_key_rewrite_round_trips_to_wrong_value() {
    let runtime = test_runtime();
    let mut container = GuardedContainer::new_in(100u32, &runtime).expect("Failed to new_in()");

    container.__unsafe_key_mut()[0] ^= 0x01;

    // Backing, checksum and round-trip all cover the ciphertext, not the key.
    let value = container.get().expect("Failed to get()");

    assert_ne!(value, 100);
    assert_eq!(container.state(), ContainerState::Valid);
}
