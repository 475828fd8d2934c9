// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use shroud_test_utils::is_zeroized;

use crate::container::LightweightContainer;
use crate::error::ContainerError;
use crate::state::ContainerState;
use crate::support::test_utils::{MockEntropySourceBehaviour, MockHostMemoryBehaviour, mock_runtime};

use super::test_runtime;

#[test]
fn test_lightweight_roundtrip() {
    let runtime = test_runtime();
    let mut container = LightweightContainer::new_in(-17i32, &runtime).expect("Failed to new_in()");

    assert_eq!(container.get().expect("Failed to get()"), -17);

    container.rekey().expect("Failed to rekey()");
    assert_eq!(container.get().expect("Failed to get()"), -17);
}

#[test]
fn test_lightweight_has_no_backing_or_decoy() {
    let (runtime, host, _entropy) =
        mock_runtime(MockHostMemoryBehaviour::FailAlways, MockEntropySourceBehaviour::None);

    let container = LightweightContainer::new_in(3u64, &runtime).expect("Failed to new_in()");

    assert_eq!(container.real_address(), None);
    assert_eq!(container.decoy_address(), 0);
    assert_eq!(host.reserve_call_count(), 0);
}

#[test]
fn test_lightweight_raw_is_value_xor_key() {
    let (runtime, _host, _entropy) =
        mock_runtime(MockHostMemoryBehaviour::None, MockEntropySourceBehaviour::Constant(0xFF));

    let container = LightweightContainer::new_in(0x0F0F_u16, &runtime).expect("Failed to new_in()");

    assert_eq!(container.get_raw().expect("Failed to get_raw()"), 0xF0F0);
}

#[test]
fn test_lightweight_clear() {
    let runtime = test_runtime();
    let mut container = LightweightContainer::new_in(8u8, &runtime).expect("Failed to new_in()");

    container.clear();

    assert_eq!(container.state(), ContainerState::Uninitialized);
    assert!(is_zeroized(container.ciphertext()));
    assert_eq!(container.get(), Err(ContainerError::InvalidStateAccess));
}
