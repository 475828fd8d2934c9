// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Mocks plus a runtime builder wired to them.

use std::sync::Arc;

pub use shroud_pool::support::test_utils::{MockHostMemory, MockHostMemoryBehaviour};
pub use shroud_rand::support::test_utils::{MockEntropySource, MockEntropySourceBehaviour};

use crate::config::RuntimeConfig;
use crate::runtime::Runtime;

/// Isolated runtime over mock host memory and a mock random source.
///
/// Returns the mocks so tests can inspect their counters.
pub fn mock_runtime(
    host_behaviour: MockHostMemoryBehaviour,
    entropy_behaviour: MockEntropySourceBehaviour,
) -> (Runtime, Arc<MockHostMemory>, Arc<MockEntropySource>) {
    let host = Arc::new(MockHostMemory::new(host_behaviour));
    let entropy = Arc::new(MockEntropySource::new(entropy_behaviour));

    let runtime = Runtime::with_sources(RuntimeConfig::default(), host.clone(), entropy.clone())
        .expect("Failed to build mock runtime");

    (runtime, host, entropy)
}
