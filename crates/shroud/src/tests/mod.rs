// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

mod integrity;
mod lightweight;
mod pool_reuse;
mod profile;
mod serialize;

use crate::runtime::Runtime;
use crate::support::test_utils::{MockEntropySourceBehaviour, MockHostMemoryBehaviour, mock_runtime};

/// Isolated runtime over well-behaved mocks.
pub(crate) fn test_runtime() -> Runtime {
    shroud_test_utils::init_test_logging();

    let (runtime, _host, _entropy) =
        mock_runtime(MockHostMemoryBehaviour::None, MockEntropySourceBehaviour::None);

    runtime
}
