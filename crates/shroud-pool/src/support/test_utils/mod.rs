// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Host memory doubles with injectable failures.

mod mock_host_memory;

pub use mock_host_memory::{MockHostMemory, MockHostMemoryBehaviour};
