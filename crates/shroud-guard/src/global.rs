// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Process-wide default guard.

use std::sync::{Arc, OnceLock};

use crate::guard::MemoryGuard;

static GUARD: OnceLock<Arc<MemoryGuard>> = OnceLock::new();

/// Returns the process-wide guard, creating it with defaults on first use.
///
/// Tests that need isolation should build their own [`MemoryGuard`] instead.
pub fn global() -> Arc<MemoryGuard> {
    GUARD.get_or_init(|| Arc::new(MemoryGuard::default())).clone()
}
