// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

/// Address the decoy counter starts from.
pub const DEFAULT_DECOY_BASE: usize = 0x1000_0000;

/// Gap added after every decoy allocation.
pub const DEFAULT_DECOY_PADDING: usize = 0x10;

/// Construction parameters of a [`MemoryGuard`](crate::MemoryGuard).
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct GuardConfig {
    /// First decoy address handed out.
    pub decoy_base: usize,
    /// Gap between consecutive decoy allocations.
    pub decoy_padding: usize,
    /// Maximum number of free blocks the pool keeps (`None` = unbounded).
    pub pool_retain_limit: Option<usize>,
}

impl Default for GuardConfig {
    fn default() -> Self {
        Self {
            decoy_base: DEFAULT_DECOY_BASE,
            decoy_padding: DEFAULT_DECOY_PADDING,
            pool_retain_limit: None,
        }
    }
}
