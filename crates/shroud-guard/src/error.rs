// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Error types for shroud-guard.

use shroud_pool::PoolError;
use thiserror::Error;

/// Errors that can occur in [`MemoryGuard`](crate::MemoryGuard) operations.
#[derive(Debug, Error, Clone, Copy, Eq, PartialEq)]
pub enum GuardError {
    /// Real backing memory could not be obtained.
    #[error("allocation failure: {0}")]
    AllocationFailure(#[from] PoolError),

    /// The decoy counter would wrap around the address space.
    #[error("decoy address space exhausted")]
    DecoySpaceExhausted,

    /// A write did not match the handle's logical length.
    #[error("length mismatch: expected {expected} bytes, got {actual}")]
    LengthMismatch {
        /// Logical length of the handle.
        expected: usize,
        /// Length of the supplied bytes.
        actual: usize,
    },
}
