// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Error types for shroud-pool.

use thiserror::Error;

/// Errors that can occur when acquiring pooled memory.
#[derive(Debug, Error, Clone, Copy, Eq, PartialEq)]
pub enum PoolError {
    /// The host refused to reserve memory.
    #[error("host denied a reservation of {size} bytes")]
    HostDenied {
        /// Requested size in bytes, after rounding to the page size.
        size: usize,
    },

    /// Zero-sized blocks are never handed out.
    #[error("zero-sized request")]
    ZeroSizedRequest,
}
