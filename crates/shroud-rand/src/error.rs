// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use thiserror::Error;

/// Errors produced by an [`EntropySource`](crate::EntropySource).
#[derive(Debug, Error, Clone, Copy, Eq, PartialEq)]
pub enum EntropyError {
    /// The underlying random source could not produce bytes.
    #[error("entropy source not available")]
    EntropyNotAvailable,
}
