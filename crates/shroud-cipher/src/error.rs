// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use thiserror::Error;

/// Errors from the keystream transform.
#[derive(Debug, Error, Clone, Copy, Eq, PartialEq)]
pub enum CipherError {
    /// Input and output buffers have different lengths.
    #[error("length mismatch: input is {input} bytes, output is {output} bytes")]
    LengthMismatch {
        /// Input length in bytes.
        input: usize,
        /// Output length in bytes.
        output: usize,
    },
}
