// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Error types for shroud.

use shroud_guard::GuardError;
use shroud_rand::EntropyError;
use thiserror::Error;

/// Where an integrity check failed.
#[derive(Debug, Error, Clone, Copy, Eq, PartialEq)]
pub enum IntegrityViolation {
    /// Live backing memory no longer mirrors the stored ciphertext.
    #[error("backing memory does not match ciphertext")]
    BackingMismatch,

    /// The stored ciphertext no longer matches its checksum.
    #[error("ciphertext checksum mismatch")]
    ChecksumMismatch,

    /// Decrypting and re-encrypting did not reproduce the ciphertext.
    #[error("decryption did not round-trip")]
    RoundTripMismatch,

    /// An earlier read already detected tampering.
    #[error("container is marked as tampered")]
    Tampered,
}

/// Errors that can occur in container operations.
#[derive(Debug, Error, Clone, Copy, Eq, PartialEq)]
pub enum ContainerError {
    /// Backing memory or a decoy address could not be obtained.
    #[error("allocation failure: {0}")]
    AllocationFailure(#[from] GuardError),

    /// The stored value failed an integrity check.
    #[error("integrity failure: {0}")]
    IntegrityFailure(#[from] IntegrityViolation),

    /// Serialized input has the wrong length.
    #[error("deserialize length mismatch: expected {expected} bytes, got {actual}")]
    DeserializeLengthMismatch {
        /// Length of a serialized container of this type.
        expected: usize,
        /// Length of the supplied input.
        actual: usize,
    },

    /// The container holds no value (never set, or cleared).
    #[error("invalid state access")]
    InvalidStateAccess,

    /// The process random source failed while generating key material.
    #[error("entropy unavailable: {0}")]
    EntropyUnavailable(#[from] EntropyError),

    /// Integer division or remainder by zero.
    #[error("division by zero")]
    DivisionByZero,
}
