// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! # shroud_rand
//!
//! Cryptographically secure random source for the Shroud containers.
//!
//! Every key, nonce and randomized decoy base is drawn from an
//! [`EntropySource`]. The default implementation, [`SystemEntropySource`],
//! is the OS CSPRNG reached through `getrandom`.
//!
//! ## Example
//!
//! ```rust
//! use shroud_rand::{EntropySource, SystemEntropySource};
//!
//! let entropy = SystemEntropySource {};
//!
//! let mut nonce = [0u8; 12];
//! entropy.fill_bytes(&mut nonce).expect("Failed to fill_bytes()");
//! ```
//!
//! ## Platform Support
//!
//! Supports all platforms via `getrandom`:
//! - Linux/Android: `getrandom()` syscall
//! - macOS/iOS: `getentropy()`
//! - Windows: `ProcessPrng`
//! - wasm: `crypto.getRandomValues`

#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]
#![warn(unsafe_op_in_unsafe_fn)]

#[cfg(test)]
mod tests;

mod error;
mod system;
mod traits;

#[cfg(any(test, feature = "test-utils"))]
pub mod support;

pub use error::EntropyError;
pub use system::{SystemEntropySource, fill_with_random_bytes};
pub use traits::EntropySource;
