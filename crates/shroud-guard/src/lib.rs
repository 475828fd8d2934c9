// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Real backing memory, decoy addresses and tamper validation.
//!
//! A [`MemoryGuard`] hands out two kinds of addresses:
//!
//! | Kind | Source | Dereferenceable |
//! |------|--------|-----------------|
//! | real | [`ObjectPool`](shroud_pool::ObjectPool) block behind a [`RealHandle`] | yes |
//! | decoy | shared monotonically increasing counter | never |
//!
//! Containers keep their ciphertext mirrored in the real block and publish
//! the decoy address to anything that only wants "a pointer". Scanners that
//! latch onto the decoy watch the wrong location; the real block is checked
//! on every read with [`MemoryGuard::validate`].
//!
//! # Example
//!
//! ```rust
//! use shroud_guard::{GuardConfig, MemoryGuard};
//!
//! let guard = MemoryGuard::new(GuardConfig::default());
//!
//! let mut real = guard.allocate_real(4).expect("Failed to allocate_real()");
//! real.write(&[1, 2, 3, 4]).expect("Failed to write()");
//! assert!(guard.validate(&real, &[1, 2, 3, 4]));
//!
//! let a = guard.allocate_decoy(4).expect("Failed to allocate_decoy()");
//! let b = guard.allocate_decoy(4).expect("Failed to allocate_decoy()");
//! assert_eq!(b - a, 4 + guard.decoy_padding());
//!
//! guard.free_real(real);
//! ```

#![warn(missing_docs)]
#![warn(unsafe_op_in_unsafe_fn)]

#[cfg(test)]
mod tests;

mod config;
mod decoy;
mod error;
mod global;
mod guard;
mod handle;

pub use config::{DEFAULT_DECOY_BASE, DEFAULT_DECOY_PADDING, GuardConfig};
pub use decoy::DecoyAllocator;
pub use error::GuardError;
pub use global::global;
pub use guard::MemoryGuard;
pub use handle::RealHandle;
