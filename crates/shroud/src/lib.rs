// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! <p align="center"><em>Obfuscated in-memory values that resist scanning and tampering.</em></p>
//!
//! ---
//!
//! Shroud keeps values such as health, score or currency out of reach of
//! memory scanners. A value never rests in memory as a stable, readable
//! integer at a fixed address.
//!
//! # Features
//!
//! - **Per-write rekeying**: every write encrypts under a fresh random key and nonce
//! - **Backing mirror**: the ciphertext is copied into separately allocated pages and checked on every read
//! - **Decoy addresses**: each container publishes a plausible but inert address
//! - **Pooled pages**: backing memory is recycled through a free list instead of the host allocator
//! - **Wipe on drop**: key, nonce, ciphertext and backing memory are zeroed when a container goes away
//!
//! # Quick Start
//!
//! ```rust
//! use shroud::{GuardedContainer, LightweightContainer};
//!
//! let mut score = GuardedContainer::new(0u64)?;
//! score.add(50)?;
//! score.increment()?;
//! assert!(score == 51u64);
//!
//! // Periodic rekeying defeats snapshot diffing.
//! score.rekey()?;
//! assert_eq!(score.get()?, 51);
//!
//! // Diagnostic views
//! let _real = score.real_address();
//! let _decoy = score.decoy_address();
//!
//! // XOR-only variant, no backing pages, no validation.
//! let mut ammo = LightweightContainer::new(30u16)?;
//! ammo.decrement()?;
//! assert_eq!(ammo.get()?, 29);
//! # Ok::<(), shroud::ContainerError>(())
//! ```
//!
//! # Profiles
//!
//! | Profile | Cipher | Backing mirror | Decoy | Read checks |
//! |---------|--------|----------------|-------|-------------|
//! | [`Guarded`] (default) | ChaCha20 | yes | yes | backing, checksum, round-trip |
//! | [`Lightweight`] | XOR | no | no | none |
//!
//! # Runtime
//!
//! Containers share a [`Runtime`]: a [`MemoryGuard`](shroud_guard::MemoryGuard)
//! (pool + decoy counter) and a random source. [`SecureContainer::new`] uses
//! [`Runtime::global`]; tests build isolated runtimes and pass them to
//! [`SecureContainer::new_in`]:
//!
//! ```rust
//! use shroud::{DecoySeed, GuardedContainer, Runtime, RuntimeConfig};
//!
//! let runtime = Runtime::new(RuntimeConfig::default().with_decoy_seed(DecoySeed::Fixed(0x4000_0000)))?;
//! let coins = GuardedContainer::new_in(7i32, &runtime)?;
//!
//! assert_eq!(coins.decoy_address(), 0x4000_0000);
//! # Ok::<(), shroud::ContainerError>(())
//! ```
//!
//! # Serialized layout
//!
//! | Profile | Layout |
//! |---------|--------|
//! | Guarded | `[nonce: 12][key: N][ciphertext: N]` |
//! | Lightweight | `[key: N][ciphertext: N]` |
//!
//! `N` is the size of the value type. There is no authentication tag.
//!
//! # Security
//!
//! - Deters casual scanning and naive memory edits. It does **not** stop an
//!   adversary who reads key and ciphertext from memory at the same instant.
//! - The integrity checks are not a MAC. They detect writes that bypass the
//!   container, not a forger who recomputes them.
//! - No anti-debugging or hooking detection.
//!
//! # License
//!
//! GPL-3.0-only

#![warn(missing_docs)]
#![warn(unsafe_op_in_unsafe_fn)]

#[cfg(test)]
mod tests;

mod checksum;
mod cmp;
mod config;
mod container;
mod error;
mod fmt;
mod ops;
mod profile;
mod runtime;
mod state;
mod value;

pub mod support;

pub use shroud_cipher as cipher;
pub use shroud_guard as guard;
pub use shroud_pool as pool;
pub use shroud_rand as rand;

pub use checksum::fnv1a;
pub use config::{DecoySeed, RuntimeConfig};
pub use container::{GuardedContainer, LightweightContainer, SecureContainer};
pub use error::{ContainerError, IntegrityViolation};
pub use profile::{Guarded, Lightweight, Profile};
pub use runtime::Runtime;
pub use state::ContainerState;
pub use value::{Numeric, SecureValue};
