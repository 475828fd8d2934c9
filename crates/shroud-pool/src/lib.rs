// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Free-list pool of host memory blocks.
//!
//! Obfuscated containers replace their backing memory on every write. Going
//! back to the host for each write would be slow, so released blocks are kept
//! on a free list and handed out again to the next request that fits.
//!
//! # Host layer
//!
//! [`HostMemory`] is the page-granular reserve/release boundary. The default,
//! [`SystemHostMemory`], uses:
//! - `mmap(PROT_READ | PROT_WRITE)` / `munmap` on Unix
//! - page-aligned `std::alloc` everywhere else
//!
//! # Example
//!
//! ```rust
//! use std::sync::Arc;
//!
//! use shroud_pool::{ObjectPool, SystemHostMemory};
//!
//! let pool = ObjectPool::new(Arc::new(SystemHostMemory::default()));
//!
//! let block = pool.acquire(8).expect("Failed to acquire()");
//! pool.release(block);
//!
//! // Served from the free list, no new host reservation.
//! let again = pool.acquire(8).expect("Failed to acquire()");
//! assert_eq!(pool.stats().host_reservations, 1);
//! pool.release(again);
//! ```
//!
//! # Locking
//!
//! A single mutex guards the free list. Host calls happen outside of it.

#![warn(missing_docs)]
#![warn(unsafe_op_in_unsafe_fn)]

#[cfg(test)]
mod tests;

mod block;
mod error;
mod host;
mod pool;

#[cfg(any(test, feature = "test-utils"))]
pub mod support;

pub use block::RawBlock;
pub use error::PoolError;
pub use host::{HostMemory, SystemHostMemory};
pub use pool::{ObjectPool, PoolStats};
