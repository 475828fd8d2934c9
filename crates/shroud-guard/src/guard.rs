// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use std::sync::Arc;

use shroud_pool::{HostMemory, ObjectPool, PoolStats, SystemHostMemory};
use subtle::ConstantTimeEq;

use crate::config::GuardConfig;
use crate::decoy::DecoyAllocator;
use crate::error::GuardError;
use crate::handle::RealHandle;

/// Pool-backed real memory plus a decoy address counter.
#[derive(Debug)]
pub struct MemoryGuard {
    pool: Arc<ObjectPool>,
    decoys: DecoyAllocator,
}

impl MemoryGuard {
    /// Creates a guard over the system host memory.
    pub fn new(config: GuardConfig) -> Self {
        Self::with_host(Arc::new(SystemHostMemory::default()), config)
    }

    /// Creates a guard over an arbitrary host memory layer.
    pub fn with_host(host: Arc<dyn HostMemory>, config: GuardConfig) -> Self {
        let pool = ObjectPool::with_retain_limit(host, config.pool_retain_limit);

        let decoys = DecoyAllocator::new(config.decoy_base, config.decoy_padding);

        Self::with_parts(Arc::new(pool), decoys)
    }

    /// Assembles a guard from an existing pool and decoy allocator.
    pub fn with_parts(pool: Arc<ObjectPool>, decoys: DecoyAllocator) -> Self {
        Self { pool, decoys }
    }

    /// Obtains `size` bytes of zeroed read/write memory.
    ///
    /// # Errors
    ///
    /// Returns [`GuardError::AllocationFailure`] if the pool cannot serve the
    /// request.
    pub fn allocate_real(&self, size: usize) -> Result<RealHandle, GuardError> {
        let block = self.pool.acquire(size)?;

        Ok(RealHandle::new(block, size, self.pool.clone()))
    }

    /// Obtains real memory holding a copy of `bytes`.
    ///
    /// # Errors
    ///
    /// See [`allocate_real`](MemoryGuard::allocate_real).
    pub fn store(&self, bytes: &[u8]) -> Result<RealHandle, GuardError> {
        let mut handle = self.allocate_real(bytes.len())?;
        handle.write(bytes)?;

        Ok(handle)
    }

    /// Zeroes the block and returns it to the pool.
    pub fn free_real(&self, handle: RealHandle) {
        drop(handle);
    }

    /// Issues a decoy address covering `size` bytes.
    ///
    /// # Errors
    ///
    /// Returns [`GuardError::DecoySpaceExhausted`] on counter overflow.
    pub fn allocate_decoy(&self, size: usize) -> Result<usize, GuardError> {
        self.decoys.allocate(size)
    }

    /// Compares the live bytes behind `handle` against `expected`.
    ///
    /// The comparison runs in constant time over the common length.
    pub fn validate(&self, handle: &RealHandle, expected: &[u8]) -> bool {
        let live = handle.as_bytes();
        let matches = live.len() == expected.len() && bool::from(live.ct_eq(expected));

        if !matches {
            log::warn!(
                "guard: backing memory at {:#x} diverged from expected ciphertext",
                handle.address()
            );
        }

        matches
    }

    /// Rewinds the decoy counter to its base.
    pub fn reset_decoys(&self) {
        self.decoys.reset();
    }

    /// Returns every pooled block to the host.
    pub fn drain_pool(&self) -> usize {
        self.pool.drain()
    }

    /// Pool counters.
    pub fn pool_stats(&self) -> PoolStats {
        self.pool.stats()
    }

    /// Gap between consecutive decoy allocations.
    pub fn decoy_padding(&self) -> usize {
        self.decoys.padding()
    }

    /// First decoy address after construction or reset.
    pub fn decoy_base(&self) -> usize {
        self.decoys.base()
    }
}

impl Default for MemoryGuard {
    fn default() -> Self {
        Self::new(GuardConfig::default())
    }
}
