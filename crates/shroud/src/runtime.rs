// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Shared state behind containers.

use std::sync::{Arc, OnceLock};

use shroud_guard::MemoryGuard;
use shroud_pool::{HostMemory, PoolStats, SystemHostMemory};
use shroud_rand::{EntropySource, SystemEntropySource};

use crate::config::RuntimeConfig;
use crate::error::ContainerError;

static GLOBAL: OnceLock<Runtime> = OnceLock::new();

/// Memory guard and random source shared by a set of containers.
///
/// Cloning is cheap; clones share the same pool and decoy counter.
#[derive(Clone)]
pub struct Runtime {
    guard: Arc<MemoryGuard>,
    entropy: Arc<dyn EntropySource>,
}

impl Runtime {
    /// Process-wide runtime with default configuration.
    ///
    /// Created on first use. Containers built with
    /// [`SecureContainer::new`](crate::SecureContainer::new) use it.
    pub fn global() -> Self {
        GLOBAL
            .get_or_init(|| {
                Self::with_parts(shroud_guard::global(), Arc::new(SystemEntropySource::default()))
            })
            .clone()
    }

    /// Isolated runtime over the system host memory and random source.
    ///
    /// # Errors
    ///
    /// Returns [`ContainerError::EntropyUnavailable`] if a random decoy seed
    /// cannot be drawn.
    pub fn new(config: RuntimeConfig) -> Result<Self, ContainerError> {
        Self::with_sources(
            config,
            Arc::new(SystemHostMemory::default()),
            Arc::new(SystemEntropySource::default()),
        )
    }

    /// Isolated runtime over the given host memory and random source.
    ///
    /// # Errors
    ///
    /// See [`Runtime::new`].
    pub fn with_sources(
        config: RuntimeConfig,
        host: Arc<dyn HostMemory>,
        entropy: Arc<dyn EntropySource>,
    ) -> Result<Self, ContainerError> {
        let guard_config = config.guard_config(entropy.as_ref())?;
        let guard = MemoryGuard::with_host(host, guard_config);

        Ok(Self::with_parts(Arc::new(guard), entropy))
    }

    /// Runtime from an existing guard and random source.
    pub fn with_parts(guard: Arc<MemoryGuard>, entropy: Arc<dyn EntropySource>) -> Self {
        Self { guard, entropy }
    }

    /// The memory guard.
    pub fn guard(&self) -> &MemoryGuard {
        &self.guard
    }

    pub(crate) fn entropy(&self) -> &dyn EntropySource {
        self.entropy.as_ref()
    }

    /// Rewinds the decoy counter to its base.
    pub fn reset_decoys(&self) {
        self.guard.reset_decoys();
    }

    /// Returns every pooled block to the host.
    pub fn drain_pool(&self) -> usize {
        self.guard.drain_pool()
    }

    /// Pool counters.
    pub fn pool_stats(&self) -> PoolStats {
        self.guard.pool_stats()
    }

    /// Returns `true` if both runtimes share the same guard.
    pub fn same_as(&self, other: &Runtime) -> bool {
        Arc::ptr_eq(&self.guard, &other.guard)
    }
}

impl core::fmt::Debug for Runtime {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Runtime")
            .field("guard", &self.guard)
            .finish_non_exhaustive()
    }
}
