// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::block::RawBlock;
use crate::error::PoolError;
use crate::host::HostMemory;

/// Snapshot of pool counters.
#[derive(Debug, Default, Clone, Copy, Eq, PartialEq)]
pub struct PoolStats {
    /// Blocks reserved from the host over the pool's lifetime.
    pub host_reservations: usize,
    /// Blocks returned to the host over the pool's lifetime.
    pub host_releases: usize,
    /// Acquisitions served from the free list.
    pub reuse_hits: usize,
    /// Blocks currently sitting on the free list.
    pub pooled: usize,
    /// Host blocks currently alive (handed out or pooled).
    pub live: usize,
    /// Highest number of simultaneously live host blocks.
    pub high_water: usize,
}

/// Free-list pool on top of a [`HostMemory`].
///
/// Thread-safe. The mutex covers the free list only.
#[derive(Debug)]
pub struct ObjectPool {
    host: Arc<dyn HostMemory>,
    free: Mutex<Vec<RawBlock>>,
    retain_limit: Option<usize>,
    host_reservations: AtomicUsize,
    host_releases: AtomicUsize,
    reuse_hits: AtomicUsize,
    live: AtomicUsize,
    high_water: AtomicUsize,
}

impl ObjectPool {
    /// Creates an empty pool that keeps every released block.
    pub fn new(host: Arc<dyn HostMemory>) -> Self {
        Self::with_retain_limit(host, None)
    }

    /// Creates an empty pool that keeps at most `retain_limit` free blocks.
    ///
    /// Blocks released beyond the limit go straight back to the host.
    pub fn with_retain_limit(host: Arc<dyn HostMemory>, retain_limit: Option<usize>) -> Self {
        Self {
            host,
            free: Mutex::new(Vec::new()),
            retain_limit,
            host_reservations: AtomicUsize::new(0),
            host_releases: AtomicUsize::new(0),
            reuse_hits: AtomicUsize::new(0),
            live: AtomicUsize::new(0),
            high_water: AtomicUsize::new(0),
        }
    }

    // Push and swap_remove never leave the list half-updated, so a poisoned
    // lock still guards a consistent Vec.
    fn free_list(&self) -> MutexGuard<'_, Vec<RawBlock>> {
        self.free.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn round_to_page(&self, size: usize) -> Result<usize, PoolError> {
        let page = self.host.page_size();

        size.checked_next_multiple_of(page)
            .ok_or(PoolError::HostDenied { size })
    }

    /// Hands out a block of at least `size` bytes.
    ///
    /// Reuses a pooled block when one is large enough, otherwise reserves a
    /// page-rounded block from the host. Fresh host blocks are zeroed; reused
    /// blocks hold whatever the releaser left in them.
    ///
    /// # Errors
    ///
    /// - [`PoolError::ZeroSizedRequest`] if `size == 0`
    /// - [`PoolError::HostDenied`] if the host refuses a new reservation
    pub fn acquire(&self, size: usize) -> Result<RawBlock, PoolError> {
        if size == 0 {
            return Err(PoolError::ZeroSizedRequest);
        }

        let reused = {
            let mut free = self.free_list();
            free.iter()
                .rposition(|block| block.capacity() >= size)
                .map(|idx| free.swap_remove(idx))
        };

        if let Some(block) = reused {
            self.reuse_hits.fetch_add(1, Ordering::Relaxed);
            log::trace!("pool: reused {} byte block for {} byte request", block.capacity(), size);
            return Ok(block);
        }

        let capacity = self.round_to_page(size)?;
        let ptr = self.host.reserve(capacity)?;

        self.host_reservations.fetch_add(1, Ordering::SeqCst);
        let live = self.live.fetch_add(1, Ordering::SeqCst) + 1;
        self.high_water.fetch_max(live, Ordering::SeqCst);

        log::debug!("pool: reserved {} bytes from host ({} live)", capacity, live);

        // Safety: the host just handed out `capacity` fresh read/write bytes.
        Ok(unsafe { RawBlock::from_raw(ptr, capacity) })
    }

    /// Puts a block back on the free list.
    ///
    /// The caller is responsible for wiping any secret contents first.
    pub fn release(&self, block: RawBlock) {
        let overflow = {
            let mut free = self.free_list();

            match self.retain_limit {
                Some(limit) if free.len() >= limit => Some(block),
                _ => {
                    free.push(block);
                    None
                }
            }
        };

        if let Some(block) = overflow {
            self.return_to_host(block);
        }
    }

    /// Returns every pooled block to the host.
    ///
    /// Returns how many blocks were released.
    pub fn drain(&self) -> usize {
        let blocks = core::mem::take(&mut *self.free_list());
        let count = blocks.len();

        for block in blocks {
            self.return_to_host(block);
        }

        if count > 0 {
            log::debug!("pool: drained {} blocks", count);
        }

        count
    }

    /// Current counters.
    ///
    /// Each field is read separately, so a snapshot taken during concurrent
    /// churn need not satisfy `live == host_reservations - host_releases`.
    /// It does satisfy `high_water <= host_reservations`.
    pub fn stats(&self) -> PoolStats {
        // high_water before host_reservations: every live count fed to
        // fetch_max was preceded by its reservation.
        let high_water = self.high_water.load(Ordering::SeqCst);
        let live = self.live.load(Ordering::SeqCst);

        PoolStats {
            host_reservations: self.host_reservations.load(Ordering::SeqCst),
            host_releases: self.host_releases.load(Ordering::SeqCst),
            reuse_hits: self.reuse_hits.load(Ordering::Relaxed),
            pooled: self.free_list().len(),
            live,
            high_water,
        }
    }

    fn return_to_host(&self, block: RawBlock) {
        let (ptr, capacity) = block.into_raw();

        // Safety: every RawBlock in circulation was reserved from `self.host`.
        unsafe { self.host.release(ptr, capacity) };

        self.live.fetch_sub(1, Ordering::SeqCst);
        self.host_releases.fetch_add(1, Ordering::SeqCst);
    }
}

impl Drop for ObjectPool {
    fn drop(&mut self) {
        self.drain();
    }
}
