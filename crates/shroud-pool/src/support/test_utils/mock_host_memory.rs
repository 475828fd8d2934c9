// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use core::ptr::NonNull;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::error::PoolError;
use crate::host::{HostMemory, SystemHostMemory};

/// Failure mode of a [`MockHostMemory`].
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum MockHostMemoryBehaviour {
    /// Delegate everything to the system host.
    None,
    /// Deny every reservation.
    FailAlways,
    /// Deny the nth reservation (1-based), succeed otherwise.
    FailAtNthReserve(usize),
}

/// Counting host that wraps [`SystemHostMemory`].
#[derive(Debug)]
pub struct MockHostMemory {
    inner: SystemHostMemory,
    behaviour: Mutex<MockHostMemoryBehaviour>,
    reserve_calls: AtomicUsize,
    reserves: AtomicUsize,
    releases: AtomicUsize,
}

impl MockHostMemory {
    /// Creates a mock host with the given behaviour.
    pub fn new(behaviour: MockHostMemoryBehaviour) -> Self {
        Self {
            inner: SystemHostMemory::default(),
            behaviour: Mutex::new(behaviour),
            reserve_calls: AtomicUsize::new(0),
            reserves: AtomicUsize::new(0),
            releases: AtomicUsize::new(0),
        }
    }

    /// Switches to a different behaviour.
    pub fn change_behaviour(&self, behaviour: MockHostMemoryBehaviour) {
        *self.behaviour.lock().expect("Failed to lock behaviour") = behaviour;
    }

    /// Number of `reserve` calls, successful or not.
    pub fn reserve_call_count(&self) -> usize {
        self.reserve_calls.load(Ordering::SeqCst)
    }

    /// Number of successful `reserve` calls.
    pub fn reserve_count(&self) -> usize {
        self.reserves.load(Ordering::SeqCst)
    }

    /// Number of `release` calls.
    pub fn release_count(&self) -> usize {
        self.releases.load(Ordering::SeqCst)
    }

    /// Mappings currently outstanding on this host.
    ///
    /// Exact once the host is quiescent.
    pub fn outstanding(&self) -> usize {
        let releases = self.release_count();
        self.reserve_count().saturating_sub(releases)
    }
}

impl HostMemory for MockHostMemory {
    fn page_size(&self) -> usize {
        self.inner.page_size()
    }

    fn reserve(&self, size: usize) -> Result<NonNull<u8>, PoolError> {
        let nth = self.reserve_calls.fetch_add(1, Ordering::SeqCst) + 1;
        let behaviour = *self.behaviour.lock().expect("Failed to lock behaviour");

        match behaviour {
            MockHostMemoryBehaviour::FailAlways => Err(PoolError::HostDenied { size }),
            MockHostMemoryBehaviour::FailAtNthReserve(n) if n == nth => {
                Err(PoolError::HostDenied { size })
            }
            _ => {
                let ptr = self.inner.reserve(size)?;
                self.reserves.fetch_add(1, Ordering::SeqCst);
                Ok(ptr)
            }
        }
    }

    unsafe fn release(&self, ptr: NonNull<u8>, size: usize) {
        self.releases.fetch_add(1, Ordering::SeqCst);
        unsafe { self.inner.release(ptr, size) };
    }
}
