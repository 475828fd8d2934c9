// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::error::GuardError;

/// Issues synthetic, never-dereferenced addresses.
///
/// Every allocation advances a shared counter by `size + padding`, so two
/// decoys never overlap until [`reset`](DecoyAllocator::reset) is called.
#[derive(Debug)]
pub struct DecoyAllocator {
    base: usize,
    padding: usize,
    next: Mutex<usize>,
}

impl DecoyAllocator {
    /// Creates an allocator whose first address is `base`.
    pub fn new(base: usize, padding: usize) -> Self {
        Self {
            base,
            padding,
            next: Mutex::new(base),
        }
    }

    fn counter(&self) -> MutexGuard<'_, usize> {
        self.next.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Reserves `size` bytes of decoy space and returns its start.
    ///
    /// # Errors
    ///
    /// Returns [`GuardError::DecoySpaceExhausted`] if advancing the counter
    /// would overflow. The counter is left unchanged in that case.
    pub fn allocate(&self, size: usize) -> Result<usize, GuardError> {
        let mut next = self.counter();
        let addr = *next;

        *next = addr
            .checked_add(size)
            .and_then(|end| end.checked_add(self.padding))
            .ok_or(GuardError::DecoySpaceExhausted)?;

        Ok(addr)
    }

    /// Rewinds the counter to its base.
    pub fn reset(&self) {
        *self.counter() = self.base;
        log::debug!("guard: decoy counter reset to {:#x}", self.base);
    }

    /// First address handed out after construction or reset.
    pub fn base(&self) -> usize {
        self.base
    }

    /// Gap added after every allocation.
    pub fn padding(&self) -> usize {
        self.padding
    }

    /// Address the next allocation will return.
    pub fn peek(&self) -> usize {
        *self.counter()
    }
}
