// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use core::ptr::NonNull;

use zeroize::Zeroize;

/// A block of host memory, exclusively owned by whoever holds it.
///
/// Blocks come from [`ObjectPool::acquire`](crate::ObjectPool::acquire) and
/// must go back through [`ObjectPool::release`](crate::ObjectPool::release).
/// Dropping a block without releasing it leaks the host mapping.
#[must_use = "a RawBlock must be released back to its pool"]
pub struct RawBlock {
    ptr: NonNull<u8>,
    capacity: usize,
}

// Safety: RawBlock is the unique owner of its mapping; no aliases exist.
unsafe impl Send for RawBlock {}
unsafe impl Sync for RawBlock {}

impl RawBlock {
    /// Wraps a host mapping.
    ///
    /// # Safety
    ///
    /// `ptr` must point to `capacity` readable and writable bytes that nothing
    /// else references for the lifetime of the block.
    pub(crate) unsafe fn from_raw(ptr: NonNull<u8>, capacity: usize) -> Self {
        Self { ptr, capacity }
    }

    pub(crate) fn into_raw(self) -> (NonNull<u8>, usize) {
        (self.ptr, self.capacity)
    }

    /// Usable size of the block in bytes (a multiple of the host page size).
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Address of the first byte of the block.
    pub fn addr(&self) -> usize {
        self.ptr.as_ptr() as usize
    }

    /// Read-only view of the whole block.
    pub fn as_slice(&self) -> &[u8] {
        // Safety: invariant of `from_raw`.
        unsafe { core::slice::from_raw_parts(self.ptr.as_ptr(), self.capacity) }
    }

    /// Mutable view of the whole block.
    pub fn as_mut_slice(&mut self) -> &mut [u8] {
        // Safety: invariant of `from_raw`; `&mut self` guarantees exclusivity.
        unsafe { core::slice::from_raw_parts_mut(self.ptr.as_ptr(), self.capacity) }
    }

    /// Overwrites the whole block with zeros.
    pub fn zeroize(&mut self) {
        self.as_mut_slice().zeroize();
    }
}

impl core::fmt::Debug for RawBlock {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("RawBlock")
            .field("addr", &format_args!("{:#x}", self.addr()))
            .field("capacity", &self.capacity)
            .finish()
    }
}
