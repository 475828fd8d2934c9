// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Host virtual-memory layer.

use core::ptr::NonNull;

use crate::error::PoolError;

/// Page-granular reserve/release primitives of the host.
pub trait HostMemory: Send + Sync + core::fmt::Debug {
    /// Host page size in bytes.
    fn page_size(&self) -> usize;

    /// Reserves and commits `size` zeroed, read/write bytes.
    ///
    /// `size` is always a non-zero multiple of [`page_size`](HostMemory::page_size).
    ///
    /// # Errors
    ///
    /// Returns [`PoolError::HostDenied`] if the host refuses the request.
    fn reserve(&self, size: usize) -> Result<NonNull<u8>, PoolError>;

    /// Returns a mapping to the host.
    ///
    /// # Safety
    ///
    /// `ptr`/`size` must come from a previous [`reserve`](HostMemory::reserve)
    /// on the same host and must not be used afterwards.
    unsafe fn release(&self, ptr: NonNull<u8>, size: usize);
}

/// The process's own virtual-memory layer.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemHostMemory {}

#[cfg(unix)]
impl HostMemory for SystemHostMemory {
    fn page_size(&self) -> usize {
        let size = unsafe { libc::sysconf(libc::_SC_PAGESIZE) };

        if size <= 0 { 4096 } else { size as usize }
    }

    fn reserve(&self, size: usize) -> Result<NonNull<u8>, PoolError> {
        let ptr = unsafe {
            libc::mmap(
                core::ptr::null_mut(),
                size,
                libc::PROT_READ | libc::PROT_WRITE,
                libc::MAP_PRIVATE | libc::MAP_ANONYMOUS,
                -1,
                0,
            )
        };

        if ptr == libc::MAP_FAILED {
            return Err(PoolError::HostDenied { size });
        }

        NonNull::new(ptr as *mut u8).ok_or(PoolError::HostDenied { size })
    }

    unsafe fn release(&self, ptr: NonNull<u8>, size: usize) {
        unsafe { libc::munmap(ptr.as_ptr() as *mut libc::c_void, size) };
    }
}

#[cfg(not(unix))]
impl HostMemory for SystemHostMemory {
    fn page_size(&self) -> usize {
        4096
    }

    fn reserve(&self, size: usize) -> Result<NonNull<u8>, PoolError> {
        let layout = std::alloc::Layout::from_size_align(size, self.page_size())
            .map_err(|_| PoolError::HostDenied { size })?;

        let ptr = unsafe { std::alloc::alloc_zeroed(layout) };

        NonNull::new(ptr).ok_or(PoolError::HostDenied { size })
    }

    unsafe fn release(&self, ptr: NonNull<u8>, size: usize) {
        // Layout was valid at reserve time with identical arguments.
        if let Ok(layout) = std::alloc::Layout::from_size_align(size, self.page_size()) {
            unsafe { std::alloc::dealloc(ptr.as_ptr(), layout) };
        }
    }
}
