// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use std::sync::Arc;

use shroud_pool::{ObjectPool, RawBlock};

use crate::error::GuardError;

/// Exclusive owner of one real backing block.
///
/// Dropping the handle zeroes the whole block and returns it to the pool it
/// came from. There is no other way to give the block up, so a failed
/// pipeline can never leak it.
pub struct RealHandle {
    block: Option<RawBlock>,
    len: usize,
    pool: Arc<ObjectPool>,
}

impl RealHandle {
    pub(crate) fn new(block: RawBlock, len: usize, pool: Arc<ObjectPool>) -> Self {
        debug_assert!(len <= block.capacity());

        Self {
            block: Some(block),
            len,
            pool,
        }
    }

    fn block(&self) -> &RawBlock {
        self.block
            .as_ref()
            .expect("infallible: block is only taken in Drop")
    }

    fn block_mut(&mut self) -> &mut RawBlock {
        self.block
            .as_mut()
            .expect("infallible: block is only taken in Drop")
    }

    /// Logical length in bytes.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the logical length is zero.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Address of the first logical byte.
    pub fn address(&self) -> usize {
        self.block().addr()
    }

    /// Live contents of the logical range.
    pub fn as_bytes(&self) -> &[u8] {
        &self.block().as_slice()[..self.len]
    }

    /// Overwrites the logical range with `bytes`.
    ///
    /// # Errors
    ///
    /// Returns [`GuardError::LengthMismatch`] if `bytes.len() != self.len()`.
    pub fn write(&mut self, bytes: &[u8]) -> Result<(), GuardError> {
        if bytes.len() != self.len {
            return Err(GuardError::LengthMismatch {
                expected: self.len,
                actual: bytes.len(),
            });
        }

        let len = self.len;
        self.block_mut().as_mut_slice()[..len].copy_from_slice(bytes);

        Ok(())
    }

    /// Mutable access to the live bytes, bypassing the owner's write path.
    #[cfg(any(test, feature = "test-utils"))]
    pub fn __unsafe_bytes_mut(&mut self) -> &mut [u8] {
        let len = self.len;
        &mut self.block_mut().as_mut_slice()[..len]
    }
}

impl Drop for RealHandle {
    fn drop(&mut self) {
        if let Some(mut block) = self.block.take() {
            block.zeroize();
            self.pool.release(block);
        }
    }
}

impl core::fmt::Debug for RealHandle {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("RealHandle")
            .field("address", &format_args!("{:#x}", self.address()))
            .field("len", &self.len)
            .finish()
    }
}
