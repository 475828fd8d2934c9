// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use crate::error::EntropyError;
use crate::traits::EntropySource;

/// OS-backed entropy source (`getrandom`).
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemEntropySource {}

impl EntropySource for SystemEntropySource {
    #[inline]
    fn fill_bytes(&self, dest: &mut [u8]) -> Result<(), EntropyError> {
        fill_with_random_bytes(dest)
    }
}

/// Fills `dest` with bytes from the OS CSPRNG.
///
/// Empty slices succeed without touching the OS.
pub fn fill_with_random_bytes(dest: &mut [u8]) -> Result<(), EntropyError> {
    if dest.is_empty() {
        return Ok(());
    }

    getrandom::fill(dest).map_err(|_| EntropyError::EntropyNotAvailable)
}
