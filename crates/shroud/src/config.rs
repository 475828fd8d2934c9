// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Runtime configuration.

use shroud_guard::{DEFAULT_DECOY_BASE, DEFAULT_DECOY_PADDING, GuardConfig};
use shroud_rand::{EntropyError, EntropySource};

// Keeps random bases page-aligned inside [DEFAULT_DECOY_BASE, DEFAULT_DECOY_BASE + 256 MiB).
const RANDOM_DECOY_MASK: usize = 0x0FFF_F000;

/// Where the decoy counter starts.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum DecoySeed {
    /// A fixed base address.
    Fixed(usize),
    /// A page-aligned base drawn from the random source at runtime creation.
    Random,
}

impl Default for DecoySeed {
    fn default() -> Self {
        Self::Fixed(DEFAULT_DECOY_BASE)
    }
}

impl DecoySeed {
    /// Resolves the seed to a concrete base address.
    ///
    /// # Errors
    ///
    /// Returns [`EntropyError`] if a random seed cannot be drawn.
    pub fn resolve(self, entropy: &dyn EntropySource) -> Result<usize, EntropyError> {
        match self {
            Self::Fixed(base) => Ok(base),
            Self::Random => {
                let mut bytes = [0u8; 4];
                entropy.fill_bytes(&mut bytes)?;

                let offset = u32::from_le_bytes(bytes) as usize & RANDOM_DECOY_MASK;

                Ok(DEFAULT_DECOY_BASE | offset)
            }
        }
    }
}

/// Knobs for a [`Runtime`](crate::Runtime).
///
/// ```rust
/// use shroud::{DecoySeed, RuntimeConfig};
///
/// let config = RuntimeConfig::default()
///     .with_decoy_seed(DecoySeed::Random)
///     .with_pool_retain_limit(Some(64));
///
/// assert_eq!(config.decoy_padding, 0x10);
/// ```
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct RuntimeConfig {
    /// Start of the decoy counter.
    pub decoy_seed: DecoySeed,
    /// Gap added after every decoy allocation.
    pub decoy_padding: usize,
    /// Maximum free blocks kept by the pool (`None` = unbounded).
    pub pool_retain_limit: Option<usize>,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl RuntimeConfig {
    /// Configuration matching the process-wide defaults.
    pub fn new() -> Self {
        Self {
            decoy_seed: DecoySeed::default(),
            decoy_padding: DEFAULT_DECOY_PADDING,
            pool_retain_limit: None,
        }
    }

    /// Sets the decoy seed.
    pub fn with_decoy_seed(mut self, seed: DecoySeed) -> Self {
        self.decoy_seed = seed;
        self
    }

    /// Sets the decoy padding.
    pub fn with_decoy_padding(mut self, padding: usize) -> Self {
        self.decoy_padding = padding;
        self
    }

    /// Sets the pool retain limit.
    pub fn with_pool_retain_limit(mut self, limit: Option<usize>) -> Self {
        self.pool_retain_limit = limit;
        self
    }

    pub(crate) fn guard_config(
        &self,
        entropy: &dyn EntropySource,
    ) -> Result<GuardConfig, EntropyError> {
        Ok(GuardConfig {
            decoy_base: self.decoy_seed.resolve(entropy)?,
            decoy_padding: self.decoy_padding,
            pool_retain_limit: self.pool_retain_limit,
        })
    }
}
