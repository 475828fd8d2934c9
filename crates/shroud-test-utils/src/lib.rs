// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Test utilities for Shroud crates.
//!
//! ## License
//!
//! GPL-3.0-only

mod bytes;

pub use bytes::{all_distinct, is_zeroized};

/// Routes `log` output of the crate under test to the test harness.
///
/// Safe to call from every test; only the first call installs the logger.
/// Honors `RUST_LOG`, defaulting to `trace`.
pub fn init_test_logging() {
    let _ = env_logger::builder()
        .is_test(true)
        .filter_level(log::LevelFilter::Trace)
        .parse_default_env()
        .try_init();
}
