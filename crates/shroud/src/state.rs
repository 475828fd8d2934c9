// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

/// Lifecycle state of a container.
///
/// ```text
/// Uninitialized --set--> Valid --get fails integrity--> Tampered
///       ^                  |  ^                            |
///       |                  +--+ set / rekey                |
///       +------- clear (from any state) -------------------+
///                          Valid <---------- set ----------+
/// ```
#[derive(Debug, Default, Clone, Copy, Eq, PartialEq)]
pub enum ContainerState {
    /// Holds no value.
    #[default]
    Uninitialized,
    /// Holds a value whose backing memory matched on the last check.
    Valid,
    /// An integrity check failed. Only `set` (or `deserialize`) recovers.
    Tampered,
}
