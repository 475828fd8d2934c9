// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Byte-level assertions.

/// Returns `true` if every byte is zero.
///
/// # Example
/// ```
/// use shroud_test_utils::is_zeroized;
///
/// assert!(is_zeroized(&[0u8; 16]));
/// assert!(!is_zeroized(&[0, 0, 1]));
/// ```
pub fn is_zeroized(bytes: &[u8]) -> bool {
    bytes.iter().all(|b| *b == 0)
}

/// Returns `true` if no two items are equal.
///
/// # Example
/// ```
/// use shroud_test_utils::all_distinct;
///
/// assert!(all_distinct(&[[1u8; 4], [2u8; 4]]));
/// assert!(!all_distinct(&[7usize, 8, 7]));
/// ```
pub fn all_distinct<T: PartialEq>(items: &[T]) -> bool {
    items
        .iter()
        .enumerate()
        .all(|(i, a)| items[i + 1..].iter().all(|b| a != b))
}
