// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use core::fmt;

use crate::container::SecureContainer;
use crate::profile::Profile;
use crate::value::SecureValue;

/// Decrypts and prints the value, or `<integrity failure>` if the read fails.
impl<T: SecureValue + fmt::Display, P: Profile> fmt::Display for SecureContainer<T, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.get() {
            Ok(value) => fmt::Display::fmt(&value, f),
            Err(_) => f.write_str("<integrity failure>"),
        }
    }
}

impl<T: SecureValue, P: Profile> fmt::Debug for SecureContainer<T, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SecureContainer")
            .field("profile", &P::NAME)
            .field("state", &self.state())
            .field("decoy_address", &format_args!("{:#x}", self.decoy_address()))
            .finish_non_exhaustive()
    }
}
