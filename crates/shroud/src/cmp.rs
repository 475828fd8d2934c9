// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Comparisons against plain values and other containers.
//!
//! The operator forms decrypt on every call. A failed read never compares
//! equal and is unordered; use `try_eq` / `try_cmp` to see the error.

use core::cmp::Ordering;

use crate::container::SecureContainer;
use crate::error::ContainerError;
use crate::profile::Profile;
use crate::value::SecureValue;

impl<T: SecureValue + PartialOrd, P: Profile> SecureContainer<T, P> {
    /// Compares the stored value with `other`.
    ///
    /// # Errors
    ///
    /// Any error of [`get`](SecureContainer::get).
    pub fn try_eq(&self, other: &T) -> Result<bool, ContainerError> {
        Ok(self.get()? == *other)
    }

    /// Orders the stored value against `other`.
    ///
    /// # Errors
    ///
    /// Any error of [`get`](SecureContainer::get).
    pub fn try_cmp(&self, other: &T) -> Result<Option<Ordering>, ContainerError> {
        Ok(self.get()?.partial_cmp(other))
    }
}

impl<T: SecureValue + PartialEq, P: Profile> PartialEq<T> for SecureContainer<T, P> {
    fn eq(&self, other: &T) -> bool {
        matches!(self.get(), Ok(value) if value == *other)
    }
}

impl<T: SecureValue + PartialEq, P: Profile> PartialEq for SecureContainer<T, P> {
    fn eq(&self, other: &Self) -> bool {
        match (self.get(), other.get()) {
            (Ok(a), Ok(b)) => a == b,
            _ => false,
        }
    }
}

impl<T: SecureValue + PartialOrd, P: Profile> PartialOrd<T> for SecureContainer<T, P> {
    fn partial_cmp(&self, other: &T) -> Option<Ordering> {
        self.get().ok()?.partial_cmp(other)
    }
}

impl<T: SecureValue + PartialOrd, P: Profile> PartialOrd for SecureContainer<T, P> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.get().ok()?.partial_cmp(&other.get().ok()?)
    }
}
