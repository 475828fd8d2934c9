// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Arithmetic updates.
//!
//! Each operation is a full `get`, compute, `set` cycle under fresh key
//! material. The ciphertext is never modified in place.

use crate::container::SecureContainer;
use crate::error::ContainerError;
use crate::profile::Profile;
use crate::value::Numeric;

impl<T: Numeric, P: Profile> SecureContainer<T, P> {
    /// `value += rhs`. Returns the new value.
    ///
    /// # Errors
    ///
    /// Any error of [`get`](SecureContainer::get) or [`set`](SecureContainer::set).
    pub fn add(&mut self, rhs: T) -> Result<T, ContainerError> {
        self.update(|v| v.num_add(rhs))
    }

    /// `value -= rhs`. Returns the new value.
    ///
    /// # Errors
    ///
    /// Any error of [`get`](SecureContainer::get) or [`set`](SecureContainer::set).
    pub fn sub(&mut self, rhs: T) -> Result<T, ContainerError> {
        self.update(|v| v.num_sub(rhs))
    }

    /// `value *= rhs`. Returns the new value.
    ///
    /// # Errors
    ///
    /// Any error of [`get`](SecureContainer::get) or [`set`](SecureContainer::set).
    pub fn mul(&mut self, rhs: T) -> Result<T, ContainerError> {
        self.update(|v| v.num_mul(rhs))
    }

    /// `value /= rhs`. Returns the new value.
    ///
    /// # Errors
    ///
    /// [`ContainerError::DivisionByZero`] for an integer zero divisor (the
    /// container is left unchanged), plus any error of `get` or `set`.
    pub fn div(&mut self, rhs: T) -> Result<T, ContainerError> {
        let next = self.get()?.num_div(rhs).ok_or(ContainerError::DivisionByZero)?;

        self.set(next)
    }

    /// `value %= rhs`. Returns the new value.
    ///
    /// # Errors
    ///
    /// See [`div`](SecureContainer::div).
    pub fn rem(&mut self, rhs: T) -> Result<T, ContainerError> {
        let next = self.get()?.num_rem(rhs).ok_or(ContainerError::DivisionByZero)?;

        self.set(next)
    }

    /// Adds one and returns the new value.
    ///
    /// # Errors
    ///
    /// See [`add`](SecureContainer::add).
    pub fn increment(&mut self) -> Result<T, ContainerError> {
        self.add(T::ONE)
    }

    /// Subtracts one and returns the new value.
    ///
    /// # Errors
    ///
    /// See [`sub`](SecureContainer::sub).
    pub fn decrement(&mut self) -> Result<T, ContainerError> {
        self.sub(T::ONE)
    }

    /// Adds one and returns the previous value.
    ///
    /// # Errors
    ///
    /// See [`add`](SecureContainer::add).
    pub fn post_increment(&mut self) -> Result<T, ContainerError> {
        let previous = self.get()?;
        self.set(previous.num_add(T::ONE))?;

        Ok(previous)
    }

    /// Subtracts one and returns the previous value.
    ///
    /// # Errors
    ///
    /// See [`sub`](SecureContainer::sub).
    pub fn post_decrement(&mut self) -> Result<T, ContainerError> {
        let previous = self.get()?;
        self.set(previous.num_sub(T::ONE))?;

        Ok(previous)
    }
}
