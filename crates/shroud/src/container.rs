// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use core::cell::Cell;
use core::marker::PhantomData;
use core::mem::size_of;

use shroud_cipher::NONCE_SIZE;
use shroud_guard::RealHandle;
use subtle::ConstantTimeEq;
use zerocopy::{FromZeros, IntoBytes};
use zeroize::{Zeroize, Zeroizing};

use crate::checksum::fnv1a;
use crate::error::{ContainerError, IntegrityViolation};
use crate::profile::{Guarded, Lightweight, Profile};
use crate::runtime::Runtime;
use crate::state::ContainerState;
use crate::value::{SecureValue, wipe};

/// An obfuscated value.
///
/// The plaintext never rests in memory: every write draws a fresh key (and
/// nonce), stores only the ciphertext, and, for [`Guarded`] containers,
/// mirrors it into separately allocated backing memory that is checked on
/// every read.
///
/// Not `Sync`. Concurrent access to one container must be serialized by the
/// caller; different containers may be used from different threads freely.
///
/// ```rust
/// use shroud::GuardedContainer;
///
/// let mut health = GuardedContainer::new(100u32)?;
/// health.sub(25)?;
/// health.rekey()?;
///
/// assert_eq!(health.get()?, 75);
/// assert_ne!(health.get_raw()?, 75);
/// # Ok::<(), shroud::ContainerError>(())
/// ```
pub struct SecureContainer<T: SecureValue, P: Profile = Guarded> {
    ciphertext: T,
    key: T,
    nonce: [u8; NONCE_SIZE],
    backing: Option<RealHandle>,
    decoy_address: usize,
    checksum: u32,
    state: Cell<ContainerState>,
    runtime: Runtime,
    _profile: PhantomData<P>,
}

/// Container with backing memory, decoy address and integrity checks.
pub type GuardedContainer<T> = SecureContainer<T, Guarded>;

/// XOR-only container without backing memory or validation.
pub type LightweightContainer<T> = SecureContainer<T, Lightweight>;

// Material produced for a write but not yet committed. Wiped on drop, so an
// aborted write leaves nothing behind.
struct Pending<T: SecureValue> {
    ciphertext: T,
    key: T,
    nonce: [u8; NONCE_SIZE],
    backing: Option<RealHandle>,
    decoy_address: usize,
}

impl<T: SecureValue> Pending<T> {
    fn new() -> Self {
        Self {
            ciphertext: T::new_zeroed(),
            key: T::new_zeroed(),
            nonce: [0; NONCE_SIZE],
            backing: None,
            decoy_address: 0,
        }
    }
}

impl<T: SecureValue> Drop for Pending<T> {
    fn drop(&mut self) {
        wipe(&mut self.ciphertext);
        wipe(&mut self.key);
        self.nonce.zeroize();
    }
}

impl<T: SecureValue, P: Profile> SecureContainer<T, P> {
    // Backing blocks and keys need at least one byte.
    const NOT_ZERO_SIZED: () = assert!(size_of::<T>() > 0, "SecureContainer cannot hold a zero-sized type");

    fn empty(runtime: Runtime) -> Self {
        let () = Self::NOT_ZERO_SIZED;

        Self {
            ciphertext: T::new_zeroed(),
            key: T::new_zeroed(),
            nonce: [0; NONCE_SIZE],
            backing: None,
            decoy_address: 0,
            checksum: 0,
            state: Cell::new(ContainerState::Uninitialized),
            runtime,
            _profile: PhantomData,
        }
    }

    /// Creates a container holding `value` on the process-wide runtime.
    ///
    /// # Errors
    ///
    /// - [`ContainerError::EntropyUnavailable`] if key material cannot be drawn
    /// - [`ContainerError::AllocationFailure`] if backing memory is denied
    pub fn new(value: T) -> Result<Self, ContainerError> {
        Self::new_in(value, &Runtime::global())
    }

    /// Creates a container holding `value` on `runtime`.
    ///
    /// # Errors
    ///
    /// See [`SecureContainer::new`].
    pub fn new_in(value: T, runtime: &Runtime) -> Result<Self, ContainerError> {
        let mut container = Self::empty(runtime.clone());
        container.set(value)?;

        Ok(container)
    }

    /// Creates a container holding `T::default()`.
    ///
    /// # Errors
    ///
    /// See [`SecureContainer::new`].
    pub fn try_default() -> Result<Self, ContainerError> {
        Self::new(T::default())
    }

    /// Encrypts and stores `value` under fresh key material.
    ///
    /// Returns `value`. On error the container is left exactly as it was.
    ///
    /// # Errors
    ///
    /// See [`SecureContainer::new`].
    pub fn set(&mut self, value: T) -> Result<T, ContainerError> {
        let mut pending = Pending::new();
        pending.ciphertext = value;

        P::generate(self.runtime.entropy(), pending.key.as_mut_bytes(), &mut pending.nonce)?;
        P::apply(pending.key.as_bytes(), &pending.nonce, pending.ciphertext.as_mut_bytes());

        self.attach(&mut pending)?;
        self.commit(pending);

        Ok(value)
    }

    /// Decrypts and returns the stored value.
    ///
    /// Guarded containers first check that backing memory still mirrors the
    /// ciphertext and that the checksum holds, then confirm the decryption
    /// round-trips. Any failure moves the container to
    /// [`ContainerState::Tampered`].
    ///
    /// # Errors
    ///
    /// - [`ContainerError::InvalidStateAccess`] if the container holds no value
    /// - [`ContainerError::IntegrityFailure`] if a check fails or failed before
    pub fn get(&self) -> Result<T, ContainerError> {
        self.check_integrity()?;

        let mut plain = self.ciphertext;
        P::apply(self.key.as_bytes(), &self.nonce, plain.as_mut_bytes());

        // With an XOR keystream the same key and nonce always round-trip, so
        // this only fires if the cipher stops being its own inverse. A
        // rewritten key passes every check and decrypts to garbage.
        if P::GUARDED {
            let mut verify = plain;
            P::apply(self.key.as_bytes(), &self.nonce, verify.as_mut_bytes());

            let round_trip = bool::from(verify.as_bytes().ct_eq(self.ciphertext.as_bytes()));
            wipe(&mut verify);

            if !round_trip {
                wipe(&mut plain);
                return Err(self.flag_tampered(IntegrityViolation::RoundTripMismatch));
            }
        }

        Ok(plain)
    }

    /// Returns the ciphertext reinterpreted as `T`, after the same checks as
    /// [`get`](SecureContainer::get).
    ///
    /// Diagnostic only; the result is not the stored value.
    ///
    /// # Errors
    ///
    /// See [`SecureContainer::get`].
    pub fn get_raw(&self) -> Result<T, ContainerError> {
        self.check_integrity()?;

        Ok(self.ciphertext)
    }

    /// Re-encrypts the current value under fresh key material.
    ///
    /// # Errors
    ///
    /// Any error of [`get`](SecureContainer::get) or [`set`](SecureContainer::set).
    pub fn rekey(&mut self) -> Result<(), ContainerError> {
        let mut value = self.get()?;
        let result = self.set(value);
        wipe(&mut value);
        result?;

        log::trace!("container: rekeyed {} value, decoy {:#x}", P::NAME, self.decoy_address);

        Ok(())
    }

    /// Replaces the value with `f(current)` and returns the new value.
    ///
    /// # Errors
    ///
    /// Any error of [`get`](SecureContainer::get) or [`set`](SecureContainer::set).
    pub fn update<F>(&mut self, f: F) -> Result<T, ContainerError>
    where
        F: FnOnce(T) -> T,
    {
        let current = self.get()?;

        self.set(f(current))
    }

    /// Flat byte layout: `nonce ‖ key ‖ ciphertext` (guarded) or
    /// `key ‖ ciphertext` (lightweight).
    ///
    /// Contains key material; the buffer is wiped on drop.
    pub fn serialize(&self) -> Zeroizing<Vec<u8>> {
        let mut out = Zeroizing::new(Vec::with_capacity(Self::serialized_len()));

        out.extend_from_slice(&self.nonce[..P::NONCE_LEN]);
        out.extend_from_slice(self.key.as_bytes());
        out.extend_from_slice(self.ciphertext.as_bytes());

        out
    }

    /// Restores the fields written by [`serialize`](SecureContainer::serialize).
    ///
    /// Only the length is checked. The ciphertext is mirrored into fresh
    /// backing memory; whether it decrypts to something meaningful is not.
    ///
    /// # Errors
    ///
    /// - [`ContainerError::DeserializeLengthMismatch`] on wrong input length,
    ///   leaving the container untouched
    /// - [`ContainerError::AllocationFailure`] if backing memory is denied
    pub fn deserialize(&mut self, bytes: &[u8]) -> Result<(), ContainerError> {
        let expected = Self::serialized_len();

        if bytes.len() != expected {
            return Err(ContainerError::DeserializeLengthMismatch {
                expected,
                actual: bytes.len(),
            });
        }

        let (nonce, rest) = bytes.split_at(P::NONCE_LEN);
        let (key, ciphertext) = rest.split_at(size_of::<T>());

        let mut pending = Pending::<T>::new();
        pending.nonce[..P::NONCE_LEN].copy_from_slice(nonce);
        pending.key.as_mut_bytes().copy_from_slice(key);
        pending.ciphertext.as_mut_bytes().copy_from_slice(ciphertext);

        self.attach(&mut pending)?;
        self.commit(pending);

        Ok(())
    }

    /// Length of [`serialize`](SecureContainer::serialize) output.
    pub fn serialized_len() -> usize {
        P::serialized_len(size_of::<T>())
    }

    /// Wipes all secret material and releases backing memory.
    ///
    /// The container becomes [`ContainerState::Uninitialized`]; `set` revives it.
    pub fn clear(&mut self) {
        self.wipe_material();

        if let Some(backing) = self.backing.take() {
            self.runtime.guard().free_real(backing);
        }

        self.decoy_address = 0;
        self.checksum = 0;
        self.state.set(ContainerState::Uninitialized);
    }

    /// Decrypts and re-encrypts into an independent container on the same
    /// runtime. No key material is shared.
    ///
    /// # Errors
    ///
    /// Any error of [`get`](SecureContainer::get) or [`new_in`](SecureContainer::new_in).
    pub fn try_clone(&self) -> Result<Self, ContainerError> {
        let mut value = self.get()?;
        let clone = Self::new_in(value, &self.runtime);
        wipe(&mut value);

        clone
    }

    /// The stored ciphertext.
    pub fn ciphertext(&self) -> &[u8] {
        self.ciphertext.as_bytes()
    }

    /// FNV-1a checksum of the ciphertext, as of the last write.
    pub fn checksum(&self) -> u32 {
        self.checksum
    }

    /// Address of the backing memory, if any.
    pub fn real_address(&self) -> Option<usize> {
        self.backing.as_ref().map(RealHandle::address)
    }

    /// The decoy address (`0` when none is held). Never dereference it.
    pub fn decoy_address(&self) -> usize {
        self.decoy_address
    }

    /// Current lifecycle state.
    pub fn state(&self) -> ContainerState {
        self.state.get()
    }

    /// Returns `true` in [`ContainerState::Valid`].
    pub fn is_valid(&self) -> bool {
        self.state.get() == ContainerState::Valid
    }

    /// The runtime this container allocates from.
    pub fn runtime(&self) -> &Runtime {
        &self.runtime
    }

    /// Mutable access to the live backing bytes, bypassing the write path.
    #[cfg(any(test, feature = "test-utils"))]
    pub fn __unsafe_backing_mut(&mut self) -> Option<&mut [u8]> {
        self.backing.as_mut().map(RealHandle::__unsafe_bytes_mut)
    }

    /// Mutable access to the stored key, bypassing the write path.
    #[cfg(any(test, feature = "test-utils"))]
    pub fn __unsafe_key_mut(&mut self) -> &mut [u8] {
        self.key.as_mut_bytes()
    }

    /// Mutable access to the stored ciphertext, bypassing the write path.
    #[cfg(any(test, feature = "test-utils"))]
    pub fn __unsafe_ciphertext_mut(&mut self) -> &mut [u8] {
        self.ciphertext.as_mut_bytes()
    }

    // Guarded profiles mirror the ciphertext into backing memory and take a
    // decoy address. Nothing in `self` changes here.
    fn attach(&self, pending: &mut Pending<T>) -> Result<(), ContainerError> {
        if !P::GUARDED {
            return Ok(());
        }

        let guard = self.runtime.guard();

        pending.backing = Some(guard.store(pending.ciphertext.as_bytes())?);
        pending.decoy_address = guard.allocate_decoy(size_of::<T>())?;

        Ok(())
    }

    fn commit(&mut self, mut pending: Pending<T>) {
        self.wipe_material();

        self.ciphertext = pending.ciphertext;
        self.key = pending.key;
        self.nonce = pending.nonce;

        if let Some(old) = core::mem::replace(&mut self.backing, pending.backing.take()) {
            self.runtime.guard().free_real(old);
        }

        self.decoy_address = pending.decoy_address;
        self.checksum = fnv1a(self.ciphertext.as_bytes());
        self.state.set(ContainerState::Valid);
    }

    fn check_integrity(&self) -> Result<(), ContainerError> {
        match self.state.get() {
            ContainerState::Uninitialized => return Err(ContainerError::InvalidStateAccess),
            ContainerState::Tampered => {
                return Err(ContainerError::IntegrityFailure(IntegrityViolation::Tampered));
            }
            ContainerState::Valid => {}
        }

        if !P::GUARDED {
            return Ok(());
        }

        let Some(backing) = self.backing.as_ref() else {
            return Err(ContainerError::InvalidStateAccess);
        };

        if !self.runtime.guard().validate(backing, self.ciphertext.as_bytes()) {
            return Err(self.flag_tampered(IntegrityViolation::BackingMismatch));
        }

        if fnv1a(self.ciphertext.as_bytes()) != self.checksum {
            return Err(self.flag_tampered(IntegrityViolation::ChecksumMismatch));
        }

        Ok(())
    }

    fn flag_tampered(&self, violation: IntegrityViolation) -> ContainerError {
        self.state.set(ContainerState::Tampered);

        log::warn!(
            "container: {} at decoy {:#x}, marked as tampered",
            violation,
            self.decoy_address
        );

        ContainerError::IntegrityFailure(violation)
    }

    fn wipe_material(&mut self) {
        wipe(&mut self.ciphertext);
        wipe(&mut self.key);
        self.nonce.zeroize();
    }
}

impl<T: SecureValue, P: Profile> Drop for SecureContainer<T, P> {
    fn drop(&mut self) {
        self.clear();
    }
}
