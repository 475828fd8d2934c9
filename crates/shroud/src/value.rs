// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Value type bounds.

use zerocopy::{FromBytes, Immutable, IntoBytes};
use zeroize::Zeroize;

/// Types a container can hold.
///
/// Fixed size, `Copy`, default-constructible, and convertible to and from raw
/// bytes without padding. Every primitive number, arrays of them, and
/// `#[repr(C)]` structs deriving the zerocopy traits qualify.
///
/// Zero-sized types such as `()` or `[u8; 0]` satisfy the bound but are
/// rejected at compile time when a container is instantiated with them:
///
/// ```compile_fail
/// use shroud::GuardedContainer;
///
/// let _ = GuardedContainer::new(());
/// ```
pub trait SecureValue: Copy + Default + FromBytes + IntoBytes + Immutable + Send + 'static {}

impl<T> SecureValue for T where T: Copy + Default + FromBytes + IntoBytes + Immutable + Send + 'static {}

/// Overwrites a value's bytes with zeros.
#[inline]
pub(crate) fn wipe<T: SecureValue>(value: &mut T) {
    value.as_mut_bytes().zeroize();
}

mod sealed {
    pub trait Sealed {}
}

/// Numeric value types that support arithmetic updates.
///
/// Integer operations wrap. Integer division and remainder return `None` for
/// a zero divisor; float operations follow IEEE 754.
pub trait Numeric: SecureValue + PartialOrd + sealed::Sealed {
    /// Multiplicative identity.
    const ONE: Self;

    #[doc(hidden)]
    fn num_add(self, rhs: Self) -> Self;
    #[doc(hidden)]
    fn num_sub(self, rhs: Self) -> Self;
    #[doc(hidden)]
    fn num_mul(self, rhs: Self) -> Self;
    #[doc(hidden)]
    fn num_div(self, rhs: Self) -> Option<Self>;
    #[doc(hidden)]
    fn num_rem(self, rhs: Self) -> Option<Self>;
}

macro_rules! impl_numeric_int {
    ($($t:ty),* $(,)?) => {
        $(
            impl sealed::Sealed for $t {}

            impl Numeric for $t {
                const ONE: Self = 1;

                #[inline]
                fn num_add(self, rhs: Self) -> Self {
                    self.wrapping_add(rhs)
                }

                #[inline]
                fn num_sub(self, rhs: Self) -> Self {
                    self.wrapping_sub(rhs)
                }

                #[inline]
                fn num_mul(self, rhs: Self) -> Self {
                    self.wrapping_mul(rhs)
                }

                #[inline]
                fn num_div(self, rhs: Self) -> Option<Self> {
                    (rhs != 0).then(|| self.wrapping_div(rhs))
                }

                #[inline]
                fn num_rem(self, rhs: Self) -> Option<Self> {
                    (rhs != 0).then(|| self.wrapping_rem(rhs))
                }
            }
        )*
    };
}

macro_rules! impl_numeric_float {
    ($($t:ty),* $(,)?) => {
        $(
            impl sealed::Sealed for $t {}

            impl Numeric for $t {
                const ONE: Self = 1.0;

                #[inline]
                fn num_add(self, rhs: Self) -> Self {
                    self + rhs
                }

                #[inline]
                fn num_sub(self, rhs: Self) -> Self {
                    self - rhs
                }

                #[inline]
                fn num_mul(self, rhs: Self) -> Self {
                    self * rhs
                }

                #[inline]
                fn num_div(self, rhs: Self) -> Option<Self> {
                    Some(self / rhs)
                }

                #[inline]
                fn num_rem(self, rhs: Self) -> Option<Self> {
                    Some(self % rhs)
                }
            }
        )*
    };
}

impl_numeric_int!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize);
impl_numeric_float!(f32, f64);
