//! Backend implementations of the 4-lane f64 vector.
//!
//! Exactly one native backend is compiled in, chosen by `build.rs` through one of
//! the `avx`, `sse4`, `sse2`, `neon` or `fallback` cfg flags. The portable
//! [`fallback`] backend is always compiled so that the native backend can be
//! checked against it.
//!
//! | Backend | Module | Registers |
//! |---------|--------|-----------|
//! | AVX | [`sse2`] with AVX refinements | `__m128d` pair (VEX encoded) |
//! | SSE4.1 | [`sse2`] with SSE4.1 refinements | `__m128d` pair |
//! | SSE2 | [`sse2`] | `__m128d` pair |
//! | NEON | [`neon`] | `float64x2_t` pair |
//! | Scalar | [`fallback`] | four f64 fields |

use std::fmt;
use std::str::FromStr;

use crate::error::Simd4dError;

/// Implements the std operators and conversions of a backend vector in terms of
/// its [`traits::SimdVector4`] primitives.
macro_rules! impl_vector4_operators {
    ($vector:ty) => {
        impl ::std::ops::Add for $vector {
            type Output = Self;

            #[inline(always)]
            fn add(self, rhs: Self) -> Self {
                <Self as $crate::simd::traits::SimdVector4>::add(self, rhs)
            }
        }

        impl ::std::ops::Sub for $vector {
            type Output = Self;

            #[inline(always)]
            fn sub(self, rhs: Self) -> Self {
                <Self as $crate::simd::traits::SimdVector4>::sub(self, rhs)
            }
        }

        impl ::std::ops::Mul for $vector {
            type Output = Self;

            #[inline(always)]
            fn mul(self, rhs: Self) -> Self {
                <Self as $crate::simd::traits::SimdVector4>::mul(self, rhs)
            }
        }

        impl ::std::ops::Mul<f64> for $vector {
            type Output = Self;

            #[inline(always)]
            fn mul(self, rhs: f64) -> Self {
                <Self as $crate::simd::traits::SimdVector4>::mul(
                    self,
                    <Self as $crate::simd::traits::SimdVector4>::splat(rhs),
                )
            }
        }

        impl ::std::ops::Div for $vector {
            type Output = Self;

            #[inline(always)]
            fn div(self, rhs: Self) -> Self {
                <Self as $crate::simd::traits::SimdVector4>::div(self, rhs)
            }
        }

        impl ::std::ops::Neg for $vector {
            type Output = Self;

            #[inline(always)]
            fn neg(self) -> Self {
                <Self as $crate::simd::traits::SimdVector4>::mul(
                    self,
                    <Self as $crate::simd::traits::SimdVector4>::splat(-1.0),
                )
            }
        }

        impl ::std::default::Default for $vector {
            #[inline(always)]
            fn default() -> Self {
                <Self as $crate::simd::traits::SimdVector4>::zero()
            }
        }

        impl ::num::Zero for $vector {
            #[inline(always)]
            fn zero() -> Self {
                <Self as $crate::simd::traits::SimdVector4>::zero()
            }

            fn is_zero(&self) -> bool {
                use $crate::simd::traits::SimdMask4;

                <Self as $crate::simd::traits::SimdVector4>::cmp_eq(
                    *self,
                    <Self as $crate::simd::traits::SimdVector4>::zero(),
                )
                .all()
            }
        }

        impl ::num::One for $vector {
            #[inline(always)]
            fn one() -> Self {
                <Self as $crate::simd::traits::SimdVector4>::splat(1.0)
            }
        }

        impl ::std::convert::From<[f64; 4]> for $vector {
            #[inline(always)]
            fn from(lanes: [f64; 4]) -> Self {
                <Self as $crate::simd::traits::SimdVector4>::set(
                    lanes[0], lanes[1], lanes[2], lanes[3],
                )
            }
        }

        impl ::std::convert::From<$vector> for [f64; 4] {
            #[inline(always)]
            fn from(vector: $vector) -> Self {
                <$vector as $crate::simd::traits::SimdVector4>::to_array(vector)
            }
        }

        /// Loads up to 4 lanes from the slice, zero-filling the rest.
        impl ::std::convert::TryFrom<&[f64]> for $vector {
            type Error = $crate::error::Simd4dError;

            fn try_from(slice: &[f64]) -> $crate::error::Result<Self> {
                $crate::error::ensure_len("try_from", 1, slice.len())?;

                let count = slice.len().min(4);
                Ok(unsafe {
                    <Self as $crate::simd::traits::SimdVector4>::load_ptr(slice.as_ptr(), count)
                })
            }
        }
    };
}

/// Implements lane-wise equality of a backend mask through its raw lane bits.
macro_rules! impl_mask4_eq {
    ($mask:ty) => {
        impl ::std::cmp::PartialEq for $mask {
            #[inline]
            fn eq(&self, other: &Self) -> bool {
                use $crate::simd::traits::SimdMask4;

                self.to_bits() == other.to_bits()
            }
        }

        impl ::std::cmp::Eq for $mask {}
    };
}

/// Implements f64 comparison of a backend scalar through its unboxed value.
macro_rules! impl_scalar_cmp {
    ($scalar:ty) => {
        impl ::std::cmp::PartialEq for $scalar {
            #[inline]
            fn eq(&self, other: &Self) -> bool {
                use $crate::simd::traits::SimdScalar;

                self.cast() == other.cast()
            }
        }

        impl ::std::cmp::PartialOrd for $scalar {
            #[inline]
            fn partial_cmp(&self, other: &Self) -> Option<::std::cmp::Ordering> {
                use $crate::simd::traits::SimdScalar;

                self.cast().partial_cmp(&other.cast())
            }
        }
    };
}

pub mod traits;

pub mod fallback;

#[cfg(any(avx, sse4, sse2))]
pub mod sse2;

#[cfg(neon)]
pub mod neon;

#[cfg(any(avx, sse4, sse2))]
pub use sse2::{Mask4d, Scalard, Vector4d};

#[cfg(neon)]
pub use neon::{Mask4d, Scalard, Vector4d};

#[cfg(not(any(avx, sse4, sse2, neon)))]
pub use fallback::{Mask4d, Scalard, Vector4d};

/// The instruction sets a vector backend can be built on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Backend {
    Avx,
    Sse4,
    Sse2,
    Neon,
    Scalar,
}

impl Backend {
    /// The backend selected at build time.
    pub const ACTIVE: Backend = if cfg!(avx) {
        Backend::Avx
    } else if cfg!(sse4) {
        Backend::Sse4
    } else if cfg!(sse2) {
        Backend::Sse2
    } else if cfg!(neon) {
        Backend::Neon
    } else {
        Backend::Scalar
    };

    /// Every backend, widest first.
    pub const ALL: [Backend; 5] = [
        Backend::Avx,
        Backend::Sse4,
        Backend::Sse2,
        Backend::Neon,
        Backend::Scalar,
    ];

    /// The lowercase name also accepted by `SIMD4D_BACKEND`.
    pub const fn name(self) -> &'static str {
        match self {
            Backend::Avx => "avx",
            Backend::Sse4 => "sse4",
            Backend::Sse2 => "sse2",
            Backend::Neon => "neon",
            Backend::Scalar => "scalar",
        }
    }

    /// True for every backend except the portable scalar one.
    pub const fn is_simd(self) -> bool {
        !matches!(self, Backend::Scalar)
    }
}

impl fmt::Display for Backend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Backend {
    type Err = Simd4dError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        let normalized = name.trim().to_ascii_lowercase();

        match normalized.as_str() {
            "avx" => Ok(Backend::Avx),
            "sse4" | "sse4.1" | "sse4_1" => Ok(Backend::Sse4),
            "sse2" => Ok(Backend::Sse2),
            "neon" => Ok(Backend::Neon),
            "scalar" | "fallback" => Ok(Backend::Scalar),
            _ => {
                tracing::debug!(name, "rejected unknown backend name");
                Err(Simd4dError::UnknownBackend {
                    name: name.to_string(),
                })
            }
        }
    }
}

/// Returns the backend the native [`Vector4d`] was built on.
#[inline]
pub fn active_backend() -> Backend {
    Backend::ACTIVE
}
