//! Backend traits.
//!
//! Every backend provides three value types: a 4-lane vector, a 4-lane mask and a
//! register-resident scalar. The traits below are the primitive surface each of
//! them implements; everything else in [`crate::vector4d`] is composed on top of
//! it, so composite operations are written once and behave identically on every
//! backend.

use std::fmt::Debug;

use crate::error::{validation_error, Result};
use crate::simd::Backend;

/// A single f64 kept in whatever form the backend computes with.
///
/// On SSE this is the low lane of an `__m128d`, elsewhere a plain f64. It only
/// exists to let chains of scalar operations stay in registers. Comparisons
/// follow f64, so a NaN scalar is unequal to itself.
pub trait SimdScalar: Copy + Debug + PartialOrd + Send + Sync {
    /// Boxes an f64.
    fn set(value: f64) -> Self;

    /// Unboxes the value.
    fn cast(self) -> f64;

    fn add(self, rhs: Self) -> Self;

    fn mul(self, rhs: Self) -> Self;

    fn sqrt(self) -> Self;

    /// `1.0 / sqrt(self)`, computed as a division of the square root.
    fn sqrt_reciprocal(self) -> Self;
}

/// A 4-lane comparison result where each lane is either all ones or all zeros.
pub trait SimdMask4: Copy + Debug + Eq + Send + Sync {
    /// Builds a mask from per-lane booleans (`true` becomes all ones).
    fn from_bools(lanes: [bool; 4]) -> Self;

    /// Returns the raw 64-bit pattern of each lane.
    fn to_bits(self) -> [u64; 4];

    /// Packs the top bit of each lane into bits 0..4 (x is bit 0).
    fn bitmask(self) -> u32;

    /// Builds a mask from raw lane bits, rejecting lanes that are neither 0 nor !0.
    fn try_from_bits(bits: [u64; 4]) -> Result<Self> {
        if let Some(lane) = bits.iter().position(|&b| b != 0 && b != u64::MAX) {
            tracing::debug!(lane, bits = bits[lane], "rejected partial mask lane");
            return Err(validation_error(format!(
                "mask lane {lane} is {:#018x}, lanes must be all ones or all zeros",
                bits[lane]
            )));
        }

        Ok(Self::from_bools(bits.map(|b| b != 0)))
    }

    fn to_bools(self) -> [bool; 4] {
        let bits = self.bitmask();
        [bits & 1 != 0, bits & 2 != 0, bits & 4 != 0, bits & 8 != 0]
    }

    /// True when all 4 lanes are set.
    #[inline(always)]
    fn all(self) -> bool {
        self.bitmask() == 0b1111
    }

    /// True when the [xy] lanes are set.
    #[inline(always)]
    fn all2(self) -> bool {
        self.bitmask() & 0b0011 == 0b0011
    }

    /// True when the [xyz] lanes are set. The w lane is masked out.
    #[inline(always)]
    fn all3(self) -> bool {
        self.bitmask() & 0b0111 == 0b0111
    }

    /// True when any of the 4 lanes is set.
    #[inline(always)]
    fn any(self) -> bool {
        self.bitmask() != 0
    }

    /// True when any of the [xy] lanes is set.
    #[inline(always)]
    fn any2(self) -> bool {
        self.bitmask() & 0b0011 != 0
    }

    /// True when any of the [xyz] lanes is set. The w lane is masked out.
    #[inline(always)]
    fn any3(self) -> bool {
        self.bitmask() & 0b0111 != 0
    }
}

/// The primitive operations a 4-lane f64 backend must implement.
///
/// Implementations must be bit-identical to [`crate::simd::fallback::Vector4d`]
/// for every input, NaN payloads excepted.
pub trait SimdVector4: Copy + Debug + Send + Sync {
    type Mask: SimdMask4;
    type Scalar: SimdScalar;

    /// Which backend this implementation belongs to.
    const BACKEND: Backend;

    fn set(x: f64, y: f64, z: f64, w: f64) -> Self;

    /// Replicates a value in all 4 lanes.
    fn splat(value: f64) -> Self;

    fn splat_scalar(value: Self::Scalar) -> Self;

    #[inline(always)]
    fn zero() -> Self {
        Self::splat(0.0)
    }

    /// Loads `count` lanes from unaligned memory and zero-fills the rest.
    ///
    /// # Safety
    ///
    /// `count` must be in 1..=4 and `ptr` must be valid for reading `count` f64 values.
    unsafe fn load_ptr(ptr: *const f64, count: usize) -> Self;

    /// Stores the first `count` lanes to unaligned memory.
    ///
    /// # Safety
    ///
    /// `count` must be in 1..=4 and `ptr` must be valid for writing `count` f64 values.
    /// No memory past `count` elements is written.
    unsafe fn store_ptr(self, ptr: *mut f64, count: usize);

    fn get_x(self) -> f64;
    fn get_y(self) -> f64;
    fn get_z(self) -> f64;
    fn get_w(self) -> f64;

    #[inline(always)]
    fn get_x_scalar(self) -> Self::Scalar {
        Self::Scalar::set(self.get_x())
    }

    #[inline(always)]
    fn get_y_scalar(self) -> Self::Scalar {
        Self::Scalar::set(self.get_y())
    }

    #[inline(always)]
    fn get_z_scalar(self) -> Self::Scalar {
        Self::Scalar::set(self.get_z())
    }

    #[inline(always)]
    fn get_w_scalar(self) -> Self::Scalar {
        Self::Scalar::set(self.get_w())
    }

    /// Reads lane `lane % 4` (x, y, z, w order).
    #[inline(always)]
    fn get_lane(self, lane: usize) -> f64 {
        match lane % 4 {
            0 => self.get_x(),
            1 => self.get_y(),
            2 => self.get_z(),
            _ => self.get_w(),
        }
    }

    fn with_x(self, value: f64) -> Self;
    fn with_y(self, value: f64) -> Self;
    fn with_z(self, value: f64) -> Self;
    fn with_w(self, value: f64) -> Self;

    fn to_array(self) -> [f64; 4] {
        let mut lanes = [0.0; 4];
        unsafe { self.store_ptr(lanes.as_mut_ptr(), 4) };
        lanes
    }

    fn add(self, rhs: Self) -> Self;
    fn sub(self, rhs: Self) -> Self;
    fn mul(self, rhs: Self) -> Self;
    fn div(self, rhs: Self) -> Self;

    fn mul_scalar(self, rhs: Self::Scalar) -> Self;

    /// Per lane minimum following [`crate::scalar::scalar_min`].
    fn min(self, rhs: Self) -> Self;

    /// Per lane maximum following [`crate::scalar::scalar_max`].
    fn max(self, rhs: Self) -> Self;

    /// Clears the sign bit of every lane.
    fn abs(self) -> Self;

    fn ceil(self) -> Self;
    fn floor(self) -> Self;
    fn round_symmetric(self) -> Self;
    fn round_bankers(self) -> Self;

    fn cmp_eq(self, rhs: Self) -> Self::Mask;
    fn cmp_lt(self, rhs: Self) -> Self::Mask;
    fn cmp_le(self, rhs: Self) -> Self::Mask;
    fn cmp_gt(self, rhs: Self) -> Self::Mask;
    fn cmp_ge(self, rhs: Self) -> Self::Mask;

    /// Bitwise select: lanes of `if_true` where `mask` is set, `if_false` elsewhere.
    fn select(mask: Self::Mask, if_true: Self, if_false: Self) -> Self;

    /// Magnitude of `self` with the sign bit of `control`.
    fn copy_sign(self, control: Self) -> Self;

    /// Builds `[C0, C1, C2, C3]` out of the 8 component symbols, where 0..4 index
    /// into `self` and 4..8 index into `other`.
    #[inline(always)]
    fn mix<const C0: u8, const C1: u8, const C2: u8, const C3: u8>(self, other: Self) -> Self {
        const {
            assert!(
                C0 < 8 && C1 < 8 && C2 < 8 && C3 < 8,
                "mix components must be in 0..8"
            )
        };

        let pick = |component: u8| {
            if component < 4 {
                self.get_lane(component as usize)
            } else {
                other.get_lane(component as usize)
            }
        };

        Self::set(pick(C0), pick(C1), pick(C2), pick(C3))
    }
}
