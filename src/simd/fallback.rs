//! Portable scalar backend.
//!
//! Four plain f64 fields with every operation applied lane by lane through the
//! kernels in [`crate::scalar`]. This backend is always compiled: it is the
//! native backend when no SIMD instruction set is available and the reference
//! the SIMD backends are tested against.

use crate::scalar::{
    scalar_ceil, scalar_floor, scalar_max, scalar_min, scalar_round_bankers,
    scalar_round_symmetric,
};
use crate::simd::traits::{SimdMask4, SimdScalar, SimdVector4};
use crate::simd::Backend;

/// Lane value of a set mask lane.
const MASK_TRUE: u64 = u64::MAX;

/// A 4-lane f64 vector stored as four fields.
#[derive(Clone, Copy, Debug)]
#[repr(C)]
pub struct Vector4d {
    x: f64,
    y: f64,
    z: f64,
    w: f64,
}

/// A 4-lane mask stored as four 64-bit patterns.
#[derive(Clone, Copy, Debug)]
#[repr(C)]
pub struct Mask4d {
    x: u64,
    y: u64,
    z: u64,
    w: u64,
}

/// A plain f64.
#[derive(Clone, Copy, Debug)]
pub struct Scalard {
    value: f64,
}

impl Vector4d {
    #[inline(always)]
    fn map(self, op: impl Fn(f64) -> f64) -> Self {
        Self {
            x: op(self.x),
            y: op(self.y),
            z: op(self.z),
            w: op(self.w),
        }
    }

    #[inline(always)]
    fn zip(self, rhs: Self, op: impl Fn(f64, f64) -> f64) -> Self {
        Self {
            x: op(self.x, rhs.x),
            y: op(self.y, rhs.y),
            z: op(self.z, rhs.z),
            w: op(self.w, rhs.w),
        }
    }

    #[inline(always)]
    fn compare(self, rhs: Self, op: impl Fn(f64, f64) -> bool) -> Mask4d {
        Mask4d::from_bools([
            op(self.x, rhs.x),
            op(self.y, rhs.y),
            op(self.z, rhs.z),
            op(self.w, rhs.w),
        ])
    }
}

#[inline(always)]
fn select_lane(mask: u64, if_true: f64, if_false: f64) -> f64 {
    f64::from_bits((mask & if_true.to_bits()) | (!mask & if_false.to_bits()))
}

impl SimdScalar for Scalard {
    #[inline(always)]
    fn set(value: f64) -> Self {
        Self { value }
    }

    #[inline(always)]
    fn cast(self) -> f64 {
        self.value
    }

    #[inline(always)]
    fn add(self, rhs: Self) -> Self {
        Self {
            value: self.value + rhs.value,
        }
    }

    #[inline(always)]
    fn mul(self, rhs: Self) -> Self {
        Self {
            value: self.value * rhs.value,
        }
    }

    #[inline(always)]
    fn sqrt(self) -> Self {
        Self {
            value: self.value.sqrt(),
        }
    }

    #[inline(always)]
    fn sqrt_reciprocal(self) -> Self {
        Self {
            value: 1.0 / self.value.sqrt(),
        }
    }
}

impl SimdMask4 for Mask4d {
    #[inline(always)]
    fn from_bools(lanes: [bool; 4]) -> Self {
        let lane = |set: bool| if set { MASK_TRUE } else { 0 };

        Self {
            x: lane(lanes[0]),
            y: lane(lanes[1]),
            z: lane(lanes[2]),
            w: lane(lanes[3]),
        }
    }

    #[inline(always)]
    fn to_bits(self) -> [u64; 4] {
        [self.x, self.y, self.z, self.w]
    }

    #[inline(always)]
    fn bitmask(self) -> u32 {
        ((self.x >> 63) | ((self.y >> 63) << 1) | ((self.z >> 63) << 2) | ((self.w >> 63) << 3))
            as u32
    }
}

impl SimdVector4 for Vector4d {
    type Mask = Mask4d;
    type Scalar = Scalard;

    const BACKEND: Backend = Backend::Scalar;

    #[inline(always)]
    fn set(x: f64, y: f64, z: f64, w: f64) -> Self {
        Self { x, y, z, w }
    }

    #[inline(always)]
    fn splat(value: f64) -> Self {
        Self::set(value, value, value, value)
    }

    #[inline(always)]
    fn splat_scalar(value: Scalard) -> Self {
        Self::splat(value.value)
    }

    #[inline(always)]
    unsafe fn load_ptr(ptr: *const f64, count: usize) -> Self {
        debug_assert!((1..=4).contains(&count), "lane count must be in 1..=4");

        let lane = |index: usize| {
            if index < count {
                unsafe { ptr.add(index).read_unaligned() }
            } else {
                0.0
            }
        };

        Self::set(lane(0), lane(1), lane(2), lane(3))
    }

    #[inline(always)]
    unsafe fn store_ptr(self, ptr: *mut f64, count: usize) {
        debug_assert!((1..=4).contains(&count), "lane count must be in 1..=4");

        let lanes = [self.x, self.y, self.z, self.w];
        for (index, lane) in lanes.into_iter().enumerate().take(count) {
            unsafe { ptr.add(index).write_unaligned(lane) };
        }
    }

    #[inline(always)]
    fn get_x(self) -> f64 {
        self.x
    }

    #[inline(always)]
    fn get_y(self) -> f64 {
        self.y
    }

    #[inline(always)]
    fn get_z(self) -> f64 {
        self.z
    }

    #[inline(always)]
    fn get_w(self) -> f64 {
        self.w
    }

    #[inline(always)]
    fn with_x(self, value: f64) -> Self {
        Self { x: value, ..self }
    }

    #[inline(always)]
    fn with_y(self, value: f64) -> Self {
        Self { y: value, ..self }
    }

    #[inline(always)]
    fn with_z(self, value: f64) -> Self {
        Self { z: value, ..self }
    }

    #[inline(always)]
    fn with_w(self, value: f64) -> Self {
        Self { w: value, ..self }
    }

    #[inline(always)]
    fn to_array(self) -> [f64; 4] {
        [self.x, self.y, self.z, self.w]
    }

    #[inline(always)]
    fn add(self, rhs: Self) -> Self {
        self.zip(rhs, |a, b| a + b)
    }

    #[inline(always)]
    fn sub(self, rhs: Self) -> Self {
        self.zip(rhs, |a, b| a - b)
    }

    #[inline(always)]
    fn mul(self, rhs: Self) -> Self {
        self.zip(rhs, |a, b| a * b)
    }

    #[inline(always)]
    fn div(self, rhs: Self) -> Self {
        self.zip(rhs, |a, b| a / b)
    }

    #[inline(always)]
    fn mul_scalar(self, rhs: Scalard) -> Self {
        self.map(|a| a * rhs.value)
    }

    #[inline(always)]
    fn min(self, rhs: Self) -> Self {
        self.zip(rhs, scalar_min)
    }

    #[inline(always)]
    fn max(self, rhs: Self) -> Self {
        self.zip(rhs, scalar_max)
    }

    #[inline(always)]
    fn abs(self) -> Self {
        self.map(f64::abs)
    }

    #[inline(always)]
    fn ceil(self) -> Self {
        self.map(scalar_ceil)
    }

    #[inline(always)]
    fn floor(self) -> Self {
        self.map(scalar_floor)
    }

    #[inline(always)]
    fn round_symmetric(self) -> Self {
        self.map(scalar_round_symmetric)
    }

    #[inline(always)]
    fn round_bankers(self) -> Self {
        self.map(scalar_round_bankers)
    }

    #[inline(always)]
    fn cmp_eq(self, rhs: Self) -> Mask4d {
        self.compare(rhs, |a, b| a == b)
    }

    #[inline(always)]
    fn cmp_lt(self, rhs: Self) -> Mask4d {
        self.compare(rhs, |a, b| a < b)
    }

    #[inline(always)]
    fn cmp_le(self, rhs: Self) -> Mask4d {
        self.compare(rhs, |a, b| a <= b)
    }

    #[inline(always)]
    fn cmp_gt(self, rhs: Self) -> Mask4d {
        self.compare(rhs, |a, b| a > b)
    }

    #[inline(always)]
    fn cmp_ge(self, rhs: Self) -> Mask4d {
        self.compare(rhs, |a, b| a >= b)
    }

    #[inline(always)]
    fn select(mask: Mask4d, if_true: Self, if_false: Self) -> Self {
        Self {
            x: select_lane(mask.x, if_true.x, if_false.x),
            y: select_lane(mask.y, if_true.y, if_false.y),
            z: select_lane(mask.z, if_true.z, if_false.z),
            w: select_lane(mask.w, if_true.w, if_false.w),
        }
    }

    #[inline(always)]
    fn copy_sign(self, control: Self) -> Self {
        self.zip(control, f64::copysign)
    }
}

impl_vector4_operators!(Vector4d);
impl_mask4_eq!(Mask4d);
impl_scalar_cmp!(Scalard);
