use std::arch::aarch64::*;

use crate::simd::fallback::Scalard;
use crate::simd::neon::math::{copy_sign_f64x2, max_f64x2, min_f64x2, round_symmetric_f64x2};
use crate::simd::traits::{SimdMask4, SimdScalar, SimdVector4};
use crate::simd::Backend;

/// A 4-lane f64 vector held in two NEON registers.
#[derive(Clone, Copy, Debug)]
pub struct Vector4d {
    xy: float64x2_t,
    zw: float64x2_t,
}

/// A 4-lane mask held in two NEON registers.
#[derive(Clone, Copy, Debug)]
pub struct Mask4d {
    xy: uint64x2_t,
    zw: uint64x2_t,
}

impl SimdMask4 for Mask4d {
    #[inline(always)]
    fn from_bools(lanes: [bool; 4]) -> Self {
        let bits = lanes.map(|set| if set { u64::MAX } else { 0 });

        unsafe {
            Self {
                xy: vld1q_u64(bits.as_ptr()),
                zw: vld1q_u64(bits.as_ptr().add(2)),
            }
        }
    }

    #[inline(always)]
    fn to_bits(self) -> [u64; 4] {
        let mut bits = [0u64; 4];

        unsafe {
            vst1q_u64(bits.as_mut_ptr(), self.xy);
            vst1q_u64(bits.as_mut_ptr().add(2), self.zw);
        }

        bits
    }

    #[inline(always)]
    fn bitmask(self) -> u32 {
        unsafe {
            let x = vgetq_lane_u64::<0>(self.xy) >> 63;
            let y = vgetq_lane_u64::<1>(self.xy) >> 63;
            let z = vgetq_lane_u64::<0>(self.zw) >> 63;
            let w = vgetq_lane_u64::<1>(self.zw) >> 63;
            (x | (y << 1) | (z << 2) | (w << 3)) as u32
        }
    }
}

impl SimdVector4 for Vector4d {
    type Mask = Mask4d;
    type Scalar = Scalard;

    const BACKEND: Backend = Backend::Neon;

    #[inline(always)]
    fn set(x: f64, y: f64, z: f64, w: f64) -> Self {
        let lanes = [x, y, z, w];
        unsafe { Self::load_ptr(lanes.as_ptr(), 4) }
    }

    #[inline(always)]
    fn splat(value: f64) -> Self {
        unsafe {
            let v = vdupq_n_f64(value);
            Self { xy: v, zw: v }
        }
    }

    #[inline(always)]
    fn splat_scalar(value: Scalard) -> Self {
        Self::splat(value.cast())
    }

    #[inline(always)]
    unsafe fn load_ptr(ptr: *const f64, count: usize) -> Self {
        debug_assert!((1..=4).contains(&count), "lane count must be in 1..=4");

        let zero = vdupq_n_f64(0.0);
        match count {
            1 => Self {
                xy: vsetq_lane_f64::<0>(ptr.read_unaligned(), zero),
                zw: zero,
            },
            2 => Self {
                xy: vld1q_f64(ptr),
                zw: zero,
            },
            3 => Self {
                xy: vld1q_f64(ptr),
                zw: vsetq_lane_f64::<0>(ptr.add(2).read_unaligned(), zero),
            },
            _ => Self {
                xy: vld1q_f64(ptr),
                zw: vld1q_f64(ptr.add(2)),
            },
        }
    }

    #[inline(always)]
    unsafe fn store_ptr(self, ptr: *mut f64, count: usize) {
        debug_assert!((1..=4).contains(&count), "lane count must be in 1..=4");

        match count {
            1 => ptr.write_unaligned(vgetq_lane_f64::<0>(self.xy)),
            2 => vst1q_f64(ptr, self.xy),
            3 => {
                vst1q_f64(ptr, self.xy);
                ptr.add(2).write_unaligned(vgetq_lane_f64::<0>(self.zw));
            }
            _ => {
                vst1q_f64(ptr, self.xy);
                vst1q_f64(ptr.add(2), self.zw);
            }
        }
    }

    #[inline(always)]
    fn get_x(self) -> f64 {
        unsafe { vgetq_lane_f64::<0>(self.xy) }
    }

    #[inline(always)]
    fn get_y(self) -> f64 {
        unsafe { vgetq_lane_f64::<1>(self.xy) }
    }

    #[inline(always)]
    fn get_z(self) -> f64 {
        unsafe { vgetq_lane_f64::<0>(self.zw) }
    }

    #[inline(always)]
    fn get_w(self) -> f64 {
        unsafe { vgetq_lane_f64::<1>(self.zw) }
    }

    #[inline(always)]
    fn with_x(self, value: f64) -> Self {
        Self {
            xy: unsafe { vsetq_lane_f64::<0>(value, self.xy) },
            zw: self.zw,
        }
    }

    #[inline(always)]
    fn with_y(self, value: f64) -> Self {
        Self {
            xy: unsafe { vsetq_lane_f64::<1>(value, self.xy) },
            zw: self.zw,
        }
    }

    #[inline(always)]
    fn with_z(self, value: f64) -> Self {
        Self {
            xy: self.xy,
            zw: unsafe { vsetq_lane_f64::<0>(value, self.zw) },
        }
    }

    #[inline(always)]
    fn with_w(self, value: f64) -> Self {
        Self {
            xy: self.xy,
            zw: unsafe { vsetq_lane_f64::<1>(value, self.zw) },
        }
    }

    #[inline(always)]
    fn add(self, rhs: Self) -> Self {
        unsafe {
            Self {
                xy: vaddq_f64(self.xy, rhs.xy),
                zw: vaddq_f64(self.zw, rhs.zw),
            }
        }
    }

    #[inline(always)]
    fn sub(self, rhs: Self) -> Self {
        unsafe {
            Self {
                xy: vsubq_f64(self.xy, rhs.xy),
                zw: vsubq_f64(self.zw, rhs.zw),
            }
        }
    }

    #[inline(always)]
    fn mul(self, rhs: Self) -> Self {
        unsafe {
            Self {
                xy: vmulq_f64(self.xy, rhs.xy),
                zw: vmulq_f64(self.zw, rhs.zw),
            }
        }
    }

    #[inline(always)]
    fn div(self, rhs: Self) -> Self {
        unsafe {
            Self {
                xy: vdivq_f64(self.xy, rhs.xy),
                zw: vdivq_f64(self.zw, rhs.zw),
            }
        }
    }

    #[inline(always)]
    fn mul_scalar(self, rhs: Scalard) -> Self {
        let factor = rhs.cast();
        unsafe {
            Self {
                xy: vmulq_n_f64(self.xy, factor),
                zw: vmulq_n_f64(self.zw, factor),
            }
        }
    }

    #[inline(always)]
    fn min(self, rhs: Self) -> Self {
        unsafe {
            Self {
                xy: min_f64x2(self.xy, rhs.xy),
                zw: min_f64x2(self.zw, rhs.zw),
            }
        }
    }

    #[inline(always)]
    fn max(self, rhs: Self) -> Self {
        unsafe {
            Self {
                xy: max_f64x2(self.xy, rhs.xy),
                zw: max_f64x2(self.zw, rhs.zw),
            }
        }
    }

    #[inline(always)]
    fn abs(self) -> Self {
        unsafe {
            Self {
                xy: vabsq_f64(self.xy),
                zw: vabsq_f64(self.zw),
            }
        }
    }

    #[inline(always)]
    fn ceil(self) -> Self {
        unsafe {
            Self {
                xy: vrndpq_f64(self.xy),
                zw: vrndpq_f64(self.zw),
            }
        }
    }

    #[inline(always)]
    fn floor(self) -> Self {
        unsafe {
            Self {
                xy: vrndmq_f64(self.xy),
                zw: vrndmq_f64(self.zw),
            }
        }
    }

    #[inline(always)]
    fn round_symmetric(self) -> Self {
        unsafe {
            Self {
                xy: round_symmetric_f64x2(self.xy),
                zw: round_symmetric_f64x2(self.zw),
            }
        }
    }

    #[inline(always)]
    fn round_bankers(self) -> Self {
        unsafe {
            Self {
                xy: vrndnq_f64(self.xy),
                zw: vrndnq_f64(self.zw),
            }
        }
    }

    #[inline(always)]
    fn cmp_eq(self, rhs: Self) -> Mask4d {
        unsafe {
            Mask4d {
                xy: vceqq_f64(self.xy, rhs.xy),
                zw: vceqq_f64(self.zw, rhs.zw),
            }
        }
    }

    #[inline(always)]
    fn cmp_lt(self, rhs: Self) -> Mask4d {
        unsafe {
            Mask4d {
                xy: vcltq_f64(self.xy, rhs.xy),
                zw: vcltq_f64(self.zw, rhs.zw),
            }
        }
    }

    #[inline(always)]
    fn cmp_le(self, rhs: Self) -> Mask4d {
        unsafe {
            Mask4d {
                xy: vcleq_f64(self.xy, rhs.xy),
                zw: vcleq_f64(self.zw, rhs.zw),
            }
        }
    }

    #[inline(always)]
    fn cmp_gt(self, rhs: Self) -> Mask4d {
        unsafe {
            Mask4d {
                xy: vcgtq_f64(self.xy, rhs.xy),
                zw: vcgtq_f64(self.zw, rhs.zw),
            }
        }
    }

    #[inline(always)]
    fn cmp_ge(self, rhs: Self) -> Mask4d {
        unsafe {
            Mask4d {
                xy: vcgeq_f64(self.xy, rhs.xy),
                zw: vcgeq_f64(self.zw, rhs.zw),
            }
        }
    }

    #[inline(always)]
    fn select(mask: Mask4d, if_true: Self, if_false: Self) -> Self {
        unsafe {
            Self {
                xy: vbslq_f64(mask.xy, if_true.xy, if_false.xy),
                zw: vbslq_f64(mask.zw, if_true.zw, if_false.zw),
            }
        }
    }

    #[inline(always)]
    fn copy_sign(self, control: Self) -> Self {
        unsafe {
            Self {
                xy: copy_sign_f64x2(self.xy, control.xy),
                zw: copy_sign_f64x2(self.zw, control.zw),
            }
        }
    }
}

impl_vector4_operators!(Vector4d);
impl_mask4_eq!(Mask4d);
