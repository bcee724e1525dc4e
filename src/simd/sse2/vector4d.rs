#[cfg(target_arch = "x86")]
use std::arch::x86::*;
#[cfg(target_arch = "x86_64")]
use std::arch::x86_64::*;

use crate::simd::sse2::math::{
    abs_pd, ceil_pd, copy_sign_pd, floor_pd, max_pd, min_pd, round_bankers_pd,
    round_symmetric_pd, select_pd,
};
use crate::simd::traits::{SimdMask4, SimdScalar, SimdVector4};
use crate::simd::Backend;

#[cfg(avx)]
const X86_BACKEND: Backend = Backend::Avx;
#[cfg(all(sse4, not(avx)))]
const X86_BACKEND: Backend = Backend::Sse4;
#[cfg(not(any(sse4, avx)))]
const X86_BACKEND: Backend = Backend::Sse2;

/// A 4-lane f64 vector held in two SSE registers.
#[derive(Clone, Copy, Debug)]
pub struct Vector4d {
    xy: __m128d,
    zw: __m128d,
}

/// A 4-lane mask held in two SSE registers, one 64-bit pattern per lane.
#[derive(Clone, Copy, Debug)]
pub struct Mask4d {
    xy: __m128d,
    zw: __m128d,
}

/// An f64 resident in the low lane of an SSE register. The high lane is unspecified.
#[derive(Clone, Copy, Debug)]
pub struct Scalard {
    value: __m128d,
}

impl SimdScalar for Scalard {
    #[inline(always)]
    fn set(value: f64) -> Self {
        Self {
            value: unsafe { _mm_set_sd(value) },
        }
    }

    #[inline(always)]
    fn cast(self) -> f64 {
        unsafe { _mm_cvtsd_f64(self.value) }
    }

    #[inline(always)]
    fn add(self, rhs: Self) -> Self {
        Self {
            value: unsafe { _mm_add_sd(self.value, rhs.value) },
        }
    }

    #[inline(always)]
    fn mul(self, rhs: Self) -> Self {
        Self {
            value: unsafe { _mm_mul_sd(self.value, rhs.value) },
        }
    }

    #[inline(always)]
    fn sqrt(self) -> Self {
        Self {
            value: unsafe { _mm_sqrt_sd(self.value, self.value) },
        }
    }

    #[inline(always)]
    fn sqrt_reciprocal(self) -> Self {
        Self {
            value: unsafe { _mm_div_sd(_mm_set_sd(1.0), _mm_sqrt_sd(self.value, self.value)) },
        }
    }
}

impl SimdMask4 for Mask4d {
    #[inline(always)]
    fn from_bools(lanes: [bool; 4]) -> Self {
        // -1 is all ones
        let lane = |set: bool| -(set as i64);

        unsafe {
            Self {
                xy: _mm_castsi128_pd(_mm_set_epi64x(lane(lanes[1]), lane(lanes[0]))),
                zw: _mm_castsi128_pd(_mm_set_epi64x(lane(lanes[3]), lane(lanes[2]))),
            }
        }
    }

    #[inline(always)]
    fn to_bits(self) -> [u64; 4] {
        let mut bits = [0u64; 4];

        unsafe {
            let ptr = bits.as_mut_ptr() as *mut __m128i;
            _mm_storeu_si128(ptr, _mm_castpd_si128(self.xy));
            _mm_storeu_si128(ptr.add(1), _mm_castpd_si128(self.zw));
        }

        bits
    }

    #[inline(always)]
    fn bitmask(self) -> u32 {
        unsafe { (_mm_movemask_pd(self.xy) | (_mm_movemask_pd(self.zw) << 2)) as u32 }
    }
}

impl SimdVector4 for Vector4d {
    type Mask = Mask4d;
    type Scalar = Scalard;

    const BACKEND: Backend = X86_BACKEND;

    #[inline(always)]
    fn set(x: f64, y: f64, z: f64, w: f64) -> Self {
        unsafe {
            Self {
                xy: _mm_setr_pd(x, y),
                zw: _mm_setr_pd(z, w),
            }
        }
    }

    #[inline(always)]
    fn splat(value: f64) -> Self {
        unsafe {
            let v = _mm_set1_pd(value);
            Self { xy: v, zw: v }
        }
    }

    #[inline(always)]
    fn splat_scalar(value: Scalard) -> Self {
        unsafe {
            let v = _mm_unpacklo_pd(value.value, value.value);
            Self { xy: v, zw: v }
        }
    }

    #[inline(always)]
    unsafe fn load_ptr(ptr: *const f64, count: usize) -> Self {
        debug_assert!((1..=4).contains(&count), "lane count must be in 1..=4");

        match count {
            1 => Self {
                xy: _mm_set_sd(ptr.read_unaligned()),
                zw: _mm_setzero_pd(),
            },
            2 => Self {
                xy: _mm_loadu_pd(ptr),
                zw: _mm_setzero_pd(),
            },
            3 => Self {
                xy: _mm_loadu_pd(ptr),
                zw: _mm_set_sd(ptr.add(2).read_unaligned()),
            },
            _ => Self {
                xy: _mm_loadu_pd(ptr),
                zw: _mm_loadu_pd(ptr.add(2)),
            },
        }
    }

    #[inline(always)]
    unsafe fn store_ptr(self, ptr: *mut f64, count: usize) {
        debug_assert!((1..=4).contains(&count), "lane count must be in 1..=4");

        match count {
            1 => ptr.write_unaligned(_mm_cvtsd_f64(self.xy)),
            2 => _mm_storeu_pd(ptr, self.xy),
            3 => {
                _mm_storeu_pd(ptr, self.xy);
                ptr.add(2).write_unaligned(_mm_cvtsd_f64(self.zw));
            }
            _ => {
                _mm_storeu_pd(ptr, self.xy);
                _mm_storeu_pd(ptr.add(2), self.zw);
            }
        }
    }

    #[inline(always)]
    fn get_x(self) -> f64 {
        unsafe { _mm_cvtsd_f64(self.xy) }
    }

    #[inline(always)]
    fn get_y(self) -> f64 {
        unsafe { _mm_cvtsd_f64(_mm_unpackhi_pd(self.xy, self.xy)) }
    }

    #[inline(always)]
    fn get_z(self) -> f64 {
        unsafe { _mm_cvtsd_f64(self.zw) }
    }

    #[inline(always)]
    fn get_w(self) -> f64 {
        unsafe { _mm_cvtsd_f64(_mm_unpackhi_pd(self.zw, self.zw)) }
    }

    #[inline(always)]
    fn get_x_scalar(self) -> Scalard {
        Scalard { value: self.xy }
    }

    #[inline(always)]
    fn get_y_scalar(self) -> Scalard {
        Scalard {
            value: unsafe { _mm_unpackhi_pd(self.xy, self.xy) },
        }
    }

    #[inline(always)]
    fn get_z_scalar(self) -> Scalard {
        Scalard { value: self.zw }
    }

    #[inline(always)]
    fn get_w_scalar(self) -> Scalard {
        Scalard {
            value: unsafe { _mm_unpackhi_pd(self.zw, self.zw) },
        }
    }

    #[inline(always)]
    fn with_x(self, value: f64) -> Self {
        Self {
            xy: unsafe { _mm_move_sd(self.xy, _mm_set_sd(value)) },
            zw: self.zw,
        }
    }

    #[inline(always)]
    fn with_y(self, value: f64) -> Self {
        Self {
            xy: unsafe { _mm_unpacklo_pd(self.xy, _mm_set_sd(value)) },
            zw: self.zw,
        }
    }

    #[inline(always)]
    fn with_z(self, value: f64) -> Self {
        Self {
            xy: self.xy,
            zw: unsafe { _mm_move_sd(self.zw, _mm_set_sd(value)) },
        }
    }

    #[inline(always)]
    fn with_w(self, value: f64) -> Self {
        Self {
            xy: self.xy,
            zw: unsafe { _mm_unpacklo_pd(self.zw, _mm_set_sd(value)) },
        }
    }

    #[inline(always)]
    fn add(self, rhs: Self) -> Self {
        unsafe {
            Self {
                xy: _mm_add_pd(self.xy, rhs.xy),
                zw: _mm_add_pd(self.zw, rhs.zw),
            }
        }
    }

    #[inline(always)]
    fn sub(self, rhs: Self) -> Self {
        unsafe {
            Self {
                xy: _mm_sub_pd(self.xy, rhs.xy),
                zw: _mm_sub_pd(self.zw, rhs.zw),
            }
        }
    }

    #[inline(always)]
    fn mul(self, rhs: Self) -> Self {
        unsafe {
            Self {
                xy: _mm_mul_pd(self.xy, rhs.xy),
                zw: _mm_mul_pd(self.zw, rhs.zw),
            }
        }
    }

    #[inline(always)]
    fn div(self, rhs: Self) -> Self {
        unsafe {
            Self {
                xy: _mm_div_pd(self.xy, rhs.xy),
                zw: _mm_div_pd(self.zw, rhs.zw),
            }
        }
    }

    #[inline(always)]
    fn mul_scalar(self, rhs: Scalard) -> Self {
        unsafe {
            let factor = _mm_unpacklo_pd(rhs.value, rhs.value);
            Self {
                xy: _mm_mul_pd(self.xy, factor),
                zw: _mm_mul_pd(self.zw, factor),
            }
        }
    }

    #[inline(always)]
    fn min(self, rhs: Self) -> Self {
        unsafe {
            Self {
                xy: min_pd(self.xy, rhs.xy),
                zw: min_pd(self.zw, rhs.zw),
            }
        }
    }

    #[inline(always)]
    fn max(self, rhs: Self) -> Self {
        unsafe {
            Self {
                xy: max_pd(self.xy, rhs.xy),
                zw: max_pd(self.zw, rhs.zw),
            }
        }
    }

    #[inline(always)]
    fn abs(self) -> Self {
        unsafe {
            Self {
                xy: abs_pd(self.xy),
                zw: abs_pd(self.zw),
            }
        }
    }

    #[inline(always)]
    fn ceil(self) -> Self {
        unsafe {
            Self {
                xy: ceil_pd(self.xy),
                zw: ceil_pd(self.zw),
            }
        }
    }

    #[inline(always)]
    fn floor(self) -> Self {
        unsafe {
            Self {
                xy: floor_pd(self.xy),
                zw: floor_pd(self.zw),
            }
        }
    }

    #[inline(always)]
    fn round_symmetric(self) -> Self {
        unsafe {
            Self {
                xy: round_symmetric_pd(self.xy),
                zw: round_symmetric_pd(self.zw),
            }
        }
    }

    #[inline(always)]
    fn round_bankers(self) -> Self {
        unsafe {
            Self {
                xy: round_bankers_pd(self.xy),
                zw: round_bankers_pd(self.zw),
            }
        }
    }

    #[inline(always)]
    fn cmp_eq(self, rhs: Self) -> Mask4d {
        unsafe {
            Mask4d {
                xy: _mm_cmpeq_pd(self.xy, rhs.xy),
                zw: _mm_cmpeq_pd(self.zw, rhs.zw),
            }
        }
    }

    #[inline(always)]
    fn cmp_lt(self, rhs: Self) -> Mask4d {
        unsafe {
            Mask4d {
                xy: _mm_cmplt_pd(self.xy, rhs.xy),
                zw: _mm_cmplt_pd(self.zw, rhs.zw),
            }
        }
    }

    #[inline(always)]
    fn cmp_le(self, rhs: Self) -> Mask4d {
        unsafe {
            Mask4d {
                xy: _mm_cmple_pd(self.xy, rhs.xy),
                zw: _mm_cmple_pd(self.zw, rhs.zw),
            }
        }
    }

    #[inline(always)]
    fn cmp_gt(self, rhs: Self) -> Mask4d {
        unsafe {
            Mask4d {
                xy: _mm_cmpgt_pd(self.xy, rhs.xy),
                zw: _mm_cmpgt_pd(self.zw, rhs.zw),
            }
        }
    }

    #[inline(always)]
    fn cmp_ge(self, rhs: Self) -> Mask4d {
        unsafe {
            Mask4d {
                xy: _mm_cmpge_pd(self.xy, rhs.xy),
                zw: _mm_cmpge_pd(self.zw, rhs.zw),
            }
        }
    }

    #[inline(always)]
    fn select(mask: Mask4d, if_true: Self, if_false: Self) -> Self {
        unsafe {
            Self {
                xy: select_pd(mask.xy, if_true.xy, if_false.xy),
                zw: select_pd(mask.zw, if_true.zw, if_false.zw),
            }
        }
    }

    #[inline(always)]
    fn copy_sign(self, control: Self) -> Self {
        unsafe {
            Self {
                xy: copy_sign_pd(self.xy, control.xy),
                zw: copy_sign_pd(self.zw, control.zw),
            }
        }
    }

    #[inline(always)]
    fn mix<const C0: u8, const C1: u8, const C2: u8, const C3: u8>(self, other: Self) -> Self {
        const {
            assert!(
                C0 < 8 && C1 < 8 && C2 < 8 && C3 < 8,
                "mix components must be in 0..8"
            )
        };

        // Each output register draws from at most two source registers, so the
        // common swizzles resolve to one shuffle per half.
        let registers = [self.xy, self.zw, other.xy, other.zw];
        let pair = |first: u8, second: u8| unsafe {
            let low = registers[(first / 2) as usize];
            let high = registers[(second / 2) as usize];
            match (first % 2, second % 2) {
                (0, 0) => _mm_shuffle_pd::<0b00>(low, high),
                (1, 0) => _mm_shuffle_pd::<0b01>(low, high),
                (0, _) => _mm_shuffle_pd::<0b10>(low, high),
                _ => _mm_shuffle_pd::<0b11>(low, high),
            }
        };

        Self {
            xy: pair(C0, C1),
            zw: pair(C2, C3),
        }
    }
}

impl_vector4_operators!(Vector4d);
impl_mask4_eq!(Mask4d);
impl_scalar_cmp!(Scalard);
