//! Packed f64 kernels on a single `__m128d`.
//!
//! The rounding kernels reproduce [`crate::scalar`] bit for bit: NaN, infinities
//! and magnitudes of at least 2^52 pass through, and zero results carry the sign
//! of the input.

#[cfg(target_arch = "x86")]
use std::arch::x86::*;
#[cfg(target_arch = "x86_64")]
use std::arch::x86_64::*;

use crate::scalar::FRACTIONAL_LIMIT;

/// `-0.0` has only the sign bit set.
const SIGN_BIT: f64 = -0.0;

/// Clears the sign bit of both lanes.
#[inline(always)]
pub(crate) unsafe fn abs_pd(v: __m128d) -> __m128d {
    _mm_andnot_pd(_mm_set1_pd(SIGN_BIT), v)
}

/// Keeps only the sign bit of both lanes.
#[inline(always)]
pub(crate) unsafe fn sign_bit_pd(v: __m128d) -> __m128d {
    _mm_and_pd(_mm_set1_pd(SIGN_BIT), v)
}

/// Magnitude of `magnitude` with the sign bit of `sign_source`.
#[inline(always)]
pub(crate) unsafe fn copy_sign_pd(magnitude: __m128d, sign_source: __m128d) -> __m128d {
    let sign_mask = _mm_set1_pd(SIGN_BIT);
    let abs_mag = _mm_andnot_pd(sign_mask, magnitude);
    let sign_bits = _mm_and_pd(sign_source, sign_mask);
    _mm_or_pd(abs_mag, sign_bits)
}

/// Lanes of `if_true` where `mask` is set, `if_false` elsewhere.
///
/// Mask lanes must be all ones or all zeros.
#[inline(always)]
pub(crate) unsafe fn select_pd(mask: __m128d, if_true: __m128d, if_false: __m128d) -> __m128d {
    #[cfg(any(sse4, avx))]
    {
        _mm_blendv_pd(if_false, if_true, mask)
    }

    #[cfg(not(any(sse4, avx)))]
    {
        _mm_or_pd(_mm_and_pd(mask, if_true), _mm_andnot_pd(mask, if_false))
    }
}

/// Set where the lane has no fractional bits to remove: NaN, ±∞ or |v| >= 2^52.
#[inline(always)]
pub(crate) unsafe fn is_integral_pd(v: __m128d) -> __m128d {
    // not-less-than is true for unordered lanes
    _mm_cmpnlt_pd(abs_pd(v), _mm_set1_pd(FRACTIONAL_LIMIT))
}

/// Rounds to the nearest integer, ties to even, for |v| < 2^52.
///
/// Adding a same-signed 2^52 leaves no room for fractional bits, so the default
/// rounding mode does the work. Zero results come out as `+0.0`.
#[cfg(not(any(sse4, avx)))]
#[inline(always)]
unsafe fn round_nearest_pd(v: __m128d) -> __m128d {
    let offset = _mm_or_pd(sign_bit_pd(v), _mm_set1_pd(FRACTIONAL_LIMIT));
    _mm_sub_pd(_mm_add_pd(v, offset), offset)
}

/// Rounds toward -∞.
#[inline(always)]
pub(crate) unsafe fn floor_pd(v: __m128d) -> __m128d {
    #[cfg(any(sse4, avx))]
    {
        _mm_floor_pd(v)
    }

    #[cfg(not(any(sse4, avx)))]
    {
        let integral = round_nearest_pd(v);
        let rounded_up = _mm_cmpgt_pd(integral, v);
        let floored = _mm_sub_pd(integral, _mm_and_pd(rounded_up, _mm_set1_pd(1.0)));

        let result = _mm_or_pd(floored, sign_bit_pd(v));
        select_pd(is_integral_pd(v), v, result)
    }
}

/// Rounds toward +∞.
#[inline(always)]
pub(crate) unsafe fn ceil_pd(v: __m128d) -> __m128d {
    #[cfg(any(sse4, avx))]
    {
        _mm_ceil_pd(v)
    }

    #[cfg(not(any(sse4, avx)))]
    {
        let integral = round_nearest_pd(v);
        let rounded_down = _mm_cmplt_pd(integral, v);
        let ceiled = _mm_add_pd(integral, _mm_and_pd(rounded_down, _mm_set1_pd(1.0)));

        let result = _mm_or_pd(ceiled, sign_bit_pd(v));
        select_pd(is_integral_pd(v), v, result)
    }
}

/// Rounds toward zero.
#[inline(always)]
pub(crate) unsafe fn truncate_pd(v: __m128d) -> __m128d {
    #[cfg(any(sse4, avx))]
    {
        _mm_round_pd::<{ _MM_FROUND_TO_ZERO | _MM_FROUND_NO_EXC }>(v)
    }

    #[cfg(not(any(sse4, avx)))]
    {
        let is_positive = _mm_cmpge_pd(v, _mm_setzero_pd());
        select_pd(is_positive, floor_pd(v), ceil_pd(v))
    }
}

/// Rounds to nearest, ties to even.
#[inline(always)]
pub(crate) unsafe fn round_bankers_pd(v: __m128d) -> __m128d {
    #[cfg(any(sse4, avx))]
    {
        _mm_round_pd::<{ _MM_FROUND_TO_NEAREST_INT | _MM_FROUND_NO_EXC }>(v)
    }

    #[cfg(not(any(sse4, avx)))]
    {
        let result = _mm_or_pd(round_nearest_pd(v), sign_bit_pd(v));
        select_pd(is_integral_pd(v), v, result)
    }
}

/// Rounds to nearest, ties away from zero.
///
/// The input is truncated, then stepped one unit away from zero when the
/// discarded fraction is at least one half. Both the fraction and the step are
/// exact below 2^52, and integral inputs have a zero fraction.
#[inline(always)]
pub(crate) unsafe fn round_symmetric_pd(v: __m128d) -> __m128d {
    let truncated = truncate_pd(v);
    let fraction = abs_pd(_mm_sub_pd(v, truncated));

    let needs_step = _mm_cmpge_pd(fraction, _mm_set1_pd(0.5));
    let step = _mm_and_pd(needs_step, _mm_or_pd(_mm_set1_pd(1.0), sign_bit_pd(v)));
    let rounded = _mm_add_pd(truncated, step);

    // `-0.0 + 0.0` is `+0.0`
    let result = _mm_or_pd(rounded, sign_bit_pd(v));
    select_pd(is_integral_pd(v), v, result)
}

/// Per lane minimum returning the non-NaN side when exactly one side is NaN.
#[inline(always)]
pub(crate) unsafe fn min_pd(a: __m128d, b: __m128d) -> __m128d {
    // minpd returns `b` for unordered and equal lanes
    let min = _mm_min_pd(a, b);
    select_pd(_mm_cmpunord_pd(b, b), a, min)
}

/// Per lane maximum returning the non-NaN side when exactly one side is NaN.
#[inline(always)]
pub(crate) unsafe fn max_pd(a: __m128d, b: __m128d) -> __m128d {
    let max = _mm_max_pd(a, b);
    select_pd(_mm_cmpunord_pd(b, b), a, max)
}
