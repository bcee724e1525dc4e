//! Packed f64 kernels on a single `float64x2_t`.

use std::arch::aarch64::*;

const SIGN_BIT: u64 = 0x8000_0000_0000_0000;

/// Magnitude of `magnitude` with the sign bit of `sign_source`.
#[inline(always)]
pub(crate) unsafe fn copy_sign_f64x2(magnitude: float64x2_t, sign_source: float64x2_t) -> float64x2_t {
    // vbsl takes the sign bit from `sign_source` and every other bit from `magnitude`
    vbslq_f64(vdupq_n_u64(SIGN_BIT), sign_source, magnitude)
}

/// ORs the sign bit of `sign_source` into `v`.
#[inline(always)]
unsafe fn or_sign_f64x2(v: float64x2_t, sign_source: float64x2_t) -> float64x2_t {
    let sign_bits = vandq_u64(vreinterpretq_u64_f64(sign_source), vdupq_n_u64(SIGN_BIT));
    vreinterpretq_f64_u64(vorrq_u64(vreinterpretq_u64_f64(v), sign_bits))
}

/// Rounds to nearest, ties away from zero.
///
/// `frinta` would do this in one instruction, but the truncate and step form is
/// kept identical to the x86 kernel so both backends agree by construction.
#[inline(always)]
pub(crate) unsafe fn round_symmetric_f64x2(v: float64x2_t) -> float64x2_t {
    let truncated = vrndq_f64(v);
    let fraction = vabsq_f64(vsubq_f64(v, truncated));

    let needs_step = vcgeq_f64(fraction, vdupq_n_f64(0.5));
    let unit = copy_sign_f64x2(vdupq_n_f64(1.0), v);
    let step = vreinterpretq_f64_u64(vandq_u64(needs_step, vreinterpretq_u64_f64(unit)));

    // NaN, ±∞ and |v| >= 2^52 truncate to themselves and never step
    or_sign_f64x2(vaddq_f64(truncated, step), v)
}

/// Per lane minimum returning the non-NaN side when exactly one side is NaN.
#[inline(always)]
pub(crate) unsafe fn min_f64x2(a: float64x2_t, b: float64x2_t) -> float64x2_t {
    // `fmin` propagates NaN and `fminnm` orders -0.0 below 0.0, neither matches
    let min = vbslq_f64(vcltq_f64(a, b), a, b);
    vbslq_f64(vceqq_f64(b, b), min, a)
}

/// Per lane maximum returning the non-NaN side when exactly one side is NaN.
#[inline(always)]
pub(crate) unsafe fn max_f64x2(a: float64x2_t, b: float64x2_t) -> float64x2_t {
    let max = vbslq_f64(vcgtq_f64(a, b), a, b);
    vbslq_f64(vceqq_f64(b, b), max, a)
}
