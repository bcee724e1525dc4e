//! Scalar f64 kernels.
//!
//! These are the per-lane building blocks of the portable fallback backend and of
//! the per-lane transcendental functions shared by every backend. The rounding
//! kernels follow the same rules as the SIMD paths so that every backend agrees
//! bit for bit:
//!
//! - NaN and ±∞ are returned unchanged.
//! - Finite values with a magnitude of at least 2^52 have no fractional bits and
//!   are returned unchanged.
//! - Zero results keep the sign of the input (`scalar_ceil(-0.5) == -0.0`).
//!
//! # Function Reference
//!
//! | Function | Rounds | Ties |
//! |----------|--------|------|
//! | [`scalar_floor`] | toward -∞ | - |
//! | [`scalar_ceil`] | toward +∞ | - |
//! | [`scalar_round_symmetric`] | to nearest | away from zero |
//! | [`scalar_round_bankers`] | to nearest | to even |

/// Smallest power of two at which an f64 has no fractional mantissa bits left (2^52).
pub const FRACTIONAL_LIMIT: f64 = 4503599627370496.0;

/// Returns true when `input` has a fractional part that rounding could remove.
///
/// NaN fails the comparison, so it is reported as having nothing to round.
#[inline(always)]
fn has_fractional_bits(input: f64) -> bool {
    input.abs() < FRACTIONAL_LIMIT
}

/// Returns the largest integer value not greater than the input.
///
/// The integral part is obtained by truncating through a 64-bit integer, which is
/// exact below 2^52, and is then corrected downward when truncation rounded a
/// negative input up.
///
/// ```rust
/// use simd4d::scalar::scalar_floor;
///
/// assert_eq!(scalar_floor(1.8), 1.0);
/// assert_eq!(scalar_floor(-1.8), -2.0);
/// assert_eq!(scalar_floor(-1.0), -1.0);
/// ```
#[inline]
pub fn scalar_floor(input: f64) -> f64 {
    if !has_fractional_bits(input) {
        return input;
    }

    let integer_part = input as i64 as f64;
    let result = if integer_part > input {
        integer_part - 1.0
    } else {
        integer_part
    };

    result.copysign(input)
}

/// Returns the smallest integer value not less than the input.
///
/// ```rust
/// use simd4d::scalar::scalar_ceil;
///
/// assert_eq!(scalar_ceil(1.8), 2.0);
/// assert_eq!(scalar_ceil(-1.8), -1.0);
/// assert!(scalar_ceil(-0.5).is_sign_negative());
/// ```
#[inline]
pub fn scalar_ceil(input: f64) -> f64 {
    if !has_fractional_bits(input) {
        return input;
    }

    let integer_part = input as i64 as f64;
    let result = if integer_part < input {
        integer_part + 1.0
    } else {
        integer_part
    };

    result.copysign(input)
}

/// Rounds half away from zero: `1.5 -> 2.0`, `-1.5 -> -2.0`.
///
/// The input is truncated toward zero and then stepped one unit away from zero
/// when the discarded fraction is at least one half. Unlike `floor(input + 0.5)`
/// this never rounds `0.49999999999999994` up, because the fraction is computed
/// exactly.
#[inline]
pub fn scalar_round_symmetric(input: f64) -> f64 {
    if !has_fractional_bits(input) {
        return input;
    }

    let truncated = if input >= 0.0 {
        scalar_floor(input)
    } else {
        scalar_ceil(input)
    };

    let result = if (input - truncated).abs() >= 0.5 {
        truncated + 1.0f64.copysign(input)
    } else {
        truncated
    };

    result.copysign(input)
}

/// Rounds half to even: `2.5 -> 2.0`, `1.5 -> 2.0`, `-2.5 -> -2.0`.
///
/// Adding and subtracting 2^52 (with the sign of the input) pushes the fractional
/// bits out of the mantissa, letting the default round-to-nearest-even mode do
/// the rounding.
#[inline]
pub fn scalar_round_bankers(input: f64) -> f64 {
    if !has_fractional_bits(input) {
        return input;
    }

    let truncating_offset = FRACTIONAL_LIMIT.copysign(input);
    let result = (input + truncating_offset) - truncating_offset;

    result.copysign(input)
}

/// Returns the fractional part of the input: `input - floor(input)`.
#[inline]
pub fn scalar_fraction(input: f64) -> f64 {
    input - scalar_floor(input)
}

/// Returns the smaller of `lhs` and `rhs`.
///
/// When exactly one side is NaN the other side is returned. Otherwise the result
/// is `if lhs < rhs { lhs } else { rhs }`, so equal inputs such as `0.0` and
/// `-0.0` yield `rhs`. Every backend reproduces this rule exactly.
#[inline(always)]
pub fn scalar_min(lhs: f64, rhs: f64) -> f64 {
    if lhs < rhs || rhs.is_nan() {
        lhs
    } else {
        rhs
    }
}

/// Returns the larger of `lhs` and `rhs`.
///
/// Same NaN and tie rules as [`scalar_min`].
#[inline(always)]
pub fn scalar_max(lhs: f64, rhs: f64) -> f64 {
    if lhs > rhs || rhs.is_nan() {
        lhs
    } else {
        rhs
    }
}

/// Returns `1.0 / sqrt(input)`.
#[inline(always)]
pub fn scalar_sqrt_reciprocal(input: f64) -> f64 {
    1.0 / input.sqrt()
}

/// Returns the sine of the input angle (radians).
#[inline(always)]
pub fn scalar_sin(angle: f64) -> f64 {
    angle.sin()
}

/// Returns the cosine of the input angle (radians).
#[inline(always)]
pub fn scalar_cos(angle: f64) -> f64 {
    angle.cos()
}

/// Returns the arc-sine of the input. Inputs outside of [-1.0, 1.0] yield NaN.
#[inline(always)]
pub fn scalar_asin(input: f64) -> f64 {
    input.asin()
}

/// Returns the arc-cosine of the input. Inputs outside of [-1.0, 1.0] yield NaN.
#[inline(always)]
pub fn scalar_acos(input: f64) -> f64 {
    input.acos()
}

/// Returns the arc-tangent of the input.
#[inline(always)]
pub fn scalar_atan(input: f64) -> f64 {
    input.atan()
}

/// Returns the arc-tangent of `y / x`, using the signs of both to pick the quadrant.
#[inline(always)]
pub fn scalar_atan2(y: f64, x: f64) -> f64 {
    y.atan2(x)
}
