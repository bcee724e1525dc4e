//! The `vector_*` function API.
//!
//! Constructors build the native [`Vector4d`] selected at build time. Every other
//! function is generic over [`SimdVector4`], so the same call works on the
//! native vector and on [`crate::simd::fallback::Vector4d`]. Composite operations
//! are written once here in terms of the backend primitives, which keeps their
//! results identical across backends.
//!
//! ```rust
//! use simd4d::vector4d::*;
//!
//! let a = vector_set(1.0, 2.0, 3.0, 0.0);
//! let b = vector_set(4.0, 5.0, 6.0, 0.0);
//!
//! assert_eq!(vector_dot3(a, b), 32.0);
//! assert_eq!(vector_to_array(vector_add(a, b)), [5.0, 7.0, 9.0, 0.0]);
//! ```

use crate::error::{ensure_len, Result};
use crate::float::{Float2d, Float3d, Float4d};
use crate::mix::{mix4, Mix4};
use crate::scalar::{
    scalar_acos, scalar_asin, scalar_atan, scalar_atan2, scalar_cos, scalar_fraction, scalar_max,
    scalar_min, scalar_sin,
};
use crate::simd::traits::{SimdMask4, SimdScalar, SimdVector4};
use crate::simd::{Scalard, Vector4d};

/// Squared length below which [`vector_normalize3_or`] returns its fallback.
pub const DEFAULT_NORMALIZE_THRESHOLD: f64 = 1.0e-8;

/// Per lane tolerance of the `near_equal` family.
pub const DEFAULT_NEAR_EQUAL_THRESHOLD: f64 = 1.0e-5;

const LANE_BYTES: usize = std::mem::size_of::<f64>();

#[inline(always)]
#[track_caller]
fn assert_len(operation: &'static str, required: usize, actual: usize) {
    assert!(
        actual >= required,
        "{operation} requires {required} elements, got {actual}"
    );
}

// ============================================================================
// Construction
// ============================================================================

/// Builds a vector from its 4 lanes.
#[inline(always)]
pub fn vector_set(x: f64, y: f64, z: f64, w: f64) -> Vector4d {
    Vector4d::set(x, y, z, w)
}

/// Replicates a value in all 4 lanes.
#[inline(always)]
pub fn vector_splat(value: f64) -> Vector4d {
    Vector4d::splat(value)
}

/// Replicates a backend scalar in all 4 lanes.
#[inline(always)]
pub fn vector_splat_scalard(value: Scalard) -> Vector4d {
    Vector4d::splat_scalar(value)
}

#[inline(always)]
pub fn vector_zero() -> Vector4d {
    Vector4d::zero()
}

/// Loads the first 4 values of the slice.
///
/// # Panics
///
/// Panics if `input` has fewer than 4 elements.
#[inline(always)]
#[track_caller]
pub fn vector_load(input: &[f64]) -> Vector4d {
    assert_len("vector_load", 4, input.len());
    unsafe { Vector4d::load_ptr(input.as_ptr(), 4) }
}

/// Loads the first value of the slice into x, zero-filling [yzw].
///
/// # Panics
///
/// Panics if `input` is empty.
#[inline(always)]
#[track_caller]
pub fn vector_load1(input: &[f64]) -> Vector4d {
    assert_len("vector_load1", 1, input.len());
    unsafe { Vector4d::load_ptr(input.as_ptr(), 1) }
}

/// Loads the first 2 values of the slice into [xy], zero-filling [zw].
///
/// # Panics
///
/// Panics if `input` has fewer than 2 elements.
#[inline(always)]
#[track_caller]
pub fn vector_load2(input: &[f64]) -> Vector4d {
    assert_len("vector_load2", 2, input.len());
    unsafe { Vector4d::load_ptr(input.as_ptr(), 2) }
}

/// Loads the first 3 values of the slice into [xyz], zero-filling w.
///
/// # Panics
///
/// Panics if `input` has fewer than 3 elements.
#[inline(always)]
#[track_caller]
pub fn vector_load3(input: &[f64]) -> Vector4d {
    assert_len("vector_load3", 3, input.len());
    unsafe { Vector4d::load_ptr(input.as_ptr(), 3) }
}

/// Checked form of [`vector_load`].
pub fn try_vector_load(input: &[f64]) -> Result<Vector4d> {
    ensure_len("vector_load", 4, input.len())?;
    Ok(unsafe { Vector4d::load_ptr(input.as_ptr(), 4) })
}

/// Checked form of [`vector_load1`].
pub fn try_vector_load1(input: &[f64]) -> Result<Vector4d> {
    ensure_len("vector_load1", 1, input.len())?;
    Ok(unsafe { Vector4d::load_ptr(input.as_ptr(), 1) })
}

/// Checked form of [`vector_load2`].
pub fn try_vector_load2(input: &[f64]) -> Result<Vector4d> {
    ensure_len("vector_load2", 2, input.len())?;
    Ok(unsafe { Vector4d::load_ptr(input.as_ptr(), 2) })
}

/// Checked form of [`vector_load3`].
pub fn try_vector_load3(input: &[f64]) -> Result<Vector4d> {
    ensure_len("vector_load3", 3, input.len())?;
    Ok(unsafe { Vector4d::load_ptr(input.as_ptr(), 3) })
}

/// Loads one value into all 4 lanes.
#[inline(always)]
pub fn vector_broadcast(input: &f64) -> Vector4d {
    Vector4d::splat(*input)
}

#[inline(always)]
pub fn vector_load_float4(input: &Float4d) -> Vector4d {
    Vector4d::set(input.x, input.y, input.z, input.w)
}

/// Loads [xy], zero-filling [zw].
#[inline(always)]
pub fn vector_load_float2(input: &Float2d) -> Vector4d {
    Vector4d::set(input.x, input.y, 0.0, 0.0)
}

/// Loads [xyz], zero-filling w.
#[inline(always)]
pub fn vector_load_float3(input: &Float3d) -> Vector4d {
    Vector4d::set(input.x, input.y, input.z, 0.0)
}

// ============================================================================
// Access
// ============================================================================

#[inline(always)]
pub fn vector_get_x<V: SimdVector4>(input: V) -> f64 {
    input.get_x()
}

#[inline(always)]
pub fn vector_get_y<V: SimdVector4>(input: V) -> f64 {
    input.get_y()
}

#[inline(always)]
pub fn vector_get_z<V: SimdVector4>(input: V) -> f64 {
    input.get_z()
}

#[inline(always)]
pub fn vector_get_w<V: SimdVector4>(input: V) -> f64 {
    input.get_w()
}

/// Returns the x lane without leaving the backend's registers.
#[inline(always)]
pub fn vector_get_x_as_scalar<V: SimdVector4>(input: V) -> V::Scalar {
    input.get_x_scalar()
}

#[inline(always)]
pub fn vector_get_y_as_scalar<V: SimdVector4>(input: V) -> V::Scalar {
    input.get_y_scalar()
}

#[inline(always)]
pub fn vector_get_z_as_scalar<V: SimdVector4>(input: V) -> V::Scalar {
    input.get_z_scalar()
}

#[inline(always)]
pub fn vector_get_w_as_scalar<V: SimdVector4>(input: V) -> V::Scalar {
    input.get_w_scalar()
}

/// Reads the lane a component symbol names. `A B C D` read the same lanes as
/// `X Y Z W` since there is only one input.
#[inline(always)]
pub fn vector_get_component<V: SimdVector4>(input: V, component: Mix4) -> f64 {
    input.get_lane(component.lane())
}

/// Returns the smallest lane, following the NaN rule of [`vector_min`].
#[inline]
pub fn vector_get_min_component<V: SimdVector4>(input: V) -> f64 {
    scalar_min(
        scalar_min(input.get_x(), input.get_y()),
        scalar_min(input.get_z(), input.get_w()),
    )
}

/// Returns the largest lane, following the NaN rule of [`vector_max`].
#[inline]
pub fn vector_get_max_component<V: SimdVector4>(input: V) -> f64 {
    scalar_max(
        scalar_max(input.get_x(), input.get_y()),
        scalar_max(input.get_z(), input.get_w()),
    )
}

/// Replaces the x lane. The other lanes are preserved bit for bit.
#[inline(always)]
pub fn vector_set_x<V: SimdVector4>(input: V, lane_value: f64) -> V {
    input.with_x(lane_value)
}

#[inline(always)]
pub fn vector_set_y<V: SimdVector4>(input: V, lane_value: f64) -> V {
    input.with_y(lane_value)
}

#[inline(always)]
pub fn vector_set_z<V: SimdVector4>(input: V, lane_value: f64) -> V {
    input.with_z(lane_value)
}

#[inline(always)]
pub fn vector_set_w<V: SimdVector4>(input: V, lane_value: f64) -> V {
    input.with_w(lane_value)
}

#[inline(always)]
pub fn vector_set_x_scalard<V: SimdVector4>(input: V, lane_value: V::Scalar) -> V {
    input.with_x(lane_value.cast())
}

#[inline(always)]
pub fn vector_set_y_scalard<V: SimdVector4>(input: V, lane_value: V::Scalar) -> V {
    input.with_y(lane_value.cast())
}

#[inline(always)]
pub fn vector_set_z_scalard<V: SimdVector4>(input: V, lane_value: V::Scalar) -> V {
    input.with_z(lane_value.cast())
}

#[inline(always)]
pub fn vector_set_w_scalard<V: SimdVector4>(input: V, lane_value: V::Scalar) -> V {
    input.with_w(lane_value.cast())
}

#[inline(always)]
pub fn vector_to_array<V: SimdVector4>(input: V) -> [f64; 4] {
    input.to_array()
}

// ============================================================================
// Storage
// ============================================================================

/// Writes all 4 lanes.
///
/// # Panics
///
/// Panics if `output` has fewer than 4 elements.
#[inline(always)]
#[track_caller]
pub fn vector_store<V: SimdVector4>(input: V, output: &mut [f64]) {
    assert_len("vector_store", 4, output.len());
    unsafe { input.store_ptr(output.as_mut_ptr(), 4) }
}

/// Writes the x lane. Elements past the first are untouched.
///
/// # Panics
///
/// Panics if `output` is empty.
#[inline(always)]
#[track_caller]
pub fn vector_store1<V: SimdVector4>(input: V, output: &mut [f64]) {
    assert_len("vector_store1", 1, output.len());
    unsafe { input.store_ptr(output.as_mut_ptr(), 1) }
}

/// Writes the [xy] lanes. Elements past the second are untouched.
///
/// # Panics
///
/// Panics if `output` has fewer than 2 elements.
#[inline(always)]
#[track_caller]
pub fn vector_store2<V: SimdVector4>(input: V, output: &mut [f64]) {
    assert_len("vector_store2", 2, output.len());
    unsafe { input.store_ptr(output.as_mut_ptr(), 2) }
}

/// Writes the [xyz] lanes. Elements past the third are untouched.
///
/// # Panics
///
/// Panics if `output` has fewer than 3 elements.
#[inline(always)]
#[track_caller]
pub fn vector_store3<V: SimdVector4>(input: V, output: &mut [f64]) {
    assert_len("vector_store3", 3, output.len());
    unsafe { input.store_ptr(output.as_mut_ptr(), 3) }
}

/// Checked form of [`vector_store`].
pub fn try_vector_store<V: SimdVector4>(input: V, output: &mut [f64]) -> Result<()> {
    ensure_len("vector_store", 4, output.len())?;
    unsafe { input.store_ptr(output.as_mut_ptr(), 4) };
    Ok(())
}

/// Checked form of [`vector_store1`].
pub fn try_vector_store1<V: SimdVector4>(input: V, output: &mut [f64]) -> Result<()> {
    ensure_len("vector_store1", 1, output.len())?;
    unsafe { input.store_ptr(output.as_mut_ptr(), 1) };
    Ok(())
}

/// Checked form of [`vector_store2`].
pub fn try_vector_store2<V: SimdVector4>(input: V, output: &mut [f64]) -> Result<()> {
    ensure_len("vector_store2", 2, output.len())?;
    unsafe { input.store_ptr(output.as_mut_ptr(), 2) };
    Ok(())
}

/// Checked form of [`vector_store3`].
pub fn try_vector_store3<V: SimdVector4>(input: V, output: &mut [f64]) -> Result<()> {
    ensure_len("vector_store3", 3, output.len())?;
    unsafe { input.store_ptr(output.as_mut_ptr(), 3) };
    Ok(())
}

#[inline(always)]
#[track_caller]
fn store_lane_bytes<V: SimdVector4>(input: V, output: &mut [u8], lanes: usize, operation: &'static str) {
    assert_len(operation, lanes * LANE_BYTES, output.len());

    let values = input.to_array();
    for (chunk, value) in output.chunks_exact_mut(LANE_BYTES).zip(&values[..lanes]) {
        chunk.copy_from_slice(&value.to_ne_bytes());
    }
}

/// Writes all 4 lanes as native-endian bytes.
///
/// # Panics
///
/// Panics if `output` is shorter than 32 bytes.
#[track_caller]
pub fn vector_store_bytes<V: SimdVector4>(input: V, output: &mut [u8]) {
    store_lane_bytes(input, output, 4, "vector_store_bytes");
}

/// Writes the x lane as native-endian bytes.
///
/// # Panics
///
/// Panics if `output` is shorter than 8 bytes.
#[track_caller]
pub fn vector_store_bytes1<V: SimdVector4>(input: V, output: &mut [u8]) {
    store_lane_bytes(input, output, 1, "vector_store_bytes1");
}

/// Writes the [xy] lanes as native-endian bytes.
///
/// # Panics
///
/// Panics if `output` is shorter than 16 bytes.
#[track_caller]
pub fn vector_store_bytes2<V: SimdVector4>(input: V, output: &mut [u8]) {
    store_lane_bytes(input, output, 2, "vector_store_bytes2");
}

/// Writes the [xyz] lanes as native-endian bytes.
///
/// # Panics
///
/// Panics if `output` is shorter than 24 bytes.
#[track_caller]
pub fn vector_store_bytes3<V: SimdVector4>(input: V, output: &mut [u8]) {
    store_lane_bytes(input, output, 3, "vector_store_bytes3");
}

#[inline(always)]
pub fn vector_store_float4<V: SimdVector4>(input: V, output: &mut Float4d) {
    *output = Float4d::new(input.get_x(), input.get_y(), input.get_z(), input.get_w());
}

#[inline(always)]
pub fn vector_store_float2<V: SimdVector4>(input: V, output: &mut Float2d) {
    *output = Float2d::new(input.get_x(), input.get_y());
}

#[inline(always)]
pub fn vector_store_float3<V: SimdVector4>(input: V, output: &mut Float3d) {
    *output = Float3d::new(input.get_x(), input.get_y(), input.get_z());
}

// ============================================================================
// Arithmetic
// ============================================================================

#[inline(always)]
pub fn vector_add<V: SimdVector4>(lhs: V, rhs: V) -> V {
    lhs.add(rhs)
}

#[inline(always)]
pub fn vector_sub<V: SimdVector4>(lhs: V, rhs: V) -> V {
    lhs.sub(rhs)
}

#[inline(always)]
pub fn vector_mul<V: SimdVector4>(lhs: V, rhs: V) -> V {
    lhs.mul(rhs)
}

/// Multiplies every lane by `rhs`.
#[inline(always)]
pub fn vector_mul_scalar<V: SimdVector4>(lhs: V, rhs: f64) -> V {
    lhs.mul(V::splat(rhs))
}

/// Multiplies every lane by a backend scalar.
#[inline(always)]
pub fn vector_mul_scalard<V: SimdVector4>(lhs: V, rhs: V::Scalar) -> V {
    lhs.mul_scalar(rhs)
}

#[inline(always)]
pub fn vector_div<V: SimdVector4>(lhs: V, rhs: V) -> V {
    lhs.div(rhs)
}

/// Per lane minimum.
///
/// Returns the non-NaN side when exactly one side is NaN, and `rhs` when the
/// lanes compare equal (so `vector_min(0.0, -0.0)` is `-0.0`).
#[inline(always)]
pub fn vector_min<V: SimdVector4>(lhs: V, rhs: V) -> V {
    lhs.min(rhs)
}

/// Per lane maximum. Same NaN and tie rules as [`vector_min`].
#[inline(always)]
pub fn vector_max<V: SimdVector4>(lhs: V, rhs: V) -> V {
    lhs.max(rhs)
}

/// `min(max_value, max(min_value, input))`.
///
/// The lower bound is applied first, so `min_value > max_value` resolves to
/// `max_value`.
#[inline(always)]
pub fn vector_clamp<V: SimdVector4>(input: V, min_value: V, max_value: V) -> V {
    max_value.min(min_value.max(input))
}

/// Per lane absolute value. The sign bit is cleared, so `-0.0` becomes `0.0`.
#[inline(always)]
pub fn vector_abs<V: SimdVector4>(input: V) -> V {
    input.abs()
}

/// Per lane negation, computed as `input * -1.0`.
#[inline(always)]
pub fn vector_neg<V: SimdVector4>(input: V) -> V {
    input.mul(V::splat(-1.0))
}

/// `1.0 / input` as a true division.
#[inline(always)]
pub fn vector_reciprocal<V: SimdVector4>(input: V) -> V {
    V::splat(1.0).div(input)
}

/// `(v0 * v1) + v2`, rounded after each operation.
#[inline(always)]
pub fn vector_mul_add<V: SimdVector4>(v0: V, v1: V, v2: V) -> V {
    v0.mul(v1).add(v2)
}

/// `(v0 * s1) + v2`, rounded after each operation.
#[inline(always)]
pub fn vector_mul_add_scalar<V: SimdVector4>(v0: V, s1: f64, v2: V) -> V {
    v0.mul(V::splat(s1)).add(v2)
}

/// `v2 - (v0 * v1)`, rounded after each operation.
#[inline(always)]
pub fn vector_neg_mul_sub<V: SimdVector4>(v0: V, v1: V, v2: V) -> V {
    v2.sub(v0.mul(v1))
}

/// `v2 - (v0 * s1)`, rounded after each operation.
#[inline(always)]
pub fn vector_neg_mul_sub_scalar<V: SimdVector4>(v0: V, s1: f64, v2: V) -> V {
    v2.sub(v0.mul(V::splat(s1)))
}

#[inline(always)]
fn lerp<V: SimdVector4>(start: V, end: V, alpha: V) -> V {
    // ((1 - alpha) * start) + (alpha * end) == (start - alpha * start) + (alpha * end)
    vector_mul_add(end, alpha, vector_neg_mul_sub(start, alpha, start))
}

/// Linear interpolation: `((1.0 - alpha) * start) + (alpha * end)`.
///
/// Returns `start` exactly at `alpha == 0.0` and `end` exactly at `alpha == 1.0`.
#[inline(always)]
pub fn vector_lerp<V: SimdVector4>(start: V, end: V, alpha: f64) -> V {
    lerp(start, end, V::splat(alpha))
}

/// [`vector_lerp`] with a backend scalar alpha.
#[inline(always)]
pub fn vector_lerp_scalard<V: SimdVector4>(start: V, end: V, alpha: V::Scalar) -> V {
    lerp(start, end, V::splat_scalar(alpha))
}

/// `input - floor(input)`, per lane.
#[inline]
pub fn vector_fraction<V: SimdVector4>(input: V) -> V {
    V::set(
        scalar_fraction(input.get_x()),
        scalar_fraction(input.get_y()),
        scalar_fraction(input.get_z()),
        scalar_fraction(input.get_w()),
    )
}

/// 3D cross product of [xyz]. The w lane of the result is zero.
#[inline]
pub fn vector_cross3<V: SimdVector4>(lhs: V, rhs: V) -> V {
    let (lhs_x, lhs_y, lhs_z) = (lhs.get_x(), lhs.get_y(), lhs.get_z());
    let (rhs_x, rhs_y, rhs_z) = (rhs.get_x(), rhs.get_y(), rhs.get_z());

    V::set(
        (lhs_y * rhs_z) - (lhs_z * rhs_y),
        (lhs_z * rhs_x) - (lhs_x * rhs_z),
        (lhs_x * rhs_y) - (lhs_y * rhs_x),
        0.0,
    )
}

// ============================================================================
// Dot products, length and normalization
// ============================================================================

/// 4D dot product, summed as `(xx + yy) + (zz + ww)`.
#[inline(always)]
pub fn vector_dot<V: SimdVector4>(lhs: V, rhs: V) -> f64 {
    let product = lhs.mul(rhs);
    (product.get_x() + product.get_y()) + (product.get_z() + product.get_w())
}

#[inline(always)]
pub fn vector_dot_as_scalar<V: SimdVector4>(lhs: V, rhs: V) -> V::Scalar {
    V::Scalar::set(vector_dot(lhs, rhs))
}

/// The 4D dot product replicated in all 4 lanes.
#[inline(always)]
pub fn vector_dot_as_vector<V: SimdVector4>(lhs: V, rhs: V) -> V {
    V::splat(vector_dot(lhs, rhs))
}

/// 3D dot product of [xyz], summed as `(xx + yy) + zz`.
#[inline(always)]
pub fn vector_dot3<V: SimdVector4>(lhs: V, rhs: V) -> f64 {
    let product = lhs.mul(rhs);
    (product.get_x() + product.get_y()) + product.get_z()
}

#[inline(always)]
pub fn vector_dot3_as_scalar<V: SimdVector4>(lhs: V, rhs: V) -> V::Scalar {
    V::Scalar::set(vector_dot3(lhs, rhs))
}

/// The 3D dot product replicated in all 4 lanes.
#[inline(always)]
pub fn vector_dot3_as_vector<V: SimdVector4>(lhs: V, rhs: V) -> V {
    V::splat(vector_dot3(lhs, rhs))
}

#[inline(always)]
pub fn vector_length_squared<V: SimdVector4>(input: V) -> f64 {
    vector_dot(input, input)
}

#[inline(always)]
pub fn vector_length_squared_as_scalar<V: SimdVector4>(input: V) -> V::Scalar {
    vector_dot_as_scalar(input, input)
}

#[inline(always)]
pub fn vector_length_squared3<V: SimdVector4>(input: V) -> f64 {
    vector_dot3(input, input)
}

#[inline(always)]
pub fn vector_length_squared3_as_scalar<V: SimdVector4>(input: V) -> V::Scalar {
    vector_dot3_as_scalar(input, input)
}

#[inline(always)]
pub fn vector_length<V: SimdVector4>(input: V) -> f64 {
    vector_length_as_scalar(input).cast()
}

#[inline(always)]
pub fn vector_length_as_scalar<V: SimdVector4>(input: V) -> V::Scalar {
    vector_length_squared_as_scalar(input).sqrt()
}

#[inline(always)]
pub fn vector_length3<V: SimdVector4>(input: V) -> f64 {
    vector_length3_as_scalar(input).cast()
}

#[inline(always)]
pub fn vector_length3_as_scalar<V: SimdVector4>(input: V) -> V::Scalar {
    vector_length_squared3_as_scalar(input).sqrt()
}

/// `1.0 / length(input)`, computed from the square root rather than an estimate.
#[inline(always)]
pub fn vector_length_reciprocal<V: SimdVector4>(input: V) -> f64 {
    vector_length_reciprocal_as_scalar(input).cast()
}

#[inline(always)]
pub fn vector_length_reciprocal_as_scalar<V: SimdVector4>(input: V) -> V::Scalar {
    vector_length_squared_as_scalar(input).sqrt_reciprocal()
}

#[inline(always)]
pub fn vector_length_reciprocal3<V: SimdVector4>(input: V) -> f64 {
    vector_length_reciprocal3_as_scalar(input).cast()
}

#[inline(always)]
pub fn vector_length_reciprocal3_as_scalar<V: SimdVector4>(input: V) -> V::Scalar {
    vector_length_squared3_as_scalar(input).sqrt_reciprocal()
}

/// Euclidean distance between the [xyz] lanes of two points.
#[inline(always)]
pub fn vector_distance3<V: SimdVector4>(lhs: V, rhs: V) -> f64 {
    vector_length3(rhs.sub(lhs))
}

/// Scales all 4 lanes by the reciprocal of the 3D length.
///
/// The result is not finite when the 3D length is zero or not finite; use
/// [`vector_normalize3_or`] when that can happen.
#[inline(always)]
pub fn vector_normalize3<V: SimdVector4>(input: V) -> V {
    input.mul_scalar(vector_length_reciprocal3_as_scalar(input))
}

/// Normalizes `input` in 3D, or returns `fallback` when its squared 3D length is
/// below `threshold` (NaN lengths also fall back).
///
/// [`DEFAULT_NORMALIZE_THRESHOLD`] is the customary threshold.
#[inline]
pub fn vector_normalize3_or<V: SimdVector4>(input: V, fallback: V, threshold: f64) -> V {
    let length_squared = vector_length_squared3_as_scalar(input);

    if length_squared.cast() >= threshold {
        input.mul_scalar(length_squared.sqrt_reciprocal())
    } else {
        fallback
    }
}

// ============================================================================
// Comparisons
// ============================================================================

/// Lanes where `lhs == rhs`.
#[inline(always)]
pub fn vector_equal<V: SimdVector4>(lhs: V, rhs: V) -> V::Mask {
    lhs.cmp_eq(rhs)
}

/// Lanes where `lhs < rhs`.
#[inline(always)]
pub fn vector_less_than<V: SimdVector4>(lhs: V, rhs: V) -> V::Mask {
    lhs.cmp_lt(rhs)
}

/// Lanes where `lhs <= rhs`.
#[inline(always)]
pub fn vector_less_equal<V: SimdVector4>(lhs: V, rhs: V) -> V::Mask {
    lhs.cmp_le(rhs)
}

/// Lanes where `lhs > rhs`.
#[inline(always)]
pub fn vector_greater_than<V: SimdVector4>(lhs: V, rhs: V) -> V::Mask {
    lhs.cmp_gt(rhs)
}

/// Lanes where `lhs >= rhs`.
#[inline(always)]
pub fn vector_greater_equal<V: SimdVector4>(lhs: V, rhs: V) -> V::Mask {
    lhs.cmp_ge(rhs)
}

macro_rules! comparison_reducers {
    ($($compare:ident, $symbol:literal => $all:ident, $all2:ident, $all3:ident, $any:ident, $any2:ident, $any3:ident;)*) => {
        $(
            #[doc = concat!("True when `lhs ", $symbol, " rhs` in all 4 lanes.")]
            #[inline(always)]
            pub fn $all<V: SimdVector4>(lhs: V, rhs: V) -> bool {
                lhs.$compare(rhs).all()
            }

            #[doc = concat!("True when `lhs ", $symbol, " rhs` in both [xy] lanes.")]
            #[inline(always)]
            pub fn $all2<V: SimdVector4>(lhs: V, rhs: V) -> bool {
                lhs.$compare(rhs).all2()
            }

            #[doc = concat!("True when `lhs ", $symbol, " rhs` in all [xyz] lanes.")]
            #[inline(always)]
            pub fn $all3<V: SimdVector4>(lhs: V, rhs: V) -> bool {
                lhs.$compare(rhs).all3()
            }

            #[doc = concat!("True when `lhs ", $symbol, " rhs` in any of the 4 lanes.")]
            #[inline(always)]
            pub fn $any<V: SimdVector4>(lhs: V, rhs: V) -> bool {
                lhs.$compare(rhs).any()
            }

            #[doc = concat!("True when `lhs ", $symbol, " rhs` in either [xy] lane.")]
            #[inline(always)]
            pub fn $any2<V: SimdVector4>(lhs: V, rhs: V) -> bool {
                lhs.$compare(rhs).any2()
            }

            #[doc = concat!("True when `lhs ", $symbol, " rhs` in any [xyz] lane.")]
            #[inline(always)]
            pub fn $any3<V: SimdVector4>(lhs: V, rhs: V) -> bool {
                lhs.$compare(rhs).any3()
            }
        )*
    };
}

comparison_reducers! {
    cmp_eq, "==" => vector_all_equal, vector_all_equal2, vector_all_equal3,
        vector_any_equal, vector_any_equal2, vector_any_equal3;
    cmp_lt, "<" => vector_all_less_than, vector_all_less_than2, vector_all_less_than3,
        vector_any_less_than, vector_any_less_than2, vector_any_less_than3;
    cmp_le, "<=" => vector_all_less_equal, vector_all_less_equal2, vector_all_less_equal3,
        vector_any_less_equal, vector_any_less_equal2, vector_any_less_equal3;
    cmp_gt, ">" => vector_all_greater_than, vector_all_greater_than2, vector_all_greater_than3,
        vector_any_greater_than, vector_any_greater_than2, vector_any_greater_than3;
    cmp_ge, ">=" => vector_all_greater_equal, vector_all_greater_equal2, vector_all_greater_equal3,
        vector_any_greater_equal, vector_any_greater_equal2, vector_any_greater_equal3;
}

#[inline(always)]
fn near_equal_mask<V: SimdVector4>(lhs: V, rhs: V, threshold: f64) -> V::Mask {
    lhs.sub(rhs).abs().cmp_le(V::splat(threshold))
}

/// True when `abs(lhs - rhs) <= threshold` in all 4 lanes.
#[inline(always)]
pub fn vector_all_near_equal<V: SimdVector4>(lhs: V, rhs: V, threshold: f64) -> bool {
    near_equal_mask(lhs, rhs, threshold).all()
}

/// True when `abs(lhs - rhs) <= threshold` in both [xy] lanes.
#[inline(always)]
pub fn vector_all_near_equal2<V: SimdVector4>(lhs: V, rhs: V, threshold: f64) -> bool {
    near_equal_mask(lhs, rhs, threshold).all2()
}

/// True when `abs(lhs - rhs) <= threshold` in all [xyz] lanes.
#[inline(always)]
pub fn vector_all_near_equal3<V: SimdVector4>(lhs: V, rhs: V, threshold: f64) -> bool {
    near_equal_mask(lhs, rhs, threshold).all3()
}

/// True when `abs(lhs - rhs) <= threshold` in any of the 4 lanes.
#[inline(always)]
pub fn vector_any_near_equal<V: SimdVector4>(lhs: V, rhs: V, threshold: f64) -> bool {
    near_equal_mask(lhs, rhs, threshold).any()
}

/// True when `abs(lhs - rhs) <= threshold` in either [xy] lane.
#[inline(always)]
pub fn vector_any_near_equal2<V: SimdVector4>(lhs: V, rhs: V, threshold: f64) -> bool {
    near_equal_mask(lhs, rhs, threshold).any2()
}

/// True when `abs(lhs - rhs) <= threshold` in any [xyz] lane.
#[inline(always)]
pub fn vector_any_near_equal3<V: SimdVector4>(lhs: V, rhs: V, threshold: f64) -> bool {
    near_equal_mask(lhs, rhs, threshold).any3()
}

#[inline(always)]
fn is_finite_mask<V: SimdVector4>(input: V) -> V::Mask {
    // NaN fails the comparison as well
    input.abs().cmp_lt(V::splat(f64::INFINITY))
}

/// True when no lane is NaN or infinite.
#[inline(always)]
pub fn vector_is_finite<V: SimdVector4>(input: V) -> bool {
    is_finite_mask(input).all()
}

/// True when neither [xy] lane is NaN or infinite.
#[inline(always)]
pub fn vector_is_finite2<V: SimdVector4>(input: V) -> bool {
    is_finite_mask(input).all2()
}

/// True when no [xyz] lane is NaN or infinite.
#[inline(always)]
pub fn vector_is_finite3<V: SimdVector4>(input: V) -> bool {
    is_finite_mask(input).all3()
}

// ============================================================================
// Rounding
// ============================================================================

/// Rounds each lane toward +∞.
///
/// NaN, ±∞ and magnitudes of at least 2^52 are returned unchanged, and zero
/// results keep the sign of the input.
///
/// ```rust
/// use simd4d::vector4d::*;
///
/// let rounded = vector_ceil(vector_set(1.8, 1.0, -1.8, -1.0));
/// assert_eq!(vector_to_array(rounded), [2.0, 1.0, -1.0, -1.0]);
/// ```
#[inline(always)]
pub fn vector_ceil<V: SimdVector4>(input: V) -> V {
    input.ceil()
}

/// Rounds each lane toward -∞. Same passthrough rules as [`vector_ceil`].
///
/// ```rust
/// use simd4d::vector4d::*;
///
/// let rounded = vector_floor(vector_set(1.8, 1.0, -1.8, -1.0));
/// assert_eq!(vector_to_array(rounded), [1.0, 1.0, -2.0, -1.0]);
/// ```
#[inline(always)]
pub fn vector_floor<V: SimdVector4>(input: V) -> V {
    input.floor()
}

/// Rounds each lane to nearest with ties away from zero.
///
/// ```rust
/// use simd4d::vector4d::*;
///
/// let rounded = vector_round_symmetric(vector_set(1.5, -1.5, 1.2, -1.2));
/// assert_eq!(vector_to_array(rounded), [2.0, -2.0, 1.0, -1.0]);
/// ```
#[inline(always)]
pub fn vector_round_symmetric<V: SimdVector4>(input: V) -> V {
    input.round_symmetric()
}

/// Rounds each lane to nearest with ties to even.
///
/// ```rust
/// use simd4d::vector4d::*;
///
/// let rounded = vector_round_bankers(vector_set(2.5, 1.5, -2.5, -1.5));
/// assert_eq!(vector_to_array(rounded), [2.0, 2.0, -2.0, -2.0]);
/// ```
#[inline(always)]
pub fn vector_round_bankers<V: SimdVector4>(input: V) -> V {
    input.round_bankers()
}

// ============================================================================
// Selection and swizzles
// ============================================================================

/// Bitwise select: lanes of `if_true` where `mask` is set, `if_false` elsewhere.
#[inline(always)]
pub fn vector_select<V: SimdVector4>(mask: V::Mask, if_true: V, if_false: V) -> V {
    V::select(mask, if_true, if_false)
}

/// Builds a vector from 4 component symbols (see [`mix4`]).
///
/// ```rust
/// use simd4d::mix::mix4::{A, W, X, Z};
/// use simd4d::vector4d::*;
///
/// let first = vector_set(1.0, 2.0, 3.0, 4.0);
/// let second = vector_set(5.0, 6.0, 7.0, 8.0);
///
/// let mixed = vector_mix::<X, A, Z, W, _>(first, second);
/// assert_eq!(vector_to_array(mixed), [1.0, 5.0, 3.0, 4.0]);
/// ```
#[inline(always)]
pub fn vector_mix<const C0: u8, const C1: u8, const C2: u8, const C3: u8, V: SimdVector4>(
    input0: V,
    input1: V,
) -> V {
    input0.mix::<C0, C1, C2, C3>(input1)
}

/// Replicates the x lane.
#[inline(always)]
pub fn vector_dup_x<V: SimdVector4>(input: V) -> V {
    vector_mix::<{ mix4::X }, { mix4::X }, { mix4::X }, { mix4::X }, V>(input, input)
}

/// Replicates the y lane.
#[inline(always)]
pub fn vector_dup_y<V: SimdVector4>(input: V) -> V {
    vector_mix::<{ mix4::Y }, { mix4::Y }, { mix4::Y }, { mix4::Y }, V>(input, input)
}

/// Replicates the z lane.
#[inline(always)]
pub fn vector_dup_z<V: SimdVector4>(input: V) -> V {
    vector_mix::<{ mix4::Z }, { mix4::Z }, { mix4::Z }, { mix4::Z }, V>(input, input)
}

/// Replicates the w lane.
#[inline(always)]
pub fn vector_dup_w<V: SimdVector4>(input: V) -> V {
    vector_mix::<{ mix4::W }, { mix4::W }, { mix4::W }, { mix4::W }, V>(input, input)
}

// ============================================================================
// Sign and transcendental functions
// ============================================================================

/// `1.0` where `input >= 0.0` (including `-0.0`), `-1.0` elsewhere (including NaN).
#[inline(always)]
pub fn vector_sign<V: SimdVector4>(input: V) -> V {
    let is_positive = input.cmp_ge(V::zero());
    V::select(is_positive, V::splat(1.0), V::splat(-1.0))
}

/// `input` with the sign bit of `control_sign`, per lane.
#[inline(always)]
pub fn vector_copy_sign<V: SimdVector4>(input: V, control_sign: V) -> V {
    input.copy_sign(control_sign)
}

#[inline(always)]
fn map_lanes<V: SimdVector4>(input: V, op: impl Fn(f64) -> f64) -> V {
    V::set(
        op(input.get_x()),
        op(input.get_y()),
        op(input.get_z()),
        op(input.get_w()),
    )
}

#[inline]
pub fn vector_sin<V: SimdVector4>(angle: V) -> V {
    map_lanes(angle, scalar_sin)
}

#[inline]
pub fn vector_cos<V: SimdVector4>(angle: V) -> V {
    map_lanes(angle, scalar_cos)
}

/// `sin / cos` per lane, with a signed infinity where the cosine is exactly zero.
#[inline]
pub fn vector_tan<V: SimdVector4>(angle: V) -> V {
    tan_from_parts(angle, vector_sin(angle), vector_cos(angle))
}

#[inline(always)]
fn tan_from_parts<V: SimdVector4>(angle: V, sin: V, cos: V) -> V {
    let is_cos_zero = cos.cmp_eq(V::zero());
    let signed_infinity = V::splat(f64::INFINITY).copy_sign(angle);
    V::select(is_cos_zero, signed_infinity, sin.div(cos))
}

/// Arc-sine per lane. Lanes outside of [-1.0, 1.0] yield NaN.
#[inline]
pub fn vector_asin<V: SimdVector4>(input: V) -> V {
    map_lanes(input, scalar_asin)
}

/// Arc-cosine per lane. Lanes outside of [-1.0, 1.0] yield NaN.
#[inline]
pub fn vector_acos<V: SimdVector4>(input: V) -> V {
    map_lanes(input, scalar_acos)
}

#[inline]
pub fn vector_atan<V: SimdVector4>(input: V) -> V {
    map_lanes(input, scalar_atan)
}

/// Per lane `atan2(y, x)`, using both signs to pick the quadrant.
#[inline]
pub fn vector_atan2<V: SimdVector4>(y: V, x: V) -> V {
    V::set(
        scalar_atan2(y.get_x(), x.get_x()),
        scalar_atan2(y.get_y(), x.get_y()),
        scalar_atan2(y.get_z(), x.get_z()),
        scalar_atan2(y.get_w(), x.get_w()),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tan_pole_is_signed_infinity() {
        let angle = vector_set(1.0, -1.0, 0.5, -0.0);
        let sin = vector_set(1.0, -1.0, 0.5, 0.0);
        let cos = vector_set(0.0, 0.0, 2.0, -0.0);

        let tan = vector_to_array(tan_from_parts(angle, sin, cos));
        assert_eq!(tan[0], f64::INFINITY);
        assert_eq!(tan[1], f64::NEG_INFINITY);
        assert_eq!(tan[2], 0.25);
        assert_eq!(tan[3], f64::NEG_INFINITY);
    }

    #[test]
    #[should_panic(expected = "vector_load3 requires 3 elements, got 2")]
    fn test_short_load_panics() {
        vector_load3(&[1.0, 2.0]);
    }

    #[test]
    #[should_panic(expected = "vector_store requires 4 elements, got 3")]
    fn test_short_store_panics() {
        let mut output = [0.0; 3];
        vector_store(vector_zero(), &mut output);
    }

    #[test]
    fn test_store_bytes_is_native_endian() {
        let mut output = [0xAAu8; 32];
        vector_store_bytes2(vector_set(1.0, -2.0, 3.0, 4.0), &mut output);

        assert_eq!(&output[0..8], &1.0f64.to_ne_bytes());
        assert_eq!(&output[8..16], &(-2.0f64).to_ne_bytes());
        assert!(output[16..].iter().all(|&byte| byte == 0xAA));
    }
}
