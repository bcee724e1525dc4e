//! Dot product, length, distance and normalization tests.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use simd4d::vector4d::*;
use simd4d::{SimdScalar, Vector4d};

fn random_vector(rng: &mut StdRng, range: f64) -> Vector4d {
    vector_set(
        rng.random_range(-range..=range),
        rng.random_range(-range..=range),
        rng.random_range(-range..=range),
        rng.random_range(-range..=range),
    )
}

#[test]
fn test_dot_products() {
    let lhs = vector_set(1.0, 2.0, 3.0, 4.0);
    let rhs = vector_set(5.0, 6.0, 7.0, 8.0);

    assert_eq!(vector_dot(lhs, rhs), 70.0);
    assert_eq!(vector_dot3(lhs, rhs), 38.0);
    assert_eq!(vector_dot_as_scalar(lhs, rhs).cast(), 70.0);
    assert_eq!(vector_dot3_as_scalar(lhs, rhs).cast(), 38.0);
    assert_eq!(vector_to_array(vector_dot_as_vector(lhs, rhs)), [70.0; 4]);
    assert_eq!(vector_to_array(vector_dot3_as_vector(lhs, rhs)), [38.0; 4]);
}

#[test]
fn test_dot_summation_order() {
    // A left to right sum gives 1.0 or 3.0 here, the pairwise order gives 0.0
    let lhs = vector_set(1.0e16, 1.0, -1.0e16, 1.0);
    let ones = vector_splat(1.0);

    assert_eq!(vector_dot(lhs, ones), (1.0e16 + 1.0) + (-1.0e16 + 1.0));
    assert_eq!(vector_dot3(lhs, ones), (1.0e16 + 1.0) + -1.0e16);
}

#[test]
fn test_lengths() {
    let input = vector_set(2.0, 3.0, 6.0, 100.0);

    assert_eq!(vector_length_squared3(input), 49.0);
    assert_eq!(vector_length3(input), 7.0);
    assert_eq!(vector_length_reciprocal3(input), 1.0 / 7.0);
    assert_eq!(vector_length_squared(input), 10049.0);
    assert_eq!(vector_length(input), 10049.0f64.sqrt());
    assert_eq!(vector_length_reciprocal(input), 1.0 / 10049.0f64.sqrt());

    assert_eq!(vector_length3_as_scalar(input).cast(), 7.0);
    assert_eq!(vector_length_squared3_as_scalar(input).cast(), 49.0);
    assert_eq!(vector_length_reciprocal3_as_scalar(input).cast(), 1.0 / 7.0);
    assert_eq!(vector_length_squared_as_scalar(input).cast(), 10049.0);
    assert_eq!(vector_length_as_scalar(input).cast(), 10049.0f64.sqrt());
    assert_eq!(
        vector_length_reciprocal_as_scalar(input).cast(),
        1.0 / 10049.0f64.sqrt()
    );
}

#[test]
fn test_length_reciprocal_of_zero_is_infinite() {
    assert_eq!(vector_length_reciprocal3(vector_zero()), f64::INFINITY);
}

#[test]
fn test_distance3() {
    let lhs = vector_set(1.0, 1.0, 1.0, 50.0);
    let rhs = vector_set(4.0, 5.0, 1.0, -50.0);

    assert_eq!(vector_distance3(lhs, rhs), 5.0);
    assert_eq!(vector_distance3(rhs, lhs), 5.0);
}

#[test]
fn test_normalize3_unit_length() {
    let mut rng = StdRng::seed_from_u64(12345);

    for _ in 0..1000 {
        let input = random_vector(&mut rng, 1.0e3);
        if vector_length_squared3(input) < DEFAULT_NORMALIZE_THRESHOLD {
            continue;
        }

        let normalized = vector_normalize3(input);
        let length = vector_length3(normalized);

        assert!(
            (length - 1.0).abs() < 1.0e-10,
            "length of normalized {:?} is {length}",
            vector_to_array(input)
        );
    }
}

#[test]
fn test_normalize3_known_value() {
    let normalized = vector_normalize3(vector_set(3.0, 0.0, 4.0, 0.0));
    let lanes = vector_to_array(normalized);

    assert!((lanes[0] - 0.6).abs() < 1.0e-15);
    assert_eq!(lanes[1], 0.0);
    assert!((lanes[2] - 0.8).abs() < 1.0e-15);
}

#[test]
fn test_normalize3_or_fallback() {
    let fallback = vector_set(0.0, 0.0, 1.0, 0.0);

    let tiny = vector_set(1.0e-5, 0.0, 0.0, 0.0);
    assert_eq!(
        vector_to_array(vector_normalize3_or(tiny, fallback, DEFAULT_NORMALIZE_THRESHOLD)),
        [0.0, 0.0, 1.0, 0.0]
    );

    let zero = vector_zero();
    assert_eq!(
        vector_to_array(vector_normalize3_or(zero, fallback, DEFAULT_NORMALIZE_THRESHOLD)),
        [0.0, 0.0, 1.0, 0.0]
    );

    let nan = vector_set(f64::NAN, 0.0, 0.0, 0.0);
    assert_eq!(
        vector_to_array(vector_normalize3_or(nan, fallback, DEFAULT_NORMALIZE_THRESHOLD)),
        [0.0, 0.0, 1.0, 0.0]
    );

    let regular = vector_set(0.0, 2.0, 0.0, 0.0);
    assert_eq!(
        vector_to_array(vector_normalize3_or(regular, fallback, DEFAULT_NORMALIZE_THRESHOLD)),
        [0.0, 1.0, 0.0, 0.0]
    );
}

#[test]
fn test_normalize3_of_zero_is_not_finite() {
    assert!(!vector_is_finite3(vector_normalize3(vector_zero())));
}

#[test]
fn test_cross3_is_orthogonal() {
    let mut rng = StdRng::seed_from_u64(777);

    for _ in 0..1000 {
        let a = random_vector(&mut rng, 10.0);
        let b = random_vector(&mut rng, 10.0);
        let cross = vector_cross3(a, b);

        let scale = vector_length3(a) * vector_length3(b) * vector_length3(a).max(vector_length3(b));
        let tolerance = 1.0e-12 * scale.max(1.0);

        assert!(vector_dot3(cross, a).abs() <= tolerance);
        assert!(vector_dot3(cross, b).abs() <= tolerance);
        assert_eq!(vector_get_w(cross), 0.0);
    }
}

#[test]
fn test_cross3_basis() {
    let x = vector_set(1.0, 0.0, 0.0, 7.0);
    let y = vector_set(0.0, 1.0, 0.0, 7.0);

    assert_eq!(vector_to_array(vector_cross3(x, y)), [0.0, 0.0, 1.0, 0.0]);
    assert_eq!(vector_to_array(vector_cross3(y, x)), [0.0, 0.0, -1.0, 0.0]);
}
