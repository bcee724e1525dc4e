//! Assertion helpers shared by the integration tests.

#![allow(dead_code)]

/// Asserts that two lanes have the same bit pattern, treating any two NaNs as equal.
pub fn assert_lane_bits_eq(actual: f64, expected: f64, context: &str) {
    if actual.is_nan() && expected.is_nan() {
        return;
    }

    assert_eq!(
        actual.to_bits(),
        expected.to_bits(),
        "{context}: got {actual:e} ({:#018x}), expected {expected:e} ({:#018x})",
        actual.to_bits(),
        expected.to_bits()
    );
}

/// Lane by lane [`assert_lane_bits_eq`].
pub fn assert_bits_eq(actual: [f64; 4], expected: [f64; 4], context: &str) {
    for lane in 0..4 {
        assert_lane_bits_eq(
            actual[lane],
            expected[lane],
            &format!("{context} (lane {lane})"),
        );
    }
}

/// Inputs that exercise every branch of the rounding kernels.
pub const ROUNDING_EDGE_CASES: [f64; 36] = [
    0.0,
    -0.0,
    0.1,
    -0.1,
    0.5,
    -0.5,
    0.49999999999999994,
    -0.49999999999999994,
    0.5000000000000001,
    -0.5000000000000001,
    1.0,
    -1.0,
    1.5,
    -1.5,
    1.8,
    -1.8,
    2.5,
    -2.5,
    3.5,
    -3.5,
    2147483647.5,
    2147483648.5,
    -2147483648.5,
    -2147483649.5,
    1e15 + 0.25,
    -1e15 - 0.75,
    4503599627370495.5,
    -4503599627370495.5,
    4503599627370496.0,
    4503599627370497.0,
    -4503599627370497.0,
    1e300,
    f64::MIN_POSITIVE,
    -f64::MIN_POSITIVE,
    f64::INFINITY,
    f64::NEG_INFINITY,
];
