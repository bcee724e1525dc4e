//! Rounding family tests.
//!
//! Every rounding function is checked bit for bit against the matching std f64
//! method, which implements exact IEEE-754 `roundToIntegral` semantics.

mod common;

use common::{assert_bits_eq, ROUNDING_EDGE_CASES};
use simd4d::simd::fallback;
use simd4d::vector4d::*;
use simd4d::{SimdVector4, Vector4d};

type RoundingFn = fn(Vector4d) -> Vector4d;

fn check_against_std(name: &str, simd: RoundingFn, reference: fn(f64) -> f64, inputs: &[f64]) {
    for chunk in inputs.chunks(4) {
        let mut lanes = [0.0; 4];
        lanes[..chunk.len()].copy_from_slice(chunk);

        let actual = vector_to_array(simd(Vector4d::from(lanes)));
        let expected = lanes.map(reference);

        println!("{name}: {lanes:?} -> {actual:?}");
        assert_bits_eq(actual, expected, &format!("{name}({lanes:?})"));
    }
}

#[test]
fn test_ceil_known_values() {
    let result = vector_ceil(vector_set(1.8, 1.0, -1.8, -1.0));
    assert_eq!(vector_to_array(result), [2.0, 1.0, -1.0, -1.0]);
}

#[test]
fn test_floor_known_values() {
    let result = vector_floor(vector_set(1.8, 1.0, -1.8, -1.0));
    assert_eq!(vector_to_array(result), [1.0, 1.0, -2.0, -1.0]);
}

#[test]
fn test_round_bankers_known_values() {
    let result = vector_round_bankers(vector_set(2.5, 1.5, -2.5, -1.5));
    assert_eq!(vector_to_array(result), [2.0, 2.0, -2.0, -2.0]);
}

#[test]
fn test_round_symmetric_known_values() {
    let result = vector_round_symmetric(vector_set(1.5, -1.5, 1.2, -1.2));
    assert_eq!(vector_to_array(result), [2.0, -2.0, 1.0, -1.0]);
}

#[test]
fn test_rounding_edge_cases_match_std() {
    check_against_std("ceil", vector_ceil, f64::ceil, &ROUNDING_EDGE_CASES);
    check_against_std("floor", vector_floor, f64::floor, &ROUNDING_EDGE_CASES);
    check_against_std(
        "round_bankers",
        vector_round_bankers,
        f64::round_ties_even,
        &ROUNDING_EDGE_CASES,
    );
    check_against_std(
        "round_symmetric",
        vector_round_symmetric,
        f64::round,
        &ROUNDING_EDGE_CASES,
    );
}

#[test]
fn test_zero_results_keep_input_sign() {
    let input = vector_set(-0.5, -0.3, -0.0, 0.3);

    assert_bits_eq(
        vector_to_array(vector_ceil(input)),
        [-0.0, -0.0, -0.0, 1.0],
        "ceil",
    );
    assert_bits_eq(
        vector_to_array(vector_round_bankers(input)),
        [-0.0, -0.0, -0.0, 0.0],
        "round_bankers",
    );
    assert_bits_eq(
        vector_to_array(vector_round_symmetric(input)),
        [-1.0, -0.0, -0.0, 0.0],
        "round_symmetric",
    );
}

#[test]
fn test_large_values_pass_through() {
    let limit = 4503599627370496.0; // 2^52
    let inputs = [
        vector_set(limit, -limit, limit + 1.0, -(limit + 1.0)),
        vector_set(limit * 3.0 + 2.0, -1e20, f64::MAX, f64::MIN),
    ];

    for input in inputs {
        let expected = vector_to_array(input);

        assert_bits_eq(vector_to_array(vector_ceil(input)), expected, "ceil");
        assert_bits_eq(vector_to_array(vector_floor(input)), expected, "floor");
        assert_bits_eq(
            vector_to_array(vector_round_bankers(input)),
            expected,
            "round_bankers",
        );
        assert_bits_eq(
            vector_to_array(vector_round_symmetric(input)),
            expected,
            "round_symmetric",
        );
    }
}

#[test]
fn test_nan_and_infinity_propagate() {
    let input = vector_set(f64::NAN, f64::INFINITY, f64::NEG_INFINITY, -f64::NAN);
    let functions: [(&str, RoundingFn); 4] = [
        ("ceil", vector_ceil),
        ("floor", vector_floor),
        ("round_bankers", vector_round_bankers),
        ("round_symmetric", vector_round_symmetric),
    ];

    for (name, function) in functions {
        let result = vector_to_array(function(input));
        assert!(result[0].is_nan(), "{name}: NaN must stay NaN");
        assert_eq!(result[1], f64::INFINITY, "{name}: +inf must pass through");
        assert_eq!(result[2], f64::NEG_INFINITY, "{name}: -inf must pass through");
        assert!(result[3].is_nan(), "{name}: -NaN must stay NaN");
    }
}

#[test]
fn test_floor_le_input_le_ceil() {
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    let mut rng = StdRng::seed_from_u64(12345);

    for _ in 0..2000 {
        let lanes: [f64; 4] = std::array::from_fn(|_| rng.random_range(-1.0e6..=1.0e6));
        let input = Vector4d::from(lanes);

        let floor = vector_to_array(vector_floor(input));
        let ceil = vector_to_array(vector_ceil(input));

        for lane in 0..4 {
            assert!(
                floor[lane] <= lanes[lane] && lanes[lane] <= ceil[lane],
                "floor/ceil bracket failed for {}: [{}, {}]",
                lanes[lane],
                floor[lane],
                ceil[lane]
            );
            assert!(ceil[lane] - floor[lane] <= 1.0);
        }
    }
}

#[test]
fn test_random_inputs_match_std() {
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    let mut rng = StdRng::seed_from_u64(42);
    let ranges = [1.0, 1.0e3, 1.0e9, 1.0e15, 1.0e17];

    for range in ranges {
        let inputs: Vec<f64> = (0..1000)
            .map(|_| rng.random_range(-range..=range))
            .collect();

        check_against_std("ceil", vector_ceil, f64::ceil, &inputs);
        check_against_std("floor", vector_floor, f64::floor, &inputs);
        check_against_std("round_bankers", vector_round_bankers, f64::round_ties_even, &inputs);
        check_against_std("round_symmetric", vector_round_symmetric, f64::round, &inputs);
    }
}

#[test]
fn test_half_integers_match_std() {
    let inputs: Vec<f64> = (-64..64).map(|i| i as f64 + 0.5).collect();

    check_against_std("round_bankers", vector_round_bankers, f64::round_ties_even, &inputs);
    check_against_std("round_symmetric", vector_round_symmetric, f64::round, &inputs);
}

#[test]
fn test_fallback_rounding_matches_std() {
    for chunk in ROUNDING_EDGE_CASES.chunks(4) {
        let input = fallback::Vector4d::set(chunk[0], chunk[1], chunk[2], chunk[3]);
        let lanes = input.to_array();

        assert_bits_eq(vector_floor(input).to_array(), lanes.map(f64::floor), "fallback floor");
        assert_bits_eq(vector_ceil(input).to_array(), lanes.map(f64::ceil), "fallback ceil");
        assert_bits_eq(
            vector_round_bankers(input).to_array(),
            lanes.map(f64::round_ties_even),
            "fallback round_bankers",
        );
        assert_bits_eq(
            vector_round_symmetric(input).to_array(),
            lanes.map(f64::round),
            "fallback round_symmetric",
        );
    }
}

#[test]
fn test_fraction() {
    let result = vector_fraction(vector_set(1.25, -1.25, 3.0, -0.0));
    assert_eq!(vector_to_array(result), [0.25, 0.75, 0.0, 0.0]);
}
