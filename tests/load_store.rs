//! Load, store and lane access tests.

use simd4d::vector4d::*;
use simd4d::{Float2d, Float3d, Float4d, Mix4, Scalard, Simd4dError, SimdScalar};

#[test]
fn test_partial_loads_zero_fill() {
    let input = [1.0, 2.0, 3.0, 4.0, 5.0];

    assert_eq!(vector_to_array(vector_load(&input)), [1.0, 2.0, 3.0, 4.0]);
    assert_eq!(vector_to_array(vector_load1(&input)), [1.0, 0.0, 0.0, 0.0]);
    assert_eq!(vector_to_array(vector_load2(&input)), [1.0, 2.0, 0.0, 0.0]);
    assert_eq!(vector_to_array(vector_load3(&input)), [1.0, 2.0, 3.0, 0.0]);
}

#[test]
fn test_loads_accept_exact_lengths() {
    assert_eq!(vector_to_array(vector_load1(&[7.0])), [7.0, 0.0, 0.0, 0.0]);
    assert_eq!(vector_to_array(vector_load2(&[7.0, 8.0])), [7.0, 8.0, 0.0, 0.0]);
    assert_eq!(vector_to_array(vector_load3(&[7.0, 8.0, 9.0])), [7.0, 8.0, 9.0, 0.0]);
}

#[test]
fn test_loads_preserve_special_bits() {
    let input = [-0.0, f64::NAN, f64::NEG_INFINITY, f64::MIN_POSITIVE / 4.0];
    let lanes = vector_to_array(vector_load(&input));

    assert_eq!(lanes[0].to_bits(), (-0.0f64).to_bits());
    assert_eq!(lanes[1].to_bits(), f64::NAN.to_bits());
    assert_eq!(lanes[2], f64::NEG_INFINITY);
    assert_eq!(lanes[3].to_bits(), (f64::MIN_POSITIVE / 4.0).to_bits());
}

#[test]
fn test_checked_loads() {
    assert!(try_vector_load(&[1.0, 2.0, 3.0, 4.0]).is_ok());
    assert!(try_vector_load1(&[1.0]).is_ok());

    let error = try_vector_load(&[1.0, 2.0, 3.0]).unwrap_err();
    assert_eq!(
        error,
        Simd4dError::BufferTooSmall {
            operation: "vector_load",
            required: 4,
            actual: 3
        }
    );

    assert!(matches!(
        try_vector_load1(&[]),
        Err(Simd4dError::BufferTooSmall { required: 1, actual: 0, .. })
    ));
    assert!(matches!(
        try_vector_load2(&[1.0]),
        Err(Simd4dError::BufferTooSmall { required: 2, actual: 1, .. })
    ));
    assert!(matches!(
        try_vector_load3(&[1.0, 2.0]),
        Err(Simd4dError::BufferTooSmall { required: 3, actual: 2, .. })
    ));
}

#[test]
fn test_broadcast_and_float_loads() {
    assert_eq!(vector_to_array(vector_broadcast(&2.5)), [2.5; 4]);

    let float4 = Float4d::new(1.0, 2.0, 3.0, 4.0);
    let float3 = Float3d::new(1.0, 2.0, 3.0);
    let float2 = Float2d::new(1.0, 2.0);

    assert_eq!(vector_to_array(vector_load_float4(&float4)), [1.0, 2.0, 3.0, 4.0]);
    assert_eq!(vector_to_array(vector_load_float3(&float3)), [1.0, 2.0, 3.0, 0.0]);
    assert_eq!(vector_to_array(vector_load_float2(&float2)), [1.0, 2.0, 0.0, 0.0]);
}

#[test]
fn test_partial_stores_leave_tail_untouched() {
    let input = vector_set(1.0, 2.0, 3.0, 4.0);

    let mut output = [9.0; 5];
    vector_store(input, &mut output);
    assert_eq!(output, [1.0, 2.0, 3.0, 4.0, 9.0]);

    let mut output = [9.0; 4];
    vector_store1(input, &mut output);
    assert_eq!(output, [1.0, 9.0, 9.0, 9.0]);

    let mut output = [9.0; 4];
    vector_store2(input, &mut output);
    assert_eq!(output, [1.0, 2.0, 9.0, 9.0]);

    let mut output = [9.0; 4];
    vector_store3(input, &mut output);
    assert_eq!(output, [1.0, 2.0, 3.0, 9.0]);
}

#[test]
fn test_checked_stores() {
    let input = vector_set(1.0, 2.0, 3.0, 4.0);

    let mut short = [0.0; 3];
    assert!(matches!(
        try_vector_store(input, &mut short),
        Err(Simd4dError::BufferTooSmall { operation: "vector_store", .. })
    ));
    assert_eq!(short, [0.0; 3], "a rejected store must not write");

    try_vector_store3(input, &mut short).unwrap();
    assert_eq!(short, [1.0, 2.0, 3.0]);

    let mut single = [0.0; 1];
    try_vector_store1(input, &mut single).unwrap();
    assert_eq!(single, [1.0]);
    assert!(try_vector_store2(input, &mut single).is_err());
    assert!(try_vector_store1(input, &mut []).is_err());
}

#[test]
fn test_store_bytes() {
    let input = vector_set(1.0, -2.0, 0.5, 8.0);

    let mut output = [0u8; 32];
    vector_store_bytes(input, &mut output);
    for (lane, chunk) in output.chunks_exact(8).enumerate() {
        let value = f64::from_ne_bytes(chunk.try_into().unwrap());
        assert_eq!(value, vector_to_array(input)[lane]);
    }

    let mut output = [0xFFu8; 24];
    vector_store_bytes1(input, &mut output);
    assert_eq!(&output[..8], &1.0f64.to_ne_bytes());
    assert!(output[8..].iter().all(|&byte| byte == 0xFF));

    let mut output = [0xFFu8; 24];
    vector_store_bytes3(input, &mut output);
    assert_eq!(&output[16..], &0.5f64.to_ne_bytes());
}

#[test]
#[should_panic(expected = "vector_store_bytes1 requires 8 elements, got 7")]
fn test_store_bytes_short_buffer_panics() {
    let mut output = [0u8; 7];
    vector_store_bytes1(vector_zero(), &mut output);
}

#[test]
fn test_float_stores() {
    let input = vector_set(1.0, 2.0, 3.0, 4.0);

    let mut float4 = Float4d::default();
    vector_store_float4(input, &mut float4);
    assert_eq!(float4, Float4d::new(1.0, 2.0, 3.0, 4.0));

    let mut float3 = Float3d::default();
    vector_store_float3(input, &mut float3);
    assert_eq!(float3, Float3d::new(1.0, 2.0, 3.0));

    let mut float2 = Float2d::default();
    vector_store_float2(input, &mut float2);
    assert_eq!(float2, Float2d::new(1.0, 2.0));
}

#[test]
fn test_lane_getters() {
    let input = vector_set(1.0, 2.0, 3.0, 4.0);

    assert_eq!(vector_get_x(input), 1.0);
    assert_eq!(vector_get_y(input), 2.0);
    assert_eq!(vector_get_z(input), 3.0);
    assert_eq!(vector_get_w(input), 4.0);
    assert_eq!(vector_get_x_as_scalar(input).cast(), 1.0);
    assert_eq!(vector_get_y_as_scalar(input).cast(), 2.0);
    assert_eq!(vector_get_z_as_scalar(input).cast(), 3.0);
    assert_eq!(vector_get_w_as_scalar(input).cast(), 4.0);
}

#[test]
fn test_get_component() {
    let input = vector_set(1.0, 2.0, 3.0, 4.0);

    assert_eq!(vector_get_component(input, Mix4::X), 1.0);
    assert_eq!(vector_get_component(input, Mix4::W), 4.0);
    // A..D address the same lanes as X..W
    assert_eq!(vector_get_component(input, Mix4::B), 2.0);
    assert_eq!(vector_get_component(input, Mix4::C), 3.0);
}

#[test]
fn test_lane_setters_preserve_other_lanes() {
    let input = vector_set(-0.0, f64::NAN, f64::INFINITY, 1.5);

    let lanes = vector_to_array(vector_set_z(input, 9.0));
    assert_eq!(lanes[0].to_bits(), (-0.0f64).to_bits());
    assert!(lanes[1].is_nan());
    assert_eq!(lanes[2], 9.0);
    assert_eq!(lanes[3], 1.5);

    assert_eq!(vector_get_x(vector_set_x(input, 5.0)), 5.0);
    assert_eq!(vector_get_y(vector_set_y(input, 5.0)), 5.0);
    assert_eq!(vector_get_w(vector_set_w(input, 5.0)), 5.0);

    let scalar = Scalard::set(-3.0);
    assert_eq!(vector_get_x(vector_set_x_scalard(input, scalar)), -3.0);
    assert_eq!(vector_get_y(vector_set_y_scalard(input, scalar)), -3.0);
    assert_eq!(vector_get_z(vector_set_z_scalard(input, scalar)), -3.0);
    assert_eq!(vector_get_w(vector_set_w_scalard(input, scalar)), -3.0);
    assert_eq!(vector_to_array(vector_splat_scalard(scalar)), [-3.0; 4]);
}

#[test]
fn test_mix_and_dup() {
    use simd4d::mix4::{A, B, D, W, X, Y, Z};

    let first = vector_set(1.0, 2.0, 3.0, 4.0);
    let second = vector_set(5.0, 6.0, 7.0, 8.0);

    assert_eq!(vector_to_array(vector_mix::<X, Y, Z, W, _>(first, second)), [1.0, 2.0, 3.0, 4.0]);
    assert_eq!(vector_to_array(vector_mix::<A, B, Z, D, _>(first, second)), [5.0, 6.0, 3.0, 8.0]);
    assert_eq!(vector_to_array(vector_mix::<W, Z, B, A, _>(first, second)), [4.0, 3.0, 6.0, 5.0]);
    assert_eq!(vector_to_array(vector_mix::<D, X, X, D, _>(first, second)), [8.0, 1.0, 1.0, 8.0]);

    assert_eq!(vector_to_array(vector_dup_x(first)), [1.0; 4]);
    assert_eq!(vector_to_array(vector_dup_y(first)), [2.0; 4]);
    assert_eq!(vector_to_array(vector_dup_z(first)), [3.0; 4]);
    assert_eq!(vector_to_array(vector_dup_w(first)), [4.0; 4]);
}
