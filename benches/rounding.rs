//! Rounding Benchmarks: native backend vs fallback backend vs std

use std::hint::black_box;
use std::time::Instant;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;

use simd4d::simd::fallback;
use simd4d::vector4d::*;
use simd4d::{active_backend, SimdVector4, Vector4d};

const VECTOR_COUNTS: &[usize] = &[1_024, 16_384, 262_144, 1_048_576];

fn generate_test_data(count: usize) -> Vec<[f64; 4]> {
    let mut rng = StdRng::seed_from_u64(42);
    (0..count)
        .map(|_| std::array::from_fn(|_| (rng.random::<f64>() - 0.5) * 2.0e3))
        .collect() // Range [-1000, 1000]
}

fn rounding_functions<V: SimdVector4>() -> [(&'static str, fn(V) -> V); 4] {
    [
        ("floor", vector_floor),
        ("ceil", vector_ceil),
        ("round_bankers", vector_round_bankers),
        ("round_symmetric", vector_round_symmetric),
    ]
}

fn std_functions() -> [(&'static str, fn(f64) -> f64); 4] {
    [
        ("floor", f64::floor),
        ("ceil", f64::ceil),
        ("round_bankers", f64::round_ties_even),
        ("round_symmetric", f64::round),
    ]
}

fn benchmark_rounding(c: &mut Criterion) {
    for &count in VECTOR_COUNTS {
        let lanes = generate_test_data(count);
        let native: Vec<Vector4d> = lanes.iter().map(|&l| Vector4d::from(l)).collect();
        let portable: Vec<fallback::Vector4d> =
            lanes.iter().map(|&l| fallback::Vector4d::from(l)).collect();

        let native_functions = rounding_functions::<Vector4d>();
        let portable_functions = rounding_functions::<fallback::Vector4d>();

        for (index, (name, std_function)) in std_functions().into_iter().enumerate() {
            let mut group = c.benchmark_group(format!("{name} {}", format_size(count)));
            group.throughput(Throughput::Bytes((count * 4 * std::mem::size_of::<f64>()) as u64));

            group.bench_with_input(BenchmarkId::new("std", count), &lanes, |b, input| {
                b.iter(|| {
                    black_box(
                        input
                            .iter()
                            .map(|lane| lane.map(std_function))
                            .collect::<Vec<[f64; 4]>>(),
                    )
                })
            });

            let native_function = native_functions[index].1;
            group.bench_with_input(
                BenchmarkId::new(active_backend().name(), count),
                &native,
                |b, input| {
                    b.iter(|| {
                        black_box(
                            input
                                .iter()
                                .map(|&vector| native_function(vector))
                                .collect::<Vec<Vector4d>>(),
                        )
                    })
                },
            );

            let portable_function = portable_functions[index].1;
            group.bench_with_input(BenchmarkId::new("scalar", count), &portable, |b, input| {
                b.iter(|| {
                    black_box(
                        input
                            .iter()
                            .map(|&vector| portable_function(vector))
                            .collect::<Vec<fallback::Vector4d>>(),
                    )
                })
            });

            group.bench_with_input(
                BenchmarkId::new(format!("parallel {}", active_backend()), count),
                &native,
                |b, input| {
                    b.iter(|| {
                        black_box(
                            input
                                .par_iter()
                                .map(|&vector| native_function(vector))
                                .collect::<Vec<Vector4d>>(),
                        )
                    })
                },
            );

            group.finish();
        }
    }
}

fn format_size(vectors: usize) -> String {
    let bytes = vectors * 4 * std::mem::size_of::<f64>();
    if bytes >= 1_073_741_824 {
        format!("{:.1} GiB", bytes as f64 / 1_073_741_824.0)
    } else if bytes >= 1_048_576 {
        format!("{:.1} MiB", bytes as f64 / 1_048_576.0)
    } else if bytes >= 1024 {
        format!("{:.1} KiB", bytes as f64 / 1024.0)
    } else {
        format!("{bytes} B")
    }
}

fn all_benchmarks(c: &mut Criterion) {
    println!("Starting rounding benchmarks on the {} backend", active_backend());
    let start_time = Instant::now();
    benchmark_rounding(c);
    let elapsed = start_time.elapsed();
    println!(
        "Benchmark suite completed in {:.2} seconds",
        elapsed.as_secs_f64()
    );
}

criterion_group!(benches, all_benchmarks);
criterion_main!(benches);
