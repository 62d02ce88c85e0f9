use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use ndarray::Array1;
use ndarray_stats::QuantileExt;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use simdarray::array::{map, simple_exists};
use simdarray::simd::{F32Lanes, LaneGroup};
use simdarray::SimdSliceExt;

// ====================================================================================
// --- Configuration: sizes spanning the cache hierarchy ---
// ====================================================================================

/// Vector sizes chosen to move the working set from L1 out to main memory.
///
/// An f32 is 4 bytes, so `1024` elements is 4 KiB and `16 * 1024 * 1024` is 64 MiB.
const VECTOR_SIZES: &[usize] = &[
    1024,             // 4 KiB
    16 * 1024,        // 64 KiB
    256 * 1024,       // 1 MiB
    4 * 1024 * 1024,  // 16 MiB
    16 * 1024 * 1024, // 64 MiB
];

/// Fixed seed so every run benchmarks the same data.
fn generate_random_data(len: usize) -> Vec<f32> {
    let mut rng = StdRng::seed_from_u64(42);
    (0..len).map(|_| rng.random::<f32>()).collect()
}

fn bytes(size: usize) -> Throughput {
    Throughput::Bytes(size as u64 * std::mem::size_of::<f32>() as u64)
}

// ====================================================================================
// --- Benchmark Definitions ---
// ====================================================================================

fn all_benchmarks(c: &mut Criterion) {
    // --- Suite 1: Sum ---
    for &size in VECTOR_SIZES {
        let mut group = c.benchmark_group("Sum".to_string());
        group.throughput(bytes(size));

        let a_vec = generate_random_data(size);
        let a_arr = Array1::from_vec(a_vec.clone());

        group.bench_with_input(BenchmarkId::new("scalar", size), &a_vec, |b, v| {
            b.iter(|| black_box(v.scalar_sum()))
        });

        group.bench_with_input(BenchmarkId::new("simd (simdarray)", size), &a_vec, |b, v| {
            b.iter(|| black_box(v.simd_sum()))
        });

        group.bench_with_input(BenchmarkId::new("ndarray", size), &a_arr, |b, v| {
            b.iter(|| black_box(v.sum()))
        });
        group.finish();
    }

    // --- Suite 2: Max ---
    for &size in VECTOR_SIZES {
        let mut group = c.benchmark_group("Max".to_string());
        group.throughput(bytes(size));

        let a_vec = generate_random_data(size);
        let a_arr = Array1::from_vec(a_vec.clone());

        group.bench_with_input(BenchmarkId::new("scalar", size), &a_vec, |b, v| {
            b.iter(|| black_box(v.scalar_max()))
        });

        group.bench_with_input(BenchmarkId::new("simd (simdarray)", size), &a_vec, |b, v| {
            b.iter(|| black_box(v.simd_max()))
        });

        // ndarray-stats folds with PartialOrd, one element at a time.
        group.bench_with_input(BenchmarkId::new("ndarray-stats", size), &a_arr, |b, v| {
            b.iter(|| black_box(v.max().copied()))
        });
        group.finish();
    }

    // --- Suite 3: Search for an absent value (full scan) ---
    for &size in VECTOR_SIZES {
        let mut group = c.benchmark_group("Contains".to_string());
        group.throughput(bytes(size));

        let a_vec = generate_random_data(size);

        group.bench_with_input(BenchmarkId::new("scalar", size), &a_vec, |b, v| {
            b.iter(|| black_box(v.scalar_contains(black_box(2.0))))
        });

        group.bench_with_input(BenchmarkId::new("simd (simdarray)", size), &a_vec, |b, v| {
            b.iter(|| black_box(simple_exists(black_box(2.0), v.as_slice())))
        });
        group.finish();
    }

    // --- Suite 4: Map ---
    for &size in VECTOR_SIZES {
        let mut group = c.benchmark_group("Map".to_string());
        group.throughput(bytes(size));

        let a_vec = generate_random_data(size);
        let a_arr = Array1::from_vec(a_vec.clone());
        let scale = F32Lanes::splat(2.0);

        group.bench_with_input(BenchmarkId::new("scalar", size), &a_vec, |b, v| {
            b.iter(|| black_box(v.iter().map(|x| x * 2.0 + x).collect::<Vec<f32>>()))
        });

        group.bench_with_input(BenchmarkId::new("simd (simdarray)", size), &a_vec, |b, v| {
            b.iter(|| {
                let mapped: simdarray::Result<Vec<f32>> =
                    map(|l: F32Lanes| l * scale + l, v.as_slice());
                black_box(mapped)
            })
        });

        group.bench_with_input(BenchmarkId::new("ndarray", size), &a_arr, |b, v| {
            b.iter(|| black_box(v.mapv(|x| x * 2.0 + x)))
        });
        group.finish();
    }
}

criterion_group!(benches, all_benchmarks);
criterion_main!(benches);
