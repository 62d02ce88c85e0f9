//! Search tests: `max`, `min`, `exists`, `forall` and `simple_exists`.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use simdarray::array::{exists, forall, max, min, simple_exists};
use simdarray::simd::{F32Lanes, F64Lanes, I32Lanes, LaneGroup, U8Lanes};
use simdarray::{width, ArrayError, SimdSliceExt};

#[test]
fn test_reference_scenario() {
    let data = [3, 1, 4, 1, 5, 9, 2, 6];

    assert_eq!(max(&data).unwrap(), 9);
    assert_eq!(min(&data).unwrap(), 1);
    assert!(simple_exists(5, &data));
    assert!(!simple_exists(7, &data));
}

#[test]
fn test_max_min_match_scalar_for_every_length() {
    let mut rng = StdRng::seed_from_u64(12345);
    let n = width::<i32>();

    for len in 1..=4 * n + 3 {
        let data: Vec<i32> = (0..len).map(|_| rng.random_range(-10_000..10_000)).collect();

        assert_eq!(max(&data).unwrap(), *data.iter().max().unwrap(), "length {len}");
        assert_eq!(min(&data).unwrap(), *data.iter().min().unwrap(), "length {len}");
    }
}

#[test]
fn test_max_min_find_extremes_in_every_position() {
    // The extreme value sits in each position in turn, including the last
    // full stride and the leftover that the scalar sweep covers.
    let n = width::<f32>();
    let len = 3 * n + 2;

    for pos in 0..len {
        let mut data = vec![0.0f32; len];
        data[pos] = 100.0;
        assert_eq!(max(&data).unwrap(), 100.0, "max at {pos}");

        data[pos] = -100.0;
        assert_eq!(min(&data).unwrap(), -100.0, "min at {pos}");
    }
}

#[test]
fn test_max_min_small_unsigned_types() {
    let data: Vec<u8> = (0..=255u8).rev().collect();

    assert_eq!(max(&data).unwrap(), 255);
    assert_eq!(min(&data).unwrap(), 0);
    assert_eq!(max(&data[100..101]).unwrap(), 155);
}

#[test]
fn test_max_min_reject_empty_input() {
    assert!(matches!(
        max::<f64>(&[]),
        Err(ArrayError::InvalidArgument { name: "array", .. })
    ));
    assert!(matches!(
        min::<u16>(&[]),
        Err(ArrayError::InvalidArgument { name: "array", .. })
    ));
}

#[test]
fn test_simple_exists_finds_every_present_value() {
    let n = width::<i32>();

    for len in 1..=3 * n + 2 {
        let data: Vec<i32> = (0..len as i32).map(|x| x * 2).collect();

        for &x in &data {
            assert!(simple_exists(x, &data), "{x} in length {len}");
        }
        assert!(!simple_exists(1, &data), "length {len}");
        assert!(!simple_exists(len as i32 * 2, &data), "length {len}");
    }
}

#[test]
fn test_simple_exists_short_and_empty_arrays() {
    assert!(!simple_exists(0u8, &[]));
    assert!(simple_exists(7u8, &[7]));
    assert!(!simple_exists(0u8, &[7]));

    // Shorter than one lane group: the whole array is the padded leftover.
    let short: Vec<u8> = (1..width::<u8>() as u8).collect();
    assert!(!simple_exists(0, &short));
    if let Some(&last) = short.last() {
        assert!(simple_exists(last, &short));
    }
}

#[test]
fn test_exists_sees_only_real_values() {
    let n = width::<i32>();

    // Repeat-last padding means a leftover of positive values never shows a zero.
    for len in 1..=3 * n + 1 {
        let data: Vec<i32> = (1..=len as i32).collect();
        assert!(
            !exists(|v: I32Lanes| v.eq_any(0), &data),
            "length {len}"
        );
    }
}

#[test]
fn test_exists_stops_at_first_match() {
    let n = width::<f64>();
    let data: Vec<f64> = (0..4 * n + 1).map(|x| x as f64).collect();

    let mut calls = 0;
    let found = exists(
        |v: F64Lanes| {
            calls += 1;
            v.gt_any(F64Lanes::splat(n as f64 - 0.5))
        },
        &data,
    );

    assert!(found);
    assert_eq!(calls, 2);
}

#[test]
fn test_exists_empty_array_is_false() {
    let mut called = false;
    let found = exists::<f32, _>(
        |_: F32Lanes| {
            called = true;
            true
        },
        &[],
    );

    assert!(!found);
    assert!(!called);
}

#[test]
fn test_forall_matches_iterator_all() {
    let mut rng = StdRng::seed_from_u64(7);
    let n = width::<u8>();

    for len in 0..=2 * n + 5 {
        let data: Vec<u8> = (0..len).map(|_| rng.random_range(1..=200)).collect();
        let limit = U8Lanes::splat(150);

        assert_eq!(
            forall(|v: U8Lanes| !v.gt_any(limit), &data),
            data.iter().all(|&x| x <= 150),
            "length {len}"
        );
    }
}

#[test]
fn test_forall_empty_array_is_true() {
    assert!(forall::<i32, _>(|_: I32Lanes| false, &[]));
}

#[test]
fn test_slice_ext_simd_matches_scalar() {
    let mut rng = StdRng::seed_from_u64(42);
    let data: Vec<i64> = (0..1_001).map(|_| rng.random_range(-1_000..1_000)).collect();

    assert_eq!(data.simd_sum(), data.scalar_sum());
    assert_eq!(data.simd_max().unwrap(), data.scalar_max().unwrap());
    assert_eq!(data.simd_min().unwrap(), data.scalar_min().unwrap());
    assert_eq!(data.simd_contains(data[500]), data.scalar_contains(data[500]));
    assert!(!data.simd_contains(5_000));

    let empty: [f32; 0] = [];
    assert!(empty.simd_max().is_err());
    assert!(empty.scalar_max().is_err());
}
