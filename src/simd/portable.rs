//! Portable lane kernels.
//!
//! Each kernel works on a fixed-size array and is written as a straight
//! per-lane loop, which LLVM turns into packed instructions for whatever
//! register width the build enables. These are used for every element type
//! that has no dedicated intrinsic back-end.

use std::ops::{Add, Mul, Sub};

#[inline(always)]
pub(crate) fn add<T, const W: usize>(a: [T; W], b: [T; W]) -> [T; W]
where
    T: Copy + Add<Output = T>,
{
    std::array::from_fn(|i| a[i] + b[i])
}

#[inline(always)]
pub(crate) fn sub<T, const W: usize>(a: [T; W], b: [T; W]) -> [T; W]
where
    T: Copy + Sub<Output = T>,
{
    std::array::from_fn(|i| a[i] - b[i])
}

#[inline(always)]
pub(crate) fn mul<T, const W: usize>(a: [T; W], b: [T; W]) -> [T; W]
where
    T: Copy + Mul<Output = T>,
{
    std::array::from_fn(|i| a[i] * b[i])
}

#[inline(always)]
pub(crate) fn max<T: Copy + PartialOrd, const W: usize>(a: [T; W], b: [T; W]) -> [T; W] {
    std::array::from_fn(|i| if a[i] > b[i] { a[i] } else { b[i] })
}

#[inline(always)]
pub(crate) fn min<T: Copy + PartialOrd, const W: usize>(a: [T; W], b: [T; W]) -> [T; W] {
    std::array::from_fn(|i| if a[i] < b[i] { a[i] } else { b[i] })
}

#[inline(always)]
pub(crate) fn eq_any<T: Copy + PartialEq, const W: usize>(a: [T; W], value: T) -> bool {
    // Fold without short-circuit so the comparison stays branch-free
    a.iter().fold(false, |found, &lane| found | (lane == value))
}

#[inline(always)]
pub(crate) fn gt_any<T: Copy + PartialOrd, const W: usize>(a: [T; W], b: [T; W]) -> bool {
    a.iter()
        .zip(b.iter())
        .fold(false, |found, (x, y)| found | (x > y))
}

#[inline(always)]
pub(crate) fn lt_any<T: Copy + PartialOrd, const W: usize>(a: [T; W], b: [T; W]) -> bool {
    a.iter()
        .zip(b.iter())
        .fold(false, |found, (x, y)| found | (x < y))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arithmetic_is_lane_local() {
        let a = [1, 2, 3, 4];
        let b = [10, 20, 30, 40];

        assert_eq!(add(a, b), [11, 22, 33, 44]);
        assert_eq!(sub(b, a), [9, 18, 27, 36]);
        assert_eq!(mul(a, b), [10, 40, 90, 160]);
    }

    #[test]
    fn test_max_min_pick_per_lane() {
        let a = [1.0f32, 8.0, -3.0, 4.0];
        let b = [2.0f32, 7.0, -4.0, 4.0];

        assert_eq!(max(a, b), [2.0, 8.0, -3.0, 4.0]);
        assert_eq!(min(a, b), [1.0, 7.0, -4.0, 4.0]);
    }

    #[test]
    fn test_any_comparisons() {
        let a = [1u8, 5, 9];

        assert!(eq_any(a, 9));
        assert!(!eq_any(a, 2));
        assert!(gt_any(a, [1, 4, 10]));
        assert!(!gt_any(a, [1, 5, 9]));
        assert!(lt_any(a, [1, 5, 10]));
        assert!(!lt_any(a, [0, 0, 0]));
    }
}
