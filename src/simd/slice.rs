//! Scalar reference implementations.
//!
//! Straight element-at-a-time loops with the same results as the vectorized
//! operations. They back the `scalar_*` methods of
//! [`crate::array::SimdSliceExt`] and serve as the baseline in tests and
//! benchmarks.

use num::Zero;

use crate::error::{invalid_argument, Result};
use crate::simd::SimdElement;

#[inline(always)]
pub fn scalar_sum<T: SimdElement>(a: &[T]) -> T {
    a.iter().fold(T::zero(), |total, &x| total + x)
}

#[inline(always)]
pub fn scalar_max<T: SimdElement>(a: &[T]) -> Result<T> {
    let (&first, rest) = a
        .split_first()
        .ok_or_else(|| invalid_argument("array", "`max` of an empty array is undefined"))?;

    Ok(rest
        .iter()
        .fold(first, |best, &x| if x > best { x } else { best }))
}

#[inline(always)]
pub fn scalar_min<T: SimdElement>(a: &[T]) -> Result<T> {
    let (&first, rest) = a
        .split_first()
        .ok_or_else(|| invalid_argument("array", "`min` of an empty array is undefined"))?;

    Ok(rest
        .iter()
        .fold(first, |best, &x| if x < best { x } else { best }))
}

#[inline(always)]
pub fn scalar_contains<T: SimdElement>(a: &[T], x: T) -> bool {
    a.iter().any(|&value| value == x)
}
