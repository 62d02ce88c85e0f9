use crate::array::{average, max, min, simple_exists, sum};
use crate::error::Result;
use crate::simd::slice::{scalar_contains, scalar_max, scalar_min, scalar_sum};
use crate::simd::SimdElement;

/// Method-call access to the engine for slices, with scalar twins.
///
/// The `simd_*` methods run the lane-group implementations; the `scalar_*`
/// methods compute the same values one element at a time, which is handy as a
/// baseline.
///
/// # Examples
///
/// ```rust
/// use simdarray::SimdSliceExt;
///
/// let data = vec![3.0f64, 1.0, 4.0, 1.0, 5.0, 9.0, 2.0, 6.0];
/// assert_eq!(data.simd_sum(), data.scalar_sum());
/// assert_eq!(data.simd_max().unwrap(), 9.0);
/// assert!(data.simd_contains(5.0));
/// ```
pub trait SimdSliceExt<T> {
    fn simd_sum(&self) -> T;
    fn simd_average(&self) -> Result<T>;
    fn simd_max(&self) -> Result<T>;
    fn simd_min(&self) -> Result<T>;
    fn simd_contains(&self, x: T) -> bool;

    fn scalar_sum(&self) -> T;
    fn scalar_max(&self) -> Result<T>;
    fn scalar_min(&self) -> Result<T>;
    fn scalar_contains(&self, x: T) -> bool;
}

impl<T: SimdElement> SimdSliceExt<T> for [T] {
    #[inline(always)]
    fn simd_sum(&self) -> T {
        sum(self)
    }

    #[inline(always)]
    fn simd_average(&self) -> Result<T> {
        average(self)
    }

    #[inline(always)]
    fn simd_max(&self) -> Result<T> {
        max(self)
    }

    #[inline(always)]
    fn simd_min(&self) -> Result<T> {
        min(self)
    }

    #[inline(always)]
    fn simd_contains(&self, x: T) -> bool {
        simple_exists(x, self)
    }

    #[inline(always)]
    fn scalar_sum(&self) -> T {
        scalar_sum(self)
    }

    #[inline(always)]
    fn scalar_max(&self) -> Result<T> {
        scalar_max(self)
    }

    #[inline(always)]
    fn scalar_min(&self) -> Result<T> {
        scalar_min(self)
    }

    #[inline(always)]
    fn scalar_contains(&self, x: T) -> bool {
        scalar_contains(self, x)
    }
}
