//! Engine access for one-dimensional `ndarray` arrays.
//!
//! The engine needs one contiguous slice, so these adaptors accept any 1-D
//! array or view in standard layout and reject strided or reversed views with
//! [`crate::ArrayError::NonContiguous`] instead of copying them.

use ndarray::{ArrayBase, Data, DataMut, Ix1};

use crate::array::{average, map_in_place, max, min, simple_exists, sum};
use crate::error::{non_contiguous, Result};
use crate::simd::SimdElement;

/// Read-only engine operations on 1-D ndarray arrays and views.
///
/// # Examples
///
/// ```rust
/// use ndarray::Array1;
/// use simdarray::NdArraySimdExt;
///
/// let a = Array1::from_vec(vec![3i32, 1, 4, 1, 5, 9, 2, 6]);
/// assert_eq!(a.simd_max().unwrap(), 9);
///
/// // Every other element: not one contiguous slice.
/// let strided = a.slice(ndarray::s![..;2]);
/// assert!(strided.simd_sum().is_err());
/// ```
pub trait NdArraySimdExt<T: SimdElement> {
    fn simd_sum(&self) -> Result<T>;
    fn simd_average(&self) -> Result<T>;
    fn simd_max(&self) -> Result<T>;
    fn simd_min(&self) -> Result<T>;
    fn simd_contains(&self, x: T) -> Result<bool>;
}

/// In-place engine operations on mutable 1-D ndarray arrays and views.
pub trait NdArraySimdMutExt<T: SimdElement> {
    /// See [`crate::array::map_in_place`].
    fn simd_map_inplace<F>(&mut self, f: F) -> Result<()>
    where
        F: FnMut(T::Lanes) -> T::Lanes;
}

fn contiguous<'a, S, T>(array: &'a ArrayBase<S, Ix1>, operation: &'static str) -> Result<&'a [T]>
where
    S: Data<Elem = T>,
{
    array.as_slice().ok_or_else(|| non_contiguous(operation))
}

impl<S, T> NdArraySimdExt<T> for ArrayBase<S, Ix1>
where
    S: Data<Elem = T>,
    T: SimdElement,
{
    fn simd_sum(&self) -> Result<T> {
        Ok(sum(contiguous(self, "simd_sum")?))
    }

    fn simd_average(&self) -> Result<T> {
        average(contiguous(self, "simd_average")?)
    }

    fn simd_max(&self) -> Result<T> {
        max(contiguous(self, "simd_max")?)
    }

    fn simd_min(&self) -> Result<T> {
        min(contiguous(self, "simd_min")?)
    }

    fn simd_contains(&self, x: T) -> Result<bool> {
        Ok(simple_exists(x, contiguous(self, "simd_contains")?))
    }
}

impl<S, T> NdArraySimdMutExt<T> for ArrayBase<S, Ix1>
where
    S: DataMut<Elem = T>,
    T: SimdElement,
{
    fn simd_map_inplace<F>(&mut self, f: F) -> Result<()>
    where
        F: FnMut(T::Lanes) -> T::Lanes,
    {
        let slice = self
            .as_slice_mut()
            .ok_or_else(|| non_contiguous("simd_map_inplace"))?;
        map_in_place(f, slice)
    }
}
