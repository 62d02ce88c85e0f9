//! Searches and order statistics.
//!
//! Predicates see whole lane groups. When the array does not end on a stride
//! boundary, the last lane group is padded by repeating the array's final
//! element, so the predicate only ever observes values the array really holds.

use crate::array::leftover::build_leftover;
use crate::error::{invalid_argument, Result};
use crate::simd::{width, LaneGroup, SimdElement};

/// Returns `true` if `f` holds for some lane group of `array`.
///
/// Lane groups are tested in increasing index order and the scan stops at the
/// first match. A trailing partial stride is padded by repeating the last
/// element, so `f` must not become true merely because a value it already saw
/// appears more than once. An empty array contains no match.
///
/// # Examples
///
/// ```rust
/// use simdarray::array::exists;
/// use simdarray::simd::{F32Lanes, LaneGroup};
///
/// let data = [0.5f32, 1.5, -2.0, 3.0, 0.25];
/// assert!(exists(|v: F32Lanes| v.lt_any(F32Lanes::splat(0.0)), &data));
/// assert!(!exists(|v: F32Lanes| v.gt_any(F32Lanes::splat(3.0)), &data));
/// ```
pub fn exists<T, F>(mut f: F, array: &[T]) -> bool
where
    T: SimdElement,
    F: FnMut(T::Lanes) -> bool,
{
    let size = array.len();
    let step = width::<T>();
    let complete_lanes = size - (size % step);

    for i in (0..complete_lanes).step_by(step) {
        if f(T::Lanes::from_slice(&array[i..])) {
            return true;
        }
    }

    match array.last() {
        Some(&last) if complete_lanes < size => f(build_leftover(array, complete_lanes, last)),
        _ => false,
    }
}

/// Returns `true` if `f` holds for every lane group of `array`.
///
/// Dual of [`exists`], with the same scan order, early exit on the first
/// failing lane group and repeat-last padding. An empty array satisfies any
/// predicate.
pub fn forall<T, F>(mut f: F, array: &[T]) -> bool
where
    T: SimdElement,
    F: FnMut(T::Lanes) -> bool,
{
    !exists(|lanes| !f(lanes), array)
}

/// Returns `true` if some element of `array` equals `x`.
///
/// # Examples
///
/// ```rust
/// use simdarray::array::simple_exists;
///
/// let data = [3, 1, 4, 1, 5, 9, 2, 6];
/// assert!(simple_exists(5, &data));
/// assert!(!simple_exists(7, &data));
/// ```
#[inline]
pub fn simple_exists<T: SimdElement>(x: T, array: &[T]) -> bool {
    exists(|lanes: T::Lanes| lanes.eq_any(x), array)
}

/// Largest element of `array`.
///
/// # Errors
///
/// Returns [`crate::ArrayError::InvalidArgument`] when `array` is empty.
pub fn max<T: SimdElement>(array: &[T]) -> Result<T> {
    extremum(array, "max", |a, b| a.max(b), |candidate, best| candidate > best)
}

/// Smallest element of `array`.
///
/// # Errors
///
/// Returns [`crate::ArrayError::InvalidArgument`] when `array` is empty.
pub fn min<T: SimdElement>(array: &[T]) -> Result<T> {
    extremum(array, "min", |a, b| a.min(b), |candidate, best| candidate < best)
}

// Single pass: a running lane group over the strides that fit while
// `i < len - N`, reduced into the scalar result, then a scalar sweep of
// whatever is left (up to one full stride plus the leftover).
fn extremum<T, V, B>(array: &[T], operation: &str, mut combine: V, better: B) -> Result<T>
where
    T: SimdElement,
    V: FnMut(T::Lanes, T::Lanes) -> T::Lanes,
    B: Fn(T, T) -> bool,
{
    let Some(&first) = array.first() else {
        return Err(invalid_argument(
            "array",
            format!("`{operation}` of an empty array is undefined"),
        ));
    };

    let size = array.len();
    let step = width::<T>();

    let mut result = first;
    let mut i = 0;

    if size >= step {
        let mut running = T::Lanes::from_slice(array);
        i = step;
        while i + step < size {
            running = combine(running, T::Lanes::from_slice(&array[i..]));
            i += step;
        }

        for &lane in running.lanes() {
            if better(lane, result) {
                result = lane;
            }
        }
    }

    for &x in &array[i..] {
        if better(x, result) {
            result = x;
        }
    }

    Ok(result)
}
