//! Array construction and elementwise transforms in lane-group strides.
//!
//! The constructors (`create`, `init`, `clear`) stop their vector loop one
//! stride early and finish with a scalar tail. The maps instead finish with an
//! overlapping window over the last `N` elements, which avoids padding but
//! requires the input to hold at least one full lane group.

use num::Zero;

use crate::error::{invalid_argument, Result};
use crate::simd::{width, LaneGroup, SimdElement};

/// Returns a new array of `count` copies of `x`.
///
/// Broadcast stores cover strides while `i < count - N`; the final stride (full
/// or partial) is always written element by element.
///
/// # Examples
///
/// ```rust
/// use simdarray::array::create;
///
/// assert_eq!(create(5, 9u32), vec![9, 9, 9, 9, 9]);
/// ```
pub fn create<T: SimdElement>(count: usize, x: T) -> Vec<T> {
    let step = width::<T>();
    log::trace!("create: {count} elements, {step} lanes");

    let mut array = vec![T::zero(); count];

    let lanes = T::Lanes::splat(x);
    let mut i = 0;
    while i + step < count {
        lanes.store_at(&mut array[i..]);
        i += step;
    }

    for slot in &mut array[i..] {
        *slot = x;
    }

    array
}

/// Resets `array[index..length]` to zero.
///
/// `length` is the exclusive end position of the cleared range, not a count of
/// elements after `index`: `clear(a, 2, 5)` clears positions 2, 3 and 4.
/// Vector stores advance from `index` while a full stride still ends before
/// `length`; the rest is cleared element by element.
///
/// # Errors
///
/// Returns [`crate::ArrayError::InvalidArgument`] when `length` exceeds the
/// array length or `index` exceeds `length`. The array is left untouched.
pub fn clear<T: SimdElement>(array: &mut [T], index: usize, length: usize) -> Result<()> {
    if length > array.len() {
        return Err(invalid_argument(
            "length",
            format!(
                "end position {length} is past the end of an array of {} elements",
                array.len()
            ),
        ));
    }
    if index > length {
        return Err(invalid_argument(
            "index",
            format!("start position {index} is past end position {length}"),
        ));
    }

    let step = width::<T>();
    log::trace!("clear: positions {index}..{length}, {step} lanes");

    let zeros = T::Lanes::splat(T::zero());
    let mut i = index;
    while i + step < length {
        zeros.store_at(&mut array[i..]);
        i += step;
    }

    for slot in &mut array[i..length] {
        *slot = T::zero();
    }

    Ok(())
}

/// Returns a new array of `count` elements generated one lane group at a time.
///
/// `f` receives the index of the first element of each stride, in increasing
/// order, and returns the lanes for that stride. Strides are stored while
/// `i < count - N`; then `f` is called exactly once more at the cursor and the
/// remaining `count - i` slots (between 0 and `N`) take its lanes `0, 1, ...`.
///
/// # Examples
///
/// ```rust
/// use simdarray::array::init;
/// use simdarray::simd::{I32Lanes, LaneGroup};
///
/// let ramp: Vec<i32> = init(10, |start| I32Lanes::from_fn(|lane| (start + lane) as i32));
/// assert_eq!(ramp, (0..10).collect::<Vec<i32>>());
/// ```
pub fn init<T, F>(count: usize, mut f: F) -> Vec<T>
where
    T: SimdElement,
    F: FnMut(usize) -> T::Lanes,
{
    let step = width::<T>();
    log::trace!("init: {count} elements, {step} lanes");

    let mut array = vec![T::zero(); count];

    let mut i = 0;
    while i + step < count {
        f(i).store_at(&mut array[i..]);
        i += step;
    }

    let last = f(i);
    for (slot, &lane) in array[i..].iter_mut().zip(last.lanes()) {
        *slot = lane;
    }

    array
}

fn check_window<T: SimdElement>(array: &[T], operation: &str) -> Result<usize> {
    let step = width::<T>();
    if array.len() < step {
        return Err(invalid_argument(
            "array",
            format!(
                "`{operation}` needs at least one full {step}-lane group, got {} elements",
                array.len()
            ),
        ));
    }
    Ok(step)
}

/// Applies `f` to every lane group of `array` and collects the results.
///
/// The trailing `len % N` elements are handled by applying `f` to the last
/// `N` elements of the input (a window that overlaps elements already
/// processed) and keeping only the lanes for the unprocessed tail. `f` must be
/// a pure elementwise function: lane `i` of its output may depend only on lane
/// `i` of its input, never on the lane position or on earlier calls.
///
/// # Errors
///
/// Returns [`crate::ArrayError::InvalidArgument`] when `array` is shorter than
/// one lane group of `T`, or when `T` and `U` lane groups differ in width.
pub fn map<T, U, F>(mut f: F, array: &[T]) -> Result<Vec<U>>
where
    T: SimdElement,
    U: SimdElement,
    F: FnMut(T::Lanes) -> U::Lanes,
{
    let step = check_window(array, "map")?;
    if width::<U>() != step {
        return Err(invalid_argument(
            "f",
            format!(
                "maps {step}-lane groups to {}-lane groups; widths must match",
                width::<U>()
            ),
        ));
    }

    let size = array.len();
    let complete_lanes = size - (size % step);
    let remaining_lanes = size - complete_lanes;

    log::trace!("map: {size} elements, {step} lanes, {remaining_lanes} leftover");

    let mut result = vec![U::zero(); size];

    for i in (0..complete_lanes).step_by(step) {
        f(T::Lanes::from_slice(&array[i..])).store_at(&mut result[i..]);
    }

    if remaining_lanes > 0 {
        let window = f(T::Lanes::from_slice(&array[size - step..]));
        result[complete_lanes..].copy_from_slice(&window.lanes()[step - remaining_lanes..]);
    }

    Ok(result)
}

/// Replaces every lane group of `array` with `f` applied to it.
///
/// Same contract and tail strategy as [`map`]: the final window re-reads the
/// last `N` elements, some of which already hold transformed values, and
/// only the lanes for the untouched tail are written back.
///
/// # Errors
///
/// Returns [`crate::ArrayError::InvalidArgument`] when `array` is shorter than
/// one lane group. The array is left untouched.
pub fn map_in_place<T, F>(mut f: F, array: &mut [T]) -> Result<()>
where
    T: SimdElement,
    F: FnMut(T::Lanes) -> T::Lanes,
{
    let step = check_window(array, "map_in_place")?;

    let size = array.len();
    let complete_lanes = size - (size % step);
    let remaining_lanes = size - complete_lanes;

    log::trace!("map_in_place: {size} elements, {step} lanes, {remaining_lanes} leftover");

    for i in (0..complete_lanes).step_by(step) {
        f(T::Lanes::from_slice(&array[i..])).store_at(&mut array[i..]);
    }

    if remaining_lanes > 0 {
        let window = f(T::Lanes::from_slice(&array[size - step..]));
        array[complete_lanes..].copy_from_slice(&window.lanes()[step - remaining_lanes..]);
    }

    Ok(())
}
