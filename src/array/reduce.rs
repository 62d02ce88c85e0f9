//! Reductions: fold an array into one value through lane groups.
//!
//! # Algorithm
//!
//! 1. **Strided accumulation**: a lane group of partial states advances one
//!    full stride of `N` elements at a time.
//! 2. **Leftover step**: the trailing `len % N` elements are padded up to a
//!    lane group, accumulated once more, and the padded lanes are restored to
//!    their previous state.
//! 3. **Lane combination**: the `N` partial states are combined left to right,
//!    lane 0 first, into one scalar.

use num::{NumCast, Zero};

use crate::array::leftover::{build_leftover, merge_leftover};
use crate::error::{invalid_argument, Result};
use crate::simd::{width, LaneGroup, SimdElement};

/// Folds `array` into a single state.
///
/// `f` advances a lane group of states by one lane group of input. It must
/// treat lanes independently: lane `i` of its result may depend only on lane
/// `i` of its arguments. `combiner` then merges the per-lane states in lane
/// order `0..N`, starting from `acc`. It must be associative; it need not be
/// commutative.
///
/// `acc` seeds every lane as well as the final combination, so it should be
/// an identity of `combiner` (zero for addition, one for multiplication).
///
/// The leftover is padded with `T::zero()` for the one extra call to `f`;
/// lanes fed by padding are reset to their pre-leftover state, so `f` never
/// needs to tolerate the padding value.
///
/// # Examples
///
/// ```rust
/// use simdarray::array::fold;
///
/// let data = [1i64, 2, 3, 4, 5];
/// let sum_of_squares = fold(|acc, v| acc + v * v, |a, b| a + b, 0i64, &data);
/// assert_eq!(sum_of_squares, 55);
/// ```
pub fn fold<T, S, F, C>(mut f: F, mut combiner: C, acc: S, array: &[T]) -> S
where
    T: SimdElement,
    S: SimdElement,
    F: FnMut(S::Lanes, T::Lanes) -> S::Lanes,
    C: FnMut(S, S) -> S,
{
    let size = array.len();
    let step = width::<T>();

    let complete_lanes = size - (size % step);
    let remaining_lanes = size - complete_lanes;

    log::trace!(
        "fold: {size} elements, {step} lanes, {} full strides, {remaining_lanes} leftover",
        complete_lanes / step
    );

    let mut state = S::Lanes::splat(acc);

    for i in (0..complete_lanes).step_by(step) {
        state = f(state, T::Lanes::from_slice(&array[i..]));
    }

    if remaining_lanes > 0 {
        let leftover = build_leftover(array, complete_lanes, T::zero());
        let leftover_state = f(state, leftover);
        state = merge_leftover(remaining_lanes, leftover_state, state);
    }

    state
        .lanes()
        .iter()
        .fold(acc, |result, &lane| combiner(result, lane))
}

/// [`fold`] seeded with `S::zero()`.
///
/// This is only equivalent to an identity-seeded fold when zero is the
/// identity of `combiner`. For a multiplicative reduction the zero seed makes
/// the result zero; use [`fold`] with an explicit seed instead.
#[inline]
pub fn reduce<T, S, F, C>(f: F, combiner: C, array: &[T]) -> S
where
    T: SimdElement,
    S: SimdElement,
    F: FnMut(S::Lanes, T::Lanes) -> S::Lanes,
    C: FnMut(S, S) -> S,
{
    fold(f, combiner, S::zero(), array)
}

/// Sums every element of `array`. An empty array sums to zero.
///
/// Full strides are added lane-wise; the leftover is added one element at a
/// time, since zero padding would contribute nothing anyway.
pub fn sum<T: SimdElement>(array: &[T]) -> T {
    let size = array.len();
    let step = width::<T>();

    let complete_lanes = size - (size % step);

    let mut lanes = T::Lanes::splat(T::zero());
    for i in (0..complete_lanes).step_by(step) {
        lanes = lanes + T::Lanes::from_slice(&array[i..]);
    }

    let mut total = T::zero();
    for &x in &array[complete_lanes..] {
        total = total + x;
    }

    for &lane in lanes.lanes() {
        total = total + lane;
    }

    total
}

/// Arithmetic mean of `array`, dividing with `T`'s own division.
///
/// Integer element types therefore truncate toward zero.
///
/// # Errors
///
/// Returns [`crate::ArrayError::InvalidArgument`] when `array` is empty, or
/// when its length cannot be represented as a `T` (e.g. 300 elements of `u8`).
pub fn average<T: SimdElement>(array: &[T]) -> Result<T> {
    if array.is_empty() {
        return Err(invalid_argument("array", "cannot average an empty array"));
    }

    let count = <T as NumCast>::from(array.len()).ok_or_else(|| {
        invalid_argument(
            "array",
            format!(
                "length {} is not representable in the element type",
                array.len()
            ),
        )
    })?;

    Ok(sum(array) / count)
}
