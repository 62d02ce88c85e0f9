use std::fmt::Debug;
use std::ops::{Add, Mul, Sub};

use num::{Num, NumCast};

/// A fixed-width group of `LANES` values of `Elem` operated on elementwise.
///
/// `LANES` is the hardware width for `Elem` on the build target and never changes
/// for the lifetime of the program. Every elementwise operation is lane-local:
/// lane `i` of the result depends only on lane `i` of the operands.
pub trait LaneGroup:
    Copy + Debug + PartialEq + Add<Output = Self> + Sub<Output = Self> + Mul<Output = Self>
{
    /// Element type held in every lane.
    type Elem: Copy;

    /// Number of lanes in the group.
    const LANES: usize;

    /// Broadcasts `value` to every lane.
    fn splat(value: Self::Elem) -> Self;

    /// Copies the first `LANES` elements of `slice` into a new group.
    ///
    /// # Panics
    ///
    /// Panics if `slice` holds fewer than `LANES` elements.
    fn from_slice(slice: &[Self::Elem]) -> Self;

    /// Builds a group whose lane `i` is `f(i)`, calling `f` for `i` in `0..LANES`
    /// in increasing order.
    fn from_fn<F: FnMut(usize) -> Self::Elem>(f: F) -> Self;

    /// Copies every lane into the first `LANES` slots of `out`.
    ///
    /// # Panics
    ///
    /// Panics if `out` holds fewer than `LANES` elements.
    fn store_at(&self, out: &mut [Self::Elem]);

    /// Lanes as a slice, lane 0 first.
    fn lanes(&self) -> &[Self::Elem];

    /// Value of lane `index`.
    #[inline(always)]
    fn lane(&self, index: usize) -> Self::Elem {
        self.lanes()[index]
    }

    /// Lane-wise maximum.
    fn max(self, rhs: Self) -> Self;

    /// Lane-wise minimum.
    fn min(self, rhs: Self) -> Self;

    /// `true` when at least one lane equals `value`.
    fn eq_any(&self, value: Self::Elem) -> bool;

    /// `true` when at least one lane of `self` is greater than the same lane of `rhs`.
    fn gt_any(&self, rhs: Self) -> bool;

    /// `true` when at least one lane of `self` is less than the same lane of `rhs`.
    fn lt_any(&self, rhs: Self) -> bool;
}

/// Numeric element types the engine can process.
///
/// The associated `Lanes` type is the lane group the build target provides for
/// `Self`; its width is reported by [`width`].
pub trait SimdElement: Num + NumCast + PartialOrd + Copy + Debug + 'static {
    /// Lane group holding `width::<Self>()` values of `Self`.
    type Lanes: LaneGroup<Elem = Self>;
}

/// Number of lanes the build target packs into one register for `T`.
#[inline(always)]
pub fn width<T: SimdElement>() -> usize {
    <T::Lanes as LaneGroup>::LANES
}
