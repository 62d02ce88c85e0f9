//! Construction and repair of the lane group that covers an array's tail.
//!
//! An array of length `len` splits into `len / N` full strides and a leftover
//! of `len % N` elements. The helpers here pad the leftover up to a full lane
//! group, and undo the effect of the padding on an accumulator afterwards.

use crate::simd::{LaneGroup, SimdElement};

/// Builds a lane group from `array[start..]` padded with `filler`.
///
/// Lanes `0..array.len() - start` hold `array[start..]` in order; the
/// remaining lanes hold `filler`. No element outside `array` is read.
///
/// Callers guarantee `start <= array.len() <= start + N`.
#[inline(always)]
pub fn build_leftover<T: SimdElement>(array: &[T], start: usize, filler: T) -> T::Lanes {
    debug_assert!(start <= array.len(), "leftover start past the end of the array");
    debug_assert!(
        array.len() - start <= T::Lanes::LANES,
        "leftover longer than one lane group"
    );

    let tail = &array[start..];
    T::Lanes::from_fn(|lane| tail.get(lane).copied().unwrap_or(filler))
}

/// Keeps the first `valid` lanes of `computed` and takes the rest from `fallback`.
///
/// Used after one padded accumulation step: lanes fed by padding revert to
/// the state they had before the step, so padding never reaches the result.
#[inline(always)]
pub fn merge_leftover<L: LaneGroup>(valid: usize, computed: L, fallback: L) -> L {
    L::from_fn(|lane| {
        if lane < valid {
            computed.lane(lane)
        } else {
            fallback.lane(lane)
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::simd::{width, I32Lanes};

    #[test]
    fn test_build_leftover_pads_after_real_elements() {
        let n = width::<i32>();
        if n < 2 {
            return;
        }
        let data: Vec<i32> = (1..=(n as i32 + 2)).collect();

        // Two real elements left after the first full stride.
        let lanes = build_leftover(&data, n, -1);
        assert_eq!(lanes.lane(0), n as i32 + 1);
        assert_eq!(lanes.lane(1), n as i32 + 2);
        for lane in 2..n {
            assert_eq!(lanes.lane(lane), -1);
        }
    }

    #[test]
    fn test_build_leftover_with_no_remaining_elements_is_all_filler() {
        let data = [3.0f64, 4.0];
        let lanes = build_leftover(&data, 2, 9.5);
        assert!(lanes.lanes().iter().all(|&x| x == 9.5));
    }

    #[test]
    fn test_build_leftover_exact_fit() {
        let n = width::<u8>();
        let data: Vec<u8> = (0..n as u8).collect();
        let lanes = build_leftover(&data, 0, 255);
        assert_eq!(lanes.lanes(), data.as_slice());
    }

    #[test]
    fn test_merge_leftover_splits_at_valid_count() {
        let n = width::<i32>();
        let computed = I32Lanes::splat(1);
        let fallback = I32Lanes::splat(2);

        for valid in 0..=n {
            let merged = merge_leftover(valid, computed, fallback);
            for lane in 0..n {
                let expected = if lane < valid { 1 } else { 2 };
                assert_eq!(merged.lane(lane), expected, "valid={valid} lane={lane}");
            }
        }
    }
}
