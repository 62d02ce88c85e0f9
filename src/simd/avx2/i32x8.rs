//! AVX2 8-lane i32 kernels.
//!
//! Integer counterpart of [`super::f32x8`]. Addition wraps on overflow, as
//! `_mm256_add_epi32` does.

#[cfg(target_arch = "x86")]
use std::arch::x86::*;

#[cfg(target_arch = "x86_64")]
use std::arch::x86_64::*;

/// Number of i32 elements that fit in an AVX2 256-bit vector.
pub(crate) const LANE_COUNT: usize = 8;

type Lanes = [i32; LANE_COUNT];

#[inline(always)]
pub(crate) fn add(a: Lanes, b: Lanes) -> Lanes {
    // SAFETY: this module is only compiled when the build host reports AVX2.
    unsafe { add_avx2(a, b) }
}

#[inline(always)]
pub(crate) fn max(a: Lanes, b: Lanes) -> Lanes {
    // SAFETY: see `add`.
    unsafe { max_avx2(a, b) }
}

#[inline(always)]
pub(crate) fn min(a: Lanes, b: Lanes) -> Lanes {
    // SAFETY: see `add`.
    unsafe { min_avx2(a, b) }
}

#[inline(always)]
pub(crate) fn eq_any(a: Lanes, value: i32) -> bool {
    // SAFETY: see `add`.
    unsafe { eq_any_avx2(a, value) }
}

#[inline]
#[target_feature(enable = "avx2")]
unsafe fn load(a: &Lanes) -> __m256i {
    _mm256_loadu_si256(a.as_ptr() as *const __m256i)
}

#[inline]
#[target_feature(enable = "avx2")]
unsafe fn store(v: __m256i) -> Lanes {
    let mut out = [0i32; LANE_COUNT];
    _mm256_storeu_si256(out.as_mut_ptr() as *mut __m256i, v);
    out
}

#[inline]
#[target_feature(enable = "avx2")]
unsafe fn add_avx2(a: Lanes, b: Lanes) -> Lanes {
    store(_mm256_add_epi32(load(&a), load(&b)))
}

#[inline]
#[target_feature(enable = "avx2")]
unsafe fn max_avx2(a: Lanes, b: Lanes) -> Lanes {
    store(_mm256_max_epi32(load(&a), load(&b)))
}

#[inline]
#[target_feature(enable = "avx2")]
unsafe fn min_avx2(a: Lanes, b: Lanes) -> Lanes {
    store(_mm256_min_epi32(load(&a), load(&b)))
}

#[inline]
#[target_feature(enable = "avx2")]
unsafe fn eq_any_avx2(a: Lanes, value: i32) -> bool {
    let mask = _mm256_cmpeq_epi32(load(&a), _mm256_set1_epi32(value));
    _mm256_movemask_epi8(mask) != 0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kernels_match_scalar() {
        let a = [1, -2, 3, i32::MIN, 0, 9, -7, 8];
        let b = [5, -3, 3, 10, 0, 1, -6, i32::MAX];

        assert_eq!(add([1; 8], [2; 8]), [3; 8]);
        assert_eq!(max(a, b), [5, -2, 3, 10, 0, 9, -6, i32::MAX]);
        assert_eq!(min(a, b), [1, -3, 3, i32::MIN, 0, 1, -7, 8]);

        assert!(eq_any(a, i32::MIN));
        assert!(!eq_any(a, 4));
    }
}
