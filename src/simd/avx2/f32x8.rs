//! AVX2 8-lane f32 kernels.
//!
//! These replace the portable kernels for `f32` lane groups when the build
//! script detects AVX2. Each kernel loads its operands into a `__m256`, runs a
//! single packed instruction and stores the result back into the lane array.
//!
//! # Architecture Requirements
//!
//! - **CPU Support**: Intel processors with AVX2 support (Haswell and later)
//! - **Vector Width**: 256 bits (8 × f32)

#[cfg(target_arch = "x86")]
use std::arch::x86::*;

#[cfg(target_arch = "x86_64")]
use std::arch::x86_64::*;

/// Number of f32 elements that fit in an AVX2 256-bit vector.
pub(crate) const LANE_COUNT: usize = 8;

type Lanes = [f32; LANE_COUNT];

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
pub(crate) fn eq_any(a: Lanes, value: f32) -> bool {
    // SAFETY: see `add`.
    unsafe { eq_any_avx2(a, value) }
}

/// Stores a packed register into a lane array.
///
/// # Safety
///
/// The CPU must support AVX.
#[inline]
#[target_feature(enable = "avx2")]
unsafe fn store(v: __m256) -> Lanes {
    let mut out = [0.0f32; LANE_COUNT];
    _mm256_storeu_ps(out.as_mut_ptr(), v);
    out
}

#[inline]
#[target_feature(enable = "avx2")]
unsafe fn add_avx2(a: Lanes, b: Lanes) -> Lanes {
    let sum = _mm256_add_ps(_mm256_loadu_ps(a.as_ptr()), _mm256_loadu_ps(b.as_ptr()));
    store(sum)
}

// `_mm256_max_ps` returns the second operand when the comparison is false,
// which matches the portable `if a > b { a } else { b }` for ordered input.
#[inline]
#[target_feature(enable = "avx2")]
unsafe fn max_avx2(a: Lanes, b: Lanes) -> Lanes {
    let m = _mm256_max_ps(_mm256_loadu_ps(a.as_ptr()), _mm256_loadu_ps(b.as_ptr()));
    store(m)
}

#[inline]
#[target_feature(enable = "avx2")]
unsafe fn min_avx2(a: Lanes, b: Lanes) -> Lanes {
    let m = _mm256_min_ps(_mm256_loadu_ps(a.as_ptr()), _mm256_loadu_ps(b.as_ptr()));
    store(m)
}

#[inline]
#[target_feature(enable = "avx2")]
unsafe fn eq_any_avx2(a: Lanes, value: f32) -> bool {
    let mask = _mm256_cmp_ps(_mm256_loadu_ps(a.as_ptr()), _mm256_set1_ps(value), _CMP_EQ_OQ);
    _mm256_movemask_ps(mask) != 0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kernels_match_scalar() {
        let a = [1.0f32, -2.0, 3.5, 4.0, 0.0, 9.0, -7.25, 8.0];
        let b = [0.5f32, -3.0, 3.5, 10.0, -0.0, 1.0, -7.0, 2.0];

        let expected_sum: Vec<f32> = a.iter().zip(b.iter()).map(|(x, y)| x + y).collect();
        assert_eq!(add(a, b).to_vec(), expected_sum);

        assert_eq!(max(a, b), [1.0, -2.0, 3.5, 10.0, -0.0, 9.0, -7.0, 8.0]);
        assert_eq!(min(a, b), [0.5, -3.0, 3.5, 4.0, -0.0, 1.0, -7.25, 2.0]);

        assert!(eq_any(a, -7.25));
        assert!(!eq_any(a, 7.25));
    }
}
