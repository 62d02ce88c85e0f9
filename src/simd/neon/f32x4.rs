//! NEON 4-lane f32 kernels.
//!
//! These replace the portable kernels for `f32` lane groups on AArch64 hosts
//! with Advanced SIMD. Each kernel loads its operands into a `float32x4_t`,
//! runs one packed instruction and stores the result back into the lane array.

#[cfg(target_arch = "aarch64")]
use std::arch::aarch64::*;

/// Number of f32 elements that fit in a NEON 128-bit vector.
pub(crate) const LANE_COUNT: usize = 4;

type Lanes = [f32; LANE_COUNT];

#[inline(always)]
fn store(v: float32x4_t) -> Lanes {
    let mut out = [0.0f32; LANE_COUNT];
    // SAFETY: `out` has room for exactly four f32 values.
    unsafe { vst1q_f32(out.as_mut_ptr(), v) };
    out
}

#[inline(always)]
pub(crate) fn add(a: Lanes, b: Lanes) -> Lanes {
    // SAFETY: both arrays hold four f32 values and NEON is baseline on AArch64.
    let sum = unsafe { vaddq_f32(vld1q_f32(a.as_ptr()), vld1q_f32(b.as_ptr())) };
    store(sum)
}

#[inline(always)]
pub(crate) fn max(a: Lanes, b: Lanes) -> Lanes {
    // SAFETY: see `add`.
    let m = unsafe { vmaxq_f32(vld1q_f32(a.as_ptr()), vld1q_f32(b.as_ptr())) };
    store(m)
}

#[inline(always)]
pub(crate) fn min(a: Lanes, b: Lanes) -> Lanes {
    // SAFETY: see `add`.
    let m = unsafe { vminq_f32(vld1q_f32(a.as_ptr()), vld1q_f32(b.as_ptr())) };
    store(m)
}

#[inline(always)]
pub(crate) fn eq_any(a: Lanes, value: f32) -> bool {
    // SAFETY: see `add`.
    unsafe {
        let mask = vceqq_f32(vld1q_f32(a.as_ptr()), vdupq_n_f32(value));
        vmaxvq_u32(mask) != 0
    }
}
