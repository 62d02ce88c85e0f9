//! NEON 4-lane i32 kernels.
//!
//! Integer counterpart of [`super::f32x4`]. Addition wraps on overflow, as
//! `vaddq_s32` does.

#[cfg(target_arch = "aarch64")]
use std::arch::aarch64::*;

/// Number of i32 elements that fit in a NEON 128-bit vector.
pub(crate) const LANE_COUNT: usize = 4;

type Lanes = [i32; LANE_COUNT];

#[inline(always)]
fn store(v: int32x4_t) -> Lanes {
    let mut out = [0i32; LANE_COUNT];
    // SAFETY: `out` has room for exactly four i32 values.
    unsafe { vst1q_s32(out.as_mut_ptr(), v) };
    out
}

#[inline(always)]
pub(crate) fn add(a: Lanes, b: Lanes) -> Lanes {
    // SAFETY: both arrays hold four i32 values and NEON is baseline on AArch64.
    store(unsafe { vaddq_s32(vld1q_s32(a.as_ptr()), vld1q_s32(b.as_ptr())) })
}

#[inline(always)]
pub(crate) fn max(a: Lanes, b: Lanes) -> Lanes {
    // SAFETY: see `add`.
    store(unsafe { vmaxq_s32(vld1q_s32(a.as_ptr()), vld1q_s32(b.as_ptr())) })
}

#[inline(always)]
pub(crate) fn min(a: Lanes, b: Lanes) -> Lanes {
    // SAFETY: see `add`.
    store(unsafe { vminq_s32(vld1q_s32(a.as_ptr()), vld1q_s32(b.as_ptr())) })
}

#[inline(always)]
pub(crate) fn eq_any(a: Lanes, value: i32) -> bool {
    // SAFETY: see `add`.
    unsafe {
        let mask = vceqq_s32(vld1q_s32(a.as_ptr()), vdupq_n_s32(value));
        vmaxvq_u32(mask) != 0
    }
}
