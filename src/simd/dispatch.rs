//! Per-type kernel selection.
//!
//! Each module below re-exports the `add`, `max`, `min` and `eq_any` kernels
//! one lane group type uses. Types with an intrinsic back-end on the build
//! target pick it here; everything else gets the portable kernels.

pub(crate) mod portable_kernels {
    pub(crate) use crate::simd::portable::{add, eq_any, max, min};
}

pub(crate) mod f32_kernels {
    #[cfg(all(avx2, any(target_arch = "x86", target_arch = "x86_64")))]
    pub(crate) use crate::simd::avx2::f32x8::{add, eq_any, max, min};

    #[cfg(all(neon, target_arch = "aarch64"))]
    pub(crate) use crate::simd::neon::f32x4::{add, eq_any, max, min};

    #[cfg(not(any(
        all(avx2, any(target_arch = "x86", target_arch = "x86_64")),
        all(neon, target_arch = "aarch64")
    )))]
    pub(crate) use crate::simd::portable::{add, eq_any, max, min};
}

pub(crate) mod i32_kernels {
    #[cfg(all(avx2, any(target_arch = "x86", target_arch = "x86_64")))]
    pub(crate) use crate::simd::avx2::i32x8::{add, eq_any, max, min};

    #[cfg(all(neon, target_arch = "aarch64"))]
    pub(crate) use crate::simd::neon::i32x4::{add, eq_any, max, min};

    #[cfg(not(any(
        all(avx2, any(target_arch = "x86", target_arch = "x86_64")),
        all(neon, target_arch = "aarch64")
    )))]
    pub(crate) use crate::simd::portable::{add, eq_any, max, min};
}
