//! Concrete lane group types, one per supported element type.
//!
//! Every type wraps a plain array sized from [`REGISTER_BYTES`], so the lane
//! count of, say, [`F32Lanes`] is 8 on an AVX2 build, 16 with AVX-512 and 4
//! on NEON or the portable fallback.

use std::ops::{Add, Mul, Sub};

use super::dispatch::{f32_kernels, i32_kernels, portable_kernels};
use super::portable;
use super::traits::{LaneGroup, SimdElement};
use super::REGISTER_BYTES;

/// Number of `size`-byte elements one register holds, never fewer than one.
pub const fn lanes_for(size: usize) -> usize {
    if REGISTER_BYTES > size {
        REGISTER_BYTES / size
    } else {
        1
    }
}

macro_rules! lane_group {
    ($(#[$meta:meta])* $name:ident, $elem:ty, $kernels:ident) => {
        $(#[$meta])*
        #[derive(Copy, Clone, Debug, PartialEq)]
        #[repr(C)]
        pub struct $name([$elem; lanes_for(std::mem::size_of::<$elem>())]);

        impl LaneGroup for $name {
            type Elem = $elem;

            const LANES: usize = lanes_for(std::mem::size_of::<$elem>());

            #[inline(always)]
            fn splat(value: $elem) -> Self {
                Self(std::array::from_fn(|_| value))
            }

            #[inline(always)]
            fn from_slice(slice: &[$elem]) -> Self {
                let mut lanes = [0 as $elem; lanes_for(std::mem::size_of::<$elem>())];
                lanes.copy_from_slice(&slice[..Self::LANES]);
                Self(lanes)
            }

            #[inline(always)]
            fn from_fn<F: FnMut(usize) -> $elem>(f: F) -> Self {
                Self(std::array::from_fn(f))
            }

            #[inline(always)]
            fn store_at(&self, out: &mut [$elem]) {
                out[..Self::LANES].copy_from_slice(&self.0);
            }

            #[inline(always)]
            fn lanes(&self) -> &[$elem] {
                &self.0
            }

            #[inline(always)]
            fn max(self, rhs: Self) -> Self {
                Self($kernels::max(self.0, rhs.0))
            }

            #[inline(always)]
            fn min(self, rhs: Self) -> Self {
                Self($kernels::min(self.0, rhs.0))
            }

            #[inline(always)]
            fn eq_any(&self, value: $elem) -> bool {
                $kernels::eq_any(self.0, value)
            }

            #[inline(always)]
            fn gt_any(&self, rhs: Self) -> bool {
                portable::gt_any(self.0, rhs.0)
            }

            #[inline(always)]
            fn lt_any(&self, rhs: Self) -> bool {
                portable::lt_any(self.0, rhs.0)
            }
        }

        impl Add for $name {
            type Output = Self;

            #[inline(always)]
            fn add(self, rhs: Self) -> Self::Output {
                Self($kernels::add(self.0, rhs.0))
            }
        }

        impl Sub for $name {
            type Output = Self;

            #[inline(always)]
            fn sub(self, rhs: Self) -> Self::Output {
                Self(portable::sub(self.0, rhs.0))
            }
        }

        impl Mul for $name {
            type Output = Self;

            #[inline(always)]
            fn mul(self, rhs: Self) -> Self::Output {
                Self(portable::mul(self.0, rhs.0))
            }
        }

        impl SimdElement for $elem {
            type Lanes = $name;
        }
    };
}

lane_group!(
    /// Lane group of `i8` values.
    I8Lanes, i8, portable_kernels
);
lane_group!(
    /// Lane group of `i16` values.
    I16Lanes, i16, portable_kernels
);
lane_group!(
    /// Lane group of `i32` values, backed by AVX2 or NEON kernels when available.
    I32Lanes, i32, i32_kernels
);
lane_group!(
    /// Lane group of `i64` values.
    I64Lanes, i64, portable_kernels
);
lane_group!(
    /// Lane group of `u8` values.
    U8Lanes, u8, portable_kernels
);
lane_group!(
    /// Lane group of `u16` values.
    U16Lanes, u16, portable_kernels
);
lane_group!(
    /// Lane group of `u32` values.
    U32Lanes, u32, portable_kernels
);
lane_group!(
    /// Lane group of `u64` values.
    U64Lanes, u64, portable_kernels
);
lane_group!(
    /// Lane group of `f32` values, backed by AVX2 or NEON kernels when available.
    F32Lanes, f32, f32_kernels
);
lane_group!(
    /// Lane group of `f64` values.
    F64Lanes, f64, portable_kernels
);
