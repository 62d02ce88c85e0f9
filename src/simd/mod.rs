//! The lane group primitive.
//!
//! A lane group is a fixed-width bundle of `N` values of one numeric type,
//! where `N` is the number of such values the widest vector register enabled
//! for this build can hold. The build script discovers that register width;
//! [`width`] reports the resulting `N` for each element type.

include!(concat!(env!("OUT_DIR"), "/register_width.rs"));

#[cfg(all(avx2, any(target_arch = "x86", target_arch = "x86_64")))]
pub mod avx2;

#[cfg(all(neon, target_arch = "aarch64"))]
pub mod neon;

mod dispatch;
pub mod lanes;
mod portable;
pub mod slice;
pub mod traits;

pub use lanes::{
    F32Lanes, F64Lanes, I16Lanes, I32Lanes, I64Lanes, I8Lanes, U16Lanes, U32Lanes, U64Lanes,
    U8Lanes,
};
pub use traits::{width, LaneGroup, SimdElement};
