//! AVX2 kernels for 256-bit lane groups.
//!
//! Compiled only when the build script detects AVX2 on the build host. In that
//! configuration `REGISTER_BYTES` is 32, so `f32` and `i32` lane groups hold
//! exactly eight lanes and map one-to-one onto a `__m256`/`__m256i`.
//!
//! # Architecture Requirements
//!
//! - **CPU Support**: Intel Haswell (2013+) or AMD Excavator (2015+)
//! - **Target Architecture**: x86 or x86_64
//! - **Runtime Detection**: The build system automatically detects AVX2 availability
//!
//! Other element types and the remaining operations use the portable kernels,
//! which LLVM vectorizes for the same register width.

pub mod f32x8;

pub mod i32x8;
