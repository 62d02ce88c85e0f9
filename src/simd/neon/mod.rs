//! ARM NEON kernels for 128-bit lane groups.
//!
//! Compiled only when the build script detects Advanced SIMD on an AArch64
//! host. `REGISTER_BYTES` is then 16, so `f32` and `i32` lane groups hold
//! exactly four lanes and map one-to-one onto `float32x4_t`/`int32x4_t`.
//!
//! # Platform Support
//!
//! - **Apple Silicon**: M1, M2, M3 processors (macOS, iOS)
//! - **AWS Graviton**: Graviton2, Graviton3 processors
//! - **Embedded**: ARM Cortex-A series processors running AArch64

pub mod f32x4;

pub mod i32x4;
