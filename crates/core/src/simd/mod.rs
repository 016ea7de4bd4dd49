//! 4-lane SIMD vector abstraction
//!
//! One logical interface over 4-wide single-precision float and 32-bit
//! integer lane vectors, with a separate implementation per instruction
//! set. The backend is fixed at build time by `cfg`; there is no runtime
//! dispatch and no runtime failure path — every operation is a total
//! function and NaN/Inf propagate per IEEE-754.
//!
//! # Backend Selection
//!
//! - `x86_64` with the `simd` feature (default): the SSE backend
//! - `aarch64` with the `simd` feature (default): the NEON backend
//! - everything else, or `--no-default-features`: the portable scalar backend
//!
//! All backends expose identical signatures, so the rendering engine's
//! block-processing loops compile unchanged against any of them. Rounding
//! of the fused multiply-add may differ between backends; the engine does
//! not rely on bit-exact cross-hardware reproducibility.
//!
//! # Alignment contract
//!
//! The aligned load/store variants require 16-byte-aligned addresses.
//! Misaligned use is undefined behavior by caller contract, not a checked
//! error, to keep the render path free of branches. Buffers from
//! [`crate::memory`] satisfy the contract by construction.

#[cfg(all(feature = "simd", target_arch = "x86_64"))]
mod sse;
#[cfg(all(feature = "simd", target_arch = "x86_64"))]
pub use sse::{F32x4, I32x4};

#[cfg(all(feature = "simd", target_arch = "aarch64"))]
mod neon;
#[cfg(all(feature = "simd", target_arch = "aarch64"))]
pub use neon::{F32x4, I32x4};

#[cfg(any(
    not(feature = "simd"),
    not(any(target_arch = "x86_64", target_arch = "aarch64"))
))]
mod scalar;
#[cfg(any(
    not(feature = "simd"),
    not(any(target_arch = "x86_64", target_arch = "aarch64"))
))]
pub use scalar::{F32x4, I32x4};

/// Number of parallel scalar slots in one vector value.
pub const LANES: usize = 4;
