//! Soundfield Core Library
//!
//! Numeric and memory foundation layer for a real-time 3D audio
//! spatialization engine. Supplies platform-portable numeric types,
//! rectangular/polar spatial coordinate math, a 4-lane SIMD abstraction
//! (including the packed complex multiply used by frequency-domain
//! convolution), and an aligned allocation abstraction that can delegate
//! to an embedding host's allocator.
//!
//! ## Real-time contract
//!
//! The coordinate math and SIMD operations are pure, synchronous,
//! allocation-free and log-free: safe to call from the audio render
//! callback on any number of threads. The allocator is the one component
//! meant for the control thread; the render path only touches buffers
//! obtained in advance.

// Core types and utilities
pub mod core_types;

// Spatial coordinate and scalar utility math
pub mod math;

// 4-lane SIMD vector abstraction (backend fixed at build time)
pub mod simd;

// Aligned allocation, standalone or host-delegated
pub mod memory;

// Build-target feature configuration
pub mod config;

// Re-export core types
pub use core_types::{Polar3, Real32, Real64, Vector3, DEG2RAD, PI, RAD2DEG, SPEED_OF_SOUND};

// Re-export the working surface
pub use config::{EngineConfig, EngineTarget, ProcessingDomain};
pub use memory::{AlignedBuffer, Allocator, HostAllocator};
pub use simd::{F32x4, I32x4, LANES};
