//! SSE backend for the 4-lane vector abstraction (`x86_64`).
//!
//! Stays within baseline SSE2 so it compiles for every `x86_64` target
//! without extra `target-feature` flags: the alternating add-subtract of
//! the complex multiply is synthesized from a sign-mask xor instead of
//! the SSE3 `addsub` instruction.

// Register-only intrinsics are callable without unsafe on toolchains where
// sse2 counts as statically enabled; keep the blocks for older toolchains.
#![allow(unused_unsafe)]

use core::arch::x86_64::{
    __m128, __m128i, _mm_add_ps, _mm_castps_si128, _mm_castsi128_ps, _mm_load_ps, _mm_loadu_ps,
    _mm_mul_ps, _mm_mul_ss, _mm_set1_epi32, _mm_set1_ps, _mm_set_epi32, _mm_set_ps, _mm_shuffle_ps,
    _mm_store_ps, _mm_storeu_ps, _mm_storeu_si128, _mm_xor_ps, _mm_xor_si128,
};

// `_MM_SHUFFLE` is unstable on stable toolchains (rust-lang/rust#111147);
// spell out `(z << 6) | (y << 4) | (x << 2) | w` as literals instead.
const SHUFFLE_2301: i32 = 0b10_11_00_01; // _MM_SHUFFLE(2, 3, 0, 1)
const SHUFFLE_2200: i32 = 0b10_10_00_00; // _MM_SHUFFLE(2, 2, 0, 0)
const SHUFFLE_3311: i32 = 0b11_11_01_01; // _MM_SHUFFLE(3, 3, 1, 1)

/// 4 packed 32-bit floats in one SSE register.
#[derive(Debug, Clone, Copy)]
#[repr(transparent)]
pub struct F32x4(__m128);

/// 4 packed 32-bit signed integers in one SSE register.
#[derive(Debug, Clone, Copy)]
#[repr(transparent)]
pub struct I32x4(__m128i);

impl F32x4 {
    /// Load 4 floats from a 16-byte-aligned address.
    ///
    /// # Safety
    /// `ptr` must be 16-byte aligned and valid for reading 4 floats.
    /// Misaligned input is undefined behavior (caller contract, unchecked).
    #[inline]
    pub unsafe fn load(ptr: *const f32) -> Self {
        F32x4(_mm_load_ps(ptr))
    }

    /// Load 4 floats from an arbitrarily aligned address.
    ///
    /// # Safety
    /// `ptr` must be valid for reading 4 floats.
    #[inline]
    pub unsafe fn load_unaligned(ptr: *const f32) -> Self {
        F32x4(_mm_loadu_ps(ptr))
    }

    /// Store 4 floats to a 16-byte-aligned address.
    ///
    /// # Safety
    /// `ptr` must be 16-byte aligned and valid for writing 4 floats.
    #[inline]
    pub unsafe fn store(self, ptr: *mut f32) {
        _mm_store_ps(ptr, self.0);
    }

    /// Store 4 floats to an arbitrarily aligned address.
    ///
    /// # Safety
    /// `ptr` must be valid for writing 4 floats.
    #[inline]
    pub unsafe fn store_unaligned(self, ptr: *mut f32) {
        _mm_storeu_ps(ptr, self.0);
    }

    /// Broadcast one scalar to all 4 lanes.
    #[inline]
    pub fn splat(value: f32) -> Self {
        F32x4(unsafe { _mm_set1_ps(value) })
    }

    /// Build a vector from an array, lane 0 first.
    #[inline]
    pub fn from_array(lanes: [f32; 4]) -> Self {
        unsafe { Self::load_unaligned(lanes.as_ptr()) }
    }

    /// Extract the lanes into an array, lane 0 first.
    #[inline]
    pub fn to_array(self) -> [f32; 4] {
        let mut out = [0.0; 4];
        unsafe { self.store_unaligned(out.as_mut_ptr()) };
        out
    }

    /// Elementwise addition.
    #[inline]
    pub fn add(self, rhs: Self) -> Self {
        F32x4(unsafe { _mm_add_ps(self.0, rhs.0) })
    }

    /// Elementwise multiplication.
    #[inline]
    pub fn mul(self, rhs: Self) -> Self {
        F32x4(unsafe { _mm_mul_ps(self.0, rhs.0) })
    }

    /// Multiply-add: `self * b + c` in one semantic step. Not fused on
    /// this backend (baseline SSE2 has no FMA); rounding may differ from
    /// backends that fuse.
    #[inline]
    pub fn madd(self, b: Self, c: Self) -> Self {
        F32x4(unsafe { _mm_add_ps(_mm_mul_ps(self.0, b.0), c.0) })
    }

    /// Multiply lane 0 only; lanes 1..3 pass through unchanged from `self`.
    #[inline]
    pub fn mul_scalar0(self, rhs: Self) -> Self {
        F32x4(unsafe { _mm_mul_ss(self.0, rhs.0) })
    }

    /// Swap the two lanes of each (even, odd) pair: `(1, 0, 3, 2)` shuffle.
    #[inline]
    pub fn swap_pairs(self) -> Self {
        F32x4(unsafe { _mm_shuffle_ps::<SHUFFLE_2301>(self.0, self.0) })
    }

    /// Packed complex multiply: lanes are two (re, im) pairs and each pair
    /// is multiplied as a complex number.
    ///
    /// Duplicate-low/duplicate-high shuffles split `rhs` into real and
    /// imaginary broadcasts; the cross term has its even lanes negated
    /// through a sign-mask xor before the final add.
    #[inline]
    pub fn complex_mul(self, rhs: Self) -> Self {
        unsafe {
            let re_b = _mm_shuffle_ps::<SHUFFLE_2200>(rhs.0, rhs.0);
            let im_b = _mm_shuffle_ps::<SHUFFLE_3311>(rhs.0, rhs.0);
            let direct = _mm_mul_ps(self.0, re_b);
            let crossed = _mm_mul_ps(self.swap_pairs().0, im_b);
            let sign = _mm_set_ps(0.0, -0.0, 0.0, -0.0);
            F32x4(_mm_add_ps(direct, _mm_xor_ps(crossed, sign)))
        }
    }

    /// Reinterpret the float lanes as their integer bit patterns.
    #[inline]
    pub fn bitcast_i32(self) -> I32x4 {
        I32x4(unsafe { _mm_castps_si128(self.0) })
    }
}

impl I32x4 {
    /// Broadcast one scalar to all 4 lanes.
    #[inline]
    pub fn splat(value: i32) -> Self {
        I32x4(unsafe { _mm_set1_epi32(value) })
    }

    /// Build a vector from individual lanes, highest lane first.
    #[inline]
    pub fn set(e3: i32, e2: i32, e1: i32, e0: i32) -> Self {
        I32x4(unsafe { _mm_set_epi32(e3, e2, e1, e0) })
    }

    /// Extract the lanes into an array, lane 0 first.
    #[inline]
    pub fn to_array(self) -> [i32; 4] {
        let mut out = [0_i32; 4];
        unsafe { _mm_storeu_si128(out.as_mut_ptr().cast::<__m128i>(), self.0) };
        out
    }

    /// Bitwise xor across all 128 bits.
    #[inline]
    pub fn xor(self, rhs: Self) -> Self {
        I32x4(unsafe { _mm_xor_si128(self.0, rhs.0) })
    }

    /// Reinterpret the integer lanes as floats.
    #[inline]
    pub fn bitcast_f32(self) -> F32x4 {
        F32x4(unsafe { _mm_castsi128_ps(self.0) })
    }
}
