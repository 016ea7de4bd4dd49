//! NEON backend for the 4-lane vector abstraction (`aarch64`).
//!
//! NEON loads carry no alignment requirement, so the aligned and
//! unaligned variants compile to the same instruction; the aligned
//! entry points keep the caller contract of the shared interface.

// Register-only intrinsics are callable without unsafe on toolchains where
// neon counts as statically enabled; keep the blocks for older toolchains.
#![allow(unused_unsafe)]

use core::arch::aarch64::{
    float32x4_t, int32x4_t, vaddq_f32, vcombine_f32, vdup_lane_f32, vdupq_n_f32, vdupq_n_s32,
    veorq_s32, vget_high_f32, vget_low_f32, vgetq_lane_f32, vld1q_f32, vld1q_s32, vmlaq_f32,
    vmulq_f32, vreinterpretq_f32_s32, vreinterpretq_s32_f32, vrev64q_f32, vsetq_lane_f32,
    vst1q_f32, vst1q_s32,
};

/// 4 packed 32-bit floats in one NEON register.
#[derive(Debug, Clone, Copy)]
#[repr(transparent)]
pub struct F32x4(float32x4_t);

/// 4 packed 32-bit signed integers in one NEON register.
#[derive(Debug, Clone, Copy)]
#[repr(transparent)]
pub struct I32x4(int32x4_t);

impl F32x4 {
    /// Load 4 floats from a 16-byte-aligned address.
    ///
    /// # Safety
    /// `ptr` must be 16-byte aligned and valid for reading 4 floats.
    /// Misaligned input is undefined behavior (caller contract, unchecked).
    #[inline]
    pub unsafe fn load(ptr: *const f32) -> Self {
        F32x4(vld1q_f32(ptr))
    }

    /// Load 4 floats from an arbitrarily aligned address.
    ///
    /// # Safety
    /// `ptr` must be valid for reading 4 floats.
    #[inline]
    pub unsafe fn load_unaligned(ptr: *const f32) -> Self {
        F32x4(vld1q_f32(ptr))
    }

    /// Store 4 floats to a 16-byte-aligned address.
    ///
    /// # Safety
    /// `ptr` must be 16-byte aligned and valid for writing 4 floats.
    #[inline]
    pub unsafe fn store(self, ptr: *mut f32) {
        vst1q_f32(ptr, self.0);
    }

    /// Store 4 floats to an arbitrarily aligned address.
    ///
    /// # Safety
    /// `ptr` must be valid for writing 4 floats.
    #[inline]
    pub unsafe fn store_unaligned(self, ptr: *mut f32) {
        vst1q_f32(ptr, self.0);
    }

    /// Broadcast one scalar to all 4 lanes.
    #[inline]
    pub fn splat(value: f32) -> Self {
        F32x4(unsafe { vdupq_n_f32(value) })
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
        F32x4(unsafe { vaddq_f32(self.0, rhs.0) })
    }

    /// Elementwise multiplication.
    #[inline]
    pub fn mul(self, rhs: Self) -> Self {
        F32x4(unsafe { vmulq_f32(self.0, rhs.0) })
    }

    /// Multiply-add: `self * b + c` in one semantic step, lowered to the
    /// NEON multiply-accumulate. Rounding may differ from backends that
    /// do not fuse.
    #[inline]
    pub fn madd(self, b: Self, c: Self) -> Self {
        F32x4(unsafe { vmlaq_f32(c.0, self.0, b.0) })
    }

    /// Multiply lane 0 only; lanes 1..3 pass through unchanged from `self`.
    #[inline]
    pub fn mul_scalar0(self, rhs: Self) -> Self {
        unsafe {
            let low = vgetq_lane_f32::<0>(self.0) * vgetq_lane_f32::<0>(rhs.0);
            F32x4(vsetq_lane_f32::<0>(low, self.0))
        }
    }

    /// Swap the two lanes of each (even, odd) pair.
    #[inline]
    pub fn swap_pairs(self) -> Self {
        F32x4(unsafe { vrev64q_f32(self.0) })
    }

    /// Packed complex multiply: lanes are two (re, im) pairs and each pair
    /// is multiplied as a complex number.
    ///
    /// Lane-duplicates split `self` into real and imaginary broadcasts;
    /// the cross term is negated on its imaginary lanes with a constant
    /// sign vector, multiplied, pair-reversed and accumulated.
    #[inline]
    pub fn complex_mul(self, rhs: Self) -> Self {
        const SIGN: [f32; 4] = [1.0, -1.0, 1.0, -1.0];
        unsafe {
            let low = vget_low_f32(self.0);
            let high = vget_high_f32(self.0);
            let re_a = vcombine_f32(vdup_lane_f32::<0>(low), vdup_lane_f32::<0>(high));
            let im_a = vcombine_f32(vdup_lane_f32::<1>(low), vdup_lane_f32::<1>(high));

            let sign = vld1q_f32(SIGN.as_ptr());
            let cross = vrev64q_f32(vmulq_f32(vmulq_f32(im_a, sign), rhs.0));
            F32x4(vaddq_f32(cross, vmulq_f32(re_a, rhs.0)))
        }
    }

    /// Reinterpret the float lanes as their integer bit patterns.
    #[inline]
    pub fn bitcast_i32(self) -> I32x4 {
        I32x4(unsafe { vreinterpretq_s32_f32(self.0) })
    }
}

impl I32x4 {
    /// Broadcast one scalar to all 4 lanes.
    #[inline]
    pub fn splat(value: i32) -> Self {
        I32x4(unsafe { vdupq_n_s32(value) })
    }

    /// Build a vector from individual lanes, highest lane first
    /// (matching the x86 `set` argument order).
    #[inline]
    pub fn set(e3: i32, e2: i32, e1: i32, e0: i32) -> Self {
        let lanes = [e0, e1, e2, e3];
        I32x4(unsafe { vld1q_s32(lanes.as_ptr()) })
    }

    /// Extract the lanes into an array, lane 0 first.
    #[inline]
    pub fn to_array(self) -> [i32; 4] {
        let mut out = [0_i32; 4];
        unsafe { vst1q_s32(out.as_mut_ptr(), self.0) };
        out
    }

    /// Bitwise xor across all 128 bits.
    #[inline]
    pub fn xor(self, rhs: Self) -> Self {
        I32x4(unsafe { veorq_s32(self.0, rhs.0) })
    }

    /// Reinterpret the integer lanes as floats.
    #[inline]
    pub fn bitcast_f32(self) -> F32x4 {
        F32x4(unsafe { vreinterpretq_f32_s32(self.0) })
    }
}
