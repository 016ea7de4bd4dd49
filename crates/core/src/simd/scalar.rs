//! Portable scalar backend for the 4-lane vector abstraction.
//!
//! Selected when the `simd` feature is off or the target has no supported
//! 128-bit vector unit. Keeps the exact signatures and semantics of the
//! intrinsic backends so engine code compiles unchanged; the compiler is
//! free to autovectorize the loops.

/// 4 packed 32-bit floats, 16-byte aligned like the register-backed
/// variants so mixed-backend data layouts stay compatible.
#[derive(Debug, Clone, Copy)]
#[repr(C, align(16))]
pub struct F32x4([f32; 4]);

/// 4 packed 32-bit signed integers, 16-byte aligned.
#[derive(Debug, Clone, Copy)]
#[repr(C, align(16))]
pub struct I32x4([i32; 4]);

impl F32x4 {
    /// Load 4 floats from a 16-byte-aligned address.
    ///
    /// # Safety
    /// `ptr` must be 16-byte aligned and valid for reading 4 floats.
    /// Misaligned input is undefined behavior (caller contract, unchecked).
    #[inline]
    pub unsafe fn load(ptr: *const f32) -> Self {
        F32x4(*ptr.cast::<[f32; 4]>())
    }

    /// Load 4 floats from an arbitrarily aligned address.
    ///
    /// # Safety
    /// `ptr` must be valid for reading 4 floats.
    #[inline]
    pub unsafe fn load_unaligned(ptr: *const f32) -> Self {
        F32x4(ptr.cast::<[f32; 4]>().read_unaligned())
    }

    /// Store 4 floats to a 16-byte-aligned address.
    ///
    /// # Safety
    /// `ptr` must be 16-byte aligned and valid for writing 4 floats.
    #[inline]
    pub unsafe fn store(self, ptr: *mut f32) {
        *ptr.cast::<[f32; 4]>() = self.0;
    }

    /// Store 4 floats to an arbitrarily aligned address.
    ///
    /// # Safety
    /// `ptr` must be valid for writing 4 floats.
    #[inline]
    pub unsafe fn store_unaligned(self, ptr: *mut f32) {
        ptr.cast::<[f32; 4]>().write_unaligned(self.0);
    }

    /// Broadcast one scalar to all 4 lanes.
    #[inline]
    pub fn splat(value: f32) -> Self {
        F32x4([value; 4])
    }

    /// Build a vector from an array, lane 0 first.
    #[inline]
    pub fn from_array(lanes: [f32; 4]) -> Self {
        F32x4(lanes)
    }

    /// Extract the lanes into an array, lane 0 first.
    #[inline]
    pub fn to_array(self) -> [f32; 4] {
        self.0
    }

    /// Elementwise addition.
    #[inline]
    pub fn add(self, rhs: Self) -> Self {
        let mut out = self.0;
        for lane in 0..4 {
            out[lane] += rhs.0[lane];
        }
        F32x4(out)
    }

    /// Elementwise multiplication.
    #[inline]
    pub fn mul(self, rhs: Self) -> Self {
        let mut out = self.0;
        for lane in 0..4 {
            out[lane] *= rhs.0[lane];
        }
        F32x4(out)
    }

    /// Multiply-add: `self * b + c`, unfused.
    #[inline]
    pub fn madd(self, b: Self, c: Self) -> Self {
        let mut out = [0.0; 4];
        for lane in 0..4 {
            out[lane] = self.0[lane] * b.0[lane] + c.0[lane];
        }
        F32x4(out)
    }

    /// Multiply lane 0 only; lanes 1..3 pass through unchanged from `self`.
    #[inline]
    pub fn mul_scalar0(self, rhs: Self) -> Self {
        let mut out = self.0;
        out[0] *= rhs.0[0];
        F32x4(out)
    }

    /// Swap the two lanes of each (even, odd) pair.
    #[inline]
    pub fn swap_pairs(self) -> Self {
        let [a, b, c, d] = self.0;
        F32x4([b, a, d, c])
    }

    /// Packed complex multiply: lanes are two (re, im) pairs and each pair
    /// is multiplied as a complex number.
    #[inline]
    pub fn complex_mul(self, rhs: Self) -> Self {
        let [ar0, ai0, ar1, ai1] = self.0;
        let [br0, bi0, br1, bi1] = rhs.0;
        F32x4([
            ar0 * br0 - ai0 * bi0,
            ar0 * bi0 + ai0 * br0,
            ar1 * br1 - ai1 * bi1,
            ar1 * bi1 + ai1 * br1,
        ])
    }

    /// Reinterpret the float lanes as their integer bit patterns.
    #[inline]
    pub fn bitcast_i32(self) -> I32x4 {
        let mut out = [0_i32; 4];
        for lane in 0..4 {
            out[lane] = self.0[lane].to_bits() as i32;
        }
        I32x4(out)
    }
}

impl I32x4 {
    /// Broadcast one scalar to all 4 lanes.
    #[inline]
    pub fn splat(value: i32) -> Self {
        I32x4([value; 4])
    }

    /// Build a vector from individual lanes, highest lane first
    /// (matching the x86 `set` argument order).
    #[inline]
    pub fn set(e3: i32, e2: i32, e1: i32, e0: i32) -> Self {
        I32x4([e0, e1, e2, e3])
    }

    /// Extract the lanes into an array, lane 0 first.
    #[inline]
    pub fn to_array(self) -> [i32; 4] {
        self.0
    }

    /// Bitwise xor across all 128 bits.
    #[inline]
    pub fn xor(self, rhs: Self) -> Self {
        let mut out = self.0;
        for lane in 0..4 {
            out[lane] ^= rhs.0[lane];
        }
        I32x4(out)
    }

    /// Reinterpret the integer lanes as floats.
    #[inline]
    pub fn bitcast_f32(self) -> F32x4 {
        let mut out = [0.0_f32; 4];
        for lane in 0..4 {
            out[lane] = f32::from_bits(self.0[lane] as u32);
        }
        F32x4(out)
    }
}
