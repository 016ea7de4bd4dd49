//! Numeric platform abstraction
//!
//! Fixed-width aliases and the physical constants shared by every other
//! module. The aliases exist so that the coordinate math, the SIMD lane
//! types and the FFI surface all agree on ABI-stable sizes regardless of
//! which embedding host the library is built for.

// The layer assumes at least a 32-bit address space; 16-bit targets would
// silently break the alignment and layout contracts below.
#[cfg(target_pointer_width = "16")]
compile_error!("soundfield-core requires a 32-bit or wider target");

/// 32-bit IEEE-754 floating point, the working precision of the render path
pub type Real32 = f32;
/// 64-bit IEEE-754 floating point
pub type Real64 = f64;

/// Signed 8-bit integer
pub type Int8 = i8;
/// Signed 16-bit integer
pub type Int16 = i16;
/// Signed 32-bit integer
pub type Int32 = i32;
/// Signed 64-bit integer
pub type Int64 = i64;

/// Unsigned 8-bit integer
pub type UInt8 = u8;
/// Unsigned 16-bit integer
pub type UInt16 = u16;
/// Unsigned 32-bit integer
pub type UInt32 = u32;
/// Unsigned 64-bit integer
pub type UInt64 = u64;

/// Generic wide-character alias for host-facing strings (UTF-32 code point)
pub type OsChar = char;

/// π as a 32-bit float, the precision used throughout the angle math
pub const PI: Real32 = 3.14159265358979323846;

/// Degrees to radians (π/180)
pub const DEG2RAD: Real32 = 0.01745329251994329576;

/// Radians to degrees (180/π)
pub const RAD2DEG: Real32 = 57.2957795130823208767;

/// Speed of sound in air at 15 °C, meters per second
pub const SPEED_OF_SOUND: Real32 = 340.29;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_widths() {
        assert_eq!(std::mem::size_of::<Real32>(), 4);
        assert_eq!(std::mem::size_of::<Real64>(), 8);
        assert_eq!(std::mem::size_of::<Int32>(), 4);
        assert_eq!(std::mem::size_of::<UInt64>(), 8);
    }

    #[test]
    fn test_angle_constants_are_inverses() {
        let deg = 123.4_f32;
        assert!((deg * DEG2RAD * RAD2DEG - deg).abs() < 1e-3);
    }
}
