//! C ABI for the soundfield foundation layer.
//!
//! Exposes the coordinate transforms, utility math, configuration tables
//! and the aligned allocator to embedding hosts (game engine plug-ins,
//! C/C++ audio middleware). All entry points are null-checked at the
//! boundary and report failure through [`SfStatus`] codes; nothing
//! panics or unwinds across the ABI.

mod memory;

pub use memory::{sf_alloc, sf_free};

use soundfield_core::{math, EngineConfig, EngineTarget, Polar3, ProcessingDomain, Vector3};

// ============================================================================
// STATUS CODES
// ============================================================================

/// Result code returned by every fallible FFI entry point.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SfStatus {
    /// Operation completed
    Ok = 0,
    /// A required pointer argument was null
    NullPointer = -1,
    /// Unknown target identifier
    InvalidTarget = -2,
    /// The allocation could not be satisfied
    AllocFailed = -3,
}

// ============================================================================
// VALUE TYPES
// ============================================================================

/// C-compatible rectangular position, meters.
/// x = right(+), y = up(+), z = front(+).
#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct SfVector3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

/// C-compatible polar position: azimuth/elevation radians, distance meters.
#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct SfPolar3 {
    pub azimuth: f32,
    pub elevation: f32,
    pub distance: f32,
}

/// C-compatible feature table for one build target.
#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct SfEngineConfig {
    /// False = frequency-domain convolution, true = time-domain
    pub time_domain: bool,
    pub simd: bool,
    pub host_allocator: bool,
    pub distance_decay: bool,
    pub timbre_correction: bool,
    pub hrtf_pack: bool,
    pub hrtf_selector: bool,
    pub auth: bool,
}

impl From<Vector3> for SfVector3 {
    fn from(v: Vector3) -> Self {
        SfVector3 {
            x: v.x,
            y: v.y,
            z: v.z,
        }
    }
}

impl From<SfVector3> for Vector3 {
    fn from(v: SfVector3) -> Self {
        Vector3::new(v.x, v.y, v.z)
    }
}

impl From<Polar3> for SfPolar3 {
    fn from(p: Polar3) -> Self {
        SfPolar3 {
            azimuth: p.azimuth,
            elevation: p.elevation,
            distance: p.distance,
        }
    }
}

impl From<SfPolar3> for Polar3 {
    fn from(p: SfPolar3) -> Self {
        Polar3::new(p.azimuth, p.elevation, p.distance)
    }
}

// ============================================================================
// COORDINATE MATH
// ============================================================================

/// Convert a rectangular position to polar coordinates.
///
/// # Safety
/// `position` and `out_polar` must each be null or a valid aligned
/// pointer to its type; null input yields `NullPointer`.
#[no_mangle]
pub unsafe extern "C" fn sf_rect_to_polar(
    position: *const SfVector3,
    out_polar: *mut SfPolar3,
) -> SfStatus {
    if position.is_null() || out_polar.is_null() {
        return SfStatus::NullPointer;
    }
    let v: Vector3 = (*position).into();
    *out_polar = math::rect_to_polar_vec(&v).into();
    SfStatus::Ok
}

/// Convert a polar position to rectangular coordinates.
///
/// # Safety
/// `position` and `out_vector` must each be null or a valid aligned
/// pointer to its type; null input yields `NullPointer`.
#[no_mangle]
pub unsafe extern "C" fn sf_polar_to_rect(
    position: *const SfPolar3,
    out_vector: *mut SfVector3,
) -> SfStatus {
    if position.is_null() || out_vector.is_null() {
        return SfStatus::NullPointer;
    }
    let p: Polar3 = (*position).into();
    *out_vector = math::polar_to_rect_vec(&p).into();
    SfStatus::Ok
}

/// `20·log10(linear)`; follows IEEE semantics at 0 and below.
#[no_mangle]
pub extern "C" fn sf_linear_to_decibel(linear: f32) -> f32 {
    math::linear_to_decibel(linear)
}

/// `10^(db/20)`.
#[no_mangle]
pub extern "C" fn sf_decibel_to_linear(db: f32) -> f32 {
    math::decibel_to_linear(db)
}

/// Clamp `x` to `[min_value, max_value]`. The result for
/// `min_value > max_value` is unspecified (caller obligation).
#[no_mangle]
pub extern "C" fn sf_limit(x: f32, min_value: f32, max_value: f32) -> f32 {
    math::limit(x, min_value, max_value)
}

// ============================================================================
// CONFIGURATION
// ============================================================================

/// Resolve the feature table for a build target.
///
/// Target identifiers: 0 = Wwise, 1 = Unity, 2 = VST3, 3 = SDK,
/// 4 = TestFreq, 5 = TestTime, 6 = Generic.
///
/// # Safety
/// `out_config` must be null or a valid aligned pointer; null yields
/// `NullPointer`, an unknown identifier yields `InvalidTarget`.
#[no_mangle]
pub unsafe extern "C" fn sf_config_for_target(
    target_id: i32,
    out_config: *mut SfEngineConfig,
) -> SfStatus {
    if out_config.is_null() {
        return SfStatus::NullPointer;
    }
    let target = match target_id {
        0 => EngineTarget::Wwise,
        1 => EngineTarget::Unity,
        2 => EngineTarget::Vst3,
        3 => EngineTarget::Sdk,
        4 => EngineTarget::TestFreq,
        5 => EngineTarget::TestTime,
        6 => EngineTarget::Generic,
        _ => return SfStatus::InvalidTarget,
    };
    let config = EngineConfig::for_target(target);
    *out_config = SfEngineConfig {
        time_domain: config.domain == ProcessingDomain::Time,
        simd: config.simd,
        host_allocator: config.host_allocator,
        distance_decay: config.distance_decay,
        timbre_correction: config.timbre_correction,
        hrtf_pack: config.hrtf_pack,
        hrtf_selector: config.hrtf_selector,
        auth: config.auth,
    };
    SfStatus::Ok
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rect_to_polar_null_checks() {
        let v = SfVector3 {
            x: 0.0,
            y: 0.0,
            z: 1.0,
        };
        let mut p = SfPolar3 {
            azimuth: 9.0,
            elevation: 9.0,
            distance: 9.0,
        };
        unsafe {
            assert_eq!(
                sf_rect_to_polar(std::ptr::null(), &mut p),
                SfStatus::NullPointer
            );
            assert_eq!(
                sf_rect_to_polar(&v, std::ptr::null_mut()),
                SfStatus::NullPointer
            );
            assert_eq!(sf_rect_to_polar(&v, &mut p), SfStatus::Ok);
        }
        assert!(p.azimuth.abs() < 1e-6);
        assert!((p.distance - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_round_trip_through_ffi() {
        let v = SfVector3 {
            x: 1.0,
            y: 2.0,
            z: -3.0,
        };
        let mut p = SfPolar3 {
            azimuth: 0.0,
            elevation: 0.0,
            distance: 0.0,
        };
        let mut back = SfVector3 {
            x: 0.0,
            y: 0.0,
            z: 0.0,
        };
        unsafe {
            assert_eq!(sf_rect_to_polar(&v, &mut p), SfStatus::Ok);
            assert_eq!(sf_polar_to_rect(&p, &mut back), SfStatus::Ok);
        }
        assert!((back.x - v.x).abs() < 1e-3);
        assert!((back.y - v.y).abs() < 1e-3);
        assert!((back.z - v.z).abs() < 1e-3);
    }

    #[test]
    fn test_config_table_ids() {
        let mut config = SfEngineConfig {
            time_domain: false,
            simd: false,
            host_allocator: false,
            distance_decay: false,
            timbre_correction: false,
            hrtf_pack: false,
            hrtf_selector: false,
            auth: false,
        };
        unsafe {
            assert_eq!(sf_config_for_target(0, &mut config), SfStatus::Ok);
            assert!(config.host_allocator && !config.time_domain);

            assert_eq!(sf_config_for_target(2, &mut config), SfStatus::Ok);
            assert!(config.time_domain && config.auth);

            assert_eq!(
                sf_config_for_target(99, &mut config),
                SfStatus::InvalidTarget
            );
            assert_eq!(
                sf_config_for_target(0, std::ptr::null_mut()),
                SfStatus::NullPointer
            );
        }
    }

    #[test]
    fn test_scalar_helpers() {
        assert_eq!(sf_linear_to_decibel(1.0), 0.0);
        assert!((sf_decibel_to_linear(0.0) - 1.0).abs() < 1e-6);
        assert_eq!(sf_limit(5.0, 0.0, 1.0), 1.0);
    }
}
