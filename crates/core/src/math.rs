//! Spatial coordinate and utility math.
//!
//! Pure scalar/vector functions feeding the panning and HRTF-lookup logic
//! of the rendering engine. Everything here is total, allocation-free and
//! log-free so it can run inside the hard-real-time render callback.
//!
//! # Coordinate conventions
//!
//! Rectangular: x = right(+), y = up(+), z = front(+), meters.
//! Polar: azimuth 0 = front, +π/2 = left, −π/2 = right; elevation + = up.
//!
//! # Azimuth branch convention
//!
//! [`rect_to_polar`] resolves azimuth with an explicit four-way branch on
//! z and x rather than `atan2`. The branch for z≈0, x>0 yields 3π/2 (not
//! −π/2); downstream HRTF consumers index on that exact representation, so
//! the branch table is a compatibility contract and must not be normalized.

use crate::core_types::{Polar3, Real32, Vector3, PI};

/// Threshold below which a coordinate is treated as exactly on-axis and a
/// distance as exactly at the origin (singularity guard, not a tolerance
/// knob).
const EPSILON: Real32 = 1e-37;

/// Smaller of two values under `PartialOrd`.
#[inline]
pub fn min<T: PartialOrd>(a: T, b: T) -> T {
    if a < b {
        a
    } else {
        b
    }
}

/// Larger of two values under `PartialOrd`.
#[inline]
pub fn max<T: PartialOrd>(a: T, b: T) -> T {
    if a > b {
        a
    } else {
        b
    }
}

/// Clamp `x` to `[minv, maxv]`, defined as `min(max(x, minv), maxv)`.
///
/// The result for `minv > maxv` is unspecified (caller obligation); no
/// runtime check is performed.
#[inline]
pub fn limit<T: PartialOrd>(x: T, minv: T, maxv: T) -> T {
    min(max(x, minv), maxv)
}

/// Decibel gain to linear amplitude: `e^(0.115129255·dB)` ≡ `10^(dB/20)`.
#[inline]
pub fn decibel_to_linear(db: Real32) -> Real32 {
    (0.115129255 * db).exp()
}

/// Linear amplitude to decibel gain: `20·log10(lin)`.
///
/// Follows IEEE semantics at the edges: 0 maps to −inf, negative input to
/// NaN. Not special-cased.
#[inline]
pub fn linear_to_decibel(lin: Real32) -> Real32 {
    20.0 * lin.log10()
}

/// Euclidean dot product of two rectangular vectors.
#[inline]
pub fn inner_product(v1: &Vector3, v2: &Vector3) -> Real32 {
    v1.x * v2.x + v1.y * v2.y + v1.z * v2.z
}

/// Cross product of two rectangular vectors.
#[inline]
pub fn cross_product(v1: &Vector3, v2: &Vector3) -> Vector3 {
    v1.cross(v2)
}

/// Squared magnitude of (x, y, z).
#[inline]
pub fn magnitude_squared(x: Real32, y: Real32, z: Real32) -> Real32 {
    x * x + y * y + z * z
}

/// Squared magnitude of a vector.
#[inline]
pub fn magnitude_squared_vec(v: &Vector3) -> Real32 {
    magnitude_squared(v.x, v.y, v.z)
}

/// Magnitude of (x, y, z).
#[inline]
pub fn magnitude(x: Real32, y: Real32, z: Real32) -> Real32 {
    magnitude_squared(x, y, z).sqrt()
}

/// Magnitude of a vector.
#[inline]
pub fn magnitude_vec(v: &Vector3) -> Real32 {
    magnitude(v.x, v.y, v.z)
}

/// Rectangular to polar conversion.
///
/// Distance below the on-axis threshold is the origin singularity: azimuth and
/// elevation are defined as exactly 0 by convention so no NaN leaves this
/// function. The azimuth branch order (on-axis, rear hemisphere, front
/// hemisphere) is the binding front/back/left/right disambiguation table
/// described in the module docs.
pub fn rect_to_polar(x: Real32, y: Real32, z: Real32) -> Polar3 {
    let distance = magnitude(x, y, z);
    if distance < EPSILON {
        return Polar3::new(0.0, 0.0, distance);
    }

    let elevation = (y / distance).asin();
    let azimuth = if z < EPSILON && z > -EPSILON {
        // Source on the left/right axis: atan(x/z) is unusable here
        if x < EPSILON && x > -EPSILON {
            0.0
        } else if x < 0.0 {
            0.5 * PI
        } else {
            // 3π/2, not −π/2: downstream consumers expect this branch in
            // [0, 2π)
            1.5 * PI
        }
    } else if z < 0.0 {
        PI - (x / z).atan()
    } else {
        -(x / z).atan()
    };

    Polar3::new(azimuth, elevation, distance)
}

/// [`rect_to_polar`] taking a vector.
#[inline]
pub fn rect_to_polar_vec(src: &Vector3) -> Polar3 {
    rect_to_polar(src.x, src.y, src.z)
}

/// Polar to rectangular conversion, inverse of [`rect_to_polar`] up to
/// floating-point tolerance for non-degenerate inputs.
pub fn polar_to_rect(azimuth: Real32, elevation: Real32, distance: Real32) -> Vector3 {
    let x = -distance * elevation.cos() * azimuth.sin();
    let z = distance * elevation.cos() * azimuth.cos();
    let y = distance * elevation.sin();
    Vector3::new(x, y, z)
}

/// [`polar_to_rect`] taking a polar coordinate.
#[inline]
pub fn polar_to_rect_vec(src: &Polar3) -> Vector3 {
    polar_to_rect(src.azimuth, src.elevation, src.distance)
}
