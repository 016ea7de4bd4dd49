//! Coordinate Conversion Validation Suite
//!
//! Validates the rectangular↔polar transforms against their binding
//! numeric contracts:
//! 1. Round-trip consistency for non-degenerate positions
//! 2. The origin singularity policy (exact zeros, never NaN)
//! 3. The four-way azimuth disambiguation branch table
//! 4. Decibel/linear conversion inverses
//!
//! Run with: `cargo test --test coordinate_conversion`

use approx::assert_relative_eq;
use rand::Rng;
use soundfield_core::math::{
    decibel_to_linear, linear_to_decibel, magnitude_vec, polar_to_rect_vec, rect_to_polar,
    rect_to_polar_vec,
};
use soundfield_core::{Vector3, PI};

#[ctor::ctor]
fn init_test_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();
}

/// Relative tolerance for the rect → polar → rect round trip
const ROUND_TRIP_TOLERANCE: f32 = 1e-4;

#[test]
fn test_round_trip_random_positions() {
    let mut rng = rand::rng();
    for _ in 0..10_000 {
        let v = Vector3::new(
            rng.random_range(-50.0..50.0),
            rng.random_range(-50.0..50.0),
            rng.random_range(-50.0..50.0),
        );
        if magnitude_vec(&v) < 1e-6 {
            continue;
        }

        let back = polar_to_rect_vec(&rect_to_polar_vec(&v));
        let scale = magnitude_vec(&v);
        assert!(
            (back.x - v.x).abs() <= ROUND_TRIP_TOLERANCE * scale + 1e-6,
            "x: {} -> {} (source {:?})",
            v.x,
            back.x,
            v
        );
        assert!(
            (back.y - v.y).abs() <= ROUND_TRIP_TOLERANCE * scale + 1e-6,
            "y: {} -> {} (source {:?})",
            v.y,
            back.y,
            v
        );
        assert!(
            (back.z - v.z).abs() <= ROUND_TRIP_TOLERANCE * scale + 1e-6,
            "z: {} -> {} (source {:?})",
            v.z,
            back.z,
            v
        );
    }
}

#[test]
fn test_round_trip_preserves_distance() {
    let mut rng = rand::rng();
    for _ in 0..1000 {
        let v = Vector3::new(
            rng.random_range(-10.0..10.0),
            rng.random_range(-10.0..10.0),
            rng.random_range(-10.0..10.0),
        );
        let d = magnitude_vec(&v);
        if d < 1e-6 {
            continue;
        }
        let p = rect_to_polar_vec(&v);
        assert_relative_eq!(p.distance, d, max_relative = 1e-5);
        assert!(p.distance >= 0.0);
        // Elevation stays in its open range for off-pole positions
        assert!(p.elevation.abs() <= 0.5 * PI + 1e-6);
    }
}

#[test]
fn test_origin_returns_exact_zeros() {
    let p = rect_to_polar(0.0, 0.0, 0.0);
    assert_eq!(p.azimuth, 0.0);
    assert_eq!(p.elevation, 0.0);
    assert_eq!(p.distance, 0.0);

    // Subnormal-range positions fall under the same singularity policy
    let p = rect_to_polar(1e-38, -1e-38, 1e-38);
    assert_eq!(p.azimuth, 0.0);
    assert_eq!(p.elevation, 0.0);
    assert!(!p.distance.is_nan());
}

#[test]
fn test_azimuth_branch_table() {
    // On the left/right axis the atan branch is unusable; the branch
    // table assigns fixed angles. x>0 (right) maps to 3π/2, not −π/2:
    // the asymmetric representation downstream consumers index on.
    let right = rect_to_polar(1.0, 0.0, 0.0);
    assert_relative_eq!(right.azimuth, 1.5 * PI, epsilon = 1e-5);

    let left = rect_to_polar(-1.0, 0.0, 0.0);
    assert_relative_eq!(left.azimuth, 0.5 * PI, epsilon = 1e-5);

    let front = rect_to_polar(0.0, 0.0, 1.0);
    assert_relative_eq!(front.azimuth, 0.0, epsilon = 1e-5);

    let rear = rect_to_polar(0.0, 0.0, -1.0);
    assert_relative_eq!(rear.azimuth, PI, epsilon = 1e-5);

    // Directly above: on-axis in both x and z, azimuth defined as 0
    let above = rect_to_polar(0.0, 1.0, 0.0);
    assert_eq!(above.azimuth, 0.0);
    assert_relative_eq!(above.elevation, 0.5 * PI, epsilon = 1e-5);
}

#[test]
fn test_front_quadrant_angles() {
    // 45° front-left
    let p = rect_to_polar(-1.0, 0.0, 1.0);
    assert_relative_eq!(p.azimuth, 0.25 * PI, epsilon = 1e-5);
    // 45° front-right: negative branch, not wrapped
    let p = rect_to_polar(1.0, 0.0, 1.0);
    assert_relative_eq!(p.azimuth, -0.25 * PI, epsilon = 1e-5);
    // 45° rear-left
    let p = rect_to_polar(-1.0, 0.0, -1.0);
    assert_relative_eq!(p.azimuth, 0.75 * PI, epsilon = 1e-5);
}

#[test]
fn test_decibel_linear_inverses() {
    let mut rng = rand::rng();
    for _ in 0..1000 {
        let v: f32 = rng.random_range(1e-4_f32..1e4_f32);
        assert_relative_eq!(
            decibel_to_linear(linear_to_decibel(v)),
            v,
            max_relative = 1e-4
        );
    }
    assert_eq!(linear_to_decibel(1.0), 0.0);
    assert_eq!(linear_to_decibel(0.0), f32::NEG_INFINITY);
}
