//! Polar position type: azimuth / elevation / distance around the listener.

use crate::core_types::numeric::Real32;
use serde::{Deserialize, Serialize};
use std::ops::{
    Add, AddAssign, Div, DivAssign, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign,
};

/// Polar 3D coordinate.
///
/// azimuth: radians, 0 = front, +π/2 = left, −π/2 = right, ±π = rear.
/// elevation: radians, +π/2 = up, −π/2 = down.
/// distance: meters, ≥ 0.
///
/// Carries the same componentwise operator set as [`Vector3`] for symmetry.
/// The operators are dimensionally mixed (adding azimuth to distance is
/// numerically meaningless); callers are responsible for applying them only
/// field-by-field in ways that make sense, e.g. interpolating two polar
/// positions.
///
/// [`Vector3`]: crate::core_types::Vector3
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Polar3 {
    pub azimuth: Real32,
    pub elevation: Real32,
    pub distance: Real32,
}

impl Polar3 {
    pub const fn new(azimuth: Real32, elevation: Real32, distance: Real32) -> Self {
        Polar3 {
            azimuth,
            elevation,
            distance,
        }
    }
}

impl Add for Polar3 {
    type Output = Polar3;
    fn add(self, v: Polar3) -> Polar3 {
        Polar3::new(
            self.azimuth + v.azimuth,
            self.elevation + v.elevation,
            self.distance + v.distance,
        )
    }
}

impl Sub for Polar3 {
    type Output = Polar3;
    fn sub(self, v: Polar3) -> Polar3 {
        Polar3::new(
            self.azimuth - v.azimuth,
            self.elevation - v.elevation,
            self.distance - v.distance,
        )
    }
}

impl Mul for Polar3 {
    type Output = Polar3;
    fn mul(self, v: Polar3) -> Polar3 {
        Polar3::new(
            self.azimuth * v.azimuth,
            self.elevation * v.elevation,
            self.distance * v.distance,
        )
    }
}

impl Div for Polar3 {
    type Output = Polar3;
    fn div(self, v: Polar3) -> Polar3 {
        Polar3::new(
            self.azimuth / v.azimuth,
            self.elevation / v.elevation,
            self.distance / v.distance,
        )
    }
}

impl Add<Real32> for Polar3 {
    type Output = Polar3;
    fn add(self, a: Real32) -> Polar3 {
        Polar3::new(self.azimuth + a, self.elevation + a, self.distance + a)
    }
}

impl Sub<Real32> for Polar3 {
    type Output = Polar3;
    fn sub(self, a: Real32) -> Polar3 {
        Polar3::new(self.azimuth - a, self.elevation - a, self.distance - a)
    }
}

impl Mul<Real32> for Polar3 {
    type Output = Polar3;
    fn mul(self, a: Real32) -> Polar3 {
        Polar3::new(self.azimuth * a, self.elevation * a, self.distance * a)
    }
}

impl Div<Real32> for Polar3 {
    type Output = Polar3;
    fn div(self, a: Real32) -> Polar3 {
        Polar3::new(self.azimuth / a, self.elevation / a, self.distance / a)
    }
}

impl AddAssign for Polar3 {
    fn add_assign(&mut self, v: Polar3) {
        *self = *self + v;
    }
}

impl SubAssign for Polar3 {
    fn sub_assign(&mut self, v: Polar3) {
        *self = *self - v;
    }
}

impl MulAssign for Polar3 {
    fn mul_assign(&mut self, v: Polar3) {
        *self = *self * v;
    }
}

impl DivAssign for Polar3 {
    fn div_assign(&mut self, v: Polar3) {
        *self = *self / v;
    }
}

impl Neg for Polar3 {
    type Output = Polar3;
    fn neg(self) -> Polar3 {
        Polar3::new(-self.azimuth, -self.elevation, -self.distance)
    }
}

impl Index<usize> for Polar3 {
    type Output = Real32;
    fn index(&self, idx: usize) -> &Real32 {
        match idx {
            0 => &self.azimuth,
            1 => &self.elevation,
            2 => &self.distance,
            _ => panic!("Polar3 index out of range: {idx}"),
        }
    }
}

impl IndexMut<usize> for Polar3 {
    fn index_mut(&mut self, idx: usize) -> &mut Real32 {
        match idx {
            0 => &mut self.azimuth,
            1 => &mut self.elevation,
            2 => &mut self.distance,
            _ => panic!("Polar3 index out of range: {idx}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_componentwise_algebra() {
        let a = Polar3::new(0.5, 0.25, 2.0);
        let b = Polar3::new(0.5, -0.25, 1.0);

        assert_eq!(a + b, Polar3::new(1.0, 0.0, 3.0));
        assert_eq!(a - b, Polar3::new(0.0, 0.5, 1.0));
        assert_eq!(a * 2.0, Polar3::new(1.0, 0.5, 4.0));
        assert_eq!(-a, Polar3::new(-0.5, -0.25, -2.0));
    }

    #[test]
    fn test_indexing_matches_fields() {
        let p = Polar3::new(1.0, 2.0, 3.0);
        assert_eq!(p[0], p.azimuth);
        assert_eq!(p[1], p.elevation);
        assert_eq!(p[2], p.distance);
    }

    #[test]
    fn test_interpolation_use_case() {
        // Midpoint of two polar positions, the intended use of the mixed operators
        let from = Polar3::new(0.0, 0.0, 1.0);
        let to = Polar3::new(1.0, 0.5, 3.0);
        let mid = (from + to) * 0.5;
        assert_eq!(mid, Polar3::new(0.5, 0.25, 2.0));
    }
}
