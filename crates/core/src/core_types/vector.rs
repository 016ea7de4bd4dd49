//! Rectangular 3D position type used for source and listener placement.

use crate::core_types::numeric::Real32;
use serde::{Deserialize, Serialize};
use std::ops::{
    Add, AddAssign, Div, DivAssign, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign,
};

/// Rectangular 3D vector, meters.
///
/// Axis convention (binding contract with the HRTF-lookup/panning subsystem):
/// x = right(+) / left(−), y = up(+) / down(−), z = front(+) / rear(−).
///
/// Plain value type with componentwise algebra. Equality is exact
/// floating-point comparison; callers needing tolerance compare magnitudes
/// of differences instead.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Vector3 {
    pub x: Real32,
    pub y: Real32,
    pub z: Real32,
}

impl Vector3 {
    pub const fn new(x: Real32, y: Real32, z: Real32) -> Self {
        Vector3 { x, y, z }
    }

    /// Unit vector pointing right of the listener
    pub const fn direction_right() -> Self {
        Vector3::new(1.0, 0.0, 0.0)
    }

    /// Unit vector pointing up
    pub const fn direction_up() -> Self {
        Vector3::new(0.0, 1.0, 0.0)
    }

    /// Unit vector pointing in front of the listener
    pub const fn direction_front() -> Self {
        Vector3::new(0.0, 0.0, 1.0)
    }

    /// Cross product, right-handed in this axis convention
    pub fn cross(&self, v: &Vector3) -> Vector3 {
        Vector3::new(
            self.y * v.z - self.z * v.y,
            self.z * v.x - self.x * v.z,
            self.x * v.y - self.y * v.x,
        )
    }
}

impl Add for Vector3 {
    type Output = Vector3;
    fn add(self, v: Vector3) -> Vector3 {
        Vector3::new(self.x + v.x, self.y + v.y, self.z + v.z)
    }
}

impl Sub for Vector3 {
    type Output = Vector3;
    fn sub(self, v: Vector3) -> Vector3 {
        Vector3::new(self.x - v.x, self.y - v.y, self.z - v.z)
    }
}

impl Mul for Vector3 {
    type Output = Vector3;
    fn mul(self, v: Vector3) -> Vector3 {
        Vector3::new(self.x * v.x, self.y * v.y, self.z * v.z)
    }
}

impl Div for Vector3 {
    type Output = Vector3;
    fn div(self, v: Vector3) -> Vector3 {
        Vector3::new(self.x / v.x, self.y / v.y, self.z / v.z)
    }
}

impl Add<Real32> for Vector3 {
    type Output = Vector3;
    fn add(self, a: Real32) -> Vector3 {
        Vector3::new(self.x + a, self.y + a, self.z + a)
    }
}

impl Sub<Real32> for Vector3 {
    type Output = Vector3;
    fn sub(self, a: Real32) -> Vector3 {
        Vector3::new(self.x - a, self.y - a, self.z - a)
    }
}

impl Mul<Real32> for Vector3 {
    type Output = Vector3;
    fn mul(self, a: Real32) -> Vector3 {
        Vector3::new(self.x * a, self.y * a, self.z * a)
    }
}

impl Div<Real32> for Vector3 {
    type Output = Vector3;
    fn div(self, a: Real32) -> Vector3 {
        Vector3::new(self.x / a, self.y / a, self.z / a)
    }
}

impl AddAssign for Vector3 {
    fn add_assign(&mut self, v: Vector3) {
        *self = *self + v;
    }
}

impl SubAssign for Vector3 {
    fn sub_assign(&mut self, v: Vector3) {
        *self = *self - v;
    }
}

impl MulAssign for Vector3 {
    fn mul_assign(&mut self, v: Vector3) {
        *self = *self * v;
    }
}

impl DivAssign for Vector3 {
    fn div_assign(&mut self, v: Vector3) {
        *self = *self / v;
    }
}

impl Neg for Vector3 {
    type Output = Vector3;
    fn neg(self) -> Vector3 {
        Vector3::new(-self.x, -self.y, -self.z)
    }
}

impl Index<usize> for Vector3 {
    type Output = Real32;
    fn index(&self, idx: usize) -> &Real32 {
        match idx {
            0 => &self.x,
            1 => &self.y,
            2 => &self.z,
            _ => panic!("Vector3 index out of range: {idx}"),
        }
    }
}

impl IndexMut<usize> for Vector3 {
    fn index_mut(&mut self, idx: usize) -> &mut Real32 {
        match idx {
            0 => &mut self.x,
            1 => &mut self.y,
            2 => &mut self.z,
            _ => panic!("Vector3 index out of range: {idx}"),
        }
    }
}

// Interop with the ecosystem vector type so Rust hosts can pass
// nalgebra positions straight into the coordinate math.
impl From<nalgebra::Vector3<f32>> for Vector3 {
    fn from(v: nalgebra::Vector3<f32>) -> Self {
        Vector3::new(v.x, v.y, v.z)
    }
}

impl From<Vector3> for nalgebra::Vector3<f32> {
    fn from(v: Vector3) -> Self {
        nalgebra::Vector3::new(v.x, v.y, v.z)
    }
}
