//! Core value types: platform numeric aliases and the two spatial
//! coordinate representations.

pub mod numeric;
pub mod polar;
pub mod vector;

pub use numeric::{Real32, Real64, DEG2RAD, PI, RAD2DEG, SPEED_OF_SOUND};
pub use polar::Polar3;
pub use vector::Vector3;
