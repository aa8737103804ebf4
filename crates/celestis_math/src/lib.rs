//! Vectors, quaternions and axis-angle rotations.

#[macro_use]
mod macros;

pub mod error;
pub mod num;
pub mod quaternion;
pub mod rotation;
pub mod serialization;
pub mod unit;
pub mod vector;

pub use error::{MathError, Result};
pub use quaternion::Quaternion;
pub use rotation::Rotation;
pub use serialization::{AnyVector, parse_any};
pub use vector::{Vector, Vector2, Vector3, Vector4};
