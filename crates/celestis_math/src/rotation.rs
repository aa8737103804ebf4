//! Axis-angle rotations.

use crate::{
    error::{MathError, Result},
    num,
    quaternion::Quaternion,
    vector::{Vector, Vector3, Vector4},
};

/// A rotation by an angle in radians about an axis, following the right-hand
/// rule.
///
/// The axis is stored as given and normalized whenever it is read through
/// [`Self::axis`], so it does not need to have unit length.
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "[f64; 4]", into = "[f64; 4]")
)]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rotation {
    angle: f64,
    x: f64,
    y: f64,
    z: f64,
}

impl Rotation {
    /// A zero angle about the y-axis.
    pub const NO_ROTATION: Self = Self::new_unchecked(0.0, 0.0, 1.0, 0.0);

    /// Creates a rotation by `angle` radians about the axis `(x, y, z)`.
    ///
    /// # Errors
    /// Returns [`MathError::InvalidArgument`] if any value is not finite.
    #[inline]
    pub fn new(angle: f64, x: f64, y: f64, z: f64) -> Result<Self> {
        Ok(Self::new_unchecked(
            num::require_finite(angle)?,
            num::require_finite(x)?,
            num::require_finite(y)?,
            num::require_finite(z)?,
        ))
    }

    /// Creates a rotation by `angle` radians about the given axis.
    ///
    /// # Errors
    /// Returns [`MathError::InvalidArgument`] if the angle is not finite.
    #[inline]
    pub fn from_axis_angle(axis: &Vector3, angle: f64) -> Result<Self> {
        Ok(Self::new_unchecked(
            num::require_finite(angle)?,
            axis.x(),
            axis.y(),
            axis.z(),
        ))
    }

    /// Reinterprets a 4D vector as a rotation, with `w` as the angle.
    #[inline]
    pub const fn from_vector4(vector: &Vector4) -> Self {
        Self::new_unchecked(vector.w(), vector.x(), vector.y(), vector.z())
    }

    /// The stored values as a 4D vector, with the angle as `w`.
    #[inline]
    pub const fn to_vector4(&self) -> Vector4 {
        Vector4::new_unchecked(self.angle, self.x, self.y, self.z)
    }

    /// The rotation angle in radians.
    #[inline]
    pub const fn angle(&self) -> f64 {
        self.angle
    }

    /// The rotation angle in degrees.
    #[inline]
    pub fn degrees(&self) -> f64 {
        self.angle.to_degrees()
    }

    /// The x-component of the stored axis.
    #[inline]
    pub const fn x(&self) -> f64 {
        self.x
    }

    /// The y-component of the stored axis.
    #[inline]
    pub const fn y(&self) -> f64 {
        self.y
    }

    /// The z-component of the stored axis.
    #[inline]
    pub const fn z(&self) -> f64 {
        self.z
    }

    /// The normalized rotation axis.
    #[inline]
    pub fn axis(&self) -> Result<Vector3> {
        Vector3::new_unchecked(self.x, self.y, self.z).normalize()
    }

    /// Converts the rotation to the unit quaternion
    /// `(cos(angle/2), axis * sin(angle/2))`.
    pub fn quaternion(&self) -> Result<Quaternion> {
        let (sin, cos) = (0.5 * self.angle).sin_cos();
        Quaternion::from_parts(cos, &self.axis()?.multiply(sin)?)
    }

    /// Applies `other` after this rotation.
    #[inline]
    pub fn rotate(&self, other: &Self) -> Result<Self> {
        self.rotate_by_quaternion(&other.quaternion()?)
    }

    /// Applies the given rotation quaternion after this rotation.
    pub fn rotate_by_quaternion(&self, quaternion: &Quaternion) -> Result<Self> {
        quaternion
            .multiply_quaternion(&self.quaternion()?)?
            .rotation()
    }

    /// Multiplies the angle by `s`, keeping the axis.
    ///
    /// Unlike [`Quaternion::scale`], the angle is scaled directly rather than
    /// recovered through `acos`, so the two only agree up to rounding.
    #[inline]
    pub fn scale(&self, s: f64) -> Result<Self> {
        Self::new(self.angle * s, self.x, self.y, self.z)
    }

    const fn new_unchecked(angle: f64, x: f64, y: f64, z: f64) -> Self {
        Self { angle, x, y, z }
    }
}

impl From<Vector4> for Rotation {
    #[inline]
    fn from(vector: Vector4) -> Self {
        Self::from_vector4(&vector)
    }
}

impl From<Rotation> for Vector4 {
    #[inline]
    fn from(rotation: Rotation) -> Self {
        rotation.to_vector4()
    }
}

impl TryFrom<[f64; 4]> for Rotation {
    type Error = MathError;

    #[inline]
    fn try_from([angle, x, y, z]: [f64; 4]) -> Result<Self> {
        Self::new(angle, x, y, z)
    }
}

impl From<Rotation> for [f64; 4] {
    #[inline]
    fn from(rotation: Rotation) -> Self {
        [rotation.angle, rotation.x, rotation.y, rotation.z]
    }
}

impl_abs_diff_eq!(Rotation, |a, b, epsilon| {
    a.angle.abs_diff_eq(&b.angle, epsilon)
        && a.x.abs_diff_eq(&b.x, epsilon)
        && a.y.abs_diff_eq(&b.y, epsilon)
        && a.z.abs_diff_eq(&b.z, epsilon)
});

impl_relative_eq!(Rotation, |a, b, epsilon, max_relative| {
    a.angle.relative_eq(&b.angle, epsilon, max_relative)
        && a.x.relative_eq(&b.x, epsilon, max_relative)
        && a.y.relative_eq(&b.y, epsilon, max_relative)
        && a.z.relative_eq(&b.z, epsilon, max_relative)
});
