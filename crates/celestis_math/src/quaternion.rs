//! Quaternions.

use crate::{
    error::{MathError, Result},
    num::{self, inverse_sqrt},
    rotation::Rotation,
    vector::{Vector, Vector3, Vector4},
};

/// A quaternion `w + xi + yj + zk` with finite components.
///
/// Quaternions of unit length represent rotations. Unit length is not
/// enforced; [`Self::scale`] and [`Self::rotation`] assume it.
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "[f64; 4]", into = "[f64; 4]")
)]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Quaternion {
    w: f64,
    x: f64,
    y: f64,
    z: f64,
}

impl Quaternion {
    /// The quaternion representing no rotation.
    pub const IDENTITY: Self = Self::new_unchecked(1.0, 0.0, 0.0, 0.0);

    /// Creates a new quaternion with the given scalar part `w` and vector
    /// part `(x, y, z)`.
    ///
    /// # Errors
    /// Returns [`MathError::InvalidArgument`] if any component is not finite.
    #[inline]
    pub fn new(w: f64, x: f64, y: f64, z: f64) -> Result<Self> {
        Ok(Self::new_unchecked(
            num::require_finite(w)?,
            num::require_finite(x)?,
            num::require_finite(y)?,
            num::require_finite(z)?,
        ))
    }

    /// Creates a new quaternion from the given scalar and vector parts.
    ///
    /// # Errors
    /// Returns [`MathError::InvalidArgument`] if `w` is not finite.
    #[inline]
    pub fn from_parts(w: f64, vector: &Vector3) -> Result<Self> {
        Ok(Self::new_unchecked(
            num::require_finite(w)?,
            vector.x(),
            vector.y(),
            vector.z(),
        ))
    }

    /// Creates the pure quaternion `(0, x, y, z)` for the given vector.
    #[inline]
    pub const fn from_imag(vector: &Vector3) -> Self {
        Self::new_unchecked(0.0, vector.x(), vector.y(), vector.z())
    }

    /// Reinterprets the components of a 4D vector as a quaternion.
    #[inline]
    pub const fn from_vector4(vector: &Vector4) -> Self {
        Self::new_unchecked(vector.w(), vector.x(), vector.y(), vector.z())
    }

    /// The components of the quaternion as a 4D vector.
    #[inline]
    pub const fn to_vector4(&self) -> Vector4 {
        Vector4::new_unchecked(self.w, self.x, self.y, self.z)
    }

    /// The scalar part.
    #[inline]
    pub const fn w(&self) -> f64 {
        self.w
    }

    #[inline]
    pub const fn x(&self) -> f64 {
        self.x
    }

    #[inline]
    pub const fn y(&self) -> f64 {
        self.y
    }

    #[inline]
    pub const fn z(&self) -> f64 {
        self.z
    }

    /// The vector part `(x, y, z)`.
    #[inline]
    pub const fn vector(&self) -> Vector3 {
        Vector3::new_unchecked(self.x, self.y, self.z)
    }

    /// Adds another quaternion component-wise.
    #[inline]
    pub fn add(&self, other: &Self) -> Result<Self> {
        Self::new(
            self.w + other.w,
            self.x + other.x,
            self.y + other.y,
            self.z + other.z,
        )
    }

    /// Subtracts another quaternion component-wise.
    #[inline]
    pub fn subtract(&self, other: &Self) -> Result<Self> {
        Self::new(
            self.w - other.w,
            self.x - other.x,
            self.y - other.y,
            self.z - other.z,
        )
    }

    /// Computes the Hamilton product `self * other`.
    ///
    /// For rotation quaternions the result applies `other` first and `self`
    /// second.
    #[inline]
    pub fn multiply_quaternion(&self, other: &Self) -> Result<Self> {
        let (w1, x1, y1, z1) = (self.w, self.x, self.y, self.z);
        let (w2, x2, y2, z2) = (other.w, other.x, other.y, other.z);

        // w1 w2 - v1.v2, w1 v2 + w2 v1 + v1 x v2
        Self::new(
            w1 * w2 - (x1 * x2 + y1 * y2 + z1 * z2),
            w1 * x2 + w2 * x1 + (y1 * z2 - z1 * y2),
            w1 * y2 + w2 * y1 + (z1 * x2 - x1 * z2),
            w1 * z2 + w2 * z1 + (x1 * y2 - y1 * x2),
        )
    }

    /// Negates the vector part.
    #[inline]
    pub fn conjugate(&self) -> Self {
        Self::new_unchecked(self.w, -self.x, -self.y, -self.z)
    }

    /// The conjugate scaled by the inverse magnitude. Equal to the conjugate
    /// for unit quaternions.
    #[inline]
    pub fn inverse(&self) -> Result<Self> {
        self.conjugate().multiply(inverse_sqrt(self.magnitude2()))
    }

    /// Scales the rotation angle of this rotation quaternion by `s`.
    ///
    /// This is not a component-wise scaling; use [`Vector::multiply`] for
    /// that.
    ///
    /// # Errors
    /// Returns [`MathError::InvalidArgument`] if `w` lies outside `[-1, 1]`,
    /// since the half angle is then undefined.
    pub fn scale(&self, s: f64) -> Result<Self> {
        if self.w == 1.0 {
            return Ok(Self::IDENTITY);
        }

        let half_angle = self.w.acos();
        let (sin_scaled, cos_scaled) = (half_angle * s).sin_cos();

        let axis = self.vector().divide(half_angle.sin())?;
        Self::from_parts(cos_scaled, &axis.multiply(sin_scaled)?)
    }

    /// Converts this rotation quaternion to axis-angle form.
    ///
    /// The axis of the returned rotation is not normalized, but
    /// [`Rotation::axis`] normalizes on read. A zero angle gives
    /// [`Rotation::NO_ROTATION`].
    pub fn rotation(&self) -> Result<Rotation> {
        let angle = 2.0 * self.w.acos();
        if angle == 0.0 {
            return Ok(Rotation::NO_ROTATION);
        }

        let axis = self.vector().divide(angle / 2.0)?;
        Rotation::from_axis_angle(&axis, angle)
    }

    const fn new_unchecked(w: f64, x: f64, y: f64, z: f64) -> Self {
        Self { w, x, y, z }
    }
}

impl_vector_componentwise!(Quaternion, w, x, y, z);

impl_binop!(Add, add, Quaternion, Quaternion, Result<Quaternion>, |a, b| {
    Quaternion::add(a, b)
});

impl_binop!(Sub, sub, Quaternion, Quaternion, Result<Quaternion>, |a, b| {
    Quaternion::subtract(a, b)
});

impl_binop!(Mul, mul, Quaternion, Quaternion, Result<Quaternion>, |a, b| {
    a.multiply_quaternion(b)
});

impl From<Vector4> for Quaternion {
    #[inline]
    fn from(vector: Vector4) -> Self {
        Self::from_vector4(&vector)
    }
}

impl From<Quaternion> for Vector4 {
    #[inline]
    fn from(quaternion: Quaternion) -> Self {
        quaternion.to_vector4()
    }
}

impl TryFrom<[f64; 4]> for Quaternion {
    type Error = MathError;

    #[inline]
    fn try_from([w, x, y, z]: [f64; 4]) -> Result<Self> {
        Self::new(w, x, y, z)
    }
}

impl From<Quaternion> for [f64; 4] {
    #[inline]
    fn from(quaternion: Quaternion) -> Self {
        [quaternion.w, quaternion.x, quaternion.y, quaternion.z]
    }
}
