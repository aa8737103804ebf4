//! Vectors.

use crate::{
    error::{MathError, Result},
    num::{self, inverse_sqrt},
    quaternion::Quaternion,
    rotation::Rotation,
};
use std::{fmt, str::FromStr};

/// Operations shared by all fixed-dimension vector types.
///
/// Every operation returns a new value. Operations that can produce a
/// non-finite component fail with [`MathError::InvalidArgument`], since every
/// implementor only ever holds finite components.
pub trait Vector: Copy + PartialEq + fmt::Debug + fmt::Display + FromStr<Err = MathError> {
    /// Adds the given scalar to each component.
    fn add_scalar(&self, s: f64) -> Result<Self>;

    /// Subtracts the given scalar from each component.
    fn subtract_scalar(&self, s: f64) -> Result<Self>;

    /// Multiplies each component by the given scalar.
    fn multiply(&self, s: f64) -> Result<Self>;

    /// Divides each component by the given scalar.
    ///
    /// # Errors
    /// Returns [`MathError::DivisionByZero`] if `s` is zero.
    fn divide(&self, s: f64) -> Result<Self>;

    /// The squared magnitude. Prefer this over [`Self::magnitude`] when only
    /// comparing lengths.
    fn magnitude2(&self) -> f64;

    /// Multiplies each component by -1.
    fn negate(&self) -> Self;

    /// The magnitude (length), computed through the fast inverse square
    /// root. Zero for the zero vector.
    #[inline]
    fn magnitude(&self) -> f64 {
        num::magnitude_from_squared(self.magnitude2())
    }

    /// Scales the vector to unit length. The zero vector normalizes to
    /// itself.
    #[inline]
    fn normalize(&self) -> Result<Self> {
        self.multiply(inverse_sqrt(self.magnitude2()))
    }

    /// Parses the textual representation produced by [`fmt::Display`].
    #[inline]
    fn parse(s: &str) -> Result<Self> {
        s.parse()
    }
}

/// A 2-dimensional vector with finite components.
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "[f64; 2]", into = "[f64; 2]")
)]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Vector2 {
    x: f64,
    y: f64,
}

/// A 3-dimensional vector with finite components.
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "[f64; 3]", into = "[f64; 3]")
)]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Vector3 {
    x: f64,
    y: f64,
    z: f64,
}

/// A 4-dimensional vector with finite components.
///
/// [`Quaternion`] and [`Rotation`] use the same component layout, and can be
/// converted to and from this type without loss.
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "[f64; 4]", into = "[f64; 4]")
)]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Vector4 {
    w: f64,
    x: f64,
    y: f64,
    z: f64,
}

impl Vector2 {
    pub const ZERO: Self = Self::new_unchecked(0.0, 0.0);
    pub const POSITIVE_X: Self = Self::new_unchecked(1.0, 0.0);
    pub const POSITIVE_Y: Self = Self::new_unchecked(0.0, 1.0);
    pub const NEGATIVE_X: Self = Self::new_unchecked(-1.0, 0.0);
    pub const NEGATIVE_Y: Self = Self::new_unchecked(0.0, -1.0);

    /// Creates a new vector with the given components.
    ///
    /// # Errors
    /// Returns [`MathError::InvalidArgument`] if any component is not finite.
    #[inline]
    pub fn new(x: f64, y: f64) -> Result<Self> {
        Ok(Self::new_unchecked(
            num::require_finite(x)?,
            num::require_finite(y)?,
        ))
    }

    /// The x-component.
    #[inline]
    pub const fn x(&self) -> f64 {
        self.x
    }

    /// The y-component.
    #[inline]
    pub const fn y(&self) -> f64 {
        self.y
    }

    /// Adds another vector component-wise.
    #[inline]
    pub fn add(&self, other: &Self) -> Result<Self> {
        Self::new(self.x + other.x, self.y + other.y)
    }

    /// Subtracts another vector component-wise.
    #[inline]
    pub fn subtract(&self, other: &Self) -> Result<Self> {
        Self::new(self.x - other.x, self.y - other.y)
    }

    /// Computes the dot product of this vector with another.
    #[inline]
    pub fn dot(&self, other: &Self) -> f64 {
        self.x * other.x + self.y * other.y
    }

    /// Multiplies this vector with another as if both were complex numbers
    /// `x + iy`.
    #[inline]
    pub fn multiply_vector(&self, other: &Self) -> Result<Self> {
        Self::new(
            self.x * other.x - self.y * other.y,
            self.x * other.y + self.y * other.x,
        )
    }

    /// Rotates the vector counter-clockwise by the given angle in radians.
    #[inline]
    pub fn rotate(&self, angle: f64) -> Result<Self> {
        let (sin, cos) = angle.sin_cos();
        self.multiply_vector(&Self::new(cos, sin)?)
    }

    /// The distance between the points this and the given vector point to.
    #[inline]
    pub fn distance(&self, other: &Self) -> Result<f64> {
        Ok(self.subtract(other)?.magnitude())
    }

    /// The squared distance between the points this and the given vector
    /// point to.
    #[inline]
    pub fn distance2(&self, other: &Self) -> Result<f64> {
        Ok(self.subtract(other)?.magnitude2())
    }

    const fn new_unchecked(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl_vector_componentwise!(Vector2, x, y);

impl_binop!(Add, add, Vector2, Vector2, Result<Vector2>, |a, b| {
    Vector2::add(a, b)
});

impl_binop!(Sub, sub, Vector2, Vector2, Result<Vector2>, |a, b| {
    Vector2::subtract(a, b)
});

impl TryFrom<[f64; 2]> for Vector2 {
    type Error = MathError;

    #[inline]
    fn try_from([x, y]: [f64; 2]) -> Result<Self> {
        Self::new(x, y)
    }
}

impl From<Vector2> for [f64; 2] {
    #[inline]
    fn from(vector: Vector2) -> Self {
        [vector.x, vector.y]
    }
}

impl Vector3 {
    pub const ZERO: Self = Self::new_unchecked(0.0, 0.0, 0.0);
    pub const POSITIVE_X: Self = Self::new_unchecked(1.0, 0.0, 0.0);
    pub const POSITIVE_Y: Self = Self::new_unchecked(0.0, 1.0, 0.0);
    pub const POSITIVE_Z: Self = Self::new_unchecked(0.0, 0.0, 1.0);
    pub const NEGATIVE_X: Self = Self::new_unchecked(-1.0, 0.0, 0.0);
    pub const NEGATIVE_Y: Self = Self::new_unchecked(0.0, -1.0, 0.0);
    pub const NEGATIVE_Z: Self = Self::new_unchecked(0.0, 0.0, -1.0);

    /// Creates a new vector with the given components.
    ///
    /// # Errors
    /// Returns [`MathError::InvalidArgument`] if any component is not finite.
    #[inline]
    pub fn new(x: f64, y: f64, z: f64) -> Result<Self> {
        Ok(Self::new_unchecked(
            num::require_finite(x)?,
            num::require_finite(y)?,
            num::require_finite(z)?,
        ))
    }

    /// The x-component.
    #[inline]
    pub const fn x(&self) -> f64 {
        self.x
    }

    /// The y-component.
    #[inline]
    pub const fn y(&self) -> f64 {
        self.y
    }

    /// The z-component.
    #[inline]
    pub const fn z(&self) -> f64 {
        self.z
    }

    /// Adds another vector component-wise.
    #[inline]
    pub fn add(&self, other: &Self) -> Result<Self> {
        Self::new(self.x + other.x, self.y + other.y, self.z + other.z)
    }

    /// Subtracts another vector component-wise.
    #[inline]
    pub fn subtract(&self, other: &Self) -> Result<Self> {
        Self::new(self.x - other.x, self.y - other.y, self.z - other.z)
    }

    /// Computes the dot product of this vector with another.
    #[inline]
    pub fn dot(&self, other: &Self) -> f64 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Computes the right-handed cross product of this vector with another.
    #[inline]
    pub fn cross(&self, other: &Self) -> Result<Self> {
        Self::new(
            self.y * other.z - self.z * other.y,
            self.z * other.x - self.x * other.z,
            self.x * other.y - self.y * other.x,
        )
    }

    /// The distance between the points this and the given vector point to.
    #[inline]
    pub fn distance(&self, other: &Self) -> Result<f64> {
        Ok(self.subtract(other)?.magnitude())
    }

    /// The squared distance between the points this and the given vector
    /// point to.
    #[inline]
    pub fn distance2(&self, other: &Self) -> Result<f64> {
        Ok(self.subtract(other)?.magnitude2())
    }

    /// Embeds the vector as the pure quaternion `(0, x, y, z)`.
    #[inline]
    pub fn quaternion(&self) -> Quaternion {
        Quaternion::from_imag(self)
    }

    /// Rotates the vector by the given rotation.
    #[inline]
    pub fn rotate(&self, rotation: &Rotation) -> Result<Self> {
        self.rotate_by_quaternion(&rotation.quaternion()?)
    }

    /// Rotates the vector by the given rotation quaternion using the sandwich
    /// product `q * v * q*`.
    ///
    /// The quaternion is assumed to have unit length.
    #[inline]
    pub fn rotate_by_quaternion(&self, quaternion: &Quaternion) -> Result<Self> {
        Ok(quaternion
            .multiply_quaternion(&self.quaternion())?
            .multiply_quaternion(&quaternion.conjugate())?
            .vector())
    }

    pub(crate) const fn new_unchecked(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }
}

impl_vector_componentwise!(Vector3, x, y, z);

impl_binop!(Add, add, Vector3, Vector3, Result<Vector3>, |a, b| {
    Vector3::add(a, b)
});

impl_binop!(Sub, sub, Vector3, Vector3, Result<Vector3>, |a, b| {
    Vector3::subtract(a, b)
});

impl TryFrom<[f64; 3]> for Vector3 {
    type Error = MathError;

    #[inline]
    fn try_from([x, y, z]: [f64; 3]) -> Result<Self> {
        Self::new(x, y, z)
    }
}

impl From<Vector3> for [f64; 3] {
    #[inline]
    fn from(vector: Vector3) -> Self {
        [vector.x, vector.y, vector.z]
    }
}

impl Vector4 {
    pub const ZERO: Self = Self::new_unchecked(0.0, 0.0, 0.0, 0.0);
    pub const POSITIVE_W: Self = Self::new_unchecked(1.0, 0.0, 0.0, 0.0);
    pub const POSITIVE_X: Self = Self::new_unchecked(0.0, 1.0, 0.0, 0.0);
    pub const POSITIVE_Y: Self = Self::new_unchecked(0.0, 0.0, 1.0, 0.0);
    pub const POSITIVE_Z: Self = Self::new_unchecked(0.0, 0.0, 0.0, 1.0);
    pub const NEGATIVE_W: Self = Self::new_unchecked(-1.0, 0.0, 0.0, 0.0);
    pub const NEGATIVE_X: Self = Self::new_unchecked(0.0, -1.0, 0.0, 0.0);
    pub const NEGATIVE_Y: Self = Self::new_unchecked(0.0, 0.0, -1.0, 0.0);
    pub const NEGATIVE_Z: Self = Self::new_unchecked(0.0, 0.0, 0.0, -1.0);

    /// Creates a new vector with the given components.
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

    /// The w-component.
    #[inline]
    pub const fn w(&self) -> f64 {
        self.w
    }

    /// The x-component.
    #[inline]
    pub const fn x(&self) -> f64 {
        self.x
    }

    /// The y-component.
    #[inline]
    pub const fn y(&self) -> f64 {
        self.y
    }

    /// The z-component.
    #[inline]
    pub const fn z(&self) -> f64 {
        self.z
    }

    /// Adds another vector component-wise.
    #[inline]
    pub fn add(&self, other: &Self) -> Result<Self> {
        Self::new(
            self.w + other.w,
            self.x + other.x,
            self.y + other.y,
            self.z + other.z,
        )
    }

    /// Subtracts another vector component-wise.
    #[inline]
    pub fn subtract(&self, other: &Self) -> Result<Self> {
        Self::new(
            self.w - other.w,
            self.x - other.x,
            self.y - other.y,
            self.z - other.z,
        )
    }

    /// The distance between the points this and the given vector point to.
    #[inline]
    pub fn distance(&self, other: &Self) -> Result<f64> {
        Ok(self.subtract(other)?.magnitude())
    }

    /// The squared distance between the points this and the given vector
    /// point to.
    #[inline]
    pub fn distance2(&self, other: &Self) -> Result<f64> {
        Ok(self.subtract(other)?.magnitude2())
    }

    pub(crate) const fn new_unchecked(w: f64, x: f64, y: f64, z: f64) -> Self {
        Self { w, x, y, z }
    }
}

impl_vector_componentwise!(Vector4, w, x, y, z);

impl_binop!(Add, add, Vector4, Vector4, Result<Vector4>, |a, b| {
    Vector4::add(a, b)
});

impl_binop!(Sub, sub, Vector4, Vector4, Result<Vector4>, |a, b| {
    Vector4::subtract(a, b)
});

impl TryFrom<[f64; 4]> for Vector4 {
    type Error = MathError;

    #[inline]
    fn try_from([w, x, y, z]: [f64; 4]) -> Result<Self> {
        Self::new(w, x, y, z)
    }
}

impl From<Vector4> for [f64; 4] {
    #[inline]
    fn from(vector: Vector4) -> Self {
        [vector.w, vector.x, vector.y, vector.z]
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::op_ref)]

    use super::*;
    use approx::{assert_abs_diff_eq, assert_relative_eq};
    use proptest::prelude::*;
    use std::f64::consts::{FRAC_PI_2, PI};

    const EPSILON: f64 = 1e-12;
    const MAX_RELATIVE: f64 = 1e-10;

    fn vector3_strategy() -> impl Strategy<Value = Vector3> {
        (-1e3..1e3_f64, -1e3..1e3_f64, -1e3..1e3_f64)
            .prop_map(|(x, y, z)| Vector3::new(x, y, z).unwrap())
    }

    // === Construction ===

    #[test]
    fn creating_vectors_with_finite_components_works() {
        let v2 = Vector2::new(1.0, 2.0).unwrap();
        assert_eq!((v2.x(), v2.y()), (1.0, 2.0));

        let v3 = Vector3::new(1.0, 2.0, 3.0).unwrap();
        assert_eq!((v3.x(), v3.y(), v3.z()), (1.0, 2.0, 3.0));

        let v4 = Vector4::new(4.0, 1.0, 2.0, 3.0).unwrap();
        assert_eq!((v4.w(), v4.x(), v4.y(), v4.z()), (4.0, 1.0, 2.0, 3.0));
    }

    #[test]
    fn creating_vectors_with_non_finite_components_fails() {
        assert!(matches!(
            Vector2::new(f64::NAN, 0.0),
            Err(MathError::InvalidArgument(_))
        ));
        assert!(matches!(
            Vector3::new(0.0, f64::INFINITY, 0.0),
            Err(MathError::InvalidArgument(_))
        ));
        assert!(matches!(
            Vector4::new(0.0, 0.0, 0.0, f64::NEG_INFINITY),
            Err(MathError::InvalidArgument(_))
        ));
    }

    #[test]
    fn overflowing_arithmetic_fails() {
        let v = Vector2::new(f64::MAX, 0.0).unwrap();
        assert!(matches!(v.multiply(2.0), Err(MathError::InvalidArgument(_))));
        assert!(matches!(v.add(&v), Err(MathError::InvalidArgument(_))));
    }

    #[test]
    fn array_conversions_validate_components() {
        let v = Vector3::try_from([1.0, 2.0, 3.0]).unwrap();
        assert_eq!(<[f64; 3]>::from(v), [1.0, 2.0, 3.0]);
        assert!(Vector4::try_from([0.0, f64::NAN, 0.0, 0.0]).is_err());
    }

    // === Scalar arithmetic ===

    #[test]
    fn scalar_arithmetic_is_componentwise() {
        let v = Vector3::new(1.0, -2.0, 4.0).unwrap();
        assert_eq!(v.add_scalar(1.0).unwrap(), Vector3::new(2.0, -1.0, 5.0).unwrap());
        assert_eq!(v.subtract_scalar(1.0).unwrap(), Vector3::new(0.0, -3.0, 3.0).unwrap());
        assert_eq!(v.multiply(2.0).unwrap(), Vector3::new(2.0, -4.0, 8.0).unwrap());
        assert_eq!(v.divide(2.0).unwrap(), Vector3::new(0.5, -1.0, 2.0).unwrap());
    }

    #[test]
    fn dividing_by_zero_fails() {
        assert_eq!(Vector2::POSITIVE_X.divide(0.0), Err(MathError::DivisionByZero));
        assert_eq!(Vector3::POSITIVE_X.divide(0.0), Err(MathError::DivisionByZero));
        assert_eq!(Vector4::POSITIVE_W.divide(-0.0), Err(MathError::DivisionByZero));
    }

    #[test]
    fn negating_flips_every_component() {
        let v = Vector4::new(1.0, -2.0, 3.0, -4.0).unwrap();
        assert_eq!(v.negate(), Vector4::new(-1.0, 2.0, -3.0, 4.0).unwrap());
        assert_eq!(-v, v.negate());
    }

    #[test]
    fn operators_match_named_methods() {
        let a = Vector2::new(1.0, 2.0).unwrap();
        let b = Vector2::new(3.0, 5.0).unwrap();

        assert_eq!((&a + &b).unwrap(), a.add(&b).unwrap());
        assert_eq!((a - b).unwrap(), a.subtract(&b).unwrap());
        assert_eq!((a * 3.0).unwrap(), a.multiply(3.0).unwrap());
        assert_eq!((&a / 2.0).unwrap(), a.divide(2.0).unwrap());
        assert_eq!(a / 0.0, Err(MathError::DivisionByZero));
    }

    // === Magnitude and normalization ===

    #[test]
    fn computing_vector2_magnitude_works() {
        let v = Vector2::new(3.0, 4.0).unwrap();
        assert_eq!(v.magnitude2(), 25.0);
        assert_relative_eq!(v.magnitude(), 5.0, max_relative = MAX_RELATIVE);
    }

    #[test]
    fn computing_vector4_magnitude_works() {
        let v = Vector4::new(1.0, 1.0, 1.0, 1.0).unwrap();
        assert_eq!(v.magnitude2(), 4.0);
        assert_relative_eq!(v.magnitude(), 2.0, max_relative = MAX_RELATIVE);
    }

    #[test]
    fn zero_vector_has_zero_magnitude() {
        assert_eq!(Vector2::ZERO.magnitude(), 0.0);
        assert_eq!(Vector3::ZERO.magnitude(), 0.0);
        assert_eq!(Vector4::ZERO.magnitude(), 0.0);
    }

    #[test]
    fn normalizing_zero_vector_gives_zero_vector() {
        assert_eq!(Vector2::ZERO.normalize().unwrap(), Vector2::ZERO);
        assert_eq!(Vector3::ZERO.normalize().unwrap(), Vector3::ZERO);
        assert_eq!(Vector4::ZERO.normalize().unwrap(), Vector4::ZERO);
    }

    #[test]
    fn normalizing_vector2_gives_unit_vector() {
        let normalized = Vector2::new(3.0, 4.0).unwrap().normalize().unwrap();
        assert_relative_eq!(normalized.magnitude(), 1.0, max_relative = MAX_RELATIVE);
        assert_abs_diff_eq!(normalized, Vector2::new(0.6, 0.8).unwrap(), epsilon = EPSILON);
    }

    #[test]
    fn distances_use_vector_difference() {
        let a = Vector3::new(1.0, 1.0, 1.0).unwrap();
        let b = Vector3::new(4.0, 5.0, 1.0).unwrap();
        assert_eq!(a.distance2(&b).unwrap(), 25.0);
        assert_relative_eq!(a.distance(&b).unwrap(), 5.0, max_relative = MAX_RELATIVE);
    }

    // === Dimension-specific operations ===

    #[test]
    fn vector2_complex_multiplication_works() {
        let a = Vector2::new(1.0, 2.0).unwrap();
        let b = Vector2::new(3.0, 4.0).unwrap();
        // (1 + 2i)(3 + 4i) = -5 + 10i
        assert_eq!(a.multiply_vector(&b).unwrap(), Vector2::new(-5.0, 10.0).unwrap());
    }

    #[test]
    fn rotating_vector2_is_counter_clockwise() {
        let rotated = Vector2::POSITIVE_X.rotate(FRAC_PI_2).unwrap();
        assert_abs_diff_eq!(rotated, Vector2::POSITIVE_Y, epsilon = EPSILON);

        let rotated = Vector2::POSITIVE_X.rotate(PI).unwrap();
        assert_abs_diff_eq!(rotated, Vector2::NEGATIVE_X, epsilon = EPSILON);
    }

    #[test]
    fn vector3_dot_product_works() {
        let a = Vector3::new(1.0, 2.0, 3.0).unwrap();
        let b = Vector3::new(4.0, -5.0, 6.0).unwrap();
        assert_eq!(a.dot(&b), 12.0);
    }

    #[test]
    fn vector3_cross_product_is_right_handed() {
        let cross = Vector3::POSITIVE_X.cross(&Vector3::POSITIVE_Y).unwrap();
        assert_eq!(cross, Vector3::POSITIVE_Z);

        let cross = Vector3::POSITIVE_Y.cross(&Vector3::POSITIVE_X).unwrap();
        assert_eq!(cross, Vector3::NEGATIVE_Z);
    }

    #[test]
    fn vector3_embeds_as_pure_quaternion() {
        let q = Vector3::new(1.0, 2.0, 3.0).unwrap().quaternion();
        assert_eq!((q.w(), q.x(), q.y(), q.z()), (0.0, 1.0, 2.0, 3.0));
    }

    #[test]
    fn rotating_x_axis_a_quarter_turn_about_z_gives_y_axis() {
        let rotation = Rotation::from_axis_angle(&Vector3::POSITIVE_Z, FRAC_PI_2).unwrap();
        let rotated = Vector3::POSITIVE_X.rotate(&rotation).unwrap();
        assert_abs_diff_eq!(rotated, Vector3::POSITIVE_Y, epsilon = EPSILON);
    }

    #[test]
    fn rotating_by_identity_quaternion_changes_nothing() {
        let v = Vector3::new(1.0, -2.0, 3.0).unwrap();
        let rotated = v.rotate_by_quaternion(&Quaternion::IDENTITY).unwrap();
        assert_eq!(rotated, v);
    }

    proptest! {
        #[test]
        fn normalized_vectors_have_unit_magnitude(v in vector3_strategy()) {
            prop_assume!(v.magnitude2() > 1e-6);
            let magnitude = v.normalize().unwrap().magnitude();
            prop_assert!((magnitude - 1.0).abs() < MAX_RELATIVE);
        }

        #[test]
        fn multiplying_then_dividing_recovers_vector(
            v in vector3_strategy(),
            s in prop_oneof![-1e3..-1e-3_f64, 1e-3..1e3_f64],
        ) {
            let recovered = v.multiply(s).unwrap().divide(s).unwrap();
            prop_assert!(approx::relative_eq!(recovered, v, epsilon = EPSILON, max_relative = 1e-14));
        }

        #[test]
        fn rotation_preserves_magnitude(
            v in vector3_strategy(),
            angle in -10.0..10.0_f64,
            axis in vector3_strategy(),
        ) {
            prop_assume!(axis.magnitude2() > 1e-6);
            let rotation = Rotation::from_axis_angle(&axis, angle).unwrap();
            let rotated = v.rotate(&rotation).unwrap();
            prop_assert!((rotated.magnitude() - v.magnitude()).abs() <= 1e-9 * v.magnitude().max(1.0));
        }

        #[test]
        fn cross_product_is_orthogonal_to_operands(a in vector3_strategy(), b in vector3_strategy()) {
            let cross = a.cross(&b).unwrap();
            let scale = a.magnitude() * b.magnitude() * a.magnitude().max(b.magnitude()).max(1.0);
            prop_assert!(cross.dot(&a).abs() <= 1e-9 * scale);
            prop_assert!(cross.dot(&b).abs() <= 1e-9 * scale);
        }
    }
}
