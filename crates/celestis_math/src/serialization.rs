//! Textual representation of vectors, quaternions and rotations.
//!
//! Every type is written as `TypeName{field=value, ...}` with its fields in a
//! fixed order, and values in the shortest representation that parses back
//! to the same `f64`.

use crate::{
    error::{MathError, Result},
    quaternion::Quaternion,
    rotation::Rotation,
    vector::{Vector2, Vector3, Vector4},
};
use std::{fmt, str::FromStr};

/// One of the types that have a textual representation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum AnyVector {
    Vector2(Vector2),
    Vector3(Vector3),
    Vector4(Vector4),
    Quaternion(Quaternion),
    Rotation(Rotation),
}

/// Parses a string as whichever of [`Vector2`], [`Vector3`], [`Vector4`],
/// [`Quaternion`] and [`Rotation`] it represents, trying them in that order.
///
/// # Errors
/// If a candidate type recognizes the string but its values are invalid,
/// that error is returned immediately. If no candidate recognizes the
/// string, a [`MathError::Format`] error is returned.
pub fn parse_any(s: &str) -> Result<AnyVector> {
    macro_rules! try_candidate {
        ($t:ident) => {
            match s.parse::<$t>() {
                Ok(value) => return Ok(AnyVector::$t(value)),
                Err(error) if error.is_format() => {
                    log::trace!("Not a {}: {}", stringify!($t), error);
                }
                Err(error) => return Err(error),
            }
        };
    }

    try_candidate!(Vector2);
    try_candidate!(Vector3);
    try_candidate!(Vector4);
    try_candidate!(Quaternion);
    try_candidate!(Rotation);

    Err(MathError::Format("String is not a vector".to_string()))
}

impl AnyVector {
    /// The name of the contained type, as used in the textual representation.
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Vector2(_) => "Vector2",
            Self::Vector3(_) => "Vector3",
            Self::Vector4(_) => "Vector4",
            Self::Quaternion(_) => "Quaternion",
            Self::Rotation(_) => "Rotation",
        }
    }
}

impl fmt::Display for AnyVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Vector2(v) => fmt::Display::fmt(v, f),
            Self::Vector3(v) => fmt::Display::fmt(v, f),
            Self::Vector4(v) => fmt::Display::fmt(v, f),
            Self::Quaternion(q) => fmt::Display::fmt(q, f),
            Self::Rotation(r) => fmt::Display::fmt(r, f),
        }
    }
}

impl FromStr for AnyVector {
    type Err = MathError;

    fn from_str(s: &str) -> Result<Self> {
        parse_any(s)
    }
}

macro_rules! impl_text_format {
    ($t:ident, $n:literal, [$($field:literal),+]) => {
        impl fmt::Display for $t {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write_fields(f, stringify!($t), &[$($field),+], &<[f64; $n]>::from(*self))
            }
        }

        impl FromStr for $t {
            type Err = MathError;

            fn from_str(s: &str) -> Result<Self> {
                Self::try_from(parse_fields(s, stringify!($t), [$($field),+])?)
            }
        }

        impl From<$t> for AnyVector {
            fn from(value: $t) -> Self {
                Self::$t(value)
            }
        }
    };
}

impl_text_format!(Vector2, 2, ["x", "y"]);
impl_text_format!(Vector3, 3, ["x", "y", "z"]);
impl_text_format!(Vector4, 4, ["w", "x", "y", "z"]);
impl_text_format!(Quaternion, 4, ["w", "x", "y", "z"]);
impl_text_format!(Rotation, 4, ["angle", "x", "y", "z"]);

fn write_fields(
    f: &mut fmt::Formatter<'_>,
    type_name: &str,
    keys: &[&str],
    values: &[f64],
) -> fmt::Result {
    write!(f, "{type_name}{{")?;
    for (idx, (key, value)) in keys.iter().zip(values).enumerate() {
        if idx > 0 {
            f.write_str(", ")?;
        }
        write!(f, "{key}={value:?}")?;
    }
    f.write_str("}")
}

/// Extracts the values of the given keys from `TypeName{key=value, ...}`.
/// Keys that do not appear are returned as NaN.
fn parse_fields<const N: usize>(s: &str, type_name: &str, keys: [&str; N]) -> Result<[f64; N]> {
    let body = s
        .strip_prefix(type_name)
        .and_then(|rest| rest.strip_prefix('{'))
        .ok_or_else(|| MathError::Format(format!("String is not a {type_name}: {s}")))?
        .replace('}', "");

    let mut values = [f64::NAN; N];

    for segment in body.split(", ") {
        let mut parts = segment.split('=');
        let (Some(key), Some(value), None) = (parts.next(), parts.next(), parts.next()) else {
            return Err(MathError::Format(format!(
                "Expected `key=value` in {type_name}, got `{segment}`"
            )));
        };

        let Some(idx) = keys.iter().position(|&k| k == key) else {
            continue;
        };

        values[idx] = value.trim().parse().map_err(|err| {
            MathError::Format(format!("Invalid value for {type_name}.{key}: `{value}` ({err})"))
        })?;
    }

    Ok(values)
}
