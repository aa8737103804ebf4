//! Numbers and numerics.

use crate::error::{MathError, Result};

/// Initial guess constant for the 64-bit fast inverse square root.
const INVERSE_SQRT_MAGIC: i64 = 0x5fe6_ec85_e7de_30da;

/// Number of Newton–Raphson refinement steps applied by [`inverse_sqrt`].
const INVERSE_SQRT_ITERATIONS: usize = 4;

/// Returns the given value if it is finite.
///
/// # Errors
/// Returns [`MathError::InvalidArgument`] if the value is NaN or infinite.
#[inline]
pub fn require_finite(value: f64) -> Result<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(MathError::InvalidArgument(format!(
            "expected a finite value, got {value}"
        )))
    }
}

/// Computes an approximation of `1 / sqrt(x)`.
///
/// The initial guess is obtained by operating on the IEEE-754 bit pattern of
/// `x`, and is then refined with four Newton–Raphson steps. For normal
/// positive inputs the result is accurate to within a few ULPs.
///
/// Zero does not map to infinity: the bit trick yields a large finite value
/// for `x = 0`.
#[inline]
pub fn inverse_sqrt(x: f64) -> f64 {
    let half_x = 0.5 * x;

    let bits = x.to_bits() as i64;
    let mut y = f64::from_bits(INVERSE_SQRT_MAGIC.wrapping_sub(bits >> 1) as u64);

    for _ in 0..INVERSE_SQRT_ITERATIONS {
        y *= 1.5 - half_x * y * y;
    }
    y
}

/// Computes a magnitude from the given squared magnitude using
/// [`inverse_sqrt`].
///
/// A squared magnitude of zero gives exactly zero, as does an inverse square
/// root that comes out as zero.
#[inline]
pub fn magnitude_from_squared(magnitude_squared: f64) -> f64 {
    if magnitude_squared == 0.0 {
        return 0.0;
    }
    let inverse = inverse_sqrt(magnitude_squared);
    if inverse == 0.0 {
        return 0.0;
    }
    1.0 / inverse
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use proptest::prelude::*;

    const MAX_RELATIVE: f64 = 1e-10;

    #[test]
    fn finite_values_are_returned_unchanged() {
        assert_eq!(require_finite(1.5), Ok(1.5));
        assert_eq!(require_finite(-0.0), Ok(-0.0));
        assert_eq!(require_finite(f64::MAX), Ok(f64::MAX));
    }

    #[test]
    fn non_finite_values_are_rejected() {
        for value in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            assert!(matches!(
                require_finite(value),
                Err(MathError::InvalidArgument(_))
            ));
        }
    }

    #[test]
    fn inverse_sqrt_of_perfect_squares_is_accurate() {
        assert_relative_eq!(inverse_sqrt(1.0), 1.0, max_relative = MAX_RELATIVE);
        assert_relative_eq!(inverse_sqrt(4.0), 0.5, max_relative = MAX_RELATIVE);
        assert_relative_eq!(inverse_sqrt(25.0), 0.2, max_relative = MAX_RELATIVE);
        assert_relative_eq!(inverse_sqrt(0.01), 10.0, max_relative = MAX_RELATIVE);
    }

    #[test]
    fn inverse_sqrt_of_zero_is_large_and_finite() {
        let result = inverse_sqrt(0.0);
        assert!(result.is_finite());
        assert!(result > 1e100);
    }

    #[test]
    fn magnitude_of_zero_is_zero() {
        assert_eq!(magnitude_from_squared(0.0), 0.0);
    }

    #[test]
    fn magnitude_from_squared_inverts_square() {
        assert_relative_eq!(magnitude_from_squared(25.0), 5.0, max_relative = MAX_RELATIVE);
        assert_relative_eq!(magnitude_from_squared(2.0), 2.0_f64.sqrt(), max_relative = MAX_RELATIVE);
    }

    proptest! {
        #[test]
        fn inverse_sqrt_matches_std_within_tolerance(x in 1e-200..1e200_f64) {
            let expected = 1.0 / x.sqrt();
            let relative_error = ((inverse_sqrt(x) - expected) / expected).abs();
            prop_assert!(relative_error < MAX_RELATIVE);
        }
    }
}
