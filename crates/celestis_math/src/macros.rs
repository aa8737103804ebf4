//! Utility macros.

macro_rules! impl_binop {
    ($op:ident, $method:ident, $tl:ty, $tr:ty, $to:ty, |$lhs:ident, $rhs:ident| $body:block) => {
        impl<'a> ::std::ops::$op<&'a $tr> for &'a $tl {
            type Output = $to;

            #[inline]
            fn $method(self, rhs: &'a $tr) -> Self::Output {
                let $lhs = self;
                let $rhs = rhs;
                $body
            }
        }

        impl ::std::ops::$op<$tr> for &$tl {
            type Output = $to;

            #[inline]
            fn $method(self, rhs: $tr) -> Self::Output {
                ::std::ops::$op::$method(self, &rhs)
            }
        }

        impl<'a> ::std::ops::$op<&'a $tr> for $tl {
            type Output = $to;

            #[inline]
            fn $method(self, rhs: &'a $tr) -> Self::Output {
                ::std::ops::$op::$method(&self, rhs)
            }
        }

        impl ::std::ops::$op<$tr> for $tl {
            type Output = $to;

            #[inline]
            fn $method(self, rhs: $tr) -> Self::Output {
                ::std::ops::$op::$method(&self, &rhs)
            }
        }
    };
}

macro_rules! impl_unary_op {
    ($op:ident, $method:ident, $t:ty, $to:ty, |$this:ident| $body:block) => {
        impl ::std::ops::$op for &$t {
            type Output = $to;

            #[inline]
            fn $method(self) -> Self::Output {
                let $this = self;
                $body
            }
        }

        impl ::std::ops::$op for $t {
            type Output = $to;

            #[inline]
            fn $method(self) -> Self::Output {
                ::std::ops::$op::$method(&self)
            }
        }
    };
}

macro_rules! impl_abs_diff_eq {
    ($t:ty, |$arg1:ident, $arg2:ident, $arg3:ident| $body:block) => {
        impl ::approx::AbsDiffEq for $t {
            type Epsilon = f64;

            fn default_epsilon() -> Self::Epsilon {
                <f64 as ::approx::AbsDiffEq>::default_epsilon()
            }

            fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
                let $arg1 = self;
                let $arg2 = other;
                let $arg3 = epsilon;
                $body
            }
        }
    };
}

macro_rules! impl_relative_eq {
    ($t:ty, |$arg1:ident, $arg2:ident, $arg3:ident, $arg4:ident| $body:block) => {
        impl ::approx::RelativeEq for $t {
            fn default_max_relative() -> Self::Epsilon {
                <f64 as ::approx::RelativeEq>::default_max_relative()
            }

            fn relative_eq(
                &self,
                other: &Self,
                epsilon: Self::Epsilon,
                max_relative: Self::Epsilon,
            ) -> bool {
                let $arg1 = self;
                let $arg2 = other;
                let $arg3 = epsilon;
                let $arg4 = max_relative;
                $body
            }
        }
    };
}

/// Implements the [`Vector`](crate::vector::Vector) capability, approximate
/// equality and the scalar operators for a type with the given `f64`
/// component fields. The type must have a fallible `new` taking the
/// components in the listed order.
macro_rules! impl_vector_componentwise {
    ($t:ident, $first:ident $(, $rest:ident)*) => {
        impl $crate::vector::Vector for $t {
            #[inline]
            fn add_scalar(&self, s: f64) -> $crate::error::Result<Self> {
                Self::new(self.$first + s $(, self.$rest + s)*)
            }

            #[inline]
            fn subtract_scalar(&self, s: f64) -> $crate::error::Result<Self> {
                Self::new(self.$first - s $(, self.$rest - s)*)
            }

            #[inline]
            fn multiply(&self, s: f64) -> $crate::error::Result<Self> {
                Self::new(self.$first * s $(, self.$rest * s)*)
            }

            #[inline]
            fn divide(&self, s: f64) -> $crate::error::Result<Self> {
                if s == 0.0 {
                    return Err($crate::error::MathError::DivisionByZero);
                }
                Self::new(self.$first / s $(, self.$rest / s)*)
            }

            #[inline]
            fn magnitude2(&self) -> f64 {
                self.$first * self.$first $(+ self.$rest * self.$rest)*
            }

            #[inline]
            fn negate(&self) -> Self {
                Self {
                    $first: -self.$first,
                    $($rest: -self.$rest,)*
                }
            }
        }

        impl_binop!(Mul, mul, $t, f64, $crate::error::Result<$t>, |a, b| {
            $crate::vector::Vector::multiply(a, *b)
        });

        impl_binop!(Div, div, $t, f64, $crate::error::Result<$t>, |a, b| {
            $crate::vector::Vector::divide(a, *b)
        });

        impl_unary_op!(Neg, neg, $t, $t, |val| {
            $crate::vector::Vector::negate(val)
        });

        impl_abs_diff_eq!($t, |a, b, epsilon| {
            ::approx::AbsDiffEq::abs_diff_eq(&a.$first, &b.$first, epsilon)
                $(&& ::approx::AbsDiffEq::abs_diff_eq(&a.$rest, &b.$rest, epsilon))*
        });

        impl_relative_eq!($t, |a, b, epsilon, max_relative| {
            ::approx::RelativeEq::relative_eq(&a.$first, &b.$first, epsilon, max_relative)
                $(&& ::approx::RelativeEq::relative_eq(&a.$rest, &b.$rest, epsilon, max_relative))*
        });
    };
}
