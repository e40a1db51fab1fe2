//! Traits that govern the scalar data type used by rotorgeom
//!
//! Rotor composition and matrix products are nothing but sums and products,
//! so most of the crate only asks for a [Ring].
//! Building a rotor from an angle additionally needs [Trig],
//! and normalizing needs [Sqrt] and [Recip].

use core::ops::{Add, Mul, Neg, Sub};

/// A scalar datatype whose absolute value can be taken.
pub trait Abs {
    type Output;

    /// Computes the absolute value of a scalar.
    fn abs(self) -> Self::Output;
}

/// A scalar datatype which is closed under addition and multiplication.
///
/// see <https://en.wikipedia.org/wiki/Ring_(mathematics)>
///
/// `Ring` is implemented for `f32`, `f64`, `i32` and `i64`.
/// Integer rings are enough for building and multiplying
/// translation and scale matrices.
pub trait Ring:
    Clone
    + Copy
    + Neg<Output = Self>
    + Abs<Output = Self>
    + Add<Self, Output = Self>
    + Mul<Self, Output = Self>
    + Sub<Self, Output = Self>
    + Default
{
    /// The additive identity
    fn zero() -> Self {
        Self::default()
    }

    /// The multiplicative identity
    fn one() -> Self {
        Self::from_integer(1)
    }

    /// Construct an integer scalar
    fn from_integer(i: isize) -> Self;
}

/// A scalar datatype which can represent fractional values such as ½.
///
/// Rotors act on geometry with half of their angle,
/// so constructing one from an angle needs to divide by 2.
///
/// `Rational` comes implemented for `f32` and `f64`.
pub trait Rational: Ring {
    /// Construct a rational scalar
    /// from an integer numerator and integer denominator
    fn from_fraction(numerator: isize, denominator: isize) -> Self;

    /// A scalar value that when multiplied by 2 equals [one](Ring::one)
    fn one_half() -> Self {
        Self::from_fraction(1, 2)
    }
}

/// A scalar datatype which is closed under the square root function.
///
/// Used for taking [norms](crate::ops::Norm).
/// [Squared norms](crate::ops::NormSquared) are always available.
///
/// When given a negative value,
/// this function must either return a valid scalar datatype (e.g. `f32::NaN`)
/// or panic.
pub trait Sqrt: Ring {
    type Output;

    /// This scalar's positive square root
    fn sqrt(self) -> <Self as Sqrt>::Output;
}

/// A scalar datatype which implements trigonometric functions.
///
/// The input is an angle in radians, the output is a linear quantity.
///
/// `Trig` comes implemented for `f32` → `f32` and `f64` → `f64`.
pub trait Trig {
    type Output: Ring;

    /// The cosine of a scalar (in radians)
    fn cos(self) -> Self::Output;

    /// The sine of a scalar (in radians)
    fn sin(self) -> Self::Output;

    /// One full turn, 2π radians
    fn tau() -> Self;
}

/// Inverse of [Trig], taking a linear quantity back to an angle.
pub trait InvTrig {
    type Output;

    /// The arc-cosine of a scalar, in radians.
    /// Inputs outside of [-1, 1] may produce NaN.
    fn acos(self) -> Self::Output;
}

/// A scalar datatype whose reciprocal can be taken.
///
/// Needed to [normalize](crate::ops::Normalized) vectors, bivectors and rotors.
///
/// When given an input of zero,
/// this function must return a valid scalar datatype (e.g. `f32::INFINITY`) or panic.
/// For floating point datatypes, this operation is NOT NaN-free:
/// normalizing a zero vector produces NaN components.
pub trait Recip {
    type Output;
    fn recip(self) -> Self::Output;
}

macro_rules! impl_for_float {
    ($type:ident) => {
        #[cfg(feature = "std")]
        impl Abs for $type {
            type Output = $type;
            fn abs(self) -> $type {
                self.abs()
            }
        }
        #[cfg(not(feature = "std"))]
        impl Abs for $type {
            type Output = $type;
            fn abs(self) -> $type {
                if self < 0. {
                    -self
                } else {
                    self
                }
            }
        }

        impl Ring for $type {
            fn from_integer(i: isize) -> $type {
                i as $type
            }
        }

        impl Rational for $type {
            fn from_fraction(numerator: isize, denominator: isize) -> $type {
                numerator as $type / denominator as $type
            }
        }

        #[cfg(feature = "std")]
        impl Sqrt for $type {
            type Output = $type;
            fn sqrt(self) -> $type {
                self.sqrt()
            }
        }

        #[cfg(feature = "std")]
        impl Trig for $type {
            type Output = $type;

            fn cos(self) -> $type {
                self.cos()
            }
            fn sin(self) -> $type {
                self.sin()
            }
            fn tau() -> $type {
                core::$type::consts::TAU
            }
        }

        #[cfg(feature = "std")]
        impl InvTrig for $type {
            type Output = $type;

            fn acos(self) -> $type {
                self.acos()
            }
        }

        impl Recip for $type {
            type Output = $type;

            // This is not NaN-free!
            fn recip(self) -> $type {
                self.recip()
            }
        }
    };
}

impl_for_float!(f32);
impl_for_float!(f64);

macro_rules! impl_for_int {
    ($type:ident) => {
        impl Abs for $type {
            type Output = $type;
            fn abs(self) -> $type {
                self.abs()
            }
        }

        impl Ring for $type {
            fn from_integer(i: isize) -> $type {
                i.try_into().expect("Integer out of range")
            }
        }
    };
}

impl_for_int!(i32);
impl_for_int!(i64);
