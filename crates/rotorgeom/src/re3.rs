//! Rotations in 3D Euclidean space
//!
//! This module contains the primitives of the rotation core:
//! [vectors](Vector), [bivectors](Bivector) (oriented plane elements)
//! and [rotors](Rotor) built from them.
//!
//! A rotor is the sum of a scalar and a bivector.
//! It rotates within the plane of its bivector
//! by twice the angle encoded in it, i.e. a rotor for angle θ is
//! `cos(θ/2) + sin(θ/2)·P` for a unit plane `P`.
//! Rotors are algebraically equivalent to unit quaternions
//! under the correspondence yz ↔ i, zx ↔ j, xy ↔ k.
//!
//! All types here are plain values. Every operation returns a new value.

use core::ops::{Add, Mul, Neg, Sub};

use crate::algebraic_ops::*;
use crate::matrix::Matrix;
use crate::ops::*;
use crate::scalar::*;

/// e.g. a point in space or a direction
#[derive(Clone, Copy, Default, Debug, PartialEq, Eq)]
pub struct Vector<T> {
    pub x: T,
    pub y: T,
    pub z: T,
}

/// e.g. a plane of rotation
///
/// The three fields are the coefficients on the basis planes
/// y ∧ z, z ∧ x and x ∧ y.
/// A bivector whose [norm](Norm) is 1 is a normalized plane,
/// which is what [rotation_rotor] expects.
///
/// Rotating in the xy plane turns X towards Y,
/// i.e. it is a right-handed rotation about the Z axis.
#[derive(Clone, Copy, Default, Debug, PartialEq, Eq)]
pub struct Bivector<T> {
    pub yz: T,
    pub zx: T,
    pub xy: T,
}

/// e.g. an orientation
///
/// `Rotor` holds the sum of a scalar `a` and a bivector.
/// A rotor that represents a rotation has a [norm](Norm) of 1;
/// [rotation_rotor] always produces such rotors,
/// and [composing](Compose) two of them produces another.
///
/// ## Example Operations
/// * [Composing](Compose) rotors A and B results in a rotor whose rotation is A followed by B
/// * A rotor can be made to rotate the opposite way using [InverseTransformation]
/// * A rotor can be turned into a homogeneous [matrix](Rotor::to_matrix)
/// * A rotor that has drifted off the unit sphere can be [normalized](Normalized)
#[derive(Clone, Copy, Default, Debug, PartialEq, Eq)]
pub struct Rotor<T> {
    pub a: T,
    pub yz: T,
    pub zx: T,
    pub xy: T,
}

macro_rules! impl_linear_ops {
    ($name:ident { $($field:ident),+ }) => {
        impl<T: Ring> Add for $name<T> {
            type Output = $name<T>;
            fn add(self, r: $name<T>) -> $name<T> {
                $name { $($field: self.$field + r.$field),+ }
            }
        }

        impl<T: Ring> Sub for $name<T> {
            type Output = $name<T>;
            fn sub(self, r: $name<T>) -> $name<T> {
                $name { $($field: self.$field - r.$field),+ }
            }
        }

        impl<T: Ring> Neg for $name<T> {
            type Output = $name<T>;
            fn neg(self) -> $name<T> {
                $name { $($field: -self.$field),+ }
            }
        }

        impl<T: Ring> Mul<T> for $name<T> {
            type Output = $name<T>;
            fn mul(self, r: T) -> $name<T> {
                $name { $($field: self.$field * r),+ }
            }
        }

        impl<T: Ring> NormSquared for $name<T> {
            type Output = T;
            fn norm_squared(self) -> T {
                T::zero() $(+ self.$field * self.$field)+
            }
        }

        impl<T: Ring + Sqrt<Output = T>> Norm for $name<T> {
            type Output = T;
            fn norm(self) -> T {
                self.norm_squared().sqrt()
            }
        }

        impl<T: Ring + Sqrt<Output = T> + Recip<Output = T>> Normalized for $name<T> {
            type Output = $name<T>;
            fn normalized(self) -> $name<T> {
                self * self.norm().recip()
            }
        }
    };
}

impl_linear_ops!(Vector { x, y, z });
impl_linear_ops!(Bivector { yz, zx, xy });
impl_linear_ops!(Rotor { a, yz, zx, xy });

impl<T> From<[T; 3]> for Vector<T> {
    fn from([x, y, z]: [T; 3]) -> Vector<T> {
        Vector { x, y, z }
    }
}

impl<T> From<Vector<T>> for [T; 3] {
    fn from(v: Vector<T>) -> [T; 3] {
        [v.x, v.y, v.z]
    }
}

impl<T> From<[T; 3]> for Bivector<T> {
    fn from([yz, zx, xy]: [T; 3]) -> Bivector<T> {
        Bivector { yz, zx, xy }
    }
}

impl<T> From<Bivector<T>> for [T; 3] {
    fn from(b: Bivector<T>) -> [T; 3] {
        [b.yz, b.zx, b.xy]
    }
}

impl<T: Ring> XHat for Vector<T> {
    fn x_hat() -> Vector<T> {
        Vector {
            x: T::one(),
            y: T::zero(),
            z: T::zero(),
        }
    }
}

impl<T: Ring> YHat for Vector<T> {
    fn y_hat() -> Vector<T> {
        Vector {
            x: T::zero(),
            y: T::one(),
            z: T::zero(),
        }
    }
}

impl<T: Ring> ZHat for Vector<T> {
    fn z_hat() -> Vector<T> {
        Vector {
            x: T::zero(),
            y: T::zero(),
            z: T::one(),
        }
    }
}

impl<T: Ring> Bivector<T> {
    /// The unit y ∧ z plane (rotation about X)
    pub fn yz_hat() -> Bivector<T> {
        Bivector {
            yz: T::one(),
            zx: T::zero(),
            xy: T::zero(),
        }
    }

    /// The unit z ∧ x plane (rotation about Y)
    pub fn zx_hat() -> Bivector<T> {
        Bivector {
            yz: T::zero(),
            zx: T::one(),
            xy: T::zero(),
        }
    }

    /// The unit x ∧ y plane (rotation about Z)
    pub fn xy_hat() -> Bivector<T> {
        Bivector {
            yz: T::zero(),
            zx: T::zero(),
            xy: T::one(),
        }
    }
}

impl<T: Ring> Rotor<T> {
    /// Assemble a rotor from its scalar and bivector parts
    pub fn new(a: T, b: Bivector<T>) -> Rotor<T> {
        Rotor {
            a,
            yz: b.yz,
            zx: b.zx,
            xy: b.xy,
        }
    }

    /// The bivector part of this rotor
    pub fn bivector(self) -> Bivector<T> {
        Bivector {
            yz: self.yz,
            zx: self.zx,
            xy: self.xy,
        }
    }

    /// The 4x4 homogeneous rotation matrix equivalent to this rotor
    ///
    /// The bottom-right entry is the rotor's [squared norm](NormSquared)
    /// rather than a literal 1, so the result is only rigid for unit rotors.
    ///
    /// see <https://gabormakesgames.com/blog_quats_to_matrix.html>
    pub fn to_matrix(self) -> Matrix<T> {
        let Rotor { a: w, yz, zx, xy } = self;
        let two = T::from_integer(2);
        let o = T::zero();
        Matrix([
            [
                w * w + yz * yz - zx * zx - xy * xy,
                two * (yz * zx - w * xy),
                two * (yz * xy + w * zx),
                o,
            ],
            [
                two * (yz * zx + w * xy),
                w * w - yz * yz + zx * zx - xy * xy,
                two * (zx * xy - w * yz),
                o,
            ],
            [
                two * (yz * xy - w * zx),
                two * (zx * xy + w * yz),
                w * w - yz * yz - zx * zx + xy * xy,
                o,
            ],
            [o, o, o, self.norm_squared()],
        ])
    }
}

impl<T: Ring> From<Rotor<T>> for Matrix<T> {
    fn from(r: Rotor<T>) -> Matrix<T> {
        r.to_matrix()
    }
}

impl<T: Rational + Sqrt<Output = T> + Recip<Output = T> + InvTrig<Output = T> + PartialOrd>
    Rotor<T>
{
    /// Split a unit rotor back into the angle and normalized plane it was built from
    ///
    /// Returns `None` for (numerically) the identity rotor,
    /// whose plane of rotation is undefined.
    /// The returned angle lies in [0, 2π].
    pub fn angle_plane(self) -> Option<(T, Bivector<T>)> {
        let b = self.bivector();
        let sin_half = b.norm();
        if sin_half <= T::from_fraction(1, 1_000_000) {
            return None;
        }
        // Clamp into acos's domain, keeping the sign
        let cos_half = if self.a.abs() > T::one() {
            self.a * self.a.abs().recip()
        } else {
            self.a
        };
        let angle = cos_half.acos() * T::from_integer(2);
        Some((angle, b * sin_half.recip()))
    }
}

/// Rotor that rotates within the given normalized plane by the given angle (in radians)
///
/// The plane must already be unit length; it is not normalized here.
/// Composing the rotor for θ with itself gives the rotor for 2θ.
pub fn rotation_rotor<T: Ring, A: Ring + Rational + Trig<Output = T>>(
    phi: A,
    plane: Bivector<T>,
) -> Rotor<T> {
    let half_phi = phi * A::one_half();
    Rotor::new(half_phi.cos(), plane * half_phi.sin())
}

impl<T: Ring> WedgeDot<Rotor<T>> for Rotor<T> {
    type Output = Rotor<T>;

    #[rustfmt::skip]
    fn wedge_dot(self, r: Rotor<T>) -> Rotor<T> {
        let (a1, a2) = (self, r);
        Rotor {
            a:  a1.a * a2.a  - a1.yz * a2.yz - a1.zx * a2.zx - a1.xy * a2.xy,
            yz: a1.a * a2.yz + a1.yz * a2.a  + a1.zx * a2.xy - a1.xy * a2.zx,
            zx: a1.a * a2.zx + a1.zx * a2.a  + a1.xy * a2.yz - a1.yz * a2.xy,
            xy: a1.a * a2.xy + a1.xy * a2.a  + a1.yz * a2.zx - a1.zx * a2.yz,
        }
    }
}

impl<T: Ring> Compose<Rotor<T>> for Rotor<T> {
    type Output = Rotor<T>;
    fn compose(self, r: Rotor<T>) -> Rotor<T> {
        r.wedge_dot(self)
    }
}

impl<T: Ring> Reverse for Rotor<T> {
    fn reverse(self) -> Rotor<T> {
        Rotor {
            a: self.a,
            yz: -self.yz,
            zx: -self.zx,
            xy: -self.xy,
        }
    }
}

impl<T: Ring> InverseTransformation for Rotor<T> {
    type Output = Rotor<T>;
    fn inverse_transformation(self) -> Rotor<T> {
        self.reverse()
    }
}

impl<T: Ring> IdentityMotor for Rotor<T> {
    fn identity_motor() -> Rotor<T> {
        Rotor {
            a: T::one(),
            yz: T::zero(),
            zx: T::zero(),
            xy: T::zero(),
        }
    }
}

impl<T: Ring> Transform<Rotor<T>> for Vector<T> {
    type Output = Vector<T>;
    fn transform(self, r: Rotor<T>) -> Vector<T> {
        r.to_matrix().mul_direction(self)
    }
}

impl<T: Ring> TransformInverse<Rotor<T>> for Vector<T> {
    type Output = Vector<T>;
    fn transform_inverse(self, r: Rotor<T>) -> Vector<T> {
        self.transform(r.inverse_transformation())
    }
}
