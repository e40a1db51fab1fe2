//! Geometric operations

/// The square of the Euclidean norm of an element
///
/// This trait avoids the square root needed by [Norm]
/// and is therefore always available,
/// even on scalar types that do not implement [Sqrt](crate::scalar::Sqrt).
///
/// For a rotor this is `a² + yz² + zx² + xy²`,
/// which is also the bottom-right entry of its [matrix](crate::re3::Rotor::to_matrix).
pub trait NormSquared {
    type Output;
    fn norm_squared(self) -> Self::Output;
}

/// The Euclidean norm of an element
///
/// ```
/// use rotorgeom::re3::*;
/// use rotorgeom::ops::*;
///
/// let v = Vector { x: 3., y: 4., z: 0. };
/// assert_eq!(v.norm(), 5.);
/// ```
pub trait Norm {
    type Output;
    fn norm(self) -> Self::Output;
}

/// Scale an element so that its [norm](Norm) is 1.
///
/// The zero element has no direction and normalizing it produces NaN components.
/// Callers must guard against zero-length drag deltas
/// or degenerate rotation planes before calling this.
///
/// For rotors, normalizing pulls a rotor that has drifted
/// through many compositions back onto the unit sphere.
pub trait Normalized {
    type Output;
    fn normalized(self) -> Self::Output;
}

/// Compose rotations A and B into a new rotation whose motion is the result of applying A then B
///
/// Note that `compose()` reads left-to-right.
/// This is the opposite order from the [geometric product](crate::algebraic_ops::WedgeDot)
/// and from matrix products, which read right-to-left:
/// `a.compose(b) == b.wedge_dot(a)`.
pub trait Compose<T> {
    type Output;
    fn compose(self, r: T) -> Self::Output;
}

/// The rotation whose motion is the inverse of the given one
///
/// For unit rotors this is the [reverse](crate::algebraic_ops::Reverse).
pub trait InverseTransformation {
    type Output;
    fn inverse_transformation(self) -> Self::Output;
}

/// Constructor for a rotation that performs no motion
pub trait IdentityMotor {
    /// Construct a rotation that performs no motion
    fn identity_motor() -> Self;
}

/// Transform element A by rotor B
///
/// Vectors are treated as directions: only the rotation block of the
/// [rotor's matrix](crate::re3::Rotor::to_matrix) is applied.
pub trait Transform<T> {
    type Output;
    fn transform(self, r: T) -> Self::Output;
}

/// Apply, to element A, the inverse of the rotation described by rotor B
///
/// `a.transform_inverse(b)` is equivalent to `a.transform(b.inverse_transformation())`.
/// This is how a camera derives its forward and right directions
/// from its orientation.
pub trait TransformInverse<T> {
    type Output;
    fn transform_inverse(self, r: T) -> Self::Output;
}

/// Constructor for a unit vector in the X direction
pub trait XHat {
    fn x_hat() -> Self;
}

/// Constructor for a unit vector in the Y direction
pub trait YHat {
    fn y_hat() -> Self;
}

/// Constructor for a unit vector in the Z direction
pub trait ZHat {
    fn z_hat() -> Self;
}
