//! Low-level geometric algebra operations
//!
//! Only the even subalgebra of 3D space (scalar + three bivectors) is modeled here,
//! which is exactly what is needed to represent rotations.
//!
//! Consider using the aliases in the [ops](crate::ops) module when available,
//! for code that reflects the geometric interpretation.
//! (e.g. when chaining rotations, prefer `a.compose(b)` over `b.wedge_dot(a)`)

/// The reverse operator Ã
///
/// For a rotor this negates the bivector part and keeps the scalar,
/// i.e. the rotor conjugate.
pub trait Reverse {
    fn reverse(self) -> Self;
}

/// The geometric product A ⟑ B
///
/// For rotors, `a.wedge_dot(b)` is the rotation that applies `b` first and then `a`.
/// Under the correspondence yz ↔ i, zx ↔ j, xy ↔ k
/// this is the Hamilton product of quaternions.
pub trait WedgeDot<T> {
    type Output;
    fn wedge_dot(self, r: T) -> Self::Output;
}
