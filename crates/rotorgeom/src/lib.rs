#![cfg_attr(not(feature = "std"), no_std)]

//! rotorgeom orients and poses small 3D scenes using rotors.
//!
//! A [rotor](re3::Rotor) is the sum of a scalar and a bivector (an oriented plane).
//! Rotors compose like quaternions, to which they are algebraically equivalent,
//! but are named for the plane they rotate in rather than an axis.
//! Each rotor converts to a 4x4 homogeneous [matrix](matrix::Matrix),
//! and matrices chain translations, scales and rotations into model matrices.
//!
//! On top of that math core sit:
//! * a [scene hierarchy](hierarchy) that walks a static table of rigid parts
//!   and issues one draw call per part
//! * [interaction drivers](orientation) that map pointer drags
//!   and key presses to rotations, and a first-person [camera]
//! * two scenes: an articulated [fish] and a [voxel] world
//!
//! rotorgeom is generic over the [scalar] datatype and works with `f32` or `f64`.
//! Matrix products and rotor composition only require
//! [addition and multiplication](scalar::Ring),
//! so they are available for integers too.
//!
//! rotorgeom is `no_std`-compatible (with `alloc`).
//! Without the `std` feature, the square root and trigonometric functions
//! must be provided by implementing the [scalar] traits on your own datatype.
//!
//! Composition follows one convention throughout:
//! [compose](ops::Compose) reads left-to-right ("A then B")
//! while the [geometric product](algebraic_ops::WedgeDot) and matrix products
//! read right-to-left.

extern crate alloc;

pub mod algebraic_ops;
pub mod camera;
pub mod error;
pub mod fish;
pub mod hierarchy;
pub mod matrix;
pub mod ops;
pub mod orientation;
pub mod re3;
pub mod scalar;
pub mod timing;
pub mod voxel;

mod test;
