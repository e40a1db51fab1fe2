//! Rigid part hierarchies
//!
//! A [Hierarchy] is a static table of [Part]s. Each part hangs off an earlier part
//! (or the root) and contributes a local transform:
//!
//! ```text
//! local       = translation(mount) * rotation(joints) * translation(pivot)
//! accumulated = parent_accumulated * local
//! model       = accumulated * scale
//! ```
//!
//! Only `accumulated` is passed down to children.
//! A part's own scale never reaches its children,
//! otherwise they would inherit its non-uniform deformation.
//!
//! Walking the table is a pure function of the root matrix and a vector of joint angles,
//! one angle per articulated degree of freedom.

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

use crate::error::SceneError;
use crate::matrix::Matrix;
use crate::ops::*;
use crate::re3::*;
use crate::scalar::*;

/// The shape a renderer should draw for a part
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Primitive {
    /// Unit cube spanning [0, 1] on every axis.
    /// Renderers center it by appending `translation(-½, -½, -½)` to the model matrix.
    Cube,
    /// Unit circle in the xy plane, centered on the origin
    Circle,
    /// Unit square in the xz plane, spanning [0, 1] on both axes.
    /// Renderers center it the same way as the cube, leaving y at 0.
    Plane,
}

/// Number of rim segments in the circle fan
pub const CIRCLE_SEGMENTS: usize = 10;

impl Primitive {
    /// Matrix appended to a model matrix to move the primitive's center onto the origin
    pub fn centering<T: Rational>(self) -> Matrix<T> {
        let h = -T::one_half();
        match self {
            Primitive::Cube => Matrix::translation(h, h, h),
            Primitive::Plane => Matrix::translation(h, T::zero(), h),
            Primitive::Circle => Matrix::identity(),
        }
    }

    /// Outline of the primitive as line segments in its own (uncentered) space
    pub fn edges<T: Rational + Trig<Output = T>>(self) -> Vec<[Vector<T>; 2]> {
        let (o, l) = (T::zero(), T::one());
        match self {
            Primitive::Cube => {
                let corner = |i: usize| Vector {
                    x: if i & 1 != 0 { l } else { o },
                    y: if i & 2 != 0 { l } else { o },
                    z: if i & 4 != 0 { l } else { o },
                };
                // Each edge joins a corner to the neighbor one bit higher
                (0..8)
                    .flat_map(|i| [1, 2, 4].map(|bit| (i, bit)))
                    .filter(|&(i, bit)| i & bit == 0)
                    .map(|(i, bit)| [corner(i), corner(i | bit)])
                    .collect()
            }
            Primitive::Plane => {
                let c = [[o, o], [l, o], [l, l], [o, l]].map(|[x, z]| Vector { x, y: o, z });
                (0..4).map(|i| [c[i], c[(i + 1) % 4]]).collect()
            }
            Primitive::Circle => {
                let rim = |i: usize| {
                    let theta = T::from_fraction(i as isize, CIRCLE_SEGMENTS as isize) * T::tau();
                    Vector {
                        x: theta.cos(),
                        y: theta.sin(),
                        z: o,
                    }
                };
                (0..CIRCLE_SEGMENTS).map(|i| [rim(i), rim(i + 1)]).collect()
            }
        }
    }
}

/// How a primitive should be filled
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Paint {
    /// Flat RGBA color
    Color([f32; 4]),
    /// Index of a texture unit the renderer has loaded
    Texture(u32),
}

/// One draw call: a primitive, its final model matrix and its paint
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DrawCommand<T> {
    pub primitive: Primitive,
    pub model: Matrix<T>,
    pub paint: Paint,
}

/// Something that can receive draw calls, e.g. a GPU renderer or a 2D painter
pub trait DrawTarget<T> {
    /// Set the matrix applied to every following model matrix
    /// (orientation, zoom and camera position)
    fn set_view(&mut self, view: Matrix<T>);

    fn draw(&mut self, command: DrawCommand<T>);
}

/// Collects draw calls, mostly useful for inspection
#[derive(Clone, Debug, Default)]
pub struct DrawList<T> {
    pub view: Option<Matrix<T>>,
    pub commands: Vec<DrawCommand<T>>,
}

impl<T> DrawTarget<T> for DrawList<T> {
    fn set_view(&mut self, view: Matrix<T>) {
        self.view = Some(view);
    }

    fn draw(&mut self, command: DrawCommand<T>) {
        self.commands.push(command);
    }
}

/// A rotational degree of freedom: rotate in `plane` by the angle at `angle` in the angle vector
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Joint<T> {
    pub plane: Bivector<T>,
    pub angle: usize,
}

/// A rigid part of a hierarchy
#[derive(Clone, Debug, PartialEq)]
pub struct Part<T> {
    pub name: &'static str,
    /// Index of an earlier part, or `None` to hang off the root
    pub parent: Option<usize>,
    /// Scale pre-multiplied onto the parent's accumulated matrix,
    /// e.g. `(1, 1, -1)` to mirror a part to the other side
    pub mirror: Option<Vector<T>>,
    /// Translation applied before the joints
    pub mount: Vector<T>,
    /// Rotations, composed as `r(j0) ⟑ r(j1) ⟑ …`
    pub joints: Vec<Joint<T>>,
    /// Translation applied after the joints
    pub pivot: Vector<T>,
    /// Scale applied to this part's primitive only
    pub scale: Vector<T>,
    pub primitive: Primitive,
    pub paint: Paint,
}

/// The matrices produced for one part during a walk
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PartPose<T> {
    /// Parent-to-part transform without this part's scale
    pub accumulated: Matrix<T>,
    /// `accumulated * scale`, the matrix handed to the renderer
    pub model: Matrix<T>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Hierarchy<T> {
    parts: Vec<Part<T>>,
    angle_count: usize,
}

impl<T> Hierarchy<T> {
    /// Validate a part table
    ///
    /// Every parent must precede its child
    /// and every joint must read an angle below `angle_count`.
    pub fn new(parts: Vec<Part<T>>, angle_count: usize) -> Result<Hierarchy<T>, SceneError> {
        if parts.is_empty() {
            return Err(SceneError::EmptyHierarchy);
        }
        for (i, part) in parts.iter().enumerate() {
            if let Some(parent) = part.parent {
                if parent >= i {
                    return Err(SceneError::ParentOutOfOrder { part: i, parent });
                }
            }
            if let Some(joint) = part.joints.iter().find(|j| j.angle >= angle_count) {
                return Err(SceneError::AngleIndex {
                    part: i,
                    index: joint.angle,
                    angle_count,
                });
            }
        }
        log::debug!(
            "validated hierarchy of {} parts with {angle_count} joint angles",
            parts.len()
        );
        Ok(Hierarchy { parts, angle_count })
    }

    pub fn parts(&self) -> &[Part<T>] {
        &self.parts
    }

    /// Length of the angle vector this hierarchy expects
    pub fn angle_count(&self) -> usize {
        self.angle_count
    }
}

impl<T: Rational + Trig<Output = T>> Hierarchy<T> {
    /// Compute every part's matrices, in table order
    pub fn pose(&self, root: Matrix<T>, angles: &[T]) -> Result<Vec<PartPose<T>>, SceneError> {
        if angles.len() != self.angle_count {
            return Err(SceneError::AngleCount {
                expected: self.angle_count,
                actual: angles.len(),
            });
        }

        let mut poses: Vec<PartPose<T>> = Vec::with_capacity(self.parts.len());
        for part in &self.parts {
            let parent = match part.parent {
                Some(i) => poses[i].accumulated,
                None => root,
            };
            let parent = match part.mirror {
                Some(mirror) => Matrix::scale_by(mirror) * parent,
                None => parent,
            };

            let mut local = Matrix::translation_by(part.mount);
            if !part.joints.is_empty() {
                let rotor = part
                    .joints
                    .iter()
                    .map(|j| rotation_rotor(angles[j.angle], j.plane))
                    .fold(Rotor::identity_motor(), |acc, r| r.compose(acc));
                local = local * rotor.to_matrix();
            }
            local = local * Matrix::translation_by(part.pivot);

            let accumulated = parent * local;
            let model = accumulated * Matrix::scale_by(part.scale);
            log::trace!("posed part {}", part.name);
            poses.push(PartPose { accumulated, model });
        }
        Ok(poses)
    }

    /// Walk the hierarchy and issue one draw call per part
    pub fn draw(
        &self,
        root: Matrix<T>,
        angles: &[T],
        target: &mut impl DrawTarget<T>,
    ) -> Result<(), SceneError> {
        let poses = self.pose(root, angles)?;
        for (part, pose) in self.parts.iter().zip(poses) {
            target.draw(DrawCommand {
                primitive: part.primitive,
                model: pose.model,
                paint: part.paint,
            });
        }
        Ok(())
    }
}
