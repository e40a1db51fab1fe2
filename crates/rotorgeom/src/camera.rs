//! A first-person camera for walking through a scene
//!
//! The camera's orientation is an [Orientation].
//! Its forward and right directions are found by applying the
//! inverse of that orientation to the view-space axes `-Z` and `+X`,
//! so that "forward" always points into the screen.

use crate::matrix::Matrix;
use crate::ops::*;
use crate::orientation::*;
use crate::re3::*;
use crate::scalar::*;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CameraConfig<T> {
    /// Distance covered by one move
    pub move_step: T,
    /// Angle turned by one yaw, in radians
    pub yaw_step: T,
    /// Uniform zoom applied between the orientation and the camera translation
    pub view_scale: T,
}

impl<T: Rational> Default for CameraConfig<T> {
    fn default() -> Self {
        CameraConfig {
            move_step: T::one_half(),
            yaw_step: T::from_fraction(1, 10),
            view_scale: T::from_fraction(1, 5),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CameraMove {
    Forward,
    Back,
    Left,
    Right,
    /// Turn about the vertical axis by `yaw_step`
    YawLeft,
    YawRight,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Camera<T> {
    pub position: Vector<T>,
    pub orientation: Orientation<T>,
    pub config: CameraConfig<T>,
}

impl<T: Ring> Camera<T> {
    pub fn new(position: Vector<T>, orientation: Orientation<T>, config: CameraConfig<T>) -> Self {
        Camera {
            position,
            orientation,
            config,
        }
    }

    /// The direction the camera looks in, in world space
    pub fn forward(&self) -> Vector<T> {
        (-Vector::<T>::z_hat()).transform_inverse(self.orientation.rotor())
    }

    /// The camera's right-hand direction, in world space
    pub fn right(&self) -> Vector<T> {
        Vector::<T>::x_hat().transform_inverse(self.orientation.rotor())
    }

    /// `rotation * scale(view_scale) * translation(-position)`
    pub fn view_matrix(&self) -> Matrix<T> {
        let s = self.config.view_scale;
        Matrix::product_of([
            self.orientation.rotor().to_matrix(),
            Matrix::scale(s, s, s),
            Matrix::translation_by(-self.position),
        ])
    }
}

impl<T> Camera<T>
where
    T: Rational + Sqrt<Output = T> + Recip<Output = T> + Trig<Output = T> + PartialOrd,
{
    /// Produce the camera that results from one move
    pub fn apply(self, mv: CameraMove) -> Camera<T> {
        let step = self.config.move_step;
        let turn = |angle: T| {
            self.orientation.update(OrientationInput::Rotate {
                angle,
                plane: Bivector::zx_hat(),
            })
        };
        match mv {
            CameraMove::Forward => Camera {
                position: self.position + self.forward() * step,
                ..self
            },
            CameraMove::Back => Camera {
                position: self.position - self.forward() * step,
                ..self
            },
            CameraMove::Right => Camera {
                position: self.position + self.right() * step,
                ..self
            },
            CameraMove::Left => Camera {
                position: self.position - self.right() * step,
                ..self
            },
            CameraMove::YawRight => Camera {
                orientation: turn(self.config.yaw_step),
                ..self
            },
            CameraMove::YawLeft => Camera {
                orientation: turn(-self.config.yaw_step),
                ..self
            },
        }
    }
}
