//! Orientation state driven by user input
//!
//! An [Orientation] owns the rotor that orients the whole scene.
//! It is replaced wholesale by [Orientation::update],
//! which composes a small world-space rotation onto it.
//!
//! Mouse input reaches it through a [DragTracker],
//! which turns canvas coordinates into per-frame drag deltas
//! and keeps replaying the last delta after the button is released,
//! so that a flicked scene keeps spinning.

use crate::ops::*;
use crate::re3::*;
use crate::scalar::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct OrientationConfig {
    /// Re-normalize the rotor after this many composing updates.
    /// Zero disables re-normalization.
    pub renormalize_every: u32,
}

impl Default for OrientationConfig {
    fn default() -> Self {
        OrientationConfig {
            renormalize_every: 64,
        }
    }
}

/// One orientation change
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum OrientationInput<T> {
    /// Drag by `(dx, dy)` in normalized device coordinates, turning by `angle`.
    ///
    /// The rotation plane is `[dy, -dx, 0]`,
    /// so horizontal drags turn the scene about the vertical axis
    /// and vertical drags tip it towards the viewer.
    /// A zero-length drag is ignored.
    Drag { dx: T, dy: T, angle: T },
    /// Rotate by `angle` within an already-normalized `plane`
    Rotate { angle: T, plane: Bivector<T> },
    /// Replace the orientation with a rotation by `angle` within `plane`.
    /// The plane is normalized first. A zero plane resets to the identity.
    Set { angle: T, plane: Bivector<T> },
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Orientation<T> {
    rotor: Rotor<T>,
    updates_since_normalize: u32,
    config: OrientationConfig,
}

impl<T: Ring> Orientation<T> {
    pub fn new(config: OrientationConfig) -> Orientation<T> {
        Orientation::from_rotor(Rotor::identity_motor(), config)
    }

    pub fn from_rotor(rotor: Rotor<T>, config: OrientationConfig) -> Orientation<T> {
        Orientation {
            rotor,
            updates_since_normalize: 0,
            config,
        }
    }

    pub fn rotor(&self) -> Rotor<T> {
        self.rotor
    }

    pub fn config(&self) -> OrientationConfig {
        self.config
    }
}

impl<T: Ring> Default for Orientation<T> {
    fn default() -> Self {
        Orientation::new(OrientationConfig::default())
    }
}

impl<T> Orientation<T>
where
    T: Rational + Sqrt<Output = T> + Recip<Output = T> + Trig<Output = T> + PartialOrd,
{
    /// Produce the orientation that results from applying `input`
    pub fn update(self, input: OrientationInput<T>) -> Orientation<T> {
        match input {
            OrientationInput::Drag { dx, dy, angle } => {
                if dx * dx + dy * dy > T::zero() {
                    let plane = Bivector {
                        yz: dy,
                        zx: -dx,
                        xy: T::zero(),
                    }
                    .normalized();
                    self.rotate(rotation_rotor(angle, plane))
                } else {
                    self
                }
            }
            OrientationInput::Rotate { angle, plane } => self.rotate(rotation_rotor(angle, plane)),
            OrientationInput::Set { angle, plane } => {
                let rotor = if plane.norm_squared() > T::zero() {
                    rotation_rotor(angle, plane.normalized())
                } else {
                    Rotor::identity_motor()
                };
                Orientation::from_rotor(rotor, self.config)
            }
        }
    }

    fn rotate(self, delta: Rotor<T>) -> Orientation<T> {
        let rotor = self.rotor.compose(delta);
        let updates_since_normalize = self.updates_since_normalize + 1;
        let every = self.config.renormalize_every;
        if every > 0 && updates_since_normalize >= every {
            log::debug!("re-normalizing orientation after {updates_since_normalize} updates");
            Orientation {
                rotor: rotor.normalized(),
                updates_since_normalize: 0,
                config: self.config,
            }
        } else {
            Orientation {
                rotor,
                updates_since_normalize,
                config: self.config,
            }
        }
    }
}

impl<T> Orientation<T>
where
    T: Rational + Sqrt<Output = T> + Recip<Output = T> + InvTrig<Output = T> + PartialOrd,
{
    /// The angle and plane that would [set](OrientationInput::Set) the current rotor,
    /// or `None` when the orientation is the identity
    pub fn angle_plane(&self) -> Option<(T, Bivector<T>)> {
        self.rotor.angle_plane()
    }
}

/// Screen-space bounds of the canvas that receives pointer input
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CanvasRect<T> {
    pub left: T,
    pub top: T,
    pub width: T,
    pub height: T,
}

impl<T: Rational + Recip<Output = T>> CanvasRect<T> {
    /// Map client coordinates to normalized device coordinates
    ///
    /// The canvas center maps to `(0, 0)`, its edges to ±1.
    /// Y is flipped so that up is positive.
    pub fn to_device(&self, client_x: T, client_y: T) -> [T; 2] {
        let half_w = self.width * T::one_half();
        let half_h = self.height * T::one_half();
        [
            (client_x - self.left - half_w) * half_w.recip(),
            (half_h - (client_y - self.top)) * half_h.recip(),
        ]
    }
}

/// Follows a pointer across frames and turns its motion into [OrientationInput]s
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DragTracker<T> {
    held: bool,
    last: [T; 2],
    delta: [T; 2],
    angle: T,
}

impl<T: Ring> Default for DragTracker<T> {
    fn default() -> Self {
        DragTracker {
            held: false,
            last: [T::zero(); 2],
            delta: [T::zero(); 2],
            angle: T::zero(),
        }
    }
}

impl<T: Ring + Sqrt<Output = T>> DragTracker<T> {
    /// A tracker that starts out spinning by `angle` per frame along `(dx, dy)`
    pub fn with_spin(dx: T, dy: T, angle: T) -> DragTracker<T> {
        DragTracker {
            delta: [dx, dy],
            angle,
            ..Default::default()
        }
    }

    /// Button pressed at the given device coordinates. Stops any spin.
    pub fn press(&mut self, at: [T; 2]) {
        self.held = true;
        self.last = at;
        self.delta = [T::zero(); 2];
    }

    /// Pointer moved. Ignored unless the button is held.
    pub fn drag(&mut self, at: [T; 2]) {
        if !self.held {
            return;
        }
        let [dx, dy] = [at[0] - self.last[0], at[1] - self.last[1]];
        self.delta = [dx, dy];
        self.angle = (dx * dx + dy * dy).sqrt();
        self.last = at;
    }

    /// Button released. The last delta keeps being replayed.
    pub fn release(&mut self) {
        self.held = false;
    }

    /// Zero the per-frame turn angle, e.g. after the orientation was set explicitly
    pub fn stop(&mut self) {
        self.angle = T::zero();
    }

    pub fn is_held(&self) -> bool {
        self.held
    }

    pub fn delta(&self) -> [T; 2] {
        self.delta
    }

    /// The input to apply this frame
    pub fn input(&self) -> OrientationInput<T> {
        OrientationInput::Drag {
            dx: self.delta[0],
            dy: self.delta[1],
            angle: self.angle,
        }
    }
}
