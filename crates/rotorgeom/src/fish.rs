//! An articulated fish
//!
//! The fish is a [Hierarchy] of thirteen parts hanging off its body,
//! driven by [ANGLE_COUNT] joint angles:
//!
//! | index | joint |
//! |---|---|
//! | 0 | body, xy |
//! | 1, 2 | first top fin, xy then yz |
//! | 3, 4 | second top fin, xy then yz |
//! | 5, 6, 7 | tail segments, xy |
//! | 8 | head, xy |
//! | 9, 10 | side fins, xy then yz (shared by both sides) |
//!
//! [FishAnimation] produces those angles from a clock,
//! either swimming or, for a while after being poked, thrashing.

#[cfg(not(feature = "std"))]
use alloc::vec;

use crate::error::SceneError;
use crate::hierarchy::*;
use crate::matrix::Matrix;
use crate::re3::*;
use crate::scalar::*;

/// Number of joint angles that pose the fish
pub const ANGLE_COUNT: usize = 11;

/// Length of one animation loop
pub const LOOP_MILLIS: u64 = 3000;

/// How long a poke lasts
pub const POKE_MILLIS: u64 = 2000;

const SKIN: Paint = Paint::Color([1., 0.5, 0.5, 1.]);
const EYE: Paint = Paint::Color([0., 0., 0., 1.]);

/// A vector given in hundredths
fn v<T: Rational>(x: isize, y: isize, z: isize) -> Vector<T> {
    Vector {
        x: T::from_fraction(x, 100),
        y: T::from_fraction(y, 100),
        z: T::from_fraction(z, 100),
    }
}

fn xy<T: Ring>(angle: usize) -> Joint<T> {
    Joint {
        plane: Bivector::xy_hat(),
        angle,
    }
}

fn yz<T: Ring>(angle: usize) -> Joint<T> {
    Joint {
        plane: Bivector::yz_hat(),
        angle,
    }
}

/// Build the fish's part table
pub fn hierarchy<T: Rational>() -> Result<Hierarchy<T>, SceneError> {
    let zero = Vector::default();
    let mirror = Some(v(100, 100, -100));

    let cube = |name, parent, mount, joints, pivot, scale| Part {
        name,
        parent,
        mirror: None,
        mount,
        joints,
        pivot,
        scale,
        primitive: Primitive::Cube,
        paint: SKIN,
    };
    let eye = |name, mirror| Part {
        name,
        parent: Some(6),
        mirror,
        mount: v(20, 20, -41),
        joints: vec![],
        pivot: zero,
        scale: v(10, 10, 100),
        primitive: Primitive::Circle,
        paint: EYE,
    };
    let right_fin = cube(
        "right_fin",
        Some(0),
        v(80, -50, -50),
        vec![xy(9), yz(10)],
        v(0, -50, 0),
        v(30, 100, 8),
    );
    let left_fin = Part {
        name: "left_fin",
        mirror,
        ..right_fin.clone()
    };

    Hierarchy::new(
        vec![
            cube("body", None, zero, vec![xy(0)], zero, v(250, 100, 100)),
            cube(
                "top_fin_1",
                Some(0),
                v(-70, 60, 0),
                vec![xy(1), yz(2)],
                zero,
                v(50, 50, 10),
            ),
            cube(
                "top_fin_2",
                Some(1),
                v(-20, 40, 0),
                vec![xy(3), yz(4)],
                zero,
                v(20, 50, 8),
            ),
            cube(
                "tail_1",
                Some(0),
                v(-140, 0, 0),
                vec![xy(5)],
                v(-50, 0, 0),
                v(150, 60, 80),
            ),
            cube(
                "tail_2",
                Some(3),
                v(-70, 0, 0),
                vec![xy(6)],
                v(-50, 0, 0),
                v(100, 40, 60),
            ),
            cube(
                "tail_3",
                Some(4),
                v(-50, 0, 0),
                vec![xy(7)],
                v(-50, 0, 0),
                v(100, 20, 200),
            ),
            cube(
                "head",
                Some(0),
                v(100, 0, 0),
                vec![xy(8)],
                v(50, 0, 0),
                v(100, 80, 80),
            ),
            cube("mouth_1", Some(6), v(50, -10, 0), vec![], zero, v(80, 30, 40)),
            cube("mouth_2", Some(7), v(30, 0, 0), vec![], zero, v(100, 20, 20)),
            right_fin,
            left_fin,
            eye("right_eye", None),
            eye("left_eye", mirror),
        ],
        ANGLE_COUNT,
    )
}

/// Loop position in [0, 1) at the given time
pub fn loop_percent<T: Rational>(millis: u64) -> T {
    // Both values are below LOOP_MILLIS, which fits any isize
    T::from_fraction((millis % LOOP_MILLIS) as isize, LOOP_MILLIS as isize)
}

/// Joint angles for the gentle swimming loop
pub fn swim_angles<T: Rational + Trig<Output = T>>(percent: T) -> [T; ANGLE_COUNT] {
    let turn = percent * T::tau();
    let s1 = turn.sin();
    let s2 = (turn * T::from_integer(2)).sin();
    let s4 = (turn * T::from_integer(4)).sin();
    let f = |n, d| T::from_fraction(n, d);
    [
        s1 * f(1, 4),
        s1 * f(1, 8) + f(1, 8),
        s1 * f(1, 4),
        s1 * f(1, 8) + f(54, 100),
        s1 * f(1, 4),
        -s1 * f(1, 2),
        s2 * f(1, 2),
        s2 * f(1, 2),
        s4 * f(1, 6),
        s1 * f(1, 8) - f(7, 10),
        s1 * f(1, 4) + f(6, 10),
    ]
}

/// Joint angles for the startled thrashing loop
pub fn poke_angles<T: Rational + Trig<Output = T>>(percent: T) -> [T; ANGLE_COUNT] {
    let turn = percent * T::tau();
    let s1 = turn.sin();
    let s2 = (turn * T::from_integer(2)).sin();
    let s4 = (turn * T::from_integer(4)).sin();
    let s8 = (turn * T::from_integer(8)).sin();
    let f = |n, d| T::from_fraction(n, d);
    [
        s2,
        s2 * f(1, 4) + f(1, 8),
        s2 * f(1, 2),
        s2 * f(1, 4) + f(54, 100),
        s2 * f(1, 2),
        -s4,
        s4 * T::from_integer(2),
        s4 * T::from_integer(2),
        s8,
        s1 * f(1, 8) - f(7, 10),
        s1 * f(1, 4) + f(6, 10),
    ]
}

/// Matrix that orients and shrinks the whole fish
pub fn global_matrix<T: Rational>(orientation: Rotor<T>) -> Matrix<T> {
    let s = T::from_fraction(1, 5);
    orientation.to_matrix() * Matrix::scale(s, s, s)
}

/// Chooses the fish's joint angles each frame
///
/// While animating, the generated angles are also copied into the manual angles,
/// so that switching animation off freezes the current pose.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FishAnimation<T> {
    pub enabled: bool,
    manual: [T; ANGLE_COUNT],
    poke_until: Option<u64>,
}

impl<T: Ring> Default for FishAnimation<T> {
    fn default() -> Self {
        FishAnimation {
            enabled: true,
            manual: [T::zero(); ANGLE_COUNT],
            poke_until: None,
        }
    }
}

impl<T: Rational + Trig<Output = T>> FishAnimation<T> {
    /// Start thrashing for [POKE_MILLIS]
    pub fn poke(&mut self, now_millis: u64) {
        log::debug!("fish poked at {now_millis} ms");
        self.poke_until = Some(now_millis + POKE_MILLIS);
    }

    pub fn is_poked(&self, now_millis: u64) -> bool {
        self.poke_until.is_some_and(|until| now_millis < until)
    }

    /// Override one joint angle. This turns the animation off.
    pub fn set_angle(&mut self, index: usize, angle: T) {
        if let Some(slot) = self.manual.get_mut(index) {
            self.enabled = false;
            *slot = angle;
        }
    }

    pub fn angles(&self) -> [T; ANGLE_COUNT] {
        self.manual
    }

    /// Advance to the given time and return the angles to draw with
    pub fn tick(&mut self, now_millis: u64) -> [T; ANGLE_COUNT] {
        if self.poke_until.is_some() && !self.is_poked(now_millis) {
            self.poke_until = None;
        }
        if self.enabled {
            let percent = loop_percent(now_millis);
            self.manual = if self.is_poked(now_millis) {
                poke_angles(percent)
            } else {
                swim_angles(percent)
            };
        }
        self.manual
    }
}

/// Draw the fish with the given orientation and joint angles
pub fn draw<T: Rational + Trig<Output = T>>(
    fish: &Hierarchy<T>,
    orientation: Rotor<T>,
    angles: &[T],
    target: &mut impl DrawTarget<T>,
) -> Result<(), SceneError> {
    target.set_view(global_matrix(orientation));
    fish.draw(Matrix::identity(), angles, target)
}
