#![cfg(all(test, feature = "std"))]

use core::f64::consts::{FRAC_PI_2, FRAC_PI_4, PI, TAU};

use crate::algebraic_ops::*;
use crate::camera::*;
use crate::hierarchy::*;
use crate::matrix::Matrix;
use crate::ops::*;
use crate::orientation::*;
use crate::re3::*;
use crate::timing::FrameRateMeter;

macro_rules! assert_close {
    ($left:expr, $right:expr $(,)?) => {
        match (&$left, &$right) {
            (left_val, right_val) => {
                assert!(
                    (*left_val).is_close(*right_val),
                    "{:?} !~= {:?}",
                    left_val,
                    right_val
                );
            }
        }
    };
}

trait IsClose {
    fn is_close(self, rhs: Self) -> bool;
}

const TOL: f64 = 1e-9;

impl IsClose for f64 {
    fn is_close(self, rhs: f64) -> bool {
        (self - rhs).abs() < TOL
    }
}

impl IsClose for Vector<f64> {
    fn is_close(self, rhs: Self) -> bool {
        (self - rhs).norm_squared() < TOL * TOL
    }
}

impl IsClose for Bivector<f64> {
    fn is_close(self, rhs: Self) -> bool {
        (self - rhs).norm_squared() < TOL * TOL
    }
}

impl IsClose for Rotor<f64> {
    fn is_close(self, rhs: Self) -> bool {
        (self - rhs).norm_squared() < TOL * TOL
    }
}

impl IsClose for Matrix<f64> {
    fn is_close(self, rhs: Self) -> bool {
        (0..4).all(|r| (0..4).all(|c| self[r][c].is_close(rhs[r][c])))
    }
}

impl IsClose for [f64; 4] {
    fn is_close(self, rhs: Self) -> bool {
        (0..4).all(|i| self[i].is_close(rhs[i]))
    }
}

fn plane(yz: f64, zx: f64, xy: f64) -> Bivector<f64> {
    Bivector { yz, zx, xy }.normalized()
}

fn sample_rotors() -> Vec<Rotor<f64>> {
    vec![
        rotation_rotor(0.3, plane(1., 0., 0.)),
        rotation_rotor(-1.7, plane(0., 1., 0.)),
        rotation_rotor(2.9, plane(0., 0., 1.)),
        rotation_rotor(1.1, plane(1., 2., 3.)),
        rotation_rotor(5.5, plane(-4., 0.5, 2.)),
    ]
}

#[test]
fn test_composition_preserves_unit_norm() {
    let rotors = sample_rotors();
    for &a in &rotors {
        assert_close!(a.norm(), 1.);
        for &b in &rotors {
            assert_close!(a.wedge_dot(b).norm(), 1.);
            assert_close!(a.compose(b).norm(), 1.);
        }
    }
}

#[test]
fn test_zero_angle_is_identity() {
    let r = rotation_rotor(0., plane(1., 2., 3.));
    assert_close!(r, Rotor::identity_motor());

    for s in sample_rotors() {
        assert_close!(s.wedge_dot(r), s);
        assert_close!(r.wedge_dot(s), s);
    }
}

#[test]
fn test_double_angle() {
    for &p in &[plane(1., 0., 0.), plane(0., 1., 0.), plane(3., -1., 2.)] {
        for &theta in &[0.2, 1., -2.4, PI] {
            let r = rotation_rotor(theta, p);
            assert_close!(r.wedge_dot(r), rotation_rotor(2. * theta, p));
        }
    }
}

#[test]
fn test_inverse() {
    for r in sample_rotors() {
        assert_close!(r.wedge_dot(r.inverse_transformation()), Rotor::identity_motor());
        assert_close!(r.inverse_transformation().wedge_dot(r), Rotor::identity_motor());
        assert_close!(r.reverse().bivector(), -r.bivector());
    }
}

#[test]
fn test_rotor_matrix_is_orthonormal() {
    for r in sample_rotors() {
        let m = r.to_matrix();
        for i in 0..3 {
            for j in 0..3 {
                let dot: f64 = (0..3).map(|k| m[i][k] * m[j][k]).sum();
                assert_close!(dot, if i == j { 1. } else { 0. });
            }
            assert_close!(m[i][3], 0.);
            assert_close!(m[3][i], 0.);
        }
        assert_close!(m[3][3], 1.);
    }
}

#[test]
fn test_rotor_matrix_of_non_unit_rotor() {
    let r = Rotor {
        a: 2.,
        yz: 0.,
        zx: 0.,
        xy: 0.,
    };
    assert_close!(r.to_matrix()[3][3], 4.);
}

#[test]
fn test_product_matches_matrix_product() {
    // a ⟑ b applies b first, like the matrix product M(a) * M(b)
    let rotors = sample_rotors();
    for &a in &rotors {
        for &b in &rotors {
            assert_close!(a.wedge_dot(b).to_matrix(), a.to_matrix() * b.to_matrix());
            assert_close!(a.compose(b).to_matrix(), b.to_matrix() * a.to_matrix());
        }
    }
}

#[test]
fn test_quarter_turn_in_zx() {
    let r = Rotor {
        a: FRAC_PI_4.cos(),
        yz: 0.,
        zx: FRAC_PI_4.sin(),
        xy: 0.,
    };
    let v = Vector {
        x: 0.,
        y: 0.,
        z: -1.,
    };
    assert_close!(
        v.transform(r),
        Vector {
            x: -1.,
            y: 0.,
            z: 0.
        }
    );
    assert_close!(rotation_rotor(FRAC_PI_2, Bivector::<f64>::zx_hat()), r);
}

#[test]
fn test_xy_turns_x_toward_y() {
    let r = rotation_rotor(FRAC_PI_2, Bivector::<f64>::xy_hat());
    assert_close!(Vector::x_hat().transform(r), Vector::y_hat());
    assert_close!(Vector::y_hat().transform_inverse(r), Vector::x_hat());
}

#[test]
fn test_angle_plane() {
    let p = plane(1., 2., 3.);
    let (angle, q) = rotation_rotor(1.2, p).angle_plane().unwrap();
    assert_close!(angle, 1.2);
    assert_close!(q, p);

    assert_eq!(Rotor::<f64>::identity_motor().angle_plane(), None);

    // Drifted scalar parts are clamped to a full turn
    let drifted = Rotor {
        a: -1.5,
        yz: 0.,
        zx: 0.,
        xy: 0.5,
    };
    let (angle, q) = drifted.angle_plane().unwrap();
    assert_close!(angle, TAU);
    assert_close!(q, Bivector::xy_hat());
}

#[test]
fn test_normalize() {
    let v = Vector {
        x: 3.,
        y: 0.,
        z: 4.,
    };
    assert_close!(
        v.normalized(),
        Vector {
            x: 0.6,
            y: 0.,
            z: 0.8
        }
    );

    let r = Rotor {
        a: 3.,
        yz: 0.,
        zx: 4.,
        xy: 0.,
    };
    assert_close!(r.normalized().norm(), 1.);

    let zero = Vector::<f64>::default().normalized();
    assert!(zero.x.is_nan());
}

#[test]
fn test_translation_then_scale() {
    let m = Matrix::<f64>::translation(1., 2., 3.) * Matrix::scale(2., 2., 2.);
    assert_close!(m.mul_homogeneous([0., 0., 0., 1.]), [1., 2., 3., 1.]);
    assert_close!(m.mul_homogeneous([1., 0., 0., 1.]), [3., 2., 3., 1.]);
}

#[test]
fn test_integer_matrices() {
    let m = Matrix::<i32>::translation(1, 2, 3) * Matrix::scale(2, 2, 2);
    assert_eq!(m.mul_homogeneous([1, 0, 0, 1]), [3, 2, 3, 1]);
    assert_eq!(
        Matrix::product_of([Matrix::scale(2, 2, 2), Matrix::translation(1, 2, 3)]),
        Matrix::translation(2, 4, 6) * Matrix::scale(2, 2, 2)
    );
}

#[test]
fn test_product_of() {
    assert_eq!(Matrix::<f64>::product_of([]), Matrix::identity());

    let m = Matrix::translation(1., 2., 3.) * Matrix::scale(4., 5., 6.);
    assert_eq!(Matrix::product_of([m]), m);

    let r = rotation_rotor(0.7, plane(1., 1., 0.)).to_matrix();
    let t = Matrix::translation(-1., 0., 2.);
    assert_close!(Matrix::product_of([r, t, m]), r * t * m);
    assert_close!([r, t, m].into_iter().product::<Matrix<f64>>(), r * t * m);
}

#[test]
fn test_mul_direction_ignores_translation() {
    let m = Matrix::<f64>::translation(5., 6., 7.) * Matrix::scale(2., 3., 4.);
    let v = Vector {
        x: 1.,
        y: 1.,
        z: 1.,
    };
    assert_close!(
        m.mul_direction(v),
        Vector {
            x: 2.,
            y: 3.,
            z: 4.
        }
    );
    assert_close!(
        m.mul_point(v),
        Vector {
            x: 7.,
            y: 9.,
            z: 11.
        }
    );
}

#[test]
fn test_column_major() {
    let flat = Matrix::<f64>::translation(1., 2., 3.).to_column_major();
    assert_eq!(
        flat,
        [1., 0., 0., 0., 0., 1., 0., 0., 0., 0., 1., 0., 1., 2., 3., 1.]
    );

    let m = rotation_rotor(0.4, plane(0., 1., 1.)).to_matrix();
    let flat = m.to_column_major();
    for i in 0..16 {
        assert_eq!(flat[i], m[i % 4][i / 4]);
    }
}

#[test]
fn test_canvas_to_device() {
    let rect = CanvasRect {
        left: 10.,
        top: 20.,
        width: 200.,
        height: 100.,
    };
    assert_eq!(rect.to_device(110., 70.), [0., 0.]);
    assert_eq!(rect.to_device(210., 20.), [1., 1.]);
    assert_eq!(rect.to_device(10., 120.), [-1., -1.]);
}

#[test]
fn test_drag_spins_after_release() {
    let mut tracker = DragTracker::<f64>::default();
    let mut orientation = Orientation::default();

    tracker.press([0., 0.]);
    orientation = orientation.update(tracker.input());
    assert_close!(orientation.rotor(), Rotor::identity_motor());

    tracker.drag([0.1, 0.]);
    tracker.release();
    assert!(!tracker.is_held());

    // Horizontal drags turn in the zx plane
    let step = rotation_rotor(0.1, -Bivector::<f64>::zx_hat());
    for _ in 0..3 {
        orientation = orientation.update(tracker.input());
    }
    assert_close!(
        orientation.rotor(),
        step.wedge_dot(step).wedge_dot(step)
    );

    // Moves without the button held are ignored
    tracker.drag([0.5, 0.5]);
    assert_eq!(tracker.delta(), [0.1, 0.]);

    tracker.stop();
    let stopped = orientation.update(tracker.input());
    assert_close!(stopped.rotor(), orientation.rotor());
}

#[test]
fn test_drag_delta_composes_on_left() {
    let start = rotation_rotor(0.5, Bivector::yz_hat());
    let orientation = Orientation::from_rotor(start, OrientationConfig::default());
    let tracker = DragTracker::with_spin(0.01, 0.04, 0.077);
    let delta = rotation_rotor(0.077, plane(0.04, -0.01, 0.));
    assert_close!(
        orientation.update(tracker.input()).rotor(),
        delta.wedge_dot(start)
    );
}

#[test]
fn test_press_stops_spin() {
    let start = rotation_rotor(0.5, Bivector::yz_hat());
    let orientation = Orientation::from_rotor(start, OrientationConfig::default());
    let mut tracker = DragTracker::with_spin(0.01, 0.04, 0.077);

    tracker.press([0.3, -0.2]);
    assert_eq!(tracker.delta(), [0., 0.]);
    let held = orientation.update(tracker.input());
    assert_close!(held.rotor(), start);

    // Still stopped after letting go without moving
    tracker.release();
    assert_close!(held.update(tracker.input()).rotor(), start);
}

#[test]
fn test_set_orientation() {
    let orientation = Orientation::<f64>::default().update(OrientationInput::Set {
        angle: 1.,
        plane: Bivector {
            yz: 0.,
            zx: 0.,
            xy: 5.,
        },
    });
    assert_close!(orientation.rotor(), rotation_rotor(1., Bivector::xy_hat()));

    let (angle, p) = orientation.angle_plane().unwrap();
    assert_close!(angle, 1.);
    assert_close!(p, Bivector::xy_hat());

    let reset = orientation.update(OrientationInput::Set {
        angle: 1.,
        plane: Bivector::default(),
    });
    assert_close!(reset.rotor(), Rotor::identity_motor());
}

#[test]
fn test_periodic_renormalization() {
    let drifted = Rotor {
        a: 2.,
        yz: 0.,
        zx: 0.,
        xy: 0.,
    };
    let nothing = OrientationInput::Rotate {
        angle: 0.,
        plane: Bivector::xy_hat(),
    };

    let config = OrientationConfig {
        renormalize_every: 2,
    };
    let o = Orientation::from_rotor(drifted, config).update(nothing);
    assert_close!(o.rotor().a, 2.);
    let o = o.update(nothing);
    assert_close!(o.rotor(), Rotor::identity_motor());

    let config = OrientationConfig {
        renormalize_every: 0,
    };
    let mut o = Orientation::from_rotor(drifted, config);
    for _ in 0..100 {
        o = o.update(nothing);
    }
    assert_close!(o.rotor().a, 2.);
}

#[test]
fn test_long_session_stays_unit() {
    let mut o = Orientation::<f64>::default();
    for i in 0..10_000 {
        let t = i as f64;
        o = o.update(OrientationInput::Drag {
            dx: (t * 0.37).sin() * 0.03,
            dy: (t * 0.11).cos() * 0.02,
            angle: 0.05,
        });
    }
    assert_close!(o.rotor().norm(), 1.);
}

#[test]
fn test_camera_directions() {
    let camera = Camera::<f64>::new(
        Vector::default(),
        Orientation::default(),
        CameraConfig::default(),
    );
    assert_close!(camera.forward(), -Vector::<f64>::z_hat());
    assert_close!(camera.right(), Vector::<f64>::x_hat());
}

#[test]
fn test_camera_moves() {
    let start = Vector {
        x: 1.,
        y: 2.,
        z: 3.,
    };
    let camera = Camera::<f64>::new(start, Orientation::default(), CameraConfig::default());

    assert_close!(
        camera.apply(CameraMove::Forward).position,
        Vector {
            x: 1.,
            y: 2.,
            z: 2.5
        }
    );
    assert_close!(
        camera.apply(CameraMove::Left).position,
        Vector {
            x: 0.5,
            y: 2.,
            z: 3.
        }
    );
    assert_close!(camera.apply(CameraMove::Back).apply(CameraMove::Forward).position, start);

    // Yawing right turns forward towards +X
    let turned = camera.apply(CameraMove::YawRight);
    assert_close!(turned.position, start);
    assert_close!(
        turned.forward(),
        Vector {
            x: 0.1f64.sin(),
            y: 0.,
            z: -0.1f64.cos()
        }
    );
    assert_close!(
        turned.apply(CameraMove::YawLeft).orientation.rotor(),
        Rotor::identity_motor()
    );
}

#[test]
fn test_view_matrix() {
    let position = Vector {
        x: 16.,
        y: 16.,
        z: 16.,
    };
    let orientation = Orientation::from_rotor(
        rotation_rotor(0.5, Bivector::yz_hat()),
        OrientationConfig::default(),
    );
    let camera = Camera::new(position, orientation, CameraConfig::default());
    let view = camera.view_matrix();

    assert_close!(view.mul_point(position), Vector::default());
    // One unit ahead of the camera lands 0.2 units down the view axis
    assert_close!(
        view.mul_point(position + camera.forward()),
        Vector {
            x: 0.,
            y: 0.,
            z: -0.2
        }
    );
}

#[test]
fn test_primitive_outlines() {
    assert_eq!(Primitive::Cube.edges::<f64>().len(), 12);
    assert_eq!(Primitive::Plane.edges::<f64>().len(), 4);
    assert_eq!(Primitive::Circle.edges::<f64>().len(), CIRCLE_SEGMENTS);

    for [a, b] in Primitive::Cube.edges::<f64>() {
        // Edges run along exactly one axis
        assert_close!((b - a).norm(), 1.);
    }
    for [a, _] in Primitive::Circle.edges::<f64>() {
        assert_close!(a.norm(), 1.);
        assert_close!(a.z, 0.);
    }

    let centering = Primitive::Cube.centering::<f64>();
    for [a, b] in Primitive::Cube.edges::<f64>() {
        for p in [centering.mul_point(a), centering.mul_point(b)] {
            assert_close!(p.x.abs(), 0.5);
            assert_close!(p.y.abs(), 0.5);
            assert_close!(p.z.abs(), 0.5);
        }
    }
}

#[test]
fn test_frame_rate_meter() {
    let mut meter = FrameRateMeter::new();
    assert_eq!(meter.fps(), None);
    for t in [0., 16., 32., 48., 64.] {
        meter.record(t);
    }
    assert_close!(meter.millis_per_frame(), 16.);
    assert_close!(meter.fps().unwrap(), 62.5);

    meter.record(84.);
    assert_close!(meter.millis_per_frame(), 17.);
}
