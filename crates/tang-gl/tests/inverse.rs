//! Inversion laws for Mat3 and Mat4, including the Gauss-Jordan solver directly.

use tang_gl::scalar::deg_to_rad;
use tang_gl::{gauss_jordan, AlmostEq, Mat3, Mat4, MathError, Quat, Vec3};

/// Small xorshift so the cases are reproducible.
struct XorShift(u32);

impl XorShift {
    fn next_f32(&mut self) -> f32 {
        self.0 ^= self.0 << 13;
        self.0 ^= self.0 >> 17;
        self.0 ^= self.0 << 5;
        (self.0 >> 8) as f32 / (1u32 << 24) as f32 * 2.0 - 1.0
    }

    /// Diagonally dominant, so always well-conditioned.
    fn mat4(&mut self) -> Mat4 {
        let mut m = Mat4::zero();
        for c in 0..4 {
            for r in 0..4 {
                m.set(r, c, self.next_f32());
            }
            m.set(c, c, 5.0 + self.next_f32());
        }
        m
    }
}

#[test]
fn mat3_reference_case() {
    let m = Mat3::from_cols_array([5.0, 8.0, 1.0, 2.0, 9.0, 3.0, 4.0, 7.0, 4.0]);
    assert_eq!(m.determinant(), 85.0);

    let mut inv = m;
    inv.inverse().unwrap();
    assert!((inv * m).is_identity(), "M^-1 * M =\n{}", inv * m);
    assert!((m * inv).is_identity());
}

#[test]
fn mat3_singular_is_reported() {
    let mut m = Mat3::new(1.0, 2.0, 3.0, 2.0, 4.0, 6.0, 0.0, 1.0, 1.0);
    assert_eq!(m.determinant(), 0.0);
    let before = m;
    assert_eq!(m.inverse(), Err(MathError::ZeroDeterminant));
    assert_eq!(m, before);
}

#[test]
fn mat4_identity() {
    let id = Mat4::identity();
    assert_eq!(id.determinant(), 1.0);
    assert!(id.is_identity());
    assert_eq!(id.inverted(), Ok(id));
}

#[test]
fn mat4_random_roundtrip() {
    let mut rng = XorShift(0x9e37_79b9);
    for _ in 0..200 {
        let m = rng.mat4();
        let inv = m.inverted().unwrap();
        assert!((inv * m).is_identity(), "M =\n{}\nM^-1 * M =\n{}", m, inv * m);
        assert!((m * inv).is_identity());
    }
}

#[test]
fn mat4_inverse_of_transform_chain() {
    let q = Quat::from_axis_angle(Vec3::new(0.0, 0.6, 0.8), deg_to_rad(70.0));
    let mut m = Mat4::translation(3.0, -1.0, 2.0);
    m.multiply(&q.to_mat4());
    m.multiply(&Mat4::scaling(2.0, 0.5, 1.5));

    let mut inv = m;
    inv.inverse().unwrap();
    assert!((inv * m).is_identity());

    let original = Vec3::new(0.25, -4.0, 1.0);
    let mut p = original;
    p.transform(&m);
    p.transform(&inv);
    assert!(p.almost_eq(&original), "{} vs {}", p, original);
}

#[test]
fn mat4_rigid_inverse_matches_inverse_transform() {
    let m = Mat4::from_rotation_translation(Mat3::rotation_y(deg_to_rad(30.0)), Vec3::new(1.0, 2.0, 3.0));
    let inv = m.inverted().unwrap();
    let mut a = Vec3::new(4.0, 5.0, 6.0);
    let mut b = a;
    a.transform(&inv);
    b.inverse_transform(&m);
    assert!(a.almost_eq(&b), "{} vs {}", a, b);
}

#[test]
fn mat4_singular_is_reported() {
    let mut m = Mat4::new(
        1.0, 2.0, 3.0, 4.0,
        2.0, 4.0, 6.0, 8.0,
        0.0, 1.0, 0.0, 1.0,
        1.0, 0.0, 1.0, 0.0,
    );
    let before = m;
    let err = m.inverse().unwrap_err();
    assert!(matches!(err, MathError::SingularPivot { .. }), "{err:?}");
    assert_eq!(m, before);
    assert!(Mat4::zero().inverted().is_err());
}

#[test]
fn solver_outputs_agree() {
    let mut rng = XorShift(12345);
    for _ in 0..50 {
        let m = rng.mat4();
        let mut a = m;
        let mut b = Mat4::identity();
        gauss_jordan(&mut a, &mut b).unwrap();
        assert!(a.almost_eq(&b), "a =\n{}\nb =\n{}", a, b);
    }
}

#[test]
fn solver_general_right_hand_side() {
    let mut rng = XorShift(777);
    let m = rng.mat4();
    let rhs = Mat4::rotation_x(0.4) * Mat4::translation(1.0, -2.0, 0.5);
    let mut a = m;
    let mut x = rhs;
    gauss_jordan(&mut a, &mut x).unwrap();
    assert!((m * x).almost_eq(&rhs));
    // `a` is still the plain inverse
    assert!((a * m).is_identity());
}
