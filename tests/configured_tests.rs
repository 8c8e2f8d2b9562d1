//! Tests against the layout chosen by the crate features.

use approx::assert_relative_eq;
use gauss::{
    AffineMatrix3, AffineMatrix3d, AffineMatrix3i, Convention, Matrix3, MathError, Real, Storage,
    StorageOrder, Vector2, Vector2i, VectorConvention,
};

#[test]
fn features_pick_the_layout() {
    assert_eq!(Storage::ROW_MAJOR, cfg!(feature = "row_major_storage"));
    assert_eq!(Convention::ROW_VECTORS, cfg!(feature = "row_vectors"));
    assert_eq!(
        core::mem::size_of::<Real>(),
        if cfg!(feature = "real_double") { 8 } else { 4 }
    );
}

#[test]
#[cfg(not(feature = "row_vectors"))]
fn translation_scenario() {
    let a = AffineMatrix3::new(
        1.0, 0.0, 5.0,
        0.0, 1.0, 7.0,
    );
    let b = AffineMatrix3::identity();

    assert_eq!(a * b, a);
    assert_eq!(a.position(), Vector2::new(5.0, 7.0));
    assert_eq!(a.inverse().unwrap().position(), Vector2::new(-5.0, -7.0));
}

#[test]
#[cfg(feature = "row_vectors")]
fn translation_scenario() {
    let a = AffineMatrix3::new(
        1.0, 0.0,
        0.0, 1.0,
        5.0, 7.0,
    );
    let b = AffineMatrix3::identity();

    assert_eq!(a * b, a);
    assert_eq!(a.position(), Vector2::new(5.0, 7.0));
    assert_eq!(a.inverse().unwrap().position(), Vector2::new(-5.0, -7.0));
}

#[test]
fn scale_then_translate() {
    let t = AffineMatrix3d::translation(gauss::Vector2d::new(1.0, 2.0));
    let s = AffineMatrix3d::scaling(3.0, 3.0);

    // Whichever way the convention reads a product, this one scales first.
    let m = if Convention::ROW_VECTORS { s * t } else { t * s };
    assert_eq!(m.transform_point(gauss::Vector2d::new(1.0, 1.0)), gauss::Vector2d::new(4.0, 5.0));

    let inv = m.try_inverse().unwrap();
    assert_relative_eq!(m * inv, AffineMatrix3d::identity(), epsilon = 1e-12);
}

#[test]
fn singular_matrix_errors() {
    let m = AffineMatrix3::new_zeroed();
    assert_eq!(m.try_inverse(), Err(MathError::SingularMatrix));
    assert_eq!(MathError::SingularMatrix.to_string(), "matrix is singular and cannot be inverted");
}

#[test]
fn integer_matrices() {
    let mut m = AffineMatrix3i::identity();
    m.set_position(Vector2i::new(-3, 9));
    assert_eq!(m.transform_point(Vector2i::new(1, 1)), Vector2i::new(-2, 10));
    assert_eq!(m.determinant(), 1);
    assert_eq!(m.trace(), 3);
    assert_eq!(m.inverse().unwrap().position(), Vector2i::new(3, -9));
}

#[test]
fn dense_promotion() {
    let m = AffineMatrix3::rotation(0.25);
    let dense: Matrix3 = m.into();
    assert_eq!(dense, m.to_matrix());
    assert_eq!(m.transposed(), dense.transpose());
    assert_relative_eq!(dense.determinant(), 1.0, epsilon = 1e-6);
}

#[test]
fn flat_buffer_round_trip() {
    let m = AffineMatrix3::rotation(1.0);
    let copy = AffineMatrix3::from_slice(m.as_slice()).unwrap();
    assert_eq!(copy, m);
    assert_eq!(
        AffineMatrix3::from_slice(&[0.0; 9]),
        Err(MathError::LengthMismatch { expected: 6, actual: 9 })
    );
}
