use crate::affine::AffineMatrix3T;
use crate::layout::{StorageOrder, VectorConvention};
use crate::scalar::Scalar;

/// Writes the inverse of `m` into `out`.
///
/// Returns `false` and leaves `out` untouched when the determinant is zero,
/// when its reciprocal is not finite, or when any inverted element would be
/// infinite or NaN. With integer scalars the result is only exact for
/// determinants of `1` or `-1`.
pub fn inverse_affine3<T, S, V>(out: &mut AffineMatrix3T<T, S, V>, m: &AffineMatrix3T<T, S, V>) -> bool
where
    T: Scalar,
    S: StorageOrder,
    V: VectorConvention,
{
    // Transposition commutes with inversion, so working in column-vector
    // notation through `at` covers both conventions.
    let (a, b, tx) = (m.at(0, 0), m.at(0, 1), m.at(0, 2));
    let (c, d, ty) = (m.at(1, 0), m.at(1, 1), m.at(1, 2));

    let det = a * d - b * c;
    if !T::is_invertible_det(det) {
        log::debug!("cannot invert singular affine matrix {} (determinant {})", m, det);
        return false;
    }

    let inv_det = T::one() / det;

    // Column-vector notation: (0,0) (0,1) (1,0) (1,1) (0,2) (1,2).
    let inv = [
        inv_det * d,
        inv_det * (T::zero() - b),
        inv_det * (T::zero() - c),
        inv_det * a,
        inv_det * (b * ty - d * tx),
        inv_det * (c * tx - a * ty),
    ];
    if !inv.iter().all(|v| v.is_finite_scalar()) {
        log::debug!("inverse of affine matrix {} is not finite", m);
        return false;
    }

    *out.at_mut(0, 0) = inv[0];
    *out.at_mut(0, 1) = inv[1];
    *out.at_mut(1, 0) = inv[2];
    *out.at_mut(1, 1) = inv[3];
    *out.at_mut(0, 2) = inv[4];
    *out.at_mut(1, 2) = inv[5];

    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::{ColumnMajor, ColumnVectors, RowMajor, RowVectors};
    use crate::vec::Vector2T;

    #[test]
    fn translation_negates() {
        let m = AffineMatrix3T::<f64>::translation(Vector2T::new(5., 7.));
        let mut out = AffineMatrix3T::new_zeroed();
        assert!(inverse_affine3(&mut out, &m));
        assert_eq!(out.position(), Vector2T::new(-5., -7.));
        assert_eq!(out.at(0, 0), 1.);
        assert_eq!(out.at(1, 1), 1.);
    }

    #[test]
    fn singular_leaves_output() {
        let m = AffineMatrix3T::<f32, RowMajor, RowVectors>::new(0., 0., 0., 0., 3., 4.);
        let mut out = AffineMatrix3T::identity();
        assert!(!inverse_affine3(&mut out, &m));
        assert_eq!(out, AffineMatrix3T::identity());
    }

    #[test]
    fn near_singular_is_rejected() {
        let m = AffineMatrix3T::<f32>::new(1e-20, 0., 0., 0., 1e-20, 0.);
        let mut out = AffineMatrix3T::identity();
        assert!(!inverse_affine3(&mut out, &m));
        assert_eq!(out, AffineMatrix3T::identity());

        let mut in_place = m;
        assert!(!in_place.make_inverse());
        assert_eq!(in_place, m);
        assert_eq!(m.inverse(), None);
    }

    #[test]
    fn overflowing_translation_is_rejected() {
        let m = AffineMatrix3T::<f32>::new(1e-18, 0., 1e30, 0., 1e-18, 0.);
        let mut out = AffineMatrix3T::new_zeroed();
        assert!(!inverse_affine3(&mut out, &m));
        assert!(out.as_slice().iter().all(|v| v.is_finite()));
    }

    #[test]
    fn integer_unimodular() {
        // Shear by 1 with a translation: determinant 1.
        let m = AffineMatrix3T::<i32, ColumnMajor, ColumnVectors>::new(1, 1, 2, 0, 1, 3);
        let mut out = AffineMatrix3T::new_zeroed();
        assert!(inverse_affine3(&mut out, &m));
        assert_eq!(m * out, AffineMatrix3T::identity());
        assert_eq!(out * m, AffineMatrix3T::identity());
    }
}
