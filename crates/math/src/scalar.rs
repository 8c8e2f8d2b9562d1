use core::fmt;

use num_traits::Num;

/// Element type accepted by the vector and matrix types.
///
/// Implemented for the primitive floats and integers. Division on integers
/// truncates, which matters for inversion.
pub trait Scalar: Num + Copy + PartialOrd + fmt::Debug + fmt::Display + 'static {
    /// False for infinities and NaN. Integers are always finite.
    fn is_finite_scalar(self) -> bool;

    /// Whether dividing by `det` yields a finite reciprocal.
    #[inline]
    fn is_invertible_det(det: Self) -> bool {
        !det.is_zero() && (Self::one() / det).is_finite_scalar()
    }
}

macro_rules! float_scalar_impl {
    ($($t: ty),*) => {
        $(
            impl Scalar for $t {
                #[inline]
                fn is_finite_scalar(self) -> bool {
                    <$t>::is_finite(self)
                }
            }
        )*
    }
}

macro_rules! int_scalar_impl {
    ($($t: ty),*) => {
        $(
            impl Scalar for $t {
                #[inline]
                fn is_finite_scalar(self) -> bool {
                    true
                }
            }
        )*
    }
}

float_scalar_impl!(f32, f64);
int_scalar_impl!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invertible_determinants() {
        assert!(f32::is_invertible_det(0.5));
        assert!(!f32::is_invertible_det(0.0));
        assert!(!f32::is_invertible_det(1e-40));
        assert!(!f64::is_invertible_det(f64::NAN));
        assert!(i32::is_invertible_det(-1));
        assert!(!i32::is_invertible_det(0));
    }
}
