//! Affine, dense and vector types configured for this build.
//!
//! The `math` crate is generic over layout. This crate fixes the layout once
//! for every matrix in the program through Cargo features:
//!
//! - `row_major_storage`: store elements row by row (default column by column),
//! - `row_vectors`: points are row vectors and the translation is the last
//!   row (default column vectors, translation in the last column),
//! - `real_double`: [`Real`] is `f64` (default `f32`).

pub use math::affine::{mul_affine_matrices, Initializer};
pub use math::error::MathError;
pub use math::inverse::inverse_affine3;
pub use math::layout::{ColumnMajor, ColumnVectors, RowMajor, RowVectors, StorageOrder, VectorConvention};
pub use math::mat::determinant;
pub use math::scalar::Scalar;
pub use math::vec::{Vector2T, Vector3T};

#[cfg(feature = "row_major_storage")]
pub type Storage = RowMajor;
#[cfg(not(feature = "row_major_storage"))]
pub type Storage = ColumnMajor;

#[cfg(feature = "row_vectors")]
pub type Convention = RowVectors;
#[cfg(not(feature = "row_vectors"))]
pub type Convention = ColumnVectors;

#[cfg(feature = "real_double")]
pub type Real = f64;
#[cfg(not(feature = "real_double"))]
pub type Real = f32;

pub type AffineMatrix3T<T> = math::affine::AffineMatrix3T<T, Storage, Convention>;

pub type AffineMatrix3 = AffineMatrix3T<Real>;
pub type AffineMatrix3f = AffineMatrix3T<f32>;
pub type AffineMatrix3d = AffineMatrix3T<f64>;
pub type AffineMatrix3i = AffineMatrix3T<i32>;

pub type Matrix3T<T> = math::mat::Matrix<T, 3>;
pub type Matrix3 = Matrix3T<Real>;

pub type Vector2 = Vector2T<Real>;
pub type Vector2f = Vector2T<f32>;
pub type Vector2d = Vector2T<f64>;
pub type Vector2i = Vector2T<i32>;
