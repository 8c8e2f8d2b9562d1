pub mod scalar;
pub mod layout;
pub mod vec;
pub mod mat;
pub mod affine;
pub mod inverse;
pub mod error;

pub use affine::{mul_affine_matrices, AffineMatrix3T, Initializer};
pub use error::MathError;
pub use inverse::inverse_affine3;
pub use layout::{ColumnMajor, ColumnVectors, RowMajor, RowVectors, StorageOrder, VectorConvention};
pub use mat::{determinant, Matrix};
pub use scalar::Scalar;
pub use vec::{Vector2T, Vector3T};
