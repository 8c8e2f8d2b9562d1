use thiserror::Error;

/// Failures reported as values by the matrix types.
///
/// Index violations are programming errors and are not listed here, they
/// trip a debug assertion instead.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MathError {
    /// The determinant is zero so no inverse exists.
    #[error("matrix is singular and cannot be inverted")]
    SingularMatrix,

    /// A flat buffer did not have the number of elements the matrix stores.
    #[error("expected {expected} elements, got {actual}")]
    LengthMismatch {
        expected: usize,
        actual: usize,
    },
}
