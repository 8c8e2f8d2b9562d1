//! Sparse 3x3 affine matrices for 2D transforms.

use core::fmt;
use core::hash::{Hash, Hasher};
use core::marker::PhantomData;
use core::mem::MaybeUninit;
use core::ops;

use approx::{AbsDiffEq, RelativeEq};
use bytemuck::{Pod, Zeroable};
use num_traits::Float;

use crate::error::MathError;
use crate::inverse::inverse_affine3;
use crate::layout::{ColumnMajor, ColumnVectors, StorageOrder, VectorConvention};
use crate::mat::{self, Matrix};
use crate::scalar::Scalar;
use crate::vec::Vector2T;

/// Affine 3x3 matrix: translation, scaling, rotation and shearing only.
///
/// Only six elements are stored. The remaining row (or column, with
/// [`RowVectors`](crate::layout::RowVectors)) is implicitly `(0, 0, 1)`:
///
/// ```text
/// column vectors      row vectors
/// / x1 y1 z1 \        / x1 x2 0 \
/// | x2 y2 z2 |        | y1 y2 0 |
/// \  0  0  1 /        \ z1 z2 1 /
/// ```
///
/// In both cases `(z1, z2)` is the position. `S` picks how the six elements
/// are laid out in memory, `V` picks the vector convention.
#[repr(C)]
pub struct AffineMatrix3T<T, S = ColumnMajor, V = ColumnVectors> {
    m: [T; 6],
    _layout: PhantomData<(S, V)>,
}

// repr(C), six T followed by a zero-sized marker: no padding.
unsafe impl<T: Zeroable, S, V> Zeroable for AffineMatrix3T<T, S, V> {}
unsafe impl<T: Pod, S: 'static, V: 'static> Pod for AffineMatrix3T<T, S, V> {}

impl<T: Copy, S, V> Clone for AffineMatrix3T<T, S, V> {
    #[inline]
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: Copy, S, V> Copy for AffineMatrix3T<T, S, V> {}

impl<T: PartialEq, S, V> PartialEq for AffineMatrix3T<T, S, V> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.m == other.m
    }
}

impl<T: Eq, S, V> Eq for AffineMatrix3T<T, S, V> {}

impl<T: Hash, S, V> Hash for AffineMatrix3T<T, S, V> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.m.hash(state);
    }
}

impl<T: fmt::Debug, S, V> fmt::Debug for AffineMatrix3T<T, S, V> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("AffineMatrix3T").field("m", &self.m).finish()
    }
}

impl<T: Scalar, S: StorageOrder, V: VectorConvention> Default for AffineMatrix3T<T, S, V> {
    #[inline]
    fn default() -> Self {
        Self::new_zeroed()
    }
}

impl<T: Scalar, S: StorageOrder, V: VectorConvention> AffineMatrix3T<T, S, V> {
    pub const ROWS: usize = 3;
    pub const COLUMNS: usize = 3;
    pub const ELEMENTS: usize = Self::ROWS * Self::COLUMNS;

    pub const ROWS_SPARSE: usize = V::ROWS_SPARSE;
    pub const COLUMNS_SPARSE: usize = V::COLUMNS_SPARSE;
    pub const ELEMENTS_SPARSE: usize = 6;

    #[inline]
    pub fn new_zeroed() -> Self {
        Self {
            m: [T::zero(); 6],
            _layout: PhantomData,
        }
    }

    /// Builds a matrix from its six stored elements, row by row in the
    /// sparse shape of the active convention:
    ///
    /// - column vectors: `(m11, m12, m21)` is row 0, `(m22, m31, m32)` row 1,
    /// - row vectors: `(m11, m12)`, `(m21, m22)` and `(m31, m32)` are rows 0-2.
    #[inline]
    pub fn new(m11: T, m12: T, m21: T, m22: T, m31: T, m32: T) -> Self {
        Self::from_sequence([m11, m12, m21, m22, m31, m32])
    }

    /// Storage the caller promises to fill completely before use.
    ///
    /// The six elements are laid out contiguously, so writing through
    /// `as_mut_ptr().cast::<T>()` at offsets `0..6` initializes the value.
    #[inline]
    pub fn uninit() -> MaybeUninit<Self> {
        MaybeUninit::uninit()
    }

    /// Places `values` one after the other in row-major sparse order,
    /// whatever the storage order is.
    pub fn from_sequence(values: [T; 6]) -> Self {
        let mut m = Self::new_zeroed();
        m.initializer().extend(values);
        m
    }

    /// Copies the six physical slots from a flat buffer.
    pub fn from_slice(values: &[T]) -> Result<Self, MathError> {
        let m: [T; 6] = values.try_into().map_err(|_| MathError::LengthMismatch {
            expected: Self::ELEMENTS_SPARSE,
            actual: values.len(),
        })?;
        Ok(Self {
            m,
            _layout: PhantomData,
        })
    }

    #[inline]
    pub fn identity() -> Self {
        let mut m = Self::new_zeroed();
        m.load_identity();
        m
    }

    pub fn translation(position: Vector2T<T>) -> Self {
        let mut m = Self::identity();
        m.set_position(position);
        m
    }

    pub fn scaling(sx: T, sy: T) -> Self {
        let mut m = Self::identity();
        *m.at_mut(0, 0) = sx;
        *m.at_mut(1, 1) = sy;
        m
    }

    /// Physical offset of `(row, col)`.
    #[inline]
    pub fn flat_index(row: usize, col: usize) -> usize {
        debug_assert!(row < Self::ROWS_SPARSE, "row {} out of range", row);
        debug_assert!(col < Self::COLUMNS_SPARSE, "column {} out of range", col);
        S::offset(row, col, Self::ROWS_SPARSE, Self::COLUMNS_SPARSE)
    }

    /// Element `(a, b)` in column-vector notation, e.g. `at(0, 2)` is always
    /// the x position.
    #[inline]
    pub fn at(&self, a: usize, b: usize) -> T {
        self[V::normalize(a, b)]
    }

    #[inline]
    pub fn at_mut(&mut self, a: usize, b: usize) -> &mut T {
        &mut self[V::normalize(a, b)]
    }

    /// Streams values into the matrix, see [`Initializer`].
    #[inline]
    pub fn initializer(&mut self) -> Initializer<'_, T, S, V> {
        Initializer {
            matrix: self,
            element: 0,
        }
    }

    #[inline]
    pub fn reset(&mut self) {
        self.m = [T::zero(); 6];
    }

    pub fn load_identity(&mut self) {
        for (r, c) in S::indices(Self::ROWS_SPARSE, Self::COLUMNS_SPARSE) {
            self[(r, c)] = if r == c { T::one() } else { T::zero() };
        }
    }

    /// The full 3x3 matrix with the implicit row written out.
    pub fn to_matrix(&self) -> Matrix<T, 3> {
        let mut result = Matrix::identity();
        for (r, c) in S::indices(Self::ROWS_SPARSE, Self::COLUMNS_SPARSE) {
            result[(r, c)] = self[(r, c)];
        }
        result
    }

    /// Transposing an affine matrix is not affine in general, so the result
    /// is dense.
    pub fn transposed(&self) -> Matrix<T, 3> {
        let mut result = Matrix::identity();
        for (r, c) in S::indices(Self::ROWS_SPARSE, Self::COLUMNS_SPARSE) {
            result[(c, r)] = self[(r, c)];
        }
        result
    }

    #[inline]
    pub fn determinant(&self) -> T {
        mat::determinant(&self.to_matrix())
    }

    /// `M(0, 0) + M(1, 1) + 1`.
    #[inline]
    pub fn trace(&self) -> T {
        self[(0, 0)] + self[(1, 1)] + T::one()
    }

    /// Returns `None` when the matrix is singular.
    pub fn inverse(&self) -> Option<Self> {
        let mut inv = Self::new_zeroed();
        if inverse_affine3(&mut inv, self) {
            Some(inv)
        } else {
            None
        }
    }

    pub fn try_inverse(&self) -> Result<Self, MathError> {
        self.inverse().ok_or(MathError::SingularMatrix)
    }

    /// Inverts in place. On failure `self` is left as it was.
    pub fn make_inverse(&mut self) -> bool {
        let input = *self;
        inverse_affine3(self, &input)
    }

    #[inline]
    pub fn as_ptr(&self) -> *const T {
        self.m.as_ptr()
    }

    #[inline]
    pub fn as_mut_ptr(&mut self) -> *mut T {
        self.m.as_mut_ptr()
    }

    #[inline]
    pub fn as_slice(&self) -> &[T; 6] {
        &self.m
    }

    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T; 6] {
        &mut self.m
    }

    #[inline]
    pub fn as_bytes(&self) -> &[u8]
    where
        T: Pod,
    {
        bytemuck::bytes_of(self)
    }

    #[inline]
    pub fn set_position(&mut self, position: Vector2T<T>) {
        *self.at_mut(0, 2) = position.x;
        *self.at_mut(1, 2) = position.y;
    }

    #[inline]
    pub fn position(&self) -> Vector2T<T> {
        Vector2T::new(self.at(0, 2), self.at(1, 2))
    }

    #[inline]
    pub fn transform_point(&self, p: Vector2T<T>) -> Vector2T<T> {
        Vector2T::new(
            self.at(0, 0) * p.x + self.at(0, 1) * p.y + self.at(0, 2),
            self.at(1, 0) * p.x + self.at(1, 1) * p.y + self.at(1, 2),
        )
    }

    /// Like [`transform_point`](Self::transform_point) without translation.
    #[inline]
    pub fn transform_vector(&self, v: Vector2T<T>) -> Vector2T<T> {
        Vector2T::new(
            self.at(0, 0) * v.x + self.at(0, 1) * v.y,
            self.at(1, 0) * v.x + self.at(1, 1) * v.y,
        )
    }
}

impl<T: Scalar + Float, S: StorageOrder, V: VectorConvention> AffineMatrix3T<T, S, V> {
    /// Counter-clockwise rotation around the origin, in radians.
    pub fn rotation(angle: T) -> Self {
        let (sin, cos) = angle.sin_cos();
        let mut m = Self::identity();
        *m.at_mut(0, 0) = cos;
        *m.at_mut(0, 1) = -sin;
        *m.at_mut(1, 0) = sin;
        *m.at_mut(1, 1) = cos;
        m
    }
}

/// Writes values one at a time into consecutive sparse positions.
///
/// Element `e` lands at `(e / COLUMNS_SPARSE, e % COLUMNS_SPARSE)`.
///
/// At most six values may be pushed. A seventh trips a debug assertion; in
/// release builds it maps to an out-of-range row that may alias an earlier
/// slot and overwrite it.
///
/// ```
/// use math::affine::AffineMatrix3T;
///
/// let mut m = AffineMatrix3T::<i32>::new_zeroed();
/// m.initializer().push(1).push(0).push(5).push(0).push(1).push(7);
/// assert_eq!(m.at(0, 2), 5);
/// assert_eq!(m.at(1, 2), 7);
/// ```
pub struct Initializer<'a, T, S, V> {
    matrix: &'a mut AffineMatrix3T<T, S, V>,
    element: usize,
}

impl<'a, T: Scalar, S: StorageOrder, V: VectorConvention> Initializer<'a, T, S, V> {
    pub fn push(&mut self, value: T) -> &mut Self {
        let cols = AffineMatrix3T::<T, S, V>::COLUMNS_SPARSE;
        debug_assert!(
            self.element < AffineMatrix3T::<T, S, V>::ELEMENTS_SPARSE,
            "too many values for an affine 3x3 matrix"
        );
        self.matrix[(self.element / cols, self.element % cols)] = value;
        self.element += 1;
        self
    }
}

impl<'a, T: Scalar, S: StorageOrder, V: VectorConvention> Extend<T> for Initializer<'a, T, S, V> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.push(value);
        }
    }
}

/// Composes two affine matrices.
///
/// For finite inputs, gives the same result as expanding both operands to
/// 3x3, multiplying and dropping the last row, without building the dense
/// matrices. With infinities or NaN the results can differ, since the dense
/// product also multiplies them by the implicit zeros. The product
/// of two affine matrices keeps the `(0, 0, 1)` row, so only six entries
/// are computed.
pub fn mul_affine_matrices<T: Scalar, S: StorageOrder, V: VectorConvention>(
    lhs: &AffineMatrix3T<T, S, V>,
    rhs: &AffineMatrix3T<T, S, V>,
) -> AffineMatrix3T<T, S, V> {
    // `at` reads in column-vector notation, where row-vector matrices are
    // transposed: lhs * rhs becomes (rhs^T * lhs^T)^T.
    let (a, b) = if V::ROW_VECTORS { (rhs, lhs) } else { (lhs, rhs) };

    let mut result = AffineMatrix3T::new_zeroed();
    for r in 0..2 {
        let (x, y, w) = (a.at(r, 0), a.at(r, 1), a.at(r, 2));
        *result.at_mut(r, 0) = x * b.at(0, 0) + y * b.at(1, 0);
        *result.at_mut(r, 1) = x * b.at(0, 1) + y * b.at(1, 1);
        *result.at_mut(r, 2) = x * b.at(0, 2) + y * b.at(1, 2) + w;
    }
    result
}

impl<T: Scalar, S: StorageOrder, V: VectorConvention> ops::Index<(usize, usize)>
    for AffineMatrix3T<T, S, V>
{
    type Output = T;

    #[inline]
    fn index(&self, (row, col): (usize, usize)) -> &T {
        &self.m[Self::flat_index(row, col)]
    }
}

impl<T: Scalar, S: StorageOrder, V: VectorConvention> ops::IndexMut<(usize, usize)>
    for AffineMatrix3T<T, S, V>
{
    #[inline]
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut T {
        &mut self.m[Self::flat_index(row, col)]
    }
}

impl<T: Scalar, S: StorageOrder, V: VectorConvention> ops::Index<usize> for AffineMatrix3T<T, S, V> {
    type Output = T;

    #[inline]
    fn index(&self, element: usize) -> &T {
        debug_assert!(element < Self::ELEMENTS_SPARSE, "element {} out of range", element);
        &self.m[element]
    }
}

impl<T: Scalar, S: StorageOrder, V: VectorConvention> ops::IndexMut<usize> for AffineMatrix3T<T, S, V> {
    #[inline]
    fn index_mut(&mut self, element: usize) -> &mut T {
        debug_assert!(element < Self::ELEMENTS_SPARSE, "element {} out of range", element);
        &mut self.m[element]
    }
}

impl<T: Scalar, S: StorageOrder, V: VectorConvention> ops::Mul for AffineMatrix3T<T, S, V> {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Self) -> Self {
        mul_affine_matrices(&self, &rhs)
    }
}

impl<T: Scalar, S: StorageOrder, V: VectorConvention> ops::MulAssign for AffineMatrix3T<T, S, V> {
    #[inline]
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

impl<T: Scalar, S: StorageOrder, V: VectorConvention> From<AffineMatrix3T<T, S, V>> for Matrix<T, 3> {
    #[inline]
    fn from(m: AffineMatrix3T<T, S, V>) -> Self {
        m.to_matrix()
    }
}

impl<T: Scalar, S: StorageOrder, V: VectorConvention> fmt::Display for AffineMatrix3T<T, S, V> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let prec = f.precision().unwrap_or(3);
        let rows: Vec<String> = (0..Self::ROWS_SPARSE)
            .map(|r| {
                let row: Vec<String> = (0..Self::COLUMNS_SPARSE)
                    .map(|c| format!("{:.prec$}", self[(r, c)], prec = prec))
                    .collect();
                format!("({})", row.join(", "))
            })
            .collect();
        write!(f, "AffineMatrix3T({})", rows.join(", "))
    }
}

impl<T, S, V> AbsDiffEq for AffineMatrix3T<T, S, V>
where
    T: Scalar + AbsDiffEq<Epsilon = T>,
    S: StorageOrder,
    V: VectorConvention,
{
    type Epsilon = T;

    fn default_epsilon() -> T {
        T::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: T) -> bool {
        self.m
            .iter()
            .zip(other.m.iter())
            .all(|(a, b)| a.abs_diff_eq(b, epsilon))
    }
}

impl<T, S, V> RelativeEq for AffineMatrix3T<T, S, V>
where
    T: Scalar + RelativeEq<Epsilon = T>,
    S: StorageOrder,
    V: VectorConvention,
{
    fn default_max_relative() -> T {
        T::default_max_relative()
    }

    fn relative_eq(&self, other: &Self, epsilon: T, max_relative: T) -> bool {
        self.m
            .iter()
            .zip(other.m.iter())
            .all(|(a, b)| a.relative_eq(b, epsilon, max_relative))
    }
}
