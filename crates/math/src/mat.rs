use core::ops;

use approx::{AbsDiffEq, RelativeEq};
use bytemuck::{Pod, Zeroable};

use crate::scalar::Scalar;
use crate::vec::Vector3T;

/// Dense square matrix, stored as `N` columns of `N` elements.
///
/// Only what the affine types lean on lives here: promotion target,
/// transpose, product and determinant.
#[derive(Debug, Copy, Clone, PartialEq)]
#[repr(C)]
pub struct Matrix<T, const N: usize> {
    pub e: [[T; N]; N],
}

// repr(C) nested arrays of T have no padding.
unsafe impl<T: Zeroable, const N: usize> Zeroable for Matrix<T, N> {}
unsafe impl<T: Pod, const N: usize> Pod for Matrix<T, N> {}

impl<T: Scalar, const N: usize> Matrix<T, N> {
    pub const ROWS: usize = N;
    pub const COLUMNS: usize = N;
    pub const ELEMENTS: usize = N * N;

    #[inline]
    pub fn new() -> Self {
        Self { e: [[T::zero(); N]; N] }
    }

    #[inline]
    pub fn from_columns(columns: [[T; N]; N]) -> Self {
        Self { e: columns }
    }

    #[inline]
    pub fn from_rows(rows: [[T; N]; N]) -> Self {
        Self { e: rows }.transpose()
    }

    #[inline]
    pub fn identity() -> Self {
        Self::scale_uniform(T::one())
    }

    #[inline]
    pub fn scale_uniform(d: T) -> Self {
        let mut m = Self::new();
        for i in 0..N {
            m.e[i][i] = d;
        }
        m
    }

    #[inline]
    pub fn transpose(&self) -> Self {
        let mut m = Self::new();

        for j in 0..N {
            for i in 0..N {
                m.e[j][i] = self.e[i][j];
            }
        }
        m
    }

    #[inline]
    pub fn to_columns(&self) -> [[T; N]; N] {
        self.e
    }

    #[inline]
    pub fn to_rows(&self) -> [[T; N]; N] {
        self.transpose().e
    }

    #[inline]
    pub fn trace(&self) -> T {
        (0..N).fold(T::zero(), |acc, i| acc + self.e[i][i])
    }

    #[inline]
    pub fn determinant(&self) -> T {
        determinant(self)
    }
}

impl<T: Scalar, const N: usize> Default for Matrix<T, N> {
    fn default() -> Self {
        Self::new()
    }
}

/// Determinant by cofactor expansion along successive rows.
///
/// Works for any scalar, integers included, since it never divides.
/// Cost grows factorially, which is fine for the 2x2..4x4 sizes used here.
pub fn determinant<T: Scalar, const N: usize>(m: &Matrix<T, N>) -> T {
    debug_assert!(N <= 32);
    expand(m, 0, 0)
}

fn expand<T: Scalar, const N: usize>(m: &Matrix<T, N>, row: usize, used: u32) -> T {
    if row == N {
        return T::one();
    }

    let mut det = T::zero();
    let mut positive = true;
    for col in 0..N {
        if used & (1 << col) != 0 {
            continue;
        }
        let term = m[(row, col)] * expand(m, row + 1, used | (1 << col));
        det = if positive { det + term } else { det - term };
        positive = !positive;
    }
    det
}

impl<T: Scalar, const N: usize> ops::Index<(usize, usize)> for Matrix<T, N> {
    type Output = T;

    #[inline]
    fn index(&self, (row, col): (usize, usize)) -> &T {
        &self.e[col][row]
    }
}

impl<T: Scalar, const N: usize> ops::IndexMut<(usize, usize)> for Matrix<T, N> {
    #[inline]
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut T {
        &mut self.e[col][row]
    }
}

impl<T: Scalar, const N: usize> ops::Mul<Matrix<T, N>> for Matrix<T, N> {
    type Output = Matrix<T, N>;

    #[inline]
    fn mul(self, rhs: Matrix<T, N>) -> Matrix<T, N> {
        let mut m = Matrix::new();

        let a = self.to_rows();
        let b = rhs.to_columns();

        for j in 0..N {
            for i in 0..N {
                m.e[j][i] = (0..N).fold(T::zero(), |acc, k| acc + a[i][k] * b[j][k]);
            }
        }
        m
    }
}

impl<T: Scalar> ops::Mul<Vector3T<T>> for Matrix<T, 3> {
    type Output = Vector3T<T>;

    #[inline]
    fn mul(self, rhs: Vector3T<T>) -> Vector3T<T> {
        let a = self.to_rows();
        Vector3T::new(
            Vector3T::from_slice(&a[0]).dot(rhs),
            Vector3T::from_slice(&a[1]).dot(rhs),
            Vector3T::from_slice(&a[2]).dot(rhs),
        )
    }
}

impl<T: Scalar + AbsDiffEq<Epsilon = T>, const N: usize> AbsDiffEq for Matrix<T, N> {
    type Epsilon = T;

    fn default_epsilon() -> T {
        T::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: T) -> bool {
        self.e
            .iter()
            .flatten()
            .zip(other.e.iter().flatten())
            .all(|(a, b)| a.abs_diff_eq(b, epsilon))
    }
}

impl<T: Scalar + RelativeEq<Epsilon = T>, const N: usize> RelativeEq for Matrix<T, N> {
    fn default_max_relative() -> T {
        T::default_max_relative()
    }

    fn relative_eq(&self, other: &Self, epsilon: T, max_relative: T) -> bool {
        self.e
            .iter()
            .flatten()
            .zip(other.e.iter().flatten())
            .all(|(a, b)| a.relative_eq(b, epsilon, max_relative))
    }
}

pub type Mat2 = Matrix<f32, 2>;
pub type Mat3 = Matrix<f32, 3>;
pub type Mat4 = Matrix<f32, 4>;

pub type Mat2d = Matrix<f64, 2>;
pub type Mat3d = Matrix<f64, 3>;
pub type Mat4d = Matrix<f64, 4>;
