//! Layout policies for sparse matrices.
//!
//! Two independent choices decide where a logical `(row, col)` entry lives:
//!
//! - the storage order ([`ColumnMajor`] or [`RowMajor`]) maps `(row, col)`
//!   to a physical offset,
//! - the vector convention ([`ColumnVectors`] or [`RowVectors`]) decides the
//!   sparse shape and which row or column carries the translation.
//!
//! Both are zero-sized marker types picked at compile time, so indexing never
//! branches at runtime.

use core::fmt;
use core::hash::Hash;
use core::iter::FusedIterator;
use core::marker::PhantomData;

pub trait StorageOrder: Copy + Default + fmt::Debug + Eq + Hash + 'static {
    const ROW_MAJOR: bool;

    /// Physical offset of `(row, col)` in a `rows` x `cols` block.
    fn offset(row: usize, col: usize, rows: usize, cols: usize) -> usize;

    /// Logical `(row, col)` of the physical slot `index`.
    fn position(index: usize, rows: usize, cols: usize) -> (usize, usize);

    /// Walks every `(row, col)` of a `rows` x `cols` block in physical order.
    #[inline]
    fn indices(rows: usize, cols: usize) -> Indices<Self> {
        Indices {
            rows,
            cols,
            next: 0,
            _order: PhantomData,
        }
    }
}

#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
pub struct ColumnMajor;

#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
pub struct RowMajor;

impl StorageOrder for ColumnMajor {
    const ROW_MAJOR: bool = false;

    #[inline]
    fn offset(row: usize, col: usize, rows: usize, _cols: usize) -> usize {
        col * rows + row
    }

    #[inline]
    fn position(index: usize, rows: usize, _cols: usize) -> (usize, usize) {
        (index % rows, index / rows)
    }
}

impl StorageOrder for RowMajor {
    const ROW_MAJOR: bool = true;

    #[inline]
    fn offset(row: usize, col: usize, _rows: usize, cols: usize) -> usize {
        row * cols + col
    }

    #[inline]
    fn position(index: usize, _rows: usize, cols: usize) -> (usize, usize) {
        (index / cols, index % cols)
    }
}

/// Iterator returned by [`StorageOrder::indices`].
#[derive(Debug, Clone)]
pub struct Indices<S> {
    rows: usize,
    cols: usize,
    next: usize,
    _order: PhantomData<S>,
}

impl<S: StorageOrder> Iterator for Indices<S> {
    type Item = (usize, usize);

    #[inline]
    fn next(&mut self) -> Option<(usize, usize)> {
        if self.next >= self.rows * self.cols {
            return None;
        }
        let p = S::position(self.next, self.rows, self.cols);
        self.next += 1;
        Some(p)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = (self.rows * self.cols).saturating_sub(self.next);
        (left, Some(left))
    }
}

impl<S: StorageOrder> ExactSizeIterator for Indices<S> {}
impl<S: StorageOrder> FusedIterator for Indices<S> {}

pub trait VectorConvention: Copy + Default + fmt::Debug + Eq + Hash + 'static {
    const ROW_VECTORS: bool;

    /// Rows actually stored by an affine 3x3 matrix.
    const ROWS_SPARSE: usize;

    /// Columns actually stored by an affine 3x3 matrix.
    const COLUMNS_SPARSE: usize;

    /// Turns `(a, b)` written in column-vector notation into the `(row, col)`
    /// of this convention.
    fn normalize(a: usize, b: usize) -> (usize, usize);
}

/// Points are columns multiplied on the right, translation is the last column.
///
/// ```text
/// / x1 y1 z1 \
/// | x2 y2 z2 |
/// \  0  0  1 /
/// ```
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
pub struct ColumnVectors;

/// Points are rows multiplied on the left, translation is the last row.
///
/// ```text
/// / x1 x2 0 \
/// | y1 y2 0 |
/// \ z1 z2 1 /
/// ```
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
pub struct RowVectors;

impl VectorConvention for ColumnVectors {
    const ROW_VECTORS: bool = false;
    const ROWS_SPARSE: usize = 2;
    const COLUMNS_SPARSE: usize = 3;

    #[inline]
    fn normalize(a: usize, b: usize) -> (usize, usize) {
        (a, b)
    }
}

impl VectorConvention for RowVectors {
    const ROW_VECTORS: bool = true;
    const ROWS_SPARSE: usize = 3;
    const COLUMNS_SPARSE: usize = 2;

    #[inline]
    fn normalize(a: usize, b: usize) -> (usize, usize) {
        (b, a)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn column_major_walks_down_columns() {
        let order: Vec<_> = ColumnMajor::indices(2, 3).collect();
        assert_eq!(order, vec![(0, 0), (1, 0), (0, 1), (1, 1), (0, 2), (1, 2)]);
    }

    #[test]
    fn row_major_walks_along_rows() {
        let order: Vec<_> = RowMajor::indices(2, 3).collect();
        assert_eq!(order, vec![(0, 0), (0, 1), (0, 2), (1, 0), (1, 1), (1, 2)]);
    }

    #[test]
    fn indices_follow_offsets() {
        for (i, (r, c)) in ColumnMajor::indices(3, 2).enumerate() {
            assert_eq!(ColumnMajor::offset(r, c, 3, 2), i);
        }
        for (i, (r, c)) in RowMajor::indices(3, 2).enumerate() {
            assert_eq!(RowMajor::offset(r, c, 3, 2), i);
        }
        assert_eq!(RowMajor::indices(3, 2).len(), 6);
    }

    #[test]
    fn row_vectors_swap_notation() {
        assert_eq!(ColumnVectors::normalize(0, 2), (0, 2));
        assert_eq!(RowVectors::normalize(0, 2), (2, 0));
        assert_eq!(
            ColumnVectors::ROWS_SPARSE * ColumnVectors::COLUMNS_SPARSE,
            RowVectors::ROWS_SPARSE * RowVectors::COLUMNS_SPARSE
        );
    }
}
