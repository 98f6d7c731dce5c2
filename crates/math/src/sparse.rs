//! Compressed sparse-column matrix.
//!
//! Hazard footprints are event-by-centroid matrices read one centroid
//! (column) at a time, so storage is column-compressed: the nonzero rows of
//! a column are a contiguous, sorted slice.

use ndarray::{Array1, Array2};

use crate::MathError;

/// Sparse f64 matrix in compressed sparse-column form.
///
/// Only numerically nonzero cells are stored: explicit zeros passed to the
/// constructors are dropped, so the structural nonzero pattern and the
/// numerical one coincide.
#[derive(Debug, Clone, PartialEq)]
pub struct CscMatrix {
    nrows: usize,
    ncols: usize,
    /// Column start offsets into `row_idx`/`values`, length `ncols + 1`.
    col_ptr: Vec<usize>,
    /// Row indices per column, sorted ascending within each column.
    row_idx: Vec<usize>,
    values: Vec<f64>,
}

impl CscMatrix {
    /// Build a matrix from `(row, col, value)` triplets.
    ///
    /// Zero-valued triplets are dropped. Triplets may arrive in any order.
    ///
    /// # Errors
    /// Returns [`MathError::EntryOutOfBounds`] for a triplet outside the
    /// shape and [`MathError::DuplicateEntry`] if two triplets address the
    /// same cell.
    pub fn from_triplets(
        nrows: usize,
        ncols: usize,
        triplets: &[(usize, usize, f64)],
    ) -> Result<Self, MathError> {
        let mut entries: Vec<(usize, usize, f64)> = Vec::with_capacity(triplets.len());
        for &(row, col, value) in triplets {
            if row >= nrows || col >= ncols {
                return Err(MathError::EntryOutOfBounds { row, col, nrows, ncols });
            }
            if value != 0.0 {
                entries.push((col, row, value));
            }
        }
        entries.sort_unstable_by(|a, b| (a.0, a.1).cmp(&(b.0, b.1)));

        let mut col_ptr = vec![0; ncols + 1];
        let mut row_idx = Vec::with_capacity(entries.len());
        let mut values = Vec::with_capacity(entries.len());
        for window in entries.windows(2) {
            if window[0].0 == window[1].0 && window[0].1 == window[1].1 {
                return Err(MathError::DuplicateEntry { row: window[0].1, col: window[0].0 });
            }
        }
        for &(col, row, value) in &entries {
            col_ptr[col + 1] += 1;
            row_idx.push(row);
            values.push(value);
        }
        for col in 0..ncols {
            col_ptr[col + 1] += col_ptr[col];
        }

        Ok(Self { nrows, ncols, col_ptr, row_idx, values })
    }

    /// Build a matrix from a dense array, keeping nonzero cells.
    #[must_use]
    pub fn from_dense(dense: &Array2<f64>) -> Self {
        let (nrows, ncols) = dense.dim();
        let mut col_ptr = vec![0; ncols + 1];
        let mut row_idx = Vec::new();
        let mut values = Vec::new();
        for col in 0..ncols {
            for row in 0..nrows {
                let v = dense[[row, col]];
                if v != 0.0 {
                    row_idx.push(row);
                    values.push(v);
                }
            }
            col_ptr[col + 1] = row_idx.len();
        }
        Self { nrows, ncols, col_ptr, row_idx, values }
    }

    /// Number of rows.
    #[must_use]
    pub const fn nrows(&self) -> usize {
        self.nrows
    }

    /// Number of columns.
    #[must_use]
    pub const fn ncols(&self) -> usize {
        self.ncols
    }

    /// Number of stored (nonzero) cells.
    #[must_use]
    pub fn nnz(&self) -> usize {
        self.values.len()
    }

    /// Rows with a nonzero value in `col`, sorted ascending.
    ///
    /// # Panics
    /// Panics if `col >= self.ncols()`.
    #[must_use]
    pub fn nonzero_rows(&self, col: usize) -> &[usize] {
        assert!(col < self.ncols, "column {col} out of bounds for {} columns", self.ncols);
        &self.row_idx[self.col_ptr[col]..self.col_ptr[col + 1]]
    }

    /// Nonzero rows of `col` together with their values.
    ///
    /// # Panics
    /// Panics if `col >= self.ncols()`.
    #[must_use]
    pub fn col_values(&self, col: usize) -> (&[usize], &[f64]) {
        assert!(col < self.ncols, "column {col} out of bounds for {} columns", self.ncols);
        let range = self.col_ptr[col]..self.col_ptr[col + 1];
        (&self.row_idx[range.clone()], &self.values[range])
    }

    /// Value at `(row, col)`, `0.0` when the cell is not stored.
    ///
    /// # Panics
    /// Panics if `row` or `col` is out of bounds.
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> f64 {
        assert!(row < self.nrows, "row {row} out of bounds for {} rows", self.nrows);
        let (rows, values) = self.col_values(col);
        rows.binary_search(&row).map_or(0.0, |i| values[i])
    }

    /// Values at the given rows of one column, `0.0` for absent cells.
    ///
    /// # Panics
    /// Panics if `col` or any row is out of bounds.
    #[must_use]
    pub fn values_at(&self, rows: &[usize], col: usize) -> Array1<f64> {
        rows.iter().map(|&row| self.get(row, col)).collect()
    }

    /// Iterator over all stored values.
    pub fn values(&self) -> impl Iterator<Item = f64> + '_ {
        self.values.iter().copied()
    }
}
