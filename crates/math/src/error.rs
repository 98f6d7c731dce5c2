//! Error types for numerical operations.

/// Errors that can occur during numerical operations.
#[derive(Debug, thiserror::Error)]
pub enum MathError {
    /// Dimension mismatch.
    #[error("dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch {
        /// Expected dimension.
        expected: usize,
        /// Actual dimension.
        actual: usize,
    },

    /// Breakpoints are not strictly increasing.
    #[error("breakpoints not strictly increasing at index {index}")]
    NotIncreasing {
        /// Index of the offending breakpoint.
        index: usize,
    },

    /// Sparse entry outside the matrix shape.
    #[error("entry ({row}, {col}) outside matrix shape {nrows}x{ncols}")]
    EntryOutOfBounds {
        /// Row of the entry.
        row: usize,
        /// Column of the entry.
        col: usize,
        /// Number of rows.
        nrows: usize,
        /// Number of columns.
        ncols: usize,
    },

    /// Duplicate sparse entry.
    #[error("duplicate entry at ({row}, {col})")]
    DuplicateEntry {
        /// Row of the entry.
        row: usize,
        /// Column of the entry.
        col: usize,
    },

    /// Empty data.
    #[error("empty data provided")]
    EmptyData,
}
