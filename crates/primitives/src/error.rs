//! Validation errors for input data.

use crate::{HazardType, ImpactFuncId};

/// Errors raised when constructing or wiring input data.
#[derive(Debug, thiserror::Error)]
pub enum DataError {
    /// Co-indexed arrays disagree in length.
    #[error("length mismatch for {context}: expected {expected}, got {actual}")]
    LengthMismatch {
        /// What the mismatching array holds.
        context: &'static str,
        /// Expected length.
        expected: usize,
        /// Actual length.
        actual: usize,
    },

    /// Empty vulnerability curve.
    #[error("impact function {id} has no breakpoints")]
    EmptyCurve {
        /// Offending function id.
        id: ImpactFuncId,
    },

    /// Curve breakpoints are not strictly increasing.
    #[error("impact function {id} intensity not strictly increasing at index {index}")]
    NonMonotoneCurve {
        /// Offending function id.
        id: ImpactFuncId,
        /// Index of the first out-of-order breakpoint.
        index: usize,
    },

    /// Negative mean damage ratio.
    #[error("impact function {id} has negative mdr at index {index}")]
    NegativeMdr {
        /// Offending function id.
        id: ImpactFuncId,
        /// Index of the negative value.
        index: usize,
    },

    /// Probability of affection outside [0, 1].
    #[error("impact function {id} has paa outside [0, 1] at index {index}")]
    PaaOutOfRange {
        /// Offending function id.
        id: ImpactFuncId,
        /// Index of the offending value.
        index: usize,
    },

    /// Negative value in an array that must be non-negative.
    #[error("negative {context} at index {index}")]
    NegativeValue {
        /// What the array holds.
        context: &'static str,
        /// Index of the negative entry.
        index: usize,
    },

    /// Fraction cell outside [0, 1].
    #[error("hazard fraction outside [0, 1]")]
    FractionOutOfRange,

    /// Footprint matrix shape disagrees with the event set.
    #[error("{matrix} matrix is {actual_rows}x{actual_cols}, expected {rows} rows")]
    FootprintShape {
        /// Which matrix is malformed.
        matrix: &'static str,
        /// Expected row count (number of events).
        rows: usize,
        /// Actual row count.
        actual_rows: usize,
        /// Actual column count.
        actual_cols: usize,
    },

    /// Two functions registered under the same (hazard type, id) pair.
    #[error("duplicate impact function {id} for hazard type {haz_type}")]
    DuplicateImpactFunc {
        /// Duplicated function id.
        id: ImpactFuncId,
        /// Hazard type it was registered under.
        haz_type: HazardType,
    },
}
