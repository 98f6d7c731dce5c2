//! Error types for impact computation.

use catrisk_primitives::{HazardType, ImpactFuncId};
use catrisk_traits::AssignError;

/// Errors that can occur during impact computation.
///
/// All of these are configuration or data errors that abort the call;
/// non-fatal conditions (no eligible exposures, unit mismatch) flow through
/// the injected sink instead.
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    /// Spatial assignment failed.
    #[error("centroid assignment failed: {0}")]
    Assign(#[from] AssignError),

    /// The assigner returned without caching an assignment.
    #[error("no centroid assignment for hazard type {haz_type}")]
    NotAssigned {
        /// Hazard type with no cached assignment.
        haz_type: HazardType,
    },

    /// No impact functions registered for the hazard's type.
    #[error("no impact functions for hazard type {haz_type}")]
    NoImpactFuncs {
        /// Hazard type with no functions.
        haz_type: HazardType,
    },

    /// An exposure references an unknown impact function.
    ///
    /// Silently skipping the exposure group would under-report risk and
    /// break the conservation invariant, so this fails the whole call.
    #[error("no impact function {id} for hazard type {haz_type}")]
    MissingImpactFunc {
        /// Hazard type of the failing lookup.
        haz_type: HazardType,
        /// Function id no exposure group could be matched to.
        id: ImpactFuncId,
    },

    /// An assigned centroid lies outside the hazard grid.
    #[error(
        "exposure {exposure} assigned to centroid {centroid}, but hazard has {n_centroids} centroids"
    )]
    CentroidOutOfRange {
        /// Index of the offending exposure.
        exposure: usize,
        /// Assigned centroid index.
        centroid: i64,
        /// Number of centroids in the hazard grid.
        n_centroids: usize,
    },
}
