//! Spatial-assignment collaborator.

use catrisk_primitives::{DataError, Exposures, Hazard};

/// Errors that can occur while assigning exposures to hazard centroids.
#[derive(Debug, thiserror::Error)]
pub enum AssignError {
    /// The hazard carries no centroid grid.
    #[error("hazard {haz_type} has no centroids")]
    NoCentroids {
        /// Hazard type of the gridless hazard.
        haz_type: String,
    },

    /// The produced assignment does not fit the exposure set.
    #[error("assignment data error: {0}")]
    Data(#[from] DataError),
}

/// Matches each exposure to a centroid of the hazard's spatial grid.
///
/// Nearest-centroid matching itself lives outside the engine; the
/// calculator only triggers assignment when the exposure set has no cached
/// centroids for the hazard's type, and reads the cache afterwards.
pub trait CentroidAssigner: Send + Sync {
    /// Compute and cache the centroid assignment for `hazard`'s type.
    ///
    /// Implementations store one `i64` per exposure via
    /// [`Exposures::set_assigned`], using
    /// [`catrisk_primitives::UNASSIGNED`] where an exposure has no centroid.
    ///
    /// # Errors
    /// Returns an [`AssignError`] if no assignment can be produced.
    fn assign(&self, exposures: &mut Exposures, hazard: &Hazard) -> Result<(), AssignError>;
}

/// Assigner that installs a fixed, precomputed centroid vector.
///
/// Useful for tests and for data whose exposure-to-centroid matching was
/// done upstream.
#[derive(Debug, Clone)]
pub struct PrecomputedAssigner {
    /// Centroid index per exposure.
    pub centroids: Vec<i64>,
}

impl PrecomputedAssigner {
    /// Create an assigner from a per-exposure centroid vector.
    #[must_use]
    pub const fn new(centroids: Vec<i64>) -> Self {
        Self { centroids }
    }
}

impl CentroidAssigner for PrecomputedAssigner {
    fn assign(&self, exposures: &mut Exposures, hazard: &Hazard) -> Result<(), AssignError> {
        if hazard.n_centroids() == 0 {
            return Err(AssignError::NoCentroids { haz_type: hazard.haz_type.to_string() });
        }
        exposures.set_assigned(hazard.haz_type.clone(), self.centroids.clone())?;
        Ok(())
    }
}
