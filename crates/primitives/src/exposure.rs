//! Geolocated exposure sets.

use std::collections::HashMap;

use ndarray::Array1;

use crate::{DataError, HazardType, ImpactFuncId};

/// Sentinel centroid index meaning "not assigned to the hazard grid".
pub const UNASSIGNED: i64 = -1;

/// An ordered collection of geolocated assets with insurance terms.
///
/// Stored column-wise: all per-asset arrays are co-indexed. An exposure
/// contributes to an impact computation only if its `value` is positive and
/// it carries a non-negative assigned centroid for the hazard's type.
#[derive(Debug, Clone)]
pub struct Exposures {
    /// Provenance label of the exposure data.
    pub source: String,
    /// Unit of the `value` column, e.g. `"USD"`.
    pub value_unit: String,
    /// Latitude per asset (degrees).
    pub latitude: Array1<f64>,
    /// Longitude per asset (degrees).
    pub longitude: Array1<f64>,
    /// Monetary value per asset, each >= 0.
    pub value: Array1<f64>,
    /// Insurance deductible per asset, each >= 0.
    pub deductible: Array1<f64>,
    /// Insurance cover per asset, each >= 0.
    pub cover: Array1<f64>,
    /// Vulnerability curve selector per asset.
    pub impact_func_ids: Vec<ImpactFuncId>,
    /// Cached centroid assignment per hazard type; [`UNASSIGNED`] where an
    /// asset has no centroid on that hazard's grid.
    assigned: HashMap<HazardType, Vec<i64>>,
}

impl Exposures {
    /// Create a validated exposure set with no centroid assignments.
    ///
    /// # Errors
    /// Returns a [`DataError`] if the per-asset arrays disagree in length
    /// or any value, deductible, or cover entry is negative.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        source: impl Into<String>,
        value_unit: impl Into<String>,
        latitude: Array1<f64>,
        longitude: Array1<f64>,
        value: Array1<f64>,
        deductible: Array1<f64>,
        cover: Array1<f64>,
        impact_func_ids: Vec<ImpactFuncId>,
    ) -> Result<Self, DataError> {
        let n = value.len();
        for (context, len) in [
            ("latitude", latitude.len()),
            ("longitude", longitude.len()),
            ("deductible", deductible.len()),
            ("cover", cover.len()),
            ("impact_func_ids", impact_func_ids.len()),
        ] {
            if len != n {
                return Err(DataError::LengthMismatch { context, expected: n, actual: len });
            }
        }
        for (context, arr) in
            [("value", &value), ("deductible", &deductible), ("cover", &cover)]
        {
            if let Some(index) = arr.iter().position(|&v| v < 0.0) {
                return Err(DataError::NegativeValue { context, index });
            }
        }
        Ok(Self {
            source: source.into(),
            value_unit: value_unit.into(),
            latitude,
            longitude,
            value,
            deductible,
            cover,
            impact_func_ids,
            assigned: HashMap::new(),
        })
    }

    /// Number of assets.
    #[must_use]
    pub fn len(&self) -> usize {
        self.value.len()
    }

    /// Check if the set holds no assets.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }

    /// Whether centroids have been assigned for a hazard type.
    #[must_use]
    pub fn is_assigned(&self, haz_type: &HazardType) -> bool {
        self.assigned.contains_key(haz_type)
    }

    /// Assigned centroid indices for a hazard type, if cached.
    #[must_use]
    pub fn assigned_centroids(&self, haz_type: &HazardType) -> Option<&[i64]> {
        self.assigned.get(haz_type).map(Vec::as_slice)
    }

    /// Cache a centroid assignment for a hazard type.
    ///
    /// # Errors
    /// Returns [`DataError::LengthMismatch`] if `centroids` is not
    /// co-indexed with the assets.
    pub fn set_assigned(
        &mut self,
        haz_type: HazardType,
        centroids: Vec<i64>,
    ) -> Result<(), DataError> {
        if centroids.len() != self.len() {
            return Err(DataError::LengthMismatch {
                context: "assigned centroids",
                expected: self.len(),
                actual: centroids.len(),
            });
        }
        self.assigned.insert(haz_type, centroids);
        Ok(())
    }
}
