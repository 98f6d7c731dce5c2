//! Hazard event sets with sparse spatial footprints.

use catrisk_math::CscMatrix;
use ndarray::Array1;

use crate::{DataError, Date, EventId, HazardType};

/// An ordered collection of hazard events over a centroid grid.
///
/// Per-event metadata (`event_ids`, `event_names`, `dates`, `frequency`)
/// is co-indexed with the rows of the `intensity` and `fraction`
/// footprints. Only cells with nonzero intensity are relevant; `fraction`
/// is read at exactly those cells.
#[derive(Debug, Clone)]
pub struct Hazard {
    /// Peril of this event set.
    pub haz_type: HazardType,
    /// Provenance label of the hazard data.
    pub source: String,
    /// Identifier per event.
    pub event_ids: Vec<EventId>,
    /// Name per event.
    pub event_names: Vec<String>,
    /// Occurrence date per event.
    pub dates: Vec<Date>,
    /// Annual frequency per event, each >= 0.
    pub frequency: Array1<f64>,
    /// Physical magnitude per (event, centroid), zero where unexposed.
    pub intensity: CscMatrix,
    /// Fraction of asset exposed per (event, centroid), in [0, 1].
    pub fraction: CscMatrix,
}

impl Hazard {
    /// Create a validated hazard.
    ///
    /// # Errors
    /// Returns a [`DataError`] if the per-event collections disagree in
    /// length, a frequency is negative, the footprints do not both have one
    /// row per event and matching column counts, or a fraction cell lies
    /// outside [0, 1].
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        haz_type: HazardType,
        source: impl Into<String>,
        event_ids: Vec<EventId>,
        event_names: Vec<String>,
        dates: Vec<Date>,
        frequency: Array1<f64>,
        intensity: CscMatrix,
        fraction: CscMatrix,
    ) -> Result<Self, DataError> {
        let n_events = event_ids.len();
        for (context, len) in [
            ("event_names", event_names.len()),
            ("dates", dates.len()),
            ("frequency", frequency.len()),
        ] {
            if len != n_events {
                return Err(DataError::LengthMismatch { context, expected: n_events, actual: len });
            }
        }
        if let Some(index) = frequency.iter().position(|&f| f < 0.0) {
            return Err(DataError::NegativeValue { context: "frequency", index });
        }
        if intensity.nrows() != n_events {
            return Err(DataError::FootprintShape {
                matrix: "intensity",
                rows: n_events,
                actual_rows: intensity.nrows(),
                actual_cols: intensity.ncols(),
            });
        }
        if fraction.nrows() != n_events || fraction.ncols() != intensity.ncols() {
            return Err(DataError::FootprintShape {
                matrix: "fraction",
                rows: n_events,
                actual_rows: fraction.nrows(),
                actual_cols: fraction.ncols(),
            });
        }
        if fraction.values().any(|v| !(0.0..=1.0).contains(&v)) {
            return Err(DataError::FractionOutOfRange);
        }
        Ok(Self {
            haz_type,
            source: source.into(),
            event_ids,
            event_names,
            dates,
            frequency,
            intensity,
            fraction,
        })
    }

    /// Number of events.
    #[must_use]
    pub fn n_events(&self) -> usize {
        self.event_ids.len()
    }

    /// Number of centroids in the spatial grid.
    #[must_use]
    pub const fn n_centroids(&self) -> usize {
        self.intensity.ncols()
    }
}
