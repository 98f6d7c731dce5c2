//! Computed impact of a hazard on an exposure set.

use catrisk_math::{cumsum, return_periods, sort_descending_indices};
use catrisk_primitives::{Date, EventId, Exposures, Hazard, HazardType};
use ndarray::Array1;

use crate::ImpactFreqCurve;

/// Result of one impact computation.
///
/// Owns arrays co-indexed with the hazard's event ordering (`at_event`,
/// `frequency`, event metadata) and with the exposure ordering (`eai_exp`,
/// coordinates). Created fresh per [`crate::ImpactCalculator::calc`] call
/// and never mutated afterwards.
///
/// Invariant: the sum of `eai_exp` equals `aai_agg` up to floating-point
/// reassociation, since both re-index the same per-(exposure, event)
/// impact-times-frequency products.
#[derive(Debug, Clone)]
pub struct Impact {
    /// Hazard type the impact was computed for.
    pub haz_type: HazardType,
    /// Identifier per hazard event.
    pub event_ids: Vec<EventId>,
    /// Name per hazard event.
    pub event_names: Vec<String>,
    /// Occurrence date per hazard event.
    pub dates: Vec<Date>,
    /// Annual frequency per hazard event.
    pub frequency: Array1<f64>,
    /// Exposure latitudes, passed through for visualization collaborators.
    pub coord_lat: Array1<f64>,
    /// Exposure longitudes, passed through for visualization collaborators.
    pub coord_lon: Array1<f64>,
    /// Aggregate impact per event.
    pub at_event: Array1<f64>,
    /// Expected annual impact per exposure.
    pub eai_exp: Array1<f64>,
    /// Sum of values of the contributing exposures.
    pub tot_value: f64,
    /// Aggregate annual impact across all events.
    pub aai_agg: f64,
    /// Unit of the impact values, taken from the exposures.
    pub unit: String,
    /// Label describing the source data.
    pub label: String,
}

impl Impact {
    /// Assemble a result from computed arrays and source metadata.
    #[must_use]
    pub(crate) fn from_parts(
        exposures: &Exposures,
        hazard: &Hazard,
        at_event: Array1<f64>,
        eai_exp: Array1<f64>,
        tot_value: f64,
        aai_agg: f64,
    ) -> Self {
        Self {
            haz_type: hazard.haz_type.clone(),
            event_ids: hazard.event_ids.clone(),
            event_names: hazard.event_names.clone(),
            dates: hazard.dates.clone(),
            frequency: hazard.frequency.clone(),
            coord_lat: exposures.latitude.clone(),
            coord_lon: exposures.longitude.clone(),
            at_event,
            eai_exp,
            tot_value,
            aai_agg,
            unit: exposures.value_unit.clone(),
            label: format!("{} x {}", exposures.source, hazard.source),
        }
    }

    /// Number of hazard events.
    #[must_use]
    pub fn n_events(&self) -> usize {
        self.at_event.len()
    }

    /// Number of exposures.
    #[must_use]
    pub fn n_exposures(&self) -> usize {
        self.eai_exp.len()
    }

    /// Derive the impact exceedance-frequency curve.
    ///
    /// Events are sorted by impact descending (ties keep their original
    /// event order); cumulative frequency in that order gives the
    /// exceedance frequency per rank, inverted into a return period. An
    /// event set whose most damaging events have zero frequency yields
    /// infinite return periods rather than an error.
    #[must_use]
    pub fn calc_freq_curve(&self) -> ImpactFreqCurve {
        let order = sort_descending_indices(&self.at_event);
        let freq_sorted: Array1<f64> = order.iter().map(|&i| self.frequency[i]).collect();
        let exceed_freq = cumsum(&freq_sorted);
        ImpactFreqCurve {
            return_per: return_periods(&exceed_freq),
            impact: order.iter().map(|&i| self.at_event[i]).collect(),
            unit: self.unit.clone(),
            label: self.label.clone(),
        }
    }
}
