//! Impact exceedance-frequency curves.

use catrisk_traits::CalcSink;
use ndarray::Array1;

/// Impact exceedance-frequency curve.
///
/// Parallel arrays of return period (years) and the impact magnitude
/// equalled or exceeded with that period, sorted by descending impact.
/// Purely derivative of an [`crate::Impact`]; recomputed on demand.
#[derive(Debug, Clone, PartialEq)]
pub struct ImpactFreqCurve {
    /// Return period per rank.
    pub return_per: Array1<f64>,
    /// Impact magnitude per rank, descending.
    pub impact: Array1<f64>,
    /// Unit of the impact values.
    pub unit: String,
    /// Label describing the source data.
    pub label: String,
}

impl ImpactFreqCurve {
    /// Number of ranks in the curve.
    #[must_use]
    pub fn len(&self) -> usize {
        self.impact.len()
    }

    /// Check if the curve has no ranks.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.impact.is_empty()
    }

    /// Pair this curve with another for a downstream plotting collaborator.
    ///
    /// Curves with different units are still comparable; the mismatch is
    /// reported through the sink as a warning and the comparison proceeds.
    #[must_use]
    pub fn compare<'a>(&'a self, other: &'a Self, sink: &dyn CalcSink) -> CurveComparison<'a> {
        if self.unit != other.unit {
            sink.warning(&format!(
                "comparing curves with different units: {} and {}",
                self.unit, other.unit
            ));
        }
        CurveComparison { base: self, other }
    }
}

/// Two frequency curves paired for comparison.
///
/// Read-only result data; no further computation is required by consumers.
#[derive(Debug, Clone, Copy)]
pub struct CurveComparison<'a> {
    /// The curve the comparison was initiated from.
    pub base: &'a ImpactFreqCurve,
    /// The curve compared against.
    pub other: &'a ImpactFreqCurve,
}

#[cfg(test)]
mod tests {
    use catrisk_traits::RecordingSink;
    use ndarray::array;

    use super::*;

    fn curve(unit: &str) -> ImpactFreqCurve {
        ImpactFreqCurve {
            return_per: array![100.0, 10.0],
            impact: array![100.0, 50.0],
            unit: unit.to_string(),
            label: "a x b".to_string(),
        }
    }

    #[test]
    fn compare_same_unit_is_silent() {
        let sink = RecordingSink::new();
        let a = curve("USD");
        let b = curve("USD");
        let cmp = a.compare(&b, &sink);
        assert!(sink.warnings().is_empty());
        assert_eq!(cmp.base.unit, cmp.other.unit);
    }

    #[test]
    fn compare_unit_mismatch_warns_but_proceeds() {
        let sink = RecordingSink::new();
        let a = curve("USD");
        let b = curve("EUR");
        let cmp = a.compare(&b, &sink);
        let warnings = sink.warnings();
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].contains("USD") && warnings[0].contains("EUR"));
        assert_eq!(cmp.other.unit, "EUR");
    }

    #[test]
    fn len_and_is_empty() {
        let c = curve("USD");
        assert_eq!(c.len(), 2);
        assert!(!c.is_empty());
    }
}
