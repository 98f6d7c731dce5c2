//! The impact calculator.

use std::collections::BTreeMap;

use catrisk_primitives::{Exposures, Hazard, ImpactFunc, ImpactFuncId, ImpactFuncSet};
use catrisk_traits::{CalcSink, CentroidAssigner};
use ndarray::Array1;

use crate::{EngineError, Impact};

/// Computes the impact of a hazard event set on an exposure set.
///
/// The calculator holds its collaborators by reference: the spatial
/// assigner it triggers when exposures carry no cached centroids for the
/// hazard's type, and the sink it reports progress and non-fatal
/// conditions through. Each [`calc`](Self::calc) call owns its output
/// arrays; no state is shared across invocations.
pub struct ImpactCalculator<'a> {
    assigner: &'a dyn CentroidAssigner,
    sink: &'a dyn CalcSink,
}

impl std::fmt::Debug for ImpactCalculator<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ImpactCalculator").finish_non_exhaustive()
    }
}

impl<'a> ImpactCalculator<'a> {
    /// Create a calculator with the given collaborators.
    #[must_use]
    pub const fn new(assigner: &'a dyn CentroidAssigner, sink: &'a dyn CalcSink) -> Self {
        Self { assigner, sink }
    }

    /// Compute the impact of `hazard` on `exposures` through the
    /// vulnerability curves in `impact_funcs`.
    ///
    /// Exposures contribute only if their value is positive and their
    /// assigned centroid for the hazard's type is non-negative. An empty
    /// eligible set is not an error: a warning goes to the sink and the
    /// all-zero result is returned.
    ///
    /// # Errors
    /// Returns an [`EngineError`] if centroid assignment fails, an
    /// assigned centroid lies outside the hazard grid, or an eligible
    /// exposure references an impact function the set does not hold for
    /// the hazard's type.
    pub fn calc(
        &self,
        exposures: &mut Exposures,
        impact_funcs: &ImpactFuncSet,
        hazard: &Hazard,
    ) -> Result<Impact, EngineError> {
        if !exposures.is_assigned(&hazard.haz_type) {
            self.assigner.assign(exposures, hazard)?;
        }
        let exposures = &*exposures;
        let assigned = exposures
            .assigned_centroids(&hazard.haz_type)
            .ok_or_else(|| EngineError::NotAssigned { haz_type: hazard.haz_type.clone() })?;
        for (i, &centroid) in assigned.iter().enumerate() {
            if centroid >= 0 && centroid as usize >= hazard.n_centroids() {
                return Err(EngineError::CentroidOutOfRange {
                    exposure: i,
                    centroid,
                    n_centroids: hazard.n_centroids(),
                });
            }
        }

        let mut at_event = Array1::zeros(hazard.n_events());
        let mut eai_exp = Array1::zeros(exposures.len());
        let mut tot_value = 0.0;

        let eligible: Vec<usize> = (0..exposures.len())
            .filter(|&i| exposures.value[i] > 0.0 && assigned[i] >= 0)
            .collect();

        if eligible.is_empty() {
            self.sink.warning("no affected exposures");
        } else {
            self.sink.info(&format!(
                "calculating damage for {} exposures and {} events",
                eligible.len(),
                hazard.n_events()
            ));
            if impact_funcs.get_funcs(&hazard.haz_type).is_none() {
                return Err(EngineError::NoImpactFuncs { haz_type: hazard.haz_type.clone() });
            }

            // Partition once by curve id; BTreeMap keeps group iteration
            // (and float accumulation order) deterministic across calls.
            let mut groups: BTreeMap<ImpactFuncId, Vec<usize>> = BTreeMap::new();
            for &i in &eligible {
                groups.entry(exposures.impact_func_ids[i]).or_default().push(i);
            }

            for (&func_id, members) in &groups {
                let func = impact_funcs.get(&hazard.haz_type, func_id).ok_or_else(|| {
                    EngineError::MissingImpactFunc {
                        haz_type: hazard.haz_type.clone(),
                        id: func_id,
                    }
                })?;
                for &iexp in members {
                    let icen = assigned[iexp] as usize;
                    let (event_rows, impact) = one_exposure(iexp, exposures, hazard, func, icen);
                    let mut eai = 0.0;
                    for (k, &row) in event_rows.iter().enumerate() {
                        at_event[row] += impact[k];
                        eai += impact[k] * hazard.frequency[row];
                    }
                    eai_exp[iexp] += eai;
                    tot_value += exposures.value[iexp];
                }
            }
        }

        let aai_agg =
            at_event.iter().zip(hazard.frequency.iter()).map(|(&a, &f)| a * f).sum();

        Ok(Impact::from_parts(exposures, hazard, at_event, eai_exp, tot_value, aai_agg))
    }
}

/// Impact of the hazard on one exposure.
///
/// Returns the event rows with nonzero intensity at the exposure's centroid
/// and the impact for each of those events. Events with zero intensity
/// contribute zero impact and are excluded up front.
fn one_exposure<'h>(
    iexp: usize,
    exposures: &Exposures,
    hazard: &'h Hazard,
    func: &ImpactFunc,
    icen: usize,
) -> (&'h [usize], Array1<f64>) {
    let (event_rows, intensity) = hazard.intensity.col_values(icen);
    let intensity: Array1<f64> = intensity.iter().copied().collect();
    let fraction = hazard.fraction.values_at(event_rows, icen);

    let value = exposures.value[iexp];
    let mut impact = (&func.calc_mdr(&intensity) * &fraction) * value;

    // Clipping is a no-op for an all-zero impact or without insurance
    // terms, and is skipped in those cases.
    if impact.iter().any(|&v| v != 0.0) {
        let deductible = exposures.deductible[iexp];
        let cover = exposures.cover[iexp];
        if deductible > 0.0 || cover < value {
            let paa = func.calc_paa(&intensity);
            impact = impact
                .iter()
                .zip(paa.iter())
                .map(|(&raw, &p)| (raw - deductible * p).max(0.0).min(cover))
                .collect();
        }
    }

    (event_rows, impact)
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;
    use catrisk_math::CscMatrix;
    use catrisk_primitives::{Date, EventId, HazardType, UNASSIGNED};
    use catrisk_traits::{AssignError, NullSink, PrecomputedAssigner, RecordingSink};
    use ndarray::{Array2, array};
    use rstest::rstest;

    use super::*;

    fn tc() -> HazardType {
        HazardType::new("TC")
    }

    fn linear_func(id: u32) -> ImpactFunc {
        ImpactFunc::new(
            ImpactFuncId::new(id),
            "linear",
            tc(),
            array![0.0, 10.0],
            array![0.0, 1.0],
            array![0.0, 1.0],
        )
        .unwrap()
    }

    fn func_set(ids: &[u32]) -> ImpactFuncSet {
        let mut set = ImpactFuncSet::new("curves");
        for &id in ids {
            set.add(linear_func(id)).unwrap();
        }
        set
    }

    fn hazard_from_dense(intensity: Array2<f64>, frequency: Array1<f64>) -> Hazard {
        let fraction = intensity.mapv(|v| if v != 0.0 { 1.0 } else { 0.0 });
        let n = frequency.len();
        Hazard::new(
            tc(),
            "demo",
            (1..=n as u64).map(EventId::new).collect(),
            (0..n).map(|i| format!("ev{i}")).collect(),
            (0..n)
                .map(|i| Date::from_ymd_opt(2020, 1, 1 + i as u32).unwrap())
                .collect(),
            frequency,
            CscMatrix::from_dense(&intensity),
            CscMatrix::from_dense(&fraction),
        )
        .unwrap()
    }

    fn exposures(
        value: Array1<f64>,
        deductible: Array1<f64>,
        cover: Array1<f64>,
        func_ids: Vec<u32>,
    ) -> Exposures {
        let n = value.len();
        Exposures::new(
            "portfolio",
            "USD",
            Array1::zeros(n),
            Array1::zeros(n),
            value,
            deductible,
            cover,
            func_ids.into_iter().map(ImpactFuncId::new).collect(),
        )
        .unwrap()
    }

    /// Assigner that must not be called.
    #[derive(Debug)]
    struct ForbiddenAssigner;

    impl CentroidAssigner for ForbiddenAssigner {
        fn assign(&self, _: &mut Exposures, _: &Hazard) -> Result<(), AssignError> {
            panic!("assignment triggered for already-assigned exposures");
        }
    }

    #[test]
    fn worked_example_end_to_end() {
        // One exposure, value 100, full cover; linear curve reaching mdr 1
        // at intensity 10; two events at intensities 5 and 10.
        let mut exp = exposures(array![100.0], array![0.0], array![100.0], vec![1]);
        let haz = hazard_from_dense(array![[5.0], [10.0]], array![0.1, 0.01]);
        let assigner = PrecomputedAssigner::new(vec![0]);
        let sink = NullSink;

        let imp =
            ImpactCalculator::new(&assigner, &sink).calc(&mut exp, &func_set(&[1]), &haz).unwrap();

        assert_eq!(imp.at_event.to_vec(), vec![50.0, 100.0]);
        assert_relative_eq!(imp.eai_exp[0], 6.0, epsilon = 1e-12);
        assert_relative_eq!(imp.aai_agg, 6.0, epsilon = 1e-12);
        assert_relative_eq!(imp.tot_value, 100.0, epsilon = 1e-12);
        assert_eq!(imp.unit, "USD");
        assert_eq!(imp.label, "portfolio x demo");

        let curve = imp.calc_freq_curve();
        assert_eq!(curve.impact.to_vec(), vec![100.0, 50.0]);
        assert_relative_eq!(curve.return_per[0], 100.0, epsilon = 1e-10);
        assert_relative_eq!(curve.return_per[1], 100.0 / 11.0, epsilon = 1e-10);
    }

    #[test]
    fn conservation_across_exposures_and_events() {
        let mut exp = exposures(
            array![100.0, 250.0, 40.0, 75.0],
            array![0.0, 10.0, 0.0, 2.0],
            array![100.0, 200.0, 40.0, 60.0],
            vec![1, 2, 1, 2],
        );
        let haz = hazard_from_dense(
            array![[5.0, 0.0, 2.0], [10.0, 3.0, 0.0], [0.0, 8.0, 6.0]],
            array![0.1, 0.05, 0.02],
        );
        let assigner = PrecomputedAssigner::new(vec![0, 1, 2, 1]);
        let sink = NullSink;

        let imp = ImpactCalculator::new(&assigner, &sink)
            .calc(&mut exp, &func_set(&[1, 2]), &haz)
            .unwrap();

        assert_relative_eq!(imp.eai_exp.sum(), imp.aai_agg, epsilon = 1e-9);
        assert_relative_eq!(imp.tot_value, 465.0, epsilon = 1e-12);
        assert!(imp.at_event.iter().all(|&v| v >= 0.0));
        assert!(imp.eai_exp.iter().all(|&v| v >= 0.0));
        assert!(imp.aai_agg >= 0.0);
    }

    #[test]
    fn clipping_caps_each_event_at_cover() {
        // Cover below the raw impact of the worst event.
        let mut exp = exposures(array![100.0], array![0.0], array![30.0], vec![1]);
        let haz = hazard_from_dense(array![[5.0], [10.0]], array![0.1, 0.01]);
        let assigner = PrecomputedAssigner::new(vec![0]);
        let sink = NullSink;

        let imp =
            ImpactCalculator::new(&assigner, &sink).calc(&mut exp, &func_set(&[1]), &haz).unwrap();

        assert!(imp.at_event.iter().all(|&v| v <= 30.0));
        assert_eq!(imp.at_event.to_vec(), vec![30.0, 30.0]);
    }

    #[test]
    fn deductible_scaled_by_paa_and_clamped_at_zero() {
        // Intensity 5 gives mdr 0.5 and paa 0.5: raw 50, minus 40 * 0.5.
        let mut exp = exposures(array![100.0], array![40.0], array![100.0], vec![1]);
        let haz = hazard_from_dense(array![[5.0]], array![0.1]);
        let assigner = PrecomputedAssigner::new(vec![0]);
        let sink = NullSink;

        let imp =
            ImpactCalculator::new(&assigner, &sink).calc(&mut exp, &func_set(&[1]), &haz).unwrap();
        assert_relative_eq!(imp.at_event[0], 30.0, epsilon = 1e-12);

        // A deductible larger than the loss clamps to zero, not negative.
        let mut exp = exposures(array![100.0], array![200.0], array![100.0], vec![1]);
        let imp =
            ImpactCalculator::new(&assigner, &sink).calc(&mut exp, &func_set(&[1]), &haz).unwrap();
        assert_eq!(imp.at_event[0], 0.0);
    }

    #[test]
    fn no_eligible_exposures_warns_and_returns_zero_result() {
        let mut exp = exposures(array![0.0, 0.0], array![0.0, 0.0], array![0.0, 0.0], vec![1, 1]);
        let haz = hazard_from_dense(array![[5.0], [10.0]], array![0.1, 0.01]);
        let assigner = PrecomputedAssigner::new(vec![0, 0]);
        let sink = RecordingSink::new();

        let imp =
            ImpactCalculator::new(&assigner, &sink).calc(&mut exp, &func_set(&[1]), &haz).unwrap();

        assert_eq!(sink.warnings(), vec!["no affected exposures".to_string()]);
        assert!(imp.at_event.iter().all(|&v| v == 0.0));
        assert!(imp.eai_exp.iter().all(|&v| v == 0.0));
        assert_eq!(imp.tot_value, 0.0);
        assert_eq!(imp.aai_agg, 0.0);
    }

    #[test]
    fn unassigned_exposures_are_excluded() {
        let mut exp =
            exposures(array![100.0, 100.0], array![0.0, 0.0], array![100.0, 100.0], vec![1, 1]);
        let haz = hazard_from_dense(array![[10.0]], array![0.1]);
        let assigner = PrecomputedAssigner::new(vec![0, UNASSIGNED]);
        let sink = NullSink;

        let imp =
            ImpactCalculator::new(&assigner, &sink).calc(&mut exp, &func_set(&[1]), &haz).unwrap();

        assert_relative_eq!(imp.tot_value, 100.0, epsilon = 1e-12);
        assert_eq!(imp.eai_exp[1], 0.0);
    }

    #[test]
    fn missing_impact_function_is_hard_error() {
        let mut exp = exposures(array![100.0], array![0.0], array![100.0], vec![9]);
        let haz = hazard_from_dense(array![[5.0]], array![0.1]);
        let assigner = PrecomputedAssigner::new(vec![0]);
        let sink = NullSink;

        let err = ImpactCalculator::new(&assigner, &sink)
            .calc(&mut exp, &func_set(&[1]), &haz)
            .unwrap_err();
        assert!(matches!(err, EngineError::MissingImpactFunc { id, .. } if id == ImpactFuncId::new(9)));
    }

    #[test]
    fn no_functions_for_hazard_type_is_hard_error() {
        let mut exp = exposures(array![100.0], array![0.0], array![100.0], vec![1]);
        let haz = hazard_from_dense(array![[5.0]], array![0.1]);
        let assigner = PrecomputedAssigner::new(vec![0]);
        let sink = NullSink;

        let err = ImpactCalculator::new(&assigner, &sink)
            .calc(&mut exp, &ImpactFuncSet::new("empty"), &haz)
            .unwrap_err();
        assert!(matches!(err, EngineError::NoImpactFuncs { .. }));
    }

    #[test]
    fn centroid_outside_grid_is_hard_error() {
        let mut exp = exposures(array![100.0], array![0.0], array![100.0], vec![1]);
        let haz = hazard_from_dense(array![[5.0]], array![0.1]);
        let assigner = PrecomputedAssigner::new(vec![5]);
        let sink = NullSink;

        let err = ImpactCalculator::new(&assigner, &sink)
            .calc(&mut exp, &func_set(&[1]), &haz)
            .unwrap_err();
        assert!(matches!(err, EngineError::CentroidOutOfRange { centroid: 5, .. }));
    }

    #[test]
    fn cached_assignment_skips_the_assigner() {
        let mut exp = exposures(array![100.0], array![0.0], array![100.0], vec![1]);
        exp.set_assigned(tc(), vec![0]).unwrap();
        let haz = hazard_from_dense(array![[10.0]], array![0.1]);
        let sink = NullSink;

        let imp = ImpactCalculator::new(&ForbiddenAssigner, &sink)
            .calc(&mut exp, &func_set(&[1]), &haz)
            .unwrap();
        assert_relative_eq!(imp.at_event[0], 100.0, epsilon = 1e-12);
    }

    #[test]
    fn calc_is_bitwise_idempotent() {
        let mut exp = exposures(
            array![100.0, 250.0, 40.0],
            array![0.0, 10.0, 0.0],
            array![100.0, 200.0, 40.0],
            vec![1, 2, 1],
        );
        let haz = hazard_from_dense(
            array![[5.0, 0.0, 2.0], [10.0, 3.0, 0.0]],
            array![0.1, 0.05],
        );
        let assigner = PrecomputedAssigner::new(vec![0, 1, 2]);
        let sink = NullSink;
        let calculator = ImpactCalculator::new(&assigner, &sink);
        let funcs = func_set(&[1, 2]);

        let first = calculator.calc(&mut exp, &funcs, &haz).unwrap();
        let second = calculator.calc(&mut exp, &funcs, &haz).unwrap();

        assert_eq!(first.at_event.to_vec(), second.at_event.to_vec());
        assert_eq!(first.eai_exp.to_vec(), second.eai_exp.to_vec());
        assert_eq!(first.tot_value.to_bits(), second.tot_value.to_bits());
        assert_eq!(first.aai_agg.to_bits(), second.aai_agg.to_bits());
    }

    #[rstest]
    #[case(0.5, 25.0)]
    #[case(1.0, 50.0)]
    fn fraction_scales_impact(#[case] fraction: f64, #[case] expected: f64) {
        let mut exp = exposures(array![100.0], array![0.0], array![100.0], vec![1]);
        let haz = Hazard::new(
            tc(),
            "demo",
            vec![EventId::new(1)],
            vec!["ev0".to_string()],
            vec![Date::from_ymd_opt(2020, 1, 1).unwrap()],
            array![0.1],
            CscMatrix::from_dense(&array![[5.0]]),
            CscMatrix::from_dense(&array![[fraction]]),
        )
        .unwrap();
        let assigner = PrecomputedAssigner::new(vec![0]);
        let sink = NullSink;

        let imp =
            ImpactCalculator::new(&assigner, &sink).calc(&mut exp, &func_set(&[1]), &haz).unwrap();
        assert_relative_eq!(imp.at_event[0], expected, epsilon = 1e-12);
    }

    #[test]
    fn zero_intensity_events_do_not_contribute() {
        // Second event has no intensity at the exposure's centroid.
        let mut exp = exposures(array![100.0], array![0.0], array![100.0], vec![1]);
        let haz = hazard_from_dense(array![[5.0, 0.0], [0.0, 3.0]], array![0.1, 0.5]);
        let assigner = PrecomputedAssigner::new(vec![0]);
        let sink = NullSink;

        let imp =
            ImpactCalculator::new(&assigner, &sink).calc(&mut exp, &func_set(&[1]), &haz).unwrap();
        assert_relative_eq!(imp.at_event[0], 50.0, epsilon = 1e-12);
        assert_eq!(imp.at_event[1], 0.0);
        assert_relative_eq!(imp.eai_exp[0], 5.0, epsilon = 1e-12);
    }
}
