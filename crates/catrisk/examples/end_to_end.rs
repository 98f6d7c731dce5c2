//! End-to-end impact computation on a toy portfolio.
//!
//! One fully covered asset, a two-event tropical-cyclone hazard, and a
//! linear vulnerability curve; prints the per-event impacts, the expected
//! annual impact, and the exceedance-frequency curve.
#![allow(missing_docs)]

use catrisk::engine::ImpactCalculator;
use catrisk::math::CscMatrix;
use catrisk::primitives::{
    Date, EventId, Exposures, Hazard, HazardType, ImpactFunc, ImpactFuncId, ImpactFuncSet,
};
use catrisk::traits::{LogSink, PrecomputedAssigner};
use ndarray::array;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let tc = HazardType::new("TC");

    let mut exposures = Exposures::new(
        "toy-portfolio",
        "USD",
        array![21.3],
        array![-158.0],
        array![100.0],
        array![0.0],
        array![100.0],
        vec![ImpactFuncId::new(1)],
    )?;

    let hazard = Hazard::new(
        tc.clone(),
        "toy-tracks",
        vec![EventId::new(1), EventId::new(2)],
        vec!["storm-a".to_string(), "storm-b".to_string()],
        vec![
            Date::from_ymd_opt(2020, 8, 1).ok_or("bad date")?,
            Date::from_ymd_opt(2020, 9, 15).ok_or("bad date")?,
        ],
        array![0.1, 0.01],
        CscMatrix::from_dense(&array![[5.0], [10.0]]),
        CscMatrix::from_dense(&array![[1.0], [1.0]]),
    )?;

    let mut funcs = ImpactFuncSet::new("toy-curves");
    funcs.add(ImpactFunc::new(
        ImpactFuncId::new(1),
        "linear",
        tc,
        array![0.0, 10.0],
        array![0.0, 1.0],
        array![0.0, 1.0],
    )?)?;

    let assigner = PrecomputedAssigner::new(vec![0]);
    let sink = LogSink;
    let calculator = ImpactCalculator::new(&assigner, &sink);

    let impact = calculator.calc(&mut exposures, &funcs, &hazard)?;
    println!("label:      {}", impact.label);
    println!("at_event:   {:?}", impact.at_event.to_vec());
    println!("eai_exp:    {:?}", impact.eai_exp.to_vec());
    println!("tot_value:  {}", impact.tot_value);
    println!("aai_agg:    {} {}/yr", impact.aai_agg, impact.unit);

    let curve = impact.calc_freq_curve();
    println!("\nexceedance-frequency curve:");
    for (rp, imp) in curve.return_per.iter().zip(curve.impact.iter()) {
        println!("  {rp:>10.3} yr  ->  {imp:>8.2} {}", curve.unit);
    }

    Ok(())
}
