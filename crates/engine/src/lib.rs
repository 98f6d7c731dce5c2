#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/perilcraft/catrisk-rs/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![cfg_attr(not(test), warn(unused_crate_dependencies))]

mod calc;
pub use calc::ImpactCalculator;

mod impact;
pub use impact::Impact;

mod freq_curve;
pub use freq_curve::{CurveComparison, ImpactFreqCurve};

mod error;
pub use error::EngineError;

/// Re-export commonly used types.
pub mod prelude {
    pub use catrisk_traits::{CalcSink, CentroidAssigner};

    pub use super::{EngineError, Impact, ImpactCalculator, ImpactFreqCurve};
}
