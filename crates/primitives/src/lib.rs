#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/perilcraft/catrisk-rs/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![cfg_attr(not(test), warn(unused_crate_dependencies))]

mod ids;
pub use ids::{EventId, HazardType, ImpactFuncId};

mod exposure;
pub use exposure::{Exposures, UNASSIGNED};

mod hazard;
pub use hazard::Hazard;

mod impact_func;
pub use impact_func::{ImpactFunc, ImpactFuncSet};

mod error;
pub use error::DataError;

/// Re-export common date type.
pub type Date = chrono::NaiveDate;
