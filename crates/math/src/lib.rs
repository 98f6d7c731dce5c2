#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/perilcraft/catrisk-rs/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![cfg_attr(not(test), warn(unused_crate_dependencies))]

mod interp;
pub use interp::{check_strictly_increasing, interp_extrap};

mod sparse;
pub use sparse::CscMatrix;

mod exceedance;
pub use exceedance::{cumsum, return_periods, sort_descending_indices};

mod error;
pub use error::MathError;
