#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/perilcraft/catrisk-rs/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![cfg_attr(not(test), warn(unused_crate_dependencies))]

mod assign;
pub use assign::{AssignError, CentroidAssigner, PrecomputedAssigner};

mod sink;
pub use sink::{CalcSink, LogSink, NullSink, RecordingSink};
