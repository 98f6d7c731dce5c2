//! # catrisk
//!
//! A catastrophe-impact engine for hazard risk modelling.
//!
//! This crate provides a unified interface to the catrisk ecosystem.
//! Individual components can be enabled via feature flags.
//!
//! ## Features
//!
//! - `full` (default): Enables all components
//! - `primitives`: Core type definitions
//! - `traits`: Seam abstractions (assignment, observability)
//! - `math`: Numerical building blocks
//! - `engine`: The impact calculator and frequency curves
//!
//! ## Example
//!
//! ```rust,ignore
//! // With default features (all components):
//! use catrisk::engine::ImpactCalculator;
//! use catrisk::primitives::Exposures;
//!
//! // Or with specific components only:
//! // [dependencies]
//! // catrisk = { version = "0.1", default-features = false, features = ["engine"] }
//! ```

#![cfg_attr(not(test), warn(unused_crate_dependencies))]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]

#[cfg(feature = "primitives")]
#[doc(inline)]
pub use catrisk_primitives as primitives;
#[cfg(feature = "traits")]
#[doc(inline)]
pub use catrisk_traits as traits;
#[cfg(feature = "math")]
#[doc(inline)]
pub use catrisk_math as math;
#[cfg(feature = "engine")]
#[doc(inline)]
pub use catrisk_engine as engine;
