//! Identifier newtypes.

use derive_more::{Display, From, Into};
use serde::{Deserialize, Serialize};

/// Unique identifier for a hazard event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, From, Into, Serialize, Deserialize)]
pub struct EventId(pub u64);

impl EventId {
    /// Create a new event ID.
    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }
}

/// Identifier of a vulnerability curve.
///
/// Ordered so exposure groups keyed by function id iterate deterministically.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Display,
    From,
    Into,
    Serialize,
    Deserialize,
)]
pub struct ImpactFuncId(pub u32);

impl ImpactFuncId {
    /// Create a new impact function ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }
}

/// Hazard peril tag, e.g. `"TC"` for tropical cyclone.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
pub struct HazardType(pub String);

impl HazardType {
    /// Create a new hazard type.
    #[must_use]
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    /// Get the hazard type as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for HazardType {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for HazardType {
    fn from(s: String) -> Self {
        Self(s)
    }
}
