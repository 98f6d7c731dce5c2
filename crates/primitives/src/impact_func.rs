//! Vulnerability curves (impact functions).

use std::collections::HashMap;

use catrisk_math::{check_strictly_increasing, interp_extrap};
use ndarray::Array1;

use crate::{DataError, HazardType, ImpactFuncId};

/// A vulnerability curve mapping hazard intensity to damage.
///
/// The curve is piecewise linear over strictly increasing `intensity`
/// breakpoints, with co-indexed mean damage ratios (`mdr`, fraction of
/// asset value lost) and probabilities of affection (`paa`, used to scale
/// deductibles). Malformed curves are rejected at construction, so
/// evaluation is infallible.
#[derive(Debug, Clone, PartialEq)]
pub struct ImpactFunc {
    /// Curve identifier, unique per hazard type.
    pub id: ImpactFuncId,
    /// Human-readable curve name.
    pub name: String,
    /// Hazard type this curve applies to.
    pub haz_type: HazardType,
    /// Intensity breakpoints, strictly increasing.
    pub intensity: Array1<f64>,
    /// Mean damage ratio per breakpoint, each >= 0.
    pub mdr: Array1<f64>,
    /// Probability of affection per breakpoint, each in [0, 1].
    pub paa: Array1<f64>,
}

impl ImpactFunc {
    /// Create a validated impact function.
    ///
    /// # Errors
    /// Returns a [`DataError`] if the curve is empty, the breakpoints are
    /// not strictly increasing, the arrays disagree in length, an `mdr`
    /// value is negative, or a `paa` value is outside [0, 1].
    pub fn new(
        id: ImpactFuncId,
        name: impl Into<String>,
        haz_type: HazardType,
        intensity: Array1<f64>,
        mdr: Array1<f64>,
        paa: Array1<f64>,
    ) -> Result<Self, DataError> {
        check_strictly_increasing(&intensity).map_err(|err| match err {
            catrisk_math::MathError::NotIncreasing { index } => {
                DataError::NonMonotoneCurve { id, index }
            }
            _ => DataError::EmptyCurve { id },
        })?;
        if mdr.len() != intensity.len() {
            return Err(DataError::LengthMismatch {
                context: "mdr",
                expected: intensity.len(),
                actual: mdr.len(),
            });
        }
        if paa.len() != intensity.len() {
            return Err(DataError::LengthMismatch {
                context: "paa",
                expected: intensity.len(),
                actual: paa.len(),
            });
        }
        if let Some(index) = mdr.iter().position(|&v| v < 0.0) {
            return Err(DataError::NegativeMdr { id, index });
        }
        if let Some(index) = paa.iter().position(|&v| !(0.0..=1.0).contains(&v)) {
            return Err(DataError::PaaOutOfRange { id, index });
        }
        Ok(Self { id, name: name.into(), haz_type, intensity, mdr, paa })
    }

    /// Mean damage ratio at each queried intensity.
    ///
    /// Linear interpolation between breakpoints, flat extrapolation outside.
    #[must_use]
    pub fn calc_mdr(&self, intensities: &Array1<f64>) -> Array1<f64> {
        interp_extrap(intensities, &self.intensity, &self.mdr)
    }

    /// Probability of affection at each queried intensity.
    #[must_use]
    pub fn calc_paa(&self, intensities: &Array1<f64>) -> Array1<f64> {
        interp_extrap(intensities, &self.intensity, &self.paa)
    }
}

/// Collection of impact functions, grouped per hazard type.
#[derive(Debug, Clone, Default)]
pub struct ImpactFuncSet {
    funcs: HashMap<HazardType, Vec<ImpactFunc>>,
    /// Provenance label of the function data.
    pub source: String,
}

impl ImpactFuncSet {
    /// Create an empty set.
    #[must_use]
    pub fn new(source: impl Into<String>) -> Self {
        Self { funcs: HashMap::new(), source: source.into() }
    }

    /// Register a function under its own hazard type.
    ///
    /// # Errors
    /// Returns [`DataError::DuplicateImpactFunc`] if a function with the
    /// same id already exists for that hazard type.
    pub fn add(&mut self, func: ImpactFunc) -> Result<(), DataError> {
        let group = self.funcs.entry(func.haz_type.clone()).or_default();
        if group.iter().any(|f| f.id == func.id) {
            return Err(DataError::DuplicateImpactFunc {
                id: func.id,
                haz_type: func.haz_type,
            });
        }
        group.push(func);
        Ok(())
    }

    /// All functions for a hazard type, in registration order.
    #[must_use]
    pub fn get_funcs(&self, haz_type: &HazardType) -> Option<&[ImpactFunc]> {
        self.funcs.get(haz_type).map(Vec::as_slice)
    }

    /// Look up one function by hazard type and id.
    #[must_use]
    pub fn get(&self, haz_type: &HazardType, id: ImpactFuncId) -> Option<&ImpactFunc> {
        self.funcs.get(haz_type)?.iter().find(|f| f.id == id)
    }

    /// Hazard types with at least one function.
    pub fn haz_types(&self) -> impl Iterator<Item = &HazardType> {
        self.funcs.keys()
    }

    /// Total number of functions across all hazard types.
    #[must_use]
    pub fn len(&self) -> usize {
        self.funcs.values().map(Vec::len).sum()
    }

    /// Check whether the set holds no functions.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.funcs.is_empty()
    }
}
