//! Exceedance-frequency helpers.

use std::cmp::Ordering;

use ndarray::Array1;

/// Indices of `values` sorted by value descending.
///
/// The sort is stable: indices of equal values keep their original order,
/// which makes downstream frequency curves deterministic for tied impacts.
#[must_use]
pub fn sort_descending_indices(values: &Array1<f64>) -> Vec<usize> {
    let mut indices: Vec<usize> = (0..values.len()).collect();
    indices.sort_by(|&a, &b| values[b].partial_cmp(&values[a]).unwrap_or(Ordering::Equal));
    indices
}

/// Running sum of `values`.
#[must_use]
pub fn cumsum(values: &Array1<f64>) -> Array1<f64> {
    let mut total = 0.0;
    values.mapv(|v| {
        total += v;
        total
    })
}

/// Return periods (years) from exceedance frequencies.
///
/// A zero exceedance frequency maps to an infinite return period rather
/// than an error.
#[must_use]
pub fn return_periods(exceed_freq: &Array1<f64>) -> Array1<f64> {
    exceed_freq.mapv(|f| if f == 0.0 { f64::INFINITY } else { 1.0 / f })
}
