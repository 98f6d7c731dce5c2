//! Monotone piecewise-linear interpolation.

use ndarray::Array1;

use crate::MathError;

/// Check that a sequence of breakpoints is strictly increasing.
///
/// # Errors
/// Returns [`MathError::EmptyData`] for an empty sequence and
/// [`MathError::NotIncreasing`] at the first index `i` where
/// `xs[i] <= xs[i - 1]`.
pub fn check_strictly_increasing(xs: &Array1<f64>) -> Result<(), MathError> {
    if xs.is_empty() {
        return Err(MathError::EmptyData);
    }
    for i in 1..xs.len() {
        if xs[i] <= xs[i - 1] {
            return Err(MathError::NotIncreasing { index: i });
        }
    }
    Ok(())
}

/// Piecewise-linear interpolation with flat extrapolation at the boundaries.
///
/// For each query in `x`, values below `xp[0]` yield `fp[0]`, values above
/// `xp[last]` yield `fp[last]`, and values in between are linearly
/// interpolated between the surrounding breakpoints.
///
/// `xp` must be strictly increasing and co-indexed with `fp`; callers
/// validate curves at construction time with [`check_strictly_increasing`].
#[must_use]
pub fn interp_extrap(x: &Array1<f64>, xp: &Array1<f64>, fp: &Array1<f64>) -> Array1<f64> {
    debug_assert!(!xp.is_empty());
    debug_assert_eq!(xp.len(), fp.len());

    let n = xp.len();
    x.mapv(|xi| {
        if xi <= xp[0] {
            fp[0]
        } else if xi >= xp[n - 1] {
            fp[n - 1]
        } else {
            // Binary search for the bracketing segment; xi is interior so
            // xp[lo] <= xi < xp[hi] with hi = lo + 1.
            let mut lo = 0;
            let mut hi = n - 1;
            while hi - lo > 1 {
                let mid = (lo + hi) / 2;
                if xp[mid] <= xi {
                    lo = mid;
                } else {
                    hi = mid;
                }
            }
            let t = (xi - xp[lo]) / (xp[hi] - xp[lo]);
            fp[lo] + t * (fp[hi] - fp[lo])
        }
    })
}
