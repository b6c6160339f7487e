use ndarray::Array2;

use crate::samples::check_samples;
use crate::Error;

/// Evaluate at `x` the unique polynomial interpolant through the given
/// samples, using Neville's recurrence.
///
/// The computation fills a triangular tableau `Q` where `Q[(i, j)]` is the
/// degree `j` interpolant through samples `i` to `i + j`, evaluated at `x`:
///
/// ```text
/// Q[(i, 0)] = y_i
/// Q[(i, j)] = ((x - x_{i+j}) Q[(i, j-1)] + (x_i - x) Q[(i+1, j-1)]) / (x_i - x_{i+j})
/// ```
///
/// and the value of the full interpolant is `Q[(0, n - 1)]`.
///
/// This computes the same value as [`lagrange_interpolate`] up to floating
/// point rounding, and the two implementations are used as cross-checks of
/// one another.
///
/// [`lagrange_interpolate`]: crate::lagrange_interpolate
#[allow(clippy::float_cmp)]
pub fn neville_interpolate(x_vals: &[f64], y_vals: &[f64], x: f64) -> Result<f64, Error> {
    let n = check_samples(x_vals, y_vals)?;

    // full n×n allocation, only the upper triangle (i + j < n) is used
    let mut q = Array2::from_elem((n, n), 0.0);
    for i in 0..n {
        q[(i, 0)] = y_vals[i];
    }

    for j in 1..n {
        for i in 0..(n - j) {
            // every unordered pair of sample indices shows up as (i, i + j)
            // at some point of the sweep, so the denominator check below
            // catches any duplicated x coordinate
            let denominator = x_vals[i] - x_vals[i + j];
            if denominator == 0.0 {
                return Err(Error::DuplicateXValues {
                    value: x_vals[i],
                    first: i,
                    second: i + j,
                });
            }

            q[(i, j)] = ((x - x_vals[i + j]) * q[(i, j - 1)]
                + (x_vals[i] - x) * q[(i + 1, j - 1)]) / denominator;
        }
    }

    return Ok(q[(0, n - 1)]);
}
