use crate::samples::check_samples;
use crate::Error;

/// Evaluate at `x` the unique polynomial interpolant through the given
/// samples, using the Lagrange form
///
/// ```text
/// p(x) = Σ_i y_i Π_{j ≠ i} (x - x_j) / (x_i - x_j)
/// ```
///
/// The basis terms are accumulated in ascending sample order; together with
/// exact zero checks on the denominators this makes the result fully
/// deterministic for a given input.
///
/// `x` is allowed to coincide with one of the sample positions, and to lie
/// outside the range spanned by `x_vals` (extrapolation).
#[allow(clippy::float_cmp)]
pub fn lagrange_interpolate(x_vals: &[f64], y_vals: &[f64], x: f64) -> Result<f64, Error> {
    let n = check_samples(x_vals, y_vals)?;

    let mut result = 0.0;
    for i in 0..n {
        let mut term = y_vals[i];
        for j in 0..n {
            if i == j {
                continue;
            }

            // a zero denominator means two samples share an x coordinate,
            // checked here rather than upfront so the pair is reported from
            // the place where it breaks the computation
            let denominator = x_vals[i] - x_vals[j];
            if denominator == 0.0 {
                return Err(Error::DuplicateXValues {
                    value: x_vals[i],
                    first: usize::min(i, j),
                    second: usize::max(i, j),
                });
            }

            term *= (x - x_vals[j]) / denominator;
        }
        result += term;
    }

    return Ok(result);
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn parabola() {
        let x = [1.0, 2.0, 3.0, 4.0];
        let y = [1.0, 4.0, 9.0, 16.0];

        // four samples of y = x² determine the polynomial exactly
        assert_relative_eq!(lagrange_interpolate(&x, &y, 2.5).unwrap(), 6.25, max_relative = 1e-12);
        assert_relative_eq!(lagrange_interpolate(&x, &y, 0.0).unwrap(), 0.0, epsilon = 1e-12);
        assert_relative_eq!(lagrange_interpolate(&x, &y, 10.0).unwrap(), 100.0, max_relative = 1e-12);
    }

    #[test]
    fn exact_at_samples() {
        let x = [-1.5, 0.0, 0.25, 3.0, 7.125];
        let y = [2.0, -1.0, 0.5, 4.0, -3.25];

        for (&xi, &yi) in x.iter().zip(&y) {
            assert_relative_eq!(lagrange_interpolate(&x, &y, xi).unwrap(), yi, max_relative = 1e-12);
        }
    }

    #[test]
    fn two_points_is_a_line() {
        let value = lagrange_interpolate(&[0.0, 2.0], &[1.0, 5.0], 0.5).unwrap();
        assert_relative_eq!(value, 2.0, max_relative = 1e-15);
    }

    #[test]
    fn deterministic() {
        let x = [0.1, 1.3, 2.7, 3.0, 5.5];
        let y = [0.3, -2.1, 4.4, 0.0, 1.0];

        let first = lagrange_interpolate(&x, &y, 1.8).unwrap();
        for _ in 0..10 {
            assert_eq!(lagrange_interpolate(&x, &y, 1.8).unwrap(), first);
        }
    }

    #[test]
    fn invalid_samples() {
        assert_eq!(
            lagrange_interpolate(&[1.0, 2.0, 3.0], &[1.0, 4.0], 0.0),
            Err(Error::LengthMismatch { x_len: 3, y_len: 2 })
        );

        assert_eq!(
            lagrange_interpolate(&[1.0], &[1.0], 0.0),
            Err(Error::InsufficientData { actual: 1 })
        );
    }

    #[test]
    fn duplicate_x_values() {
        let result = lagrange_interpolate(&[1.0, 2.0, 1.0], &[1.0, 4.0, 1.0], 1.5);
        assert_eq!(
            result,
            Err(Error::DuplicateXValues { value: 1.0, first: 0, second: 2 })
        );

        // adjacent duplicates as well
        let result = lagrange_interpolate(&[3.0, 3.0], &[1.0, 2.0], 0.0);
        assert_eq!(
            result,
            Err(Error::DuplicateXValues { value: 3.0, first: 0, second: 1 })
        );
    }
}
