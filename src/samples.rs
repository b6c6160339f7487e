use crate::Error;

/// Validate an (x, y) sample set before interpolation, returning the number
/// of samples.
///
/// This only checks the slice lengths. Duplicated x values are detected
/// lazily by the evaluators themselves, when the corresponding denominator
/// is actually computed.
pub(crate) fn check_samples(x_vals: &[f64], y_vals: &[f64]) -> Result<usize, Error> {
    if x_vals.len() != y_vals.len() {
        return Err(Error::LengthMismatch {
            x_len: x_vals.len(),
            y_len: y_vals.len(),
        });
    }

    if x_vals.len() < 2 {
        return Err(Error::InsufficientData { actual: x_vals.len() });
    }

    return Ok(x_vals.len());
}
