#[non_exhaustive]
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// The x and y sample slices have different lengths
    LengthMismatch {
        x_len: usize,
        y_len: usize,
    },
    /// Fewer than two samples were provided
    InsufficientData {
        actual: usize,
    },
    /// Two distinct samples share the same x coordinate. `first` and `second`
    /// are the indices of the pair for which the duplicate was detected.
    DuplicateXValues {
        value: f64,
        first: usize,
        second: usize,
    },
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::LengthMismatch { x_len, y_len } => write!(
                f, "x and y values must have the same length (got {} x values and {} y values)",
                x_len, y_len
            ),
            Error::InsufficientData { actual } => write!(
                f, "interpolation requires at least two samples (got {})", actual
            ),
            Error::DuplicateXValues { value, first, second } => write!(
                f, "duplicate x value ({}) in samples at indices {} and {}",
                value, first, second
            ),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::LengthMismatch { .. } |
            Error::InsufficientData { .. } |
            Error::DuplicateXValues { .. } => None,
        }
    }
}
