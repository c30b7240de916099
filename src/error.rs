use thiserror::Error;

/// Result type alias for loss computations.
pub type Result<T> = std::result::Result<T, LossError>;

/// Input-validation failures.
///
/// Both variants are detected before any arithmetic runs, so a failed call
/// produces no partial output. Numerical specials (inf/NaN) are not errors;
/// they propagate through the returned values untouched.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LossError {
    /// Two inputs disagree on a dimension they must share.
    #[error("dimension mismatch: {context}: expected {expected}, got {actual}")]
    DimensionMismatch {
        context: &'static str,
        expected: usize,
        actual: usize,
    },

    /// A label does not index a valid class column of the weight matrix.
    #[error("label {label} at position {index} is out of range for {num_classes} classes")]
    InvalidLabel {
        index: usize,
        label: usize,
        num_classes: usize,
    },
}
