use std::fmt;

/// Errors produced by the dataset transformations when inputs are invalid.
///
/// Every failure is a programming or input error and is fatal to the call;
/// the transforms are pure and never retry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransformError {
    /// A shape invariant was violated (e.g. mismatched feature widths).
    ShapeMismatch {
        /// Human-readable context for the mismatch (e.g. "choice width").
        what: &'static str,
        /// Observed value.
        got: usize,
        /// Expected value.
        expected: usize,
    },

    /// An object set or bucket width is too small to form comparisons.
    TooFewObjects {
        /// Observed object count.
        got: usize,
        /// Minimum admissible object count.
        min: usize,
    },

    /// Sub-sampling cannot form a single bucket because the instance is
    /// narrower than the requested bucket width.
    EmptyBucket {
        /// Total number of candidate objects per instance.
        n_total_objects: usize,
        /// Requested bucket width.
        n_objects: usize,
    },

    /// A chosen-object index points outside its instance's object set.
    ChoiceIndexOutOfBounds {
        /// Instance whose chosen index is invalid.
        instance: usize,
        /// The offending index.
        index: usize,
        /// Number of objects in the instance.
        n_objects: usize,
    },
}

impl fmt::Display for TransformError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransformError::ShapeMismatch { what, got, expected } => {
                write!(f, "shape mismatch for {what}: got {got}, expected {expected}")
            }
            TransformError::TooFewObjects { got, min } => {
                write!(f, "too few objects: got {got}, need at least {min}")
            }
            TransformError::EmptyBucket { n_total_objects, n_objects } => {
                write!(
                    f,
                    "cannot bucket {n_total_objects} objects into width {n_objects}: \
                     bucket size would be zero"
                )
            }
            TransformError::ChoiceIndexOutOfBounds { instance, index, n_objects } => {
                write!(
                    f,
                    "chosen index {index} of instance {instance} is out of bounds \
                     for {n_objects} objects"
                )
            }
        }
    }
}

impl std::error::Error for TransformError {}
