use thiserror::Error;

/// Custom error type for the neurograd framework.
#[derive(Error, Debug, PartialEq, Clone)] // PartialEq for easier testing
pub enum NeuroGradError {
    #[error("Shape mismatch: expected {expected}, got {actual} during operation {operation}")]
    ShapeMismatch {
        expected: usize,
        actual: usize,
        operation: String,
    },

    #[error("Index out of bounds: index {index} for length {len}")]
    IndexOutOfBounds { index: usize, len: usize },

    #[error("Configuration error: {0}")]
    ConfigurationError(String),

    #[error("Operation requires a non-empty dataset")]
    EmptyDataset,

    #[error("Unsupported operation: {0}")]
    UnsupportedOperation(String),
}

impl NeuroGradError {
    /// Shorthand used by the forward passes when an input width is wrong.
    pub(crate) fn shape_mismatch(expected: usize, actual: usize, operation: &str) -> Self {
        NeuroGradError::ShapeMismatch {
            expected,
            actual,
            operation: operation.to_string(),
        }
    }
}
