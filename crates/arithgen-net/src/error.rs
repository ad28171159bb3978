//! Error types for network simulation

use thiserror::Error;

/// Result type for network operations
pub type Result<T> = std::result::Result<T, NetError>;

/// Errors raised when simulating a network
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NetError {
    #[error("Too many inputs for exhaustive simulation: {inputs} (limit {limit})")]
    TooManyInputs { inputs: usize, limit: usize },

    #[error("Expected {expected} input patterns, got {actual}")]
    PatternCountMismatch { expected: usize, actual: usize },

    #[error("Input {input} has {actual} pattern words, expected {expected}")]
    PatternWidthMismatch {
        input: usize,
        expected: usize,
        actual: usize,
    },
}
