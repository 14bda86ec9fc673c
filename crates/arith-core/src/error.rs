//! Error types for expression evaluation.

use thiserror::Error;

/// Result type for evaluation.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while evaluating an expression.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// Adding the two operands of a sum left the `i32` range
    #[error("integer overflow evaluating {left} + {right}")]
    Overflow { left: i32, right: i32 },

    /// The expression is nested deeper than the evaluator allows
    #[error("expression nesting exceeds the limit of {limit}")]
    DepthLimitExceeded { limit: usize },
}
