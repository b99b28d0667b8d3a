//! Error types for planum operations.

use thiserror::Error;

/// Errors that can occur when mutating or querying a point index.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PlanumError {
    /// A point argument has a NaN or infinite coordinate.
    #[error("point has a non-finite coordinate")]
    NonFinitePoint,

    /// A rectangle argument has a NaN or infinite bound.
    #[error("rectangle has a non-finite bound")]
    NonFiniteRect,

    /// A rectangle argument's minimum exceeds its maximum on some axis.
    #[error("rectangle minimum exceeds maximum")]
    InvertedRect,
}
