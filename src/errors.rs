//! Error types shared across the crate.

use thiserror::Error;

/// Top-level error type for the crate.
///
/// Field calculations themselves are infallible; only writing reports can fail.
#[derive(Debug, Error)]
pub enum FieldError {
    /// Raised when a report line cannot be written to its sink.
    #[error("failed to write field report: {0}")]
    Output(#[from] std::io::Error),
}
