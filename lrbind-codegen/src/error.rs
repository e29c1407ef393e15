use lrbind_registry::ValidationError;
use thiserror::Error;

/// Result type for emission
pub type Result<T> = std::result::Result<T, EmitError>;

/// Failure of an emission run.
///
/// Either the input was structurally invalid, in which case nothing was
/// written, or the output sink rejected the text.
#[derive(Debug, Error)]
pub enum EmitError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("failed to write bindings to the output sink")]
    Sink(#[from] std::io::Error),
}
