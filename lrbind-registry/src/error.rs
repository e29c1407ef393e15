use miette::Diagnostic;
use thiserror::Error;

use crate::Bound;

/// Result type for registry operations
pub type Result<T> = std::result::Result<T, ValidationError>;

/// A descriptor that violates a registry invariant.
///
/// Every variant identifies the offending descriptor, by name where it has
/// one and by position otherwise.
#[derive(Debug, Clone, PartialEq, Error, Diagnostic)]
pub enum ValidationError {
    #[error("parameter #{index} has an empty name")]
    #[diagnostic(
        code(lrbind::empty_name),
        help("every parameter needs a non-empty name")
    )]
    EmptyName { index: usize },

    #[error("duplicate parameter '{name}'")]
    #[diagnostic(
        code(lrbind::duplicate_name),
        help("'{name}' is first declared at #{first} and again at #{second}; remove one of them")
    )]
    DuplicateName {
        name: String,
        first: usize,
        second: usize,
    },

    #[error("parameter '{name}' has min {min} greater than max {max}")]
    #[diagnostic(
        code(lrbind::inverted_bounds),
        help("swap the bounds so that min <= max")
    )]
    InvertedBounds { name: String, min: Bound, max: Bound },

    #[error("parameter '{name}' has a non-finite {which} bound")]
    #[diagnostic(
        code(lrbind::non_finite_bound),
        help("bounds must be finite numbers")
    )]
    NonFiniteBound { name: String, which: &'static str },

    #[error("parameter '{name}' has an empty versioned alias")]
    #[diagnostic(
        code(lrbind::empty_alias),
        help("give '{name}' an alias such as '{name}2012', or make it a generic binding")
    )]
    EmptyAlias { name: String },
}

impl ValidationError {
    /// The name of the offending descriptor, if it has one.
    pub fn name(&self) -> Option<&str> {
        match self {
            Self::EmptyName { .. } => None,
            Self::DuplicateName { name, .. }
            | Self::InvertedBounds { name, .. }
            | Self::NonFiniteBound { name, .. }
            | Self::EmptyAlias { name } => Some(name),
        }
    }
}
