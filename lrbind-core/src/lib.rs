//! Core utilities and types for the lrbind generator.
//!
//! This crate provides leaf types shared by the registry, the emitter and
//! the CLI: canonical number formatting and generated-file writing.

mod file;
mod number;

// File operations
pub use file::{GeneratedFile, WriteResult};
// Number utilities
pub use number::format_number;
