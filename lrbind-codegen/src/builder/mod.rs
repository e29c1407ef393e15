//! Text building blocks.
//!
//! - [`CodeBuilder`] - Fluent API for building indented lines
//! - [`Indent`] - Indentation configuration

mod code_builder;
mod indent;

pub use code_builder::CodeBuilder;
pub use indent::Indent;
