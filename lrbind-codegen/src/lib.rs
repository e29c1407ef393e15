//! Binding block emission for the lrbind generator.
//!
//! Given a validated [`Registry`](lrbind_registry::Registry), a
//! [`BindingEmitter`] writes one text block per parameter, in registry
//! order, pairing the parameter's bounds with the shared setter and the
//! getter its binding selects.
//!
//! # Module Organization
//!
//! - [`builder`] - Indented text building (CodeBuilder, Indent)
//! - [`lints`] - Non-fatal registry checks (Lint, LintSet)

mod accessors;
pub mod builder;
mod diagnostic;
mod emitter;
mod error;
mod file;
pub mod lints;

pub use accessors::Accessors;
pub use diagnostic::{Diagnostic, Severity};
pub use emitter::{BindingEmitter, EmitOptions, EmitStats};
pub use error::{EmitError, Result};
pub use file::BindingsFile;
