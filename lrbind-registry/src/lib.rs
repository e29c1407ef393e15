//! Parameter registry for the lrbind generator.
//!
//! A [`Registry`] is an ordered, validated sequence of
//! [`ParameterDescriptor`]s. Construction checks every registry invariant up
//! front so that emission never has to.
//!
//! ```
//! use lrbind_registry::{ParameterDescriptor, Registry};
//!
//! let registry = Registry::new([
//!     ParameterDescriptor::develop("Exposure", -5, 5).with_alias("Exposure2012"),
//!     ParameterDescriptor::develop("Texture", -100, 100),
//! ])
//! .unwrap();
//!
//! assert_eq!(registry.len(), 2);
//! ```

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod descriptor;
pub mod develop;
mod error;
mod registry;

pub use descriptor::{Binding, Bound, Category, ParameterDescriptor};
pub use error::{Result, ValidationError};
pub use registry::Registry;
