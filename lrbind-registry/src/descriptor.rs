//! Parameter descriptor types.

use std::{borrow::Cow, fmt};

use lrbind_core::format_number;
use serde::Serialize;

use crate::{Result, ValidationError};

/// Functional grouping of a parameter (e.g. `develop`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct Category(Cow<'static, str>);

impl Category {
    /// Develop-module settings.
    pub const DEVELOP: Self = Self(Cow::Borrowed("develop"));

    pub fn new(name: impl Into<Cow<'static, str>>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One end of a parameter's value domain.
///
/// Integral and fractional values share one representation; the textual
/// form is always the canonical one from [`format_number`].
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize)]
#[serde(transparent)]
pub struct Bound(f64);

impl Bound {
    pub fn value(self) -> f64 {
        self.0
    }

    pub fn is_finite(self) -> bool {
        self.0.is_finite()
    }
}

impl From<f64> for Bound {
    fn from(value: f64) -> Self {
        Self(value)
    }
}

impl From<i32> for Bound {
    fn from(value: i32) -> Self {
        Self(f64::from(value))
    }
}

impl fmt::Display for Bound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_number(self.0))
    }
}

/// Which accessor pair a parameter is bound to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Binding {
    /// Read through the generic getter.
    Generic,
    /// Read through the versioned getter under an alternate setting name.
    Versioned { alias: String },
}

impl Binding {
    pub fn alias(&self) -> Option<&str> {
        match self {
            Self::Generic => None,
            Self::Versioned { alias } => Some(alias),
        }
    }

    pub fn is_versioned(&self) -> bool {
        matches!(self, Self::Versioned { .. })
    }
}

/// A single tunable value exposed by the host application's settings.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ParameterDescriptor {
    name: String,
    category: Category,
    #[serde(flatten)]
    binding: Binding,
    min: Bound,
    max: Bound,
}

impl ParameterDescriptor {
    /// Create a generically bound descriptor.
    pub fn new(
        name: impl Into<String>,
        category: Category,
        min: impl Into<Bound>,
        max: impl Into<Bound>,
    ) -> Self {
        Self {
            name: name.into(),
            category,
            binding: Binding::Generic,
            min: min.into(),
            max: max.into(),
        }
    }

    /// Create a descriptor in the `develop` category.
    pub fn develop(name: impl Into<String>, min: impl Into<Bound>, max: impl Into<Bound>) -> Self {
        Self::new(name, Category::DEVELOP, min, max)
    }

    /// Bind this descriptor to the versioned accessor under `alias`.
    pub fn with_alias(mut self, alias: impl Into<String>) -> Self {
        self.binding = Binding::Versioned {
            alias: alias.into(),
        };
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn category(&self) -> &Category {
        &self.category
    }

    pub fn binding(&self) -> &Binding {
        &self.binding
    }

    pub fn alias(&self) -> Option<&str> {
        self.binding.alias()
    }

    pub fn min(&self) -> Bound {
        self.min
    }

    pub fn max(&self) -> Bound {
        self.max
    }

    /// Check the invariants a single descriptor must hold on its own.
    ///
    /// `index` is the descriptor's position, used to identify it when the
    /// name itself is empty.
    pub fn validate(&self, index: usize) -> Result<()> {
        if self.name.is_empty() {
            return Err(ValidationError::EmptyName { index });
        }

        for (which, bound) in [("min", self.min), ("max", self.max)] {
            if !bound.is_finite() {
                return Err(ValidationError::NonFiniteBound {
                    name: self.name.clone(),
                    which,
                });
            }
        }

        if self.min > self.max {
            return Err(ValidationError::InvertedBounds {
                name: self.name.clone(),
                min: self.min,
                max: self.max,
            });
        }

        if let Binding::Versioned { alias } = &self.binding {
            if alias.is_empty() {
                return Err(ValidationError::EmptyAlias {
                    name: self.name.clone(),
                });
            }
        }

        Ok(())
    }
}
