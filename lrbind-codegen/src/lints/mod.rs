//! Lints over a validated registry.

mod alias_prefix;
mod category_mix;
mod degenerate_range;

pub use alias_prefix::AliasPrefixLint;
pub use category_mix::CategoryMixLint;
pub use degenerate_range::DegenerateRangeLint;
use lrbind_registry::Registry;

use crate::Diagnostic;

/// A lint that checks the registry for issues.
pub trait Lint: Send + Sync {
    /// The name of this lint.
    fn name(&self) -> &'static str;

    /// A human-readable description of what this lint checks.
    fn description(&self) -> &'static str;

    /// Check the registry and add any diagnostics.
    fn check(&self, registry: &Registry, diagnostics: &mut Vec<Diagnostic>);
}

/// An ordered set of lints run together.
pub struct LintSet {
    lints: Vec<Box<dyn Lint>>,
}

impl LintSet {
    /// Create a lint set with the default lints.
    pub fn new() -> Self {
        Self {
            lints: vec![
                Box::new(DegenerateRangeLint),
                Box::new(AliasPrefixLint),
                Box::new(CategoryMixLint),
            ],
        }
    }

    /// Create a lint set with no lints.
    pub fn empty() -> Self {
        Self { lints: Vec::new() }
    }

    /// Add a custom lint.
    pub fn with_lint(mut self, lint: impl Lint + 'static) -> Self {
        self.lints.push(Box::new(lint));
        self
    }

    /// Get the names and descriptions of all lints that will be run.
    pub fn lint_info(&self) -> Vec<(&'static str, &'static str)> {
        self.lints
            .iter()
            .map(|l| (l.name(), l.description()))
            .collect()
    }

    /// Run every lint and collect their diagnostics.
    pub fn run(&self, registry: &Registry) -> Vec<Diagnostic> {
        let mut diagnostics = Vec::new();
        for lint in &self.lints {
            lint.check(registry, &mut diagnostics);
        }
        tracing::debug!(
            lints = self.lints.len(),
            diagnostics = diagnostics.len(),
            "lints complete"
        );
        diagnostics
    }
}

impl Default for LintSet {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use lrbind_registry::{ParameterDescriptor, develop};

    use super::*;

    struct AlwaysError;

    impl Lint for AlwaysError {
        fn name(&self) -> &'static str {
            "always-error"
        }

        fn description(&self) -> &'static str {
            "Fails every registry"
        }

        fn check(&self, _registry: &Registry, diagnostics: &mut Vec<Diagnostic>) {
            diagnostics.push(Diagnostic::error(self.name(), "always fails"));
        }
    }

    #[test]
    fn test_default_lints() {
        let names: Vec<&str> = LintSet::new().lint_info().into_iter().map(|(n, _)| n).collect();
        assert_eq!(names, ["degenerate-range", "alias-prefix", "category-mix"]);
    }

    #[test]
    fn test_develop_table_is_clean() {
        let registry = develop::registry().unwrap();
        assert!(LintSet::new().run(&registry).is_empty());
    }

    #[test]
    fn test_custom_lint() {
        let registry = Registry::new([ParameterDescriptor::develop("Tint", -150, 150)]).unwrap();
        let diagnostics = LintSet::empty().with_lint(AlwaysError).run(&registry);

        assert_eq!(diagnostics.len(), 1);
        assert!(diagnostics[0].severity.is_error());
    }
}
