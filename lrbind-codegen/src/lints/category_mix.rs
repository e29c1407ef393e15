//! Lint for registries that span more than one category.

use lrbind_registry::Registry;

use super::Lint;
use crate::Diagnostic;

/// Lint that notes when several categories share the single setter.
pub struct CategoryMixLint;

impl Lint for CategoryMixLint {
    fn name(&self) -> &'static str {
        "category-mix"
    }

    fn description(&self) -> &'static str {
        "Note when parameters of several categories share one setter"
    }

    fn check(&self, registry: &Registry, diagnostics: &mut Vec<Diagnostic>) {
        let categories = registry.categories();
        if categories.len() < 2 {
            return;
        }

        let names: Vec<&str> = categories.iter().map(|c| c.as_str()).collect();
        diagnostics.push(Diagnostic::info(
            self.name(),
            format!(
                "categories {} are all bound to the same setter",
                names.join(", ")
            ),
        ));
    }
}

#[cfg(test)]
mod tests {
    use lrbind_registry::{Category, ParameterDescriptor};

    use super::*;

    #[test]
    fn test_single_category_is_silent() {
        let registry = Registry::new([
            ParameterDescriptor::develop("Tint", -150, 150),
            ParameterDescriptor::develop("Dehaze", -100, 100),
        ])
        .unwrap();

        let mut diagnostics = Vec::new();
        CategoryMixLint.check(&registry, &mut diagnostics);
        assert!(diagnostics.is_empty());
    }

    #[test]
    fn test_mixed_categories_noted() {
        let registry = Registry::new([
            ParameterDescriptor::develop("Tint", -150, 150),
            ParameterDescriptor::new("Distortion", Category::new("lens"), -100, 100),
        ])
        .unwrap();

        let mut diagnostics = Vec::new();
        CategoryMixLint.check(&registry, &mut diagnostics);

        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].severity, crate::Severity::Info);
        assert_eq!(
            diagnostics[0].message,
            "categories develop, lens are all bound to the same setter"
        );
    }
}
