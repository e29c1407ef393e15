//! Lint for parameters whose range holds a single value.

use lrbind_registry::Registry;

use super::Lint;
use crate::Diagnostic;

/// Lint that warns when `min == max`.
pub struct DegenerateRangeLint;

impl Lint for DegenerateRangeLint {
    fn name(&self) -> &'static str {
        "degenerate-range"
    }

    fn description(&self) -> &'static str {
        "Warn when a parameter's bounds are equal"
    }

    fn check(&self, registry: &Registry, diagnostics: &mut Vec<Diagnostic>) {
        for descriptor in registry {
            if descriptor.min() == descriptor.max() {
                diagnostics.push(
                    Diagnostic::warning(
                        self.name(),
                        format!(
                            "'{}' can only take the value {}",
                            descriptor.name(),
                            descriptor.min()
                        ),
                    )
                    .at(descriptor.name()),
                );
            }
        }
    }
}
