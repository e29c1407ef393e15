//! Lint for versioned aliases that don't extend the parameter name.

use lrbind_registry::Registry;

use super::Lint;
use crate::Diagnostic;

/// Lint that warns when a versioned alias does not start with the
/// parameter's own name (`Exposure` -> `Exposure2012`).
pub struct AliasPrefixLint;

impl Lint for AliasPrefixLint {
    fn name(&self) -> &'static str {
        "alias-prefix"
    }

    fn description(&self) -> &'static str {
        "Warn when a versioned alias is not derived from the parameter name"
    }

    fn check(&self, registry: &Registry, diagnostics: &mut Vec<Diagnostic>) {
        for descriptor in registry {
            let Some(alias) = descriptor.alias() else {
                continue;
            };

            if !alias.starts_with(descriptor.name()) {
                diagnostics.push(
                    Diagnostic::warning(
                        self.name(),
                        format!(
                            "alias '{}' does not start with '{}'",
                            alias,
                            descriptor.name()
                        ),
                    )
                    .at(descriptor.name()),
                );
            }
        }
    }
}
