use clap::Args;
use eyre::{Context, Result};
use lrbind_codegen::{Diagnostic, Severity, lints::LintSet};
use lrbind_registry::{Registry, develop};
use serde_json::json;

use super::UnwrapOrExit;

#[derive(Args)]
pub struct CheckCommand {
    /// Print the result as JSON
    #[arg(long)]
    pub json: bool,
}

impl CheckCommand {
    /// Run the check command
    pub fn run(&self) -> Result<()> {
        let registry = develop::registry().unwrap_or_exit();
        let lints = LintSet::new();
        for (name, description) in lints.lint_info() {
            tracing::debug!(lint = name, "{}", description);
        }
        let diagnostics = lints.run(&registry);
        let has_errors = diagnostics.iter().any(|d| d.severity.is_error());

        if self.json {
            Self::print_json(&registry, &diagnostics)?;
        } else {
            Self::print_report(&registry, &diagnostics);
        }

        if has_errors {
            std::process::exit(1);
        }

        Ok(())
    }

    fn print_json(registry: &Registry, diagnostics: &[Diagnostic]) -> Result<()> {
        let versioned = registry
            .iter()
            .filter(|d| d.binding().is_versioned())
            .count();

        let report = json!({
            "valid": !diagnostics.iter().any(|d| d.severity.is_error()),
            "parameters": registry.len(),
            "versioned": versioned,
            "categories": registry.categories(),
            "diagnostics": diagnostics,
        });

        let text = serde_json::to_string_pretty(&report).wrap_err("Failed to serialize report")?;
        println!("{}", text);
        Ok(())
    }

    fn print_report(registry: &Registry, diagnostics: &[Diagnostic]) {
        let mut has_errors = false;
        let mut has_warnings = false;
        for diag in diagnostics {
            match diag.severity {
                Severity::Error => {
                    has_errors = true;
                    eprintln!("error: {}", diag.message);
                }
                Severity::Warning => {
                    has_warnings = true;
                    eprintln!("warning: {}", diag.message);
                }
                Severity::Info => println!("info: {}", diag.message),
            }
            if let Some(parameter) = &diag.parameter {
                eprintln!("  --> {}", parameter);
            }
        }

        if has_errors {
            return;
        }

        if has_warnings {
            println!();
        }

        println!("✓ develop registry is valid\n");

        let count = registry.len();
        let versioned = registry
            .iter()
            .filter(|d| d.binding().is_versioned())
            .count();
        println!(
            "  {} parameter{} ({} generic, {} versioned)",
            count,
            if count == 1 { "" } else { "s" },
            count - versioned,
            versioned
        );

        let categories: Vec<&str> = registry.categories().iter().map(|c| c.as_str()).collect();
        println!("  categories: {}", categories.join(", "));
    }
}
