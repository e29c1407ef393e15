use clap::Args;
use eyre::{Context, Result};
use lrbind_registry::{Binding, develop};

use super::UnwrapOrExit;

#[derive(Args)]
pub struct ListCommand {
    /// Print the registry as JSON
    #[arg(long)]
    pub json: bool,
}

impl ListCommand {
    pub fn run(&self) -> Result<()> {
        let registry = develop::registry().unwrap_or_exit();

        if self.json {
            let text =
                serde_json::to_string_pretty(&registry).wrap_err("Failed to serialize registry")?;
            println!("{}", text);
            return Ok(());
        }

        if registry.is_empty() {
            println!("No parameters defined");
            return Ok(());
        }

        let width = registry.iter().map(|d| d.name().len()).max().unwrap_or(0);

        println!("Parameters ({}):", registry.len());
        for descriptor in &registry {
            let binding = match descriptor.binding() {
                Binding::Generic => String::new(),
                Binding::Versioned { alias } => format!(" -> {}", alias),
            };
            println!(
                "  {:<width$}  {}  [{}, {}]{}",
                descriptor.name(),
                descriptor.category(),
                descriptor.min(),
                descriptor.max(),
                binding,
                width = width
            );
        }

        Ok(())
    }
}
