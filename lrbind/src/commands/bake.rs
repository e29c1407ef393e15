use std::{
    io,
    path::{Path, PathBuf},
};

use clap::Args;
use eyre::{Context, Result};
use lrbind_codegen::{BindingEmitter, BindingsFile, EmitOptions, EmitStats, builder::Indent};
use lrbind_core::{GeneratedFile, WriteResult};
use lrbind_registry::{Registry, develop};

use super::UnwrapOrExit;

#[derive(Args)]
pub struct BakeCommand {
    /// Write bindings to this file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Wrap the bindings in a table assigned to NAME
    #[arg(long, value_name = "NAME")]
    pub wrap: Option<String>,

    /// Spaces per indentation level
    #[arg(long, default_value_t = 2)]
    pub indent: u8,

    /// Indent with tabs instead of spaces
    #[arg(long, conflicts_with = "indent")]
    pub tabs: bool,

    /// Show what would be generated without writing anything
    #[arg(long)]
    pub dry_run: bool,
}

impl BakeCommand {
    /// Run the bake command
    pub fn run(&self) -> Result<()> {
        let registry = develop::registry().unwrap_or_exit();
        let emitter = BindingEmitter::default().with_options(self.options());

        if self.dry_run {
            return self.run_preview(&emitter, &registry);
        }

        match &self.output {
            Some(path) => self.run_to_file(&emitter, &registry, path),
            None => {
                let mut stdout = io::stdout().lock();
                emitter
                    .emit(&registry, &mut stdout)
                    .wrap_err("Failed to write bindings to stdout")?;
                Ok(())
            }
        }
    }

    fn options(&self) -> EmitOptions {
        let indent = if self.tabs {
            Indent::Tab
        } else {
            Indent::Spaces(self.indent)
        };

        let options = EmitOptions::new().with_indent(indent);
        match &self.wrap {
            Some(name) => options.with_wrap(name),
            None => options,
        }
    }

    fn run_to_file(
        &self,
        emitter: &BindingEmitter,
        registry: &Registry,
        path: &Path,
    ) -> Result<()> {
        let file = BindingsFile::new(emitter, registry, path)
            .wrap_err("Failed to generate bindings")?;

        tracing::info!(path = %path.display(), bytes = file.stats().bytes, "writing bindings");
        let result = file
            .write(Path::new(""))
            .wrap_err_with(|| format!("Failed to write '{}'", path.display()))?;

        match result {
            WriteResult::Written { bytes } => {
                println!("Generated: {} ({} bytes)", path.display(), bytes);
                Self::print_stats(file.stats());
            }
            WriteResult::Unchanged => println!("{} is up to date", path.display()),
        }

        Ok(())
    }

    fn run_preview(&self, emitter: &BindingEmitter, registry: &Registry) -> Result<()> {
        let target = self
            .output
            .as_ref()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "stdout".to_string());

        let file = BindingsFile::new(emitter, registry, target.clone())
            .wrap_err("Failed to generate bindings")?;

        println!("── {} ──", target);
        print!("{}", file.content());
        println!("── Summary ──");
        Self::print_stats(file.stats());
        println!("{} bytes would be written", file.stats().bytes);

        Ok(())
    }

    fn print_stats(stats: EmitStats) {
        println!(
            "{} parameter{} ({} generic, {} versioned)",
            stats.blocks,
            if stats.blocks == 1 { "" } else { "s" },
            stats.generic,
            stats.versioned
        );
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    fn bake_to(path: PathBuf) -> BakeCommand {
        BakeCommand {
            output: Some(path),
            wrap: None,
            indent: 2,
            tabs: false,
            dry_run: false,
        }
    }

    #[test]
    fn test_bake_writes_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("generated").join("DevelopParams.lua");

        bake_to(path.clone()).run().unwrap();

        let registry = develop::registry().unwrap();
        let expected = BindingEmitter::default().render(&registry).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), expected);
    }

    #[test]
    fn test_bake_is_idempotent() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("DevelopParams.lua");

        bake_to(path.clone()).run().unwrap();
        let first = fs::read_to_string(&path).unwrap();
        bake_to(path.clone()).run().unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), first);
    }

    #[test]
    fn test_dry_run_writes_nothing() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("DevelopParams.lua");

        let mut cmd = bake_to(path.clone());
        cmd.dry_run = true;
        cmd.run().unwrap();

        assert!(!path.exists());
    }

    #[test]
    fn test_wrap_and_tabs_options() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("DevelopParams.lua");

        let mut cmd = bake_to(path.clone());
        cmd.wrap = Some("DevelopParams".to_string());
        cmd.tabs = true;
        cmd.run().unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert!(content.starts_with("DevelopParams = {\n\tTemperature = {\n\t\tmin = 2000,\n"));
        assert!(content.ends_with("\t},\n}\n"));
    }
}
