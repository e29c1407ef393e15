//! The generated bindings file.

use std::path::{Path, PathBuf};

use lrbind_core::GeneratedFile;
use lrbind_registry::Registry;

use crate::{BindingEmitter, EmitStats, Result};

/// Rendered bindings destined for a file on disk.
pub struct BindingsFile {
    path: PathBuf,
    content: String,
    stats: EmitStats,
}

impl BindingsFile {
    /// Render `registry` with `emitter` for writing to `path`.
    ///
    /// Rendering happens up front, so a validation failure surfaces before
    /// the target file is touched.
    pub fn new(
        emitter: &BindingEmitter,
        registry: &Registry,
        path: impl Into<PathBuf>,
    ) -> Result<Self> {
        let mut buffer = Vec::new();
        let stats = emitter.emit(registry, &mut buffer)?;
        Ok(Self {
            path: path.into(),
            content: String::from_utf8_lossy(&buffer).into_owned(),
            stats,
        })
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn stats(&self) -> EmitStats {
        self.stats
    }
}

impl GeneratedFile for BindingsFile {
    fn path(&self, base: &Path) -> PathBuf {
        base.join(&self.path)
    }

    fn render(&self) -> String {
        self.content.clone()
    }
}
