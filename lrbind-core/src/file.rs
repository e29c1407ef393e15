use std::path::{Path, PathBuf};

use eyre::Result;

/// Trait for types that represent a generated file
pub trait GeneratedFile {
    /// Get the file path relative to the base directory
    fn path(&self, base: &Path) -> PathBuf;

    /// Render the file content
    fn render(&self) -> String;

    /// Write the file to disk.
    ///
    /// Parent directories are created as needed. A file whose content
    /// already matches the rendered output is left untouched.
    fn write(&self, base: &Path) -> Result<WriteResult> {
        let path = self.path(base);
        let content = self.render();

        if let Ok(existing) = std::fs::read_to_string(&path) {
            if existing == content {
                return Ok(WriteResult::Unchanged);
            }
        }

        write_file(&path, &content)?;
        Ok(WriteResult::Written {
            bytes: content.len(),
        })
    }
}

fn write_file(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, content)?;
    Ok(())
}

/// Result of a write operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteResult {
    /// File was written
    Written { bytes: usize },
    /// File already held the same content
    Unchanged,
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    struct Fixed(&'static str);

    impl GeneratedFile for Fixed {
        fn path(&self, base: &Path) -> PathBuf {
            base.join("out").join("bindings.lua")
        }

        fn render(&self) -> String {
            self.0.to_string()
        }
    }

    #[test]
    fn test_write_file_creates_parent_dirs() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("a").join("b").join("c").join("test.txt");

        write_file(&path, "nested").unwrap();

        assert!(path.exists());
        assert_eq!(fs::read_to_string(&path).unwrap(), "nested");
    }

    #[test]
    fn test_generated_file_written() {
        let temp = TempDir::new().unwrap();

        let result = Fixed("hello").write(temp.path()).unwrap();

        assert_eq!(result, WriteResult::Written { bytes: 5 });
        let path = temp.path().join("out").join("bindings.lua");
        assert_eq!(fs::read_to_string(path).unwrap(), "hello");
    }

    #[test]
    fn test_generated_file_unchanged() {
        let temp = TempDir::new().unwrap();

        Fixed("same").write(temp.path()).unwrap();
        let result = Fixed("same").write(temp.path()).unwrap();

        assert_eq!(result, WriteResult::Unchanged);
    }

    #[test]
    fn test_generated_file_overwrites_different_content() {
        let temp = TempDir::new().unwrap();

        Fixed("first").write(temp.path()).unwrap();
        let result = Fixed("second").write(temp.path()).unwrap();

        assert_eq!(result, WriteResult::Written { bytes: 6 });
        let path = temp.path().join("out").join("bindings.lua");
        assert_eq!(fs::read_to_string(path).unwrap(), "second");
    }

    #[test]
    fn test_write_into_file_path_fails() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("out"), "not a directory").unwrap();

        assert!(Fixed("x").write(temp.path()).is_err());
    }
}
