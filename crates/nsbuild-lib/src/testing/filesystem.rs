//! Temporary source trees for build tests

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Base runtime text recognised under the default declaration convention
pub const BASE_RUNTIME_TEXT: &str = "var goog = goog || {};\n";

/// Temporary directory holding a source tree (cleaned up on drop)
pub struct SourceTreeFixture {
    pub temp_dir: TempDir,
}

impl SourceTreeFixture {
    pub fn new() -> io::Result<Self> {
        let temp_dir = tempfile::tempdir()?;
        Ok(Self { temp_dir })
    }

    /// Fixture that already contains `base.js`
    pub fn with_base() -> io::Result<Self> {
        let fixture = Self::new()?;
        fixture.write_file("base.js", BASE_RUNTIME_TEXT)?;
        Ok(fixture)
    }

    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Absolute path of `relative` inside the tree
    pub fn join(&self, relative: &str) -> PathBuf {
        self.path().join(relative)
    }

    /// Write `content` to `relative`, creating parent directories
    pub fn write_file(&self, relative: &str, content: &str) -> io::Result<PathBuf> {
        let full_path = self.join(relative);
        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&full_path, content)?;
        Ok(full_path)
    }

    /// Write a module providing `provides` and requiring `requires`
    pub fn write_module(
        &self,
        relative: &str,
        provides: &[&str],
        requires: &[&str],
    ) -> io::Result<PathBuf> {
        let mut content = String::new();
        for namespace in provides {
            content.push_str(&format!("goog.provide('{}');\n", namespace));
        }
        for namespace in requires {
            content.push_str(&format!("goog.require('{}');\n", namespace));
        }
        self.write_file(relative, &content)
    }

    pub fn read_file(&self, relative: &str) -> io::Result<String> {
        fs::read_to_string(self.join(relative))
    }

    pub fn file_exists(&self, relative: &str) -> bool {
        self.join(relative).exists()
    }
}

#[cfg(test)]
mod tests {
    include!("filesystem.test.rs");
}
