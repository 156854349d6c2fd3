//! Source discovery
//!
//! Roots are walked recursively with directory entries sorted by file name,
//! so the same tree always yields the same source order. Hidden files and
//! directories are skipped.

use super::BuildError;
use crate::deps::{DeclarationConvention, SourceDescriptor};
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, trace};

/// Every file below `root` with one of `extensions`, in sorted walk order
pub fn scan_tree(root: &Path, extensions: &[String]) -> Result<Vec<PathBuf>, BuildError> {
    debug!("Scanning tree: {}", root.display());
    let mut found = Vec::new();
    walk(root, extensions, &mut found)?;
    Ok(found)
}

fn walk(dir: &Path, extensions: &[String], found: &mut Vec<PathBuf>) -> Result<(), BuildError> {
    let mut entries = Vec::new();
    for entry in fs::read_dir(dir).map_err(|e| BuildError::io(dir, e))? {
        let entry = entry.map_err(|e| BuildError::io(dir, e))?;
        entries.push(entry);
    }
    entries.sort_by_key(|entry| entry.file_name());

    for entry in entries {
        let path = entry.path();
        if is_hidden(&path) {
            trace!("Skipping hidden entry: {}", path.display());
            continue;
        }

        let file_type = entry.file_type().map_err(|e| BuildError::io(&path, e))?;
        if file_type.is_dir() || (file_type.is_symlink() && path.is_dir()) {
            walk(&path, extensions, found)?;
        } else if has_extension(&path, extensions) {
            found.push(path);
        }
    }

    Ok(())
}

fn is_hidden(path: &Path) -> bool {
    path.file_name()
        .and_then(|name| name.to_str())
        .is_some_and(|name| name.starts_with('.'))
}

fn has_extension(path: &Path, extensions: &[String]) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| extensions.iter().any(|wanted| wanted == ext))
}

/// Read and parse one source, remembering the path it came from
pub fn load_source(
    path: &Path,
    convention: &DeclarationConvention,
) -> Result<SourceDescriptor, BuildError> {
    let text = fs::read_to_string(path).map_err(|e| BuildError::io(path, e))?;
    Ok(SourceDescriptor::parse_with(text, convention).with_origin(path))
}

/// Ordered sources deduplicated by canonical path
#[derive(Debug, Default)]
pub struct SourceSet {
    seen: HashSet<PathBuf>,
    sources: Vec<SourceDescriptor>,
}

impl SourceSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load `path` unless the same file was already added
    pub fn add_path(
        &mut self,
        path: &Path,
        convention: &DeclarationConvention,
    ) -> Result<bool, BuildError> {
        let identity = fs::canonicalize(path).map_err(|e| BuildError::io(path, e))?;
        if self.seen.contains(&identity) {
            trace!("Already discovered: {}", path.display());
            return Ok(false);
        }

        let source = load_source(path, convention)?;
        self.seen.insert(identity);
        self.sources.push(source);
        Ok(true)
    }

    pub fn len(&self) -> usize {
        self.sources.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sources.is_empty()
    }

    pub fn sources(&self) -> &[SourceDescriptor] {
        &self.sources
    }

    pub fn into_sources(self) -> Vec<SourceDescriptor> {
        self.sources
    }
}

/// Scan every root, then add explicit files, in that order
pub fn collect_sources(
    roots: &[PathBuf],
    files: &[PathBuf],
    extensions: &[String],
    convention: &DeclarationConvention,
) -> Result<SourceSet, BuildError> {
    let mut set = SourceSet::new();

    for root in roots {
        for path in scan_tree(root, extensions)? {
            set.add_path(&path, convention)?;
        }
    }

    for path in files {
        set.add_path(path, convention)?;
    }

    Ok(set)
}

#[cfg(test)]
mod tests {
    include!("scan.test.rs");
}
