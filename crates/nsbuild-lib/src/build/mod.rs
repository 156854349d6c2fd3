//! Build orchestration
//!
//! Discovers sources, collects the requested namespaces, checks the base
//! runtime, resolves through [`crate::deps`] and renders the ordered result
//! as a path list, a concatenated script or compiler output.

pub mod compiler;
pub mod error;
pub mod flags;
pub mod output;
pub mod scan;

pub use compiler::{CompilerOptions, LiveProcessProvider, ProcessOutput, ProcessProvider};
pub use error::BuildError;
pub use flags::{FeatureFlag, FeatureFlags};
pub use scan::{SourceSet, collect_sources, scan_tree};

use crate::deps::{
    DeclarationConvention, DependencyGraph, Namespace, ResolutionRequest, SourceDescriptor,
};
use crate::primitives::OutputMode;
use crate::progress_span;
use std::path::{Component, Path, PathBuf};
use tracing::{debug, info, warn};

/// Default base runtime file name
pub const DEFAULT_BASE_FILE: &str = "base.js";

/// Everything one build invocation needs
#[derive(Debug, Clone)]
pub struct BuildOptions {
    /// Explicit source files
    pub files: Vec<PathBuf>,
    /// Sources whose provides are requested
    pub inputs: Vec<PathBuf>,
    /// Requested namespaces, validated during the build
    pub namespaces: Vec<String>,
    /// Directories scanned recursively
    pub roots: Vec<PathBuf>,
    /// Extensions picked up while scanning roots
    pub extensions: Vec<String>,
    pub convention: DeclarationConvention,
    /// Base runtime file name, `None` disables the base runtime
    pub base_file: Option<String>,
    pub output_mode: OutputMode,
    pub compiler: CompilerOptions,
    /// Raw `key=value` feature flags
    pub feature_flags: Vec<String>,
}

impl Default for BuildOptions {
    fn default() -> Self {
        Self {
            files: Vec::new(),
            inputs: Vec::new(),
            namespaces: Vec::new(),
            roots: Vec::new(),
            extensions: vec!["js".to_string()],
            convention: DeclarationConvention::default(),
            base_file: Some(DEFAULT_BASE_FILE.to_string()),
            output_mode: OutputMode::List,
            compiler: CompilerOptions::default(),
            feature_flags: Vec::new(),
        }
    }
}

/// Run one build and return the rendered output
pub fn run_build(
    options: &BuildOptions,
    process: &dyn ProcessProvider,
) -> Result<String, BuildError> {
    let sources = {
        let _span = progress_span!("scan").entered();
        info!("Scanning paths...");
        let set = collect_sources(
            &options.roots,
            &options.files,
            &options.extensions,
            &options.convention,
        )?;
        info!("{} sources scanned.", set.len());
        set.into_sources()
    };

    let request = requested_namespaces(&sources, &options.inputs, &options.namespaces)?;
    debug!(
        "Requested namespaces: {}",
        request
            .namespaces()
            .iter()
            .map(Namespace::as_str)
            .collect::<Vec<_>>()
            .join(", ")
    );

    let base_path = match &options.base_file {
        Some(file_name) => Some(find_base_runtime(&sources, file_name)?),
        None => None,
    };

    info!("Building dependency tree..");
    let graph = DependencyGraph::build(sources)?;
    for (namespace, source) in graph.unresolved_requires() {
        warn!("{} requires {} but nothing provides it", source.label(), namespace);
    }

    let resolved = graph.resolve(&request)?;
    let ordered = assemble(&graph, base_path.as_deref(), resolved);
    info!("Dependency order computed: {} sources", ordered.len());

    let feature_flags = FeatureFlags::parse(&options.feature_flags)?;

    match options.output_mode {
        OutputMode::List => Ok(output::render_list(&ordered)),
        OutputMode::Script => output::render_script(&ordered, &feature_flags),
        OutputMode::Compiled => {
            compiler::compile(process, &options.compiler, &ordered, &feature_flags)
        }
    }
}

/// Locate the single base runtime among the discovered sources
///
/// A candidate has the configured file name and carries the marker line.
pub fn find_base_runtime(
    sources: &[SourceDescriptor],
    file_name: &str,
) -> Result<PathBuf, BuildError> {
    let candidates: Vec<&SourceDescriptor> = sources
        .iter()
        .filter(|source| source.is_base_runtime())
        .filter(|source| {
            source
                .origin()
                .and_then(Path::file_name)
                .is_some_and(|name| name == file_name)
        })
        .collect();

    let base = match candidates.as_slice() {
        [] => {
            return Err(BuildError::MissingBaseRuntime {
                file_name: file_name.to_string(),
            });
        }
        [base] => *base,
        _ => {
            return Err(BuildError::AmbiguousBaseRuntime {
                paths: candidates
                    .iter()
                    .filter_map(|source| source.origin().map(Path::to_path_buf))
                    .collect(),
            });
        }
    };

    let path = base.origin().map(Path::to_path_buf).unwrap_or_default();
    if !base.requires().is_empty() {
        return Err(BuildError::InvalidBaseRuntime { path });
    }

    debug!("Base runtime: {}", path.display());
    Ok(path)
}

/// Provides of every input, then each `--namespace`, deduplicated
pub fn requested_namespaces(
    sources: &[SourceDescriptor],
    inputs: &[PathBuf],
    namespaces: &[String],
) -> Result<ResolutionRequest, BuildError> {
    let mut requested = Vec::new();

    for input in inputs {
        let source = find_input(sources, input)?;
        requested.extend(source.provides().iter().cloned());
    }

    for value in namespaces {
        let namespace =
            Namespace::new(value.as_str()).map_err(|source| BuildError::InvalidNamespace { source })?;
        requested.push(namespace);
    }

    ResolutionRequest::new(requested).ok_or(BuildError::EmptyNamespaceSet)
}

fn find_input<'s>(
    sources: &'s [SourceDescriptor],
    input: &Path,
) -> Result<&'s SourceDescriptor, BuildError> {
    let wanted = normalized(input);
    sources
        .iter()
        .find(|source| source.origin().is_some_and(|origin| normalized(origin) == wanted))
        .ok_or_else(|| BuildError::InputNotFound {
            path: input.to_path_buf(),
        })
}

/// Absolute form with `.` and `..` folded lexically, symlinks untouched
fn normalized(path: &Path) -> PathBuf {
    let absolute = std::path::absolute(path).unwrap_or_else(|_| path.to_path_buf());
    let mut out = PathBuf::new();
    for component in absolute.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                out.pop();
            }
            other => out.push(other),
        }
    }
    out
}

/// Base runtime first, then the resolved sources without it
fn assemble<'g>(
    graph: &'g DependencyGraph,
    base_path: Option<&Path>,
    resolved: Vec<&'g SourceDescriptor>,
) -> Vec<&'g SourceDescriptor> {
    let Some(base_path) = base_path else {
        return resolved;
    };

    let mut ordered = Vec::with_capacity(resolved.len() + 1);
    if let Some(base) = graph
        .sources()
        .find(|source| source.origin() == Some(base_path))
    {
        ordered.push(base);
    }
    ordered.extend(
        resolved
            .into_iter()
            .filter(|source| source.origin() != Some(base_path)),
    );
    ordered
}

#[cfg(test)]
mod tests {
    include!("mod.test.rs");
}
