use crate::deps::{DependencyError, NamespaceError};
use std::path::PathBuf;
use thiserror::Error;

/// Failures of a build invocation, each mapped to a process exit code
#[derive(Debug, Error)]
pub enum BuildError {
    // Invalid orchestration inputs
    #[error(
        "No namespaces found. At least one namespace must be specified with the --namespace or --input flags"
    )]
    EmptyNamespaceSet,

    #[error("Invalid --namespace value: {source}")]
    InvalidNamespace {
        #[source]
        source: NamespaceError,
    },

    #[error("No source matched input {}", .path.display())]
    InputNotFound { path: PathBuf },

    #[error("No base runtime file named '{file_name}' found")]
    MissingBaseRuntime { file_name: String },

    #[error("More than one base runtime file found at these paths: {}", display_paths(.paths))]
    AmbiguousBaseRuntime { paths: Vec<PathBuf> },

    #[error("Base runtime file {} must not require namespaces", .path.display())]
    InvalidBaseRuntime { path: PathBuf },

    #[error("Invalid --flag '{flag}': expected <namespace>.<CONSTANT_NAME>=<value>")]
    InvalidFeatureFlag { flag: String },

    #[error("Duplicate --flag passed for {key}")]
    DuplicateFeatureFlag { key: String },

    #[error("--flag {key} was not found in script source")]
    FeatureFlagNotFound { key: String },

    #[error("--compiler-jar must be specified if --output-mode is \"compiled\"")]
    MissingCompilerJar,

    // Structural defects in the source tree
    #[error(transparent)]
    Dependency(#[from] DependencyError),

    // Environment failures
    #[error("Compilation failed{}", status_suffix(.status))]
    CompilationFailed { status: Option<i32>, stderr: String },

    #[error("Failed to run external process: {0:#}")]
    Process(anyhow::Error),

    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl BuildError {
    /// Process exit code for this failure
    ///
    /// `2` flags a bad invocation, `1` a defect in the tree or environment.
    pub fn exit_code(&self) -> u8 {
        match self {
            BuildError::EmptyNamespaceSet
            | BuildError::InvalidNamespace { .. }
            | BuildError::InvalidFeatureFlag { .. }
            | BuildError::DuplicateFeatureFlag { .. }
            | BuildError::FeatureFlagNotFound { .. }
            | BuildError::MissingCompilerJar => 2,
            BuildError::InputNotFound { .. }
            | BuildError::MissingBaseRuntime { .. }
            | BuildError::AmbiguousBaseRuntime { .. }
            | BuildError::InvalidBaseRuntime { .. }
            | BuildError::Dependency(_)
            | BuildError::CompilationFailed { .. }
            | BuildError::Process(_)
            | BuildError::Io { .. } => 1,
        }
    }

    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        BuildError::Io {
            path: path.into(),
            source,
        }
    }
}

fn display_paths(paths: &[PathBuf]) -> String {
    paths
        .iter()
        .map(|p| p.display().to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

fn status_suffix(status: &Option<i32>) -> String {
    match status {
        Some(code) => format!(" (exit status {})", code),
        None => String::new(),
    }
}
