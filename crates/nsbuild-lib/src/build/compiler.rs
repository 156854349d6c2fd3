//! External compiler invocation
//!
//! The compiler runs as `<java> -jar <jar> --js <source>... <flags>...` and
//! its standard output becomes the build output.

use super::BuildError;
use super::flags::FeatureFlags;
use crate::deps::SourceDescriptor;
use anyhow::{Context, Result};
use std::path::PathBuf;
use std::process::Command;
use tracing::{debug, info};

/// Process execution output
#[derive(Debug, Clone)]
pub struct ProcessOutput {
    pub stdout: String,
    pub stderr: String,
    pub success: bool,
    pub status: Option<i32>,
}

/// Provider trait for process execution
pub trait ProcessProvider {
    /// Execute a command with the given arguments and capture its output
    fn execute(&self, command: &str, args: &[String]) -> Result<ProcessOutput>;
}

/// Live implementation of ProcessProvider
#[derive(Debug, Default)]
pub struct LiveProcessProvider;

impl LiveProcessProvider {
    pub fn new() -> Self {
        Self
    }
}

impl ProcessProvider for LiveProcessProvider {
    fn execute(&self, command: &str, args: &[String]) -> Result<ProcessOutput> {
        let output = Command::new(command)
            .args(args)
            .output()
            .with_context(|| format!("Failed to execute command: {}", command))?;

        Ok(ProcessOutput {
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
            success: output.status.success(),
            status: output.status.code(),
        })
    }
}

/// How to reach the compiler
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompilerOptions {
    /// Java launcher
    pub java: String,
    /// Compiler jar, required for compiled output
    pub jar: Option<PathBuf>,
    /// Extra flags passed after the sources
    pub flags: Vec<String>,
}

impl Default for CompilerOptions {
    fn default() -> Self {
        Self {
            java: "java".to_string(),
            jar: None,
            flags: Vec::new(),
        }
    }
}

/// Arguments after the java launcher
pub fn compiler_args(
    jar: &std::path::Path,
    sources: &[&SourceDescriptor],
    extra_flags: &[String],
) -> Vec<String> {
    let mut args = vec!["-jar".to_string(), jar.display().to_string()];
    for source in sources {
        args.push("--js".to_string());
        args.push(source.label());
    }
    args.extend(extra_flags.iter().cloned());
    args
}

/// Compile `sources` in order and return the compiler's standard output
pub fn compile(
    process: &dyn ProcessProvider,
    options: &CompilerOptions,
    sources: &[&SourceDescriptor],
    feature_flags: &FeatureFlags,
) -> Result<String, BuildError> {
    let jar = options.jar.as_deref().ok_or(BuildError::MissingCompilerJar)?;

    let mut extra_flags = options.flags.clone();
    extra_flags.extend(feature_flags.define_args());

    let args = compiler_args(jar, sources, &extra_flags);
    info!(
        "Compiling with the following command: {} {}",
        options.java,
        args.join(" ")
    );

    let output = process
        .execute(&options.java, &args)
        .map_err(BuildError::Process)?;

    if !output.success {
        debug!("Compiler stderr: {}", output.stderr);
        return Err(BuildError::CompilationFailed {
            status: output.status,
            stderr: output.stderr,
        });
    }

    info!("Compilation succeeded.");
    Ok(output.stdout)
}

#[cfg(test)]
mod tests {
    include!("compiler.test.rs");
}
