//! Command execution
//!
//! Runs one build from the loaded configuration and writes its output.

use crate::application::CliConfig;
use crate::build::{BuildError, ProcessProvider, run_build};
use crate::primitives::ConfigError;
use std::fs;
use std::io::{self, Write};
use std::path::Path;
use thiserror::Error;
use tracing::info;

/// Anything that ends an invocation early
#[derive(Debug, Error)]
pub enum CommandError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Build(#[from] BuildError),
}

impl CommandError {
    /// Process exit code for this failure
    pub fn exit_code(&self) -> u8 {
        match self {
            CommandError::Config(_) => 2,
            CommandError::Build(e) => e.exit_code(),
        }
    }
}

/// Run the configured build and write the result
pub fn execute_command(
    config: &CliConfig,
    process: &dyn ProcessProvider,
) -> Result<(), CommandError> {
    let options = config.build.to_options()?;
    let rendered = run_build(&options, process)?;

    match &config.build.output_file {
        Some(path) => write_output_file(path, &rendered)?,
        None => write_stdout(&rendered)?,
    }

    Ok(())
}

fn write_output_file(path: &Path, rendered: &str) -> Result<(), BuildError> {
    fs::write(path, rendered).map_err(|e| BuildError::io(path, e))?;
    info!("Output written to {}", path.display());
    Ok(())
}

fn write_stdout(rendered: &str) -> Result<(), BuildError> {
    let mut stdout = io::stdout().lock();
    stdout
        .write_all(rendered.as_bytes())
        .and_then(|()| stdout.flush())
        .map_err(|e| BuildError::io("<stdout>", e))
}

#[cfg(test)]
mod tests {
    include!("commands.test.rs");
}
