//! # nsbuild Library
//!
//! Load ordering for sources that declare provided and required namespaces.
//!
//! ## Core Modules
//!
//! - [`deps`] - Namespaces, source descriptors, the provider graph and its resolver
//! - [`build`] - Source discovery, base runtime checks and output rendering
//! - [`primitives`] - Foundation types and errors shared across layers
//! - [`logger`] - Structured logging with progress tracking
//! - [`application`] - CLI interface and configuration management
//! - [`testing`] - Fixtures and mocks for tests
//!
//! ## Quick Start
//!
//! ```
//! use nsbuild_lib::deps::{DependencyGraph, Namespace, ResolutionRequest, SourceDescriptor};
//!
//! let graph = DependencyGraph::build([
//!     SourceDescriptor::parse("goog.provide('app.main');\ngoog.require('app.util');\n"),
//!     SourceDescriptor::parse("goog.provide('app.util');\n"),
//! ])
//! .unwrap();
//!
//! let request = ResolutionRequest::new([Namespace::new("app.main").unwrap()]).unwrap();
//! let order = graph.resolve(&request).unwrap();
//! assert_eq!(order[0].provides()[0], "app.util");
//! ```

pub mod application;
pub mod build;
pub mod deps;
pub mod logger;
pub mod primitives;
pub mod testing;

// Re-export commonly used types for convenience
pub use application::{AppConfig, Cli, CliConfig, execute_command};
pub use build::{BuildError, BuildOptions, run_build};
pub use deps::{DependencyError, DependencyGraph, Namespace, ResolutionRequest, SourceDescriptor};
pub use logger::Logger;
pub use primitives::{ColorMode, ConfigError, LogFormat, LogLevel, LogOutput, LoggerError, OutputMode};

// Private imports for the main function
use application::load_config;
use build::LiveProcessProvider;
use std::process::ExitCode;

/// Binary entry point: load configuration, run the build, map failures to exit codes
pub fn main() -> ExitCode {
    let config = match load_config() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::from(2);
        }
    };

    if let Err(e) = Logger::init(config.app_config.to_logger_config()) {
        eprintln!("Error: {}", e);
        return ExitCode::FAILURE;
    }

    match execute_command(&config, &LiveProcessProvider::new()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{}", e);
            ExitCode::from(e.exit_code())
        }
    }
}
