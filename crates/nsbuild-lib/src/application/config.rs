//! Application configuration management
//!
//! Ambient options shared by every invocation. Precedence:
//! defaults -> .env -> env vars -> CLI args.

use crate::primitives::*;
use clap::Parser;

/// Default configuration values
pub mod defaults {
    pub const LOG_LEVEL: &str = "info";
    pub const LOG_FORMAT: &str = "text";
    pub const LOG_OUTPUT: &str = "stderr";
    pub const COLOR: &str = "auto";
}

/// Default value functions for configuration fields
mod default_fns {
    use super::*;

    pub fn log_level() -> LogLevel {
        LogLevel::Info
    }

    pub fn log_format() -> LogFormat {
        LogFormat::Text
    }

    pub fn log_output() -> LogOutput {
        LogOutput::Stderr
    }

    pub fn color() -> ColorMode {
        ColorMode::Auto
    }
}

/// Application configuration structure
#[derive(Debug, Clone, Parser)]
pub struct AppConfig {
    /// Log level (error, warn, info, debug, trace)
    #[arg(long, env = "NSBUILD_LOG_LEVEL", default_value = defaults::LOG_LEVEL)]
    pub log_level: LogLevel,

    /// Raise the log level once per occurrence, starting from the configured level
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Log format (text, json, yaml)
    #[arg(long, env = "NSBUILD_LOG_FORMAT", default_value = defaults::LOG_FORMAT)]
    pub log_format: LogFormat,

    /// Log output stream (stderr, stdout)
    #[arg(long, env = "NSBUILD_LOG_OUTPUT", default_value = defaults::LOG_OUTPUT)]
    pub log_output: LogOutput,

    /// Color output control (auto, always, never)
    #[arg(long, env = "NSBUILD_COLOR", default_value = defaults::COLOR)]
    pub color: ColorMode,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            log_level: default_fns::log_level(),
            verbose: 0,
            log_format: default_fns::log_format(),
            log_output: default_fns::log_output(),
            color: default_fns::color(),
        }
    }
}

impl AppConfig {
    /// Level after applying `-v` occurrences
    pub fn effective_log_level(&self) -> LogLevel {
        LogLevel::from_verbosity((self.log_level as u8).saturating_add(self.verbose))
    }

    /// Create LoggerConfig from AppConfig
    pub fn to_logger_config(&self) -> LoggerConfig {
        LoggerConfig {
            level: self.effective_log_level(),
            format: self.log_format,
            output: self.log_output,
            color: self.color,
        }
    }
}

#[cfg(test)]
mod tests {
    include!("config.test.rs");
}
