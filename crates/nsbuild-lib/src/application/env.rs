//! Environment variable handling for application configuration
//!
//! Reads the common colour and CI conventions.

use crate::primitives::{ColorMode, ConfigError};
use serde::Deserialize;

/// Environment variables that affect application behavior
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EnvironmentConfig {
    /// NO_COLOR environment variable (any value = disable color)
    pub no_color: Option<String>,
    /// FORCE_COLOR environment variable (0/false = disable, 1/2/3/true = enable)
    pub force_color: Option<String>,
    /// CLICOLOR environment variable (0 = disable color)
    pub clicolor: Option<String>,
    /// CI environment variable (any value = CI mode)
    pub ci: Option<String>,
}

impl EnvironmentConfig {
    /// Load environment configuration from current environment
    pub fn load() -> Result<Self, ConfigError> {
        envy::from_env().map_err(|e| ConfigError::EnvironmentParsingFailed { source: e })
    }

    /// Refine an `auto` colour mode from the environment
    ///
    /// An explicit `always`/`never` is returned untouched. Otherwise a CI
    /// environment turns colour off, `CLICOLOR=0` and a non-empty `NO_COLOR`
    /// override that, and `FORCE_COLOR` has the final word.
    pub fn apply_color_config(&self, color: ColorMode) -> ColorMode {
        if color != ColorMode::Auto {
            return color;
        }

        let mut color = color;

        if self.ci.is_some() {
            color = ColorMode::Never;
        }

        if self.clicolor.as_deref() == Some("0") {
            color = ColorMode::Never;
        }

        if self.no_color.as_deref().is_some_and(|v| !v.is_empty()) {
            color = ColorMode::Never;
        }

        if let Some(force_color) = &self.force_color {
            match force_color.as_str() {
                "0" | "false" => color = ColorMode::Never,
                "1" | "2" | "3" | "true" => color = ColorMode::Always,
                _ => {} // Invalid values ignored
            }
        }

        color
    }
}

#[cfg(test)]
mod tests {
    include!("env.test.rs");
}
