//! Configuration loading
//!
//! Layers the configuration sources in precedence order before the CLI is
//! parsed, so `NSBUILD_*` values from `.env` files reach clap's `env`
//! fallbacks.

use crate::primitives::ConfigError;
use std::path::Path;

use super::{cli::CliConfig, env::EnvironmentConfig};

/// Env files consulted, first one wins for any given variable
pub const ENV_FILES: [&str; 2] = [".env.local", ".env"];

/// Load config: defaults -> .env -> env vars -> CLI
pub fn load_config() -> Result<CliConfig, ConfigError> {
    load_env_files(Path::new("."))?;

    let mut config = CliConfig::load()?;

    let env_config = EnvironmentConfig::load()?;
    config.app_config.color = env_config.apply_color_config(config.app_config.color);

    Ok(config)
}

/// Load every env file present in `dir`
///
/// Missing files are skipped; unreadable or malformed ones are errors.
/// Variables already set in the process environment are kept.
pub fn load_env_files(dir: &Path) -> Result<Vec<String>, ConfigError> {
    let mut loaded = Vec::new();

    for env_file in ENV_FILES {
        match dotenvy::from_path(dir.join(env_file)) {
            Ok(()) => loaded.push(env_file.to_string()),
            Err(e) if e.not_found() => continue,
            Err(e) => {
                return Err(ConfigError::EnvFileError {
                    file: env_file.to_string(),
                    source: e,
                });
            }
        }
    }

    Ok(loaded)
}

#[cfg(test)]
mod tests {
    include!("loader.test.rs");
}
