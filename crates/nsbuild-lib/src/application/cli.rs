use crate::build::{BuildOptions, CompilerOptions, DEFAULT_BASE_FILE};
use crate::deps::DeclarationConvention;
use crate::primitives::{ConfigError, OutputMode};
use clap::{Args, Parser};
use std::path::PathBuf;

use super::config::AppConfig;

/// nsbuild CLI - namespace dependency ordering and bundling
#[derive(Debug, Clone, Parser)]
#[command(name = "nsbuild")]
#[command(about = "Order sources by their provided and required namespaces")]
#[command(version)]
pub struct Cli {
    /// Global configuration options
    #[command(flatten)]
    pub config: AppConfig,

    /// Build options
    #[command(flatten)]
    pub build: BuildArgs,
}

/// Configuration loaded from CLI
#[derive(Debug, Clone)]
pub struct CliConfig {
    pub app_config: AppConfig,
    pub build: BuildArgs,
}

impl CliConfig {
    /// Load configuration from command line arguments
    pub fn load() -> Result<Self, ConfigError> {
        Ok(Self::from_cli(Cli::parse()))
    }

    pub fn from_cli(cli: Cli) -> Self {
        Self {
            app_config: cli.config,
            build: cli.build,
        }
    }
}

/// What to build and how to render it
#[derive(Debug, Clone, Args)]
pub struct BuildArgs {
    /// Source files added to the scanned set
    #[arg(value_name = "FILES")]
    pub files: Vec<PathBuf>,

    /// Source whose provided namespaces are requested
    #[arg(short, long = "input", value_name = "PATH")]
    pub inputs: Vec<PathBuf>,

    /// Namespace to request
    #[arg(short, long = "namespace", value_name = "NS")]
    pub namespaces: Vec<String>,

    /// Directory scanned recursively for sources
    #[arg(long = "root", value_name = "DIR")]
    pub roots: Vec<PathBuf>,

    /// What to write once the order is known
    #[arg(short, long, value_enum, default_value = "list")]
    pub output_mode: OutputMode,

    /// Compiler jar, required for compiled output
    #[arg(short, long, env = "NSBUILD_COMPILER_JAR")]
    pub compiler_jar: Option<PathBuf>,

    /// Extra flag passed to the compiler
    #[arg(short = 'f', long = "compiler-flags", allow_hyphen_values = true)]
    pub compiler_flags: Vec<String>,

    /// Feature flag override, e.g. app.features.CHAT=true
    #[arg(long = "flag", value_name = "KEY=VALUE")]
    pub flags: Vec<String>,

    /// Write output here instead of stdout
    #[arg(long)]
    pub output_file: Option<PathBuf>,

    /// Java executable used to run the compiler
    #[arg(long, env = "NSBUILD_JAVA", default_value = "java")]
    pub java: String,

    /// File name of the base runtime source
    #[arg(long, default_value = DEFAULT_BASE_FILE)]
    pub base_file: String,

    /// Build without a base runtime
    #[arg(long)]
    pub no_base: bool,

    /// Call used to declare a provided namespace
    #[arg(long, default_value = DeclarationConvention::DEFAULT_PROVIDE_KEYWORD)]
    pub provide_keyword: String,

    /// Call used to declare a required namespace
    #[arg(long, default_value = DeclarationConvention::DEFAULT_REQUIRE_KEYWORD)]
    pub require_keyword: String,

    /// File extension picked up while scanning roots
    #[arg(long = "extension", value_name = "EXT", default_value = "js")]
    pub extensions: Vec<String>,
}

impl BuildArgs {
    /// Options for one build run
    pub fn to_options(&self) -> Result<BuildOptions, ConfigError> {
        let convention = DeclarationConvention::new(&self.provide_keyword, &self.require_keyword)?;

        Ok(BuildOptions {
            files: self.files.clone(),
            inputs: self.inputs.clone(),
            namespaces: self.namespaces.clone(),
            roots: self.roots.clone(),
            extensions: self
                .extensions
                .iter()
                .map(|ext| ext.trim_start_matches('.').to_string())
                .collect(),
            convention,
            base_file: (!self.no_base).then(|| self.base_file.clone()),
            output_mode: self.output_mode,
            compiler: CompilerOptions {
                java: self.java.clone(),
                jar: self.compiler_jar.clone(),
                flags: self.compiler_flags.clone(),
            },
            feature_flags: self.flags.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    include!("cli.test.rs");
}
