//! Hermetic test environment for end-to-end builds
//!
//! A temporary directory holds a source tree under `src/` and mock
//! executables under `bin/`, so compiled builds can run through the live
//! process provider without a real Java installation.

use anyhow::{Context, Result};
use nsbuild_lib::build::{BuildOptions, CompilerOptions};
use nsbuild_lib::primitives::OutputMode;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Mock executable behavior configuration
#[derive(Debug, Clone)]
pub enum MockBehavior {
    /// Succeed and print `stdout`
    SucceedWithOutput { stdout: String },
    /// Print `error` to stderr and exit with `status`
    Fail { status: i32, error: String },
}

/// Hermetic test environment with mock executables
pub struct TestEnvironment {
    pub temp_dir: TempDir,
    /// Root of the source tree
    pub src_path: PathBuf,
    /// Directory containing mock executables
    pub bin_path: PathBuf,
}

impl TestEnvironment {
    pub fn new() -> Result<Self> {
        let temp_dir = TempDir::new()?;
        let src_path = temp_dir.path().join("src");
        let bin_path = temp_dir.path().join("bin");

        fs::create_dir_all(&src_path)?;
        fs::create_dir_all(&bin_path)?;

        Ok(Self {
            temp_dir,
            src_path,
            bin_path,
        })
    }

    /// Write `content` below the source tree
    pub fn write_source(&self, relative: &str, content: &str) -> Result<PathBuf> {
        let path = self.src_path.join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, content).with_context(|| format!("writing {}", path.display()))?;
        Ok(path)
    }

    /// Write a base runtime file carrying the default marker line
    pub fn write_base(&self, relative: &str) -> Result<PathBuf> {
        self.write_source(relative, "var goog = goog || {};\ngoog.global = this;\n")
    }

    /// Write a module from its declarations and an optional body
    pub fn write_module(
        &self,
        relative: &str,
        provides: &[&str],
        requires: &[&str],
        body: &str,
    ) -> Result<PathBuf> {
        let mut content = String::new();
        for namespace in provides {
            content.push_str(&format!("goog.provide('{}');\n", namespace));
        }
        for namespace in requires {
            content.push_str(&format!("goog.require('{}');\n", namespace));
        }
        content.push_str(body);
        self.write_source(relative, &content)
    }

    /// Options scanning the source tree, requesting `namespaces`
    pub fn build_options(&self, namespaces: &[&str]) -> BuildOptions {
        BuildOptions {
            roots: vec![self.src_path.clone()],
            namespaces: namespaces.iter().map(|ns| ns.to_string()).collect(),
            ..BuildOptions::default()
        }
    }

    /// Options for a compiled build running the mock `java`
    pub fn compiled_options(&self, namespaces: &[&str]) -> BuildOptions {
        BuildOptions {
            output_mode: OutputMode::Compiled,
            compiler: CompilerOptions {
                java: self.mock_path("java").display().to_string(),
                jar: Some(self.temp_dir.path().join("compiler.jar")),
                flags: Vec::new(),
            },
            ..self.build_options(namespaces)
        }
    }

    pub fn mock_path(&self, name: &str) -> PathBuf {
        self.bin_path.join(name)
    }

    fn log_path(&self, name: &str) -> PathBuf {
        self.temp_dir.path().join(format!("{}.log", name))
    }

    /// Install a shell script that logs its arguments, one per line
    pub fn add_mock_executable(&self, name: &str, behavior: MockBehavior) -> Result<PathBuf> {
        let executable_path = self.mock_path(name);
        let script = generate_mock_script(&self.log_path(name), &behavior);
        fs::write(&executable_path, script)?;

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let mut perms = fs::metadata(&executable_path)?.permissions();
            perms.set_mode(0o755);
            fs::set_permissions(&executable_path, perms)?;
        }

        Ok(executable_path)
    }

    /// Arguments the mock received, in order
    pub fn get_mock_args(&self, name: &str) -> Result<Vec<String>> {
        let log_path = self.log_path(name);
        if !log_path.exists() {
            return Ok(Vec::new());
        }
        Ok(fs::read_to_string(log_path)?
            .lines()
            .map(str::to_string)
            .collect())
    }

    /// Relative source paths as the list output renders them
    pub fn listed(&self, relative: &[&str]) -> String {
        relative
            .iter()
            .map(|name| format!("{}\n", self.src_path.join(name).display()))
            .collect()
    }
}

fn generate_mock_script(log_path: &Path, behavior: &MockBehavior) -> String {
    let behavior_code = match behavior {
        MockBehavior::SucceedWithOutput { stdout } => {
            format!("printf '%s' '{}'\nexit 0", stdout)
        }
        MockBehavior::Fail { status, error } => {
            format!("echo '{}' >&2\nexit {}", error, status)
        }
    };

    format!(
        r#"#!/bin/sh
for arg in "$@"; do
  printf '%s\n' "$arg" >> "{}"
done
{}
"#,
        log_path.display(),
        behavior_code
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_environment_layout() {
        let env = TestEnvironment::new().unwrap();
        assert!(env.src_path.is_dir());
        assert!(env.bin_path.is_dir());
    }

    #[test]
    fn test_write_module() {
        let env = TestEnvironment::new().unwrap();
        let path = env
            .write_module("a/b.js", &["a.b"], &["a.c"], "a.b.X = 1;\n")
            .unwrap();
        assert_eq!(
            fs::read_to_string(path).unwrap(),
            "goog.provide('a.b');\ngoog.require('a.c');\na.b.X = 1;\n"
        );
    }

    #[test]
    fn test_mock_script_logs_each_argument() {
        let script = generate_mock_script(
            Path::new("/tmp/java.log"),
            &MockBehavior::Fail {
                status: 4,
                error: "boom".to_string(),
            },
        );
        assert!(script.starts_with("#!/bin/sh\n"));
        assert!(script.contains(r#""$arg" >> "/tmp/java.log""#));
        assert!(script.contains("exit 4"));
    }
}
