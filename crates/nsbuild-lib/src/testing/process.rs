//! Spy process provider

use crate::build::{ProcessOutput, ProcessProvider};
use anyhow::Result;
use std::cell::RefCell;

/// Process call record for spy pattern
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessCall {
    pub command: String,
    pub args: Vec<String>,
}

/// Mock process provider recording every call
///
/// Succeeds with `stdout` unless configured to fail or to be unavailable.
pub struct MockProcessProvider {
    pub calls: RefCell<Vec<ProcessCall>>,
    result: std::result::Result<ProcessOutput, String>,
}

impl MockProcessProvider {
    pub fn new() -> Self {
        Self::with_stdout("")
    }

    /// Successful run printing `stdout`
    pub fn with_stdout(stdout: &str) -> Self {
        Self {
            calls: RefCell::new(Vec::new()),
            result: Ok(ProcessOutput {
                stdout: stdout.to_string(),
                stderr: String::new(),
                success: true,
                status: Some(0),
            }),
        }
    }

    /// Run exiting with `status` and printing `stderr`
    pub fn with_failure(status: i32, stderr: &str) -> Self {
        Self {
            calls: RefCell::new(Vec::new()),
            result: Ok(ProcessOutput {
                stdout: String::new(),
                stderr: stderr.to_string(),
                success: false,
                status: Some(status),
            }),
        }
    }

    /// The command cannot be spawned at all
    pub fn unavailable(message: &str) -> Self {
        Self {
            calls: RefCell::new(Vec::new()),
            result: Err(message.to_string()),
        }
    }

    /// Get all recorded process calls for verification
    pub fn get_calls(&self) -> Vec<ProcessCall> {
        self.calls.borrow().clone()
    }
}

impl Default for MockProcessProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl ProcessProvider for MockProcessProvider {
    fn execute(&self, command: &str, args: &[String]) -> Result<ProcessOutput> {
        self.calls.borrow_mut().push(ProcessCall {
            command: command.to_string(),
            args: args.to_vec(),
        });

        match &self.result {
            Ok(output) => Ok(output.clone()),
            Err(message) => Err(anyhow::anyhow!("{}", message)),
        }
    }
}
