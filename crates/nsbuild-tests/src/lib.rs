pub mod test_env;

// Re-export key testing utilities
pub use nsbuild_lib::testing::{MockProcessProvider, ProcessCall};
pub use test_env::{MockBehavior, TestEnvironment};
