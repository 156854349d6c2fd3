//! Test support shared by unit and integration tests
//!
//! - [`SourceTreeFixture`]: a temporary source tree with automatic cleanup
//! - [`MockProcessProvider`]: a spy standing in for the external compiler

pub mod filesystem;
pub mod process;

pub use filesystem::SourceTreeFixture;
pub use process::{MockProcessProvider, ProcessCall};
