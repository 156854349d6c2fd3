//! Namespace dependency core
//!
//! Sources declare the namespaces they provide and require through a fixed
//! textual convention. This module turns source text into descriptors,
//! builds a provider graph from them and resolves a requested namespace set
//! into a load order.
//!
//! Nothing in here performs I/O; callers hand in text that has already been
//! read and decide what to do with the ordered result.

pub mod dependency_graph;
pub mod error;
pub mod namespace;
pub mod resolver;
pub mod source;

pub use dependency_graph::DependencyGraph;
pub use error::{DependencyError, NamespaceError};
pub use namespace::Namespace;
pub use resolver::{ResolutionRequest, Resolver};
pub use source::{DeclarationConvention, SourceDescriptor};
