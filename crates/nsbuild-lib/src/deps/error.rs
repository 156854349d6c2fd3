use super::Namespace;
use thiserror::Error;

/// Errors raised while building or resolving the dependency graph
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DependencyError {
    #[error("Namespace \"{namespace}\" is provided by both {first} and {second}")]
    DuplicateProvide {
        namespace: Namespace,
        first: String,
        second: String,
    },

    #[error("{}", unknown_namespace_message(.namespace, .required_by.as_deref(), .chain))]
    UnknownNamespace {
        namespace: Namespace,
        /// Source whose require reached the missing namespace
        required_by: Option<String>,
        /// Namespaces being resolved when the missing one was reached
        chain: Vec<Namespace>,
    },

    #[error("Circular dependency detected: {}", join_chain(.cycle))]
    CircularDependency { cycle: Vec<Namespace> },
}

/// Rejected namespace text
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NamespaceError {
    #[error("Namespace must not be empty")]
    Empty,

    #[error("Invalid namespace \"{value}\": expected dot-delimited identifiers")]
    Malformed { value: String },
}

impl DependencyError {
    /// Namespaces involved in the failure, for callers that want to point at files
    pub fn namespaces(&self) -> Vec<&Namespace> {
        match self {
            DependencyError::DuplicateProvide { namespace, .. } => vec![namespace],
            DependencyError::UnknownNamespace {
                namespace, chain, ..
            } => chain.iter().chain(std::iter::once(namespace)).collect(),
            DependencyError::CircularDependency { cycle } => cycle.iter().collect(),
        }
    }
}

fn join_chain(chain: &[Namespace]) -> String {
    chain
        .iter()
        .map(Namespace::as_str)
        .collect::<Vec<_>>()
        .join(" -> ")
}

fn unknown_namespace_message(
    namespace: &Namespace,
    required_by: Option<&str>,
    chain: &[Namespace],
) -> String {
    let mut message = format!("Namespace \"{}\" has no provider", namespace);
    if let Some(source) = required_by {
        message.push_str(&format!(" (required by {})", source));
    }
    if !chain.is_empty() {
        message.push_str(&format!(
            "; requirement chain: {} -> {}",
            join_chain(chain),
            namespace
        ));
    }
    message
}
