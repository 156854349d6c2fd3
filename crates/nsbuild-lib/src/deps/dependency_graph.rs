//! Provider graph over source descriptors
//!
//! Nodes are descriptors in the order they were supplied. An edge runs from
//! the provider of a namespace to every source that requires it, weighted
//! with that namespace, so edges point from dependency to dependent.
//! The graph is built once and only read afterwards.

use super::{DependencyError, Namespace, ResolutionRequest, Resolver, SourceDescriptor};
use petgraph::Direction;
use petgraph::algo::is_cyclic_directed;
use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::visit::EdgeRef;
use std::collections::HashMap;
use tracing::{debug, trace};

/// Immutable mapping from namespace to its single provider
#[derive(Debug, Clone)]
pub struct DependencyGraph {
    /// Directed graph: nodes = sources, edges = provider -> dependent
    graph: DiGraph<SourceDescriptor, Namespace>,
    /// Map from provided namespace to its node for fast lookup
    provider_map: HashMap<Namespace, NodeIndex>,
}

impl DependencyGraph {
    /// Build the graph from descriptors already deduplicated by origin
    ///
    /// Fails when two descriptors provide the same namespace. Requires that
    /// nothing provides are kept and only surface during resolution.
    pub fn build(
        descriptors: impl IntoIterator<Item = SourceDescriptor>,
    ) -> Result<Self, DependencyError> {
        let mut graph = DiGraph::new();
        let mut provider_map: HashMap<Namespace, NodeIndex> = HashMap::new();

        for descriptor in descriptors {
            let idx = graph.add_node(descriptor);
            for namespace in graph[idx].provides() {
                if let Some(&existing) = provider_map.get(namespace) {
                    let first: &SourceDescriptor = &graph[existing];
                    return Err(DependencyError::DuplicateProvide {
                        namespace: namespace.clone(),
                        first: first.label(),
                        second: graph[idx].label(),
                    });
                }
                provider_map.insert(namespace.clone(), idx);
            }
        }

        let mut edges = Vec::new();
        for dependent in graph.node_indices() {
            for namespace in graph[dependent].requires() {
                match provider_map.get(namespace) {
                    Some(&provider) => edges.push((provider, dependent, namespace.clone())),
                    None => trace!(
                        "Unresolved require {} in {}",
                        namespace,
                        graph[dependent].label()
                    ),
                }
            }
        }
        for (provider, dependent, namespace) in edges {
            graph.add_edge(provider, dependent, namespace);
        }

        debug!(
            sources = graph.node_count(),
            namespaces = provider_map.len(),
            edges = graph.edge_count(),
            "Built dependency graph"
        );

        Ok(Self {
            graph,
            provider_map,
        })
    }

    /// Resolve a request into load order, see [`Resolver`]
    pub fn resolve(
        &self,
        request: &ResolutionRequest,
    ) -> Result<Vec<&SourceDescriptor>, DependencyError> {
        Resolver::new(self).resolve(request)
    }

    /// Source providing `namespace`
    pub fn provider(&self, namespace: &str) -> Option<&SourceDescriptor> {
        let idx = self.provider_map.get(namespace)?;
        Some(&self.graph[*idx])
    }

    /// Graph-owned key and node for `namespace`
    pub(crate) fn provider_entry(&self, namespace: &str) -> Option<(&Namespace, NodeIndex)> {
        self.provider_map
            .get_key_value(namespace)
            .map(|(key, idx)| (key, *idx))
    }

    pub(crate) fn descriptor(&self, idx: NodeIndex) -> &SourceDescriptor {
        &self.graph[idx]
    }

    /// Check if some source provides `namespace`
    pub fn contains(&self, namespace: &str) -> bool {
        self.provider_map.contains_key(namespace)
    }

    /// All sources in construction order
    pub fn sources(&self) -> impl Iterator<Item = &SourceDescriptor> {
        self.graph.node_weights()
    }

    /// Get the number of sources in the graph
    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    /// Get the number of resolved require edges
    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Providers of everything the provider of `namespace` requires, in declared order
    pub fn dependencies(&self, namespace: &str) -> Option<Vec<&SourceDescriptor>> {
        let idx = *self.provider_map.get(namespace)?;
        let mut deps: Vec<&SourceDescriptor> = Vec::new();
        for required in self.graph[idx].requires() {
            if let Some(provider) = self.provider(required.as_str()) {
                if !deps.iter().any(|d| std::ptr::eq(*d, provider)) {
                    deps.push(provider);
                }
            }
        }
        Some(deps)
    }

    /// Sources requiring anything the provider of `namespace` provides
    pub fn dependents(&self, namespace: &str) -> Option<Vec<&SourceDescriptor>> {
        let idx = *self.provider_map.get(namespace)?;

        // Edges go from dependency to dependent, so dependents are outgoing
        let mut targets: Vec<NodeIndex> = self
            .graph
            .edges_directed(idx, Direction::Outgoing)
            .map(|edge| edge.target())
            .collect();
        targets.sort();
        targets.dedup();

        Some(targets.into_iter().map(|t| &self.graph[t]).collect())
    }

    /// Every require that no source provides, with the source declaring it
    pub fn unresolved_requires(&self) -> Vec<(&Namespace, &SourceDescriptor)> {
        self.graph
            .node_weights()
            .flat_map(|source| {
                source
                    .requires()
                    .iter()
                    .filter(move |ns| !self.provider_map.contains_key(ns.as_str()))
                    .map(move |ns| (ns, source))
            })
            .collect()
    }

    /// Check the whole graph for require cycles
    pub fn has_cycles(&self) -> bool {
        is_cyclic_directed(&self.graph)
    }
}

#[cfg(test)]
mod tests {
    include!("dependency_graph.test.rs");
}
