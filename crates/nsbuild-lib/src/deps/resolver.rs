//! Topological resolution of requested namespaces
//!
//! Depth-first over require edges, one traversal per requested namespace in
//! request order. Each namespace moves `unvisited -> visiting -> resolved`;
//! reaching a namespace that is still `visiting` is a cycle. Providers are
//! appended in post-order, so every source lands after everything it
//! requires, and a source is never emitted twice.
//!
//! The traversal keeps its own stack instead of recursing so long require
//! chains cannot exhaust the call stack.

use super::{DependencyError, DependencyGraph, Namespace, SourceDescriptor};
use petgraph::graph::NodeIndex;
use std::collections::{HashMap, HashSet};
use tracing::{debug, trace};

/// Non-empty, ordered, duplicate-free set of requested namespaces
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolutionRequest {
    namespaces: Vec<Namespace>,
}

impl ResolutionRequest {
    /// Collect namespaces in order, dropping repeats; `None` when empty
    pub fn new(namespaces: impl IntoIterator<Item = Namespace>) -> Option<Self> {
        let mut ordered: Vec<Namespace> = Vec::new();
        for ns in namespaces {
            if !ordered.contains(&ns) {
                ordered.push(ns);
            }
        }
        if ordered.is_empty() {
            None
        } else {
            Some(Self {
                namespaces: ordered,
            })
        }
    }

    pub fn namespaces(&self) -> &[Namespace] {
        &self.namespaces
    }

    pub fn len(&self) -> usize {
        self.namespaces.len()
    }

    /// Always false; kept for the `len` convention
    pub fn is_empty(&self) -> bool {
        self.namespaces.is_empty()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum VisitState {
    Visiting,
    Resolved,
}

/// Namespace being resolved and how far through its provider's requires we are
struct Frame<'g> {
    namespace: &'g Namespace,
    node: NodeIndex,
    next_require: usize,
}

/// Resolves requests against one graph without mutating it
pub struct Resolver<'g> {
    graph: &'g DependencyGraph,
}

impl<'g> Resolver<'g> {
    pub fn new(graph: &'g DependencyGraph) -> Self {
        Self { graph }
    }

    /// Ordered providers for `request` and everything it transitively requires
    pub fn resolve(
        &self,
        request: &ResolutionRequest,
    ) -> Result<Vec<&'g SourceDescriptor>, DependencyError> {
        let mut traversal = Traversal {
            graph: self.graph,
            states: HashMap::new(),
            emitted: HashSet::new(),
            order: Vec::new(),
            stack: Vec::new(),
        };

        for namespace in request.namespaces() {
            traversal.run(namespace)?;
        }

        debug!(
            requested = request.len(),
            resolved = traversal.order.len(),
            "Resolved dependencies"
        );
        Ok(traversal.order)
    }
}

struct Traversal<'g> {
    graph: &'g DependencyGraph,
    states: HashMap<&'g Namespace, VisitState>,
    emitted: HashSet<NodeIndex>,
    order: Vec<&'g SourceDescriptor>,
    stack: Vec<Frame<'g>>,
}

impl<'g> Traversal<'g> {
    fn run(&mut self, root: &Namespace) -> Result<(), DependencyError> {
        self.enter(root)?;

        while let Some(frame) = self.stack.last_mut() {
            let requires = self.graph.descriptor(frame.node).requires();
            if let Some(next) = requires.get(frame.next_require) {
                frame.next_require += 1;
                self.enter(next)?;
                continue;
            }

            let Some(done) = self.stack.pop() else { break };
            self.states.insert(done.namespace, VisitState::Resolved);
            if self.emitted.insert(done.node) {
                let source = self.graph.descriptor(done.node);
                trace!("Emitting {} for {}", source.label(), done.namespace);
                self.order.push(source);
            }
        }

        Ok(())
    }

    /// Start resolving `namespace`, or skip it if already resolved
    fn enter(&mut self, namespace: &Namespace) -> Result<(), DependencyError> {
        match self.states.get(namespace) {
            Some(VisitState::Resolved) => return Ok(()),
            Some(VisitState::Visiting) => return Err(self.cycle_error(namespace)),
            None => {}
        }

        let Some((key, node)) = self.graph.provider_entry(namespace.as_str()) else {
            return Err(DependencyError::UnknownNamespace {
                namespace: namespace.clone(),
                required_by: self
                    .stack
                    .last()
                    .map(|frame| self.graph.descriptor(frame.node).label()),
                chain: self.chain(),
            });
        };

        // Provider already emitted through another namespace it provides
        if self.emitted.contains(&node) {
            self.states.insert(key, VisitState::Resolved);
            return Ok(());
        }

        trace!("Visiting {}", key);
        self.states.insert(key, VisitState::Visiting);
        self.stack.push(Frame {
            namespace: key,
            node,
            next_require: 0,
        });
        Ok(())
    }

    fn chain(&self) -> Vec<Namespace> {
        self.stack
            .iter()
            .map(|frame| frame.namespace.clone())
            .collect()
    }

    fn cycle_error(&self, namespace: &Namespace) -> DependencyError {
        let start = self
            .stack
            .iter()
            .position(|frame| frame.namespace == namespace)
            .unwrap_or(0);
        let mut cycle: Vec<Namespace> = self.stack[start..]
            .iter()
            .map(|frame| frame.namespace.clone())
            .collect();
        cycle.push(namespace.clone());
        DependencyError::CircularDependency { cycle }
    }
}

#[cfg(test)]
mod tests {
    include!("resolver.test.rs");
}
