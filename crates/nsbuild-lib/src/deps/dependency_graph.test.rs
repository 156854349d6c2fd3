// Tests for dependency graph construction

use super::*;
use std::path::Path;

// ============================================================================
// Test Utilities
// ============================================================================

/// Create a source with the given provides and requires
fn source(path: &str, provides: &[&str], requires: &[&str]) -> SourceDescriptor {
    let mut text = String::new();
    for ns in provides {
        text.push_str(&format!("goog.provide('{}');\n", ns));
    }
    for ns in requires {
        text.push_str(&format!("goog.require('{}');\n", ns));
    }
    SourceDescriptor::parse(text).with_origin(path)
}

fn origins(sources: &[&SourceDescriptor]) -> Vec<String> {
    sources.iter().map(|s| s.label()).collect()
}

// ============================================================================
// Basic Graph Operations
// ============================================================================

#[test]
fn test_empty_graph() {
    let graph = DependencyGraph::build(Vec::new()).unwrap();
    assert_eq!(graph.node_count(), 0);
    assert_eq!(graph.edge_count(), 0);
    assert!(!graph.has_cycles());
}

#[test]
fn test_build_maps_every_provide() {
    let graph = DependencyGraph::build(vec![
        source("a.js", &["a", "a.extra"], &[]),
        source("b.js", &["b"], &["a"]),
    ])
    .unwrap();

    assert_eq!(graph.node_count(), 2);
    assert_eq!(graph.edge_count(), 1);
    assert!(graph.contains("a"));
    assert!(graph.contains("a.extra"));
    assert!(!graph.contains("c"));

    let provider = graph.provider("a.extra").unwrap();
    assert_eq!(provider.origin(), Some(Path::new("a.js")));
}

#[test]
fn test_sources_keep_construction_order() {
    let graph = DependencyGraph::build(vec![
        source("z.js", &["z"], &[]),
        source("a.js", &["a"], &[]),
        source("m.js", &["m"], &[]),
    ])
    .unwrap();

    let order: Vec<String> = graph.sources().map(|s| s.label()).collect();
    assert_eq!(order, vec!["z.js", "a.js", "m.js"]);
}

#[test]
fn test_duplicate_provide_rejected() {
    let result = DependencyGraph::build(vec![
        source("first.js", &["a.b"], &[]),
        source("second.js", &["other", "a.b"], &[]),
    ]);

    match result {
        Err(DependencyError::DuplicateProvide {
            namespace,
            first,
            second,
        }) => {
            assert_eq!(namespace, "a.b");
            assert_eq!(first, "first.js");
            assert_eq!(second, "second.js");
        }
        other => panic!("expected DuplicateProvide, got {:?}", other),
    }
}

#[test]
fn test_duplicate_provide_message_names_both_sources() {
    let err = DependencyGraph::build(vec![
        source("x/one.js", &["dup"], &[]),
        source("y/two.js", &["dup"], &[]),
    ])
    .unwrap_err();

    let message = err.to_string();
    assert!(message.contains("dup"), "{}", message);
    assert!(message.contains("x/one.js"), "{}", message);
    assert!(message.contains("y/two.js"), "{}", message);
}

#[test]
fn test_unknown_requires_are_not_construction_errors() {
    let graph = DependencyGraph::build(vec![
        source("a.js", &["a"], &["missing.one"]),
        source("b.js", &["b"], &["a", "missing.two"]),
    ])
    .unwrap();

    let unresolved: Vec<(String, String)> = graph
        .unresolved_requires()
        .into_iter()
        .map(|(ns, src)| (ns.to_string(), src.label()))
        .collect();
    assert_eq!(
        unresolved,
        vec![
            ("missing.one".to_string(), "a.js".to_string()),
            ("missing.two".to_string(), "b.js".to_string()),
        ]
    );
}

// ============================================================================
// Queries
// ============================================================================

#[test]
fn test_dependencies_and_dependents() {
    let graph = DependencyGraph::build(vec![
        source("base.js", &["core", "core.util"], &[]),
        source("ui.js", &["ui"], &["core", "core.util"]),
        source("app.js", &["app"], &["ui", "core"]),
    ])
    .unwrap();

    let deps = graph.dependencies("app").unwrap();
    assert_eq!(origins(&deps), vec!["ui.js", "base.js"]);

    // Two requires of the same provider collapse into one dependency
    let deps = graph.dependencies("ui").unwrap();
    assert_eq!(origins(&deps), vec!["base.js"]);

    let dependents = graph.dependents("core.util").unwrap();
    assert_eq!(origins(&dependents), vec!["ui.js", "app.js"]);

    assert!(graph.dependents("app").unwrap().is_empty());
    assert!(graph.dependencies("nope").is_none());
}

#[test]
fn test_has_cycles() {
    let acyclic = DependencyGraph::build(vec![
        source("a.js", &["a"], &[]),
        source("b.js", &["b"], &["a"]),
    ])
    .unwrap();
    assert!(!acyclic.has_cycles());

    let cyclic = DependencyGraph::build(vec![
        source("x.js", &["x"], &["y"]),
        source("y.js", &["y"], &["x"]),
    ])
    .unwrap();
    assert!(cyclic.has_cycles());
}

#[test]
fn test_graph_is_shareable() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<DependencyGraph>();
    assert_send_sync::<SourceDescriptor>();
}
