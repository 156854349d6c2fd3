// Tests for topological resolution

use super::*;

// ============================================================================
// Test Utilities
// ============================================================================

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

fn request(namespaces: &[&str]) -> ResolutionRequest {
    ResolutionRequest::new(namespaces.iter().map(|ns| Namespace::new(*ns).unwrap())).unwrap()
}

fn labels(sources: &[&SourceDescriptor]) -> Vec<String> {
    sources.iter().map(|s| s.label()).collect()
}

fn ns_list(names: &[&str]) -> Vec<Namespace> {
    names.iter().map(|ns| Namespace::new(*ns).unwrap()).collect()
}

/// S1 provides a; S2 provides b requires a; S3 provides c requires b
fn chain_graph() -> DependencyGraph {
    DependencyGraph::build(vec![
        source("s1.js", &["a"], &[]),
        source("s2.js", &["b"], &["a"]),
        source("s3.js", &["c"], &["b"]),
    ])
    .unwrap()
}

/// Every provider of a require appears before the requiring source
fn assert_topological(graph: &DependencyGraph, order: &[&SourceDescriptor]) {
    for (position, source) in order.iter().enumerate() {
        for required in source.requires() {
            let provider = graph.provider(required.as_str()).unwrap();
            let provider_position = order
                .iter()
                .position(|s| std::ptr::eq(*s, provider))
                .unwrap_or_else(|| panic!("provider of {} missing from order", required));
            assert!(
                provider_position < position,
                "{} must precede {}",
                provider.label(),
                source.label()
            );
        }
    }
}

// ============================================================================
// Request Construction
// ============================================================================

#[test]
fn test_request_rejects_empty() {
    assert!(ResolutionRequest::new(Vec::new()).is_none());
}

#[test]
fn test_request_drops_repeats_keeping_order() {
    let req = request(&["b", "a", "b", "c", "a"]);
    assert_eq!(req.namespaces(), ns_list(&["b", "a", "c"]).as_slice());
    assert_eq!(req.len(), 3);
    assert!(!req.is_empty());
}

// ============================================================================
// Ordering
// ============================================================================

#[test]
fn test_transitive_chain() {
    let graph = chain_graph();
    let order = graph.resolve(&request(&["c"])).unwrap();
    assert_eq!(labels(&order), vec!["s1.js", "s2.js", "s3.js"]);
}

#[test]
fn test_transitive_subset_excludes_unrequired() {
    let graph = chain_graph();
    let order = graph.resolve(&request(&["a", "b"])).unwrap();
    assert_eq!(labels(&order), vec!["s1.js", "s2.js"]);
}

#[test]
fn test_leaf_request_returns_exactly_those_sources() {
    let graph = DependencyGraph::build(vec![
        source("x.js", &["x"], &[]),
        source("y.js", &["y"], &[]),
        source("z.js", &["z"], &[]),
    ])
    .unwrap();

    let order = graph.resolve(&request(&["z", "x"])).unwrap();
    assert_eq!(labels(&order), vec!["z.js", "x.js"]);
}

#[test]
fn test_diamond_emits_shared_dependency_once() {
    let graph = DependencyGraph::build(vec![
        source("app.js", &["app"], &["left", "right"]),
        source("left.js", &["left"], &["base"]),
        source("right.js", &["right"], &["base"]),
        source("base.js", &["base"], &[]),
    ])
    .unwrap();

    let order = graph.resolve(&request(&["app"])).unwrap();
    assert_eq!(
        labels(&order),
        vec!["base.js", "left.js", "right.js", "app.js"]
    );
    assert_topological(&graph, &order);
}

#[test]
fn test_requires_visited_in_declared_order() {
    let graph = DependencyGraph::build(vec![
        source("a.js", &["a"], &[]),
        source("b.js", &["b"], &[]),
        source("top.js", &["top"], &["b", "a"]),
    ])
    .unwrap();

    let order = graph.resolve(&request(&["top"])).unwrap();
    assert_eq!(labels(&order), vec!["b.js", "a.js", "top.js"]);
}

#[test]
fn test_multi_provide_source_emitted_once() {
    let graph = DependencyGraph::build(vec![
        source("util.js", &["util.string", "util.array"], &[]),
        source("ui.js", &["ui"], &["util.array"]),
    ])
    .unwrap();

    let order = graph
        .resolve(&request(&["util.string", "ui", "util.array"]))
        .unwrap();
    assert_eq!(labels(&order), vec!["util.js", "ui.js"]);
}

#[test]
fn test_resolution_is_deterministic() {
    let graph = DependencyGraph::build(vec![
        source("d.js", &["d"], &["b", "c"]),
        source("c.js", &["c"], &["a"]),
        source("b.js", &["b"], &["a"]),
        source("a.js", &["a"], &[]),
        source("e.js", &["e"], &["d", "a"]),
    ])
    .unwrap();
    let req = request(&["e", "c"]);

    let first = labels(&graph.resolve(&req).unwrap());
    for _ in 0..10 {
        assert_eq!(labels(&graph.resolve(&req).unwrap()), first);
    }
    assert_eq!(first, vec!["a.js", "b.js", "c.js", "d.js", "e.js"]);
}

#[test]
fn test_larger_graph_is_topological() {
    let mut sources = Vec::new();
    for i in 0..50 {
        let provide = format!("mod{}", i);
        let requires: Vec<String> = (0..i)
            .filter(|j| (i + j) % 3 == 0)
            .map(|j| format!("mod{}", j))
            .collect();
        let requires: Vec<&str> = requires.iter().map(String::as_str).collect();
        sources.push(source(&format!("mod{}.js", i), &[provide.as_str()], &requires));
    }
    let graph = DependencyGraph::build(sources).unwrap();

    let order = graph.resolve(&request(&["mod49", "mod48", "mod47"])).unwrap();
    assert_topological(&graph, &order);

    let mut seen = std::collections::HashSet::new();
    for source in &order {
        assert!(seen.insert(source.label()), "{} emitted twice", source.label());
    }
}

#[test]
fn test_long_chain_does_not_overflow() {
    let depth = 20_000;
    let sources = (0..depth).map(|i| {
        let provide = format!("n{}", i);
        if i == 0 {
            source("n0.js", &[provide.as_str()], &[])
        } else {
            let require = format!("n{}", i - 1);
            source(&format!("n{}.js", i), &[provide.as_str()], &[require.as_str()])
        }
    });
    let graph = DependencyGraph::build(sources).unwrap();

    let top = format!("n{}", depth - 1);
    let order = graph.resolve(&request(&[top.as_str()])).unwrap();
    assert_eq!(order.len(), depth);
    assert_eq!(order[0].label(), "n0.js");
}

#[test]
fn test_resolve_does_not_mutate_graph() {
    let graph = chain_graph();
    let before = (graph.node_count(), graph.edge_count());
    let _ = graph.resolve(&request(&["c"])).unwrap();
    let _ = graph.resolve(&request(&["missing"])).unwrap_err();
    assert_eq!((graph.node_count(), graph.edge_count()), before);
}

// ============================================================================
// Failures
// ============================================================================

#[test]
fn test_two_node_cycle() {
    let graph = DependencyGraph::build(vec![
        source("s4.js", &["x"], &["y"]),
        source("s5.js", &["y"], &["x"]),
    ])
    .unwrap();

    let err = graph.resolve(&request(&["x"])).unwrap_err();
    assert_eq!(
        err,
        DependencyError::CircularDependency {
            cycle: ns_list(&["x", "y", "x"])
        }
    );
    assert!(err.to_string().contains("x -> y -> x"), "{}", err);
}

#[test]
fn test_cycle_chain_starts_at_reentered_namespace() {
    let graph = DependencyGraph::build(vec![
        source("top.js", &["top"], &["a"]),
        source("a.js", &["a"], &["b"]),
        source("b.js", &["b"], &["c"]),
        source("c.js", &["c"], &["a"]),
    ])
    .unwrap();

    let err = graph.resolve(&request(&["top"])).unwrap_err();
    assert_eq!(
        err,
        DependencyError::CircularDependency {
            cycle: ns_list(&["a", "b", "c", "a"])
        }
    );
}

#[test]
fn test_self_require_is_cycle() {
    let graph = DependencyGraph::build(vec![source("self.js", &["me"], &["me"])]).unwrap();
    let err = graph.resolve(&request(&["me"])).unwrap_err();
    assert_eq!(
        err,
        DependencyError::CircularDependency {
            cycle: ns_list(&["me", "me"])
        }
    );
}

#[test]
fn test_cycle_through_second_provide_of_same_source() {
    // shared.js provides both a and b; helper needs b while shared needs helper
    let graph = DependencyGraph::build(vec![
        source("shared.js", &["a", "b"], &["helper"]),
        source("helper.js", &["helper"], &["b"]),
    ])
    .unwrap();

    let err = graph.resolve(&request(&["a"])).unwrap_err();
    assert_eq!(
        err,
        DependencyError::CircularDependency {
            cycle: ns_list(&["helper", "b", "helper"])
        }
    );
}

#[test]
fn test_unknown_requested_namespace() {
    let graph = chain_graph();
    let err = graph.resolve(&request(&["z"])).unwrap_err();
    assert_eq!(
        err,
        DependencyError::UnknownNamespace {
            namespace: Namespace::new("z").unwrap(),
            required_by: None,
            chain: Vec::new(),
        }
    );
}

#[test]
fn test_unknown_transitive_namespace_reports_chain() {
    let graph = DependencyGraph::build(vec![
        source("app.js", &["app"], &["ui"]),
        source("ui.js", &["ui"], &["gone"]),
    ])
    .unwrap();

    let err = graph.resolve(&request(&["app"])).unwrap_err();
    assert_eq!(
        err,
        DependencyError::UnknownNamespace {
            namespace: Namespace::new("gone").unwrap(),
            required_by: Some("ui.js".to_string()),
            chain: ns_list(&["app", "ui"]),
        }
    );

    let message = err.to_string();
    assert!(message.contains("\"gone\""), "{}", message);
    assert!(message.contains("ui.js"), "{}", message);
    assert!(message.contains("app -> ui -> gone"), "{}", message);
}

#[test]
fn test_unknown_require_outside_request_is_ignored() {
    let graph = DependencyGraph::build(vec![
        source("ok.js", &["ok"], &[]),
        source("broken.js", &["broken"], &["nowhere"]),
    ])
    .unwrap();

    let order = graph.resolve(&request(&["ok"])).unwrap();
    assert_eq!(labels(&order), vec!["ok.js"]);
}

#[test]
fn test_error_namespaces() {
    let err = DependencyError::CircularDependency {
        cycle: ns_list(&["x", "y", "x"]),
    };
    let names: Vec<&str> = err.namespaces().into_iter().map(Namespace::as_str).collect();
    assert_eq!(names, vec!["x", "y", "x"]);
}
