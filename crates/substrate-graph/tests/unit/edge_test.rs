//! Unit tests for Edge accessors and property handling.

use substrate_graph::{Endpoint, Graph, PropertyValue};

#[test]
fn test_edge_accessors() {
    let mut graph = Graph::new();
    let a = graph.add_node();
    let b = graph.add_node();
    let handle = graph.add_edge(a, b).unwrap();

    let edge = graph.edge(handle).unwrap();
    assert_eq!(edge.id(), handle.id());
    assert_eq!(edge.graph(), graph.id());
    assert_eq!(edge.source(), a.id());
    assert_eq!(edge.target(), b.id());
    assert_eq!(edge.source_handle(), a);
    assert_eq!(edge.target_handle(), b);
    assert_eq!(edge.slot(Endpoint::Source), 0);
    assert_eq!(edge.slot(Endpoint::Target), 0);
    assert!(!edge.is_self_loop());
}

#[test]
fn test_edge_property() {
    let mut graph = Graph::new();
    let a = graph.add_node();
    let b = graph.add_node();
    let e = graph.add_edge(a, b).unwrap();

    graph.set_edge_property(e, "label", "depends_on").unwrap();
    graph.edge_mut(e).unwrap().set_property("cost", 2.5);

    let edge = graph.edge(e).unwrap();
    assert_eq!(
        edge.property("label"),
        Some(&PropertyValue::String("depends_on".to_string()))
    );
    assert_eq!(edge.property("cost").and_then(|v| v.as_float()), Some(2.5));
    assert_eq!(edge.property("unset"), None);
}

#[test]
fn test_self_loop_has_two_slots() {
    let mut graph = Graph::new();
    let n = graph.add_node();
    let e = graph.add_edge(n, n).unwrap();

    let edge = graph.edge(e).unwrap();
    assert!(edge.is_self_loop());
    assert_eq!(edge.slot(Endpoint::Source), 0);
    assert_eq!(edge.slot(Endpoint::Target), 1);
    assert_eq!(graph.node(n).unwrap().degree(), 2);
}

#[test]
fn test_parallel_edges_are_distinct() {
    let mut graph = Graph::new();
    let a = graph.add_node();
    let b = graph.add_node();
    let first = graph.add_edge(a, b).unwrap();
    let second = graph.add_edge(a, b).unwrap();

    assert_ne!(first.id(), second.id());
    assert_eq!(graph.total_edges(), 2);
    assert_eq!(graph.node(a).unwrap().degree(), 2);
}
