//! Unit tests for Node accessors and property handling.

use substrate_graph::{Endpoint, Graph, PropertyValue};

#[test]
fn test_node_accessors() {
    let mut graph = Graph::new();
    let handle = graph.add_node();

    let node = graph.node(handle).unwrap();
    assert_eq!(node.id(), handle.id());
    assert_eq!(node.graph(), graph.id());
    assert_eq!(node.index(), 0);
    assert_eq!(node.handle(), handle);
    assert!(node.incident_edges().is_empty());
}

#[test]
fn test_node_property_read_and_write() {
    let mut graph = Graph::new();
    let n1 = graph.add_node();

    let stored = graph.set_node_property(n1, "weight", 5i64).unwrap();
    assert_eq!(stored, &PropertyValue::Int(5));

    let node = graph.node(n1).unwrap();
    assert_eq!(node.property("weight"), Some(&PropertyValue::Int(5)));
    assert_eq!(node.property("missing"), None);
}

#[test]
fn test_node_property_overwrite() {
    let mut graph = Graph::new();
    let n = graph.add_node();

    let node = graph.node_mut(n).unwrap();
    node.set_property("name", "alpha");
    node.set_property("name", "beta");

    assert_eq!(node.properties().len(), 1);
    assert_eq!(node.property("name").and_then(|v| v.as_str()), Some("beta"));
}

#[test]
fn test_incidence_roles() {
    let mut graph = Graph::new();
    let a = graph.add_node();
    let b = graph.add_node();
    let e = graph.add_edge(a, b).unwrap();

    let source = graph.node(a).unwrap();
    assert_eq!(source.incident_edges()[0].edge, e.id());
    assert_eq!(source.incident_edges()[0].endpoint, Endpoint::Source);

    let target = graph.node(b).unwrap();
    assert_eq!(target.incident_edges()[0].endpoint, Endpoint::Target);
}

#[test]
fn test_removed_node_stays_readable() {
    let mut graph = Graph::new();
    let n = graph.add_node();
    graph.set_node_property(n, "color", "red").unwrap();

    let detached = graph.remove_node(n).unwrap();
    assert_eq!(detached.id(), n.id());
    assert_eq!(detached.property("color").and_then(|v| v.as_str()), Some("red"));
    assert!(graph.node(n).is_err());
}
