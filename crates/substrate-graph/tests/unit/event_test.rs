//! Unit tests for change notifications.

use std::cell::RefCell;
use std::rc::Rc;
use substrate_graph::{Graph, GraphConfig, GraphError, GraphEventKind};

type Log = Rc<RefCell<Vec<String>>>;

/// Subscribe a recorder to every event kind.
fn record_all(graph: &mut Graph) -> Log {
    let log: Log = Rc::new(RefCell::new(Vec::new()));
    for kind in GraphEventKind::ALL {
        let log = Rc::clone(&log);
        graph.subscribe(kind, move |event| {
            let id = match (event.node(), event.edge()) {
                (Some(node), _) => node.id().to_string(),
                (_, Some(edge)) => edge.id().to_string(),
                _ => unreachable!(),
            };
            log.borrow_mut().push(format!("{}:{id}", event.kind()));
        });
    }
    log
}

#[test]
fn test_add_events() {
    let mut graph = Graph::new();
    let log = record_all(&mut graph);

    let a = graph.add_node();
    let b = graph.add_node();
    graph.add_edge(a, b).unwrap();

    assert_eq!(
        *log.borrow(),
        vec!["nodeAdded:n0", "nodeAdded:n1", "edgeAdded:e0"]
    );
}

#[test]
fn test_node_removal_cascade_order() {
    let mut graph = Graph::new();
    let a = graph.add_node();
    let b = graph.add_node();
    let c = graph.add_node();
    graph.add_edge(a, b).unwrap();
    graph.add_edge(b, c).unwrap();

    let log = record_all(&mut graph);
    graph.remove_node(b).unwrap();

    let log = log.borrow();
    assert_eq!(log.len(), 3);
    assert!(log[..2].iter().all(|entry| entry.starts_with("edgeRemoved:")));
    assert_eq!(log[2], "nodeRemoved:n1");
}

#[test]
fn test_event_sees_storage_after_mutation() {
    let mut graph = Graph::new();
    let seen = Rc::new(RefCell::new(None));
    let slot = Rc::clone(&seen);
    graph.subscribe(GraphEventKind::NodeAdded, move |event| {
        *slot.borrow_mut() = event.node().map(|n| n.index());
    });

    graph.add_node();
    graph.add_node();
    assert_eq!(*seen.borrow(), Some(1));
}

#[test]
fn test_suppression_only_gates_node_events() {
    let mut graph = Graph::with_config(GraphConfig::quiet());
    let log = record_all(&mut graph);

    let a = graph.add_node();
    let b = graph.add_node();
    let e = graph.add_edge(a, b).unwrap();
    graph.remove_edge(e).unwrap();
    graph.remove_node(a).unwrap();

    assert_eq!(*log.borrow(), vec!["edgeAdded:e0", "edgeRemoved:e0"]);
}

#[test]
fn test_suppression_toggled_at_runtime() {
    let mut graph = Graph::new();
    let log = record_all(&mut graph);

    graph.set_events_suppressed(true);
    graph.add_node();
    graph.set_events_suppressed(false);
    graph.add_node();

    assert_eq!(*log.borrow(), vec!["nodeAdded:n1"]);
}

#[test]
fn test_failed_operations_emit_nothing() {
    let mut graph = Graph::new();
    let mut other = Graph::new();
    let log = record_all(&mut graph);

    let foreign = other.add_node();
    assert!(graph.add_edge(foreign, foreign).is_err());
    assert!(graph.remove_node(foreign).is_err());
    assert!(log.borrow().is_empty());
}

#[test]
fn test_subscribe_named_and_unsubscribe() {
    let mut graph = Graph::new();
    let hits = Rc::new(RefCell::new(0));
    let counter = Rc::clone(&hits);

    let id = graph
        .subscribe_named("nodeadded", move |_| *counter.borrow_mut() += 1)
        .unwrap();
    assert_eq!(graph.listener_count(GraphEventKind::NodeAdded), 1);

    graph.add_node();
    assert!(graph.unsubscribe(id));
    graph.add_node();
    assert_eq!(*hits.borrow(), 1);

    let err = graph.subscribe_named("nodeMoved", |_| {}).unwrap_err();
    assert_eq!(
        err,
        GraphError::UnknownEvent {
            name: "nodeMoved".to_string()
        }
    );
}
