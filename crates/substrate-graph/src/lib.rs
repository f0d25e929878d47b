//! # substrate-graph
//!
//! A minimal in-memory graph container: nodes, directed edges, stable ids,
//! O(1) amortized insertion and removal, per-node incidence lists and
//! synchronous change notifications.
//!
//! ## Storage
//!
//! Nodes and edges are kept in dense vectors. Removing an entity moves the
//! last one into its place, so storage never has holes and its order means
//! nothing. Ids, not positions, identify entities:
//!
//! ```text
//! Graph
//!   nodes: [n0, n3, n2]      n1 removed, n3 moved into its slot
//!   edges: [e0, e2]
//!   n0.incident: [(e0, source), (e2, target)]
//! ```
//!
//! ## Example
//!
//! ```rust
//! use substrate_graph::{Graph, GraphEventKind};
//!
//! let mut graph = Graph::new();
//! graph.subscribe(GraphEventKind::NodeRemoved, |event| {
//!     println!("removed {:?}", event.node().map(|n| n.id()));
//! });
//!
//! let a = graph.add_node();
//! let b = graph.add_node();
//! let edge = graph.add_edge(a, b).unwrap();
//! graph.set_edge_property(edge, "weight", 5i64).unwrap();
//!
//! graph.remove_node(a).unwrap();
//! assert_eq!(graph.total_edges(), 0);
//! ```
//!
//! ## Errors
//!
//! Operations that take a handle fail with [`GraphError`] when the handle
//! belongs to another graph or to an entity already removed. A failed call
//! never mutates the graph.

#![warn(missing_docs)]
#![deny(unsafe_code)]

pub mod config;
pub mod error;
pub mod event;
pub mod graph;

// Re-export main types
pub use config::GraphConfig;
pub use error::{GraphError, Result};
pub use event::{EventBus, GraphEvent, GraphEventKind, ListenerId};
pub use graph::{
    Edge, EdgeId, EdgeRef, Endpoint, Graph, GraphId, GraphStats, Incidence, Node, NodeId,
    NodeRef, PropertyMap, PropertyValue,
};
