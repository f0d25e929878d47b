//! Graph configuration.

use serde::{Deserialize, Serialize};

/// Configuration for a [`Graph`](crate::Graph)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GraphConfig {
    /// Suppress node notifications
    ///
    /// Only `nodeAdded` and `nodeRemoved` honor this flag. Edge
    /// notifications are always published.
    pub suppress_events: bool,

    /// Number of nodes to reserve storage for up front
    pub initial_node_capacity: usize,

    /// Number of edges to reserve storage for up front
    pub initial_edge_capacity: usize,
}

impl Default for GraphConfig {
    fn default() -> Self {
        Self {
            suppress_events: false,
            initial_node_capacity: 0,
            initial_edge_capacity: 0,
        }
    }
}

impl GraphConfig {
    /// Create config for bulk loading (node notifications off)
    pub fn quiet() -> Self {
        Self {
            suppress_events: true,
            ..Default::default()
        }
    }

    /// Set node notification suppression
    pub fn with_suppressed_events(mut self, suppress: bool) -> Self {
        self.suppress_events = suppress;
        self
    }

    /// Reserve storage for `nodes` nodes and `edges` edges
    pub fn with_capacity(mut self, nodes: usize, edges: usize) -> Self {
        self.initial_node_capacity = nodes;
        self.initial_edge_capacity = edges;
        self
    }
}
