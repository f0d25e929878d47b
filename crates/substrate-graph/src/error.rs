//! Error types for substrate-graph operations.
//!
//! Every variant describes an argument the graph refused to accept. A call
//! that returns an error has not mutated the graph.

use crate::graph::{EdgeId, GraphId, NodeId};
use thiserror::Error;

/// Result type alias for graph operations.
pub type Result<T> = std::result::Result<T, GraphError>;

/// Error type for all graph operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    /// Node handle was issued by a different graph.
    #[error("Node {node_id} belongs to graph {graph_id}, not this graph")]
    ForeignNode {
        /// ID of the rejected node
        node_id: NodeId,
        /// Graph that issued the handle
        graph_id: GraphId,
    },

    /// Edge handle was issued by a different graph.
    #[error("Edge {edge_id} belongs to graph {graph_id}, not this graph")]
    ForeignEdge {
        /// ID of the rejected edge
        edge_id: EdgeId,
        /// Graph that issued the handle
        graph_id: GraphId,
    },

    /// Node is no longer part of the graph.
    #[error("Node not found: {node_id}")]
    NodeNotFound {
        /// ID of the missing node
        node_id: NodeId,
    },

    /// Edge is no longer part of the graph.
    #[error("Edge not found: {edge_id}")]
    EdgeNotFound {
        /// ID of the missing edge
        edge_id: EdgeId,
    },

    /// Event name passed to `subscribe_named` is not recognised.
    #[error("Unknown event: '{name}'")]
    UnknownEvent {
        /// Name that failed to parse
        name: String,
    },
}

impl GraphError {
    /// True for errors caused by a handle from another graph instance.
    pub fn is_foreign(&self) -> bool {
        matches!(self, Self::ForeignNode { .. } | Self::ForeignEdge { .. })
    }
}
