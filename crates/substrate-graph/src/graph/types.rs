//! Core graph types: identifiers, handles and incidence entries.

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Identity of a graph instance.
///
/// Nodes and edges carry the id of the graph that created them. It is only
/// ever compared, never dereferenced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GraphId(Uuid);

impl GraphId {
    /// Generate a fresh random graph id.
    pub fn new() -> Self {
        GraphId(Uuid::new_v4())
    }

    /// The underlying UUID.
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for GraphId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for GraphId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Unique identifier for a node (monotonic counter, never reused).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct NodeId(u64);

impl NodeId {
    /// Wrap a raw id.
    pub fn new(id: u64) -> Self {
        NodeId(id)
    }

    /// The raw id.
    pub fn as_u64(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "n{}", self.0)
    }
}

/// Unique identifier for an edge (monotonic counter, independent of node ids).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct EdgeId(u64);

impl EdgeId {
    /// Wrap a raw id.
    pub fn new(id: u64) -> Self {
        EdgeId(id)
    }

    /// The raw id.
    pub fn as_u64(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for EdgeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "e{}", self.0)
    }
}

/// Copyable handle to a node owned by some [`Graph`](super::Graph).
///
/// A handle stays valid for reads of its fields after the node is removed,
/// but every graph operation rejects it from then on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeRef {
    pub(crate) graph: GraphId,
    pub(crate) id: NodeId,
}

impl NodeRef {
    /// Id of the referenced node.
    pub fn id(&self) -> NodeId {
        self.id
    }

    /// Graph that issued this handle.
    pub fn graph(&self) -> GraphId {
        self.graph
    }
}

/// Copyable handle to an edge owned by some [`Graph`](super::Graph).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EdgeRef {
    pub(crate) graph: GraphId,
    pub(crate) id: EdgeId,
}

impl EdgeRef {
    /// Id of the referenced edge.
    pub fn id(&self) -> EdgeId {
        self.id
    }

    /// Graph that issued this handle.
    pub fn graph(&self) -> GraphId {
        self.graph
    }
}

/// Role a node plays for an incident edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Endpoint {
    /// The node is the edge's source
    Source,
    /// The node is the edge's target
    Target,
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Endpoint::Source => write!(f, "source"),
            Endpoint::Target => write!(f, "target"),
        }
    }
}

/// One entry of a node's incidence list.
///
/// A self-loop appears twice on its node, once per [`Endpoint`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Incidence {
    /// The incident edge
    pub edge: EdgeId,
    /// Which end of `edge` this node is
    pub endpoint: Endpoint,
}
