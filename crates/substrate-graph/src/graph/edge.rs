//! Graph-owned directed edge.

use super::property::{PropertyMap, PropertyValue};
use super::types::{EdgeId, EdgeRef, Endpoint, GraphId, NodeId, NodeRef};

/// A directed edge between two nodes of the same graph.
///
/// Besides its endpoints, an edge remembers where it sits in each
/// endpoint's incidence list so it can be detached in O(1).
#[derive(Debug, Clone)]
pub struct Edge {
    graph: GraphId,
    id: EdgeId,
    pub(crate) index: usize,
    source: NodeId,
    target: NodeId,
    pub(crate) source_slot: usize,
    pub(crate) target_slot: usize,
    properties: PropertyMap,
}

impl Edge {
    pub(crate) fn new(
        graph: GraphId,
        id: EdgeId,
        index: usize,
        (source, source_slot): (NodeId, usize),
        (target, target_slot): (NodeId, usize),
    ) -> Self {
        Self {
            graph,
            id,
            index,
            source,
            target,
            source_slot,
            target_slot,
            properties: PropertyMap::new(),
        }
    }

    /// Unique id assigned by the graph.
    pub fn id(&self) -> EdgeId {
        self.id
    }

    /// Graph that created this edge.
    pub fn graph(&self) -> GraphId {
        self.graph
    }

    /// Current position in the graph's edge storage.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Handle for passing this edge back into graph operations.
    pub fn handle(&self) -> EdgeRef {
        EdgeRef {
            graph: self.graph,
            id: self.id,
        }
    }

    /// Source node id.
    pub fn source(&self) -> NodeId {
        self.source
    }

    /// Target node id.
    pub fn target(&self) -> NodeId {
        self.target
    }

    /// Handle to the source node.
    pub fn source_handle(&self) -> NodeRef {
        self.endpoint_handle(Endpoint::Source)
    }

    /// Handle to the target node.
    pub fn target_handle(&self) -> NodeRef {
        self.endpoint_handle(Endpoint::Target)
    }

    /// Node at the given end of this edge.
    pub fn endpoint(&self, endpoint: Endpoint) -> NodeId {
        match endpoint {
            Endpoint::Source => self.source,
            Endpoint::Target => self.target,
        }
    }

    /// Handle to the node at the given end of this edge.
    pub fn endpoint_handle(&self, endpoint: Endpoint) -> NodeRef {
        NodeRef {
            graph: self.graph,
            id: self.endpoint(endpoint),
        }
    }

    /// True when source and target are the same node.
    pub fn is_self_loop(&self) -> bool {
        self.source == self.target
    }

    /// Position of this edge in the incidence list of the node at `endpoint`.
    pub fn slot(&self, endpoint: Endpoint) -> usize {
        match endpoint {
            Endpoint::Source => self.source_slot,
            Endpoint::Target => self.target_slot,
        }
    }

    pub(crate) fn set_slot(&mut self, endpoint: Endpoint, slot: usize) {
        match endpoint {
            Endpoint::Source => self.source_slot = slot,
            Endpoint::Target => self.target_slot = slot,
        }
    }

    /// Read a property. `None` when unset.
    pub fn property(&self, name: &str) -> Option<&PropertyValue> {
        self.properties.get(name)
    }

    /// Store a property and return the stored value.
    pub fn set_property(
        &mut self,
        name: impl Into<String>,
        value: impl Into<PropertyValue>,
    ) -> &PropertyValue {
        self.properties.insert(name, value)
    }

    /// Remove a property, returning its previous value.
    pub fn remove_property(&mut self, name: &str) -> Option<PropertyValue> {
        self.properties.remove(name)
    }

    /// All properties of this edge.
    pub fn properties(&self) -> &PropertyMap {
        &self.properties
    }
}
