//! Graph-owned vertex with a property bag and an incidence list.

use super::property::{PropertyMap, PropertyValue};
use super::types::{EdgeId, Endpoint, GraphId, Incidence, NodeId, NodeRef};

/// A node in the graph.
///
/// Nodes are created by [`Graph::add_node`](super::Graph::add_node) and
/// only change structurally through the graph. A node returned by
/// [`Graph::remove_node`](super::Graph::remove_node) is detached: its
/// accessors still work but it is no longer part of any graph.
#[derive(Debug, Clone)]
pub struct Node {
    graph: GraphId,
    id: NodeId,
    pub(crate) index: usize,
    properties: PropertyMap,
    incident: Vec<Incidence>,
}

impl Node {
    pub(crate) fn new(graph: GraphId, id: NodeId, index: usize) -> Self {
        Self {
            graph,
            id,
            index,
            properties: PropertyMap::new(),
            incident: Vec::new(),
        }
    }

    /// Unique id assigned by the graph.
    pub fn id(&self) -> NodeId {
        self.id
    }

    /// Graph that created this node.
    pub fn graph(&self) -> GraphId {
        self.graph
    }

    /// Current position in the graph's node storage.
    ///
    /// Changes whenever another node's removal relocates this one.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Handle for passing this node back into graph operations.
    pub fn handle(&self) -> NodeRef {
        NodeRef {
            graph: self.graph,
            id: self.id,
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

    /// All properties of this node.
    pub fn properties(&self) -> &PropertyMap {
        &self.properties
    }

    /// Edges where this node is source or target.
    ///
    /// The order reflects insertion and removal history only.
    pub fn incident_edges(&self) -> &[Incidence] {
        &self.incident
    }

    /// Number of incidence entries. A self-loop counts twice.
    pub fn degree(&self) -> usize {
        self.incident.len()
    }

    /// Append `edge` to the incidence list and return its slot.
    pub(crate) fn connect_edge(&mut self, edge: EdgeId, endpoint: Endpoint) -> usize {
        let slot = self.incident.len();
        self.incident.push(Incidence { edge, endpoint });
        slot
    }

    /// Swap-remove the entry at `slot`.
    ///
    /// Returns the entry that was moved into `slot`, if any. The caller must
    /// record `slot` as that edge's new position for the returned endpoint.
    pub(crate) fn disconnect_edge(&mut self, slot: usize) -> Option<Incidence> {
        self.incident.swap_remove(slot);
        self.incident.get(slot).copied()
    }
}
