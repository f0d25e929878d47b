//! The graph container: dense storage, id generation and notifications.

use super::edge::Edge;
use super::node::Node;
use super::property::PropertyValue;
use super::types::{EdgeId, EdgeRef, Endpoint, GraphId, NodeId, NodeRef};
use crate::config::GraphConfig;
use crate::error::{GraphError, Result};
use crate::event::{EventBus, GraphEvent, GraphEventKind, ListenerId};
use log::{debug, trace};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Lifetime counters of structural changes.
///
/// Counters only ever grow. At all times
/// `nodes_added - nodes_removed == total_nodes()` and likewise for edges.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphStats {
    /// Nodes created
    pub nodes_added: u64,
    /// Nodes removed
    pub nodes_removed: u64,
    /// Edges created
    pub edges_added: u64,
    /// Edges removed, directly or by node removal
    pub edges_removed: u64,
}

impl GraphStats {
    /// Nodes currently live according to the counters.
    pub fn live_nodes(&self) -> u64 {
        self.nodes_added - self.nodes_removed
    }

    /// Edges currently live according to the counters.
    pub fn live_edges(&self) -> u64 {
        self.edges_added - self.edges_removed
    }
}

/// In-memory graph of nodes and directed edges.
///
/// Nodes and edges live in dense vectors. Removal moves the last element
/// into the freed position, so insertion and removal are O(1) amortized and
/// storage order carries no meaning. Every entity records its own position
/// and each edge records its slot in both endpoints' incidence lists; these
/// records are fixed up on every move.
///
/// Callers refer to entities through [`NodeRef`] and [`EdgeRef`] handles.
/// A handle is accepted only by the graph that issued it and only while the
/// entity is live.
#[derive(Debug)]
pub struct Graph {
    id: GraphId,
    config: GraphConfig,
    nodes: Vec<Node>,
    edges: Vec<Edge>,
    // Id to storage position; always equal to each entity's `index`
    node_index: HashMap<NodeId, usize>,
    edge_index: HashMap<EdgeId, usize>,
    // Monotonic id generators, never reset
    node_counter: u64,
    edge_counter: u64,
    stats: GraphStats,
    events: EventBus,
}

impl Default for Graph {
    fn default() -> Self {
        Self::new()
    }
}

impl Graph {
    /// Create an empty graph with default configuration.
    pub fn new() -> Self {
        Self::with_config(GraphConfig::default())
    }

    /// Create an empty graph with the given configuration.
    pub fn with_config(config: GraphConfig) -> Self {
        let id = GraphId::new();
        debug!("Creating graph {id}");
        Self {
            id,
            nodes: Vec::with_capacity(config.initial_node_capacity),
            edges: Vec::with_capacity(config.initial_edge_capacity),
            node_index: HashMap::with_capacity(config.initial_node_capacity),
            edge_index: HashMap::with_capacity(config.initial_edge_capacity),
            node_counter: 0,
            edge_counter: 0,
            stats: GraphStats::default(),
            events: EventBus::new(),
            config,
        }
    }

    /// Identity of this graph instance.
    pub fn id(&self) -> GraphId {
        self.id
    }

    /// Configuration this graph was created with.
    pub fn config(&self) -> &GraphConfig {
        &self.config
    }

    /// Add a node and return its handle.
    ///
    /// Publishes `nodeAdded` unless events are suppressed.
    pub fn add_node(&mut self) -> NodeRef {
        let id = self.next_node_id();
        let index = self.nodes.len();
        debug!("Adding node: id={id}, index={index}");

        self.nodes.push(Node::new(self.id, id, index));
        self.node_index.insert(id, index);
        self.stats.nodes_added += 1;

        if !self.config.suppress_events {
            self.events.publish(&GraphEvent::NodeAdded(&self.nodes[index]));
        }

        NodeRef { graph: self.id, id }
    }

    /// Add a directed edge from `source` to `target`.
    ///
    /// Both nodes must be live nodes of this graph. `source == target`
    /// creates a self-loop. Publishes `edgeAdded` regardless of event
    /// suppression.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::ForeignNode`] or [`GraphError::NodeNotFound`]
    /// if either handle is rejected. The graph is left unchanged.
    pub fn add_edge(&mut self, source: NodeRef, target: NodeRef) -> Result<EdgeRef> {
        let source_pos = self.resolve_node(source)?;
        let target_pos = self.resolve_node(target)?;

        let id = self.next_edge_id();
        let index = self.edges.len();
        debug!(
            "Adding edge: id={id}, source={}, target={}",
            source.id, target.id
        );

        let source_slot = self.nodes[source_pos].connect_edge(id, Endpoint::Source);
        let target_slot = self.nodes[target_pos].connect_edge(id, Endpoint::Target);

        self.edges.push(Edge::new(
            self.id,
            id,
            index,
            (source.id, source_slot),
            (target.id, target_slot),
        ));
        self.edge_index.insert(id, index);
        self.stats.edges_added += 1;

        self.events.publish(&GraphEvent::EdgeAdded(&self.edges[index]));

        Ok(EdgeRef { graph: self.id, id })
    }

    /// Remove a node together with every edge incident to it.
    ///
    /// Incident edges are removed first (each publishing `edgeRemoved`),
    /// then the node, which publishes `nodeRemoved` unless events are
    /// suppressed. Returns the detached node.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::ForeignNode`] or [`GraphError::NodeNotFound`]
    /// if the handle is rejected. The graph is left unchanged.
    pub fn remove_node(&mut self, node: NodeRef) -> Result<Node> {
        let index = self.resolve_node(node)?;
        debug!(
            "Deleting node: id={}, incident edges={}",
            node.id,
            self.nodes[index].degree()
        );

        // Edge removal never relocates nodes, so `index` stays valid.
        while let Some(incidence) = self.nodes[index].incident_edges().last().copied() {
            self.remove_edge(EdgeRef {
                graph: self.id,
                id: incidence.edge,
            })?;
        }

        let removed = self.nodes.swap_remove(index);
        self.node_index.remove(&removed.id());
        if let Some(moved) = self.nodes.get_mut(index) {
            trace!("Node {} moved to index {index}", moved.id());
            moved.index = index;
            self.node_index.insert(moved.id(), index);
        }
        self.stats.nodes_removed += 1;

        if !self.config.suppress_events {
            self.events.publish(&GraphEvent::NodeRemoved(&removed));
        }

        Ok(removed)
    }

    /// Remove an edge and detach it from both endpoints.
    ///
    /// Publishes `edgeRemoved` regardless of event suppression. Returns the
    /// detached edge.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::ForeignEdge`] or [`GraphError::EdgeNotFound`]
    /// if the handle is rejected. The graph is left unchanged.
    pub fn remove_edge(&mut self, edge: EdgeRef) -> Result<Edge> {
        let index = self.resolve_edge(edge)?;
        debug!("Deleting edge: id={}", edge.id);

        // For a self-loop the first detach may move the target entry, so
        // each endpoint reads its slot fresh.
        self.detach(index, Endpoint::Source);
        self.detach(index, Endpoint::Target);

        let removed = self.edges.swap_remove(index);
        self.edge_index.remove(&removed.id());
        if let Some(moved) = self.edges.get_mut(index) {
            trace!("Edge {} moved to index {index}", moved.id());
            moved.index = index;
            self.edge_index.insert(moved.id(), index);
        }
        self.stats.edges_removed += 1;

        self.events.publish(&GraphEvent::EdgeRemoved(&removed));

        Ok(removed)
    }

    /// All live nodes in storage order.
    ///
    /// The order changes whenever a node is removed.
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// All live edges in storage order.
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Number of live nodes.
    pub fn total_nodes(&self) -> usize {
        self.nodes.len()
    }

    /// Number of live edges.
    pub fn total_edges(&self) -> usize {
        self.edges.len()
    }

    /// Lifetime add/remove counters.
    pub fn stats(&self) -> GraphStats {
        self.stats
    }

    /// True if `node` was issued by this graph and is still live.
    pub fn is_node(&self, node: NodeRef) -> bool {
        self.resolve_node(node).is_ok()
    }

    /// True if `edge` was issued by this graph and is still live.
    pub fn is_edge(&self, edge: EdgeRef) -> bool {
        self.resolve_edge(edge).is_ok()
    }

    /// Look up a live node.
    ///
    /// # Errors
    ///
    /// Returns an error if the handle is rejected.
    pub fn node(&self, node: NodeRef) -> Result<&Node> {
        let index = self.resolve_node(node)?;
        Ok(&self.nodes[index])
    }

    /// Look up a live node for property updates.
    ///
    /// # Errors
    ///
    /// Returns an error if the handle is rejected.
    pub fn node_mut(&mut self, node: NodeRef) -> Result<&mut Node> {
        let index = self.resolve_node(node)?;
        Ok(&mut self.nodes[index])
    }

    /// Look up a live edge.
    ///
    /// # Errors
    ///
    /// Returns an error if the handle is rejected.
    pub fn edge(&self, edge: EdgeRef) -> Result<&Edge> {
        let index = self.resolve_edge(edge)?;
        Ok(&self.edges[index])
    }

    /// Look up a live edge for property updates.
    ///
    /// # Errors
    ///
    /// Returns an error if the handle is rejected.
    pub fn edge_mut(&mut self, edge: EdgeRef) -> Result<&mut Edge> {
        let index = self.resolve_edge(edge)?;
        Ok(&mut self.edges[index])
    }

    /// Look up a live node by raw id.
    pub fn find_node(&self, id: NodeId) -> Option<&Node> {
        self.node_index.get(&id).map(|&index| &self.nodes[index])
    }

    /// Look up a live edge by raw id, e.g. from an incidence entry.
    pub fn find_edge(&self, id: EdgeId) -> Option<&Edge> {
        self.edge_index.get(&id).map(|&index| &self.edges[index])
    }

    /// Set a node property and return the stored value.
    pub fn set_node_property(
        &mut self,
        node: NodeRef,
        name: impl Into<String>,
        value: impl Into<PropertyValue>,
    ) -> Result<&PropertyValue> {
        Ok(self.node_mut(node)?.set_property(name, value))
    }

    /// Set an edge property and return the stored value.
    pub fn set_edge_property(
        &mut self,
        edge: EdgeRef,
        name: impl Into<String>,
        value: impl Into<PropertyValue>,
    ) -> Result<&PropertyValue> {
        Ok(self.edge_mut(edge)?.set_property(name, value))
    }

    /// Whether node notifications are currently suppressed.
    pub fn events_suppressed(&self) -> bool {
        self.config.suppress_events
    }

    /// Turn node notification suppression on or off.
    ///
    /// Edge notifications are unaffected.
    pub fn set_events_suppressed(&mut self, suppress: bool) {
        self.config.suppress_events = suppress;
    }

    /// Register a listener for one kind of change.
    pub fn subscribe<F>(&mut self, kind: GraphEventKind, listener: F) -> ListenerId
    where
        F: FnMut(&GraphEvent<'_>) + 'static,
    {
        self.events.subscribe(kind, listener)
    }

    /// Register a listener by event name (`nodeAdded`, `edgeAdded`,
    /// `nodeRemoved`, `edgeRemoved`).
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::UnknownEvent`] for any other name.
    pub fn subscribe_named<F>(&mut self, name: &str, listener: F) -> Result<ListenerId>
    where
        F: FnMut(&GraphEvent<'_>) + 'static,
    {
        let kind = name.parse::<GraphEventKind>()?;
        Ok(self.events.subscribe(kind, listener))
    }

    /// Remove a listener. Returns false if it was not registered.
    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        self.events.unsubscribe(id)
    }

    /// Number of listeners registered for `kind`.
    pub fn listener_count(&self, kind: GraphEventKind) -> usize {
        self.events.listener_count(kind)
    }

    // Private helper methods

    fn next_node_id(&mut self) -> NodeId {
        let id = NodeId::new(self.node_counter);
        self.node_counter += 1;
        id
    }

    fn next_edge_id(&mut self) -> EdgeId {
        let id = EdgeId::new(self.edge_counter);
        self.edge_counter += 1;
        id
    }

    fn resolve_node(&self, node: NodeRef) -> Result<usize> {
        if node.graph != self.id {
            debug!("Rejecting node {} from graph {}", node.id, node.graph);
            return Err(GraphError::ForeignNode {
                node_id: node.id,
                graph_id: node.graph,
            });
        }
        self.node_index
            .get(&node.id)
            .copied()
            .ok_or(GraphError::NodeNotFound { node_id: node.id })
    }

    fn resolve_edge(&self, edge: EdgeRef) -> Result<usize> {
        if edge.graph != self.id {
            debug!("Rejecting edge {} from graph {}", edge.id, edge.graph);
            return Err(GraphError::ForeignEdge {
                edge_id: edge.id,
                graph_id: edge.graph,
            });
        }
        self.edge_index
            .get(&edge.id)
            .copied()
            .ok_or(GraphError::EdgeNotFound { edge_id: edge.id })
    }

    /// Remove the edge at `edge_pos` from the incidence list of its node at
    /// `endpoint`, fixing up the slot of whichever entry fills the gap.
    fn detach(&mut self, edge_pos: usize, endpoint: Endpoint) {
        let edge = &self.edges[edge_pos];
        let node_id = edge.endpoint(endpoint);
        let slot = edge.slot(endpoint);
        let node_pos = self.node_index[&node_id];

        if let Some(moved) = self.nodes[node_pos].disconnect_edge(slot) {
            trace!(
                "Edge {} ({}) moved to slot {slot} of node {node_id}",
                moved.edge,
                moved.endpoint
            );
            let moved_pos = self.edge_index[&moved.edge];
            self.edges[moved_pos].set_slot(moved.endpoint, slot);
        }
    }
}
