//! Structural change notifications.
//!
//! A [`Graph`](crate::Graph) owns one [`EventBus`]. Listeners subscribe to a
//! single [`GraphEventKind`] and are called synchronously, in registration
//! order, with the affected entity.

use crate::error::{GraphError, Result};
use crate::graph::{Edge, Node};
use log::trace;
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

/// Kind of structural change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GraphEventKind {
    /// A node was appended to storage
    NodeAdded,
    /// An edge was appended to storage
    EdgeAdded,
    /// A node was removed, after its incident edges
    NodeRemoved,
    /// An edge was removed
    EdgeRemoved,
}

impl GraphEventKind {
    /// Every kind, in declaration order.
    pub const ALL: [GraphEventKind; 4] = [
        GraphEventKind::NodeAdded,
        GraphEventKind::EdgeAdded,
        GraphEventKind::NodeRemoved,
        GraphEventKind::EdgeRemoved,
    ];

    /// Canonical event name.
    pub fn as_str(&self) -> &'static str {
        match self {
            GraphEventKind::NodeAdded => "nodeAdded",
            GraphEventKind::EdgeAdded => "edgeAdded",
            GraphEventKind::NodeRemoved => "nodeRemoved",
            GraphEventKind::EdgeRemoved => "edgeRemoved",
        }
    }
}

impl fmt::Display for GraphEventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for GraphEventKind {
    type Err = GraphError;

    /// Accepts `nodeAdded`, `nodeadded` and `node_added` spellings.
    fn from_str(name: &str) -> Result<Self> {
        let normalized: String = name
            .chars()
            .filter(|c| *c != '_')
            .map(|c| c.to_ascii_lowercase())
            .collect();
        match normalized.as_str() {
            "nodeadded" => Ok(GraphEventKind::NodeAdded),
            "edgeadded" => Ok(GraphEventKind::EdgeAdded),
            "noderemoved" => Ok(GraphEventKind::NodeRemoved),
            "edgeremoved" => Ok(GraphEventKind::EdgeRemoved),
            _ => Err(GraphError::UnknownEvent {
                name: name.to_string(),
            }),
        }
    }
}

/// A structural change, borrowing the affected entity.
///
/// For removals the entity is already detached from the graph.
#[derive(Debug, Clone, Copy)]
pub enum GraphEvent<'a> {
    /// Node was added
    NodeAdded(&'a Node),
    /// Edge was added
    EdgeAdded(&'a Edge),
    /// Node was removed
    NodeRemoved(&'a Node),
    /// Edge was removed
    EdgeRemoved(&'a Edge),
}

impl<'a> GraphEvent<'a> {
    /// Kind of this event.
    pub fn kind(&self) -> GraphEventKind {
        match self {
            GraphEvent::NodeAdded(_) => GraphEventKind::NodeAdded,
            GraphEvent::EdgeAdded(_) => GraphEventKind::EdgeAdded,
            GraphEvent::NodeRemoved(_) => GraphEventKind::NodeRemoved,
            GraphEvent::EdgeRemoved(_) => GraphEventKind::EdgeRemoved,
        }
    }

    /// The affected node, for node events.
    pub fn node(&self) -> Option<&'a Node> {
        match *self {
            GraphEvent::NodeAdded(node) | GraphEvent::NodeRemoved(node) => Some(node),
            _ => None,
        }
    }

    /// The affected edge, for edge events.
    pub fn edge(&self) -> Option<&'a Edge> {
        match *self {
            GraphEvent::EdgeAdded(edge) | GraphEvent::EdgeRemoved(edge) => Some(edge),
            _ => None,
        }
    }
}

/// Token returned by [`EventBus::subscribe`], used to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

type Listener = Box<dyn FnMut(&GraphEvent<'_>)>;

/// Minimal synchronous publish/subscribe dispatcher.
#[derive(Default)]
pub struct EventBus {
    next_listener: u64,
    listeners: HashMap<GraphEventKind, Vec<(ListenerId, Listener)>>,
}

impl EventBus {
    /// Create a bus with no listeners.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `listener` for events of `kind`.
    pub fn subscribe<F>(&mut self, kind: GraphEventKind, listener: F) -> ListenerId
    where
        F: FnMut(&GraphEvent<'_>) + 'static,
    {
        let id = ListenerId(self.next_listener);
        self.next_listener += 1;
        self.listeners
            .entry(kind)
            .or_default()
            .push((id, Box::new(listener)));
        trace!("Listener {} subscribed to {kind}", id.0);
        id
    }

    /// Remove a listener. Returns false if it was not registered.
    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        for listeners in self.listeners.values_mut() {
            if let Some(pos) = listeners.iter().position(|(lid, _)| *lid == id) {
                // Vec::remove keeps the remaining listeners in registration order.
                listeners.remove(pos);
                trace!("Listener {} unsubscribed", id.0);
                return true;
            }
        }
        false
    }

    /// Number of listeners registered for `kind`.
    pub fn listener_count(&self, kind: GraphEventKind) -> usize {
        self.listeners.get(&kind).map_or(0, Vec::len)
    }

    /// Call every listener registered for the event's kind.
    pub fn publish(&mut self, event: &GraphEvent<'_>) {
        let kind = event.kind();
        if let Some(listeners) = self.listeners.get_mut(&kind) {
            trace!("Dispatching {kind} to {} listener(s)", listeners.len());
            for (_, listener) in listeners.iter_mut() {
                listener(event);
            }
        }
    }
}

impl fmt::Debug for EventBus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let counts: HashMap<&str, usize> = self
            .listeners
            .iter()
            .map(|(kind, listeners)| (kind.as_str(), listeners.len()))
            .collect();
        f.debug_struct("EventBus")
            .field("listeners", &counts)
            .finish()
    }
}
