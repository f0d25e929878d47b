//! Core graph types and operations.
//!
//! This module defines the fundamental building blocks:
//! - [`Node`]: vertices with properties and an incidence list
//! - [`Edge`]: directed connections between two nodes
//! - [`Graph`]: the container that owns both and publishes changes

mod edge;
mod node;
mod property;
mod substrate;
mod types;

pub use edge::Edge;
pub use node::Node;
pub use property::{PropertyMap, PropertyValue};
pub use substrate::{Graph, GraphStats};
pub use types::{EdgeId, EdgeRef, Endpoint, GraphId, Incidence, NodeId, NodeRef};
