//! Unit test binary for substrate-graph.

mod edge_test;
mod event_test;
mod node_test;
