//! Structural consistency checks shared by the integration tests.

use substrate_graph::{Endpoint, Graph, Incidence};

/// Assert every storage and adjacency invariant of `graph`.
pub fn assert_consistent(graph: &Graph) {
    for (pos, node) in graph.nodes().iter().enumerate() {
        assert_eq!(node.index(), pos, "node {} index", node.id());
        assert_eq!(graph.node(node.handle()).unwrap().id(), node.id());

        for (slot, entry) in node.incident_edges().iter().enumerate() {
            let edge = graph.find_edge(entry.edge).expect("incident edge is live");
            assert_eq!(edge.endpoint(entry.endpoint), node.id());
            assert_eq!(edge.slot(entry.endpoint), slot, "slot of {}", edge.id());
        }
    }

    let mut incidences = 0;
    for (pos, edge) in graph.edges().iter().enumerate() {
        assert_eq!(edge.index(), pos, "edge {} index", edge.id());
        assert_eq!(graph.find_edge(edge.id()).unwrap().index(), pos);
        for endpoint in [Endpoint::Source, Endpoint::Target] {
            let node = graph.node(edge.endpoint_handle(endpoint)).unwrap();
            assert_eq!(
                node.incident_edges()[edge.slot(endpoint)],
                Incidence {
                    edge: edge.id(),
                    endpoint,
                }
            );
            incidences += 1;
        }
    }
    let listed: usize = graph.nodes().iter().map(|n| n.degree()).sum();
    assert_eq!(listed, incidences);

    let stats = graph.stats();
    assert_eq!(stats.live_nodes(), graph.total_nodes() as u64);
    assert_eq!(stats.live_edges(), graph.total_edges() as u64);
}
