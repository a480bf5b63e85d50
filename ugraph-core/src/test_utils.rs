//! Shared test utilities for `ugraph-core`.

use proptest::test_runner::Config as ProptestConfig;
use ugraph_test_support::ci::property_test_profile::ProptestRunProfile;

use crate::{Edge, Graph, Vertex};

/// Builds a proptest configuration honouring the shared case-count override.
#[must_use]
pub(crate) fn suite_proptest_config(default_cases: u32) -> ProptestConfig {
    let profile = ProptestRunProfile::load(default_cases);
    ProptestConfig {
        cases: profile.cases(),
        ..ProptestConfig::default()
    }
}

/// Creates one vertex per character of `labels`, in order.
#[must_use]
pub(crate) fn labelled_vertices(labels: &str) -> Vec<Vertex> {
    labels.chars().map(|c| Vertex::new(c.to_string())).collect()
}

/// Creates a graph holding `count` unconnected vertices labelled by index.
#[must_use]
pub(crate) fn isolated_graph(count: usize) -> (Vec<Vertex>, Graph) {
    let vertices: Vec<_> = (0..count).map(|i| Vertex::new(i.to_string())).collect();
    let mut graph = Graph::new();
    for vertex in &vertices {
        graph.add_vertex(vertex.clone());
    }
    (vertices, graph)
}

/// Joins consecutive entries of `vertices` into a path.
pub(crate) fn link_path(graph: &mut Graph, vertices: &[Vertex]) {
    for pair in vertices.windows(2) {
        if let [first, second] = pair {
            graph
                .add_edge(Edge::new(first.clone(), second.clone()))
                .expect("path vertices must belong to the graph");
        }
    }
}

/// Asserts that every vertex of `graph` has exactly `degree` neighbours.
pub(crate) fn assert_all_degrees(graph: &Graph, degree: usize) {
    for vertex in graph.vertices() {
        assert_eq!(
            graph.degree(&vertex),
            Ok(degree),
            "vertex {vertex} should have degree {degree}"
        );
    }
}
