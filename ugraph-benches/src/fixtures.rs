//! Seeded graph fixtures for benchmarking.
//!
//! Fixtures are rebuilt from a seed so every benchmark run measures the same
//! topology.

use rand::{Rng, SeedableRng, rngs::SmallRng};
use ugraph_core::{Edge, Graph, RegularGraphBuilder, Vertex};

use crate::error::BenchSetupError;

/// Creates a graph of `vertex_count` unconnected vertices labelled by index.
///
/// # Errors
/// Returns [`BenchSetupError::ZeroValue`] when `vertex_count` is zero.
pub fn isolated(vertex_count: usize) -> Result<Graph, BenchSetupError> {
    if vertex_count == 0 {
        return Err(BenchSetupError::ZeroValue {
            context: "vertex_count",
        });
    }
    Ok(Graph::from_parts(
        (0..vertex_count).map(|i| Vertex::new(i.to_string())),
        [],
    )?)
}

/// Creates a random recursive tree: each vertex after the first joins a
/// uniformly chosen earlier vertex.
///
/// The result is connected with `vertex_count - 1` edges, which makes it the
/// sparsest input a full traversal must cover.
///
/// # Examples
/// ```
/// use ugraph_benches::fixtures::random_tree;
///
/// let graph = random_tree(32, 7).expect("non-empty fixture");
/// assert_eq!(graph.edge_count(), 31);
/// assert!(graph.is_connected());
/// ```
///
/// # Errors
/// Returns [`BenchSetupError::ZeroValue`] when `vertex_count` is zero.
pub fn random_tree(vertex_count: usize, seed: u64) -> Result<Graph, BenchSetupError> {
    let mut graph = isolated(vertex_count)?;
    let vertices = graph.vertices();
    let mut rng = SmallRng::seed_from_u64(seed);
    for (index, vertex) in vertices.iter().enumerate().skip(1) {
        let parent = rng.gen_range(0..index);
        if let Some(parent) = vertices.get(parent) {
            graph.add_edge(Edge::new(parent.clone(), vertex.clone()))?;
        }
    }
    Ok(graph)
}

/// Creates the complete graph on `vertex_count` vertices.
///
/// # Errors
/// Returns [`BenchSetupError::ZeroValue`] when `vertex_count` is zero.
pub fn complete(vertex_count: usize) -> Result<Graph, BenchSetupError> {
    let mut graph = isolated(vertex_count)?;
    graph.add_all_edges();
    Ok(graph)
}

/// Creates a `degree`-regular graph, failing if the builder falls short.
///
/// # Errors
/// Returns [`BenchSetupError::Graph`] for an infeasible configuration and
/// [`BenchSetupError::IrregularFixture`] when vertices are left short.
pub fn regular(vertex_count: usize, degree: usize, seed: u64) -> Result<Graph, BenchSetupError> {
    let mut graph = isolated(vertex_count)?;
    let report = RegularGraphBuilder::new(degree)
        .with_rng_seed(seed)
        .apply(&mut graph)?;
    if !report.is_regular() {
        return Err(BenchSetupError::IrregularFixture {
            degree,
            stranded: report.shortfalls().len(),
        });
    }
    Ok(graph)
}
