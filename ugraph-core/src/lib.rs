//! In-memory undirected graph library.
//!
//! Provides an identity-keyed adjacency [`Graph`] over [`Vertex`] handles and
//! [`Edge`] records, together with the three algorithms built on top of it:
//!
//! - [`ConnectivityChecker`] answers whether every vertex is reachable from
//!   every other vertex.
//! - [`RegularGraphBuilder`] greedily assigns edges until every vertex has the
//!   requested degree.
//! - [`RandomGraphGenerator`] samples an Erdős–Rényi `G(n, p)` edge set.
//!
//! The library emits diagnostics through `tracing` but never installs a
//! subscriber; binaries and tests decide where events go.
//!
//! # Examples
//! ```
//! use ugraph_core::{Graph, Vertex};
//!
//! let vertices: Vec<_> = (0..256).map(|i| Vertex::new(i.to_string())).collect();
//! let mut graph = Graph::from_parts(vertices.iter().cloned(), [])?;
//! assert!(!graph.is_connected());
//!
//! graph.add_all_edges();
//! assert!(graph.is_connected());
//! assert_eq!(graph.edge_count(), 256 * 255 / 2);
//! # Ok::<(), ugraph_core::GraphError>(())
//! ```

mod connectivity;
mod edge;
mod error;
mod graph;
mod random;
mod regular;
mod vertex;

#[cfg(test)]
pub(crate) mod test_utils;

pub use crate::{
    connectivity::{ConnectivityChecker, TraversalOrder, is_connected},
    edge::Edge,
    error::{GraphError, GraphErrorCode, Result},
    graph::Graph,
    random::RandomGraphGenerator,
    regular::{DegreeShortfall, RegularGraphBuilder, RegularityPolicy, RegularityReport},
    vertex::{Vertex, VertexId},
};
