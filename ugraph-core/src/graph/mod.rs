//! Identity-keyed undirected adjacency graph.
//!
//! The graph maps every vertex to a neighbour table holding the edge record
//! that connects them. Each edge is stored under both of its endpoints so
//! lookups are symmetric, and replacing or removing an edge always touches
//! both directions together.

use std::{
    collections::{HashMap, HashSet},
    fmt,
};

use tracing::warn;

use crate::{
    connectivity,
    edge::Edge,
    error::{GraphError, Result},
    random::RandomGraphGenerator,
    regular::{RegularGraphBuilder, RegularityReport},
    vertex::Vertex,
};

type NeighbourTable = HashMap<Vertex, Edge>;

/// An undirected graph over shared [`Vertex`] handles.
///
/// Listings returned by the accessors are ordered by vertex creation order so
/// repeated calls and seeded algorithms are reproducible.
///
/// # Examples
/// ```
/// use ugraph_core::{Edge, Graph, Vertex};
///
/// let (u, v) = (Vertex::new("u"), Vertex::new("v"));
/// let e = Edge::new(u.clone(), v.clone());
/// let mut graph = Graph::from_parts([u.clone(), v.clone()], [e.clone()])?;
/// assert_eq!(graph.get_edge(&u, &v), Some(&e));
/// assert_eq!(graph.get_edge(&v, &u), Some(&e));
/// assert_eq!(graph.edges(), vec![e.clone()]);
///
/// graph.remove_edge(&e)?;
/// assert!(graph.edges().is_empty());
/// # Ok::<(), ugraph_core::GraphError>(())
/// ```
#[derive(Clone, Debug, Default)]
pub struct Graph {
    adjacency: HashMap<Vertex, NeighbourTable>,
}

impl Graph {
    /// Creates an empty graph.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a graph from `vertices`, then adds `edges` in order.
    ///
    /// # Errors
    /// Returns [`GraphError::UnknownVertex`] for the first edge whose endpoint
    /// is not among `vertices`.
    pub fn from_parts(
        vertices: impl IntoIterator<Item = Vertex>,
        edges: impl IntoIterator<Item = Edge>,
    ) -> Result<Self> {
        let mut graph = Self::new();
        for vertex in vertices {
            graph.add_vertex(vertex);
        }
        for edge in edges {
            graph.add_edge(edge)?;
        }
        Ok(graph)
    }

    /// Adds `vertex` with an empty neighbour table.
    ///
    /// Re-adding a vertex that is already present resets it: its edges are
    /// discarded, and so are the matching entries held by its former
    /// neighbours.
    pub fn add_vertex(&mut self, vertex: Vertex) {
        let Some(previous) = self.adjacency.insert(vertex.clone(), NeighbourTable::new()) else {
            return;
        };
        if previous.is_empty() {
            return;
        }

        warn!(
            vertex = %vertex,
            discarded_edges = previous.len(),
            "vertex re-added; discarding its edges"
        );
        for neighbour in previous.keys().filter(|neighbour| **neighbour != vertex) {
            if let Some(table) = self.adjacency.get_mut(neighbour) {
                table.remove(&vertex);
            }
        }
    }

    /// Removes `vertex` together with every edge incident to it.
    ///
    /// # Errors
    /// Returns [`GraphError::UnknownVertex`] when `vertex` is not in the graph.
    pub fn remove_vertex(&mut self, vertex: &Vertex) -> Result<()> {
        let table = self
            .adjacency
            .remove(vertex)
            .ok_or_else(|| unknown_vertex(vertex))?;
        for neighbour in table.keys() {
            if let Some(neighbour_table) = self.adjacency.get_mut(neighbour) {
                neighbour_table.remove(vertex);
            }
        }
        Ok(())
    }

    /// Adds `edge` under both endpoints, replacing any edge already joining
    /// them.
    ///
    /// # Errors
    /// Returns [`GraphError::UnknownVertex`] when either endpoint was never
    /// added; the graph is left unchanged.
    pub fn add_edge(&mut self, edge: Edge) -> Result<()> {
        let (first, second) = edge.endpoints();
        self.ensure_vertex(first)?;
        self.ensure_vertex(second)?;
        self.link(edge);
        Ok(())
    }

    /// Returns the edge joining `a` and `b`, or `None` when they are not
    /// connected or either is absent.
    #[must_use]
    pub fn get_edge(&self, a: &Vertex, b: &Vertex) -> Option<&Edge> {
        self.adjacency.get(a)?.get(b)
    }

    /// Returns `true` when `a` and `b` are connected.
    #[must_use]
    pub fn has_edge(&self, a: &Vertex, b: &Vertex) -> bool {
        self.get_edge(a, b).is_some()
    }

    /// Removes the connection between the endpoints of `edge`.
    ///
    /// The endpoints are matched in either order, so removing `(w, v)` deletes
    /// an edge stored as `(v, w)`.
    ///
    /// # Errors
    /// Returns [`GraphError::MissingEdge`] when no such connection exists.
    pub fn remove_edge(&mut self, edge: &Edge) -> Result<()> {
        let (first, second) = edge.endpoints();
        if !self.has_edge(first, second) {
            return Err(GraphError::MissingEdge {
                first: first.id(),
                second: second.id(),
            });
        }
        if let Some(table) = self.adjacency.get_mut(first) {
            table.remove(second);
        }
        if let Some(table) = self.adjacency.get_mut(second) {
            table.remove(first);
        }
        Ok(())
    }

    /// Returns every vertex in creation order.
    #[must_use]
    pub fn vertices(&self) -> Vec<Vertex> {
        let mut vertices: Vec<_> = self.adjacency.keys().cloned().collect();
        vertices.sort_unstable();
        vertices
    }

    /// Returns each distinct edge exactly once.
    #[must_use]
    pub fn edges(&self) -> Vec<Edge> {
        let distinct: HashSet<&Edge> = self
            .adjacency
            .values()
            .flat_map(NeighbourTable::values)
            .collect();
        let mut edges: Vec<Edge> = distinct.into_iter().cloned().collect();
        edges.sort_unstable_by_key(|edge| (edge.first().id(), edge.second().id()));
        edges
    }

    /// Returns the neighbours of `vertex` in creation order.
    ///
    /// # Errors
    /// Returns [`GraphError::UnknownVertex`] when `vertex` is not in the graph.
    pub fn out_vertices(&self, vertex: &Vertex) -> Result<Vec<Vertex>> {
        let mut neighbours: Vec<_> = self.neighbours(vertex)?.keys().cloned().collect();
        neighbours.sort_unstable();
        Ok(neighbours)
    }

    /// Returns the edges incident to `vertex`, ordered by neighbour.
    ///
    /// # Errors
    /// Returns [`GraphError::UnknownVertex`] when `vertex` is not in the graph.
    pub fn out_edges(&self, vertex: &Vertex) -> Result<Vec<Edge>> {
        let table = self.neighbours(vertex)?;
        let mut entries: Vec<_> = table.iter().collect();
        entries.sort_unstable_by(|(left, _), (right, _)| left.cmp(right));
        Ok(entries.into_iter().map(|(_, edge)| edge.clone()).collect())
    }

    /// Returns the number of neighbours of `vertex`.
    ///
    /// # Errors
    /// Returns [`GraphError::UnknownVertex`] when `vertex` is not in the graph.
    pub fn degree(&self, vertex: &Vertex) -> Result<usize> {
        Ok(self.neighbours(vertex)?.len())
    }

    /// Returns `true` when `vertex` has been added to the graph.
    #[must_use]
    pub fn contains_vertex(&self, vertex: &Vertex) -> bool {
        self.adjacency.contains_key(vertex)
    }

    /// Returns the number of vertices.
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Returns the number of distinct edges.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.adjacency
            .iter()
            .map(|(vertex, table)| table.keys().filter(|neighbour| vertex <= *neighbour).count())
            .sum()
    }

    /// Returns `true` when the graph has no vertices.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }

    /// Connects every distinct pair of vertices exactly once, producing the
    /// complete graph.
    pub fn add_all_edges(&mut self) {
        let vertices = self.vertices();
        for (index, first) in vertices.iter().enumerate() {
            for second in vertices.iter().skip(index + 1) {
                self.link(Edge::new(first.clone(), second.clone()));
            }
        }
    }

    /// Returns `true` when every vertex has the same degree.
    ///
    /// The empty graph is regular.
    #[must_use]
    pub fn is_regular(&self) -> bool {
        let mut degrees = self.adjacency.values().map(NeighbourTable::len);
        match degrees.next() {
            Some(first) => degrees.all(|degree| degree == first),
            None => true,
        }
    }

    /// Returns `true` when every vertex is reachable from every other vertex.
    ///
    /// Uses the default [`crate::ConnectivityChecker`].
    #[must_use]
    pub fn is_connected(&self) -> bool {
        connectivity::is_connected(self)
    }

    /// Greedily adds edges until every vertex has `degree` neighbours, using
    /// the best-effort policy of [`RegularGraphBuilder`].
    ///
    /// # Errors
    /// Returns [`GraphError::InvalidConfiguration`] when no `degree`-regular
    /// graph exists on this many vertices.
    pub fn add_regular_edges(&mut self, degree: usize) -> Result<RegularityReport> {
        RegularGraphBuilder::new(degree).apply(self)
    }

    /// Connects each distinct pair of vertices independently with
    /// probability `p`, returning the number of edges added.
    ///
    /// # Errors
    /// Returns [`GraphError::InvalidProbability`] when `p` lies outside
    /// `[0, 1]`.
    pub fn add_random_edges(&mut self, p: f64) -> Result<usize> {
        Ok(RandomGraphGenerator::new(p)?.apply(self))
    }

    pub(crate) fn neighbours(&self, vertex: &Vertex) -> Result<&NeighbourTable> {
        self.adjacency
            .get(vertex)
            .ok_or_else(|| unknown_vertex(vertex))
    }

    /// Inserts `edge` under both endpoints. Callers guarantee both endpoints
    /// are present.
    pub(crate) fn link(&mut self, edge: Edge) {
        let (first, second) = (edge.first().clone(), edge.second().clone());
        if let Some(table) = self.adjacency.get_mut(&second) {
            table.insert(first.clone(), edge.clone());
        }
        if let Some(table) = self.adjacency.get_mut(&first) {
            table.insert(second, edge);
        }
    }

    fn ensure_vertex(&self, vertex: &Vertex) -> Result<()> {
        if self.contains_vertex(vertex) {
            Ok(())
        } else {
            Err(unknown_vertex(vertex))
        }
    }
}

impl fmt::Display for Graph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Graph([")?;
        for (index, vertex) in self.vertices().iter().enumerate() {
            if index > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{vertex}")?;
        }
        f.write_str("], [")?;
        for (index, edge) in self.edges().iter().enumerate() {
            if index > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{edge}")?;
        }
        f.write_str("])")
    }
}

pub(crate) fn unknown_vertex(vertex: &Vertex) -> GraphError {
    GraphError::UnknownVertex {
        vertex: vertex.id(),
        label: vertex.label(),
    }
}

#[cfg(test)]
mod tests;
