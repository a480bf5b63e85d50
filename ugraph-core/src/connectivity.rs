//! Connectivity testing by graph traversal.
//!
//! Visitation state lives in a traversal context scoped to a single call,
//! never on the vertices themselves, so traversals over the same graph are
//! independent of one another.

use std::collections::{HashSet, VecDeque};

use tracing::{debug, instrument};

use crate::{
    error::Result,
    graph::{Graph, unknown_vertex},
    vertex::Vertex,
};

/// Frontier discipline used while exploring the graph.
///
/// Both orders visit the same set of vertices; only the visitation sequence
/// differs.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum TraversalOrder {
    /// First-in-first-out frontier.
    #[default]
    BreadthFirst,
    /// Last-in-first-out frontier.
    DepthFirst,
}

/// Answers reachability questions about a [`Graph`].
///
/// # Examples
/// ```
/// use ugraph_core::{ConnectivityChecker, Edge, Graph, TraversalOrder, Vertex};
///
/// let (u, v, w) = (Vertex::new("u"), Vertex::new("v"), Vertex::new("w"));
/// let graph = Graph::from_parts(
///     [u.clone(), v.clone(), w.clone()],
///     [Edge::new(u.clone(), v.clone())],
/// )?;
///
/// let checker = ConnectivityChecker::new().with_order(TraversalOrder::DepthFirst);
/// assert!(!checker.is_connected(&graph));
/// assert_eq!(checker.connected_components(&graph), vec![vec![u, v], vec![w]]);
/// # Ok::<(), ugraph_core::GraphError>(())
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct ConnectivityChecker {
    order: TraversalOrder,
}

impl ConnectivityChecker {
    /// Creates a checker using breadth-first traversal.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Selects the frontier discipline.
    #[must_use]
    pub fn with_order(mut self, order: TraversalOrder) -> Self {
        self.order = order;
        self
    }

    /// Returns the configured frontier discipline.
    #[must_use]
    pub fn order(&self) -> TraversalOrder {
        self.order
    }

    /// Returns `true` when every vertex is reachable from an arbitrary root.
    ///
    /// The empty graph is connected.
    #[instrument(
        name = "graph.is_connected",
        level = "debug",
        skip(self, graph),
        fields(vertices = graph.vertex_count(), order = ?self.order),
    )]
    pub fn is_connected(&self, graph: &Graph) -> bool {
        let Some(root) = graph.vertices().into_iter().next() else {
            return true;
        };
        let mut context = TraversalContext::new(self.order);
        context.visit(root);
        context.drain(graph);
        let visited = context.visited.len();
        debug!(visited, "traversal finished");
        visited == graph.vertex_count()
    }

    /// Returns every vertex reachable from `root`, including `root`.
    ///
    /// # Errors
    /// Returns [`crate::GraphError::UnknownVertex`] when `root` is not in the
    /// graph.
    pub fn reachable_from(&self, graph: &Graph, root: &Vertex) -> Result<HashSet<Vertex>> {
        if !graph.contains_vertex(root) {
            return Err(unknown_vertex(root));
        }
        let mut context = TraversalContext::new(self.order);
        context.visit(root.clone());
        context.drain(graph);
        Ok(context.visited)
    }

    /// Partitions the vertices into connected components.
    ///
    /// Components are ordered by their earliest-created vertex and list their
    /// members in creation order.
    #[must_use]
    pub fn connected_components(&self, graph: &Graph) -> Vec<Vec<Vertex>> {
        let mut context = TraversalContext::new(self.order);
        let mut components = Vec::new();
        for vertex in graph.vertices() {
            if context.visited.contains(&vertex) {
                continue;
            }
            context.visit(vertex);
            context.drain(graph);
            let mut component = std::mem::take(&mut context.discovered);
            component.sort_unstable();
            components.push(component);
        }
        debug!(components = components.len(), "components collected");
        components
    }
}

/// Returns `true` when `graph` is connected, using breadth-first traversal.
#[must_use]
pub fn is_connected(graph: &Graph) -> bool {
    ConnectivityChecker::new().is_connected(graph)
}

enum Frontier {
    Queue(VecDeque<Vertex>),
    Stack(Vec<Vertex>),
}

impl Frontier {
    fn new(order: TraversalOrder) -> Self {
        match order {
            TraversalOrder::BreadthFirst => Self::Queue(VecDeque::new()),
            TraversalOrder::DepthFirst => Self::Stack(Vec::new()),
        }
    }

    fn push(&mut self, vertex: Vertex) {
        match self {
            Self::Queue(queue) => queue.push_back(vertex),
            Self::Stack(stack) => stack.push(vertex),
        }
    }

    fn pop(&mut self) -> Option<Vertex> {
        match self {
            Self::Queue(queue) => queue.pop_front(),
            Self::Stack(stack) => stack.pop(),
        }
    }
}

struct TraversalContext {
    visited: HashSet<Vertex>,
    discovered: Vec<Vertex>,
    frontier: Frontier,
}

impl TraversalContext {
    fn new(order: TraversalOrder) -> Self {
        Self {
            visited: HashSet::new(),
            discovered: Vec::new(),
            frontier: Frontier::new(order),
        }
    }

    fn visit(&mut self, vertex: Vertex) {
        if self.visited.insert(vertex.clone()) {
            self.discovered.push(vertex.clone());
            self.frontier.push(vertex);
        }
    }

    fn drain(&mut self, graph: &Graph) {
        while let Some(vertex) = self.frontier.pop() {
            let Ok(neighbours) = graph.neighbours(&vertex) else {
                continue;
            };
            for neighbour in neighbours.keys() {
                self.visit(neighbour.clone());
            }
        }
    }
}
