//! Undirected edge records.

use std::fmt;

use crate::vertex::Vertex;

/// An edge between two vertices.
///
/// The record keeps its endpoints in insertion order and compares in that
/// order, so `Edge::new(u, v) != Edge::new(v, u)`. The graph stores one record
/// under both directions, which keeps lookups symmetric regardless.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct Edge {
    first: Vertex,
    second: Vertex,
}

impl Edge {
    /// Creates an edge joining `first` and `second`.
    #[must_use]
    pub fn new(first: Vertex, second: Vertex) -> Self {
        Self { first, second }
    }

    /// Returns both endpoints in stored order.
    #[must_use]
    pub fn endpoints(&self) -> (&Vertex, &Vertex) {
        (&self.first, &self.second)
    }

    /// Returns the first endpoint.
    #[must_use]
    pub fn first(&self) -> &Vertex {
        &self.first
    }

    /// Returns the second endpoint.
    #[must_use]
    pub fn second(&self) -> &Vertex {
        &self.second
    }

    /// Returns `true` when the edge joins `a` and `b`, in either order.
    ///
    /// # Examples
    /// ```
    /// use ugraph_core::{Edge, Vertex};
    ///
    /// let (u, v) = (Vertex::new("u"), Vertex::new("v"));
    /// let edge = Edge::new(u.clone(), v.clone());
    /// assert!(edge.connects(&v, &u));
    /// ```
    #[must_use]
    pub fn connects(&self, a: &Vertex, b: &Vertex) -> bool {
        (self.first == *a && self.second == *b) || (self.first == *b && self.second == *a)
    }

    /// Returns the endpoint opposite `vertex`, or `None` if the edge does not
    /// touch it.
    #[must_use]
    pub fn other(&self, vertex: &Vertex) -> Option<&Vertex> {
        if self.first == *vertex {
            Some(&self.second)
        } else if self.second == *vertex {
            Some(&self.first)
        } else {
            None
        }
    }

    /// Returns `true` when both endpoints are the same vertex.
    #[must_use]
    pub fn is_loop(&self) -> bool {
        self.first == self.second
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Edge({}, {})", self.first, self.second)
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    fn equality_respects_stored_order() {
        let (u, v) = (Vertex::new("u"), Vertex::new("v"));
        let forward = Edge::new(u.clone(), v.clone());

        assert_eq!(forward, Edge::new(u.clone(), v.clone()));
        assert_ne!(forward, Edge::new(v.clone(), u.clone()));
        assert!(forward.connects(&u, &v));
        assert!(Edge::new(v, u).connects(&forward.first, &forward.second));
    }

    #[rstest]
    fn other_returns_opposite_endpoint() {
        let (u, v, w) = (Vertex::new("u"), Vertex::new("v"), Vertex::new("w"));
        let edge = Edge::new(u.clone(), v.clone());

        assert_eq!(edge.other(&u), Some(&v));
        assert_eq!(edge.other(&v), Some(&u));
        assert_eq!(edge.other(&w), None);
    }

    #[rstest]
    fn loops_are_detected() {
        let u = Vertex::new("u");
        assert!(Edge::new(u.clone(), u.clone()).is_loop());
        assert!(!Edge::new(u, Vertex::new("v")).is_loop());
    }

    #[rstest]
    fn display_matches_repr() {
        let edge = Edge::new(Vertex::new("u"), Vertex::new("v"));
        assert_eq!(edge.to_string(), "Edge(Vertex('u'), Vertex('v'))");
    }
}
