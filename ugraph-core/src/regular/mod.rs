//! Greedy degree-regular edge assignment.
//!
//! Vertices are completed one at a time in creation order. Each vertex below
//! the target degree draws partners from a shrinking pool of non-adjacent
//! vertices that still need edges, preferring the partners with the largest
//! remaining need and breaking ties at random. Edges already in the graph
//! count toward each vertex's degree, so repeated calls can raise the degree
//! incrementally.
//!
//! The pass is a heuristic. Starting from an edgeless graph it reaches the
//! target for every feasible vertex count and degree we have exercised, but
//! pre-existing edges can strand a vertex whose remaining candidates are all
//! adjacent or already full. [`RegularityPolicy`] decides whether such a result
//! is accepted and reported or retried and rejected.

use std::num::NonZeroUsize;

use rand::{Rng, SeedableRng, rngs::SmallRng, seq::SliceRandom};
use tracing::{debug, instrument, warn};

use crate::{
    edge::Edge,
    error::{GraphError, Result},
    graph::Graph,
    vertex::Vertex,
};

/// How [`RegularGraphBuilder`] treats vertices left below the target degree.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum RegularityPolicy {
    /// Keep the greedy result and list under-served vertices in the report.
    #[default]
    BestEffort,
    /// Retry from the original graph with fresh draws, failing with
    /// [`GraphError::DegreeShortfall`] once `max_attempts` passes all strand a
    /// vertex. A failed run leaves the graph as it was before the call.
    Strict {
        /// Number of greedy passes to attempt.
        max_attempts: NonZeroUsize,
    },
}

/// A vertex that finished below the requested degree.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DegreeShortfall {
    vertex: Vertex,
    degree: usize,
    target: usize,
}

impl DegreeShortfall {
    /// Returns the under-served vertex.
    #[must_use]
    pub fn vertex(&self) -> &Vertex {
        &self.vertex
    }

    /// Returns the degree the vertex ended with.
    #[must_use]
    pub fn degree(&self) -> usize {
        self.degree
    }

    /// Returns how many edges the vertex is missing.
    #[must_use]
    pub fn missing(&self) -> usize {
        self.target - self.degree
    }
}

/// Outcome of a regular edge assignment.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RegularityReport {
    degree: usize,
    edges_added: usize,
    attempts: usize,
    shortfalls: Vec<DegreeShortfall>,
}

impl RegularityReport {
    /// Returns `true` when no vertex was left below the target degree.
    #[must_use]
    pub fn is_regular(&self) -> bool {
        self.shortfalls.is_empty()
    }

    /// Returns the target degree.
    #[must_use]
    pub fn degree(&self) -> usize {
        self.degree
    }

    /// Returns the number of edges the accepted pass added.
    #[must_use]
    pub fn edges_added(&self) -> usize {
        self.edges_added
    }

    /// Returns the number of greedy passes run, including the accepted one.
    #[must_use]
    pub fn attempts(&self) -> usize {
        self.attempts
    }

    /// Returns the vertices left below the target degree, in creation order.
    #[must_use]
    pub fn shortfalls(&self) -> &[DegreeShortfall] {
        &self.shortfalls
    }
}

/// Adds edges to a graph until every vertex reaches a target degree.
///
/// # Examples
/// ```
/// use ugraph_core::{Graph, RegularGraphBuilder, Vertex};
///
/// let mut graph = Graph::from_parts("uvwx".chars().map(|c| Vertex::new(c.to_string())), [])?;
/// let report = RegularGraphBuilder::new(2).with_rng_seed(3).apply(&mut graph)?;
///
/// assert!(report.is_regular());
/// assert_eq!(graph.edge_count(), 4);
/// assert!(graph.is_connected());
/// # Ok::<(), ugraph_core::GraphError>(())
/// ```
#[derive(Clone, Debug)]
pub struct RegularGraphBuilder {
    degree: usize,
    policy: RegularityPolicy,
    rng_seed: Option<u64>,
}

impl RegularGraphBuilder {
    /// Creates a best-effort builder targeting `degree`.
    #[must_use]
    pub fn new(degree: usize) -> Self {
        Self {
            degree,
            policy: RegularityPolicy::default(),
            rng_seed: None,
        }
    }

    /// Overrides the shortfall policy.
    #[must_use]
    pub fn with_policy(mut self, policy: RegularityPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Seeds candidate draws so repeated runs over the same graph agree.
    ///
    /// Unseeded builders draw their seed from system entropy.
    #[must_use]
    pub fn with_rng_seed(mut self, seed: u64) -> Self {
        self.rng_seed = Some(seed);
        self
    }

    /// Returns the target degree.
    #[must_use]
    pub fn degree(&self) -> usize {
        self.degree
    }

    /// Returns the shortfall policy.
    #[must_use]
    pub fn policy(&self) -> RegularityPolicy {
        self.policy
    }

    /// Assigns edges to `graph` using the configured seed or entropy.
    ///
    /// # Errors
    /// Returns [`GraphError::InvalidConfiguration`] before touching the graph
    /// when it has fewer than `degree + 1` vertices or when the vertex count
    /// times `degree` is odd. Under [`RegularityPolicy::Strict`], returns
    /// [`GraphError::DegreeShortfall`] when every attempt strands a vertex.
    pub fn apply(&self, graph: &mut Graph) -> Result<RegularityReport> {
        let mut rng = match self.rng_seed {
            Some(seed) => SmallRng::seed_from_u64(seed),
            None => SmallRng::from_entropy(),
        };
        self.apply_with_rng(graph, &mut rng)
    }

    /// Assigns edges to `graph` drawing from a caller-supplied generator.
    ///
    /// # Errors
    /// See [`RegularGraphBuilder::apply`].
    #[instrument(
        name = "graph.add_regular_edges",
        err,
        skip(self, graph, rng),
        fields(vertices = graph.vertex_count(), degree = self.degree, policy = ?self.policy),
    )]
    pub fn apply_with_rng<R: Rng + ?Sized>(
        &self,
        graph: &mut Graph,
        rng: &mut R,
    ) -> Result<RegularityReport> {
        validate_feasibility(graph.vertex_count(), self.degree)?;

        match self.policy {
            RegularityPolicy::BestEffort => {
                let edges_added = greedy_pass(graph, self.degree, rng);
                let shortfalls = audit_degrees(graph, self.degree);
                for shortfall in &shortfalls {
                    warn!(
                        vertex = %shortfall.vertex,
                        degree = shortfall.degree,
                        target = self.degree,
                        "vertex left below target degree"
                    );
                }
                Ok(self.report(edges_added, 1, shortfalls))
            }
            RegularityPolicy::Strict { max_attempts } => {
                self.apply_strict(graph, rng, max_attempts)
            }
        }
    }

    fn apply_strict<R: Rng + ?Sized>(
        &self,
        graph: &mut Graph,
        rng: &mut R,
        max_attempts: NonZeroUsize,
    ) -> Result<RegularityReport> {
        let snapshot = graph.clone();
        let mut stranded = Vec::new();
        for attempt in 1..=max_attempts.get() {
            let edges_added = greedy_pass(graph, self.degree, rng);
            let shortfalls = audit_degrees(graph, self.degree);
            if shortfalls.is_empty() {
                return Ok(self.report(edges_added, attempt, shortfalls));
            }
            debug!(
                attempt,
                stranded = shortfalls.len(),
                "greedy pass stranded vertices; restoring graph"
            );
            stranded = shortfalls.iter().map(|s| s.vertex.id()).collect();
            graph.clone_from(&snapshot);
        }
        Err(GraphError::DegreeShortfall {
            degree: self.degree,
            attempts: max_attempts.get(),
            stranded,
        })
    }

    fn report(
        &self,
        edges_added: usize,
        attempts: usize,
        shortfalls: Vec<DegreeShortfall>,
    ) -> RegularityReport {
        debug!(edges_added, attempts, "regular edges assigned");
        RegularityReport {
            degree: self.degree,
            edges_added,
            attempts,
            shortfalls,
        }
    }
}

fn validate_feasibility(vertex_count: usize, degree: usize) -> Result<()> {
    if degree >= vertex_count {
        return Err(GraphError::InvalidConfiguration {
            reason: format!(
                "degree {degree} needs at least {} vertices (got {vertex_count})",
                degree.saturating_add(1)
            ),
        });
    }
    if vertex_count % 2 == 1 && degree % 2 == 1 {
        return Err(GraphError::InvalidConfiguration {
            reason: format!(
                "{vertex_count} vertices of odd degree {degree} give an odd degree sum"
            ),
        });
    }
    Ok(())
}

/// Runs one greedy completion pass, returning the number of edges added.
fn greedy_pass<R: Rng + ?Sized>(graph: &mut Graph, target: usize, rng: &mut R) -> usize {
    let vertices = graph.vertices();
    let mut degrees: Vec<usize> = vertices
        .iter()
        .map(|vertex| graph.degree(vertex).unwrap_or_default())
        .collect();
    let mut added = 0;

    for (index, vertex) in vertices.iter().enumerate() {
        if degrees[index] >= target {
            continue;
        }
        let mut pool: Vec<usize> = vertices
            .iter()
            .enumerate()
            .filter(|(other, candidate)| {
                *other != index && degrees[*other] < target && !graph.has_edge(vertex, candidate)
            })
            .map(|(other, _)| other)
            .collect();

        while degrees[index] < target {
            let Some(slot) = draw_candidate(&pool, &degrees, target, rng) else {
                break;
            };
            let partner = pool.swap_remove(slot);
            graph.link(Edge::new(vertex.clone(), vertices[partner].clone()));
            degrees[index] += 1;
            degrees[partner] += 1;
            added += 1;
        }
    }
    added
}

/// Picks a pool slot among the candidates with the largest remaining need.
fn draw_candidate<R: Rng + ?Sized>(
    pool: &[usize],
    degrees: &[usize],
    target: usize,
    rng: &mut R,
) -> Option<usize> {
    let need = |candidate: usize| target.saturating_sub(degrees[candidate]);
    let highest = pool.iter().map(|&candidate| need(candidate)).max()?;
    let neediest: Vec<usize> = pool
        .iter()
        .enumerate()
        .filter(|&(_, &candidate)| need(candidate) == highest)
        .map(|(slot, _)| slot)
        .collect();
    neediest.choose(rng).copied()
}

fn audit_degrees(graph: &Graph, target: usize) -> Vec<DegreeShortfall> {
    graph
        .vertices()
        .into_iter()
        .filter_map(|vertex| {
            let degree = graph.degree(&vertex).unwrap_or_default();
            (degree < target).then_some(DegreeShortfall {
                vertex,
                degree,
                target,
            })
        })
        .collect()
}
