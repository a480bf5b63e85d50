//! Erdős–Rényi random edge generation.

use rand::{Rng, SeedableRng, distributions::Standard, rngs::SmallRng};
use tracing::{debug, instrument};

use crate::{
    edge::Edge,
    error::{GraphError, Result},
    graph::Graph,
};

/// Samples a `G(n, p)` edge set over the vertices of a graph.
///
/// Every unordered pair of distinct vertices is considered exactly once and
/// joined when a uniform draw from `[0, 1)` falls below `p`, so `p = 0` adds
/// nothing and `p = 1` completes the graph. Pairs are visited in vertex
/// creation order, which makes seeded runs reproducible.
///
/// # Examples
/// ```
/// use ugraph_core::{Graph, RandomGraphGenerator, Vertex};
///
/// let mut graph = Graph::from_parts((0..8).map(|i| Vertex::new(i.to_string())), [])?;
/// let inserted = RandomGraphGenerator::new(1.0)?
///     .with_rng_seed(7)
///     .apply(&mut graph);
/// assert_eq!(inserted, 28);
/// assert_eq!(graph.edge_count(), 28);
/// # Ok::<(), ugraph_core::GraphError>(())
/// ```
#[derive(Clone, Debug)]
pub struct RandomGraphGenerator {
    p: f64,
    rng_seed: Option<u64>,
}

impl RandomGraphGenerator {
    /// Creates a generator joining each pair with probability `p`.
    ///
    /// # Errors
    /// Returns [`GraphError::InvalidProbability`] when `p` is NaN or outside
    /// `[0, 1]`.
    pub fn new(p: f64) -> Result<Self> {
        if !(0.0..=1.0).contains(&p) {
            return Err(GraphError::InvalidProbability { p });
        }
        Ok(Self { p, rng_seed: None })
    }

    /// Seeds the sampler so repeated runs over the same graph agree.
    ///
    /// Unseeded generators draw their seed from system entropy.
    #[must_use]
    pub fn with_rng_seed(mut self, seed: u64) -> Self {
        self.rng_seed = Some(seed);
        self
    }

    /// Returns the edge probability.
    #[must_use]
    pub fn probability(&self) -> f64 {
        self.p
    }

    /// Returns the configured seed, if any.
    #[must_use]
    pub fn rng_seed(&self) -> Option<u64> {
        self.rng_seed
    }

    /// Samples edges into `graph` using the configured seed or entropy.
    ///
    /// Returns the number of edge records written. A sampled pair that was
    /// already connected has its record replaced and still counts.
    pub fn apply(&self, graph: &mut Graph) -> usize {
        let mut rng = match self.rng_seed {
            Some(seed) => SmallRng::seed_from_u64(seed),
            None => SmallRng::from_entropy(),
        };
        self.apply_with_rng(graph, &mut rng)
    }

    /// Samples edges into `graph` drawing from a caller-supplied generator.
    #[instrument(
        name = "graph.add_random_edges",
        level = "debug",
        skip(self, graph, rng),
        fields(vertices = graph.vertex_count(), p = self.p),
    )]
    pub fn apply_with_rng<R: Rng + ?Sized>(&self, graph: &mut Graph, rng: &mut R) -> usize {
        let vertices = graph.vertices();
        let mut pairs = 0_usize;
        let mut inserted = 0_usize;
        for (index, first) in vertices.iter().enumerate() {
            for second in vertices.iter().skip(index + 1) {
                pairs += 1;
                let draw: f64 = rng.sample(Standard);
                if draw < self.p {
                    graph.link(Edge::new(first.clone(), second.clone()));
                    inserted += 1;
                }
            }
        }
        debug!(pairs, inserted, "random edges sampled");
        inserted
    }
}
