//! Benchmark parameter types.
//!
//! The `Display` forms become Criterion benchmark identifiers.

use std::fmt;

/// Parameters for a regular edge assignment run.
#[derive(Clone, Debug)]
pub struct RegularBenchParams {
    /// Number of vertices in the graph.
    pub vertex_count: usize,
    /// Target degree.
    pub degree: usize,
}

impl fmt::Display for RegularBenchParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "n={},k={}", self.vertex_count, self.degree)
    }
}

/// Parameters for a random edge sampling run.
#[derive(Clone, Debug)]
pub struct RandomBenchParams {
    /// Number of vertices in the graph.
    pub vertex_count: usize,
    /// Edge probability.
    pub p: f64,
}

impl fmt::Display for RandomBenchParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "n={},p={}", self.vertex_count, self.p)
    }
}

/// Parameters for a connectivity run.
#[derive(Clone, Debug)]
pub struct ConnectivityBenchParams {
    /// Number of vertices in the graph.
    pub vertex_count: usize,
    /// Fixture shape label, such as `tree` or `complete`.
    pub shape: &'static str,
}

impl fmt::Display for ConnectivityBenchParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},n={}", self.shape, self.vertex_count)
    }
}
