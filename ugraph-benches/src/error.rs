//! Benchmark setup error type.
//!
//! Lets fixture preparation propagate failures with `?` instead of using
//! `.expect()`.

use ugraph_core::GraphError;

/// Errors that may occur during benchmark setup.
#[derive(Debug, thiserror::Error)]
pub enum BenchSetupError {
    /// A graph operation rejected the fixture.
    #[error("graph operation failed: {0}")]
    Graph(#[from] GraphError),
    /// A zero value was passed where a non-zero integer was required.
    #[error("expected a non-zero value for {context}")]
    ZeroValue {
        /// A description of the parameter that was unexpectedly zero.
        context: &'static str,
    },
    /// The regular builder left vertices below the target degree.
    #[error("regular fixture left {stranded} vertex(es) below degree {degree}")]
    IrregularFixture {
        /// Target degree.
        degree: usize,
        /// Number of under-served vertices.
        stranded: usize,
    },
}
