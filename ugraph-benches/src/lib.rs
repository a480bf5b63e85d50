//! Benchmark support crate for ugraph.
//!
//! Provides seeded graph fixtures and parameter types used by the Criterion
//! benchmarks for connectivity checking, regular edge assignment and random
//! edge sampling.

pub mod error;
pub mod fixtures;
pub mod params;
