//! Error types for the ugraph core library.
//!
//! Every fallible graph operation reports a [`GraphError`]; each variant maps
//! to a stable [`GraphErrorCode`] for callers that log or match on codes.

use std::fmt;

use thiserror::Error;

use crate::vertex::VertexId;

macro_rules! define_error_codes {
    (
        $(#[$enum_meta:meta])*
        enum $CodeTy:ident for $ErrTy:ident {
            $(
                $(#[$variant_meta:meta])*
                $CodeVariant:ident => $ErrVariant:ident { .. } => $code:expr
            ),+ $(,)?
        }
    ) => {
        $(#[$enum_meta])*
        #[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
        #[non_exhaustive]
        pub enum $CodeTy {
            $(
                $(#[$variant_meta])*
                $CodeVariant,
            )+
        }

        impl $CodeTy {
            /// Return the stable machine-readable representation of this error code.
            #[must_use]
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$CodeVariant => $code,)+
                }
            }
        }

        impl fmt::Display for $CodeTy {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl $ErrTy {
            #[doc = concat!(
                "Retrieve the stable [`",
                stringify!($CodeTy),
                "`] for this error."
            )]
            #[must_use]
            pub const fn code(&self) -> $CodeTy {
                match self {
                    $(Self::$ErrVariant { .. } => $CodeTy::$CodeVariant,)+
                }
            }
        }
    };
}

/// Errors produced by graph mutation and the graph algorithms.
#[non_exhaustive]
#[derive(Clone, Debug, Error, PartialEq)]
pub enum GraphError {
    /// An operation referenced a vertex that was never added to the graph.
    #[error("vertex '{label}' ({vertex}) is not part of the graph")]
    UnknownVertex {
        /// Identity of the missing vertex.
        vertex: VertexId,
        /// Label of the missing vertex at the time of the call.
        label: String,
    },
    /// `remove_edge` was asked to delete a connection that does not exist.
    #[error("no edge connects {first} and {second}")]
    MissingEdge {
        /// First endpoint of the requested edge.
        first: VertexId,
        /// Second endpoint of the requested edge.
        second: VertexId,
    },
    /// Builder parameters cannot produce the requested graph.
    #[error("invalid graph configuration: {reason}")]
    InvalidConfiguration {
        /// Human-readable explanation of the rejected configuration.
        reason: String,
    },
    /// An edge probability fell outside `[0, 1]`.
    #[error("edge probability must lie within [0, 1] (got {p})")]
    InvalidProbability {
        /// The rejected probability.
        p: f64,
    },
    /// The strict regular builder could not reach the target degree.
    #[error(
        "{} vertex(es) stayed below degree {degree} after {attempts} attempt(s)",
        .stranded.len()
    )]
    DegreeShortfall {
        /// Target degree that was requested.
        degree: usize,
        /// Number of greedy passes attempted before giving up.
        attempts: usize,
        /// Vertices left under-degree by the final attempt.
        stranded: Vec<VertexId>,
    },
}

define_error_codes! {
    /// Stable codes describing [`GraphError`] variants.
    enum GraphErrorCode for GraphError {
        /// An operation referenced a vertex that was never added to the graph.
        UnknownVertex => UnknownVertex { .. } => "GRAPH_UNKNOWN_VERTEX",
        /// `remove_edge` was asked to delete a connection that does not exist.
        MissingEdge => MissingEdge { .. } => "GRAPH_MISSING_EDGE",
        /// Builder parameters cannot produce the requested graph.
        InvalidConfiguration => InvalidConfiguration { .. } => "GRAPH_INVALID_CONFIGURATION",
        /// An edge probability fell outside `[0, 1]`.
        InvalidProbability => InvalidProbability { .. } => "GRAPH_INVALID_PROBABILITY",
        /// The strict regular builder could not reach the target degree.
        DegreeShortfall => DegreeShortfall { .. } => "GRAPH_DEGREE_SHORTFALL",
    }
}

/// Convenient alias for results returned by the core API.
pub type Result<T> = core::result::Result<T, GraphError>;
