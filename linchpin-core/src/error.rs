//! Error types for the Linchpin core library.
//!
//! Defines the error enum exposed by the public API, its stable error codes,
//! and a convenient result alias.

use std::fmt;

use thiserror::Error;

use crate::builder::ExecutionStrategy;

macro_rules! define_error_codes {
    (
        $(#[$enum_meta:meta])*
        enum $CodeTy:ident for $ErrTy:ident {
            $(
                $(#[$variant_meta:meta])*
                $CodeVariant:ident => $ErrVariant:ident $( { $($pattern:tt)* } )? => $code:expr
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
            pub const fn code(&self) -> $CodeTy {
                match self {
                    $(Self::$ErrVariant $( { $($pattern)* } )? => $CodeTy::$CodeVariant,)+
                }
            }
        }
    };
}

/// Error type produced when building graphs or classifying their edges.
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum LinchpinError {
    /// The graph declared zero vertices.
    #[error("cannot classify edges of a graph with no vertices")]
    EmptyGraph,
    /// An edge referenced a vertex outside `0..node_count`.
    #[error("edge {edge} references node {node}, but node_count is {node_count}")]
    InvalidNodeId {
        /// Original index of the offending edge.
        edge: usize,
        /// The out-of-range vertex id.
        node: usize,
        /// The number of vertices in the graph.
        node_count: usize,
    },
    /// The full edge set cannot connect every vertex.
    #[error("graph with {node_count} nodes is disconnected ({components} components)")]
    Disconnected {
        /// The number of vertices in the graph.
        node_count: usize,
        /// Components left after accepting every usable edge.
        components: usize,
    },
    /// The requested execution strategy is unavailable in the current build.
    #[error("the requested execution strategy {requested:?} is not available in this build")]
    BackendUnavailable {
        /// Strategy that could not be satisfied by the current build.
        requested: ExecutionStrategy,
    },
}

define_error_codes! {
    /// Stable codes describing [`LinchpinError`] variants.
    enum LinchpinErrorCode for LinchpinError {
        /// The graph declared zero vertices.
        EmptyGraph => EmptyGraph => "LINCHPIN_EMPTY_GRAPH",
        /// An edge referenced a vertex outside `0..node_count`.
        InvalidNodeId => InvalidNodeId { .. } => "LINCHPIN_INVALID_NODE_ID",
        /// The full edge set cannot connect every vertex.
        Disconnected => Disconnected { .. } => "LINCHPIN_DISCONNECTED",
        /// The requested execution strategy is unavailable in the current build.
        BackendUnavailable => BackendUnavailable { .. } => "LINCHPIN_BACKEND_UNAVAILABLE",
    }
}

/// Convenient alias for results returned by the core API.
pub type Result<T> = core::result::Result<T, LinchpinError>;
