//! Error types for `route_core`.

use thiserror::Error;

use crate::graph::NodeIndex;

/// Result type alias for `route_core` operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while loading location data or answering route queries.
///
/// An unreachable destination is *not* an error, queries report it as `None`.
#[derive(Error, Debug)]
pub enum Error {
    /// A location with this name was already added to the table.
    #[error("Duplicate location '{name}'")]
    DuplicateLocation { name: String },

    /// A name could not be resolved against the location table.
    #[error("City named '{0}' not found")]
    UnknownLocation(String),

    /// A connection record references a location that was never declared.
    #[error("Connection {from} <-> {to} references unknown location '{missing}'")]
    DanglingConnection {
        from: String,
        to: String,
        missing: String,
    },

    /// Walking the predecessor chain did not lead back to the start node.
    #[error("Predecessor chain from {goal:?} does not reach {start:?} within {steps} steps")]
    BrokenPredecessorChain {
        start: NodeIndex,
        goal: NodeIndex,
        steps: usize,
    },

    #[error("Failed to read records: {0}")]
    Csv(#[from] csv::Error),
}
