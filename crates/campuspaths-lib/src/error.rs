use std::path::PathBuf;

use thiserror::Error;

/// Convenient result alias for the campus paths library.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level library error type.
///
/// Unknown buildings and disconnected endpoints are not errors; they are
/// reported through [`crate::routing::PathResult`].
#[derive(Debug, Error)]
pub enum Error {
    /// Raised when inserting a node that is already part of the graph.
    #[error("node {node} is already present in the graph")]
    DuplicateNode { node: String },

    /// Raised when an operation references a node missing from the graph.
    #[error("node {node} is not present in the graph")]
    UnknownNode { node: String },

    /// Raised when renaming a node onto an identity that already exists.
    #[error("cannot rename {from} to {to}: target node already exists")]
    NodeExists { from: String, to: String },

    /// Raised when removing an edge that does not exist.
    #[error("no edge {start} -> {destination} with weight {weight}")]
    EdgeNotFound {
        start: String,
        destination: String,
        weight: f64,
    },

    /// Raised when an edge weight is negative or not finite.
    #[error("edge weight must be a finite non-negative number, got {weight}")]
    InvalidWeight { weight: f64 },

    /// Dataset file could not be located at the resolved path.
    #[error("dataset not found at {path}")]
    DatasetNotFound { path: PathBuf },

    /// No suitable project directories could be resolved for this platform.
    #[error("failed to resolve project directories for the campus dataset")]
    ProjectDirsUnavailable,

    /// Raised when a dataset line is malformed.
    #[error("{}:{line}: {message}", path.display())]
    DatasetFormat {
        path: PathBuf,
        line: u64,
        message: String,
    },

    /// Wrapper for delimited-text reader errors.
    #[error(transparent)]
    Csv(#[from] csv::Error),

    /// Wrapper for IO errors.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
