use std::path::PathBuf;

use thiserror::Error;

use crate::graph::VertexId;

/// Errors a caller can recover from.
///
/// Invariant violations inside a query (an auxiliary container overflowing,
/// an edge-weight lookup for an edge that was never inserted) are not
/// represented here: they go through [`fatal`] and abort the query.
#[derive(Error, Debug)]
pub enum GraphError {
    #[error("vertex {vertex} out of range (graph has {vertex_count} vertices)")]
    VertexOutOfRange {
        vertex: VertexId,
        vertex_count: usize,
    },

    #[error("{container} capacity exceeded (capacity {capacity})")]
    CapacityExceeded {
        container: &'static str,
        capacity: usize,
    },

    #[error("unable to read word list {path:?}: {source}")]
    WordList {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T, E = GraphError> = std::result::Result<T, E>;

/// Report an invariant violation and stop.
///
/// `operation` names the failing call, `detail` its arguments.
#[cold]
#[track_caller]
pub(crate) fn fatal(operation: &str, detail: std::fmt::Arguments<'_>) -> ! {
    tracing::error!(operation, %detail, "invariant violated");
    panic!("**Error in {operation}: {detail}");
}

/// Unwrap a container operation whose capacity was sized to never overflow.
#[track_caller]
pub(crate) fn checked<T>(operation: &str, result: Result<T>) -> T {
    match result {
        Ok(value) => value,
        Err(err) => fatal(operation, format_args!("{err}")),
    }
}
