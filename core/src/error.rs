use thiserror::Error;

use crate::graph::VertexId;

/// Result alias used throughout the engine.
pub type Result<T> = std::result::Result<T, GraphError>;

/// Caller misuse reported by graph operations.
///
/// No-op conditions (adding a duplicate edge, removing something that is not
/// there, traversing from an absent root) are not errors and never produce one.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    /// The operation referenced a vertex that is not in the store.
    #[error("vertex {0} is not in the graph")]
    MissingVertex(VertexId),

    /// A weighted-only algorithm was invoked on an unweighted graph.
    #[error("graph is not weighted")]
    NotWeighted,

    /// An adjacency description line could not be parsed.
    #[error("line {line}: {message}")]
    Parse {
        /// 1-based line number in the description.
        line: usize,
        /// What was wrong with it.
        message: String,
    },
}
