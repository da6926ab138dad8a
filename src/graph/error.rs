//! Error types for graph operations

use super::types::VertexLabel;
use thiserror::Error;

/// Errors that can occur during graph operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    #[error("Unknown vertex: {0}")]
    UnknownVertex(VertexLabel),

    #[error("Vertex {0} given more than once")]
    DuplicateVertex(VertexLabel),

    #[error("A graph needs at least one vertex")]
    EmptyVertexSet,
}

pub type GraphResult<T> = Result<T, GraphError>;

impl GraphError {
    pub(crate) fn unknown(label: &str) -> Self {
        GraphError::UnknownVertex(VertexLabel::new(label))
    }
}
