//! Directed edge value returned by edge queries

use super::types::VertexLabel;
use std::fmt;

/// A directed, unweighted edge between two labeled vertices
///
/// Edges carry no identity or payload; two edges are equal when they have
/// the same source and the same target.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Edge {
    /// Source vertex (edge goes FROM this vertex)
    pub source: VertexLabel,

    /// Target vertex (edge goes TO this vertex)
    pub target: VertexLabel,
}

impl Edge {
    /// Create a new directed edge
    pub fn new(source: impl Into<VertexLabel>, target: impl Into<VertexLabel>) -> Self {
        Edge {
            source: source.into(),
            target: target.into(),
        }
    }

    /// The same edge with its direction flipped
    pub fn reversed(&self) -> Self {
        Edge {
            source: self.target.clone(),
            target: self.source.clone(),
        }
    }

    pub fn is_self_loop(&self) -> bool {
        self.source == self.target
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.source, self.target)
    }
}

impl<S: Into<VertexLabel>, T: Into<VertexLabel>> From<(S, T)> for Edge {
    fn from((source, target): (S, T)) -> Self {
        Edge::new(source, target)
    }
}
