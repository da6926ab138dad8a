//! Core type definitions for the graph layer

use std::borrow::Borrow;
use std::fmt;

/// Dense identifier of a vertex inside one graph
///
/// Ids are assigned in the order the labels were given at construction,
/// starting at zero. They index matrix rows/columns and adjacency rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct VertexId(pub usize);

impl VertexId {
    pub fn new(id: usize) -> Self {
        VertexId(id)
    }

    pub fn as_usize(&self) -> usize {
        self.0
    }
}

impl fmt::Display for VertexId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "VertexId({})", self.0)
    }
}

impl From<usize> for VertexId {
    fn from(id: usize) -> Self {
        VertexId(id)
    }
}

/// Vertex label (e.g., "a", "3:4")
///
/// Labels are opaque and immutable. A label borrows as `str`, so maps and
/// sets keyed by `VertexLabel` can be queried with plain string slices.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct VertexLabel(String);

impl VertexLabel {
    pub fn new(label: impl Into<String>) -> Self {
        VertexLabel(label.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for VertexLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Borrow<str> for VertexLabel {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<String> for VertexLabel {
    fn from(s: String) -> Self {
        VertexLabel(s)
    }
}

impl From<&str> for VertexLabel {
    fn from(s: &str) -> Self {
        VertexLabel(s.to_string())
    }
}

impl From<&String> for VertexLabel {
    fn from(s: &String) -> Self {
        VertexLabel(s.clone())
    }
}

impl PartialEq<str> for VertexLabel {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for VertexLabel {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}
