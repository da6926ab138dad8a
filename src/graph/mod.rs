//! Directed graph layer
//!
//! This module implements one graph interface over two backings:
//! - [`AdjacencyListDigraph`]: per-vertex successor lists, cheap `connect`
//! - [`AdjacencyMatrixDigraph`]: dense boolean matrix, O(1) `connected`
//!
//! Both are built from a fixed, non-empty set of unique labels and carry an
//! optional value per vertex. Conversions in either direction keep labels,
//! edges and values.

pub mod convert;
pub mod edge;
pub mod error;
pub mod list;
pub mod matrix;
pub mod traits;
pub mod types;
pub mod vertex;

// Re-export main types
pub use edge::Edge;
pub use error::{GraphError, GraphResult};
pub use list::AdjacencyListDigraph;
pub use matrix::AdjacencyMatrixDigraph;
pub use traits::{Backing, Graph};
pub use types::{VertexId, VertexLabel};
pub use vertex::VertexStore;
