//! Goban Graph
//!
//! Directed graphs over a fixed set of labeled vertices, behind one
//! interface with two interchangeable backings, plus a Go-board adapter and
//! same-value component search.
//!
//! # Architecture
//!
//! - [`graph`]: the [`Graph`] trait, [`AdjacencyListDigraph`],
//!   [`AdjacencyMatrixDigraph`] and conversions between them
//! - [`go`]: [`GoBoard`] and the lattice builder [`go_graph`]
//! - [`algo`]: [`like_component`] flood fill and [`like_partition`]
//!
//! The adjacency list makes `connect` cheap and keeps duplicate edges; the
//! adjacency matrix answers `connected` in O(1) and treats repeated
//! `connect` calls as one edge. Everything else is observably identical.
//!
//! ## Example Usage
//!
//! ```rust
//! use goban_graph::{go_graph, like_component, GoBoard, Graph, Stone};
//!
//! let mut board = GoBoard::new(3).unwrap();
//! board.put(0, 0, Stone::Black).unwrap();
//! board.put(0, 1, Stone::Black).unwrap();
//! board.put(1, 0, Stone::Black).unwrap();
//!
//! let graph = go_graph(&board).unwrap();
//! assert_eq!(graph.num_vertices(), 9);
//!
//! let group = like_component(&graph, "0:0").unwrap();
//! assert_eq!(group.len(), 3);
//! assert!(group.contains("1:0"));
//!
//! // Same graph, matrix form
//! let matrix = graph.to_adj_matrix();
//! assert_eq!(matrix.edges(), graph.edges());
//! ```

#![allow(missing_docs)]
#![warn(clippy::all)]

pub mod algo;
pub mod go;
pub mod graph;

// Re-export main types for convenience
pub use graph::{
    AdjacencyListDigraph, AdjacencyMatrixDigraph, Backing, Edge, Graph, GraphError, GraphResult,
    VertexId, VertexLabel, VertexStore,
};

pub use go::{go_graph, go_graph_with, BoardError, BoardResult, GoBoard, GoGraphConfig, Stone};

pub use algo::{like_component, like_partition, LikePartition};

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Get version string
pub fn version() -> &'static str {
    VERSION
}
