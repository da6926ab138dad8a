//! Adjacency matrix backing
//!
//! An N×N boolean matrix indexed by vertex id. Edge existence is O(1) and
//! repeated `connect` calls are idempotent; edge counting and neighbor scans
//! pay for the dense layout.

use super::edge::Edge;
use super::error::GraphResult;
use super::list::AdjacencyListDigraph;
use super::traits::{Backing, Graph};
use super::types::{VertexId, VertexLabel};
use super::vertex::VertexStore;
use ndarray::Array2;
use rustc_hash::FxHashSet;
use std::borrow::Cow;
use tracing::{debug, trace};

/// Directed graph stored as a dense boolean matrix
///
/// - `connect` / `connected`: O(1)
/// - `out_neighbors`: O(V)
/// - `num_edges` / `edges`: O(V²)
#[derive(Debug, Clone, PartialEq)]
pub struct AdjacencyMatrixDigraph<V> {
    /// Labels, id mapping and values
    vertices: VertexStore<V>,

    /// `adjacency[[src, dst]]` is true iff the edge src -> dst exists
    adjacency: Array2<bool>,
}

impl<V> AdjacencyMatrixDigraph<V> {
    /// Create a graph over `labels` with no edges and no values
    pub fn new<I, L>(labels: I) -> GraphResult<Self>
    where
        I: IntoIterator<Item = L>,
        L: Into<VertexLabel>,
    {
        Ok(Self::from_store(VertexStore::new(labels)?))
    }

    pub(crate) fn from_store(vertices: VertexStore<V>) -> Self {
        let n = vertices.len();
        debug!("Created adjacency matrix digraph with {} vertices ({} cells)", n, n * n);
        AdjacencyMatrixDigraph {
            vertices,
            adjacency: Array2::from_elem((n, n), false),
        }
    }

    /// The vertex set backing this graph
    pub fn vertices(&self) -> &VertexStore<V> {
        &self.vertices
    }

    /// Every set cell as a `(source, destination)` id pair, row-major
    pub(crate) fn stored_edges(&self) -> impl Iterator<Item = (VertexId, VertexId)> + '_ {
        self.adjacency
            .indexed_iter()
            .filter(|(_, set)| **set)
            .map(|((src, dst), _)| (VertexId::new(src), VertexId::new(dst)))
    }

    pub(crate) fn connect_ids(&mut self, src: VertexId, dst: VertexId) {
        self.adjacency[[src.as_usize(), dst.as_usize()]] = true;
    }

    pub(crate) fn into_store(self) -> VertexStore<V> {
        self.vertices
    }

    /// Consume this graph and produce the equivalent adjacency list
    pub fn into_adj_list(self) -> AdjacencyListDigraph<V> {
        AdjacencyListDigraph::from(self)
    }
}

impl<V: Clone> Graph<V> for AdjacencyMatrixDigraph<V> {
    fn backing(&self) -> Backing {
        Backing::Matrix
    }

    fn num_vertices(&self) -> usize {
        self.vertices.len()
    }

    fn num_edges(&self) -> usize {
        self.adjacency.iter().filter(|&&set| set).count()
    }

    fn vertex_labels(&self) -> FxHashSet<VertexLabel> {
        self.vertices.label_set()
    }

    fn edges(&self) -> FxHashSet<Edge> {
        self.stored_edges()
            .filter_map(|(src, dst)| {
                let source = self.vertices.label_of(src)?;
                let target = self.vertices.label_of(dst)?;
                Some(Edge::new(source.clone(), target.clone()))
            })
            .collect()
    }

    fn contains_vertex(&self, label: &str) -> bool {
        self.vertices.contains(label)
    }

    fn connect(&mut self, src: &str, dst: &str) -> GraphResult<()> {
        let src_id = self.vertices.id_of(src)?;
        let dst_id = self.vertices.id_of(dst)?;
        self.connect_ids(src_id, dst_id);
        trace!("Connected {} -> {}", src, dst);
        Ok(())
    }

    fn connected(&self, src: &str, dst: &str) -> GraphResult<bool> {
        let src_id = self.vertices.id_of(src)?;
        let dst_id = self.vertices.id_of(dst)?;
        Ok(self.adjacency[[src_id.as_usize(), dst_id.as_usize()]])
    }

    fn out_neighbors(&self, src: &str) -> GraphResult<FxHashSet<VertexLabel>> {
        let src_id = self.vertices.id_of(src)?;
        Ok(self
            .adjacency
            .row(src_id.as_usize())
            .iter()
            .enumerate()
            .filter(|(_, set)| **set)
            .filter_map(|(dst, _)| self.vertices.label_of(VertexId::new(dst)).cloned())
            .collect())
    }

    fn get_value(&self, vertex: &str) -> GraphResult<Option<&V>> {
        self.vertices.value(vertex)
    }

    fn set_value(&mut self, vertex: &str, value: Option<V>) -> GraphResult<()> {
        self.vertices.set_value(vertex, value)
    }

    fn to_adj_list(&self) -> Cow<'_, AdjacencyListDigraph<V>> {
        Cow::Owned(AdjacencyListDigraph::from(self))
    }

    fn to_adj_matrix(&self) -> Cow<'_, AdjacencyMatrixDigraph<V>> {
        Cow::Borrowed(self)
    }
}
