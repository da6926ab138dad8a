//! Adjacency list backing
//!
//! Each vertex keeps an append-only row of destination ids in connection
//! order. Connecting the same pair twice stores the destination twice; the
//! set-valued queries de-duplicate at read time while `num_edges` reports the
//! stored multiplicity.

use super::edge::Edge;
use super::error::GraphResult;
use super::matrix::AdjacencyMatrixDigraph;
use super::traits::{Backing, Graph};
use super::types::{VertexId, VertexLabel};
use super::vertex::VertexStore;
use rustc_hash::FxHashSet;
use std::borrow::Cow;
use tracing::{debug, trace};

/// Directed graph stored as one successor list per vertex
///
/// - `connect`: amortized O(1)
/// - `connected` / `out_neighbors`: O(out-degree)
/// - `num_edges`: O(V)
#[derive(Debug, Clone, PartialEq)]
pub struct AdjacencyListDigraph<V> {
    /// Labels, id mapping and values
    vertices: VertexStore<V>,

    /// Outgoing destinations for each vertex id, in connection order
    neighbors: Vec<Vec<VertexId>>,
}

impl<V> AdjacencyListDigraph<V> {
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
        debug!("Created adjacency list digraph with {} vertices", n);
        AdjacencyListDigraph {
            vertices,
            neighbors: vec![Vec::new(); n],
        }
    }

    /// The vertex set backing this graph
    pub fn vertices(&self) -> &VertexStore<V> {
        &self.vertices
    }

    /// Raw destinations of `src` in connection order, repeats included
    pub fn successors(&self, src: &str) -> GraphResult<impl Iterator<Item = &VertexLabel> + '_> {
        let id = self.vertices.id_of(src)?;
        Ok(self.neighbors[id.as_usize()]
            .iter()
            .filter_map(move |&dst| self.vertices.label_of(dst)))
    }

    /// Every stored `(source, destination)` id pair, repeats included
    pub(crate) fn stored_edges(&self) -> impl Iterator<Item = (VertexId, VertexId)> + '_ {
        self.neighbors
            .iter()
            .enumerate()
            .flat_map(|(src, row)| row.iter().map(move |&dst| (VertexId::new(src), dst)))
    }

    pub(crate) fn connect_ids(&mut self, src: VertexId, dst: VertexId) {
        self.neighbors[src.as_usize()].push(dst);
    }

    pub(crate) fn into_store(self) -> VertexStore<V> {
        self.vertices
    }

    /// Consume this graph and produce the equivalent adjacency matrix
    pub fn into_adj_matrix(self) -> AdjacencyMatrixDigraph<V> {
        AdjacencyMatrixDigraph::from(self)
    }
}

impl<V: Clone> Graph<V> for AdjacencyListDigraph<V> {
    fn backing(&self) -> Backing {
        Backing::List
    }

    fn num_vertices(&self) -> usize {
        self.vertices.len()
    }

    fn num_edges(&self) -> usize {
        self.neighbors.iter().map(Vec::len).sum()
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
        // Resolve both endpoints before touching any row
        let src_id = self.vertices.id_of(src)?;
        let dst_id = self.vertices.id_of(dst)?;
        self.connect_ids(src_id, dst_id);
        trace!("Connected {} -> {}", src, dst);
        Ok(())
    }

    fn connected(&self, src: &str, dst: &str) -> GraphResult<bool> {
        let src_id = self.vertices.id_of(src)?;
        let dst_id = self.vertices.id_of(dst)?;
        Ok(self.neighbors[src_id.as_usize()].contains(&dst_id))
    }

    fn out_neighbors(&self, src: &str) -> GraphResult<FxHashSet<VertexLabel>> {
        Ok(self.successors(src)?.cloned().collect())
    }

    fn get_value(&self, vertex: &str) -> GraphResult<Option<&V>> {
        self.vertices.value(vertex)
    }

    fn set_value(&mut self, vertex: &str, value: Option<V>) -> GraphResult<()> {
        self.vertices.set_value(vertex, value)
    }

    fn to_adj_list(&self) -> Cow<'_, AdjacencyListDigraph<V>> {
        Cow::Borrowed(self)
    }

    fn to_adj_matrix(&self) -> Cow<'_, AdjacencyMatrixDigraph<V>> {
        Cow::Owned(AdjacencyMatrixDigraph::from(self))
    }
}
