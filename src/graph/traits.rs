//! The capability set shared by every graph backing
//!
//! Client code (the Go adapter, component search, tests) is written against
//! [`Graph`] only, so either backing can be swapped in without changing
//! observable behavior. The one intentional difference is [`Graph::num_edges`]:
//! the adjacency list counts every stored insertion while the adjacency
//! matrix counts distinct edges.

use super::edge::Edge;
use super::error::GraphResult;
use super::list::AdjacencyListDigraph;
use super::matrix::AdjacencyMatrixDigraph;
use super::types::VertexLabel;
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fmt;

/// The concrete representation behind a [`Graph`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Backing {
    /// [`AdjacencyListDigraph`]
    #[default]
    List,
    /// [`AdjacencyMatrixDigraph`]
    Matrix,
}

impl Backing {
    /// Create an edgeless graph over `labels` with this backing
    pub fn build<V, I, L>(self, labels: I) -> GraphResult<Box<dyn Graph<V>>>
    where
        V: Clone + 'static,
        I: IntoIterator<Item = L>,
        L: Into<VertexLabel>,
    {
        let graph: Box<dyn Graph<V>> = match self {
            Backing::List => Box::new(AdjacencyListDigraph::new(labels)?),
            Backing::Matrix => Box::new(AdjacencyMatrixDigraph::new(labels)?),
        };
        Ok(graph)
    }
}

impl fmt::Display for Backing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Backing::List => write!(f, "adjacency list"),
            Backing::Matrix => write!(f, "adjacency matrix"),
        }
    }
}

/// A directed graph over a fixed set of labeled vertices, each holding an
/// optional value of type `V`
///
/// Every method that names a vertex fails with
/// [`GraphError::UnknownVertex`](super::GraphError::UnknownVertex) when the
/// label is not part of the graph, and leaves the graph untouched.
pub trait Graph<V: Clone> {
    /// Which representation this is
    fn backing(&self) -> Backing;

    /// Number of vertices
    fn num_vertices(&self) -> usize;

    /// Number of directed edges as stored by the backing
    fn num_edges(&self) -> usize;

    /// All vertex labels
    fn vertex_labels(&self) -> FxHashSet<VertexLabel>;

    /// The de-duplicated directed edge relation
    fn edges(&self) -> FxHashSet<Edge>;

    fn contains_vertex(&self, label: &str) -> bool;

    /// Add a directed edge from `src` to `dst`
    fn connect(&mut self, src: &str, dst: &str) -> GraphResult<()>;

    /// Whether an edge from `src` to `dst` exists
    fn connected(&self, src: &str, dst: &str) -> GraphResult<bool>;

    /// Labels of the direct successors of `src`
    fn out_neighbors(&self, src: &str) -> GraphResult<FxHashSet<VertexLabel>>;

    /// Value stored at `vertex`, `None` when absent
    fn get_value(&self, vertex: &str) -> GraphResult<Option<&V>>;

    /// Overwrite the value stored at `vertex`
    fn set_value(&mut self, vertex: &str, value: Option<V>) -> GraphResult<()>;

    /// This graph in adjacency list form
    ///
    /// A list-backed graph returns `Cow::Borrowed(self)`: the same instance,
    /// not a copy. Any other backing returns an owned, independent graph.
    fn to_adj_list(&self) -> Cow<'_, AdjacencyListDigraph<V>>;

    /// This graph in adjacency matrix form
    ///
    /// A matrix-backed graph returns `Cow::Borrowed(self)`; any other backing
    /// returns an owned, independent graph.
    fn to_adj_matrix(&self) -> Cow<'_, AdjacencyMatrixDigraph<V>>;
}

impl<V: Clone, G: Graph<V> + ?Sized> Graph<V> for Box<G> {
    fn backing(&self) -> Backing {
        (**self).backing()
    }

    fn num_vertices(&self) -> usize {
        (**self).num_vertices()
    }

    fn num_edges(&self) -> usize {
        (**self).num_edges()
    }

    fn vertex_labels(&self) -> FxHashSet<VertexLabel> {
        (**self).vertex_labels()
    }

    fn edges(&self) -> FxHashSet<Edge> {
        (**self).edges()
    }

    fn contains_vertex(&self, label: &str) -> bool {
        (**self).contains_vertex(label)
    }

    fn connect(&mut self, src: &str, dst: &str) -> GraphResult<()> {
        (**self).connect(src, dst)
    }

    fn connected(&self, src: &str, dst: &str) -> GraphResult<bool> {
        (**self).connected(src, dst)
    }

    fn out_neighbors(&self, src: &str) -> GraphResult<FxHashSet<VertexLabel>> {
        (**self).out_neighbors(src)
    }

    fn get_value(&self, vertex: &str) -> GraphResult<Option<&V>> {
        (**self).get_value(vertex)
    }

    fn set_value(&mut self, vertex: &str, value: Option<V>) -> GraphResult<()> {
        (**self).set_value(vertex, value)
    }

    fn to_adj_list(&self) -> Cow<'_, AdjacencyListDigraph<V>> {
        (**self).to_adj_list()
    }

    fn to_adj_matrix(&self) -> Cow<'_, AdjacencyMatrixDigraph<V>> {
        (**self).to_adj_matrix()
    }
}
