//! Conversions between the two backings
//!
//! Both directions copy the vertex store as-is, so label order (and with it
//! every vertex id) and all values carry over, then replay the stored edges.
//! Duplicate list edges collapse into one matrix cell; the matrix replays in
//! row-major order. The result never shares state with its source.

use super::list::AdjacencyListDigraph;
use super::matrix::AdjacencyMatrixDigraph;
use super::types::VertexId;
use tracing::debug;

impl<V: Clone> From<&AdjacencyListDigraph<V>> for AdjacencyMatrixDigraph<V> {
    fn from(list: &AdjacencyListDigraph<V>) -> Self {
        let mut matrix = AdjacencyMatrixDigraph::from_store(list.vertices().clone());
        let replayed = replay(list.stored_edges(), |src, dst| matrix.connect_ids(src, dst));
        debug!("Converted adjacency list to matrix, replayed {} stored edges", replayed);
        matrix
    }
}

impl<V> From<AdjacencyListDigraph<V>> for AdjacencyMatrixDigraph<V> {
    fn from(list: AdjacencyListDigraph<V>) -> Self {
        let edges: Vec<(VertexId, VertexId)> = list.stored_edges().collect();
        let mut matrix = AdjacencyMatrixDigraph::from_store(list.into_store());
        let replayed = replay(edges, |src, dst| matrix.connect_ids(src, dst));
        debug!("Converted adjacency list to matrix, replayed {} stored edges", replayed);
        matrix
    }
}

impl<V: Clone> From<&AdjacencyMatrixDigraph<V>> for AdjacencyListDigraph<V> {
    fn from(matrix: &AdjacencyMatrixDigraph<V>) -> Self {
        let mut list = AdjacencyListDigraph::from_store(matrix.vertices().clone());
        let replayed = replay(matrix.stored_edges(), |src, dst| list.connect_ids(src, dst));
        debug!("Converted adjacency matrix to list, replayed {} edges", replayed);
        list
    }
}

impl<V> From<AdjacencyMatrixDigraph<V>> for AdjacencyListDigraph<V> {
    fn from(matrix: AdjacencyMatrixDigraph<V>) -> Self {
        let edges: Vec<(VertexId, VertexId)> = matrix.stored_edges().collect();
        let mut list = AdjacencyListDigraph::from_store(matrix.into_store());
        let replayed = replay(edges, |src, dst| list.connect_ids(src, dst));
        debug!("Converted adjacency matrix to list, replayed {} edges", replayed);
        list
    }
}

fn replay<I, F>(edges: I, mut connect: F) -> usize
where
    I: IntoIterator<Item = (VertexId, VertexId)>,
    F: FnMut(VertexId, VertexId),
{
    let mut count = 0;
    for (src, dst) in edges {
        connect(src, dst);
        count += 1;
    }
    count
}
