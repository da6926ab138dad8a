//! Build the 4-neighbor lattice graph of a Go board
//!
//! One vertex per board point, labeled `"{col}:{row}"`, holding the point's
//! stone. Each point is connected to its right and bottom neighbor in both
//! directions, so the result is the undirected grid expressed as symmetric
//! directed edge pairs: `4·n·(n−1)` directed edges on an n×n board.

use super::board::{GoBoard, Stone};
use crate::graph::{AdjacencyListDigraph, Backing, Graph, GraphResult};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Options for [`go_graph_with`]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GoGraphConfig {
    /// Representation of the produced graph
    pub backing: Backing,
}

/// Vertex label of the point `(col, row)`
pub fn point_label(col: usize, row: usize) -> String {
    format!("{}:{}", col, row)
}

/// Labels of every point, column by column
fn point_labels(size: usize) -> impl Iterator<Item = String> {
    (0..size).flat_map(move |col| (0..size).map(move |row| point_label(col, row)))
}

/// Lattice graph of `board` as an adjacency list
pub fn go_graph(board: &GoBoard) -> GraphResult<AdjacencyListDigraph<Stone>> {
    let graph = AdjacencyListDigraph::new(point_labels(board.size()))?;
    fill_lattice(board, graph)
}

/// Lattice graph of `board` on the configured backing
pub fn go_graph_with(board: &GoBoard, config: &GoGraphConfig) -> GraphResult<Box<dyn Graph<Stone>>> {
    let graph = config.backing.build(point_labels(board.size()))?;
    fill_lattice(board, graph)
}

fn fill_lattice<G>(board: &GoBoard, mut graph: G) -> GraphResult<G>
where
    G: Graph<Stone>,
{
    let size = board.size();

    for (col, row, stone) in board.points() {
        let here = point_label(col, row);
        graph.set_value(&here, stone)?;

        if col + 1 < size {
            let right = point_label(col + 1, row);
            graph.connect(&here, &right)?;
            graph.connect(&right, &here)?;
        }

        if row + 1 < size {
            let below = point_label(col, row + 1);
            graph.connect(&here, &below)?;
            graph.connect(&below, &here)?;
        }
    }

    debug!(
        "Built {} go graph for {}x{} board: {} vertices, {} edges",
        graph.backing(),
        size,
        size,
        graph.num_vertices(),
        graph.num_edges()
    );
    Ok(graph)
}
