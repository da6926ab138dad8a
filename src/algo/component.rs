//! Same-value component search
//!
//! Flood fill over any [`Graph`]: starting at a source vertex, follow
//! outgoing edges while the neighbor holds a value equal to the source's.
//! Absent values compare equal to each other.

use crate::graph::{Graph, GraphResult, VertexLabel};
use rustc_hash::{FxHashMap, FxHashSet};
use tracing::debug;

/// Labels reachable from `src` through vertices whose value equals `src`'s
///
/// Edge direction is respected, so a vertex that only points *at* the
/// component is not part of it. The result always contains `src`. Each vertex
/// is expanded at most once; exploration order is unspecified.
pub fn like_component<V, G>(graph: &G, src: &str) -> GraphResult<FxHashSet<VertexLabel>>
where
    V: Clone + PartialEq,
    G: Graph<V> + ?Sized,
{
    let value = graph.get_value(src)?;

    let mut like = FxHashSet::default();
    like.insert(VertexLabel::new(src));
    let mut stack = vec![VertexLabel::new(src)];

    while let Some(vertex) = stack.pop() {
        for neighbor in graph.out_neighbors(vertex.as_str())? {
            if like.contains(&neighbor) {
                continue;
            }
            if graph.get_value(neighbor.as_str())? == value {
                like.insert(neighbor.clone());
                stack.push(neighbor);
            }
        }
    }

    debug!("Like component of {} has {} vertices", src, like.len());
    Ok(like)
}

/// Result of [`like_partition`]
#[derive(Debug, Clone, Default)]
pub struct LikePartition {
    /// Components in discovery order
    pub components: Vec<FxHashSet<VertexLabel>>,
    /// Map of label -> index into `components`
    pub vertex_component: FxHashMap<VertexLabel, usize>,
}

impl LikePartition {
    /// The component `label` was assigned to
    pub fn component_of(&self, label: &str) -> Option<&FxHashSet<VertexLabel>> {
        self.vertex_component
            .get(label)
            .and_then(|&idx| self.components.get(idx))
    }

    /// Number of components
    pub fn len(&self) -> usize {
        self.components.len()
    }

    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }
}

/// Cover every vertex with like components
///
/// Vertices are taken in sorted label order; each one not yet assigned seeds a
/// [`like_component`]. On graphs with symmetric edges (such as Go lattices)
/// this is the exact partition into same-value groups. On other graphs
/// components may overlap, and a vertex keeps the first component that
/// reached it.
pub fn like_partition<V, G>(graph: &G) -> GraphResult<LikePartition>
where
    V: Clone + PartialEq,
    G: Graph<V> + ?Sized,
{
    let mut labels: Vec<VertexLabel> = graph.vertex_labels().into_iter().collect();
    labels.sort();

    let mut partition = LikePartition::default();

    for label in labels {
        if partition.vertex_component.contains_key(&label) {
            continue;
        }

        let component = like_component(graph, label.as_str())?;
        let idx = partition.components.len();
        for member in &component {
            partition
                .vertex_component
                .entry(member.clone())
                .or_insert(idx);
        }
        partition.components.push(component);
    }

    debug!(
        "Partitioned {} vertices into {} like components",
        partition.vertex_component.len(),
        partition.components.len()
    );
    Ok(partition)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::{AdjacencyListDigraph, AdjacencyMatrixDigraph, GraphError};

    fn set(labels: &[&str]) -> FxHashSet<VertexLabel> {
        labels.iter().map(|&l| VertexLabel::new(l)).collect()
    }

    #[test]
    fn test_chain_follows_equal_values() {
        // a -> b -> c -> d, values 1 1 1 2
        let mut g: AdjacencyListDigraph<i32> =
            AdjacencyListDigraph::new(["a", "b", "c", "d"]).unwrap();
        for (label, value) in [("a", 1), ("b", 1), ("c", 1), ("d", 2)] {
            g.set_value(label, Some(value)).unwrap();
        }
        g.connect("a", "b").unwrap();
        g.connect("b", "c").unwrap();
        g.connect("c", "d").unwrap();

        assert_eq!(like_component(&g, "a").unwrap(), set(&["a", "b", "c"]));
        assert_eq!(like_component(&g, "d").unwrap(), set(&["d"]));
    }

    #[test]
    fn test_direction_is_respected() {
        let mut g: AdjacencyMatrixDigraph<char> =
            AdjacencyMatrixDigraph::new(["a", "b"]).unwrap();
        g.set_value("a", Some('x')).unwrap();
        g.set_value("b", Some('x')).unwrap();
        g.connect("b", "a").unwrap();

        assert_eq!(like_component(&g, "a").unwrap(), set(&["a"]));
        assert_eq!(like_component(&g, "b").unwrap(), set(&["a", "b"]));
    }

    #[test]
    fn test_absent_values_match_each_other() {
        let mut g: AdjacencyListDigraph<i32> =
            AdjacencyListDigraph::new(["a", "b", "c"]).unwrap();
        g.set_value("c", Some(3)).unwrap();
        g.connect("a", "b").unwrap();
        g.connect("b", "c").unwrap();

        assert_eq!(like_component(&g, "a").unwrap(), set(&["a", "b"]));
    }

    #[test]
    fn test_cycles_terminate() {
        let mut g: AdjacencyListDigraph<()> =
            AdjacencyListDigraph::new(["a", "b", "c"]).unwrap();
        g.connect("a", "b").unwrap();
        g.connect("b", "c").unwrap();
        g.connect("c", "a").unwrap();
        g.connect("a", "a").unwrap();
        g.connect("a", "b").unwrap();

        assert_eq!(like_component(&g, "b").unwrap(), set(&["a", "b", "c"]));
    }

    #[test]
    fn test_unknown_source() {
        let g: AdjacencyListDigraph<()> = AdjacencyListDigraph::new(["a"]).unwrap();
        assert_eq!(like_component(&g, "zz"), Err(GraphError::unknown("zz")));
    }

    #[test]
    fn test_partition_of_symmetric_graph() {
        // a - b   c - d   with values 1 1 | 1 2
        let mut g: AdjacencyListDigraph<i32> =
            AdjacencyListDigraph::new(["a", "b", "c", "d"]).unwrap();
        for (label, value) in [("a", 1), ("b", 1), ("c", 1), ("d", 2)] {
            g.set_value(label, Some(value)).unwrap();
        }
        for (x, y) in [("a", "b"), ("c", "d")] {
            g.connect(x, y).unwrap();
            g.connect(y, x).unwrap();
        }

        let partition = like_partition(&g).unwrap();
        assert_eq!(partition.len(), 3);
        assert_eq!(partition.components[0], set(&["a", "b"]));
        assert_eq!(partition.component_of("c").unwrap(), &set(&["c"]));
        assert_eq!(partition.vertex_component["d"], 2);
        assert!(partition.component_of("zz").is_none());
    }
}
