//! Interface-level tests run against both graph backings

use goban_graph::{
    AdjacencyListDigraph, AdjacencyMatrixDigraph, Backing, Edge, Graph, GraphError, VertexLabel,
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rustc_hash::FxHashSet;
use std::borrow::Cow;

const BACKINGS: [Backing; 2] = [Backing::List, Backing::Matrix];

fn labels(names: &[&str]) -> FxHashSet<VertexLabel> {
    names.iter().map(|&n| VertexLabel::new(n)).collect()
}

fn edges(pairs: &[(&str, &str)]) -> FxHashSet<Edge> {
    pairs.iter().map(|&(s, t)| Edge::new(s, t)).collect()
}

fn build(backing: Backing, names: &[&str]) -> Box<dyn Graph<i32>> {
    backing.build(names.iter().copied()).unwrap()
}

/// Random graph with values on roughly half the vertices
fn random_list(seed: u64, n: usize, edge_count: usize) -> AdjacencyListDigraph<i32> {
    let mut rng = StdRng::seed_from_u64(seed);
    let names: Vec<String> = (0..n).map(|i| format!("v{}", i)).collect();
    let mut g = AdjacencyListDigraph::new(names.iter()).unwrap();

    for name in &names {
        if rng.gen_bool(0.5) {
            g.set_value(name, Some(rng.gen_range(0..4))).unwrap();
        }
    }
    for _ in 0..edge_count {
        let src = &names[rng.gen_range(0..n)];
        let dst = &names[rng.gen_range(0..n)];
        g.connect(src, dst).unwrap();
    }
    g
}

#[test]
fn test_vertex_labels_match_input() {
    let names = ["x", "y", "z", "w"];
    for backing in BACKINGS {
        let g = build(backing, &names);
        assert_eq!(g.vertex_labels(), labels(&names), "{}", backing);
        assert_eq!(g.num_vertices(), 4);
        assert!(g.contains_vertex("w"));
        assert!(!g.contains_vertex("v"));
    }
}

#[test]
fn test_connect_then_query() {
    for backing in BACKINGS {
        let mut g = build(backing, &["a", "b", "c"]);
        g.connect("a", "b").unwrap();
        g.connect("a", "c").unwrap();

        assert!(g.connected("a", "b").unwrap());
        assert!(g.out_neighbors("a").unwrap().contains("b"));
        assert_eq!(g.out_neighbors("a").unwrap(), labels(&["b", "c"]));
        assert_eq!(g.edges(), edges(&[("a", "b"), ("a", "c")]));
    }
}

#[test]
fn test_edges_are_directed() {
    for backing in BACKINGS {
        let mut g = build(backing, &["a", "b"]);
        g.connect("a", "b").unwrap();
        assert!(!g.connected("b", "a").unwrap(), "{}", backing);

        g.connect("b", "a").unwrap();
        assert!(g.connected("b", "a").unwrap());
    }
}

#[test]
fn test_unknown_vertex_is_rejected_without_mutation() {
    for backing in BACKINGS {
        let mut g = build(backing, &["a", "b"]);
        g.connect("a", "b").unwrap();
        let before = g.edges();

        let err = g.connect("nonexistent", "a").unwrap_err();
        assert_eq!(err, GraphError::UnknownVertex(VertexLabel::new("nonexistent")));
        assert!(g.connect("a", "nonexistent").is_err());
        assert_eq!(g.edges(), before);
        assert_eq!(g.num_edges(), 1);

        assert!(g.connected("nonexistent", "a").is_err());
        assert!(g.connected("a", "nonexistent").is_err());
        assert!(g.out_neighbors("nonexistent").is_err());
        assert!(g.get_value("nonexistent").is_err());
        assert!(g.set_value("nonexistent", Some(1)).is_err());
    }
}

#[test]
fn test_edge_count_asymmetry() {
    let mut list: AdjacencyListDigraph<i32> = AdjacencyListDigraph::new(["a", "b"]).unwrap();
    let mut matrix: AdjacencyMatrixDigraph<i32> = AdjacencyMatrixDigraph::new(["a", "b"]).unwrap();

    for _ in 0..2 {
        list.connect("a", "b").unwrap();
        matrix.connect("a", "b").unwrap();
    }

    assert_eq!(list.num_edges(), 2);
    assert_eq!(list.edges().len(), 1);
    assert_eq!(matrix.num_edges(), 1);
    assert_eq!(matrix.edges(), list.edges());
}

#[test]
fn test_values_default_absent_and_overwrite() {
    for backing in BACKINGS {
        let mut g = build(backing, &["a", "b"]);
        assert_eq!(g.get_value("a").unwrap(), None);

        g.set_value("a", Some(5)).unwrap();
        g.set_value("a", Some(6)).unwrap();
        assert_eq!(g.get_value("a").unwrap(), Some(&6));
        assert_eq!(g.get_value("b").unwrap(), None);

        g.set_value("a", None).unwrap();
        assert_eq!(g.get_value("a").unwrap(), None);
    }
}

#[test]
fn test_identity_conversions_share_instance() {
    let list: AdjacencyListDigraph<i32> = AdjacencyListDigraph::new(["a"]).unwrap();
    match list.to_adj_list() {
        Cow::Borrowed(same) => assert!(std::ptr::eq(same, &list)),
        Cow::Owned(_) => panic!("expected the same list instance"),
    }

    let matrix: AdjacencyMatrixDigraph<i32> = AdjacencyMatrixDigraph::new(["a"]).unwrap();
    match matrix.to_adj_matrix() {
        Cow::Borrowed(same) => assert!(std::ptr::eq(same, &matrix)),
        Cow::Owned(_) => panic!("expected the same matrix instance"),
    }

    assert!(matches!(list.to_adj_matrix(), Cow::Owned(_)));
    assert!(matches!(matrix.to_adj_list(), Cow::Owned(_)));
}

#[test]
fn test_round_trip_preserves_edges_and_values() {
    for seed in 0..8 {
        let g = random_list(seed, 12, 40);
        let round_trip = g.to_adj_matrix().to_adj_list().into_owned();

        assert_eq!(round_trip.edges(), g.to_adj_list().edges(), "seed {}", seed);
        assert_eq!(round_trip.vertex_labels(), g.vertex_labels());
        for label in g.vertex_labels() {
            assert_eq!(
                round_trip.get_value(label.as_str()).unwrap(),
                g.get_value(label.as_str()).unwrap(),
                "seed {} vertex {}",
                seed,
                label
            );
        }
        // Multiplicity is not carried through the matrix
        assert_eq!(round_trip.num_edges(), g.edges().len());
    }
}

#[test]
fn test_matrix_round_trip() {
    let mut m: AdjacencyMatrixDigraph<i32> = AdjacencyMatrixDigraph::new(["p", "q", "r"]).unwrap();
    m.connect("p", "q").unwrap();
    m.connect("r", "r").unwrap();
    m.set_value("q", Some(9)).unwrap();

    let back = m.to_adj_list().to_adj_matrix().into_owned();
    assert_eq!(back, m);
}

#[test]
fn test_cross_conversion_is_independent() {
    let mut list: AdjacencyListDigraph<i32> = AdjacencyListDigraph::new(["a", "b"]).unwrap();
    list.set_value("a", Some(1)).unwrap();

    let mut matrix = list.to_adj_matrix().into_owned();
    matrix.connect("a", "b").unwrap();
    matrix.set_value("a", Some(2)).unwrap();
    assert!(!list.connected("a", "b").unwrap());
    assert_eq!(list.get_value("a").unwrap(), Some(&1));

    list.connect("b", "a").unwrap();
    assert!(!matrix.connected("b", "a").unwrap());

    let mut list_again = matrix.to_adj_list().into_owned();
    list_again.set_value("b", Some(3)).unwrap();
    assert_eq!(matrix.get_value("b").unwrap(), None);
}

#[test]
fn test_construction_rules_match_across_backings() {
    for backing in BACKINGS {
        let dup = backing.build::<i32, _, _>(["a", "b", "a"]).err();
        assert_eq!(dup, Some(GraphError::DuplicateVertex(VertexLabel::new("a"))));

        let empty = backing.build::<i32, _, _>(Vec::<&str>::new()).err();
        assert_eq!(empty, Some(GraphError::EmptyVertexSet));
    }
}

#[test]
fn test_dyn_graph_matches_concrete() {
    let concrete = random_list(99, 8, 20);
    let mut boxed = build(Backing::Matrix, &["v0", "v1", "v2", "v3", "v4", "v5", "v6", "v7"]);
    for edge in concrete.edges() {
        boxed.connect(edge.source.as_str(), edge.target.as_str()).unwrap();
    }

    assert_eq!(boxed.edges(), concrete.edges());
    for label in concrete.vertex_labels() {
        assert_eq!(
            boxed.out_neighbors(label.as_str()).unwrap(),
            concrete.out_neighbors(label.as_str()).unwrap()
        );
    }
}
