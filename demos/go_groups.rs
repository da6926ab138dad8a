//! Go groups demo
//!
//! Builds the lattice graph of a small position, lists every same-stone
//! group, then shows the two backings side by side.
//!
//! Run with `cargo run --example go_groups -- '{"backing": "matrix"}'`, the
//! optional argument being a JSON `GoGraphConfig`.

use anyhow::Context;
use goban_graph::{go_graph_with, like_partition, GoBoard, GoGraphConfig, Graph};

fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    println!("Goban Graph v{}", goban_graph::version());
    println!("==========================================");
    println!();

    let config: GoGraphConfig = match std::env::args().nth(1) {
        Some(json) => serde_json::from_str(&json).context("parsing GoGraphConfig")?,
        None => GoGraphConfig::default(),
    };

    let board = GoBoard::from_rows(&[
        "BB.W.", //
        "B.WW.", //
        "..W.B", //
        "WW.BB", //
        ".W..B",
    ])?;

    println!("=== Position ===");
    print!("{}", board);
    println!();

    demo_groups(&board, &config)?;
    demo_backings(&board)?;

    Ok(())
}

fn demo_groups(board: &GoBoard, config: &GoGraphConfig) -> anyhow::Result<()> {
    println!("=== Groups ({}) ===", config.backing);
    let graph = go_graph_with(board, config)?;
    let partition = like_partition(&graph)?;

    for component in &partition.components {
        let mut members: Vec<&str> = component.iter().map(|l| l.as_str()).collect();
        members.sort();
        let Some(first) = members.first() else { continue };
        let owner = match graph.get_value(first)? {
            Some(stone) => stone.to_string(),
            None => "empty".to_string(),
        };
        println!("  {:>5} x{}: {}", owner, members.len(), members.join(" "));
    }
    println!("  {} groups total", partition.len());
    println!();
    Ok(())
}

fn demo_backings(board: &GoBoard) -> anyhow::Result<()> {
    println!("=== Backings ===");
    let list = goban_graph::go_graph(board)?;
    let matrix = list.to_adj_matrix();

    println!(
        "  list:   {} vertices, {} stored edges",
        list.num_vertices(),
        list.num_edges()
    );
    println!(
        "  matrix: {} vertices, {} set cells",
        matrix.num_vertices(),
        matrix.num_edges()
    );
    println!(
        "  same edge relation: {}",
        if list.edges() == matrix.edges() { "yes" } else { "no" }
    );
    Ok(())
}
