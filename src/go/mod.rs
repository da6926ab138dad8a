//! Go board adapter
//!
//! A [`GoBoard`] is a plain data source; [`go_graph`] turns it into a lattice
//! graph whose vertex values are the stones, ready for component search.

pub mod board;
pub mod lattice;

pub use board::{BoardError, BoardResult, GoBoard, Stone, MIN_BOARD_SIZE};
pub use lattice::{go_graph, go_graph_with, point_label, GoGraphConfig};
