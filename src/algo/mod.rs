//! Graph algorithms
//!
//! Algorithms here are written against the [`Graph`](crate::graph::Graph)
//! trait only and run unchanged on either backing or on a `dyn Graph`.

pub mod component;

pub use component::{like_component, like_partition, LikePartition};
