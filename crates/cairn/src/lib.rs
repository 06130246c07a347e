#![forbid(unsafe_code)]

//! Shortest-path and minimum-spanning-tree algorithms over labelled weighted graphs.
//!
//! Graphs come from [`graphlib`]. Each algorithm borrows a graph read-only and owns a
//! [`RunState`] table; a query resets that table, runs, and leaves it in its final form so the
//! distances, visited flags and edge states of the last run can be inspected afterwards.
//!
//! | algorithm                 | graph      | weights     |
//! |---------------------------|------------|-------------|
//! | [`BellmanFord`]           | directed   | any         |
//! | [`DagShortestPath`]       | directed   | any, acyclic|
//! | [`Dijkstra`]              | undirected | at least 1  |
//! | [`PrimJarnik`]            | undirected | at least 1  |

pub use cairn_graphlib as graphlib;

pub mod algo;
pub mod error;

pub use algo::{
    BellmanFord, DagOptions, DagSeed, DagShortestPath, Dijkstra, PrimJarnik, ShortestPath,
    Traversal,
};
pub use error::{Error, Result};
pub use graphlib::{
    Distance, EdgeState, Graph, GraphError, GraphOptions, RunState, VertexState,
};
