#![forbid(unsafe_code)]

//! Graph container APIs used by `cairn`.
//!
//! A [`Graph`] owns vertices (unique string labels) and weighted edges, either directed or
//! undirected. It carries no traversal state: distances, visited flags, back-pointers and
//! edge exploration marks live in a [`RunState`] table built against a borrowed graph, so a
//! graph can be shared read-only by any number of runs.

pub mod error;
mod graph;
pub mod state;

pub use error::{GraphError, Result};
pub use graph::{Edge, EdgeId, Graph, GraphOptions, Vertex, VertexId, alg};
pub use state::{Distance, EdgeState, Predecessor, Relaxation, RunState, VertexState};
