//! The four algorithms and the traits they share.

mod bellman_ford;
mod dag;
mod dijkstra;
mod prim_jarnik;

pub use bellman_ford::BellmanFord;
pub use dag::{DagOptions, DagSeed, DagShortestPath};
pub use dijkstra::Dijkstra;
pub use prim_jarnik::PrimJarnik;

use crate::error::{Error, Result};
use cairn_graphlib::{EdgeState, Graph, RunState, VertexId, VertexState};

/// Read-only view of an algorithm's graph and of the state its last query left behind.
pub trait Traversal<'g> {
    fn graph(&self) -> &'g Graph;

    fn state(&self) -> &RunState;

    fn vertex_state(&self, label: &str) -> Option<&VertexState> {
        let id = self.graph().vertex_id(label)?;
        Some(self.state().vertex(id))
    }

    fn edge_state(&self, from: &str, to: &str) -> Option<EdgeState> {
        let edge = self.graph().edge(from, to)?;
        Some(self.state().edge(edge.id()))
    }
}

pub trait ShortestPath<'g>: Traversal<'g> {
    /// Labels along a cheapest path, both endpoints included. `None` if either label is
    /// unknown or `to` cannot be reached.
    fn shortest_path(&mut self, from: &str, to: &str) -> Option<Vec<&'g str>>;

    /// Total weight of [`ShortestPath::shortest_path`], read off the run state it leaves. `None`
    /// when there is no path or the total does not fit in an `i64`.
    fn shortest_path_cost(&mut self, from: &str, to: &str) -> Option<i64> {
        if self.shortest_path(from, to)?.len() == 1 {
            return Some(0);
        }
        let g = self.graph();
        let start = self.state().vertex(g.vertex_id(from)?).distance.finite()?;
        let end = self.state().vertex(g.vertex_id(to)?).distance.finite()?;
        end.checked_sub(start)
    }
}

pub(crate) fn endpoints(g: &Graph, from: &str, to: &str) -> Option<(VertexId, VertexId)> {
    Some((g.vertex_id(from)?, g.vertex_id(to)?))
}

pub(crate) fn labels(g: &Graph, path: Vec<VertexId>) -> Vec<&str> {
    path.into_iter().map(|v| g.label(v)).collect()
}

pub(crate) fn require_directed(g: &Graph, algorithm: &'static str, directed: bool) -> Result<()> {
    if g.is_directed() == directed {
        return Ok(());
    }
    Err(Error::WrongGraphKind {
        algorithm,
        expected: if directed { "directed" } else { "undirected" },
    })
}

/// Rejects any edge lighter than 1.
pub(crate) fn require_positive_weights(g: &Graph, algorithm: &'static str) -> Result<()> {
    match g.edges().find(|e| e.weight() < 1) {
        Some(e) => Err(Error::InvalidWeight {
            algorithm,
            from: e.source().to_string(),
            to: e.target().to_string(),
            weight: e.weight(),
        }),
        None => Ok(()),
    }
}
