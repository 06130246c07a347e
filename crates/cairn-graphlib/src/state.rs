//! Per-run traversal state.
//!
//! A [`RunState`] holds one [`VertexState`] per vertex and one [`EdgeState`] per edge of the
//! graph it was built for, indexed by [`VertexId`] / [`EdgeId`]. Algorithms reset it at the
//! start of every query and leave it in its final form afterwards so callers can inspect how
//! the run went (which edges ended on the path, which were relaxed away, and so on).

use crate::graph::{EdgeId, Graph, VertexId};
use std::fmt;

/// Tentative distance: a finite value or the `Infinite` sentinel, which sorts above every
/// finite value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum Distance {
    Finite(i64),
    #[default]
    Infinite,
}

impl Distance {
    pub const ZERO: Self = Self::Finite(0);

    pub fn finite(self) -> Option<i64> {
        match self {
            Self::Finite(d) => Some(d),
            Self::Infinite => None,
        }
    }

    pub fn is_finite(self) -> bool {
        matches!(self, Self::Finite(_))
    }

    /// Extends the distance by one edge. `Infinite` stays `Infinite`; `None` when a finite sum
    /// leaves the `i64` range.
    pub fn checked_add(self, weight: i64) -> Option<Distance> {
        match self {
            Self::Finite(d) => d.checked_add(weight).map(Self::Finite),
            Self::Infinite => Some(Self::Infinite),
        }
    }
}

impl fmt::Display for Distance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Finite(d) => write!(f, "{d}"),
            Self::Infinite => f.write_str("INFINITY"),
        }
    }
}

/// How the last run treated an edge. Purely observational.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum EdgeState {
    #[default]
    Unexplored,
    Explored,
    Relaxed,
    OnPath,
}

/// Non-owning back-pointer: the vertex and edge a vertex was last reached through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Predecessor {
    pub vertex: VertexId,
    pub edge: EdgeId,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct VertexState {
    pub distance: Distance,
    pub visited: bool,
    pub predecessor: Option<Predecessor>,
}

/// Outcome of relaxing one edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Relaxation {
    /// The edge lowered its target's distance and is now on the path.
    Improved,
    /// The candidate matched the target's distance; the edge state is left alone.
    Tied,
    /// The candidate was worse; the edge is marked relaxed.
    Rejected,
}

#[derive(Debug, Clone)]
pub struct RunState {
    vertices: Vec<VertexState>,
    edges: Vec<EdgeState>,
}

impl RunState {
    pub fn new(graph: &Graph) -> Self {
        Self {
            vertices: vec![VertexState::default(); graph.vertex_count()],
            edges: vec![EdgeState::default(); graph.edge_count()],
        }
    }

    /// Every distance back to `Infinite`, every flag cleared, every back-pointer dropped, every
    /// edge unexplored.
    pub fn reset(&mut self) {
        self.vertices.fill(VertexState::default());
        self.edges.fill(EdgeState::default());
    }

    pub fn vertex(&self, id: VertexId) -> &VertexState {
        &self.vertices[id.index()]
    }

    pub fn vertex_mut(&mut self, id: VertexId) -> &mut VertexState {
        &mut self.vertices[id.index()]
    }

    pub fn edge(&self, id: EdgeId) -> EdgeState {
        self.edges[id.index()]
    }

    pub fn set_edge(&mut self, id: EdgeId, state: EdgeState) {
        self.edges[id.index()] = state;
    }

    /// Marks an edge explored if nothing has touched it yet this run.
    pub fn explore(&mut self, id: EdgeId) {
        let e = &mut self.edges[id.index()];
        if *e == EdgeState::Unexplored {
            *e = EdgeState::Explored;
        }
    }

    pub fn vertices(&self) -> impl Iterator<Item = (VertexId, &VertexState)> {
        self.vertices
            .iter()
            .enumerate()
            .map(|(i, s)| (VertexId::from_index(i), s))
    }

    pub fn edges(&self) -> impl Iterator<Item = (EdgeId, EdgeState)> + '_ {
        self.edges.iter().enumerate().map(|(i, &s)| (EdgeId::from_index(i), s))
    }

    /// `Infinite` / unvisited / no back-pointer everywhere and every edge unexplored.
    pub fn is_reset(&self) -> bool {
        self.vertices.iter().all(|v| *v == VertexState::default())
            && self.edges.iter().all(|&e| e == EdgeState::Unexplored)
    }

    /// Records a better route into `target`: the previous best edge is demoted to `Relaxed`
    /// and `via.edge` becomes `OnPath`.
    pub fn improve(&mut self, target: VertexId, distance: Distance, via: Predecessor) {
        let state = &mut self.vertices[target.index()];
        if let Some(prev) = state.predecessor {
            self.edges[prev.edge.index()] = EdgeState::Relaxed;
        }
        state.distance = distance;
        state.predecessor = Some(via);
        self.edges[via.edge.index()] = EdgeState::OnPath;
    }

    /// Relaxes `edge` along its source -> target orientation.
    ///
    /// The edge is marked explored on first touch. A strictly better candidate improves the
    /// target (see [`RunState::improve`]) and marks it visited; a tie leaves the edge as it
    /// is; a worse candidate marks the edge relaxed. A candidate that overflows `i64` is
    /// rejected, so `to` is never given a clamped distance.
    pub fn relax(&mut self, graph: &Graph, edge: EdgeId) -> Relaxation {
        let e = graph.edge_at(edge);
        let (from, to) = (e.source_id(), e.target_id());
        self.explore(edge);

        let Some(candidate) = self.vertex(from).distance.checked_add(e.weight()) else {
            tracing::warn!(
                from = e.source(),
                to = e.target(),
                "path length overflows i64; edge skipped"
            );
            self.set_edge(edge, EdgeState::Relaxed);
            return Relaxation::Rejected;
        };
        let current = self.vertex(to).distance;
        match candidate.cmp(&current) {
            std::cmp::Ordering::Less => {
                self.improve(to, candidate, Predecessor { vertex: from, edge });
                self.vertex_mut(to).visited = true;
                tracing::trace!(
                    from = e.source(),
                    to = e.target(),
                    distance = %candidate,
                    "relaxed edge"
                );
                Relaxation::Improved
            }
            std::cmp::Ordering::Equal => Relaxation::Tied,
            std::cmp::Ordering::Greater => {
                self.set_edge(edge, EdgeState::Relaxed);
                Relaxation::Rejected
            }
        }
    }

    /// Walks back-pointers from `to` until `from` is reached. Returns the path `from ..= to`,
    /// or `None` if the chain ends (or runs longer than the vertex count) first.
    pub fn path_to(&self, from: VertexId, to: VertexId) -> Option<Vec<VertexId>> {
        let mut path = vec![to];
        let mut cur = to;
        for _ in 0..self.vertices.len() {
            if cur == from {
                path.reverse();
                return Some(path);
            }
            cur = self.vertex(cur).predecessor?.vertex;
            path.push(cur);
        }
        None
    }
}
