use super::{
    ShortestPath, Traversal, endpoints, labels, require_directed, require_positive_weights,
};
use crate::error::Result;
use cairn_graphlib::{Distance, EdgeState, Graph, Predecessor, RunState, VertexId};
use std::cmp::Reverse;
use std::collections::BinaryHeap;

/// Single-source shortest paths on an undirected graph with weights of at least 1.
///
/// The frontier is a binary heap keyed by `(distance, insertion sequence)`, so equal distances
/// pop in the order they were pushed. Stale entries are skipped when popped.
#[derive(Debug, Clone)]
pub struct Dijkstra<'g> {
    graph: &'g Graph,
    state: RunState,
}

impl<'g> Dijkstra<'g> {
    /// Fails if the graph is directed or carries a weight below 1. The graph stays borrowed,
    /// so the check holds for every later query.
    pub fn new(graph: &'g Graph) -> Result<Self> {
        require_directed(graph, "Dijkstra", false)?;
        require_positive_weights(graph, "Dijkstra")?;
        Ok(Self {
            graph,
            state: RunState::new(graph),
        })
    }

    /// Distance from `from` to `to`; `Infinite` when unreachable or either label is unknown.
    pub fn distance(&mut self, from: &str, to: &str) -> Distance {
        let Some((from, to)) = endpoints(self.graph, from, to) else {
            return Distance::Infinite;
        };
        self.run(from);
        self.state.vertex(to).distance
    }

    /// Returns the number of settled vertices.
    fn run(&mut self, source: VertexId) -> usize {
        let g = self.graph;
        self.state.reset();
        let s = self.state.vertex_mut(source);
        s.distance = Distance::ZERO;
        s.visited = true;

        let mut settled = vec![false; g.vertex_count()];
        let mut settled_count = 0;
        let mut seq = 0usize;
        let mut heap = BinaryHeap::new();
        heap.push(Reverse((Distance::ZERO, seq, source)));

        while let Some(Reverse((_, _, v))) = heap.pop() {
            if settled[v.index()] {
                continue;
            }
            settled[v.index()] = true;
            settled_count += 1;

            for &edge in g.out_edge_ids(v) {
                if self.state.edge(edge) != EdgeState::Unexplored {
                    continue;
                }
                self.state.set_edge(edge, EdgeState::Explored);
                let e = g.edge_at(edge);
                let Some(w) = e.opposite_id(v) else {
                    continue;
                };

                let Some(candidate) = self.state.vertex(v).distance.checked_add(e.weight()) else {
                    tracing::warn!(vertex = g.label(w), "path length overflows i64; edge skipped");
                    self.state.set_edge(edge, EdgeState::Relaxed);
                    continue;
                };
                if candidate < self.state.vertex(w).distance {
                    self.state.improve(w, candidate, Predecessor { vertex: v, edge });
                    seq += 1;
                    heap.push(Reverse((candidate, seq, w)));
                    tracing::trace!(vertex = g.label(w), distance = %candidate, "improved");
                } else {
                    self.state.set_edge(edge, EdgeState::Relaxed);
                }
                self.state.vertex_mut(w).visited = true;
            }
        }
        settled_count
    }
}

impl<'g> Traversal<'g> for Dijkstra<'g> {
    fn graph(&self) -> &'g Graph {
        self.graph
    }

    fn state(&self) -> &RunState {
        &self.state
    }
}

impl<'g> ShortestPath<'g> for Dijkstra<'g> {
    #[tracing::instrument(skip(self))]
    fn shortest_path(&mut self, from: &str, to: &str) -> Option<Vec<&'g str>> {
        let g = self.graph;
        let (from, to) = endpoints(g, from, to)?;
        let settled = self.run(from);
        tracing::debug!(settled, "dijkstra finished");
        self.state.path_to(from, to).map(|p| labels(g, p))
    }
}
