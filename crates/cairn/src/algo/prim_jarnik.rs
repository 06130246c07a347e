use super::{Traversal, labels, require_directed, require_positive_weights};
use crate::error::Result;
use cairn_graphlib::{Distance, EdgeId, EdgeState, Graph, Predecessor, RunState, VertexId};
use std::cmp::Reverse;
use std::collections::BinaryHeap;

/// Minimum spanning tree of the component containing a start vertex.
///
/// Edges wait in a binary heap keyed by `(weight, insertion sequence)`. After a run every tree
/// edge is `OnPath`, every cycle-closing edge is `Relaxed`, and each vertex's distance is the
/// length of its tree path back to the start.
#[derive(Debug, Clone)]
pub struct PrimJarnik<'g> {
    graph: &'g Graph,
    state: RunState,
}

impl<'g> PrimJarnik<'g> {
    pub fn new(graph: &'g Graph) -> Result<Self> {
        require_directed(graph, "Prim-Jarnik", false)?;
        require_positive_weights(graph, "Prim-Jarnik")?;
        Ok(Self {
            graph,
            state: RunState::new(graph),
        })
    }

    /// Vertices in the order they joined the tree, starting with `start`.
    #[tracing::instrument(skip(self))]
    pub fn min_spanning_tree(&mut self, start: &str) -> Option<Vec<&'g str>> {
        let g = self.graph;
        self.state.reset();
        let start = g.vertex_id(start)?;
        let tree = self.run(start);
        tracing::debug!(tree_size = tree.len(), "prim-jarnik finished");
        Some(labels(g, tree))
    }

    /// Sum of the tree edge weights from a fresh run. `None` for an unknown start or a sum
    /// outside the `i64` range.
    pub fn min_spanning_tree_cost(&mut self, start: &str) -> Option<i64> {
        self.min_spanning_tree(start)?;
        let g = self.graph;
        let cost = self
            .state
            .edges()
            .filter(|&(_, s)| s == EdgeState::OnPath)
            .try_fold(0i64, |acc, (e, _)| acc.checked_add(g.edge_at(e).weight()));
        if cost.is_none() {
            tracing::warn!(start, "spanning tree weight overflows i64");
        }
        cost
    }

    /// Expects a freshly reset state.
    fn run(&mut self, start: VertexId) -> Vec<VertexId> {
        let g = self.graph;
        self.state.vertex_mut(start).distance = Distance::ZERO;

        let mut heap: BinaryHeap<Reverse<(i64, usize, EdgeId)>> = BinaryHeap::new();
        let mut seq = 0usize;
        let mut tree = vec![start];
        self.grow(start, &mut heap, &mut seq);

        while let Some(Reverse((weight, _, edge))) = heap.pop() {
            let e = g.edge_at(edge);
            let (a, b) = (e.source_id(), e.target_id());
            let (from, to) = match (self.state.vertex(a).visited, self.state.vertex(b).visited) {
                (true, true) => {
                    self.state.set_edge(edge, EdgeState::Relaxed);
                    continue;
                }
                (true, false) => (a, b),
                _ => (b, a),
            };

            // `to` is unvisited, so its distance is still infinite and any route improves it.
            let distance = self
                .state
                .vertex(from)
                .distance
                .checked_add(weight)
                .unwrap_or_else(|| {
                    tracing::warn!(vertex = g.label(to), "tree path length overflows i64");
                    Distance::Infinite
                });
            self.state.improve(to, distance, Predecessor { vertex: from, edge });
            self.grow(to, &mut heap, &mut seq);
            tree.push(to);
        }
        tree
    }

    /// Marks `v` as part of the tree and queues its untouched edges.
    fn grow(
        &mut self,
        v: VertexId,
        heap: &mut BinaryHeap<Reverse<(i64, usize, EdgeId)>>,
        seq: &mut usize,
    ) {
        let g = self.graph;
        self.state.vertex_mut(v).visited = true;
        for &edge in g.out_edge_ids(v) {
            if self.state.edge(edge) == EdgeState::Unexplored {
                self.state.set_edge(edge, EdgeState::Explored);
                *seq += 1;
                heap.push(Reverse((g.edge_at(edge).weight(), *seq, edge)));
            }
        }
    }
}

impl<'g> Traversal<'g> for PrimJarnik<'g> {
    fn graph(&self) -> &'g Graph {
        self.graph
    }

    fn state(&self) -> &RunState {
        &self.state
    }
}
