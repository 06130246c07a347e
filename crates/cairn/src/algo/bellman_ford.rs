use super::{ShortestPath, Traversal, endpoints, labels, require_directed};
use crate::error::Result;
use cairn_graphlib::{Distance, Graph, Relaxation, RunState, VertexId};

/// Single-source shortest paths on a directed graph by repeated relaxation.
///
/// Negative weights are fine. A negative cycle reachable from the source is a precondition
/// violation: the run stops after `|V|` passes with a warning and the result is meaningless.
#[derive(Debug, Clone)]
pub struct BellmanFord<'g> {
    graph: &'g Graph,
    state: RunState,
}

impl<'g> BellmanFord<'g> {
    pub fn new(graph: &'g Graph) -> Result<Self> {
        require_directed(graph, "Bellman-Ford", true)?;
        Ok(Self {
            graph,
            state: RunState::new(graph),
        })
    }

    /// Relaxes every outgoing edge of every reached vertex until a pass changes nothing.
    /// Returns the number of passes made. Expects a freshly reset state.
    fn run(&mut self, source: VertexId) -> usize {
        let g = self.graph;
        let s = self.state.vertex_mut(source);
        s.distance = Distance::ZERO;
        s.visited = true;

        let cap = g.vertex_count();
        let mut passes = 0;
        loop {
            passes += 1;
            let mut changed = false;
            for v in g.vertex_ids() {
                if !self.state.vertex(v).visited {
                    continue;
                }
                for &edge in g.out_edge_ids(v) {
                    changed |= self.state.relax(g, edge) == Relaxation::Improved;
                }
            }
            if !changed {
                break;
            }
            if passes >= cap {
                tracing::warn!(
                    source = g.label(source),
                    passes,
                    "distances still improving after |V| passes; negative cycle reachable"
                );
                break;
            }
        }
        passes
    }
}

impl<'g> Traversal<'g> for BellmanFord<'g> {
    fn graph(&self) -> &'g Graph {
        self.graph
    }

    fn state(&self) -> &RunState {
        &self.state
    }
}

impl<'g> ShortestPath<'g> for BellmanFord<'g> {
    #[tracing::instrument(skip(self))]
    fn shortest_path(&mut self, from: &str, to: &str) -> Option<Vec<&'g str>> {
        let g = self.graph;
        self.state.reset();
        let (from, to) = endpoints(g, from, to)?;
        let passes = self.run(from);
        tracing::debug!(
            passes,
            reached = self.state.vertices().filter(|(_, v)| v.visited).count(),
            "bellman-ford finished"
        );
        self.state.path_to(from, to).map(|p| labels(g, p))
    }
}
