use super::{ShortestPath, Traversal, endpoints, labels, require_directed};
use crate::error::Result;
use cairn_graphlib::{Distance, Graph, RunState, VertexId, alg};

/// Which vertex a DAG run starts counting from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DagSeed {
    /// Distance 0 goes to the first vertex of the topological order and the whole order is
    /// walked, whatever `from` is. A path is only reported when `to`'s back-pointer chain
    /// happens to pass through `from`.
    #[default]
    TopologicalRoot,
    /// Distance 0 goes to `from`; vertices ordered before it are skipped.
    Source,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct DagOptions {
    pub seed: DagSeed,
}

/// Shortest paths on a directed acyclic graph in one pass over a topological order.
///
/// Acyclicity is a precondition. A cyclic graph is logged and produces an unspecified result.
#[derive(Debug, Clone)]
pub struct DagShortestPath<'g> {
    graph: &'g Graph,
    state: RunState,
    options: DagOptions,
}

impl<'g> DagShortestPath<'g> {
    pub fn new(graph: &'g Graph) -> Result<Self> {
        Self::with_options(graph, DagOptions::default())
    }

    pub fn with_options(graph: &'g Graph, options: DagOptions) -> Result<Self> {
        require_directed(graph, "DAG shortest path", true)?;
        Ok(Self {
            graph,
            state: RunState::new(graph),
            options,
        })
    }

    pub fn options(&self) -> DagOptions {
        self.options
    }

    /// Returns the number of vertices walked, or `None` when there is nothing to walk. Expects
    /// a freshly reset state.
    fn run(&mut self, from: VertexId) -> Option<usize> {
        let g = self.graph;

        let order = alg::topological_order(g).ok()?;
        if order.is_empty() {
            return None;
        }
        if !alg::is_topological(g, &order) {
            tracing::warn!("graph has a cycle; DAG shortest paths are unreliable");
        }

        let start = match self.options.seed {
            DagSeed::TopologicalRoot => 0,
            DagSeed::Source => order.iter().position(|&v| v == from)?,
        };
        self.state.vertex_mut(order[start]).distance = Distance::ZERO;

        let walk = &order[start..];
        for &v in walk {
            self.state.vertex_mut(v).visited = true;
            for &edge in g.out_edge_ids(v) {
                self.state.relax(g, edge);
            }
        }
        Some(walk.len())
    }
}

impl<'g> Traversal<'g> for DagShortestPath<'g> {
    fn graph(&self) -> &'g Graph {
        self.graph
    }

    fn state(&self) -> &RunState {
        &self.state
    }
}

impl<'g> ShortestPath<'g> for DagShortestPath<'g> {
    #[tracing::instrument(skip(self), fields(seed = ?self.options.seed))]
    fn shortest_path(&mut self, from: &str, to: &str) -> Option<Vec<&'g str>> {
        let g = self.graph;
        self.state.reset();
        let (from, to) = endpoints(g, from, to)?;
        let walked = self.run(from)?;
        tracing::debug!(walked, "dag shortest path finished");
        self.state.path_to(from, to).map(|p| labels(g, p))
    }
}
