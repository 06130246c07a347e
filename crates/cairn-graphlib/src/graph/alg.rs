//! Ordering helpers for directed graphs.

use super::{Graph, VertexId};
use crate::error::{GraphError, Result};

/// Topological order of a directed graph: for every edge `u -> v`, `u` precedes `v`, provided
/// the graph is acyclic.
///
/// Depth-first post-order with an explicit stack. Roots are tried in vertex insertion order
/// (so disconnected pieces are all covered) and neighbours in outgoing-edge insertion order;
/// a finished vertex is prepended to the result. Each vertex keeps a cursor into its edge list,
/// so the walk is O(V + E) and terminates on cyclic input too (the order is then meaningless).
pub fn topological_order(g: &Graph) -> Result<Vec<VertexId>> {
    if !g.is_directed() {
        return Err(GraphError::WrongGraphKind {
            expected: "directed",
        });
    }

    let n = g.vertex_count();
    let mut visited = vec![false; n];
    let mut cursor = vec![0usize; n];
    let mut finished: Vec<VertexId> = Vec::with_capacity(n);
    let mut stack: Vec<VertexId> = Vec::new();

    for root in g.vertex_ids() {
        if visited[root.index()] {
            continue;
        }
        visited[root.index()] = true;
        stack.push(root);

        while let Some(&top) = stack.last() {
            let out = g.out_edge_ids(top);
            let mut next = None;
            while let Some(&edge) = out.get(cursor[top.index()]) {
                cursor[top.index()] += 1;
                let w = g.edge_at(edge).target_id();
                if !visited[w.index()] {
                    next = Some(w);
                    break;
                }
            }
            match next {
                Some(w) => {
                    visited[w.index()] = true;
                    stack.push(w);
                }
                None => {
                    stack.pop();
                    finished.push(top);
                }
            }
        }
    }

    finished.reverse();
    Ok(finished)
}

/// Whether `order` lists every vertex of `g` exactly once with each edge pointing forward.
pub fn is_topological(g: &Graph, order: &[VertexId]) -> bool {
    if !g.is_directed() || order.len() != g.vertex_count() {
        return false;
    }
    let mut position = vec![usize::MAX; g.vertex_count()];
    for (i, v) in order.iter().enumerate() {
        match position.get_mut(v.index()) {
            Some(slot) if *slot == usize::MAX => *slot = i,
            _ => return false,
        }
    }
    g.edges()
        .all(|e| position[e.source_id().index()] < position[e.target_id().index()])
}
