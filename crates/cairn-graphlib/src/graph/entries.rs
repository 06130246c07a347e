//! Internal storage entries for [`Graph`](super::Graph).

use super::EdgeId;

#[derive(Debug, Clone)]
pub(in crate::graph) struct NodeEntry {
    pub(in crate::graph) label: String,
    /// Outgoing edges for directed graphs, incident edges for undirected ones, in insertion
    /// order.
    pub(in crate::graph) edges: Vec<EdgeId>,
}

#[derive(Debug, Clone)]
pub(in crate::graph) struct EdgeEntry {
    pub(in crate::graph) v_ix: usize,
    pub(in crate::graph) w_ix: usize,
    pub(in crate::graph) weight: i64,
}
