//! The weighted graph container.
//!
//! Vertices are kept in insertion order and looked up by label through a hash index; edges are
//! kept in insertion order and looked up by endpoint pair. Every vertex also records the edges
//! it owns (outgoing edges when directed, incident edges when undirected), so traversals never
//! scan the full edge list.

use crate::error::{GraphError, Result};
use rustc_hash::FxBuildHasher;
use std::fmt;

pub mod alg;
mod edge_key;
mod entries;
mod options;

use edge_key::{EdgeKey, EdgeKeyView};
use entries::{EdgeEntry, NodeEntry};
pub use options::GraphOptions;

type HashMap<K, V> = hashbrown::HashMap<K, V, FxBuildHasher>;

/// Dense vertex index. Stable until the next `remove_*` call on the owning graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct VertexId(usize);

impl VertexId {
    pub(crate) fn from_index(index: usize) -> Self {
        Self(index)
    }

    pub fn index(self) -> usize {
        self.0
    }
}

/// Dense edge index. Stable until the next `remove_*` call on the owning graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EdgeId(usize);

impl EdgeId {
    pub(crate) fn from_index(index: usize) -> Self {
        Self(index)
    }

    pub fn index(self) -> usize {
        self.0
    }
}

#[derive(Debug, Clone)]
pub struct Graph {
    options: GraphOptions,

    nodes: Vec<NodeEntry>,
    node_index: HashMap<String, usize>,

    edges: Vec<EdgeEntry>,
    edge_index: HashMap<EdgeKey, usize>,
}

impl Default for Graph {
    fn default() -> Self {
        Self::new(GraphOptions::default())
    }
}

impl Graph {
    pub fn new(options: GraphOptions) -> Self {
        Self {
            options,
            nodes: Vec::new(),
            node_index: HashMap::default(),
            edges: Vec::new(),
            edge_index: HashMap::default(),
        }
    }

    pub fn directed() -> Self {
        Self::new(GraphOptions { directed: true })
    }

    pub fn undirected() -> Self {
        Self::new(GraphOptions { directed: false })
    }

    pub fn options(&self) -> GraphOptions {
        self.options
    }

    pub fn is_directed(&self) -> bool {
        self.options.directed
    }

    fn edge_key_view<'a>(&self, v: &'a str, w: &'a str) -> EdgeKeyView<'a> {
        if self.options.directed || v <= w {
            EdgeKeyView { v, w }
        } else {
            EdgeKeyView { v: w, w: v }
        }
    }

    fn edge_index_of(&self, v: &str, w: &str) -> Option<usize> {
        let view = self.edge_key_view(v, w);
        self.edge_index.get(&view).copied()
    }

    fn unknown(label: &str) -> GraphError {
        GraphError::UnknownVertex {
            label: label.to_string(),
        }
    }

    // ---- vertices -------------------------------------------------------------------------

    pub fn add_vertex(&mut self, label: impl Into<String>) -> Result<VertexId> {
        let label = label.into();
        if self.node_index.contains_key(label.as_str()) {
            return Err(GraphError::DuplicateLabel { label });
        }
        let idx = self.nodes.len();
        self.node_index.insert(label.clone(), idx);
        self.nodes.push(NodeEntry {
            label,
            edges: Vec::new(),
        });
        Ok(VertexId(idx))
    }

    /// Removes the vertex and every edge touching it. Returns `false` if no such vertex exists.
    pub fn remove_vertex(&mut self, label: &str) -> bool {
        let Some(idx) = self.node_index.get(label).copied() else {
            return false;
        };

        let before = self.edges.len();
        self.edges.retain(|e| e.v_ix != idx && e.w_ix != idx);
        for e in &mut self.edges {
            if e.v_ix > idx {
                e.v_ix -= 1;
            }
            if e.w_ix > idx {
                e.w_ix -= 1;
            }
        }
        self.nodes.remove(idx);
        self.rebuild_indices();

        tracing::debug!(
            vertex = label,
            removed_edges = before - self.edges.len(),
            "removed vertex"
        );
        true
    }

    /// Relabels a vertex in place; its edges follow it.
    pub fn rename_vertex(&mut self, label: &str, new_label: impl Into<String>) -> Result<()> {
        let new_label = new_label.into();
        let Some(idx) = self.node_index.get(label).copied() else {
            return Err(Self::unknown(label));
        };
        if new_label == label {
            return Ok(());
        }
        if self.node_index.contains_key(new_label.as_str()) {
            return Err(GraphError::DuplicateLabel { label: new_label });
        }
        self.nodes[idx].label = new_label;
        self.rebuild_indices();
        Ok(())
    }

    pub fn has_vertex(&self, label: &str) -> bool {
        self.node_index.contains_key(label)
    }

    pub fn vertex(&self, label: &str) -> Option<Vertex<'_>> {
        self.vertex_id(label).map(|id| self.vertex_at(id))
    }

    pub fn vertex_id(&self, label: &str) -> Option<VertexId> {
        self.node_index.get(label).map(|&idx| VertexId(idx))
    }

    /// # Panics
    ///
    /// Panics if `id` does not belong to this graph.
    pub fn vertex_at(&self, id: VertexId) -> Vertex<'_> {
        assert!(id.0 < self.nodes.len(), "vertex id out of range");
        Vertex { graph: self, id }
    }

    /// # Panics
    ///
    /// Panics if `id` does not belong to this graph.
    pub fn label(&self, id: VertexId) -> &str {
        &self.nodes[id.0].label
    }

    pub fn vertex_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn vertices(&self) -> impl Iterator<Item = Vertex<'_>> {
        self.vertex_ids().map(move |id| Vertex { graph: self, id })
    }

    pub fn vertex_ids(&self) -> impl Iterator<Item = VertexId> + use<> {
        (0..self.nodes.len()).map(VertexId)
    }

    // ---- edges ----------------------------------------------------------------------------

    /// Adds an edge of weight 1.
    pub fn add_edge(&mut self, from: impl Into<String>, to: impl Into<String>) -> Result<EdgeId> {
        self.add_weighted_edge(from, to, 1)
    }

    pub fn add_weighted_edge(
        &mut self,
        from: impl Into<String>,
        to: impl Into<String>,
        weight: i64,
    ) -> Result<EdgeId> {
        let from = from.into();
        let to = to.into();
        let Some(v_ix) = self.node_index.get(from.as_str()).copied() else {
            return Err(GraphError::UnknownVertex { label: from });
        };
        let Some(w_ix) = self.node_index.get(to.as_str()).copied() else {
            return Err(GraphError::UnknownVertex { label: to });
        };
        if v_ix == w_ix {
            return Err(GraphError::SelfLoop { label: from });
        }
        let view = self.edge_key_view(&from, &to);
        if self.edge_index.contains_key(&view) {
            return Err(GraphError::DuplicateEdge { from, to });
        }

        let key = EdgeKey::from_view(view);
        let id = EdgeId(self.edges.len());
        self.edges.push(EdgeEntry { v_ix, w_ix, weight });
        self.edge_index.insert(key, id.0);
        self.nodes[v_ix].edges.push(id);
        if !self.options.directed {
            self.nodes[w_ix].edges.push(id);
        }
        Ok(id)
    }

    /// Removes the edge between `from` and `to` (either order when undirected). Returns `false`
    /// if there is no such edge.
    pub fn remove_edge(&mut self, from: &str, to: &str) -> bool {
        let Some(idx) = self.edge_index_of(from, to) else {
            return false;
        };
        self.edges.remove(idx);
        self.rebuild_indices();
        true
    }

    pub fn set_edge_weight(&mut self, from: &str, to: &str, weight: i64) -> Result<()> {
        let Some(idx) = self.edge_index_of(from, to) else {
            return Err(GraphError::EdgeNotFound {
                from: from.to_string(),
                to: to.to_string(),
            });
        };
        self.edges[idx].weight = weight;
        Ok(())
    }

    pub fn has_edge(&self, from: &str, to: &str) -> bool {
        self.edge_index_of(from, to).is_some()
    }

    pub fn edge(&self, from: &str, to: &str) -> Option<Edge<'_>> {
        self.edge_index_of(from, to).map(|idx| Edge {
            graph: self,
            id: EdgeId(idx),
        })
    }

    /// # Panics
    ///
    /// Panics if `id` does not belong to this graph.
    pub fn edge_at(&self, id: EdgeId) -> Edge<'_> {
        assert!(id.0 < self.edges.len(), "edge id out of range");
        Edge { graph: self, id }
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn edges(&self) -> impl Iterator<Item = Edge<'_>> {
        (0..self.edges.len()).map(move |idx| Edge {
            graph: self,
            id: EdgeId(idx),
        })
    }

    /// Edges leaving `label` when directed, edges touching it when undirected. Empty for an
    /// unknown label.
    pub fn out_edges(&self, label: &str) -> Vec<Edge<'_>> {
        self.vertex(label)
            .map(|v| v.out_edges().collect())
            .unwrap_or_default()
    }

    /// Edges touching `label` in either direction.
    pub fn incident_edges(&self, label: &str) -> Vec<Edge<'_>> {
        let Some(id) = self.vertex_id(label) else {
            return Vec::new();
        };
        if !self.options.directed {
            return self.vertex_at(id).out_edges().collect();
        }
        self.edges()
            .filter(|e| e.source_id() == id || e.target_id() == id)
            .collect()
    }

    /// Edge ids owned by `id`: outgoing when directed, incident when undirected.
    ///
    /// # Panics
    ///
    /// Panics if `id` does not belong to this graph.
    pub fn out_edge_ids(&self, id: VertexId) -> &[EdgeId] {
        &self.nodes[id.0].edges
    }

    fn rebuild_indices(&mut self) {
        self.node_index.clear();
        for (i, n) in self.nodes.iter_mut().enumerate() {
            self.node_index.insert(n.label.clone(), i);
            n.edges.clear();
        }

        self.edge_index.clear();
        for (i, e) in self.edges.iter().enumerate() {
            let v = self.nodes[e.v_ix].label.as_str();
            let w = self.nodes[e.w_ix].label.as_str();
            let key = if self.options.directed || v <= w {
                EdgeKeyView { v, w }
            } else {
                EdgeKeyView { v: w, w: v }
            };
            self.edge_index.insert(EdgeKey::from_view(key), i);
        }
        for (i, e) in self.edges.iter().enumerate() {
            self.nodes[e.v_ix].edges.push(EdgeId(i));
            if !self.options.directed {
                self.nodes[e.w_ix].edges.push(EdgeId(i));
            }
        }
    }
}

/// Borrowed view of a vertex.
#[derive(Clone, Copy)]
pub struct Vertex<'a> {
    graph: &'a Graph,
    id: VertexId,
}

impl<'a> Vertex<'a> {
    pub fn id(&self) -> VertexId {
        self.id
    }

    pub fn label(&self) -> &'a str {
        self.graph.label(self.id)
    }

    /// Outgoing edges when directed, incident edges when undirected.
    pub fn out_edges(&self) -> impl Iterator<Item = Edge<'a>> + use<'a> {
        let graph = self.graph;
        graph
            .out_edge_ids(self.id)
            .iter()
            .map(move |&id| Edge { graph, id })
    }

    pub fn degree(&self) -> usize {
        self.graph.out_edge_ids(self.id).len()
    }
}

impl fmt::Debug for Vertex<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Vertex").field(&self.label()).finish()
    }
}

/// Borrowed view of an edge. For undirected graphs `source`/`target` are simply the two
/// endpoints in the order the edge was added.
#[derive(Clone, Copy)]
pub struct Edge<'a> {
    graph: &'a Graph,
    id: EdgeId,
}

impl<'a> Edge<'a> {
    fn entry(&self) -> &'a EdgeEntry {
        &self.graph.edges[self.id.0]
    }

    pub fn id(&self) -> EdgeId {
        self.id
    }

    pub fn source_id(&self) -> VertexId {
        VertexId(self.entry().v_ix)
    }

    pub fn target_id(&self) -> VertexId {
        VertexId(self.entry().w_ix)
    }

    pub fn source(&self) -> &'a str {
        &self.graph.nodes[self.entry().v_ix].label
    }

    pub fn target(&self) -> &'a str {
        &self.graph.nodes[self.entry().w_ix].label
    }

    pub fn weight(&self) -> i64 {
        self.entry().weight
    }

    pub fn is_directed(&self) -> bool {
        self.graph.is_directed()
    }

    /// The endpoint across from `id`, or `None` if the edge does not touch `id`.
    pub fn opposite_id(&self, id: VertexId) -> Option<VertexId> {
        let e = self.entry();
        if e.v_ix == id.0 {
            Some(VertexId(e.w_ix))
        } else if e.w_ix == id.0 {
            Some(VertexId(e.v_ix))
        } else {
            None
        }
    }

    pub fn opposite(&self, label: &str) -> Option<&'a str> {
        let id = self.graph.vertex_id(label)?;
        self.opposite_id(id).map(|o| self.graph.label(o))
    }
}

impl fmt::Debug for Edge<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let arrow = if self.is_directed() { "->" } else { "--" };
        write!(
            f,
            "Edge({} {arrow} {}, {})",
            self.source(),
            self.target(),
            self.weight()
        )
    }
}
