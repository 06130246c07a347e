//! Edge key types.
//!
//! An edge is keyed by its endpoint labels. Undirected keys are canonicalized (smaller label
//! first) by the graph before a key or view is built, so `(a, b)` and `(b, a)` collide.

#[derive(Clone, Copy, Hash)]
pub(in crate::graph) struct EdgeKeyView<'a> {
    pub(in crate::graph) v: &'a str,
    pub(in crate::graph) w: &'a str,
}

impl hashbrown::Equivalent<EdgeKey> for EdgeKeyView<'_> {
    fn equivalent(&self, key: &EdgeKey) -> bool {
        key.v == self.v && key.w == self.w
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub(in crate::graph) struct EdgeKey {
    pub(in crate::graph) v: String,
    pub(in crate::graph) w: String,
}

impl EdgeKey {
    pub(in crate::graph) fn from_view(view: EdgeKeyView<'_>) -> Self {
        Self {
            v: view.v.to_string(),
            w: view.w.to_string(),
        }
    }
}
