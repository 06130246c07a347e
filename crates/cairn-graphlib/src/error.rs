pub type Result<T> = std::result::Result<T, GraphError>;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GraphError {
    #[error("a vertex labelled {label:?} already exists")]
    DuplicateLabel { label: String },

    #[error("no vertex labelled {label:?}")]
    UnknownVertex { label: String },

    #[error("an edge may not start and end at the same vertex ({label:?})")]
    SelfLoop { label: String },

    #[error("an edge between {from:?} and {to:?} already exists")]
    DuplicateEdge { from: String, to: String },

    #[error("no edge between {from:?} and {to:?}")]
    EdgeNotFound { from: String, to: String },

    #[error("operation requires a {expected} graph")]
    WrongGraphKind { expected: &'static str },
}
