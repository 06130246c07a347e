use cairn_graphlib::GraphError;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Graph(#[from] GraphError),

    #[error("{algorithm} requires a {expected} graph")]
    WrongGraphKind {
        algorithm: &'static str,
        expected: &'static str,
    },

    #[error("{algorithm} requires edge weights of at least 1, edge {from:?}-{to:?} has {weight}")]
    InvalidWeight {
        algorithm: &'static str,
        from: String,
        to: String,
        weight: i64,
    },
}

pub type Result<T> = std::result::Result<T, Error>;
