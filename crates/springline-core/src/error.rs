pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("missing graph header: expected vertex and edge counts")]
    MissingHeader,

    #[error("invalid {what} count: {token:?}")]
    InvalidCount { what: &'static str, token: String },

    #[error("edge list ends early: expected {expected} edges, found {found}")]
    TruncatedEdgeList { expected: usize, found: usize },

    #[error("invalid endpoint in edge {edge}: {token:?}")]
    InvalidEndpoint { edge: usize, token: String },

    #[error("invalid weight in edge {edge}: {token:?}")]
    InvalidWeight { edge: usize, token: String },
}
