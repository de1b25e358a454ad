#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("vertex not found: {0}")]
    VertexNotFound(String),
    #[error("edge not found: {0}")]
    EdgeNotFound(usize),
    #[error("self-loops are not allowed by this graph")]
    SelfLoopsNotAllowed,
    #[error("graph is not weighted")]
    NotWeighted,
    #[error("vertex supplier returned a value that is already present: {0}")]
    DuplicateVertex(String),
}

pub type Result<T> = std::result::Result<T, Error>;
