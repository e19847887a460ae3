use thiserror::Error;

#[derive(Error, Debug)]
pub enum GraphError {
    #[error("document has no top-level @graph collection")]
    MissingGraph,

    #[error("@graph entry {index} is not an object")]
    NotAnObject { index: usize },

    #[error("@graph entry {index} has no @id")]
    MissingId { index: usize },

    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, GraphError>;
