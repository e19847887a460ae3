use rocrate_ark::ArkError;
use rocrate_graph::GraphError;
use rocrate_schema::SchemaError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum TransformError {
    /// Input document is structurally unusable (fatal).
    #[error(transparent)]
    Graph(#[from] GraphError),

    /// A constructed record failed shape validation (fatal; the whole run
    /// aborts with no output).
    #[error(transparent)]
    Schema(#[from] SchemaError),

    #[error(transparent)]
    Ark(#[from] ArkError),

    /// Rename strategy could not find the segment it replaces.
    #[error("identifier '{id}' does not contain expected segment '{segment}'")]
    MissingSegment { id: String, segment: String },

    /// Two records would end up sharing one identifier.
    #[error("records '{first}' and '{second}' would both hold identifier '{id}'")]
    DuplicateId {
        first: String,
        second: String,
        id: String,
    },
}

pub type Result<T> = std::result::Result<T, TransformError>;
