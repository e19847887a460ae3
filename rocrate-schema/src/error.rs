use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SchemaError {
    #[error("{kind} record id '{id}' is not a valid ARK identifier")]
    InvalidId { kind: &'static str, id: String },

    #[error("{kind} record is missing required field '{field}'")]
    MissingField {
        kind: &'static str,
        field: &'static str,
    },

    #[error("{kind} field '{field}' must be {expected}")]
    InvalidField {
        kind: &'static str,
        field: &'static str,
        expected: &'static str,
    },
}

pub type Result<T> = std::result::Result<T, SchemaError>;
