use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ArkError {
    #[error("invalid ARK identifier '{id}': {reason}")]
    Invalid { id: String, reason: String },
}

impl ArkError {
    pub fn invalid(id: impl Into<String>, reason: impl Into<String>) -> Self {
        ArkError::Invalid {
            id: id.into(),
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, ArkError>;
