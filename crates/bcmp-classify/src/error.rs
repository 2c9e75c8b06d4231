//! Error types for the classifier crate.

/// Errors that can occur while rehydrating persisted differences.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ClassifyError {
    /// The stored classification name is not part of the datatype taxonomy.
    #[error("unknown classification: {0:?}")]
    UnknownClassification(String),

    /// Serialization or deserialization error.
    #[error("serialization error: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for ClassifyError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}

/// Convenience alias for classifier results.
pub type ClassifyResult<T> = Result<T, ClassifyError>;
