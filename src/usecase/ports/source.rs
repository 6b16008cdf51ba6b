use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct SourceError {
    pub message: String,
}

impl SourceError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Where the catalog body comes from. One fetch per session.
pub trait CatalogSource: Send + Sync {
    /// Human-readable location, used in diagnostics only.
    fn location(&self) -> String;

    fn fetch(&self) -> Result<String, SourceError>;
}
