use thiserror::Error;

/// Failures that abort a whole discovery pass before any case is produced.
#[derive(Error, Debug)]
pub enum DiscoveryError {
    #[error("tests source has no name")]
    MissingSourceName,

    #[error("failed to enumerate members of tests source '{source_name}': {reason}")]
    Introspection { source_name: String, reason: String },
}

impl DiscoveryError {
    pub fn introspection(source_name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Introspection {
            source_name: source_name.into(),
            reason: reason.into(),
        }
    }
}
