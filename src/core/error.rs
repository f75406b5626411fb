use thiserror::Error;

/// Errors that can escape the resolution/eligibility core.
///
/// Malformed identifiers, unknown vehicles, and ambiguous years are *not*
/// errors — they degrade to lower-confidence results. The only failure
/// modes here are configuration problems the caller must fix.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum EngineError {
    /// A requested destination country has no registered eligibility rule.
    #[error("no eligibility rule registered for destination country '{0}'")]
    MissingRule(String),

    /// A reference store lookup could not be performed.
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// A reference store was unreachable or failed mid-lookup.
#[derive(Debug, Clone, Error)]
#[error("reference store unavailable: {message}")]
pub struct StoreError {
    /// What went wrong, as reported by the store implementation.
    pub message: String,
}

impl StoreError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
