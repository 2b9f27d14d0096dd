//! Error types for the retrieval engine.
//!
//! Backend failures are never errors here: they degrade to descriptive
//! [`LogResult`](crate::types::LogResult)s or
//! [`Discovery::Unavailable`](crate::types::Discovery). [`EngineError`]
//! covers only caller contract violations, rejected synchronously
//! before any external call is made.

use thiserror::Error;

/// Caller contract violations detected before dispatch.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum EngineError {
    /// An orchestrator request was made without a namespace.
    #[error("namespace is required for orchestrator requests")]
    MissingNamespace,

    /// A container or filesystem request carried a namespace.
    #[error("namespace is only valid for orchestrator requests")]
    UnexpectedNamespace,

    /// The supplied namespace was empty.
    #[error("namespace cannot be empty")]
    EmptyNamespace,

    /// The supplied identifier was empty.
    #[error("identifier cannot be empty")]
    EmptyIdentifier,
}

/// Result type alias for engine operations.
pub type Result<T> = std::result::Result<T, EngineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display_messages() {
        assert_eq!(
            EngineError::MissingNamespace.to_string(),
            "namespace is required for orchestrator requests"
        );
        assert_eq!(
            EngineError::UnexpectedNamespace.to_string(),
            "namespace is only valid for orchestrator requests"
        );
        assert_eq!(EngineError::EmptyNamespace.to_string(), "namespace cannot be empty");
        assert_eq!(EngineError::EmptyIdentifier.to_string(), "identifier cannot be empty");
    }

    #[test]
    fn error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<EngineError>();
    }
}
