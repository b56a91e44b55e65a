//! Error types for the listings pipeline
//!
//! Two boundaries can fail: the upstream listing retrieval (fatal to the
//! request) and the batch author lookup (recovered locally). Malformed
//! embedded price payloads are handled inside price resolution and never
//! surface as an error type.

use thiserror::Error;

/// Upstream listing retrieval failure. Fatal: the request cannot be served
/// without the listing set.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SourceError {
    #[error("upstream returned status {status}: {message}")]
    Upstream { status: u16, message: String },

    #[error("transport failure: {0}")]
    Transport(String),

    #[error("failed to decode upstream response: {0}")]
    Decode(String),
}

/// Batch author lookup failure. Non-fatal: listings degrade to a null author.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LookupError {
    #[error("profile store returned status {status}: {message}")]
    Upstream { status: u16, message: String },

    #[error("transport failure: {0}")]
    Transport(String),

    #[error("failed to decode profile response: {0}")]
    Decode(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_source_error_display() {
        let err = SourceError::Upstream {
            status: 503,
            message: "function unavailable".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "upstream returned status 503: function unavailable"
        );
    }

    #[test]
    fn test_transport_error_display() {
        let err = SourceError::Transport("connection refused".to_string());
        assert!(err.to_string().contains("connection refused"));
    }

    #[test]
    fn test_lookup_error_display() {
        let err = LookupError::Decode("expected array".to_string());
        assert_eq!(
            err.to_string(),
            "failed to decode profile response: expected array"
        );
    }
}
