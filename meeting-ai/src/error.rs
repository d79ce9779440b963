//! Error types for meeting AI operations.

use std::fmt;

/// Universal error type that abstracts provider-specific errors into common variants.
///
/// All provider implementations should map their native errors to these variants,
/// preserving context while maintaining a provider-agnostic interface.
#[derive(Debug)]
pub enum Error {
    /// OAuth or API key authentication failures. Indicates credentials are invalid,
    /// expired, or lack necessary permissions (e.g. missing recording scopes).
    Authentication(String),

    /// Network connectivity issues, DNS failures, or connection resets.
    Network(String),

    /// Provider-specific business logic errors (e.g. recording still processing).
    Provider(String),

    /// Operation exceeded the configured or provider-enforced timeout period.
    Timeout(String),

    /// Requested resource (meeting, recording, transcript) does not exist.
    NotFound(String),

    /// Failed to deserialize a provider response into the expected type.
    Deserialization(String),

    /// Catch-all for errors that don't fit other categories.
    Other(Box<dyn std::error::Error + Send + Sync>),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Authentication(msg) => write!(f, "Authentication failed: {}", msg),
            Error::Network(msg) => write!(f, "Network error: {}", msg),
            Error::Provider(msg) => write!(f, "Provider error: {}", msg),
            Error::Timeout(msg) => write!(f, "Timeout: {}", msg),
            Error::NotFound(msg) => write!(f, "Not found: {}", msg),
            Error::Deserialization(msg) => write!(f, "Deserialization error: {}", msg),
            Error::Other(err) => write!(f, "Other error: {}", err),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Other(err) => Some(err.as_ref()),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_display_messages() {
        assert_eq!(
            Error::NotFound("no transcript for meeting 123".to_string()).to_string(),
            "Not found: no transcript for meeting 123"
        );
        assert_eq!(
            Error::Timeout("30s elapsed".to_string()).to_string(),
            "Timeout: 30s elapsed"
        );
    }

    #[test]
    fn test_other_exposes_source() {
        let err = Error::Other("model overloaded".into());
        assert_eq!(err.source().unwrap().to_string(), "model overloaded");
        assert!(Error::Network("reset".to_string()).source().is_none());
    }
}
