//! Error types for the `domain` layer.
use meeting_auth::error::{Error as MeetingAuthError, ErrorKind as MeetingAuthErrorKind};
use service::config::ConfigError;
use std::error::Error as StdError;
use std::fmt;

/// Top-level domain error type.
/// Errors in the Domain layer are modeled as a tree structure
/// with `domain::error::Error` as the root type holding a tree of `error_kind`
/// enums that represent the kinds of errors that can occur in the domain layer or
/// in lower layers. The `source` field is used to hold the original error that caused
/// the domain error. The intent is to translate errors between layers while maintaining
/// layer boundaries. Ex. `domain` is dependent on `meeting-auth`, and the binary is dependent
/// on `domain`, but the binary should not need to match on `meeting-auth` errors directly.
#[derive(Debug)]
pub struct Error {
    pub source: Option<Box<dyn StdError + Send + Sync>>,
    pub error_kind: DomainErrorKind,
}

/// Enum representing the major categories of errors that can occur in the `domain` layer.
#[derive(Debug, PartialEq)]
pub enum DomainErrorKind {
    Internal(InternalErrorKind),
    External(ExternalErrorKind),
}

/// Enum representing the various kinds of internal errors that can occur in the `domain` layer.
#[derive(Debug, PartialEq)]
pub enum InternalErrorKind {
    /// Required configuration is missing or invalid.
    Config,
    /// An invite link could not be parsed.
    Parse,
    Other(String),
}

/// Enum representing the various kinds of external errors that can occur in the `domain` layer.
#[derive(Debug, PartialEq)]
pub enum ExternalErrorKind {
    /// The OAuth credential exchange failed.
    Auth,
    /// A meeting lookup failed.
    Fetch(FetchErrorKind),
    /// The transcript provider failed.
    Transcript,
    /// The summarization provider failed.
    Summarize,
    /// Posting a notification failed.
    Forward,
    Network,
}

/// Why a meeting lookup failed.
#[derive(Debug, PartialEq)]
pub enum FetchErrorKind {
    /// The platform answered 404 for the meeting.
    NotFound,
    /// The request never got a response.
    Network,
    /// The platform answered with another non-success status.
    Status(u16),
    /// The response body could not be parsed.
    InvalidResponse,
}

impl Error {
    /// Returns true if the OAuth credential exchange failed.
    pub fn is_auth(&self) -> bool {
        self.error_kind == DomainErrorKind::External(ExternalErrorKind::Auth)
    }

    /// Returns true if the platform reported the meeting as not found.
    pub fn is_not_found(&self) -> bool {
        self.error_kind
            == DomainErrorKind::External(ExternalErrorKind::Fetch(FetchErrorKind::NotFound))
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Domain Error: {self:?}")
    }
}

impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.source
            .as_ref()
            .map(|e| e.as_ref() as &(dyn StdError + 'static))
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        // Errors that result from issues building the reqwest::Client instance. This
        // type of error will occur prior to any network calls being made.
        if err.is_builder() {
            Error {
                source: Some(Box::new(err)),
                error_kind: DomainErrorKind::Internal(InternalErrorKind::Other(
                    "Failed to build reqwest client".to_string(),
                )),
            }
        // Errors that result from issues with the network call itself.
        } else {
            Error {
                source: Some(Box::new(err)),
                error_kind: DomainErrorKind::External(ExternalErrorKind::Network),
            }
        }
    }
}

// `meeting-auth` is only used to obtain access tokens, so every OAuth failure it
// reports is an authentication failure. Unusable credentials are a config problem.
impl From<MeetingAuthError> for Error {
    fn from(err: MeetingAuthError) -> Self {
        let error_kind = match &err.error_kind {
            MeetingAuthErrorKind::Credential(_) => {
                DomainErrorKind::Internal(InternalErrorKind::Config)
            }
            MeetingAuthErrorKind::OAuth(_) => {
                DomainErrorKind::External(ExternalErrorKind::Auth)
            }
        };
        Error {
            source: Some(Box::new(err)),
            error_kind,
        }
    }
}

impl From<ConfigError> for Error {
    fn from(err: ConfigError) -> Self {
        Error {
            source: Some(Box::new(err)),
            error_kind: DomainErrorKind::Internal(InternalErrorKind::Config),
        }
    }
}
