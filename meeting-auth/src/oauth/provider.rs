//! OAuth provider trait and types.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use super::token::Tokens;
use crate::error::Error;

/// Known OAuth providers for video meetings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProviderKind {
    Zoom,
}

impl ProviderKind {
    /// Get the provider identifier string.
    pub fn as_str(&self) -> &'static str {
        match self {
            ProviderKind::Zoom => "zoom",
        }
    }
}

/// Trait for OAuth 2.0 providers that issue app-level tokens.
///
/// Implementations exchange the app's own credentials for an access token,
/// with no user interaction involved.
#[async_trait]
pub trait Provider: Send + Sync {
    /// Get the provider kind.
    fn provider(&self) -> ProviderKind;

    /// Exchange the configured client credentials for a fresh access token.
    ///
    /// Fails when the provider rejects the exchange, the network call fails,
    /// or the response cannot be parsed.
    async fn acquire_token(&self) -> Result<Tokens, Error>;
}
