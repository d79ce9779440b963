//! OAuth token types.

use chrono::{DateTime, Duration, Utc};
use secrecy::SecretString;
use serde::Deserialize;

use crate::error::{oauth_error, Error, OAuthErrorKind};

/// Tokens closer than this to their expiry are treated as expired.
const EXPIRY_BUFFER_MINUTES: i64 = 5;

/// Token response body from an OAuth token endpoint.
#[derive(Debug, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    #[serde(default = "default_token_type")]
    pub token_type: String,
    #[serde(default)]
    pub expires_in: Option<i64>,
    #[serde(default)]
    pub scope: Option<String>,
}

fn default_token_type() -> String {
    "bearer".to_string()
}

/// OAuth access token with metadata.
#[derive(Debug, Clone)]
pub struct Tokens {
    /// Access token for API requests.
    pub access_token: SecretString,
    /// When the access token expires. `None` means the provider gave no lifetime.
    pub expires_at: Option<DateTime<Utc>>,
    /// Token type (usually "bearer").
    pub token_type: String,
    /// Granted scopes.
    pub scopes: Vec<String>,
}

impl Tokens {
    /// Build tokens from a token endpoint response received at `acquired_at`.
    ///
    /// Fails with `InvalidResponse` when `expires_in` does not fit a timestamp.
    pub fn from_response(
        response: TokenResponse,
        acquired_at: DateTime<Utc>,
    ) -> Result<Self, Error> {
        let expires_at = match response.expires_in {
            Some(seconds) => Some(
                Duration::try_seconds(seconds)
                    .and_then(|lifetime| acquired_at.checked_add_signed(lifetime))
                    .ok_or_else(|| {
                        oauth_error(
                            OAuthErrorKind::InvalidResponse,
                            &format!("expires_in out of range: {seconds}"),
                        )
                    })?,
            ),
            None => None,
        };

        let scopes = response
            .scope
            .map(|scope| scope.split_whitespace().map(str::to_string).collect())
            .unwrap_or_default();

        Ok(Self {
            access_token: SecretString::new(response.access_token),
            expires_at,
            token_type: response.token_type,
            scopes,
        })
    }

    /// Check if the access token is expired or about to expire soon.
    ///
    /// Returns true if token is expired or will expire within 5 minutes.
    pub fn is_expired(&self) -> bool {
        self.expires_at
            .map(|expires| {
                let now = Utc::now();
                let buffer = Duration::minutes(EXPIRY_BUFFER_MINUTES);
                expires <= (now + buffer)
            })
            .unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use secrecy::ExposeSecret;

    fn tokens_expiring_at(expires_at: Option<DateTime<Utc>>) -> Tokens {
        Tokens {
            access_token: SecretString::new("test".to_string()),
            expires_at,
            token_type: "bearer".to_string(),
            scopes: vec![],
        }
    }

    #[test]
    fn test_token_not_expired() {
        let tokens = tokens_expiring_at(Some(Utc::now() + Duration::hours(1)));
        assert!(!tokens.is_expired());
    }

    #[test]
    fn test_token_expired() {
        let tokens = tokens_expiring_at(Some(Utc::now() - Duration::hours(1)));
        assert!(tokens.is_expired());
    }

    #[test]
    fn test_token_expiring_soon() {
        let tokens = tokens_expiring_at(Some(Utc::now() + Duration::minutes(3)));
        assert!(tokens.is_expired());
    }

    #[test]
    fn test_token_without_lifetime_never_expires() {
        let tokens = tokens_expiring_at(None);
        assert!(!tokens.is_expired());
    }

    #[test]
    fn test_from_response_computes_expiry_and_scopes() {
        let acquired_at = Utc::now();
        let response: TokenResponse = serde_json::from_str(
            r#"{
                "access_token": "abc",
                "token_type": "bearer",
                "expires_in": 3599,
                "scope": "meeting:read:admin recording:read:admin"
            }"#,
        )
        .unwrap();

        let tokens = Tokens::from_response(response, acquired_at).unwrap();

        assert_eq!(tokens.access_token.expose_secret(), "abc");
        assert_eq!(tokens.expires_at, Some(acquired_at + Duration::seconds(3599)));
        assert_eq!(
            tokens.scopes,
            vec!["meeting:read:admin".to_string(), "recording:read:admin".to_string()]
        );
    }

    #[test]
    fn test_from_response_with_only_access_token() {
        let response: TokenResponse = serde_json::from_str(r#"{"access_token": "abc"}"#).unwrap();

        let tokens = Tokens::from_response(response, Utc::now()).unwrap();

        assert_eq!(tokens.token_type, "bearer");
        assert!(tokens.expires_at.is_none());
        assert!(tokens.scopes.is_empty());
    }

    #[test]
    fn test_from_response_rejects_out_of_range_lifetime() {
        let response: TokenResponse = serde_json::from_str(
            r#"{"access_token": "abc", "expires_in": 9223372036854775807}"#,
        )
        .unwrap();

        let result = Tokens::from_response(response, Utc::now());

        match result {
            Err(e) => assert_eq!(
                e.error_kind,
                crate::error::ErrorKind::OAuth(OAuthErrorKind::InvalidResponse)
            ),
            Ok(tokens) => panic!("Expected an error, got: {:?}", tokens),
        }
    }
}
