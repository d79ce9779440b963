//! Account-level client credentials.

use secrecy::{ExposeSecret, SecretString};

use crate::error::{credential_error, CredentialErrorKind, Error};

/// Client id, client secret and account id of a server-to-server OAuth app.
///
/// Immutable once built. The secret is only exposed when the Basic
/// authorization header of a token request is assembled.
#[derive(Debug, Clone)]
pub struct Credentials {
    client_id: String,
    client_secret: SecretString,
    account_id: String,
}

impl Credentials {
    /// Create credentials, rejecting empty values.
    ///
    /// # Arguments
    ///
    /// * `client_id` - OAuth app client ID
    /// * `client_secret` - OAuth app client secret
    /// * `account_id` - Account the app acts on behalf of
    pub fn new(
        client_id: &str,
        client_secret: SecretString,
        account_id: &str,
    ) -> Result<Self, Error> {
        if client_id.trim().is_empty() {
            return Err(credential_error(
                CredentialErrorKind::Missing,
                "Client ID must not be empty",
            ));
        }
        if client_secret.expose_secret().trim().is_empty() {
            return Err(credential_error(
                CredentialErrorKind::Missing,
                "Client secret must not be empty",
            ));
        }
        if account_id.trim().is_empty() {
            return Err(credential_error(
                CredentialErrorKind::Missing,
                "Account ID must not be empty",
            ));
        }

        Ok(Self {
            client_id: client_id.to_string(),
            client_secret,
            account_id: account_id.to_string(),
        })
    }

    pub fn client_id(&self) -> &str {
        &self.client_id
    }

    pub fn client_secret(&self) -> &SecretString {
        &self.client_secret
    }

    pub fn account_id(&self) -> &str {
        &self.account_id
    }
}
