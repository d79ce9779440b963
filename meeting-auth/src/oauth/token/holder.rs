//! In-memory token holder with lazy acquisition and refresh-on-expiry.

use secrecy::{ExposeSecret, SecretString};
use tokio::sync::Mutex;
use tracing::debug;

use super::Tokens;
use crate::error::Error;
use crate::oauth::Provider;

/// Holds the single app-level access token of one provider.
///
/// The token is acquired lazily on first use and reused until it is about to
/// expire, at which point the next caller acquires a new one. Acquisition
/// happens while the lock is held, so concurrent callers that all find the
/// token absent trigger exactly one exchange.
pub struct Holder<P: Provider> {
    provider: P,
    tokens: Mutex<Option<Tokens>>,
}

impl<P: Provider> Holder<P> {
    /// Create an empty holder for the given provider.
    pub fn new(provider: P) -> Self {
        Self {
            provider,
            tokens: Mutex::new(None),
        }
    }

    /// Get a valid access token, acquiring one if none is held or the held one expired.
    ///
    /// # Returns
    ///
    /// A valid access token, or the provider's error if acquisition fails.
    /// A failed acquisition leaves the holder empty.
    pub async fn get_valid_token(&self) -> Result<SecretString, Error> {
        let provider_id = self.provider.provider().as_str();
        let mut held = self.tokens.lock().await;

        match held.as_ref() {
            Some(tokens) if !tokens.is_expired() => return Ok(tokens.access_token.clone()),
            Some(_) => debug!("Held {} access token expired, acquiring a new one", provider_id),
            None => debug!("No {} access token held yet, acquiring one", provider_id),
        }

        // Drop the stale token first so a failed exchange is retried on the next call
        *held = None;
        let tokens = self.provider.acquire_token().await?;
        let access_token = tokens.access_token.clone();
        *held = Some(tokens);

        Ok(access_token)
    }

    /// Forget the held token if it is the one the API rejected.
    ///
    /// A token that was replaced since `rejected` was handed out is kept, so a
    /// late 401 from a request made with an older token does not discard it.
    pub async fn invalidate(&self, rejected: &SecretString) {
        let mut held = self.tokens.lock().await;
        let is_rejected = held
            .as_ref()
            .is_some_and(|tokens| tokens.access_token.expose_secret() == rejected.expose_secret());

        if is_rejected {
            *held = None;
            debug!("Invalidated {} access token", self.provider.provider().as_str());
        }
    }
}

#[cfg(test)]
impl<P: Provider> Holder<P> {
    async fn is_held(&self) -> bool {
        self.tokens.lock().await.is_some()
    }

    fn provider(&self) -> &P {
        &self.provider
    }
}
