//! Zoom REST API client.
//!
//! This module provides an HTTP client for looking up Zoom meetings and their
//! transcripts with an account-level OAuth token. The token is acquired lazily
//! on the first call and re-acquired once it is about to expire.

use crate::error::{DomainErrorKind, Error, ExternalErrorKind, FetchErrorKind};
use crate::gateway::zoom_recordings::ZoomRecordingTranscripts;
use chrono::{DateTime, Utc};
use log::*;
use meeting_ai::traits::transcription;
use meeting_ai::Transcript;
use meeting_auth::credentials::Credentials;
use meeting_auth::oauth::providers::zoom;
use meeting_auth::oauth::token::Holder;
use meeting_auth::providers::{zoom_config, ProviderConfig};
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use service::config::Config;
use std::sync::Arc;

/// Meeting metadata as returned by `GET /meetings/{meetingId}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MeetingDetails {
    #[serde(default)]
    pub topic: String,
    /// Absent for instant meetings.
    #[serde(default)]
    pub start_time: Option<DateTime<Utc>>,
    pub join_url: String,
    /// Scheduled duration in minutes.
    #[serde(default)]
    pub duration: Option<i64>,
    #[serde(default)]
    pub timezone: Option<String>,
}

/// Topic and start time of a meeting
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MeetingOverview {
    pub topic: String,
    pub start_time: Option<DateTime<Utc>>,
}

impl From<MeetingDetails> for MeetingOverview {
    fn from(details: MeetingDetails) -> Self {
        Self {
            topic: details.topic,
            start_time: details.start_time,
        }
    }
}

/// Zoom API client for meeting lookups and transcript retrieval
pub struct ZoomClient {
    client: reqwest::Client,
    base_url: String,
    tokens: Holder<zoom::Provider>,
    transcripts: Arc<dyn transcription::Provider>,
}

impl ZoomClient {
    /// Create a new Zoom client.
    ///
    /// `transcripts` is the collaborator transcript retrieval is delegated to.
    pub fn new(
        credentials: Credentials,
        endpoints: ProviderConfig,
        client: reqwest::Client,
        transcripts: Arc<dyn transcription::Provider>,
    ) -> Self {
        let provider = zoom::Provider::new(credentials, &endpoints.token_url, client.clone());

        Self {
            client,
            base_url: endpoints.base_url,
            tokens: Holder::new(provider),
            transcripts,
        }
    }

    /// Create a Zoom client from validated configuration, fetching transcripts
    /// from Zoom cloud recordings.
    pub fn from_config(config: &Config, client: reqwest::Client) -> Result<Self, Error> {
        let credentials = Credentials::new(
            config.zoom_client_id()?,
            SecretString::new(config.zoom_client_secret()?.to_string()),
            config.zoom_account_id()?,
        )?;
        let endpoints = zoom_config()
            .with_token_url(config.zoom_oauth_url()?)
            .with_base_url(config.zoom_api_base_url()?);
        let transcripts = Arc::new(ZoomRecordingTranscripts::new(
            client.clone(),
            &endpoints.base_url,
        ));

        Ok(Self::new(credentials, endpoints, client, transcripts))
    }

    /// Look up a meeting, raising every failure.
    ///
    /// Auth failures come back as `Auth`; lookup failures as `Fetch` with a
    /// kind that tells "not found" apart from transport and status errors.
    pub async fn lookup_meeting(&self, meeting_id: &str) -> Result<MeetingDetails, Error> {
        let access_token = self.access_token().await?;
        let url = format!(
            "{}/meetings/{}",
            self.base_url,
            urlencoding::encode(meeting_id)
        );

        debug!("Looking up Zoom meeting {}", meeting_id);

        let response = self
            .client
            .get(&url)
            .bearer_auth(access_token.expose_secret())
            .send()
            .await
            .map_err(|e| {
                warn!("Failed to send Zoom meeting lookup: {:?}", e);
                fetch_error(FetchErrorKind::Network, Some(Box::new(e)))
            })?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            warn!("Zoom API error for meeting {}: {} - {}", meeting_id, status, error_text);

            if status == reqwest::StatusCode::UNAUTHORIZED {
                // The held token was revoked or expired early; acquire a fresh one next time
                self.tokens.invalidate(&access_token).await;
            }

            let kind = if status == reqwest::StatusCode::NOT_FOUND {
                FetchErrorKind::NotFound
            } else {
                FetchErrorKind::Status(status.as_u16())
            };
            return Err(fetch_error(kind, Some(error_text.into())));
        }

        response.json::<MeetingDetails>().await.map_err(|e| {
            warn!("Failed to parse Zoom meeting response: {:?}", e);
            fetch_error(FetchErrorKind::InvalidResponse, Some(Box::new(e)))
        })
    }

    /// Get a meeting's join URL and metadata.
    ///
    /// Lookup failures are logged and reported as `Ok(None)`, so a missing
    /// meeting and an unavailable API look the same to the caller. Only a
    /// failed token exchange is raised.
    pub async fn get_join_url(&self, meeting_id: &str) -> Result<Option<MeetingDetails>, Error> {
        match self.lookup_meeting(meeting_id).await {
            Ok(details) => {
                info!("Join URL retrieved for meeting {}: {}", meeting_id, details.join_url);
                Ok(Some(details))
            }
            Err(e) if e.is_auth() => Err(e),
            Err(e) => {
                warn!("Failed to fetch join URL for meeting {}: {}", meeting_id, e);
                Ok(None)
            }
        }
    }

    /// Get a meeting's topic and start time, raising lookup failures.
    pub async fn get_meeting_details(&self, meeting_id: &str) -> Result<MeetingOverview, Error> {
        self.lookup_meeting(meeting_id)
            .await
            .map(MeetingOverview::from)
            .map_err(|e| {
                error!("Failed to fetch meeting details for {}: {}", meeting_id, e);
                e
            })
    }

    /// Get a meeting's transcript from the transcript provider.
    pub async fn get_transcript(&self, meeting_id: &str) -> Result<Transcript, Error> {
        let access_token = self.access_token().await?;

        info!(
            "Fetching transcript for meeting {} from {}",
            meeting_id,
            self.transcripts.provider_id()
        );

        match self
            .transcripts
            .fetch_transcript(meeting_id, access_token.expose_secret())
            .await
        {
            Ok(transcript) => {
                info!("Transcript retrieved for meeting {}", meeting_id);
                Ok(transcript)
            }
            Err(e) => {
                error!("Failed to retrieve transcript for meeting {}: {}", meeting_id, e);
                Err(Error {
                    source: Some(Box::new(e)),
                    error_kind: DomainErrorKind::External(ExternalErrorKind::Transcript),
                })
            }
        }
    }

    async fn access_token(&self) -> Result<SecretString, Error> {
        self.tokens.get_valid_token().await.map_err(|e| {
            error!("Failed to get Zoom API token: {}", e);
            Error::from(e)
        })
    }
}

fn fetch_error(
    kind: FetchErrorKind,
    source: Option<Box<dyn std::error::Error + Send + Sync>>,
) -> Error {
    Error {
        source,
        error_kind: DomainErrorKind::External(ExternalErrorKind::Fetch(kind)),
    }
}
