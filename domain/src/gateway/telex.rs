//! Telex webhook client for posting meeting summaries.

use crate::error::{DomainErrorKind, Error, ExternalErrorKind};
use log::*;
use serde::Serialize;
use service::config::Config;

/// Heading prepended to every summary posted to Telex.
pub const SUMMARY_HEADING: &str = "**AI-Generated Summary:**";

/// Body of a summary notification
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SummaryNotification {
    pub channel: String,
    pub message: String,
}

impl SummaryNotification {
    pub fn new(channel: &str, summary: &str) -> Self {
        Self {
            channel: channel.to_string(),
            message: format!("{SUMMARY_HEADING}\n{summary}"),
        }
    }
}

/// Telex webhook client
pub struct TelexClient {
    client: reqwest::Client,
    url: String,
    channel: String,
}

impl TelexClient {
    pub fn new(client: reqwest::Client, url: &str, channel: &str) -> Self {
        Self {
            client,
            url: url.to_string(),
            channel: channel.to_string(),
        }
    }

    pub fn from_config(config: &Config, client: reqwest::Client) -> Result<Self, Error> {
        Ok(Self::new(
            client,
            config.telex_api_url()?,
            config.telex_channel(),
        ))
    }

    /// Post a summary, reporting transport failures and non-success statuses.
    pub async fn post_summary(&self, summary: &str) -> Result<(), Error> {
        let notification = SummaryNotification::new(&self.channel, summary);

        let response = self
            .client
            .post(&self.url)
            .json(&notification)
            .send()
            .await
            .map_err(|e| forward_error(Box::new(e)))?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(forward_error(
                format!("Telex responded with {status}: {error_text}").into(),
            ));
        }

        Ok(())
    }

    /// Post a summary to the configured channel.
    ///
    /// Never fails: delivery errors are logged and dropped.
    pub async fn send_summary(&self, summary: &str) {
        match self.post_summary(summary).await {
            Ok(()) => info!("Summary sent to Telex channel {}", self.channel),
            Err(e) => error!("Failed to send summary to Telex: {:?}", e.source),
        }
    }
}

fn forward_error(source: Box<dyn std::error::Error + Send + Sync>) -> Error {
    Error {
        source: Some(source),
        error_kind: DomainErrorKind::External(ExternalErrorKind::Forward),
    }
}
