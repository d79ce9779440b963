//! Transcript retrieval from Zoom cloud recordings.
//!
//! A finished meeting that was recorded to the cloud lists its files under
//! `GET /meetings/{meetingId}/recordings`. The transcript is the file with
//! `file_type` `TRANSCRIPT` (a WebVTT document) and is downloaded from its
//! `download_url` with the same bearer token.

use async_trait::async_trait;
use log::*;
use meeting_ai::traits::transcription;
use meeting_ai::{Error, Transcript};
use serde::Deserialize;

const PROVIDER_ID: &str = "zoom_cloud_recording";
const TRANSCRIPT_FILE_TYPE: &str = "TRANSCRIPT";
const COMPLETED_STATUS: &str = "completed";

#[derive(Debug, Deserialize)]
struct RecordingList {
    #[serde(default)]
    recording_files: Vec<RecordingFile>,
}

#[derive(Debug, Deserialize)]
struct RecordingFile {
    #[serde(default)]
    file_type: Option<String>,
    #[serde(default)]
    status: Option<String>,
    download_url: Option<String>,
}

/// Transcript provider backed by Zoom cloud recordings
pub struct ZoomRecordingTranscripts {
    client: reqwest::Client,
    base_url: String,
}

impl ZoomRecordingTranscripts {
    pub fn new(client: reqwest::Client, base_url: &str) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    async fn transcript_download_url(
        &self,
        meeting_id: &str,
        access_token: &str,
    ) -> Result<String, Error> {
        let url = format!(
            "{}/meetings/{}/recordings",
            self.base_url,
            urlencoding::encode(meeting_id)
        );

        let response = self
            .client
            .get(&url)
            .bearer_auth(access_token)
            .send()
            .await
            .map_err(transport_error)?;

        let response = check_status(response, meeting_id).await?;
        let recordings: RecordingList = response
            .json()
            .await
            .map_err(|e| Error::Deserialization(e.to_string()))?;

        let file = recordings
            .recording_files
            .into_iter()
            .find(|file| file.file_type.as_deref() == Some(TRANSCRIPT_FILE_TYPE))
            .ok_or_else(|| {
                Error::NotFound(format!("No transcript recorded for meeting {meeting_id}"))
            })?;

        // Zoom omits the status once processing is done on some account types
        if let Some(status) = file.status.as_deref() {
            if !status.eq_ignore_ascii_case(COMPLETED_STATUS) {
                return Err(Error::Provider(format!(
                    "Transcript for meeting {meeting_id} is not ready (status: {status})"
                )));
            }
        }

        file.download_url.ok_or_else(|| {
            Error::Deserialization(format!(
                "Transcript file for meeting {meeting_id} has no download_url"
            ))
        })
    }
}

#[async_trait]
impl transcription::Provider for ZoomRecordingTranscripts {
    async fn fetch_transcript(
        &self,
        meeting_id: &str,
        access_token: &str,
    ) -> Result<Transcript, Error> {
        let download_url = self
            .transcript_download_url(meeting_id, access_token)
            .await?;

        debug!("Downloading transcript for meeting {}", meeting_id);

        let response = self
            .client
            .get(&download_url)
            .bearer_auth(access_token)
            .send()
            .await
            .map_err(transport_error)?;

        let text = check_status(response, meeting_id)
            .await?
            .text()
            .await
            .map_err(transport_error)?;

        let transcript = Transcript::new(meeting_id, text);
        if transcript.is_blank() {
            return Err(Error::NotFound(format!(
                "Transcript for meeting {meeting_id} is empty"
            )));
        }

        Ok(transcript)
    }

    fn provider_id(&self) -> &str {
        PROVIDER_ID
    }
}

async fn check_status(
    response: reqwest::Response,
    meeting_id: &str,
) -> Result<reqwest::Response, Error> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let error_text = response.text().await.unwrap_or_default();
    warn!(
        "Zoom recordings error for meeting {}: {} - {}",
        meeting_id, status, error_text
    );

    Err(match status {
        reqwest::StatusCode::UNAUTHORIZED | reqwest::StatusCode::FORBIDDEN => {
            Error::Authentication(format!("{status}: {error_text}"))
        }
        reqwest::StatusCode::NOT_FOUND => {
            Error::NotFound(format!("No recordings for meeting {meeting_id}"))
        }
        _ => Error::Provider(format!("{status}: {error_text}")),
    })
}

fn transport_error(err: reqwest::Error) -> Error {
    if err.is_timeout() {
        Error::Timeout(err.to_string())
    } else if err.is_decode() {
        Error::Deserialization(err.to_string())
    } else {
        Error::Network(err.to_string())
    }
}
