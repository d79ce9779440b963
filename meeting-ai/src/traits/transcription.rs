//! Transcript provider trait.

use crate::types::transcription::Transcript;
use crate::Error;
use async_trait::async_trait;

/// Abstraction for services that hold the transcript of a finished meeting.
///
/// Implementations look up the meeting's transcript with the caller's access
/// token and return its text. Supports the meeting platform's own cloud
/// recordings or third-party note takers.
#[async_trait]
pub trait Provider: Send + Sync {
    /// Retrieve the transcript of a meeting.
    ///
    /// The access token is the platform token held by the caller; providers
    /// that use their own credentials may ignore it.
    /// Returns NotFound when the meeting has no transcript (yet).
    async fn fetch_transcript(
        &self,
        meeting_id: &str,
        access_token: &str,
    ) -> std::result::Result<Transcript, Error>;

    /// Return unique identifier for this provider (e.g., "zoom_cloud_recording").
    ///
    /// Used for logging and provider selection.
    /// Must be lowercase, alphanumeric with underscores only.
    fn provider_id(&self) -> &str;
}
