//! AI analysis provider trait.

use crate::types::transcription::Transcript;
use crate::Error;
use async_trait::async_trait;

/// Abstraction for LLM-powered meeting transcript summarization.
///
/// Implementations use large language models to turn a transcript into a
/// short human-readable summary. This trait enables model comparison, cost
/// optimization, and provider switching.
#[async_trait]
pub trait Provider: Send + Sync {
    /// Summarize a meeting transcript.
    ///
    /// `topic` is the meeting topic as reported by the platform and can be used
    /// to prime the prompt. Returns the summary text.
    async fn summarize(
        &self,
        topic: &str,
        transcript: &Transcript,
    ) -> std::result::Result<String, Error>;

    /// Return unique identifier for this provider (e.g., "openai", "claude").
    ///
    /// Used for cost tracking and provider selection.
    /// Must be lowercase, alphanumeric with underscores only.
    fn provider_id(&self) -> &str;
}
