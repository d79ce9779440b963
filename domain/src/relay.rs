//! End-to-end relay of a meeting summary from Zoom to Telex.

use crate::error::{DomainErrorKind, Error, ExternalErrorKind};
use crate::gateway::telex::TelexClient;
use crate::gateway::zoom::ZoomClient;
use crate::invite::parse_invite_link;
use log::*;
use meeting_ai::traits::analysis;

/// Summarize a finished meeting and post the summary to Telex.
///
/// Parse, auth, lookup, transcript and summarization failures are returned.
/// Delivery to Telex never fails the relay. Returns the summary text.
pub async fn relay_meeting_summary(
    zoom: &ZoomClient,
    summarizer: &dyn analysis::Provider,
    telex: &TelexClient,
    invite_link: &str,
) -> Result<String, Error> {
    let reference = parse_invite_link(invite_link)?;
    let overview = zoom.get_meeting_details(&reference.meeting_id).await?;
    let transcript = zoom.get_transcript(&reference.meeting_id).await?;

    info!(
        "Summarizing meeting {} ({}) with {}",
        reference.meeting_id,
        overview.topic,
        summarizer.provider_id()
    );

    let summary = summarizer
        .summarize(&overview.topic, &transcript)
        .await
        .map_err(|e| {
            error!("Failed to summarize meeting {}: {}", reference.meeting_id, e);
            Error {
                source: Some(Box::new(e)),
                error_kind: DomainErrorKind::External(ExternalErrorKind::Summarize),
            }
        })?;

    telex.send_summary(&summary).await;

    Ok(summary)
}
