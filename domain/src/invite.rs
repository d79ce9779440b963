//! Parsing of shareable meeting invite links.
//!
//! A Zoom invite link looks like `https://us02web.zoom.us/j/1234567890?pwd=abcXYZ`:
//! the meeting ID is the path segment after `/j/` and the optional passcode is
//! carried in the `pwd` query parameter. Nothing here touches the network.

use crate::error::{DomainErrorKind, Error, InternalErrorKind};
use log::*;
use url::Url;

/// Query parameter holding the meeting passcode.
pub const PASSCODE_PARAM: &str = "pwd";

/// Position of the meeting ID when the URL path is split on `/` (`["", "j", "<id>"]`).
const MEETING_ID_SEGMENT: usize = 2;

/// Meeting ID and optional passcode extracted from an invite link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MeetingReference {
    pub meeting_id: String,
    pub passcode: Option<String>,
}

impl MeetingReference {
    pub fn new(meeting_id: &str, passcode: Option<&str>) -> Self {
        Self {
            meeting_id: meeting_id.to_string(),
            passcode: passcode.map(str::to_string),
        }
    }

    /// Formats this reference as a join link on the given host, e.g. `zoom.us`.
    pub fn to_invite_link(&self, host: &str) -> Result<String, Error> {
        let mut url = Url::parse(&format!("https://{host}")).map_err(parse_error)?;

        url.path_segments_mut()
            .map_err(|_| {
                warn!("Cannot build a join link path on host {host}");
                Error {
                    source: None,
                    error_kind: DomainErrorKind::Internal(InternalErrorKind::Parse),
                }
            })?
            .clear()
            .push("j")
            .push(&self.meeting_id);

        if let Some(passcode) = &self.passcode {
            url.query_pairs_mut().append_pair(PASSCODE_PARAM, passcode);
        }

        Ok(url.to_string())
    }
}

/// Extracts the meeting ID and passcode from an invite link.
///
/// A missing or empty `pwd` parameter yields `None` for the passcode. Fails
/// with a parse error when the link is not a URL or has no meeting ID segment.
pub fn parse_invite_link(invite_link: &str) -> Result<MeetingReference, Error> {
    let url = Url::parse(invite_link.trim()).map_err(|e| {
        warn!("Malformed invite link {invite_link:?}: {e}");
        parse_error(e)
    })?;

    let segment = url
        .path()
        .split('/')
        .nth(MEETING_ID_SEGMENT)
        .filter(|segment| !segment.is_empty())
        .ok_or_else(|| {
            warn!("Invite link {invite_link:?} has no meeting ID segment");
            Error {
                source: Some(format!("No meeting ID in invite link: {invite_link}").into()),
                error_kind: DomainErrorKind::Internal(InternalErrorKind::Parse),
            }
        })?;

    let meeting_id = urlencoding::decode(segment)
        .map_err(parse_error)?
        .into_owned();

    let passcode = url
        .query_pairs()
        .find(|(key, _)| key == PASSCODE_PARAM)
        .map(|(_, value)| value.into_owned())
        .filter(|value| !value.is_empty());

    debug!("Parsed invite link into meeting {meeting_id}");

    Ok(MeetingReference {
        meeting_id,
        passcode,
    })
}

/// Accepts either an invite link or a bare numeric meeting ID.
///
/// Meeting IDs are often shared in the grouped form `123 4567 8901`; spaces
/// and dashes between the digits are ignored.
pub fn parse_meeting_input(input: &str) -> Result<MeetingReference, Error> {
    let compact: String = input
        .trim()
        .chars()
        .filter(|c| !c.is_whitespace() && *c != '-')
        .collect();

    if !compact.is_empty() && compact.chars().all(|c| c.is_ascii_digit()) {
        return Ok(MeetingReference::new(&compact, None));
    }

    parse_invite_link(input)
}

fn parse_error<E>(err: E) -> Error
where
    E: std::error::Error + Send + Sync + 'static,
{
    Error {
        source: Some(Box::new(err)),
        error_kind: DomainErrorKind::Internal(InternalErrorKind::Parse),
    }
}
