//! Meeting relay domain layer.
//!
//! Ties the authenticated Zoom gateway, invite link parsing and the Telex
//! notification client together. Binaries should only need this crate and
//! `service`; errors from `meeting-auth` and `meeting-ai` are translated into
//! [`error::Error`] before they reach callers.

pub mod error;
pub mod gateway;
pub mod invite;
pub mod relay;

pub use invite::{parse_invite_link, parse_meeting_input, MeetingReference};
pub use meeting_ai::Transcript;
