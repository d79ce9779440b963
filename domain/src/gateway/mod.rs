//! Clients for the external services this crate talks to.

pub mod telex;
pub mod zoom;
pub mod zoom_recordings;
