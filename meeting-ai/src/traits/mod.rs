//! Provider traits implemented by external collaborators.

pub mod analysis;
pub mod transcription;
