//! Value types exchanged with providers.

pub mod transcription;
