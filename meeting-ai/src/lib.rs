//! Meeting AI abstraction layer for transcript retrieval and analysis providers.
//!
//! This crate provides trait-based abstractions for meeting AI workflows:
//! - Transcript retrieval for a finished meeting
//! - LLM-powered summarization of a transcript
//!
//! The design is provider-agnostic, enabling applications to swap between
//! different service providers (Zoom cloud recordings, LLM vendors, etc.) without
//! changing application code.

pub mod error;
pub mod traits;
pub mod types;

// Re-export commonly used types
pub use error::Error;
pub use types::transcription::Transcript;
