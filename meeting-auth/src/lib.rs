//! # meeting-auth
//!
//! Authentication foundation for talking to meeting platforms:
//! - Client credentials for server-to-server OAuth apps
//! - OAuth token acquisition (account credentials grant) and in-memory holding
//! - HTTP client building
//! - Pre-configured provider endpoints
//!
//! ## Architecture
//!
//! This crate provides the authentication foundation that other crates build upon:
//! - `domain` gateways hold a [`oauth::token::Holder`] and ask it for a valid
//!   access token before every authenticated call
//! - the same shared `reqwest::Client` is handed to providers and gateways
//!
//! ## Usage
//!
//! ```rust,ignore
//! use meeting_auth::{
//!     credentials::Credentials,
//!     http::HttpClientBuilder,
//!     oauth::{providers::zoom, token::Holder},
//!     providers::zoom_config,
//! };
//! ```

pub mod credentials;
pub mod error;
pub mod http;
pub mod oauth;
pub mod providers;

// Re-export commonly used types
pub use error::{Error, ErrorKind};
