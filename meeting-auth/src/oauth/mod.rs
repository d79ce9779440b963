//! OAuth 2.0 authentication infrastructure.
//!
//! Provides the account credentials grant used by server-to-server apps on
//! video meeting platforms, plus the in-memory holder of the resulting token.

mod provider;

pub mod providers;
pub mod token;

pub use provider::{Provider, ProviderKind};
