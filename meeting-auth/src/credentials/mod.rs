//! Client credentials for server-to-server OAuth apps.

mod account;

pub use account::Credentials;
