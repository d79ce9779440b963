//! Pre-defined provider configurations.

mod config;

pub use config::{zoom_config, ProviderConfig};
