//! OAuth token types and in-memory holding with refresh-on-expiry.

mod holder;
mod tokens;

pub use holder::Holder;
pub use tokens::{TokenResponse, Tokens};
