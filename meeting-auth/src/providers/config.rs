//! Pre-configured provider settings.

/// Default Zoom OAuth token endpoint.
pub const ZOOM_OAUTH_TOKEN_URL: &str = "https://zoom.us/oauth/token";

/// Default Zoom REST API base URL.
pub const ZOOM_API_BASE_URL: &str = "https://api.zoom.us/v2";

/// Provider configuration with endpoints.
#[derive(Debug, Clone)]
pub struct ProviderConfig {
    /// OAuth token endpoint.
    pub token_url: String,
    /// Base API URL, without a trailing slash.
    pub base_url: String,
}

impl ProviderConfig {
    /// Override the token endpoint (e.g. to point at a mock server).
    pub fn with_token_url(mut self, token_url: &str) -> Self {
        self.token_url = token_url.to_string();
        self
    }

    /// Override the API base URL (e.g. to point at a mock server).
    pub fn with_base_url(mut self, base_url: &str) -> Self {
        self.base_url = base_url.trim_end_matches('/').to_string();
        self
    }
}

/// Get Zoom configuration.
pub fn zoom_config() -> ProviderConfig {
    ProviderConfig {
        token_url: ZOOM_OAUTH_TOKEN_URL.to_string(),
        base_url: ZOOM_API_BASE_URL.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zoom_config() {
        let config = zoom_config();
        assert_eq!(config.token_url, "https://zoom.us/oauth/token");
        assert_eq!(config.base_url, "https://api.zoom.us/v2");
    }

    #[test]
    fn test_base_url_override_strips_trailing_slash() {
        let config = zoom_config().with_base_url("http://127.0.0.1:1234/");
        assert_eq!(config.base_url, "http://127.0.0.1:1234");
    }
}
