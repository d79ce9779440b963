use clap::builder::TypedValueParser as _;
use clap::Parser;
use log::LevelFilter;
use std::error::Error as StdError;
use std::fmt;
use url::Url;

/// Default Zoom OAuth token endpoint used when `ZOOM_OAUTH_URL` is not set.
pub const DEFAULT_ZOOM_OAUTH_URL: &str = "https://zoom.us/oauth/token";

/// Default Zoom REST API base URL used when `ZOOM_API_BASE_URL` is not set.
pub const DEFAULT_ZOOM_API_BASE_URL: &str = "https://api.zoom.us/v2";

/// Default Telex channel summaries are posted to.
pub const DEFAULT_TELEX_CHANNEL: &str = "meeting-transcripts";

/// Configuration problems detected by [`Config::validate`].
#[derive(Debug, PartialEq)]
pub enum ConfigError {
    /// A required value was not provided (holds the environment variable name).
    Missing(&'static str),
    /// A value that must be an absolute http(s) URL is not one.
    InvalidUrl(&'static str),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ConfigError::Missing(name) => write!(f, "Missing required configuration: {name}"),
            ConfigError::InvalidUrl(name) => write!(f, "Invalid URL in configuration: {name}"),
        }
    }
}

impl StdError for ConfigError {}

#[derive(Clone, Debug, Parser)]
pub struct Config {
    /// Client ID of the Zoom server-to-server OAuth app.
    #[arg(long, env)]
    zoom_client_id: Option<String>,

    /// Client secret of the Zoom server-to-server OAuth app.
    #[arg(long, env, hide_env_values = true)]
    zoom_client_secret: Option<String>,

    /// Zoom account ID the OAuth app acts on behalf of.
    #[arg(long, env)]
    zoom_account_id: Option<String>,

    /// The Zoom OAuth token endpoint.
    /// Override in tests to point at a mock server.
    #[arg(long, env, default_value = DEFAULT_ZOOM_OAUTH_URL)]
    zoom_oauth_url: String,

    /// The base URL of the Zoom REST API.
    /// Override in tests to point at a mock server.
    #[arg(long, env, default_value = DEFAULT_ZOOM_API_BASE_URL)]
    zoom_api_base_url: String,

    /// The Telex webhook URL that receives meeting summaries.
    #[arg(long, env)]
    telex_api_url: Option<String>,

    /// The Telex channel name sent along with every summary.
    #[arg(long, env, default_value = DEFAULT_TELEX_CHANNEL)]
    telex_channel: String,

    /// Timeout in seconds for every outgoing HTTP request
    #[arg(long, env, default_value_t = 30)]
    pub http_timeout_secs: u64,

    /// Set the log level verbosity threshold (level) to control what gets displayed on console output
    #[arg(
        short,
        long,
        env,
        default_value_t = LevelFilter::Info,
        value_parser = clap::builder::PossibleValuesParser::new(["OFF", "ERROR", "WARN", "INFO", "DEBUG", "TRACE"])
            .map(|s| s.parse::<LevelFilter>().unwrap()),
        )]
    pub log_level_filter: LevelFilter,
}

impl Config {
    /// Checks every required value once, at startup.
    ///
    /// Components read their values through the accessors below, which apply
    /// the same checks, so a validated config never fails later.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.zoom_client_id()?;
        self.zoom_client_secret()?;
        self.zoom_account_id()?;
        self.zoom_oauth_url()?;
        self.zoom_api_base_url()?;
        self.telex_api_url()?;
        Ok(())
    }

    pub fn zoom_client_id(&self) -> Result<&str, ConfigError> {
        required("ZOOM_CLIENT_ID", &self.zoom_client_id)
    }

    pub fn zoom_client_secret(&self) -> Result<&str, ConfigError> {
        required("ZOOM_CLIENT_SECRET", &self.zoom_client_secret)
    }

    pub fn zoom_account_id(&self) -> Result<&str, ConfigError> {
        required("ZOOM_ACCOUNT_ID", &self.zoom_account_id)
    }

    /// Returns the Zoom OAuth token endpoint.
    pub fn zoom_oauth_url(&self) -> Result<&str, ConfigError> {
        http_url("ZOOM_OAUTH_URL", &self.zoom_oauth_url)
    }

    /// Returns the Zoom REST API base URL.
    pub fn zoom_api_base_url(&self) -> Result<&str, ConfigError> {
        http_url("ZOOM_API_BASE_URL", &self.zoom_api_base_url)
    }

    /// Returns the Telex webhook URL.
    pub fn telex_api_url(&self) -> Result<&str, ConfigError> {
        let value = required("TELEX_API_URL", &self.telex_api_url)?;
        http_url("TELEX_API_URL", value)
    }

    pub fn telex_channel(&self) -> &str {
        &self.telex_channel
    }
}

fn required<'a>(name: &'static str, value: &'a Option<String>) -> Result<&'a str, ConfigError> {
    match value.as_deref().map(str::trim) {
        Some(value) if !value.is_empty() => Ok(value),
        _ => Err(ConfigError::Missing(name)),
    }
}

fn http_url<'a>(name: &'static str, value: &'a str) -> Result<&'a str, ConfigError> {
    match Url::parse(value) {
        Ok(url) if url.scheme() == "http" || url.scheme() == "https" => Ok(value),
        _ => Err(ConfigError::InvalidUrl(name)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Environment variables `Config` falls back to when a flag is absent.
    const CONFIG_ENV_VARS: [&str; 9] = [
        "ZOOM_CLIENT_ID",
        "ZOOM_CLIENT_SECRET",
        "ZOOM_ACCOUNT_ID",
        "ZOOM_OAUTH_URL",
        "ZOOM_API_BASE_URL",
        "TELEX_API_URL",
        "TELEX_CHANNEL",
        "HTTP_TIMEOUT_SECS",
        "LOG_LEVEL_FILTER",
    ];

    // Parses flags only, so a developer's exported credentials cannot fill in
    // the values a test leaves out.
    fn config_from(args: &[&str]) -> Config {
        for name in CONFIG_ENV_VARS {
            std::env::remove_var(name);
        }
        Config::parse_from(std::iter::once("meeting_relay").chain(args.iter().copied()))
    }

    fn complete_args() -> Vec<&'static str> {
        vec![
            "--zoom-client-id",
            "client",
            "--zoom-client-secret",
            "secret",
            "--zoom-account-id",
            "account",
            "--telex-api-url",
            "https://ping.telex.im/v1/webhooks/abc",
        ]
    }

    #[test]
    fn test_complete_config_validates() {
        let config = config_from(&complete_args());
        assert_eq!(config.validate(), Ok(()));
        assert_eq!(config.zoom_client_id(), Ok("client"));
        assert_eq!(config.zoom_oauth_url(), Ok(DEFAULT_ZOOM_OAUTH_URL));
        assert_eq!(config.zoom_api_base_url(), Ok(DEFAULT_ZOOM_API_BASE_URL));
        assert_eq!(config.telex_channel(), DEFAULT_TELEX_CHANNEL);
        assert_eq!(config.http_timeout_secs, 30);
        assert_eq!(config.log_level_filter, LevelFilter::Info);
    }

    #[test]
    fn test_missing_secret_is_reported_by_name() {
        let args: Vec<&str> = complete_args()
            .into_iter()
            .filter(|arg| *arg != "--zoom-client-secret" && *arg != "secret")
            .collect();
        let config = config_from(&args);

        assert_eq!(
            config.validate(),
            Err(ConfigError::Missing("ZOOM_CLIENT_SECRET"))
        );
    }

    #[test]
    fn test_blank_value_counts_as_missing() {
        let mut args = complete_args();
        args[5] = "   ";
        let config = config_from(&args);

        assert_eq!(config.validate(), Err(ConfigError::Missing("ZOOM_ACCOUNT_ID")));
    }

    #[test]
    fn test_invalid_telex_url_is_rejected() {
        let mut args = complete_args();
        args[7] = "not a url";
        let config = config_from(&args);

        assert_eq!(
            config.validate(),
            Err(ConfigError::InvalidUrl("TELEX_API_URL"))
        );
    }

    #[test]
    fn test_non_http_api_base_url_is_rejected() {
        let mut args = complete_args();
        args.extend(["--zoom-api-base-url", "ftp://api.zoom.us/v2"]);
        let config = config_from(&args);

        assert_eq!(
            config.validate(),
            Err(ConfigError::InvalidUrl("ZOOM_API_BASE_URL"))
        );
    }

    #[test]
    fn test_config_error_display() {
        assert_eq!(
            ConfigError::Missing("TELEX_API_URL").to_string(),
            "Missing required configuration: TELEX_API_URL"
        );
    }

    #[test]
    fn test_exported_environment_does_not_fill_missing_flags() {
        std::env::set_var("TELEX_API_URL", "https://ping.telex.im/v1/webhooks/from-env");
        let args: Vec<&str> = complete_args()
            .into_iter()
            .filter(|arg| *arg != "--telex-api-url" && !arg.contains("telex.im"))
            .collect();
        let config = config_from(&args);

        assert_eq!(config.validate(), Err(ConfigError::Missing("TELEX_API_URL")));
    }
}
