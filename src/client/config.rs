use crate::client::error::ConfigError;

/// Build-time variable holding the backend API base URL.
pub const API_URL_VAR: &str = "FOOTBASE_API_URL";

/// Backend used when `FOOTBASE_API_URL` is not set at build time.
pub const DEFAULT_API_URL: &str = "http://localhost:8080/api";

#[derive(Debug, Clone, PartialEq)]
pub struct ClientConfig {
    pub api_base_url: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_URL.to_string(),
        }
    }
}

impl ClientConfig {
    /// Validate and normalize a base URL, trimming any trailing slash.
    pub fn new(api_base_url: impl Into<String>) -> Result<Self, ConfigError> {
        let api_base_url = api_base_url.into();
        let trimmed = api_base_url.trim().trim_end_matches('/');

        if !(trimmed.starts_with("http://") || trimmed.starts_with("https://")) {
            return Err(ConfigError::InvalidEnvValue {
                var: API_URL_VAR.to_string(),
                reason: format!("expected an http(s) URL, got {:?}", api_base_url),
            });
        }

        Ok(Self {
            api_base_url: trimmed.to_string(),
        })
    }

    /// Read the base URL baked in at build time.
    ///
    /// The client runs in the browser, so the variable is resolved by the compiler
    /// rather than from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::new(option_env!("FOOTBASE_API_URL").unwrap_or(DEFAULT_API_URL))
    }

    /// Absolute URL for an endpoint path such as `/matches/1`.
    pub fn url(&self, endpoint: &str) -> String {
        format!("{}{}", self.api_base_url, endpoint)
    }
}
