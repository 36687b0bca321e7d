//! Client configuration. API credentials, endpoint, timeouts.

use serde::Deserialize;

/// Default request timeout in milliseconds.
pub const DEFAULT_TIMEOUT_MS: u64 = 10_000;

#[derive(Debug, Deserialize, Default)]
pub struct ClientConfig {
    /// Application API key. Read from FEEDKIT_API_KEY.
    pub api_key: Option<String>,

    /// API endpoint root. Read from FEEDKIT_API_URL.
    #[serde(default)]
    pub api_url: Option<String>,

    /// Request timeout in ms. Read from FEEDKIT_TIMEOUT_MS.
    #[serde(default)]
    pub timeout_ms: Option<u64>,
}

impl ClientConfig {
    pub fn load() -> Result<Self, config::ConfigError> {
        dotenv::dotenv().ok();
        let mut c = config::Config::builder();
        c = c.add_source(config::Environment::with_prefix("FEEDKIT"));
        if let Ok(path) = std::env::var("FEEDKIT_CONFIG") {
            c = c.add_source(config::File::with_name(&path));
        }
        c.build()?.try_deserialize()
    }

    /// Returns the API key from config or FEEDKIT_API_KEY env.
    pub fn api_key(&self) -> Option<String> {
        self.api_key
            .clone()
            .or_else(|| std::env::var("FEEDKIT_API_KEY").ok())
    }

    /// Returns the endpoint root. Defaults to a local development server.
    pub fn api_url_or_default(&self) -> String {
        self.api_url
            .clone()
            .or_else(|| std::env::var("FEEDKIT_API_URL").ok())
            .unwrap_or_else(|| "http://localhost:8000/api/v1.0/".to_string())
    }

    /// Returns the request timeout in ms. Defaults to DEFAULT_TIMEOUT_MS.
    pub fn timeout_ms_or_default(&self) -> u64 {
        self.timeout_ms.unwrap_or(DEFAULT_TIMEOUT_MS)
    }

    /// Returns true if the transport can be constructed (API key present).
    pub fn is_configured(&self) -> bool {
        self.api_key().is_some()
    }
}
