//! Client configuration.

use std::path::PathBuf;
use std::time::Duration;

pub const DEFAULT_API_URL: &str = "http://localhost:8080/api";
pub const DEFAULT_AUTH_URL: &str = "http://localhost:8080/auth";
pub const DEFAULT_CEP_URL: &str = "https://viacep.com.br/ws";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Where the backend lives and how long to wait for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Base URL of the main API (`/members`, `/churches`, ...).
    pub api_url: String,
    /// Base URL of the authentication service (`/login`, `/register`, `/me`).
    pub auth_url: String,
    /// Base URL of the CEP lookup service.
    pub cep_url: String,
    /// Token file; `None` selects the per-user default location.
    pub token_file: Option<PathBuf>,
    pub timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            auth_url: DEFAULT_AUTH_URL.to_string(),
            cep_url: DEFAULT_CEP_URL.to_string(),
            token_file: None,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl ClientConfig {
    /// Scheme, host and port of the API; photo paths are served from here.
    pub fn origin(&self) -> String {
        origin_of(&self.api_url)
    }
}

/// `http://host:port` part of a URL, or the input itself when unparsable.
pub fn origin_of(url: &str) -> String {
    match reqwest::Url::parse(url) {
        Ok(parsed) => parsed.origin().ascii_serialization(),
        Err(_) => url.trim_end_matches('/').to_string(),
    }
}
