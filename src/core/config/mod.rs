pub mod loader;
pub mod validation;

pub use loader::ConfigLoader;
pub use validation::ConfigValidator;

use std::time::Duration;

/// Production API root.
pub const DEFAULT_API_URL: &str = "https://a.wunderlist.com/api/v1";

/// Default per-request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Settings a client is built from. Read-only once the client exists.
#[derive(Clone)]
pub struct ClientConfig {
    /// Base URL every relative path is resolved against
    pub api_url: String,

    /// Per-user access token sent as `X-Access-Token`
    pub access_token: String,

    /// Registered client id sent as `X-Client-ID`
    pub client_id: String,

    /// Upper bound for a single round-trip
    pub timeout: Duration,
}

impl ClientConfig {
    pub fn new<T: Into<String>, C: Into<String>>(access_token: T, client_id: C) -> Self {
        ClientConfig {
            api_url: DEFAULT_API_URL.to_string(),
            access_token: access_token.into(),
            client_id: client_id.into(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    pub fn with_api_url<T: Into<String>>(mut self, api_url: T) -> Self {
        self.api_url = api_url.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

// Credentials never reach Debug output.
impl std::fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientConfig")
            .field("api_url", &self.api_url)
            .field("access_token", &crate::logging::redact::REDACTED)
            .field("client_id", &crate::logging::redact::REDACTED)
            .field("timeout", &self.timeout)
            .finish()
    }
}
