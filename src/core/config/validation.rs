use super::ClientConfig;
use crate::core::error::{ClientError, Result};
use url::Url;

pub struct ConfigValidator;

impl ConfigValidator {
    /// Validate configuration rules
    pub fn validate(config: &ClientConfig) -> Result<()> {
        if config.access_token.trim().is_empty() {
            return Err(ClientError::invalid_argument("access token cannot be empty"));
        }

        if config.client_id.trim().is_empty() {
            return Err(ClientError::invalid_argument("client id cannot be empty"));
        }

        let parsed = Url::parse(&config.api_url).map_err(|source| ClientError::InvalidUrl {
            url: config.api_url.clone(),
            source,
        })?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(ClientError::invalid_argument(format!(
                "api url must use http or https, got '{}'",
                parsed.scheme()
            )));
        }

        if config.timeout.is_zero() {
            return Err(ClientError::invalid_argument("timeout must be positive"));
        }

        Ok(())
    }
}
