use super::{ClientConfig, ConfigValidator, DEFAULT_API_URL, DEFAULT_TIMEOUT};
use crate::core::error::{ClientError, Result};
use std::env;
use std::time::Duration;

pub const ACCESS_TOKEN_ENV: &str = "WL_ACCESS_TOKEN";
pub const CLIENT_ID_ENV: &str = "WL_CLIENT_ID";
pub const API_URL_ENV: &str = "WL_API_URL";
pub const TIMEOUT_ENV: &str = "WL_TIMEOUT_SECONDS";

pub struct ConfigLoader;

impl ConfigLoader {
    /// Resolve a config from explicit values, falling back to the environment.
    /// Explicit values win over environment variables.
    pub fn load(access_token: Option<String>, client_id: Option<String>) -> Result<ClientConfig> {
        let access_token = access_token
            .filter(|v| !v.is_empty())
            .or_else(|| non_empty_env(ACCESS_TOKEN_ENV))
            .ok_or_else(|| {
                ClientError::invalid_argument(format!(
                    "access token must be provided via --accessToken or {}",
                    ACCESS_TOKEN_ENV
                ))
            })?;

        let client_id = client_id
            .filter(|v| !v.is_empty())
            .or_else(|| non_empty_env(CLIENT_ID_ENV))
            .ok_or_else(|| {
                ClientError::invalid_argument(format!(
                    "client id must be provided via --clientID or {}",
                    CLIENT_ID_ENV
                ))
            })?;

        let mut config = ClientConfig::new(access_token, client_id);
        Self::apply_env_overrides(&mut config)?;
        ConfigValidator::validate(&config)?;
        Ok(config)
    }

    /// Load entirely from the environment.
    pub fn from_env() -> Result<ClientConfig> {
        Self::load(None, None)
    }

    fn apply_env_overrides(config: &mut ClientConfig) -> Result<()> {
        config.api_url = non_empty_env(API_URL_ENV).unwrap_or_else(|| DEFAULT_API_URL.to_string());

        config.timeout = match non_empty_env(TIMEOUT_ENV) {
            Some(raw) => raw
                .trim()
                .parse::<u64>()
                .map(Duration::from_secs)
                .map_err(|_| {
                    ClientError::invalid_argument(format!(
                        "{} must be a whole number of seconds, got '{}'",
                        TIMEOUT_ENV, raw
                    ))
                })?,
            None => DEFAULT_TIMEOUT,
        };
        Ok(())
    }
}

fn non_empty_env(key: &str) -> Option<String> {
    env::var(key).ok().filter(|v| !v.trim().is_empty())
}
