use crate::logging::layers::console::{ConsoleFormat, ConsoleOutput};
use crate::Result;
use anyhow::anyhow;
use std::env;
use std::str::FromStr;
use tracing_subscriber::filter::Directive;

const DEFAULT_LEVEL: &str = "warn";
const VERBOSE_LEVEL: &str = "debug";

pub const LOG_LEVEL_ENV: &str = "WL_LOG_LEVEL";
pub const LOG_FORMAT_ENV: &str = "WL_LOG_FORMAT";
pub const LOG_OUTPUT_ENV: &str = "WL_LOG_OUTPUT";

/// Resolved logging configuration after applying flags and env overrides.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoggingConfig {
    pub default_level: String,
    pub console_output: ConsoleOutput,
    pub format: ConsoleFormat,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            default_level: DEFAULT_LEVEL.to_string(),
            console_output: ConsoleOutput::default(),
            format: ConsoleFormat::default(),
        }
    }
}

impl LoggingConfig {
    /// Load configuration with deterministic precedence: defaults, `--verbose`, env overrides.
    /// `RUST_LOG` is applied later by the env filter and beats all of these.
    pub fn load(verbose: bool) -> Result<Self> {
        let mut config = LoggingConfig::default();
        if verbose {
            config.default_level = VERBOSE_LEVEL.to_string();
        }
        config.apply_env_overrides()?;
        config.validate()?;
        Ok(config)
    }

    fn apply_env_overrides(&mut self) -> Result<()> {
        if let Ok(level) = env::var(LOG_LEVEL_ENV) {
            if !level.trim().is_empty() {
                self.default_level = level.trim().to_string();
            }
        }
        if let Ok(format) = env::var(LOG_FORMAT_ENV) {
            if !format.trim().is_empty() {
                self.format = ConsoleFormat::from_str(&format).map_err(|err| anyhow!(err))?;
            }
        }
        if let Ok(output) = env::var(LOG_OUTPUT_ENV) {
            if !output.trim().is_empty() {
                self.console_output = ConsoleOutput::from_str(&output).map_err(|err| anyhow!(err))?;
            }
        }
        Ok(())
    }

    fn validate(&self) -> Result<()> {
        Directive::from_str(&self.default_level)
            .map_err(|_| anyhow!("{} must be a valid tracing directive", LOG_LEVEL_ENV))?;
        Ok(())
    }
}
