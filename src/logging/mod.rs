//! Process-wide `tracing` setup for the `wl` binary.
//!
//! The library never installs a subscriber; it only emits events with a
//! `source` field naming the subsystem (`transport`, `upload`, `fanout`,
//! `reconcile`). The binary calls [`init`] once before dispatching a command.

pub mod config;
pub mod layers;
pub mod redact;

pub use config::LoggingConfig;
pub use layers::console::{ConsoleFormat, ConsoleOutput};

use crate::Result;
use anyhow::{bail, Context};
use std::sync::atomic::{AtomicBool, Ordering};
use tracing_subscriber::filter::EnvFilter;
use tracing_subscriber::prelude::*;
use tracing_subscriber::registry::Registry;

static INSTALLED: AtomicBool = AtomicBool::new(false);

/// Install the console subscriber. `RUST_LOG` wins over the configured level.
pub fn init(config: &LoggingConfig) -> Result<()> {
    if INSTALLED.swap(true, Ordering::SeqCst) {
        bail!("logging already initialized");
    }

    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(&config.default_level)
            .with_context(|| format!("invalid log level '{}'", config.default_level))?,
    };
    let console = layers::console::console_layer::<Registry>(config.console_output, config.format);

    tracing_subscriber::registry()
        .with(console)
        .with(filter)
        .try_init()
        .context("failed to install tracing subscriber")
}
