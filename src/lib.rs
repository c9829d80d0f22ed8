pub mod cli;
pub mod client;
pub mod core;
pub mod logging;
pub mod models;
pub mod utils;

pub use client::Client;
pub use core::config::ClientConfig;
pub use core::error::ClientError;

/// Current crate version string exposed for CLI and tests.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub type Result<T> = std::result::Result<T, anyhow::Error>;
