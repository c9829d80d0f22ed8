pub mod config;
pub mod error;
pub mod types;

pub use config::{ClientConfig, ConfigLoader, ConfigValidator};
pub use error::{ClientError, CompositeError, SubjectError};
pub use types::*;
