//! Shared data model and configuration for the local business finder.

pub mod app_config;
pub mod config;
pub mod records;

pub use app_config::{AppConfig, Environment, FieldPrecedence};
pub use config::{load_app_config, load_app_config_from_env};
pub use records::{BusinessRecord, Coordinates, PositionSource, ResolvedRecord, UNKNOWN_NAME};

use thiserror::Error;

/// Every variable is optional, so the only failure is a present but
/// unusable value.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}
