//! Shared configuration for the Slangster backend.
//!
//! Holds the environment-driven [`AppConfig`] used by the server and CLI.
//! Lexicon datasets themselves live in `slangster-analysis`; this crate only
//! knows where to find them.

mod app_config;
mod config;

use thiserror::Error;

pub use app_config::{AppConfig, Environment};
pub use config::{load_app_config, load_app_config_from_env};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for env var {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}
