//! Runtime configuration.
//!
//! Values come from the environment (optionally seeded from a `.env` file by
//! `main`). Every field has a default so the service starts with no setup.

use serde::{Deserialize, Serialize};
use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;
use validator::{Validate, ValidationError};

use crate::error::{describe_validation, AppError};

pub const ENV_BIND_ADDR: &str = "CHATTOMO_BIND_ADDR";
pub const ENV_LOG_PATH: &str = "CHATTOMO_LOG_PATH";
pub const ENV_DEFAULT_USER: &str = "CHATTOMO_DEFAULT_USER";
pub const ENV_LOG_JSON: &str = "CHATTOMO_LOG_JSON";

const DEFAULT_BIND_ADDR: &str = "127.0.0.1:8000";
const DEFAULT_LOG_PATH: &str = "chattomo_logs.csv";
const DEFAULT_USER_ID: &str = "honoka";

/// Service configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct AppConfig {
    /// Address the HTTP server listens on.
    #[validate(custom(function = "validate_bind_addr"))]
    pub bind_addr: String,
    /// CSV file analyses are appended to.
    #[validate(length(min = 1))]
    pub log_path: String,
    /// User id recorded when a request carries none.
    #[validate(length(min = 1, max = 64))]
    pub default_user_id: String,
    /// Emit tracing output as JSON lines.
    pub log_json: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            bind_addr: DEFAULT_BIND_ADDR.to_string(),
            log_path: DEFAULT_LOG_PATH.to_string(),
            default_user_id: DEFAULT_USER_ID.to_string(),
            log_json: false,
        }
    }
}

impl AppConfig {
    /// Build the configuration from environment variables, falling back to defaults.
    pub fn from_env() -> Result<Self, AppError> {
        let defaults = Self::default();

        let log_json = match env::var(ENV_LOG_JSON) {
            Ok(raw) => parse_flag(&raw).ok_or_else(|| {
                AppError::Config(format!("{} must be true or false, got '{}'", ENV_LOG_JSON, raw))
            })?,
            Err(_) => defaults.log_json,
        };

        let config = Self {
            bind_addr: env::var(ENV_BIND_ADDR).unwrap_or(defaults.bind_addr),
            log_path: env::var(ENV_LOG_PATH).unwrap_or(defaults.log_path),
            default_user_id: env::var(ENV_DEFAULT_USER).unwrap_or(defaults.default_user_id),
            log_json,
        };

        config.validate().map_err(|e| {
            AppError::Config(format!("Invalid configuration: {}", describe_validation(&e)))
        })?;

        Ok(config)
    }

    /// Parsed listen address
    pub fn socket_addr(&self) -> Result<SocketAddr, AppError> {
        self.bind_addr
            .parse()
            .map_err(|e| AppError::Config(format!("Invalid bind address '{}': {}", self.bind_addr, e)))
    }

    pub fn log_path(&self) -> PathBuf {
        PathBuf::from(&self.log_path)
    }
}

fn validate_bind_addr(value: &str) -> Result<(), ValidationError> {
    value
        .parse::<SocketAddr>()
        .map(|_| ())
        .map_err(|_| ValidationError::new("bind_addr"))
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" | "" => Some(false),
        _ => None,
    }
}
