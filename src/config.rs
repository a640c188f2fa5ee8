//! Terminal client configuration.
//!
//! Layered, later sources winning:
//! 1. Defaults in code
//! 2. An optional `stockboard.toml` next to the working directory
//! 3. `STOCKBOARD_*` environment variables (a `.env` file is loaded first)

use std::time::Duration;

use common::REPORT_REFRESH_INTERVAL;
use config::{ConfigError, Environment, File};
use serde::Deserialize;

pub const DEFAULT_CONFIG_FILE: &str = "stockboard";

#[derive(Debug, Deserialize, Clone)]
pub struct Settings {
    /// Base URL the endpoint paths are appended to, e.g. `http://localhost:5000/api`
    pub api_base_url: String,

    /// Per-request timeout in seconds
    pub request_timeout_secs: u64,

    /// Fallback tracing filter when `RUST_LOG` is unset
    pub log_level: String,

    /// Polling period of `report --watch`
    pub report_refresh_secs: u64,
}

impl Settings {
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(DEFAULT_CONFIG_FILE)
    }

    /// Load using `file` (extension optional) as the file layer.
    pub fn load_from(file: &str) -> Result<Self, ConfigError> {
        let config = config::Config::builder()
            .set_default("api_base_url", "http://localhost:5000/api")?
            .set_default("request_timeout_secs", 10)?
            .set_default("log_level", "stockboard=info,common=info")?
            .set_default("report_refresh_secs", REPORT_REFRESH_INTERVAL.as_secs() as i64)?
            .add_source(File::with_name(file).required(false))
            .add_source(Environment::with_prefix("STOCKBOARD").try_parsing(true))
            .build()?;

        config.try_deserialize()
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs.max(1))
    }

    pub fn report_refresh(&self) -> Duration {
        Duration::from_secs(self.report_refresh_secs.max(1))
    }
}
