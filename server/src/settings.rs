//! Listener settings.
//!
//! Only the port can be overridden, through `PORT`.

use config::{Config, ConfigError};
use serde::Deserialize;

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 3000;

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct Settings {
    pub host: String,
    pub port: u16,
}

impl Settings {
    /// Defaults, with `PORT` from the environment applied on top. An empty
    /// `PORT` counts as unset.
    pub fn new() -> Result<Self, ConfigError> {
        Self::with_port(std::env::var("PORT").ok())
    }

    pub fn with_port(port: Option<String>) -> Result<Self, ConfigError> {
        Config::builder()
            .set_default("host", DEFAULT_HOST)?
            .set_default("port", i64::from(DEFAULT_PORT))?
            .set_override_option("port", port.filter(|p| !p.trim().is_empty()))?
            .build()?
            .try_deserialize()
    }

    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
