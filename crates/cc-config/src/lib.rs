//! # cc-config
//!
//! Typed runtime settings. Sources, lowest precedence first:
//!
//! 1. built-in defaults
//! 2. `citizen-connect.toml` in the working directory (optional)
//! 3. `CC__SECTION__KEY` environment variables, including those loaded from `.env`
//!
//! Example: `CC__SERVER__PORT=9000` overrides `server.port`.

use std::net::SocketAddr;
use std::path::PathBuf;

use cc_core::i18n::Language;
use config::{Config, Environment, File};
use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

pub const CONFIG_FILE: &str = "citizen-connect";
pub const ENV_PREFIX: &str = "CC";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to load configuration: {0}")]
    Load(#[from] config::ConfigError),

    #[error("invalid bind address '{0}'")]
    BindAddress(String),
}

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub server: ServerSettings,
    pub session: SessionSettings,
    pub ui: UiSettings,
    pub log: LogSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
}

impl ServerSettings {
    pub fn bind_addr(&self) -> Result<SocketAddr, ConfigError> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .map_err(|_| ConfigError::BindAddress(format!("{}:{}", self.host, self.port)))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SlotBackend {
    /// JSON file at `session.slot_path`; survives restarts.
    File,
    /// Process memory; every restart starts signed out.
    Memory,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SessionSettings {
    pub backend: SlotBackend,
    pub slot_path: PathBuf,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UiSettings {
    pub default_language: Language,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LogSettings {
    /// `EnvFilter` directive used when `RUST_LOG` is unset.
    pub filter: String,
    pub json: bool,
}

impl Settings {
    /// Loads `.env` (if present) and then every configuration source.
    pub fn load() -> Result<Self, ConfigError> {
        if let Ok(path) = dotenvy::dotenv() {
            debug!(path = %path.display(), "loaded .env");
        }
        Self::from_sources(true)
    }

    /// Defaults plus environment only; handy for tests and embedding.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_sources(false)
    }

    fn from_sources(with_file: bool) -> Result<Self, ConfigError> {
        let mut builder = Config::builder()
            .set_default("server.host", "127.0.0.1")?
            .set_default("server.port", 8080)?
            .set_default("session.backend", "file")?
            .set_default("session.slot_path", "./data/cc_user.json")?
            .set_default("ui.default_language", "EN")?
            .set_default("log.filter", "info")?
            .set_default("log.json", false)?;

        if with_file {
            builder = builder.add_source(File::with_name(CONFIG_FILE).required(false));
        }

        let settings = builder
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()?;
        Ok(settings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_complete() {
        let settings = Settings::from_env().unwrap();

        assert_eq!(settings.server.port, 8080);
        assert_eq!(settings.session.backend, SlotBackend::File);
        assert_eq!(settings.ui.default_language, Language::En);
        assert_eq!(settings.server.bind_addr().unwrap().to_string(), "127.0.0.1:8080");
    }

    #[test]
    fn bad_host_is_reported() {
        let server = ServerSettings { host: "not a host".into(), port: 1 };
        assert!(matches!(server.bind_addr(), Err(ConfigError::BindAddress(_))));
    }
}
