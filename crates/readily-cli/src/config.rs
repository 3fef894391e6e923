//! `readily.toml` loading.

use anyhow::{bail, Context};
use readily_catalog::CatalogConfig;
use readily_session::EvictionPolicy;
use serde::Deserialize;
use std::path::Path;
use std::time::Duration;

#[derive(Debug, Deserialize, Default)]
pub struct ReadilyConfig {
    /// Replaces the built-in welcome/help text.
    #[serde(default)]
    pub welcome_message: Option<String>,
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub catalog: CatalogConfig,
    #[serde(default)]
    pub sessions: SessionsConfig,
}

#[derive(Debug, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct SessionsConfig {
    #[serde(default)]
    pub max_idle_secs: Option<u64>,
    #[serde(default)]
    pub max_sessions: Option<usize>,
    #[serde(default = "default_sweep_interval_secs")]
    pub sweep_interval_secs: u64,
}

impl Default for SessionsConfig {
    fn default() -> Self {
        Self {
            max_idle_secs: None,
            max_sessions: None,
            sweep_interval_secs: default_sweep_interval_secs(),
        }
    }
}

impl SessionsConfig {
    pub fn to_policy(&self) -> EvictionPolicy {
        EvictionPolicy {
            max_idle: self.max_idle_secs.map(Duration::from_secs),
            max_sessions: self.max_sessions,
        }
    }

    pub fn sweep_interval(&self) -> Duration {
        Duration::from_secs(self.sweep_interval_secs)
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}
fn default_port() -> u16 {
    3000
}
fn default_sweep_interval_secs() -> u64 {
    60
}

impl ReadilyConfig {
    /// Reads and validates `path`. A missing file is only tolerated when
    /// `required` is false, in which case the defaults are returned.
    pub fn load(path: &Path, required: bool) -> anyhow::Result<Self> {
        let config = match std::fs::read_to_string(path) {
            Ok(raw) => toml::from_str(&raw)
                .with_context(|| format!("Invalid config file '{}'", path.display()))?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound && !required => {
                Self::default()
            }
            Err(e) => {
                return Err(e).with_context(|| {
                    format!("Failed to read config file '{}'", path.display())
                })
            }
        };
        config.validate()?;
        Ok(config)
    }

    /// Applies `PORT` and `GOODREADS_API_KEY` when set.
    pub fn apply_env(&mut self, var: impl Fn(&str) -> Option<String>) -> anyhow::Result<()> {
        if let Some(port) = var("PORT") {
            self.server.port = port
                .trim()
                .parse()
                .with_context(|| format!("PORT is not a valid port: '{port}'"))?;
        }
        if let Some(key) = var("GOODREADS_API_KEY") {
            self.catalog.api_key = key;
        }
        Ok(())
    }

    fn validate(&self) -> anyhow::Result<()> {
        if self.sessions.sweep_interval_secs == 0 {
            bail!("sessions.sweep_interval_secs must be greater than 0");
        }
        if self.sessions.max_sessions == Some(0) {
            bail!("sessions.max_sessions must be greater than 0");
        }
        Ok(())
    }
}
