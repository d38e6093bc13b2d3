//! Handles settings for the application.
//!
//! Values come from an optional TOML file (see `config/walletd.toml`) and are
//! overridden by `WALLETD_*` environment variables, e.g.
//! `WALLETD_SERVER__PORT=9000`.
use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct App {
    /// Log level applied to every crate of the workspace.
    pub level: String,
}

impl Default for App {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct Server {
    pub bind: String,
    pub port: u16,
}

impl Default for Server {
    fn default() -> Self {
        Self {
            bind: "127.0.0.1".to_string(),
            port: 8080,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub app: App,
    pub server: Server,
}

impl Settings {
    pub fn new(path: &str) -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::with_name(path).required(false))
            .add_source(Environment::with_prefix("WALLETD").separator("__"))
            .build()?;

        settings.try_deserialize()
    }

    pub fn address(&self) -> String {
        format!("{}:{}", self.server.bind, self.server.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_falls_back_to_defaults() {
        let settings = Settings::new("does/not/exist").unwrap();
        assert_eq!(settings.server.port, 8080);
        assert_eq!(settings.app.level, "info");
    }

    #[test]
    fn sample_file_is_valid() {
        let path = concat!(env!("CARGO_MANIFEST_DIR"), "/config/walletd");
        let settings = Settings::new(path).unwrap();
        assert_eq!(settings.address(), "127.0.0.1:8080");
    }
}
