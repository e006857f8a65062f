//! Configuration management

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

use crate::constants::{DEFAULT_API_URL, DEFAULT_ASSETS_URL, DEFAULT_TIMEOUT_SECONDS};
use crate::error::AppError;
use crate::types::MenuLocale;

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    pub app: AppSettings,
    pub backend: BackendSettings,
    #[serde(default)]
    pub locale: MenuLocale,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AppSettings {
    pub env: String,
    pub host: String,
    pub port: u16,
    pub name: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct BackendSettings {
    /// REST root, e.g. `http://127.0.0.1:3000/api`.
    pub api_url: String,
    /// Prefix joined with each item's relative `imageUrl`.
    pub assets_url: String,
    pub timeout_seconds: u64,
}

impl AppConfig {
    /// Defaults, then `config/default`, then `config/{APP_ENV}`, then `APP__*` variables.
    pub fn load() -> Result<Self, AppError> {
        let env = std::env::var("APP_ENV").unwrap_or_else(|_| "development".into());
        let config = Self::builder(&env)?
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", env)).required(false))
            .add_source(
                Environment::with_prefix("APP")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()?;
        Ok(config)
    }

    fn builder(
        env: &str,
    ) -> Result<config::ConfigBuilder<config::builder::DefaultState>, ConfigError> {
        Config::builder()
            .set_default("app.env", env)?
            .set_default("app.host", "127.0.0.1")?
            .set_default("app.port", 8080)?
            .set_default("app.name", "menu-server")?
            .set_default("backend.api_url", DEFAULT_API_URL)?
            .set_default("backend.assets_url", DEFAULT_ASSETS_URL)?
            .set_default("backend.timeout_seconds", DEFAULT_TIMEOUT_SECONDS)
    }
}
