use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::env;

use crate::constants::INITIAL_NEWS_URL;

#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    /// Credential sent as `X-Api-Key` on every request. An empty key is
    /// allowed; authentication then fails at the remote end, not here.
    #[serde(default)]
    pub key: String,
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            key: String::new(),
            base_url: default_base_url(),
            user_agent: default_user_agent(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { level: default_level() }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

fn default_base_url() -> String {
    INITIAL_NEWS_URL.to_string()
}

fn default_user_agent() -> String {
    concat!("newswire/", env!("CARGO_PKG_VERSION")).to_string()
}

fn default_level() -> String {
    "info".to_string()
}

impl Settings {
    pub fn new() -> Result<Self, ConfigError> {
        let environment = env::var("NEWS_ENV").unwrap_or_else(|_| "development".into());

        let config_file = match environment.as_str() {
            "production" => "prod",
            "development" | _ => "dev",
        };

        let s = Config::builder()
            .add_source(File::with_name("config/default.yaml").required(false))
            .add_source(File::with_name(&format!("config/{}.yaml", config_file)).required(false))
            .add_source(File::with_name("config/local.yaml").required(false))
            .add_source(Environment::with_prefix("NEWS").separator("__"))
            .build()?;

        s.try_deserialize()
    }
}
