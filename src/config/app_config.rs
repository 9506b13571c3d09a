use serde::Deserialize;

use crate::domain::user::{
    SanitizeOptions, SANITIZE_AUTH_SERVICE, SANITIZE_EMAIL, SANITIZE_FULL_NAME,
};

/// Application configuration
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub logging: LoggingConfig,
    pub privacy: PrivacyConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub format: LogFormat,
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

/// Which user fields responses may reveal
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PrivacyConfig {
    pub show_email: bool,
    pub show_full_name: bool,
    pub show_auth_service: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::default(),
        }
    }
}

impl Default for PrivacyConfig {
    fn default() -> Self {
        Self {
            show_email: true,
            show_full_name: true,
            show_auth_service: true,
        }
    }
}

impl PrivacyConfig {
    /// Options for [`crate::domain::User::sanitize`]
    pub fn sanitize_options(&self) -> SanitizeOptions {
        SanitizeOptions::from([
            (SANITIZE_EMAIL.to_string(), self.show_email),
            (SANITIZE_FULL_NAME.to_string(), self.show_full_name),
            (SANITIZE_AUTH_SERVICE.to_string(), self.show_auth_service),
        ])
    }
}

impl AppConfig {
    /// Load from `config/default.*`, `config/local.*` and `APP_`-prefixed
    /// environment variables, later sources overriding earlier ones.
    pub fn load() -> Result<Self, config::ConfigError> {
        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name("config/local").required(false))
            .add_source(
                config::Environment::with_prefix("APP")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize()
    }
}
