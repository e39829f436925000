//! Configuration management module.
//!
//! Supports loading configuration from:
//! - TOML files (config/default.toml, config/{profile}.toml)
//! - Environment variables with `BIZID_WORKER__<SECTION>__<KEY>` pattern

mod generator;
mod server;

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

pub use generator::GeneratorConfig;
pub use server::ServerConfig;

/// Application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// HTTP server configuration.
    #[serde(default)]
    pub server: ServerConfig,

    /// Identifier generator configuration.
    #[serde(default)]
    pub generator: GeneratorConfig,

    /// Observability configuration.
    #[serde(default)]
    pub observability: ObservabilityConfig,
}

impl AppConfig {
    /// Load configuration from files and environment.
    ///
    /// Configuration is loaded in the following order (later sources override earlier):
    /// 1. `config/default.toml`
    /// 2. `config/{BIZID_PROFILE}.toml` (if `BIZID_PROFILE` is set)
    /// 3. Environment variables with `BIZID_WORKER__` prefix
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded or is invalid.
    pub fn load() -> Result<Self, ConfigError> {
        let profile = std::env::var("BIZID_PROFILE").unwrap_or_else(|_| "development".to_string());

        let config = Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{profile}")).required(false))
            // BIZID_WORKER__GENERATOR__SEED=42 -> generator.seed = 42
            .add_source(
                Environment::with_prefix("BIZID_WORKER")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        let app_config: Self = config.try_deserialize()?;
        app_config.validate()?;

        Ok(app_config)
    }

    /// Validate the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error naming the first invalid setting.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.server.port == 0 {
            return Err(ConfigError::Message("server.port cannot be 0".to_string()));
        }

        if self.generator.max_count == 0 {
            return Err(ConfigError::Message(
                "generator.max_count cannot be 0".to_string(),
            ));
        }

        if !self.observability.metrics_path.starts_with('/') {
            return Err(ConfigError::Message(
                "observability.metrics_path must start with '/'".to_string(),
            ));
        }

        Ok(())
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ObservabilityConfig {
    /// Log level.
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Log format: "text" or "json".
    #[serde(default = "default_log_format")]
    pub log_format: String,

    /// Enable Prometheus metrics endpoint.
    #[serde(default = "default_metrics_enabled")]
    pub metrics_enabled: bool,

    /// Metrics endpoint path.
    #[serde(default = "default_metrics_path")]
    pub metrics_path: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "text".to_string()
}

const fn default_metrics_enabled() -> bool {
    true
}

fn default_metrics_path() -> String {
    "/metrics".to_string()
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            log_format: default_log_format(),
            metrics_enabled: default_metrics_enabled(),
            metrics_path: default_metrics_path(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.generator.max_count, 1000);
        assert!(config.generator.seed.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_zero_max_count() {
        let mut config = AppConfig::default();
        config.generator.max_count = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_relative_metrics_path() {
        let mut config = AppConfig::default();
        config.observability.metrics_path = "metrics".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_deserialize_from_toml() {
        let config: AppConfig = Config::builder()
            .add_source(config::File::from_str(
                "[generator]\nseed = 7\nmax_count = 10\n\n[server]\nport = 9000\n",
                config::FileFormat::Toml,
            ))
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();

        assert_eq!(config.generator.seed, Some(7));
        assert_eq!(config.generator.max_count, 10);
        assert_eq!(config.server.port, 9000);
        assert_eq!(config.observability.log_level, "info");
    }

    #[test]
    fn test_shipped_default_file() {
        let config: AppConfig = Config::builder()
            .add_source(config::File::from_str(
                include_str!("../../config/default.toml"),
                config::FileFormat::Toml,
            ))
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();

        assert_eq!(config.server.host, ServerConfig::default().host);
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.generator.max_count, 1000);
        assert!(config.observability.metrics_enabled);
        assert!(config.validate().is_ok());
    }
}
