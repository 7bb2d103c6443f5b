use serde::Deserialize;

/// Prefix for every environment variable read by [`AppConfig::load`],
/// e.g. `REGION_METRICS_PORT=9000`.
pub const ENV_PREFIX: &str = "REGION_METRICS";

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    /// Record file read on every metrics request
    pub data_path: String,
    pub environment: String,
    pub prometheus_enabled: bool,
}

impl AppConfig {
    /// Load configuration from `REGION_METRICS_*` environment variables,
    /// falling back to defaults for anything unset.
    pub fn load() -> Result<Self, config::ConfigError> {
        Self::builder()?
            .add_source(config::Environment::with_prefix(ENV_PREFIX).try_parsing(true))
            .build()?
            .try_deserialize()
    }

    fn builder() -> Result<config::ConfigBuilder<config::builder::DefaultState>, config::ConfigError> {
        let defaults = Self::default();
        config::Config::builder()
            .set_default("host", defaults.host)?
            .set_default("port", i64::from(defaults.port))?
            .set_default("data_path", defaults.data_path)?
            .set_default("environment", defaults.environment)?
            .set_default("prometheus_enabled", defaults.prometheus_enabled)
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8000,
            data_path: "data.json".to_string(),
            environment: "development".to_string(),
            prometheus_enabled: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_deserialize() {
        let config: AppConfig = AppConfig::builder()
            .unwrap()
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();

        assert_eq!(config.port, 8000);
        assert_eq!(config.data_path, "data.json");
        assert!(config.prometheus_enabled);
        assert_eq!(config.bind_addr(), "0.0.0.0:8000");
    }

    #[test]
    fn test_override_wins_over_default() {
        let config: AppConfig = AppConfig::builder()
            .unwrap()
            .set_override("port", 9100_i64)
            .unwrap()
            .set_override("data_path", "/srv/records.json")
            .unwrap()
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();

        assert_eq!(config.port, 9100);
        assert_eq!(config.data_path, "/srv/records.json");
        assert_eq!(config.environment, "development");
    }
}
