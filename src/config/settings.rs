use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub application: ApplicationSettings,
    pub backend: BackendSettings,
    pub dashboard: DashboardSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApplicationSettings {
    pub port: u16,
    pub host: String,
    #[serde(default = "default_cors_origin")]
    pub cors_allow_origin: String,
    #[serde(default = "default_cors_methods")]
    pub cors_allow_methods: String,
    #[serde(default = "default_cors_headers")]
    pub cors_allow_headers: String,
}

fn default_cors_origin() -> String {
    "*".to_string()
}

fn default_cors_methods() -> String {
    "GET, OPTIONS".to_string()
}

fn default_cors_headers() -> String {
    "Content-Type".to_string()
}

#[derive(Debug, Clone, Deserialize)]
pub struct BackendSettings {
    pub url: String,
    #[serde(default = "default_request_timeout")]
    pub request_timeout_secs: u64,
}

fn default_request_timeout() -> u64 {
    10
}

#[derive(Debug, Clone, Deserialize)]
pub struct DashboardSettings {
    pub blocks_refresh_secs: u64,
    pub transactions_refresh_secs: u64,
    pub blocks_per_page: i64,
    #[serde(default = "default_halving_timestamp_ms")]
    pub halving_timestamp_ms: i64,
}

fn default_halving_timestamp_ms() -> i64 {
    // Estimated halving date, unix milliseconds.
    1_495_545_484_051
}

impl Settings {
    pub fn new(config_file: Option<&str>) -> Result<Self, ConfigError> {
        let config = Config::builder()
            .add_source(File::with_name(config_file.unwrap_or("config")).required(false))
            .add_source(Environment::default().separator("__"))
            .set_default("application.host", "0.0.0.0")?
            .set_default("application.port", 8080)?
            .set_default("backend.url", "http://127.0.0.1:5000")?
            .set_default("dashboard.blocks_refresh_secs", 60)?
            .set_default("dashboard.transactions_refresh_secs", 1)?
            .set_default("dashboard.blocks_per_page", 20)?
            .build()?;

        config.try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_apply_without_a_config_file() {
        let settings = Settings::new(Some("does-not-exist")).unwrap();
        assert_eq!(settings.application.port, 8080);
        assert_eq!(settings.backend.url, "http://127.0.0.1:5000");
        assert_eq!(settings.dashboard.blocks_refresh_secs, 60);
        assert_eq!(settings.dashboard.transactions_refresh_secs, 1);
        assert_eq!(settings.dashboard.blocks_per_page, 20);
        assert_eq!(settings.dashboard.halving_timestamp_ms, 1_495_545_484_051);
    }
}
