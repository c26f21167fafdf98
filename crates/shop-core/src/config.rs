//! Storefront configuration.
//!
//! Values are layered: built-in defaults, then an optional TOML/JSON file,
//! then environment overrides.

use std::fmt;
use std::str::FromStr;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use shop_commerce::Currency;

/// Base URL used when nothing else is configured.
pub const DEFAULT_API_URL: &str = "http://localhost:3001";

/// Environment variable overriding the API base URL.
pub const ENV_API_URL: &str = "STOREFRONT_API_URL";
/// Environment variable overriding the display currency.
pub const ENV_CURRENCY: &str = "STOREFRONT_CURRENCY";
/// Environment variable overriding the minimum log level.
pub const ENV_LOG_LEVEL: &str = "STOREFRONT_LOG_LEVEL";
/// Environment variable overriding the log output format.
pub const ENV_LOG_FORMAT: &str = "STOREFRONT_LOG_FORMAT";

/// Error for configuration values that cannot be interpreted.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {key}: {value:?}")]
    InvalidValue { key: String, value: String },
}

impl ConfigError {
    fn invalid(key: &str, value: &str) -> Self {
        Self::InvalidValue {
            key: key.to_string(),
            value: value.to_string(),
        }
    }
}

/// Log level for structured logs.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Trace,
    Debug,
    #[default]
    Info,
    Warn,
    Error,
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Trace => write!(f, "TRACE"),
            Self::Debug => write!(f, "DEBUG"),
            Self::Info => write!(f, "INFO"),
            Self::Warn => write!(f, "WARN"),
            Self::Error => write!(f, "ERROR"),
        }
    }
}

impl FromStr for LogLevel {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "trace" => Ok(Self::Trace),
            "debug" => Ok(Self::Debug),
            "info" => Ok(Self::Info),
            "warn" | "warning" => Ok(Self::Warn),
            "error" => Ok(Self::Error),
            _ => Err(ConfigError::invalid(ENV_LOG_LEVEL, s)),
        }
    }
}

/// Output format for logs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// JSON format (for production/log aggregation).
    #[default]
    Json,
    /// Human-readable format (for development).
    Human,
}

impl FromStr for LogFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "human" | "text" => Ok(Self::Human),
            _ => Err(ConfigError::invalid(ENV_LOG_FORMAT, s)),
        }
    }
}

/// Remote API settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL of the store service, e.g. `http://localhost:3001`.
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

fn default_base_url() -> String {
    DEFAULT_API_URL.to_string()
}

impl ApiConfig {
    /// Create an API config for the given base URL.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    /// Join a path onto the base URL.
    ///
    /// ```
    /// use shop_core::ApiConfig;
    /// let api = ApiConfig::new("http://localhost:3001/");
    /// assert_eq!(api.endpoint("/api/products"), "http://localhost:3001/api/products");
    /// ```
    pub fn endpoint(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::new(DEFAULT_API_URL)
    }
}

/// Presentation settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// Currency used when formatting product prices.
    #[serde(default)]
    pub currency: Currency,
}

/// Logging settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Minimum level that is emitted.
    #[serde(default)]
    pub level: LogLevel,
    /// Output format.
    #[serde(default)]
    pub format: LogFormat,
}

/// Top-level storefront configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreConfig {
    #[serde(default)]
    pub api: ApiConfig,

    #[serde(default)]
    pub display: DisplayConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

impl StoreConfig {
    /// Load config from a file. `.json` files are parsed as JSON, anything
    /// else as TOML.
    pub fn load(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path))?;

        Self::parse(path, &content)
    }

    fn parse(path: &str, content: &str) -> Result<Self> {
        if path.ends_with(".json") {
            serde_json::from_str(content)
                .with_context(|| format!("Failed to parse JSON config: {}", path))
        } else {
            toml::from_str(content)
                .with_context(|| format!("Failed to parse TOML config: {}", path))
        }
    }

    /// Apply environment-style overrides from `lookup`.
    ///
    /// Empty values are treated as unset.
    pub fn with_overrides<F>(mut self, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        if let Some(url) = get(ENV_API_URL) {
            self.api.base_url = url.trim().to_string();
        }

        if let Some(code) = get(ENV_CURRENCY) {
            self.display.currency = Currency::from_code(code.trim())
                .ok_or_else(|| ConfigError::invalid(ENV_CURRENCY, &code))?;
        }

        if let Some(level) = get(ENV_LOG_LEVEL) {
            self.logging.level = level.parse()?;
        }

        if let Some(format) = get(ENV_LOG_FORMAT) {
            self.logging.format = format.parse()?;
        }

        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = StoreConfig::default();
        assert_eq!(config.api.base_url, "http://localhost:3001");
        assert_eq!(config.display.currency, Currency::USD);
        assert_eq!(config.logging.level, LogLevel::Info);
        assert_eq!(config.logging.format, LogFormat::Json);
    }

    #[test]
    fn test_endpoint_joins_slashes() {
        let api = ApiConfig::new("https://shop.example.com/");
        assert_eq!(api.endpoint("/api/orders"), "https://shop.example.com/api/orders");
        assert_eq!(api.endpoint("api/orders"), "https://shop.example.com/api/orders");

        let api = ApiConfig::default();
        assert_eq!(api.endpoint("/api/products"), "http://localhost:3001/api/products");
    }

    #[test]
    fn test_unset_env_keeps_default_url() {
        let config = StoreConfig::default().with_overrides(|_| None).unwrap();
        assert_eq!(config.api.base_url, DEFAULT_API_URL);
    }

    #[test]
    fn test_empty_env_value_is_unset() {
        let config = StoreConfig::default()
            .with_overrides(lookup(&[(ENV_API_URL, "  ")]))
            .unwrap();
        assert_eq!(config.api.base_url, DEFAULT_API_URL);
    }

    #[test]
    fn test_env_overrides() {
        let config = StoreConfig::default()
            .with_overrides(lookup(&[
                (ENV_API_URL, "http://api.internal:8080"),
                (ENV_CURRENCY, "eur"),
                (ENV_LOG_LEVEL, "debug"),
                (ENV_LOG_FORMAT, "human"),
            ]))
            .unwrap();

        assert_eq!(config.api.base_url, "http://api.internal:8080");
        assert_eq!(config.display.currency, Currency::EUR);
        assert_eq!(config.logging.level, LogLevel::Debug);
        assert_eq!(config.logging.format, LogFormat::Human);
    }

    #[test]
    fn test_invalid_env_values() {
        let err = StoreConfig::default()
            .with_overrides(lookup(&[(ENV_CURRENCY, "DOGE")]))
            .unwrap_err();
        assert_eq!(
            err,
            ConfigError::InvalidValue {
                key: ENV_CURRENCY.to_string(),
                value: "DOGE".to_string()
            }
        );

        // Zero-decimal currencies would round service prices.
        assert!(StoreConfig::default()
            .with_overrides(lookup(&[(ENV_CURRENCY, "JPY")]))
            .is_err());
        assert!(StoreConfig::default()
            .with_overrides(lookup(&[(ENV_LOG_LEVEL, "loud")]))
            .is_err());
        assert!(StoreConfig::default()
            .with_overrides(lookup(&[(ENV_LOG_FORMAT, "xml")]))
            .is_err());
    }

    #[test]
    fn test_parse_toml_file_then_env_wins() {
        let toml = r#"
            [api]
            base_url = "http://from-file:4000"

            [logging]
            level = "warn"
        "#;
        let config = StoreConfig::parse("store.toml", toml).unwrap();
        assert_eq!(config.api.base_url, "http://from-file:4000");
        assert_eq!(config.logging.level, LogLevel::Warn);
        assert_eq!(config.display.currency, Currency::USD);

        let config = config
            .with_overrides(lookup(&[(ENV_API_URL, "http://from-env:5000")]))
            .unwrap();
        assert_eq!(config.api.base_url, "http://from-env:5000");
        assert_eq!(config.logging.level, LogLevel::Warn);
    }

    #[test]
    fn test_parse_json_file() {
        let json = r#"{"api": {"base_url": "http://json:1"}, "display": {"currency": "GBP"}}"#;
        let config = StoreConfig::parse("store.json", json).unwrap();
        assert_eq!(config.api.base_url, "http://json:1");
        assert_eq!(config.display.currency, Currency::GBP);
    }

    #[test]
    fn test_load_missing_file() {
        let err = StoreConfig::load("/definitely/not/here.toml").unwrap_err();
        assert!(err.to_string().contains("Failed to read config file"));
    }

    #[test]
    fn test_log_level_ordering() {
        assert!(LogLevel::Debug < LogLevel::Info);
        assert!(LogLevel::Warn < LogLevel::Error);
        assert_eq!("WARNING".parse::<LogLevel>().unwrap(), LogLevel::Warn);
    }
}
