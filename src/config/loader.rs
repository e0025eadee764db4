//! Configuration Loader
//!
//! Loads and validates configuration from TOML files matching config/default.toml
//! structure. Every pipeline tunable lives here so the extraction and
//! enrichment entry points stay pure with respect to the environment.

use serde::Deserialize;
use std::path::Path;
use thiserror::Error;

/// Main configuration structure matching config/default.toml
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    pub feed: FeedSection,
    pub api: ApiSection,
    pub extraction: ExtractionSection,
    pub enrichment: EnrichmentSection,
    pub logging: LoggingSection,
}

/// Pairs feed configuration section
#[derive(Debug, Clone, Deserialize)]
pub struct FeedSection {
    /// Screener WebSocket endpoint, including rank/filter query parameters
    pub ws_url: String,
    /// Origin header presented during the handshake
    pub origin: String,
    /// Browser user agent presented during the handshake
    pub user_agent: String,
    /// How many frames to inspect before giving up on a pairs payload
    pub max_frames: usize,
    /// Overall read deadline for one payload fetch, in seconds
    pub read_timeout_secs: u64,
}

impl FeedSection {
    /// Get WebSocket URL with environment variable override
    /// Checks TRENDSCOUT_FEED_URL env var first, falls back to config value
    pub fn get_ws_url(&self) -> String {
        std::env::var("TRENDSCOUT_FEED_URL").unwrap_or_else(|_| self.ws_url.clone())
    }
}

impl Default for FeedSection {
    fn default() -> Self {
        Self {
            ws_url: "wss://io.dexscreener.com/dex/screener/v6/pairs/h24/1?rankBy[key]=trendingScoreH6&rankBy[order]=desc&filters[chainIds][0]=solana"
                .to_string(),
            origin: "https://dexscreener.com".to_string(),
            user_agent: "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/130.0.0.0 Safari/537.36"
                .to_string(),
            max_frames: 5,
            read_timeout_secs: 30,
        }
    }
}

/// Token info API configuration section
#[derive(Debug, Clone, Deserialize)]
pub struct ApiSection {
    /// Token lookup endpoint; the address is appended as a path segment
    pub base_url: String,
    /// Per-request timeout in seconds
    pub timeout_secs: u64,
}

impl ApiSection {
    /// Get API base URL with environment variable override
    /// Checks TRENDSCOUT_API_URL env var first, falls back to config value
    pub fn get_base_url(&self) -> String {
        std::env::var("TRENDSCOUT_API_URL").unwrap_or_else(|_| self.base_url.clone())
    }
}

impl Default for ApiSection {
    fn default() -> Self {
        Self {
            base_url: "https://api.dexscreener.com/latest/dex/tokens".to_string(),
            timeout_secs: 10,
        }
    }
}

/// Address extraction configuration section
#[derive(Debug, Clone, Deserialize)]
pub struct ExtractionSection {
    /// Minimum candidate word length; shorter words are frame noise
    pub min_candidate_len: usize,
    /// Hard cap on unique addresses kept per scan
    pub max_addresses: usize,
}

impl Default for ExtractionSection {
    fn default() -> Self {
        Self {
            min_candidate_len: 40,
            max_addresses: 50,
        }
    }
}

/// Enrichment fetcher configuration section
#[derive(Debug, Clone, Deserialize)]
pub struct EnrichmentSection {
    /// Lookups issued concurrently per batch
    pub batch_size: usize,
    /// Only the first N addresses are enriched, bounding one scan's API load
    pub max_enriched: usize,
}

impl Default for EnrichmentSection {
    fn default() -> Self {
        Self {
            batch_size: 5,
            max_enriched: 20,
        }
    }
}

/// Logging configuration section
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSection {
    /// Log level: "trace", "debug", "info", "warn", "error"
    pub level: String,
}

impl Default for LoggingSection {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Failed to parse TOML: {0}")]
    ParseError(#[from] toml::de::Error),
    #[error("Validation failed: {0}")]
    ValidationError(String),
}

/// Load configuration from a TOML file
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<Config, ConfigError> {
    let content = std::fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    config.validate()?;
    Ok(config)
}

impl Config {
    /// Validate all configuration parameters
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.feed.ws_url.is_empty() {
            return Err(ConfigError::ValidationError(
                "feed.ws_url cannot be empty".to_string(),
            ));
        }

        if self.feed.max_frames == 0 {
            return Err(ConfigError::ValidationError(
                "feed.max_frames must be > 0".to_string(),
            ));
        }

        if self.feed.read_timeout_secs == 0 {
            return Err(ConfigError::ValidationError(
                "feed.read_timeout_secs must be > 0".to_string(),
            ));
        }

        if self.api.base_url.is_empty() {
            return Err(ConfigError::ValidationError(
                "api.base_url cannot be empty".to_string(),
            ));
        }

        if self.api.timeout_secs == 0 {
            return Err(ConfigError::ValidationError(
                "api.timeout_secs must be > 0".to_string(),
            ));
        }

        if self.extraction.min_candidate_len == 0 {
            return Err(ConfigError::ValidationError(
                "extraction.min_candidate_len must be > 0".to_string(),
            ));
        }

        if self.extraction.max_addresses == 0 {
            return Err(ConfigError::ValidationError(
                "extraction.max_addresses must be > 0".to_string(),
            ));
        }

        if self.enrichment.batch_size == 0 {
            return Err(ConfigError::ValidationError(
                "enrichment.batch_size must be > 0".to_string(),
            ));
        }

        if self.enrichment.max_enriched == 0 {
            return Err(ConfigError::ValidationError(
                "enrichment.max_enriched must be > 0".to_string(),
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn create_valid_config() -> String {
        r#"
[feed]
ws_url = "wss://io.dexscreener.com/dex/screener/v6/pairs/h24/1?rankBy[key]=trendingScoreH6&rankBy[order]=desc&filters[chainIds][0]=solana"
origin = "https://dexscreener.com"
user_agent = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/130.0.0.0 Safari/537.36"
max_frames = 5
read_timeout_secs = 30

[api]
base_url = "https://api.dexscreener.com/latest/dex/tokens"
timeout_secs = 10

[extraction]
min_candidate_len = 40
max_addresses = 50

[enrichment]
batch_size = 5
max_enriched = 20

[logging]
level = "info"
"#
        .to_string()
    }

    #[test]
    fn test_load_valid_config() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(create_valid_config().as_bytes()).unwrap();

        let config = load_config(file.path()).unwrap();

        assert_eq!(config.extraction.min_candidate_len, 40);
        assert_eq!(config.extraction.max_addresses, 50);
        assert_eq!(config.enrichment.batch_size, 5);
        assert_eq!(config.enrichment.max_enriched, 20);
        assert_eq!(config.feed.max_frames, 5);
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_load_missing_file() {
        let result = load_config("/nonexistent/path/config.toml");
        assert!(result.is_err());
        assert!(matches!(result.unwrap_err(), ConfigError::IoError(_)));
    }

    #[test]
    fn test_invalid_batch_size() {
        let invalid = create_valid_config().replace("batch_size = 5", "batch_size = 0");

        let mut file = NamedTempFile::new().unwrap();
        file.write_all(invalid.as_bytes()).unwrap();

        let result = load_config(file.path());
        assert!(matches!(
            result.unwrap_err(),
            ConfigError::ValidationError(_)
        ));
    }

    #[test]
    fn test_invalid_min_candidate_len() {
        let invalid =
            create_valid_config().replace("min_candidate_len = 40", "min_candidate_len = 0");

        let mut file = NamedTempFile::new().unwrap();
        file.write_all(invalid.as_bytes()).unwrap();

        let result = load_config(file.path());
        assert!(matches!(
            result.unwrap_err(),
            ConfigError::ValidationError(_)
        ));
    }

    #[test]
    fn test_empty_api_base_url() {
        let invalid = create_valid_config().replace(
            r#"base_url = "https://api.dexscreener.com/latest/dex/tokens""#,
            r#"base_url = """#,
        );

        let mut file = NamedTempFile::new().unwrap();
        file.write_all(invalid.as_bytes()).unwrap();

        let result = load_config(file.path());
        assert!(matches!(
            result.unwrap_err(),
            ConfigError::ValidationError(_)
        ));
    }

    #[test]
    fn test_default_config_is_valid() {
        assert!(Config::default().validate().is_ok());
    }
}
