//! Runtime configuration
//!
//! Plain structs with sensible defaults; the binary fills them from command-line
//! flags and environment variables.

use std::path::PathBuf;
use std::time::Duration;

/// Default dictionary lookup endpoint, queried as `{base_url}/{word}`
pub const DEFAULT_ORACLE_URL: &str = "https://api.dictionaryapi.dev/api/v2/entries/en";

/// Settings for the external dictionary lookup
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OracleConfig {
    /// Query the external service at all
    pub enabled: bool,
    pub base_url: String,
    /// Per-request timeout
    pub timeout: Duration,
    /// Pause before every request to stay polite to the service
    pub min_delay: Duration,
}

impl Default for OracleConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            base_url: DEFAULT_ORACLE_URL.to_string(),
            timeout: Duration::from_secs(2),
            min_delay: Duration::from_millis(100),
        }
    }
}

/// Settings for a game server instance
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    /// Newline-delimited dictionary; the built-in list is used when absent
    pub dictionary: Option<PathBuf>,
    /// Maximum number of words remembered by the validity cache
    pub cache_capacity: usize,
    pub oracle: OracleConfig,
}

impl GameConfig {
    pub const DEFAULT_CACHE_CAPACITY: usize = 10_000;
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            dictionary: None,
            cache_capacity: Self::DEFAULT_CACHE_CAPACITY,
            oracle: OracleConfig::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn oracle_defaults() {
        let config = OracleConfig::default();
        assert!(config.enabled);
        assert_eq!(config.timeout, Duration::from_secs(2));
        assert_eq!(config.min_delay, Duration::from_millis(100));
        assert_eq!(config.base_url, DEFAULT_ORACLE_URL);
    }

    #[test]
    fn game_defaults() {
        let config = GameConfig::default();
        assert!(config.dictionary.is_none());
        assert_eq!(config.cache_capacity, 10_000);
    }
}
