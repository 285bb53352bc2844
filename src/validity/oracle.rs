//! External word-existence lookups
//!
//! The oracle is the only network dependency of the game. It sits behind the
//! `WordOracle` trait so tests and offline runs can substitute their own.

use crate::config::OracleConfig;
use log::{debug, info, warn};
use std::thread;
use std::time::Duration;

/// Result of asking an oracle about a word
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookupOutcome {
    /// The service knows the word
    Found,
    /// The service answered, and does not know the word
    NotFound,
    /// No answer (timeout, network error); the word's status is unknown
    Unavailable(String),
}

/// A source of truth about whether a word exists
pub trait WordOracle: Send + Sync {
    /// Look up a single lowercase word
    fn lookup(&self, word: &str) -> LookupOutcome;
}

impl<O: WordOracle + ?Sized> WordOracle for &O {
    fn lookup(&self, word: &str) -> LookupOutcome {
        (**self).lookup(word)
    }
}

impl<O: WordOracle + ?Sized> WordOracle for Box<O> {
    fn lookup(&self, word: &str) -> LookupOutcome {
        (**self).lookup(word)
    }
}

/// Oracle that never answers
///
/// Used when external lookups are disabled: validity then rests on the dictionary alone.
#[derive(Debug, Clone, Copy, Default)]
pub struct OfflineOracle;

impl WordOracle for OfflineOracle {
    fn lookup(&self, _word: &str) -> LookupOutcome {
        LookupOutcome::Unavailable("external lookups disabled".to_string())
    }
}

/// Oracle backed by a dictionary HTTP API
///
/// Issues `GET {base_url}/{word}`. A success status means the word exists, any other
/// status means it does not, and transport failures leave it unknown.
pub struct DictionaryApiOracle {
    client: reqwest::blocking::Client,
    base_url: String,
    min_delay: Duration,
}

impl DictionaryApiOracle {
    /// Build an oracle from configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be constructed (e.g. TLS backend
    /// initialisation fails).
    pub fn new(config: &OracleConfig) -> reqwest::Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .timeout(config.timeout)
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            min_delay: config.min_delay,
        })
    }

    fn url_for(&self, word: &str) -> String {
        format!("{}/{word}", self.base_url)
    }
}

impl WordOracle for DictionaryApiOracle {
    fn lookup(&self, word: &str) -> LookupOutcome {
        // Rate limiting: never hit the service back to back
        thread::sleep(self.min_delay);

        let url = self.url_for(word);
        debug!("Dictionary lookup: {url}");

        match self.client.get(&url).send() {
            Ok(response) if response.status().is_success() => {
                info!("API verified word: {word}");
                LookupOutcome::Found
            }
            Ok(response) => {
                info!("API rejected word: {word} ({})", response.status());
                LookupOutcome::NotFound
            }
            Err(e) => {
                warn!("API error for word '{word}': {e}");
                LookupOutcome::Unavailable(e.to_string())
            }
        }
    }
}

/// Build the oracle described by `config`
///
/// Disabled lookups, or an HTTP client that fails to build, yield an `OfflineOracle`.
#[must_use]
pub fn oracle_from_config(config: &OracleConfig) -> Box<dyn WordOracle> {
    if !config.enabled {
        info!("External dictionary lookups disabled");
        return Box::new(OfflineOracle);
    }

    match DictionaryApiOracle::new(config) {
        Ok(oracle) => {
            info!("Using dictionary API at {}", oracle.base_url);
            Box::new(oracle)
        }
        Err(e) => {
            warn!("Could not build HTTP client ({e}); external lookups disabled");
            Box::new(OfflineOracle)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{BufRead, BufReader, Write};
    use std::net::TcpListener;
    use std::time::Instant;

    /// Serve one canned HTTP response per connection, in order; returns the base URL
    fn canned_http(responses: &'static [&'static str]) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();

        thread::spawn(move || {
            for response in responses {
                let (mut stream, _) = listener.accept().unwrap();
                let mut reader = BufReader::new(stream.try_clone().unwrap());
                let mut line = String::new();
                while reader.read_line(&mut line).unwrap() > 0 && line != "\r\n" {
                    line.clear();
                }
                stream.write_all(response.as_bytes()).unwrap();
                stream.flush().unwrap();
            }
        });

        format!("http://{addr}/entries/en")
    }

    const OK: &str = "HTTP/1.1 200 OK\r\nContent-Length: 2\r\nConnection: close\r\n\r\n[]";
    const MISSING: &str =
        "HTTP/1.1 404 Not Found\r\nContent-Length: 2\r\nConnection: close\r\n\r\n{}";

    #[test]
    fn disabled_config_gives_offline_oracle() {
        let config = OracleConfig {
            enabled: false,
            ..OracleConfig::default()
        };
        let oracle = oracle_from_config(&config);
        assert!(matches!(oracle.lookup("tar"), LookupOutcome::Unavailable(_)));
    }

    #[test]
    fn offline_oracle_is_always_unavailable() {
        assert!(matches!(
            OfflineOracle.lookup("word"),
            LookupOutcome::Unavailable(_)
        ));
    }

    #[test]
    fn api_oracle_builds_urls_without_double_slash() {
        let config = OracleConfig {
            base_url: "http://localhost:9/entries/en/".to_string(),
            ..OracleConfig::default()
        };
        let oracle = DictionaryApiOracle::new(&config).unwrap();
        assert_eq!(oracle.url_for("tar"), "http://localhost:9/entries/en/tar");
    }

    #[test]
    fn api_oracle_unreachable_host_is_unavailable() {
        // Port 9 (discard) on localhost is closed in test environments
        let config = OracleConfig {
            base_url: "http://127.0.0.1:9".to_string(),
            timeout: Duration::from_millis(500),
            min_delay: Duration::ZERO,
            ..OracleConfig::default()
        };
        let oracle = DictionaryApiOracle::new(&config).unwrap();
        assert!(matches!(oracle.lookup("tar"), LookupOutcome::Unavailable(_)));
    }

    #[test]
    fn boxed_oracle_delegates() {
        let oracle: Box<dyn WordOracle> = Box::new(OfflineOracle);
        assert!(matches!(oracle.lookup("x"), LookupOutcome::Unavailable(_)));
    }

    #[test]
    fn api_oracle_maps_status_to_outcome() {
        let config = OracleConfig {
            base_url: canned_http(&[OK, MISSING]),
            timeout: Duration::from_secs(2),
            min_delay: Duration::from_millis(50),
            ..OracleConfig::default()
        };
        let oracle = DictionaryApiOracle::new(&config).unwrap();

        let started = Instant::now();
        assert_eq!(oracle.lookup("tar"), LookupOutcome::Found);
        assert!(started.elapsed() >= config.min_delay);

        let started = Instant::now();
        assert_eq!(oracle.lookup("xyzzy"), LookupOutcome::NotFound);
        assert!(started.elapsed() >= config.min_delay);
    }
}
