use config::{Config as ConfigBuilder, File};
use serde::{Deserialize, Serialize};
use std::num::NonZeroUsize;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::errors::{HashQueueError, HashQueueResult};

/// Default alphabet: ASCII lowercase letters
pub const DEFAULT_ALPHABET: &str = "abcdefghijklmnopqrstuvwxyz";

/// Longest plaintext a search accepts. Any alphabet of two or more
/// characters overflows a `u64` index well before this.
pub const MAX_LENGTH: u32 = 64;

/// Configuration for a reverse-MD5 search.
///
/// # Configuration Locations
///
/// The configuration can be loaded from multiple locations, later sources
/// overriding earlier ones:
/// 1. Global `$HOME/.config/hashqueue/config.yaml`
/// 2. Local `.hashqueue.yaml` in the current directory
/// 3. Custom config file specified via `--config`
///
/// Command-line values are applied last through [`CrackConfig::merge_with_cli`].
///
/// # Configuration Format
///
/// ```yaml
/// # Characters candidates are built from
/// alphabet: "abcdefghijklmnopqrstuvwxyz"
///
/// # Longest candidate string to try
/// max_length: 6
///
/// # Worker threads (default: CPU cores)
/// num_workers: 8
///
/// # How long the coordinator waits on the result channel per poll
/// poll_interval_ms: 100
///
/// # Log level (trace, debug, info, warn, error)
/// log_level: "warn"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CrackConfig {
    /// Characters candidate strings are drawn from, in digit order
    #[serde(default = "default_alphabet")]
    pub alphabet: String,

    /// Longest candidate length to search; lengths run from 1 up to this
    #[serde(default = "default_max_length")]
    pub max_length: u32,

    /// Number of worker threads
    #[serde(default = "default_num_workers")]
    pub num_workers: NonZeroUsize,

    /// Result channel poll timeout in milliseconds
    #[serde(default = "default_poll_interval_ms")]
    pub poll_interval_ms: u64,

    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

/// Values given on the command line. `None` leaves the file value alone.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub alphabet: Option<String>,
    pub max_length: Option<u32>,
    pub num_workers: Option<NonZeroUsize>,
    pub log_level: Option<String>,
}

fn default_alphabet() -> String {
    DEFAULT_ALPHABET.to_string()
}

fn default_max_length() -> u32 {
    6
}

fn default_num_workers() -> NonZeroUsize {
    NonZeroUsize::new(num_cpus::get()).unwrap_or(NonZeroUsize::MIN)
}

fn default_poll_interval_ms() -> u64 {
    100
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for CrackConfig {
    fn default() -> Self {
        Self {
            alphabet: default_alphabet(),
            max_length: default_max_length(),
            num_workers: default_num_workers(),
            poll_interval_ms: default_poll_interval_ms(),
            log_level: default_log_level(),
        }
    }
}

impl CrackConfig {
    /// Loads configuration from the default locations
    pub fn load() -> HashQueueResult<Self> {
        Self::load_from(None)
    }

    /// Loads configuration from the default locations plus a specific file.
    /// An explicitly named file must exist.
    pub fn load_from(config_path: Option<&Path>) -> HashQueueResult<Self> {
        let mut builder = ConfigBuilder::builder();

        let defaults = [
            dirs::config_dir().map(|p| p.join("hashqueue/config.yaml")),
            Some(PathBuf::from(".hashqueue.yaml")),
        ];

        for path in defaults.iter().flatten() {
            if path.exists() {
                builder = builder.add_source(File::from(path.as_path()));
            }
        }

        if let Some(path) = config_path {
            builder = builder.add_source(File::from(path).required(true));
        }

        let config: CrackConfig = builder.build()?.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Applies command-line values on top of the loaded configuration
    pub fn merge_with_cli(mut self, cli: CliOverrides) -> Self {
        if let Some(alphabet) = cli.alphabet {
            self.alphabet = alphabet;
        }
        if let Some(max_length) = cli.max_length {
            self.max_length = max_length;
        }
        if let Some(num_workers) = cli.num_workers {
            self.num_workers = num_workers;
        }
        if let Some(log_level) = cli.log_level {
            self.log_level = log_level;
        }
        self
    }

    /// Rejects values the search cannot run with
    pub fn validate(&self) -> HashQueueResult<()> {
        if self.alphabet.is_empty() {
            return Err(HashQueueError::EmptyAlphabet);
        }
        if self.max_length > MAX_LENGTH {
            return Err(HashQueueError::config_error(format!(
                "max_length must be at most {}, got {}",
                MAX_LENGTH, self.max_length
            )));
        }
        if self.poll_interval_ms == 0 {
            return Err(HashQueueError::config_error(
                "poll_interval_ms must be greater than zero",
            ));
        }
        Ok(())
    }

    pub fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.poll_interval_ms)
    }

    pub fn with_alphabet(mut self, alphabet: impl Into<String>) -> Self {
        self.alphabet = alphabet.into();
        self
    }

    pub fn with_max_length(mut self, max_length: u32) -> Self {
        self.max_length = max_length;
        self
    }

    /// Sets the worker count; zero is raised to one
    pub fn with_workers(mut self, num_workers: usize) -> Self {
        self.num_workers = NonZeroUsize::new(num_workers).unwrap_or(NonZeroUsize::MIN);
        self
    }

    pub fn with_poll_interval(mut self, interval: Duration) -> Self {
        self.poll_interval_ms = interval.as_millis().max(1) as u64;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;
    use std::io::Write;
    use tempfile::tempdir;

    #[test]
    fn test_load_config_file() {
        let dir = tempdir().unwrap();
        let config_path = dir.path().join("config.yaml");
        let config_content = r#"
            alphabet: "0123456789"
            max_length: 4
            num_workers: 3
            poll_interval_ms: 25
            log_level: "debug"
        "#;

        let mut file = File::create(&config_path).unwrap();
        file.write_all(config_content.as_bytes()).unwrap();

        let config = CrackConfig::load_from(Some(&config_path)).unwrap();
        assert_eq!(config.alphabet, "0123456789");
        assert_eq!(config.max_length, 4);
        assert_eq!(config.num_workers, NonZeroUsize::new(3).unwrap());
        assert_eq!(config.poll_interval(), Duration::from_millis(25));
        assert_eq!(config.log_level, "debug");
    }

    #[test]
    fn test_default_values() {
        let dir = tempdir().unwrap();
        let config_path = dir.path().join("config.yaml");
        let mut file = File::create(&config_path).unwrap();
        file.write_all(b"max_length: 2\n").unwrap();

        let config = CrackConfig::load_from(Some(&config_path)).unwrap();
        assert_eq!(config.alphabet, DEFAULT_ALPHABET);
        assert_eq!(config.max_length, 2);
        assert_eq!(
            config.num_workers,
            NonZeroUsize::new(num_cpus::get()).unwrap()
        );
        assert_eq!(config.poll_interval_ms, 100);
        assert_eq!(config.log_level, "warn");
    }

    #[test]
    fn test_merge_with_cli() {
        let file_config = CrackConfig::default()
            .with_alphabet("abc")
            .with_max_length(3)
            .with_workers(2);

        let merged = file_config.merge_with_cli(CliOverrides {
            alphabet: None,
            max_length: Some(5),
            num_workers: NonZeroUsize::new(8),
            log_level: Some("info".to_string()),
        });

        assert_eq!(merged.alphabet, "abc"); // file value, CLI None
        assert_eq!(merged.max_length, 5);
        assert_eq!(merged.num_workers.get(), 8);
        assert_eq!(merged.log_level, "info");
    }

    #[test]
    fn test_invalid_config() {
        let dir = tempdir().unwrap();
        let config_path = dir.path().join("config.yaml");
        let mut file = File::create(&config_path).unwrap();
        file.write_all(b"num_workers: \"many\"\nmax_length: []\n")
            .unwrap();

        let result = CrackConfig::load_from(Some(&config_path));
        assert!(matches!(result, Err(HashQueueError::ConfigError(_))));
    }

    #[test]
    fn test_empty_alphabet_rejected() {
        let dir = tempdir().unwrap();
        let config_path = dir.path().join("config.yaml");
        let mut file = File::create(&config_path).unwrap();
        file.write_all(b"alphabet: \"\"\n").unwrap();

        let result = CrackConfig::load_from(Some(&config_path));
        assert!(matches!(result, Err(HashQueueError::EmptyAlphabet)));
    }

    #[test]
    fn test_max_length_bounded() {
        let config = CrackConfig::default().with_alphabet("a");
        assert!(config.clone().with_max_length(MAX_LENGTH).validate().is_ok());

        let result = config.with_max_length(4_000_000_000).validate();
        assert!(matches!(result, Err(HashQueueError::ConfigError(_))));
    }

    #[test]
    fn test_load_nonexistent_file() {
        let result = CrackConfig::load_from(Some(Path::new("nonexistent.yaml")));
        assert!(result.is_err());
    }

    #[test]
    fn test_with_workers_minimum() {
        let config = CrackConfig::default().with_workers(0);
        assert_eq!(config.num_workers.get(), 1);
    }
}
