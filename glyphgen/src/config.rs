use config::{Config as ConfigBuilder, ConfigError, File};
use serde::{Deserialize, Serialize};
use std::num::NonZeroUsize;
use std::path::{Path, PathBuf};

use crate::alphabet::Alphabet;

/// Requests below this size get a capped worker count; thread start-up and
/// lock contention don't amortize on small runs.
pub const LARGE_COUNT_THRESHOLD: u64 = 100_000;

/// Worker cap applied to small requests
const SMALL_COUNT_WORKER_CAP: usize = 4;

/// Fallback when the platform cannot report its parallelism
const FALLBACK_PARALLELISM: usize = 8;

/// Configuration for a generation run.
///
/// # Configuration Locations
///
/// The configuration can be loaded from multiple locations in order of precedence:
/// 1. Custom config file specified via `--config` flag
/// 2. Local `.glyphgen.yaml` in the current directory
/// 3. Global `$HOME/.config/glyphgen/config.yaml`
///
/// # Configuration Format
///
/// The configuration uses YAML format. Example:
/// ```yaml
/// # Number of unique strings to generate
/// count: 50000
///
/// # Symbols strings are built from (two or more, no repeats)
/// alphabet: ["I", "l"]
///
/// # Worker thread count (default: derived from count and CPU cores)
/// thread_count: 4
///
/// # Log level (trace, debug, info, warn, error)
/// log_level: "info"
///
/// # Emit a progress event every N accepted strings (0 disables)
/// progress_interval: 10000
/// ```
///
/// # CLI Integration
///
/// When using the CLI, command-line arguments take precedence over config
/// file values. The merging behavior is defined in the `merge_with_cli`
/// method.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratorConfig {
    /// Number of unique strings to generate. Zero is invalid and rejected
    /// before generation starts.
    #[serde(default)]
    pub count: u64,

    /// Symbols generated strings are drawn from
    #[serde(default)]
    pub alphabet: Alphabet,

    /// Explicit worker thread count. When unset, the worker policy derives
    /// one from the request size and available parallelism.
    #[serde(default)]
    pub thread_count: Option<NonZeroUsize>,

    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Progress event cadence in accepted strings; 0 disables progress events
    #[serde(default = "default_progress_interval")]
    pub progress_interval: u64,
}

fn default_log_level() -> String {
    "warn".to_string()
}

fn default_progress_interval() -> u64 {
    10_000
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            count: 0,
            alphabet: Alphabet::default(),
            thread_count: None,
            log_level: default_log_level(),
            progress_interval: default_progress_interval(),
        }
    }
}

impl GeneratorConfig {
    /// Loads configuration from the default locations
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(None)
    }

    /// Loads configuration from a specific file
    pub fn load_from(config_path: Option<&Path>) -> Result<Self, ConfigError> {
        let mut builder = ConfigBuilder::builder();

        // Default config locations
        let config_files = [
            // Global config
            dirs::config_dir().map(|p| p.join("glyphgen/config.yaml")),
            // Local config
            Some(PathBuf::from(".glyphgen.yaml")),
            // Custom config
            config_path.map(PathBuf::from),
        ];

        // Add existing config files
        for path in config_files.iter().flatten() {
            if path.exists() {
                builder = builder.add_source(File::from(path.as_path()));
            }
        }

        // Build and deserialize
        builder.build()?.try_deserialize()
    }

    /// Merges CLI arguments with configuration file values
    pub fn merge_with_cli(mut self, cli_config: GeneratorConfig) -> Self {
        // CLI values take precedence over config file values
        if cli_config.count > 0 {
            self.count = cli_config.count;
        }
        if cli_config.alphabet != Alphabet::default() {
            self.alphabet = cli_config.alphabet;
        }
        if cli_config.thread_count.is_some() {
            self.thread_count = cli_config.thread_count;
        }
        if cli_config.log_level != default_log_level() {
            self.log_level = cli_config.log_level;
        }
        if cli_config.progress_interval != default_progress_interval() {
            self.progress_interval = cli_config.progress_interval;
        }
        self
    }

    /// Number of walker workers a run with this configuration uses.
    ///
    /// An explicit `thread_count` is honored as-is. Otherwise: small requests
    /// cap at `min(4, available parallelism)`, large requests use all
    /// available parallelism, and a platform that cannot report parallelism
    /// gets 8. Always at least 1.
    pub fn worker_count(&self) -> usize {
        if let Some(explicit) = self.thread_count {
            return explicit.get();
        }
        let parallelism = match num_cpus::get() {
            0 => FALLBACK_PARALLELISM,
            n => n,
        };
        if self.count < LARGE_COUNT_THRESHOLD {
            parallelism.min(SMALL_COUNT_WORKER_CAP)
        } else {
            parallelism
        }
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
            count: 50000
            alphabet: ["0", "O"]
            thread_count: 4
            log_level: "debug"
            progress_interval: 5000
        "#;

        let mut file = File::create(&config_path).unwrap();
        file.write_all(config_content.as_bytes()).unwrap();

        let config = GeneratorConfig::load_from(Some(&config_path)).unwrap();
        assert_eq!(config.count, 50_000);
        assert_eq!(config.alphabet, Alphabet::new(vec!['0', 'O']).unwrap());
        assert_eq!(config.thread_count, NonZeroUsize::new(4));
        assert_eq!(config.log_level, "debug");
        assert_eq!(config.progress_interval, 5_000);
    }

    #[test]
    fn test_default_values() {
        let config = GeneratorConfig::default();
        assert_eq!(config.count, 0);
        assert_eq!(config.alphabet, Alphabet::confusable());
        assert_eq!(config.thread_count, None);
        assert_eq!(config.log_level, "warn");
        assert_eq!(config.progress_interval, 10_000);
    }

    #[test]
    fn test_merge_with_cli() {
        let file_config = GeneratorConfig {
            count: 1_000,
            alphabet: Alphabet::confusable(),
            thread_count: NonZeroUsize::new(2),
            log_level: "info".to_string(),
            progress_interval: 5_000,
        };

        let cli_config = GeneratorConfig {
            count: 2_000,
            alphabet: Alphabet::confusable(),
            thread_count: None,
            log_level: "warn".to_string(),
            progress_interval: 10_000,
        };

        let merged = file_config.merge_with_cli(cli_config);
        assert_eq!(merged.count, 2_000); // CLI value
        assert_eq!(merged.thread_count, NonZeroUsize::new(2)); // File value (CLI None)
        assert_eq!(merged.log_level, "info"); // File value (CLI default)
        assert_eq!(merged.progress_interval, 5_000); // File value (CLI default)
    }

    #[test]
    fn test_worker_count_policy() {
        let small = GeneratorConfig {
            count: 10_000,
            ..GeneratorConfig::default()
        };
        assert!(small.worker_count() >= 1);
        assert!(small.worker_count() <= 4);

        let large = GeneratorConfig {
            count: LARGE_COUNT_THRESHOLD,
            ..GeneratorConfig::default()
        };
        assert!(large.worker_count() >= small.worker_count());

        let explicit = GeneratorConfig {
            count: 10,
            thread_count: NonZeroUsize::new(64),
            ..GeneratorConfig::default()
        };
        assert_eq!(explicit.worker_count(), 64);
    }

    #[test]
    fn test_invalid_config() {
        let config_content = r#"
            count: "not a number"
            alphabet: ["I"]
        "#;

        let dir = tempdir().unwrap();
        let config_path = dir.path().join("config.yaml");
        let mut file = File::create(&config_path).unwrap();
        file.write_all(config_content.as_bytes()).unwrap();

        let result = GeneratorConfig::load_from(Some(&config_path));
        assert!(result.is_err(), "Expected error loading invalid config");
    }
}
