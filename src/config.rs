//! Configuration System
//!
//! Handles loading configuration from files and environment variables.
//! Supports TOML config files and environment variable overrides.

use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::simulation::SimulationConfig;

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,

    #[serde(default)]
    pub simulation: SimulationConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// API server configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    #[serde(default)]
    pub cors_origins: Vec<String>,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8000
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            cors_origins: Vec::new(),
        }
    }
}

impl ApiConfig {
    /// Create config with custom host and port
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
            ..Default::default()
        }
    }

    /// Get the socket address string
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,

    #[serde(default = "default_log_format")]
    pub format: LogFormat,
}

/// Log output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    Pretty,
    Json,
}

impl std::str::FromStr for LogFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "pretty" => Ok(LogFormat::Pretty),
            "json" => Ok(LogFormat::Json),
            other => Err(ConfigError::Invalid(format!(
                "unknown log format '{}', expected pretty or json",
                other
            ))),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> LogFormat {
    LogFormat::Pretty
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl Config {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        config
            .simulation
            .validate()
            .map_err(|e| ConfigError::Invalid(e.to_string()))?;

        Ok(config)
    }

    /// Load configuration from environment variables only
    pub fn from_env() -> LoadedConfig {
        let mut config = Config::default();
        let warnings = config.apply_env_overrides();
        LoadedConfig {
            config,
            source: None,
            warnings,
        }
    }

    /// Load configuration with environment variable overrides
    pub fn load_with_env(path: &Path) -> Result<LoadedConfig, ConfigError> {
        let mut config = Self::load(path)?;
        let warnings = config.apply_env_overrides();
        Ok(LoadedConfig {
            config,
            source: Some(path.to_path_buf()),
            warnings,
        })
    }

    /// Load from default locations or environment
    pub fn load_default() -> LoadedConfig {
        Self::load_first(&default_config_paths())
    }

    /// Load the first readable, valid file in `paths`; fall back to defaults.
    ///
    /// Files that exist but fail to load are skipped and reported in
    /// [`LoadedConfig::warnings`].
    pub fn load_first(paths: &[PathBuf]) -> LoadedConfig {
        let mut warnings = Vec::new();

        for path in paths.iter().filter(|p| p.exists()) {
            match Self::load_with_env(path) {
                Ok(mut loaded) => {
                    warnings.append(&mut loaded.warnings);
                    loaded.warnings = warnings;
                    return loaded;
                }
                Err(e) => warnings.push(format!("Failed to load config from {:?}: {}", path, e)),
            }
        }

        let mut loaded = Self::from_env();
        warnings.append(&mut loaded.warnings);
        loaded.warnings = warnings;
        loaded
    }

    /// Apply environment variable overrides, returning any that were ignored
    fn apply_env_overrides(&mut self) -> Vec<String> {
        let mut warnings = Vec::new();

        if let Ok(host) = std::env::var("TRAFFICWATCH_API_HOST") {
            self.api.host = host;
        }
        if let Ok(port) = std::env::var("TRAFFICWATCH_API_PORT") {
            match port.parse() {
                Ok(p) => self.api.port = p,
                Err(_) => warnings.push(format!("Ignoring TRAFFICWATCH_API_PORT: '{}' is not a port", port)),
            }
        }

        if let Ok(seed) = std::env::var("TRAFFICWATCH_SEED") {
            match seed.parse() {
                Ok(s) => self.simulation.seed = Some(s),
                Err(_) => warnings.push(format!("Ignoring TRAFFICWATCH_SEED: '{}' is not a u64", seed)),
            }
        }

        if let Ok(level) = std::env::var("TRAFFICWATCH_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Ok(format) = std::env::var("TRAFFICWATCH_LOG_FORMAT") {
            match format.parse() {
                Ok(f) => self.logging.format = f,
                Err(e) => warnings.push(format!("Ignoring TRAFFICWATCH_LOG_FORMAT: {}", e)),
            }
        }

        warnings
    }
}

/// Standard config file locations, in search order
pub fn default_config_paths() -> Vec<PathBuf> {
    [
        dirs::config_dir().map(|p| p.join("trafficwatch").join("config.toml")),
        Some(PathBuf::from("/etc/trafficwatch/config.toml")),
        Some(PathBuf::from("./config.toml")),
    ]
    .into_iter()
    .flatten()
    .collect()
}

/// A loaded config plus what happened while loading it.
///
/// Loading runs before the tracing subscriber is installed, so problems are
/// collected here and logged by the caller.
#[derive(Debug)]
pub struct LoadedConfig {
    pub config: Config,
    /// File the config was read from; `None` when defaults were used
    pub source: Option<PathBuf>,
    /// Skipped files and ignored environment overrides
    pub warnings: Vec<String>,
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path:?}: {error}")]
    Io { path: PathBuf, error: String },

    #[error("Failed to parse config file {path:?}: {error}")]
    Parse { path: PathBuf, error: String },

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Generate a default config file content
pub fn generate_default_config() -> String {
    r#"# TrafficWatch Configuration
#
# Environment variables override these settings:
# - TRAFFICWATCH_API_HOST
# - TRAFFICWATCH_API_PORT
# - TRAFFICWATCH_SEED
# - TRAFFICWATCH_LOG_LEVEL
# - TRAFFICWATCH_LOG_FORMAT

[api]
# API server host
host = "0.0.0.0"

# API server port
port = 8000

# Allowed CORS origins (empty = any origin)
cors_origins = []

[simulation]
# Fixed RNG seed for a reproducible feed
# seed = 42

# Vehicles counted per edge per sample
min_vehicles = 10
max_vehicles = 50

# Simulated travel time per edge (seconds)
min_duration_s = 120
max_duration_s = 600

# Simulated road distance per edge (meters)
min_distance_m = 800
max_distance_m = 3000

[logging]
# Log level: trace, debug, info, warn, error
level = "info"

# Log format: pretty (for development) or json (for production)
format = "pretty"
"#
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config_parses() {
        let config: Config = toml::from_str(&generate_default_config()).unwrap();
        assert_eq!(config.api.port, 8000);
        assert_eq!(config.simulation.min_vehicles, 10);
        assert_eq!(config.simulation.max_distance_m, 3000);
        assert_eq!(config.logging.format, LogFormat::Pretty);
        assert!(config.simulation.seed.is_none());
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[api]\nport = 9100\n\n[simulation]\nseed = 5").unwrap();

        let config = Config::load(file.path()).unwrap();
        assert_eq!(config.api.port, 9100);
        assert_eq!(config.api.host, "0.0.0.0");
        assert_eq!(config.simulation.seed, Some(5));
        assert_eq!(config.simulation.max_vehicles, 50);
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_invalid_toml() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[api\nport = ").unwrap();

        let err = Config::load(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn test_empty_range_rejected() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[simulation]\nmin_duration_s = 900\nmax_duration_s = 100").unwrap();

        let err = Config::load(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn test_missing_file() {
        let err = Config::load(Path::new("/nonexistent/trafficwatch.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }

    #[test]
    fn test_load_first_reports_invalid_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[simulation]\nmin_duration_s = 900\nmax_duration_s = 100\n").unwrap();

        let loaded = Config::load_first(&[path.clone()]);

        assert!(loaded.source.is_none());
        assert_eq!(loaded.config.simulation.min_duration_s, 120);
        assert!(loaded
            .warnings
            .iter()
            .any(|w| w.starts_with("Failed to load config from") && w.contains("range is empty")));
    }

    #[test]
    fn test_load_first_skips_to_next_valid_file() {
        let dir = tempfile::tempdir().unwrap();
        let broken = dir.path().join("broken.toml");
        let good = dir.path().join("good.toml");
        std::fs::write(&broken, "[api\nport = ").unwrap();
        std::fs::write(&good, "[api]\nport = 9200\n").unwrap();
        let missing = dir.path().join("missing.toml");

        let loaded = Config::load_first(&[missing, broken, good.clone()]);

        assert_eq!(loaded.source.as_deref(), Some(good.as_path()));
        assert_eq!(loaded.config.api.port, 9200);
        assert_eq!(loaded.warnings.len(), 1);
    }

    #[test]
    fn test_load_first_without_files_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let loaded = Config::load_first(&[dir.path().join("absent.toml")]);

        assert!(loaded.source.is_none());
        assert!(!loaded.warnings.iter().any(|w| w.starts_with("Failed to load")));
    }

    #[test]
    fn test_log_format_from_str() {
        assert_eq!("JSON".parse::<LogFormat>().unwrap(), LogFormat::Json);
        assert!("xml".parse::<LogFormat>().is_err());
    }

    #[test]
    fn test_addr() {
        assert_eq!(ApiConfig::new("127.0.0.1", 8000).addr(), "127.0.0.1:8000");
    }
}
