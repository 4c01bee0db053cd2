//! Configuration System
//!
//! Handles loading configuration from files and environment variables.
//! Supports TOML config files and environment variable overrides.

use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub session: SessionConfig,

    #[serde(default)]
    pub chat: ChatConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// HTTP server configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8501
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl ServerConfig {
    /// Get the socket address string
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Viewer session configuration
#[derive(Debug, Clone, Deserialize)]
pub struct SessionConfig {
    #[serde(default = "default_idle_timeout")]
    pub idle_timeout_secs: u64,

    #[serde(default = "default_sweep_interval")]
    pub sweep_interval_secs: u64,

    #[serde(default = "default_max_sessions")]
    pub max_sessions: usize,

    #[serde(default = "default_cookie_name")]
    pub cookie_name: String,
}

fn default_idle_timeout() -> u64 {
    1800 // 30 minutes
}

fn default_sweep_interval() -> u64 {
    60
}

fn default_max_sessions() -> usize {
    10_000
}

fn default_cookie_name() -> String {
    "ki_cockpit_session".to_string()
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            idle_timeout_secs: default_idle_timeout(),
            sweep_interval_secs: default_sweep_interval(),
            max_sessions: default_max_sessions(),
            cookie_name: default_cookie_name(),
        }
    }
}

impl SessionConfig {
    pub fn idle_timeout(&self) -> Duration {
        Duration::from_secs(self.idle_timeout_secs)
    }

    pub fn sweep_interval(&self) -> Duration {
        Duration::from_secs(self.sweep_interval_secs.max(1))
    }
}

/// KI-Agent chat configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ChatConfig {
    /// Pause before the canned agent reply is appended
    #[serde(default = "default_reply_delay")]
    pub reply_delay_ms: u64,

    #[serde(default = "default_max_message_len")]
    pub max_message_len: usize,
}

fn default_reply_delay() -> u64 {
    1000
}

fn default_max_message_len() -> usize {
    2000
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            reply_delay_ms: default_reply_delay(),
            max_message_len: default_max_message_len(),
        }
    }
}

impl ChatConfig {
    pub fn reply_delay(&self) -> Duration {
        Duration::from_millis(self.reply_delay_ms)
    }
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,

    #[serde(default = "default_log_format")]
    pub format: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl LoggingConfig {
    /// Filter directive used when `RUST_LOG` is not set
    pub fn filter_directive(&self) -> String {
        format!("ki_cockpit={},tower_http={}", self.level, self.level)
    }

    pub fn is_json(&self) -> bool {
        self.format.eq_ignore_ascii_case("json")
    }
}

impl Config {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        Self::parse(&content).map_err(|e| match e {
            ConfigError::Parse { error, .. } => ConfigError::Parse {
                path: path.to_path_buf(),
                error,
            },
            other => other,
        })
    }

    /// Parse configuration from TOML text
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::Parse {
            path: PathBuf::new(),
            error: e.to_string(),
        })
    }

    /// Load configuration from environment variables only
    pub fn from_env() -> Self {
        let mut config = Config::default();
        config.apply_env_overrides();
        config
    }

    /// Load configuration with environment variable overrides
    pub fn load_with_env(path: &Path) -> Result<Self, ConfigError> {
        let mut config = Self::load(path)?;
        config.apply_env_overrides();
        Ok(config)
    }

    /// Load from default locations or environment, logging the outcome
    pub fn load_default() -> Self {
        let (config, discovery) = Self::discover();
        discovery.log();
        config
    }

    /// Load from default locations or environment without logging
    ///
    /// The returned [`ConfigDiscovery`] can be logged once tracing is set up.
    pub fn discover() -> (Self, ConfigDiscovery) {
        let config_paths: Vec<PathBuf> = [
            dirs::config_dir().map(|p| p.join("ki-cockpit").join("config.toml")),
            Some(PathBuf::from("/etc/ki-cockpit/config.toml")),
            Some(PathBuf::from("./config.toml")),
        ]
        .into_iter()
        .flatten()
        .collect();

        Self::discover_in(&config_paths, |key| std::env::var(key).ok())
    }

    /// First loadable file of `paths`, else defaults; overrides from `lookup`
    fn discover_in(
        paths: &[PathBuf],
        lookup: impl Fn(&str) -> Option<String>,
    ) -> (Self, ConfigDiscovery) {
        let mut discovery = ConfigDiscovery::default();

        for path in paths.iter().filter(|p| p.exists()) {
            match Self::load(path) {
                Ok(mut config) => {
                    config.apply_overrides(&lookup);
                    discovery.loaded_from = Some(path.clone());
                    return (config, discovery);
                }
                Err(e) => discovery.failures.push(e),
            }
        }

        let mut config = Config::default();
        config.apply_overrides(&lookup);
        (config, discovery)
    }

    /// Apply environment variable overrides to an existing config
    fn apply_env_overrides(&mut self) {
        self.apply_overrides(|key| std::env::var(key).ok());
    }

    /// Apply overrides from any key lookup
    fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        // Server overrides
        if let Some(host) = lookup("KI_COCKPIT_HOST") {
            self.server.host = host;
        }
        if let Some(port) = lookup("KI_COCKPIT_PORT") {
            if let Ok(p) = port.parse() {
                self.server.port = p;
            }
        }

        // Session overrides
        if let Some(timeout) = lookup("KI_COCKPIT_SESSION_TIMEOUT") {
            if let Ok(t) = timeout.parse() {
                self.session.idle_timeout_secs = t;
            }
        }

        // Chat overrides
        if let Some(delay) = lookup("KI_COCKPIT_CHAT_DELAY_MS") {
            if let Ok(d) = delay.parse() {
                self.chat.reply_delay_ms = d;
            }
        }

        // Logging overrides
        if let Some(level) = lookup("KI_COCKPIT_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Some(format) = lookup("KI_COCKPIT_LOG_FORMAT") {
            self.logging.format = format;
        }
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path:?}: {error}")]
    Io { path: PathBuf, error: String },

    #[error("Failed to parse config file {path:?}: {error}")]
    Parse { path: PathBuf, error: String },
}

/// Outcome of searching the default config locations
#[derive(Debug, Default)]
pub struct ConfigDiscovery {
    /// File the config was loaded from; `None` means built-in defaults
    pub loaded_from: Option<PathBuf>,
    /// Files that exist but could not be loaded
    pub failures: Vec<ConfigError>,
}

impl ConfigDiscovery {
    pub fn log(&self) {
        for e in &self.failures {
            tracing::warn!("Skipping config: {}", e);
        }
        match &self.loaded_from {
            Some(path) => tracing::info!("Loaded config from {:?}", path),
            None => tracing::info!("Using default config with environment overrides"),
        }
    }
}

/// Generate a default config file content
pub fn generate_default_config() -> String {
    r#"# KI-Cockpit Configuration
#
# Environment variables override these settings:
# - KI_COCKPIT_HOST
# - KI_COCKPIT_PORT
# - KI_COCKPIT_SESSION_TIMEOUT
# - KI_COCKPIT_CHAT_DELAY_MS
# - KI_COCKPIT_LOG_LEVEL
# - KI_COCKPIT_LOG_FORMAT

[server]
# Dashboard server host
host = "0.0.0.0"

# Dashboard server port
port = 8501

[session]
# Drop sessions idle for longer than this (seconds)
idle_timeout_secs = 1800

# How often expired sessions are swept (seconds)
sweep_interval_secs = 60

# Maximum number of concurrent viewer sessions
max_sessions = 10000

# Name of the session cookie
cookie_name = "ki_cockpit_session"

[chat]
# Pause before the agent reply appears (ms)
reply_delay_ms = 1000

# Longest accepted chat message (characters)
max_message_len = 2000

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
    use std::collections::HashMap;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.server.addr(), "0.0.0.0:8501");
        assert_eq!(config.session.idle_timeout(), Duration::from_secs(1800));
        assert_eq!(config.session.cookie_name, "ki_cockpit_session");
        assert_eq!(config.chat.reply_delay(), Duration::from_millis(1000));
        assert_eq!(config.logging.filter_directive(), "ki_cockpit=info,tower_http=info");
        assert!(!config.logging.is_json());
    }

    #[test]
    fn test_generated_config_parses_to_defaults() {
        let config = Config::parse(&generate_default_config()).unwrap();
        assert_eq!(config.server.port, 8501);
        assert_eq!(config.session.max_sessions, 10_000);
        assert_eq!(config.chat.max_message_len, 2000);
        assert_eq!(config.logging.format, "pretty");
    }

    #[test]
    fn test_partial_config_fills_defaults() {
        let config = Config::parse("[chat]\nreply_delay_ms = 0\n").unwrap();
        assert_eq!(config.chat.reply_delay_ms, 0);
        assert_eq!(config.chat.max_message_len, 2000);
        assert_eq!(config.server.port, 8501);
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[server]\nport = 9000\n\n[logging]\nformat = \"json\"").unwrap();

        let config = Config::load(file.path()).unwrap();
        assert_eq!(config.server.port, 9000);
        assert!(config.logging.is_json());
    }

    #[test]
    fn test_load_errors() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing.toml");
        assert!(matches!(Config::load(&missing), Err(ConfigError::Io { .. })));

        let bad = dir.path().join("bad.toml");
        std::fs::write(&bad, "[server\nport = ").unwrap();
        match Config::load(&bad) {
            Err(ConfigError::Parse { path, .. }) => assert_eq!(path, bad),
            other => panic!("expected parse error, got {:?}", other),
        }
    }

    #[test]
    fn test_overrides() {
        let vars: HashMap<&str, &str> = [
            ("KI_COCKPIT_PORT", "9100"),
            ("KI_COCKPIT_CHAT_DELAY_MS", "25"),
            ("KI_COCKPIT_SESSION_TIMEOUT", "not-a-number"),
            ("KI_COCKPIT_LOG_LEVEL", "debug"),
        ]
        .into_iter()
        .collect();

        let mut config = Config::default();
        config.apply_overrides(|key| vars.get(key).map(|v| v.to_string()));

        assert_eq!(config.server.port, 9100);
        assert_eq!(config.chat.reply_delay_ms, 25);
        assert_eq!(config.session.idle_timeout_secs, 1800);
        assert_eq!(config.logging.level, "debug");
        assert_eq!(config.server.host, "0.0.0.0");
    }

    #[test]
    fn test_discover_skips_broken_files() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing.toml");
        let broken = dir.path().join("broken.toml");
        let good = dir.path().join("good.toml");
        std::fs::write(&broken, "[server\nport = ").unwrap();
        std::fs::write(&good, "[server]\nport = 9200\n").unwrap();

        let (config, discovery) =
            Config::discover_in(&[missing, broken.clone(), good.clone()], |_| None);
        assert_eq!(config.server.port, 9200);
        assert_eq!(discovery.loaded_from, Some(good));
        assert_eq!(discovery.failures.len(), 1);
        assert!(matches!(
            &discovery.failures[0],
            ConfigError::Parse { path, .. } if *path == broken
        ));

        let (config, discovery) = Config::discover_in(&[], |key| {
            (key == "KI_COCKPIT_PORT").then(|| "9300".to_string())
        });
        assert_eq!(config.server.port, 9300);
        assert!(discovery.loaded_from.is_none());
        assert!(discovery.failures.is_empty());
    }
}
