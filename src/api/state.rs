//! Application State
//!
//! Shared state accessible by all handlers.
//! Wrapped in Arc for thread-safe sharing across async tasks.

use std::sync::Arc;
use std::time::{Duration, Instant};

use crate::config::{Config, SessionConfig};
use crate::data::{DataResult, SampleDataProvider};
use crate::session::{SessionState, SessionStore};

/// Shared application state for all handlers
#[derive(Clone)]
pub struct AppState {
    /// Fixed dashboard snapshot
    pub data: Arc<SampleDataProvider>,
    /// Per-viewer interaction state
    pub sessions: Arc<SessionStore>,
    /// Server configuration
    pub config: Arc<ApiConfig>,
    /// Server start time for uptime tracking
    pub start_time: Instant,
}

impl AppState {
    /// Create state from an already validated snapshot
    pub fn new(data: SampleDataProvider, config: ApiConfig, session: SessionConfig) -> Self {
        let seed = SessionState::new(data.data());

        Self {
            data: Arc::new(data),
            sessions: Arc::new(SessionStore::new(seed, session)),
            config: Arc::new(config),
            start_time: Instant::now(),
        }
    }

    /// Load the embedded snapshot and build state from the full configuration
    ///
    /// Fails when the snapshot does not validate.
    pub fn from_config(config: &Config) -> DataResult<Self> {
        let data = SampleDataProvider::load()?;
        Ok(Self::new(
            data,
            ApiConfig::from_config(config),
            config.session.clone(),
        ))
    }

    /// Get server uptime in seconds
    pub fn uptime_seconds(&self) -> u64 {
        self.start_time.elapsed().as_secs()
    }
}

/// Server configuration used by the handlers
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Host to bind to
    pub host: String,
    /// Port to listen on
    pub port: u16,
    /// Name of the session cookie
    pub cookie_name: String,
    /// Pause before the agent reply
    pub reply_delay: Duration,
    /// Longest accepted chat message in characters
    pub max_message_len: usize,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::from_config(&Config::default())
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

    pub fn from_config(config: &Config) -> Self {
        Self {
            host: config.server.host.clone(),
            port: config.server.port,
            cookie_name: config.session.cookie_name.clone(),
            reply_delay: config.chat.reply_delay(),
            max_message_len: config.chat.max_message_len,
        }
    }

    /// Get the socket address string
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
