//! # KI-Cockpit
//!
//! A server-rendered, gamified sales dashboard. It shows a fixed sample
//! dataset (progress, revenue, shops, ranking) and keeps two bits of
//! per-viewer state: the Glücks-Bubble click challenge and the KI-Agent
//! chat transcript.
//!
//! ## Modules
//!
//! - [`data`]: The fixed, validated sample snapshot
//! - [`session`]: Per-viewer interaction state and its in-memory store
//! - [`render`]: HTML element tree, SVG chart and page sections
//! - [`api`]: HTTP server with Axum
//! - [`config`]: TOML and environment configuration
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use ki_cockpit::{serve, AppState, Config};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::load_default();
//!     let state = AppState::from_config(&config)?;
//!     serve(state).await?;
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod config;
pub mod data;
pub mod render;
pub mod session;

// Re-export top-level types for convenience
pub use api::{build_router, serve, ApiConfig, ApiError, AppState};

pub use config::{
    ChatConfig, Config, ConfigDiscovery, ConfigError, LoggingConfig, ServerConfig, SessionConfig,
};

pub use data::{DashboardData, DataError, SampleDataProvider};

pub use render::{render_page, LineChart, Tab};

pub use session::{
    BubbleChallengeState, ChatTranscript, ClickOutcome, Notice, SessionError, SessionState,
    SessionStore,
};
