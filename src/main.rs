//! KI-Cockpit Server
//!
//! Run with: cargo run -- serve
//!
//! # Configuration
//!
//! Loaded from `--config`, or the first of
//! `~/.config/ki-cockpit/config.toml`, `/etc/ki-cockpit/config.toml`,
//! `./config.toml`. Environment variables override the file:
//! - `KI_COCKPIT_HOST`, `KI_COCKPIT_PORT`
//! - `KI_COCKPIT_SESSION_TIMEOUT`
//! - `KI_COCKPIT_CHAT_DELAY_MS`
//! - `KI_COCKPIT_LOG_LEVEL`, `KI_COCKPIT_LOG_FORMAT`
//! - `RUST_LOG`: Full filter directive, wins over the config level

use clap::{Parser, Subcommand};
use ki_cockpit::config::{generate_default_config, Config, LoggingConfig};
use ki_cockpit::{serve, AppState, SampleDataProvider};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser)]
#[command(name = "ki-cockpit")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Gamified sales dashboard with bubble challenge and KI-Agent chat")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the dashboard server (default)
    Serve {
        /// Config file path
        #[arg(short, long)]
        config: Option<PathBuf>,
        /// Host to bind to
        #[arg(long)]
        host: Option<String>,
        /// Port to listen on
        #[arg(short, long)]
        port: Option<u16>,
    },

    /// Print the default config file
    Config {
        /// Output path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Print the sample snapshot as JSON
    Snapshot,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command.unwrap_or(Commands::Serve {
        config: None,
        host: None,
        port: None,
    }) {
        Commands::Serve { config, host, port } => {
            let (mut config, discovery) = match config {
                Some(path) => (Config::load_with_env(&path)?, None),
                None => {
                    let (config, discovery) = Config::discover();
                    (config, Some(discovery))
                }
            };
            if let Some(host) = host {
                config.server.host = host;
            }
            if let Some(port) = port {
                config.server.port = port;
            }

            init_logging(&config.logging);
            if let Some(discovery) = discovery {
                discovery.log();
            }
            run_server(config).await?;
        }

        Commands::Config { output } => {
            let content = generate_default_config();
            match output {
                Some(path) => {
                    std::fs::write(&path, content)?;
                    println!("Wrote default config to {}", path.display());
                }
                None => print!("{}", content),
            }
        }

        Commands::Snapshot => {
            let provider = SampleDataProvider::load()?;
            println!("{}", serde_json::to_string_pretty(provider.data())?);
        }
    }

    Ok(())
}

async fn run_server(config: Config) -> Result<(), Box<dyn std::error::Error>> {
    tracing::info!("Starting KI-Cockpit v{}", env!("CARGO_PKG_VERSION"));

    let state = match AppState::from_config(&config) {
        Ok(state) => state,
        Err(e) => {
            tracing::error!("Sample data failed validation: {}", e);
            return Err(e.into());
        }
    };

    tracing::info!(
        idle_timeout_secs = config.session.idle_timeout_secs,
        max_sessions = config.session.max_sessions,
        reply_delay_ms = config.chat.reply_delay_ms,
        "Session store ready"
    );

    serve(state).await?;

    tracing::info!("KI-Cockpit stopped");
    Ok(())
}

/// Initialize tracing from the logging config
fn init_logging(config: &LoggingConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.filter_directive()));

    let registry = tracing_subscriber::registry().with(filter);
    if config.is_json() {
        registry.with(tracing_subscriber::fmt::layer().json()).init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }
}
