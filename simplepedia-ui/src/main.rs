//! simplepedia-ui - Encyclopedia browser service
//!
//! Loads the seed collection, then serves the browsing, editing and
//! selection API until interrupted. State lives only for the process
//! lifetime.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use simplepedia_common::config::{load_toml_config, resolve_settings, CliOverrides, CompiledDefaults};
use simplepedia_common::seed::load_seed;
use simplepedia_common::Collection;
use simplepedia_ui::{build_router, AppState};
use tokio::signal;
use tracing::{info, warn};

/// Command-line arguments for simplepedia-ui
#[derive(Parser, Debug)]
#[command(name = "simplepedia-ui")]
#[command(about = "Encyclopedia browser service")]
#[command(version)]
struct Args {
    /// TOML config file
    #[arg(short, long, env = "SIMPLEPEDIA_CONFIG")]
    config: Option<PathBuf>,

    /// JSON seed fixture with the initial articles
    #[arg(short, long, env = "SIMPLEPEDIA_SEED")]
    seed: Option<PathBuf>,

    /// Address to bind
    #[arg(long, env = "SIMPLEPEDIA_HOST")]
    host: Option<String>,

    /// Port to listen on
    #[arg(short, long, env = "SIMPLEPEDIA_PORT")]
    port: Option<u16>,

    /// Log level used when RUST_LOG is not set
    #[arg(long, env = "SIMPLEPEDIA_LOG_LEVEL")]
    log_level: Option<String>,
}

impl Args {
    fn overrides(&self) -> CliOverrides {
        CliOverrides {
            config_path: self.config.clone(),
            seed_path: self.seed.clone(),
            host: self.host.clone(),
            port: self.port,
            log_level: self.log_level.clone(),
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    let cli = args.overrides();

    // Config is read before tracing exists so the file can set the log level
    let file_config = load_toml_config(cli.config_path.as_deref())
        .context("Failed to load configuration")?;
    let settings = resolve_settings(&cli, &file_config, &CompiledDefaults::default());

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                format!(
                    "simplepedia_ui={0},simplepedia_common={0},tower_http=info",
                    settings.log_level
                )
                .into()
            }),
        )
        .init();

    // Build identification first, before any slow startup work
    info!(
        "Starting Simplepedia (simplepedia-ui) v{} [{}] built {} ({})",
        env!("CARGO_PKG_VERSION"),
        env!("GIT_HASH"),
        env!("BUILD_TIMESTAMP"),
        env!("BUILD_PROFILE")
    );

    let collection = match &settings.seed_path {
        Some(path) => load_seed(path)
            .with_context(|| format!("Failed to load seed from {}", path.display()))?,
        None => {
            warn!("No seed fixture configured, starting with an empty collection");
            Collection::empty()
        }
    };
    info!("✓ Collection ready ({} articles)", collection.len());

    let state = AppState::new(collection);
    let app = build_router(state);

    let addr = settings.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind to {}", addr))?;
    info!("simplepedia-ui listening on http://{}", addr);
    info!("Health check: http://{}/health", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    info!("Server shutdown complete");
    Ok(())
}

/// Graceful shutdown signal handler
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, shutting down");
        },
        _ = terminate => {
            info!("Received terminate signal, shutting down");
        },
    }
}
