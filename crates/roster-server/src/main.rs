//! roster-server binary.
//!
//! Reads `roster.toml` (or the path given with `--config`), opens the SQLite
//! database, and serves the users API over HTTP until interrupted.

use std::{path::PathBuf, sync::Arc};

use anyhow::Context as _;
use clap::Parser;
use roster_server::{ConfigOverrides, ServerConfig};
use roster_store_sqlite::SqliteStore;
use tokio::net::TcpListener;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about = "Roster users CRUD server")]
struct Cli {
  /// Path to the TOML configuration file. Missing files are ignored.
  #[arg(short, long, default_value = "roster.toml")]
  config: PathBuf,

  /// Address to bind [default: 0.0.0.0]
  #[arg(long)]
  host: Option<String>,

  /// TCP port to listen on [default: 8000]
  #[arg(short, long)]
  port: Option<u16>,

  /// SQLite database file, created if absent [default: users.db]
  #[arg(long = "database")]
  database_path: Option<PathBuf>,
}

impl Cli {
  fn overrides(&self) -> ConfigOverrides {
    ConfigOverrides {
      host:          self.host.clone(),
      port:          self.port,
      database_path: self.database_path.clone(),
    }
  }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
  tracing_subscriber::fmt()
    .with_env_filter(
      EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy(),
    )
    .init();

  let cli = Cli::parse();

  let server_cfg = ServerConfig::load(&cli.config, cli.overrides())
    .with_context(|| format!("failed to load configuration from {:?}", cli.config))?;

  let store = SqliteStore::open(&server_cfg.database_path)
    .await
    .with_context(|| {
      format!("failed to open database at {:?}", server_cfg.database_path)
    })?;
  tracing::info!(path = ?server_cfg.database_path, "database ready");

  let app = roster_server::app(Arc::new(store.clone()), &server_cfg);
  let address = server_cfg.socket_addr();

  let listener = TcpListener::bind(&address)
    .await
    .with_context(|| format!("failed to bind {address}"))?;
  tracing::info!("Listening on http://{address}");

  axum::serve(listener, app)
    .with_graceful_shutdown(shutdown_signal())
    .await
    .context("server error")?;

  tracing::info!("shutting down, closing database");
  store.close().await.context("failed to close database")?;

  Ok(())
}

/// Resolve on Ctrl-C (SIGINT).
async fn shutdown_signal() {
  if let Err(e) = tokio::signal::ctrl_c().await {
    tracing::error!(error = %e, "failed to listen for shutdown signal");
    std::future::pending::<()>().await;
  }
}
