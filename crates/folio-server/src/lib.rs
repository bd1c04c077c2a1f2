//! Process wiring for the Folio API server.
//!
//! Loads configuration, opens the document store, loads the catalog, and
//! wraps [`folio_api::router`] with CORS and request tracing.

use std::path::{Path, PathBuf};

use anyhow::Context as _;
use axum::Router;
use folio_api::AppState;
use folio_core::{catalog::Catalog, store::ContactStore};
use folio_store_sqlite::SqliteStore;
use serde::Deserialize;
use tokio::net::TcpListener;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

/// Used when no `store_url` is configured.
pub const DEFAULT_STORE_URL: &str = "sqlite://portfolio.db";

// ─── Configuration ────────────────────────────────────────────────────────────

/// Runtime server configuration, deserialised from `folio.toml` and `FOLIO_*`
/// environment variables.
#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
  pub host:         String,
  pub port:         u16,
  /// Connection string for the contacts store.
  pub store_url:    String,
  /// Replaces the built-in catalog when set.
  #[serde(default)]
  pub catalog_path: Option<PathBuf>,
}

impl ServerConfig {
  /// Layer defaults, the optional TOML file at `path`, and the environment.
  pub fn load(path: &Path) -> Result<Self, config::ConfigError> {
    config::Config::builder()
      .set_default("host", "0.0.0.0")?
      .set_default("port", 8000)?
      .set_default("store_url", DEFAULT_STORE_URL)?
      .add_source(config::File::from(path).required(false))
      .add_source(config::Environment::with_prefix("FOLIO"))
      .build()?
      .try_deserialize()
  }

  pub fn address(&self) -> String { format!("{}:{}", self.host, self.port) }
}

// ─── Bootstrap ────────────────────────────────────────────────────────────────

/// The configured catalog, or the built-in one.
pub fn load_catalog(config: &ServerConfig) -> anyhow::Result<Catalog> {
  match &config.catalog_path {
    Some(path) => Catalog::load(path)
      .with_context(|| format!("failed to load catalog from {path:?}")),
    None => Catalog::builtin().context("built-in catalog is malformed"),
  }
}

/// The API router with CORS and per-request tracing applied.
pub fn app<S>(state: AppState<S>) -> Router
where
  S: ContactStore + 'static,
{
  folio_api::router(state)
    .layer(CorsLayer::permissive())
    .layer(TraceLayer::new_for_http())
}

/// Open the store, bind, and serve until Ctrl-C or SIGTERM.
pub async fn run(config: ServerConfig) -> anyhow::Result<()> {
  let catalog = load_catalog(&config)?;

  let store = SqliteStore::connect(&config.store_url)
    .await
    .with_context(|| format!("failed to open store at {:?}", config.store_url))?;
  tracing::info!(store_url = %config.store_url, "opened contacts store");

  let app = app(AppState::new(store, catalog));
  let address = config.address();

  tracing::info!("Listening on http://{address}");
  let listener = TcpListener::bind(&address)
    .await
    .with_context(|| format!("failed to bind {address}"))?;

  axum::serve(listener, app)
    .with_graceful_shutdown(shutdown_signal())
    .await
    .context("server error")?;

  tracing::info!("server stopped");
  Ok(())
}

async fn shutdown_signal() {
  let ctrl_c = async {
    match tokio::signal::ctrl_c().await {
      Ok(()) => tracing::info!("received Ctrl+C, shutting down"),
      Err(e) => {
        tracing::warn!(error = %e, "cannot listen for Ctrl+C");
        std::future::pending::<()>().await;
      }
    }
  };

  #[cfg(unix)]
  let terminate = async {
    use tokio::signal::unix::{SignalKind, signal};
    match signal(SignalKind::terminate()) {
      Ok(mut stream) => {
        stream.recv().await;
        tracing::info!("received SIGTERM, shutting down");
      }
      Err(e) => {
        tracing::warn!(error = %e, "cannot listen for SIGTERM");
        std::future::pending::<()>().await;
      }
    }
  };

  #[cfg(not(unix))]
  let terminate = std::future::pending::<()>();

  tokio::select! {
    () = ctrl_c => {},
    () = terminate => {},
  }
}
