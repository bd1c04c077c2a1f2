//! JSON REST API for Folio.
//!
//! Exposes an axum [`Router`] backed by any [`folio_core::store::ContactStore`]
//! and a loaded [`Catalog`]. CORS, tracing, and transport concerns are the
//! caller's responsibility.
//!
//! # Mounting
//!
//! ```rust,ignore
//! let app = folio_api::router(AppState::new(store, catalog));
//! ```

pub mod catalog;
pub mod contact;
pub mod error;
pub mod meta;

use std::sync::Arc;

use axum::{
  Router,
  routing::{get, post},
};
use folio_core::{catalog::Catalog, store::ContactStore};

pub use error::ApiError;

// ─── Application state ────────────────────────────────────────────────────────

/// Shared state threaded through all handlers. Both halves are read-only
/// after startup.
pub struct AppState<S> {
  pub store:   Arc<S>,
  pub catalog: Arc<Catalog>,
}

impl<S> AppState<S> {
  pub fn new(store: S, catalog: Catalog) -> Self {
    Self {
      store:   Arc::new(store),
      catalog: Arc::new(catalog),
    }
  }
}

impl<S> Clone for AppState<S> {
  fn clone(&self) -> Self {
    Self {
      store:   Arc::clone(&self.store),
      catalog: Arc::clone(&self.catalog),
    }
  }
}

// ─── Router ───────────────────────────────────────────────────────────────────

/// Build the fully-materialised API router.
pub fn router<S>(state: AppState<S>) -> Router<()>
where
  S: ContactStore + 'static,
{
  let api = Router::new()
    .route("/health", get(meta::health))
    .route("/projects", get(catalog::projects::<S>))
    .route("/skills", get(catalog::skills::<S>))
    .route("/contact", post(contact::submit::<S>));

  Router::new()
    .route("/", get(meta::root::<S>))
    .nest("/api", api)
    .with_state(state)
}

// ─── Integration tests ────────────────────────────────────────────────────────
