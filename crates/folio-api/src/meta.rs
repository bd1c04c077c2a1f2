//! Identity and liveness endpoints.
//!
//! | Method | Path | Notes |
//! |--------|------|-------|
//! | `GET`  | `/` | Service title and status |
//! | `GET`  | `/api/health` | Current server time |

use axum::{Json, extract::State};
use chrono::{DateTime, Local};
use folio_core::store::ContactStore;
use serde::Serialize;

use crate::AppState;

#[derive(Debug, Serialize)]
pub struct Identity {
  pub message: String,
  pub status:  &'static str,
}

/// `GET /`
pub async fn root<S>(State(state): State<AppState<S>>) -> Json<Identity>
where
  S: ContactStore,
{
  Json(Identity {
    message: state.catalog.title.clone(),
    status:  "active",
  })
}

#[derive(Debug, Serialize)]
pub struct Health {
  pub status:    &'static str,
  pub timestamp: DateTime<Local>,
}

/// `GET /api/health`
pub async fn health() -> Json<Health> {
  Json(Health {
    status:    "healthy",
    timestamp: Local::now(),
  })
}
