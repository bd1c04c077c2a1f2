//! Handlers serving the static portfolio catalog.
//!
//! | Method | Path | Notes |
//! |--------|------|-------|
//! | `GET`  | `/api/projects` | `{"projects": [...]}` in catalog order |
//! | `GET`  | `/api/skills` | `{"skills": {"<category>": [...]}}` |
//!
//! Bodies are serialised straight from the shared [`Catalog`](folio_core::catalog::Catalog).

use axum::{
  Json,
  extract::State,
  response::{IntoResponse, Response},
};
use folio_core::{
  catalog::{ProjectEntry, SkillTable},
  store::ContactStore,
};
use serde::Serialize;

use crate::AppState;

#[derive(Debug, Serialize)]
pub struct Projects<'a> {
  pub projects: &'a [ProjectEntry],
}

/// `GET /api/projects`
pub async fn projects<S>(State(state): State<AppState<S>>) -> Response
where
  S: ContactStore,
{
  Json(Projects {
    projects: &state.catalog.projects,
  })
  .into_response()
}

#[derive(Debug, Serialize)]
pub struct Skills<'a> {
  pub skills: &'a SkillTable,
}

/// `GET /api/skills`
pub async fn skills<S>(State(state): State<AppState<S>>) -> Response
where
  S: ContactStore,
{
  Json(Skills {
    skills: &state.catalog.skills,
  })
  .into_response()
}
