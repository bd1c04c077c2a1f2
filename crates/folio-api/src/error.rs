//! API error type and [`axum::response::IntoResponse`] implementation.

use axum::{
  Json,
  extract::rejection::JsonRejection,
  http::StatusCode,
  response::{IntoResponse, Response},
};
use folio_core::contact::{PersistenceError, SubmitError, ValidationError};
use serde_json::json;
use thiserror::Error;

/// An error returned by an API handler.
///
/// Either the caller sent bad input or the store did not confirm a write.
/// Store faults are reported without further classification.
#[derive(Debug, Error)]
pub enum ApiError {
  #[error(transparent)]
  Validation(#[from] ValidationError),

  #[error(transparent)]
  Persistence(#[from] PersistenceError),
}

impl From<SubmitError> for ApiError {
  fn from(e: SubmitError) -> Self {
    match e {
      SubmitError::Validation(e) => Self::Validation(e),
      SubmitError::Persistence(e) => Self::Persistence(e),
    }
  }
}

impl From<JsonRejection> for ApiError {
  fn from(rejection: JsonRejection) -> Self {
    Self::Validation(ValidationError::single("body", rejection.body_text()))
  }
}

impl IntoResponse for ApiError {
  fn into_response(self) -> Response {
    match self {
      ApiError::Validation(e) => (
        StatusCode::UNPROCESSABLE_ENTITY,
        Json(json!({ "detail": e.errors })),
      )
        .into_response(),
      ApiError::Persistence(e) => (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(json!({ "detail": format!("Server error: {e}") })),
      )
        .into_response(),
    }
  }
}
