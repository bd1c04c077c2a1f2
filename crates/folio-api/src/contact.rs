//! Handler for the contact form.
//!
//! | Method | Path | Notes |
//! |--------|------|-------|
//! | `POST` | `/api/contact` | Body: [`ContactSubmission`]; 422 on bad input, 500 if the store does not confirm |

use axum::{
  Json,
  extract::{State, rejection::JsonRejection},
};
use folio_core::{
  contact::{self, ContactReceipt, ContactSubmission},
  store::ContactStore,
};

use crate::{AppState, error::ApiError};

/// `POST /api/contact`
pub async fn submit<S>(
  State(state): State<AppState<S>>,
  payload: Result<Json<ContactSubmission>, JsonRejection>,
) -> Result<Json<ContactReceipt>, ApiError>
where
  S: ContactStore,
{
  let Json(submission) = payload?;
  let receipt = contact::submit(state.store.as_ref(), submission).await?;
  Ok(Json(receipt))
}
