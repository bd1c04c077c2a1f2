//! Error type for `folio-store-sqlite`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("database error: {0}")]
  Database(#[from] tokio_rusqlite::Error),

  #[error("json error: {0}")]
  Json(#[from] serde_json::Error),

  #[error("uuid parse error: {0}")]
  Uuid(#[from] uuid::Error),

  #[error("document for contact {0} carries a different id")]
  CorruptDocument(uuid::Uuid),

  #[error("unsupported store url {0:?}; expected sqlite://<path> or sqlite::memory:")]
  UnsupportedUrl(String),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
