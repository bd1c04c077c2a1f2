//! [`SqliteStore`] — the SQLite implementation of [`ContactStore`].

use std::path::{Path, PathBuf};

use folio_core::{
  contact::ContactRecord,
  store::{ContactStore, RowRef},
};
use rusqlite::OptionalExtension as _;
use uuid::Uuid;

use crate::{
  Error, Result,
  encode::{RawContact, encode_document, encode_uuid},
  schema::SCHEMA,
};

// ─── Location ────────────────────────────────────────────────────────────────

/// Where a store lives, parsed from a connection string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreLocation {
  File(PathBuf),
  Memory,
}

impl StoreLocation {
  /// Accepts `sqlite://<path>`, `sqlite:<path>`, `sqlite::memory:`, or a
  /// bare filesystem path.
  pub fn parse(url: &str) -> Result<Self> {
    let rest = url
      .strip_prefix("sqlite://")
      .or_else(|| url.strip_prefix("sqlite:"))
      .unwrap_or(url);

    match rest {
      ":memory:" => Ok(Self::Memory),
      "" => Err(Error::UnsupportedUrl(url.to_owned())),
      _ if rest.contains("://") => Err(Error::UnsupportedUrl(url.to_owned())),
      path => Ok(Self::File(PathBuf::from(path))),
    }
  }
}

// ─── Store ───────────────────────────────────────────────────────────────────

/// The contacts collection backed by a single SQLite file.
///
/// Cloning is cheap — the inner connection is reference-counted.
#[derive(Clone)]
pub struct SqliteStore {
  conn: tokio_rusqlite::Connection,
}

impl SqliteStore {
  /// Open the store named by a connection string.
  pub async fn connect(url: &str) -> Result<Self> {
    match StoreLocation::parse(url)? {
      StoreLocation::File(path) => Self::open(path).await,
      StoreLocation::Memory => Self::open_in_memory().await,
    }
  }

  /// Open (or create) a store at `path` and run schema initialisation.
  pub async fn open(path: impl AsRef<Path>) -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open(path).await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  /// Open an in-memory store — useful for testing.
  pub async fn open_in_memory() -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open_in_memory().await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  async fn init_schema(&self) -> Result<()> {
    self
      .conn
      .call(|conn| {
        conn.execute_batch(SCHEMA)?;
        Ok(())
      })
      .await?;
    Ok(())
  }
}

// ─── ContactStore impl ───────────────────────────────────────────────────────

impl ContactStore for SqliteStore {
  type Error = Error;

  async fn insert_contact(&self, record: ContactRecord) -> Result<Option<RowRef>> {
    let id_str   = encode_uuid(record.id);
    let document = encode_document(&record)?;

    let row_id = self
      .conn
      .call(move |conn| {
        let changed = conn.execute(
          "INSERT INTO contacts (id, document) VALUES (?1, ?2)",
          rusqlite::params![id_str, document],
        )?;
        Ok((changed > 0).then(|| conn.last_insert_rowid()))
      })
      .await?;

    tracing::debug!(contact_id = %record.id, ?row_id, "inserted contact document");
    Ok(row_id.map(RowRef))
  }

  async fn get_contact(&self, id: Uuid) -> Result<Option<ContactRecord>> {
    let id_str = encode_uuid(id);

    let raw: Option<RawContact> = self
      .conn
      .call(move |conn| {
        Ok(conn
          .query_row(
            "SELECT id, document FROM contacts WHERE id = ?1",
            rusqlite::params![id_str],
            |row| {
              Ok(RawContact {
                id:       row.get(0)?,
                document: row.get(1)?,
              })
            },
          )
          .optional()?)
      })
      .await?;

    raw.map(RawContact::into_record).transpose()
  }

  async fn count_contacts(&self) -> Result<u64> {
    let count: i64 = self
      .conn
      .call(|conn| {
        Ok(conn.query_row("SELECT COUNT(*) FROM contacts", [], |row| row.get(0))?)
      })
      .await?;
    Ok(count.max(0) as u64)
  }
}
