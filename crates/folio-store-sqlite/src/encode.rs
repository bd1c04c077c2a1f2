//! Conversion between [`ContactRecord`] and the columns of `contacts`.
//!
//! UUIDs are stored as hyphenated lowercase strings; the record itself is
//! stored as compact JSON.

use folio_core::contact::ContactRecord;
use uuid::Uuid;

use crate::{Error, Result};

pub fn encode_uuid(id: Uuid) -> String { id.hyphenated().to_string() }

pub fn encode_document(record: &ContactRecord) -> Result<String> {
  Ok(serde_json::to_string(record)?)
}

pub fn decode_document(json: &str) -> Result<ContactRecord> {
  Ok(serde_json::from_str(json)?)
}

/// A row as read back from SQLite, before JSON decoding.
pub struct RawContact {
  pub id:       String,
  pub document: String,
}

impl RawContact {
  pub fn into_record(self) -> Result<ContactRecord> {
    let id = Uuid::parse_str(&self.id)?;
    let record = decode_document(&self.document)?;
    if record.id != id {
      return Err(Error::CorruptDocument(id));
    }
    Ok(record)
  }
}
