//! The `ContactStore` trait.
//!
//! Implemented by storage backends (e.g. `folio-store-sqlite`). The HTTP layer
//! receives a store at construction time and depends only on this
//! abstraction.

pub mod memory;

use std::{fmt, future::Future};

use uuid::Uuid;

use crate::contact::ContactRecord;

/// Acknowledgement returned by a backend for an accepted insert.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RowRef(pub i64);

impl fmt::Display for RowRef {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.0)
  }
}

/// Abstraction over the contacts collection of a document store.
///
/// Records are insert-only; there is no update or delete path.
pub trait ContactStore: Send + Sync {
  type Error: std::error::Error + Send + Sync + 'static;

  /// Insert one record.
  ///
  /// `Ok(None)` means the backend returned without error but did not
  /// acknowledge the write.
  fn insert_contact(
    &self,
    record: ContactRecord,
  ) -> impl Future<Output = Result<Option<RowRef>, Self::Error>> + Send + '_;

  /// Look up a record by its public id.
  fn get_contact(
    &self,
    id: Uuid,
  ) -> impl Future<Output = Result<Option<ContactRecord>, Self::Error>> + Send + '_;

  /// Number of stored records.
  fn count_contacts(
    &self,
  ) -> impl Future<Output = Result<u64, Self::Error>> + Send + '_;
}
