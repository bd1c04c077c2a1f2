//! A process-local [`ContactStore`], used by tests and throwaway instances.

use std::{
  convert::Infallible,
  sync::{
    Arc, Mutex,
    atomic::{AtomicUsize, Ordering},
  },
};

use uuid::Uuid;

use super::{ContactStore, RowRef};
use crate::contact::ContactRecord;

/// Keeps records in a `Vec` behind a mutex.
///
/// Cloning shares the underlying collection.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
  records:     Arc<Mutex<Vec<ContactRecord>>>,
  calls:       Arc<AtomicUsize>,
  acknowledge: bool,
}

impl MemoryStore {
  pub fn new() -> Self {
    Self {
      acknowledge: true,
      ..Default::default()
    }
  }

  /// A store that accepts inserts but never returns a row reference.
  pub fn unacknowledging() -> Self {
    Self {
      acknowledge: false,
      ..Default::default()
    }
  }

  /// Snapshot of all stored records in insertion order.
  pub fn records(&self) -> Vec<ContactRecord> {
    self.lock().clone()
  }

  /// How many times `insert_contact` has been called.
  pub fn insert_calls(&self) -> usize { self.calls.load(Ordering::SeqCst) }

  fn lock(&self) -> std::sync::MutexGuard<'_, Vec<ContactRecord>> {
    self.records.lock().unwrap_or_else(|e| e.into_inner())
  }
}

impl ContactStore for MemoryStore {
  type Error = Infallible;

  async fn insert_contact(
    &self,
    record: ContactRecord,
  ) -> Result<Option<RowRef>, Infallible> {
    self.calls.fetch_add(1, Ordering::SeqCst);
    if !self.acknowledge {
      return Ok(None);
    }
    let mut records = self.lock();
    records.push(record);
    Ok(Some(RowRef(records.len() as i64)))
  }

  async fn get_contact(&self, id: Uuid) -> Result<Option<ContactRecord>, Infallible> {
    Ok(self.lock().iter().find(|r| r.id == id).cloned())
  }

  async fn count_contacts(&self) -> Result<u64, Infallible> {
    Ok(self.lock().len() as u64)
  }
}
