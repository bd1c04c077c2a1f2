//! Integration tests for `SqliteStore` against an in-memory database.

use std::path::PathBuf;

use folio_core::{
  contact::{self, ContactRecord, ContactStatus, ContactSubmission},
  store::ContactStore,
};
use uuid::Uuid;

use crate::{Error, SqliteStore, StoreLocation};

async fn store() -> SqliteStore {
  SqliteStore::open_in_memory()
    .await
    .expect("in-memory store")
}

fn submission(name: &str) -> ContactSubmission {
  ContactSubmission {
    name:    name.into(),
    email:   "visitor@example.com".into(),
    subject: "Project enquiry".into(),
    message: "Are you available next month?".into(),
    phone:   Some(String::new()),
  }
}

fn record(name: &str) -> ContactRecord {
  ContactRecord::new(submission(name).validate().unwrap())
}

// ─── Connection strings ──────────────────────────────────────────────────────

#[test]
fn parses_connection_strings() {
  assert_eq!(
    StoreLocation::parse("sqlite://portfolio.db").unwrap(),
    StoreLocation::File(PathBuf::from("portfolio.db"))
  );
  assert_eq!(
    StoreLocation::parse("sqlite:///var/lib/folio/contacts.db").unwrap(),
    StoreLocation::File(PathBuf::from("/var/lib/folio/contacts.db"))
  );
  assert_eq!(
    StoreLocation::parse("sqlite::memory:").unwrap(),
    StoreLocation::Memory
  );
  assert_eq!(
    StoreLocation::parse("data/contacts.db").unwrap(),
    StoreLocation::File(PathBuf::from("data/contacts.db"))
  );
}

#[test]
fn rejects_foreign_connection_strings() {
  assert!(matches!(
    StoreLocation::parse("mongodb://localhost:27017"),
    Err(Error::UnsupportedUrl(_))
  ));
  assert!(matches!(StoreLocation::parse("sqlite://"), Err(Error::UnsupportedUrl(_))));
}

#[tokio::test]
async fn connect_in_memory() {
  let s = SqliteStore::connect("sqlite::memory:").await.unwrap();
  assert_eq!(s.count_contacts().await.unwrap(), 0);
}

// ─── Inserts ─────────────────────────────────────────────────────────────────

#[tokio::test]
async fn insert_is_acknowledged_with_a_row_reference() {
  let s = store().await;
  let first = s.insert_contact(record("Ada")).await.unwrap();
  let second = s.insert_contact(record("Grace")).await.unwrap();

  let (first, second) = (first.unwrap(), second.unwrap());
  assert!(first.0 > 0);
  assert_ne!(first, second);
  assert_eq!(s.count_contacts().await.unwrap(), 2);
}

#[tokio::test]
async fn stored_document_round_trips() {
  let s = store().await;
  let original = record("Ada");
  s.insert_contact(original.clone()).await.unwrap();

  let fetched = s.get_contact(original.id).await.unwrap().unwrap();
  assert_eq!(fetched, original);
  assert_eq!(fetched.status, ContactStatus::New);
  assert_eq!(fetched.phone.as_deref(), Some(""));
}

#[tokio::test]
async fn inserting_the_same_id_twice_fails() {
  let s = store().await;
  let original = record("Ada");

  assert!(s.insert_contact(original.clone()).await.unwrap().is_some());
  let second = s.insert_contact(original).await;

  assert!(matches!(second, Err(Error::Database(_))));
  assert_eq!(s.count_contacts().await.unwrap(), 1);
}

#[tokio::test]
async fn get_contact_missing_returns_none() {
  let s = store().await;
  assert!(s.get_contact(Uuid::new_v4()).await.unwrap().is_none());
}

// ─── Submission through the store ────────────────────────────────────────────

#[tokio::test]
async fn duplicate_submissions_create_distinct_records() {
  let s = store().await;
  let a = contact::submit(&s, submission("Ada")).await.unwrap();
  let b = contact::submit(&s, submission("Ada")).await.unwrap();

  assert_ne!(a.contact_id, b.contact_id);
  for id in [a.contact_id, b.contact_id] {
    let stored = s.get_contact(id).await.unwrap().unwrap();
    assert_eq!(stored.status, ContactStatus::New);
  }
  assert_eq!(s.count_contacts().await.unwrap(), 2);
}

#[tokio::test]
async fn invalid_submission_writes_nothing() {
  let s = store().await;
  let mut bad = submission("Ada");
  bad.email = "not-an-email".into();

  assert!(contact::submit(&s, bad).await.is_err());
  assert_eq!(s.count_contacts().await.unwrap(), 0);
}

#[tokio::test]
async fn file_store_persists_across_reopen() {
  let path = std::env::temp_dir().join(format!("folio-{}.db", Uuid::new_v4()));
  let original = record("Ada");

  {
    let s = SqliteStore::open(&path).await.unwrap();
    s.insert_contact(original.clone()).await.unwrap();
  }

  let s = SqliteStore::connect(&format!("sqlite://{}", path.display()))
    .await
    .unwrap();
  assert_eq!(s.get_contact(original.id).await.unwrap(), Some(original));

  drop(s);
  let _ = std::fs::remove_file(&path);
}
