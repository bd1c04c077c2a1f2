//! Contact-form submissions: validation, the persisted record, and the
//! submission operation itself.
//!
//! A submission moves through exactly one transition: it is validated, turned
//! into a [`ContactRecord`] with status [`ContactStatus::New`], and inserted
//! once. Records are never updated afterwards.

use std::fmt;

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;
use validator::ValidateEmail as _;

use crate::store::ContactStore;

/// Confirmation text returned to the visitor on success.
pub const RECEIVED_MESSAGE: &str = "Contact message received successfully!";

// ─── Input ───────────────────────────────────────────────────────────────────

/// A contact form as posted by the client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactSubmission {
  pub name:    String,
  pub email:   String,
  pub subject: String,
  pub message: String,
  #[serde(default)]
  pub phone:   Option<String>,
}

/// A submission that has passed [`ContactSubmission::validate`].
#[derive(Debug, Clone)]
pub struct ValidContact(ContactSubmission);

impl ValidContact {
  pub fn into_inner(self) -> ContactSubmission { self.0 }
}

impl ContactSubmission {
  /// Check every field, collecting all problems rather than stopping at the
  /// first.
  pub fn validate(self) -> Result<ValidContact, ValidationError> {
    let mut errors = Vec::new();

    if self.name.trim().is_empty() {
      errors.push(FieldError::new("name", "must not be empty"));
    }
    if !is_valid_email(&self.email) {
      errors.push(FieldError::new("email", "value is not a valid email address"));
    }

    if errors.is_empty() {
      Ok(ValidContact(self))
    } else {
      Err(ValidationError { errors })
    }
  }
}

/// `validator`'s syntax check, narrowed to dot-atom local parts and dotted
/// host names. Domain literals such as `[127.0.0.1]` are refused.
fn is_valid_email(address: &str) -> bool {
  if !address.validate_email() {
    return false;
  }
  let Some((local, domain)) = address.rsplit_once('@') else {
    return false;
  };
  let dot_atom = |s: &str| s.split('.').all(|part| !part.is_empty());

  dot_atom(local) && !domain.starts_with('[') && domain.contains('.') && dot_atom(domain)
}

// ─── Record ──────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContactStatus {
  #[default]
  New,
}

/// The document persisted for every accepted submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactRecord {
  pub id:        Uuid,
  pub name:      String,
  pub email:     String,
  pub subject:   String,
  pub message:   String,
  pub phone:     Option<String>,
  /// Server-local wall-clock time the record was built.
  pub timestamp: DateTime<Local>,
  pub status:    ContactStatus,
}

impl ContactRecord {
  pub fn new(contact: ValidContact) -> Self {
    let ContactSubmission {
      name,
      email,
      subject,
      message,
      phone,
    } = contact.into_inner();

    Self {
      id: Uuid::new_v4(),
      name,
      email,
      subject,
      message,
      phone,
      timestamp: Local::now(),
      status: ContactStatus::New,
    }
  }
}

/// Success payload for `POST /api/contact`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactReceipt {
  pub success:    bool,
  pub message:    String,
  pub contact_id: Uuid,
}

impl ContactReceipt {
  pub fn new(contact_id: Uuid) -> Self {
    Self {
      success: true,
      message: RECEIVED_MESSAGE.to_owned(),
      contact_id,
    }
  }
}

// ─── Errors ──────────────────────────────────────────────────────────────────

/// One rejected input field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
  pub field:   String,
  pub message: String,
}

impl FieldError {
  pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
    Self {
      field:   field.into(),
      message: message.into(),
    }
  }
}

impl fmt::Display for FieldError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}: {}", self.field, self.message)
  }
}

/// The input was malformed. Raised before any store interaction.
#[derive(Debug, Clone, Error)]
#[error("invalid contact submission: {}", join(.errors))]
pub struct ValidationError {
  pub errors: Vec<FieldError>,
}

impl ValidationError {
  pub fn single(field: impl Into<String>, message: impl Into<String>) -> Self {
    Self {
      errors: vec![FieldError::new(field, message)],
    }
  }
}

fn join(errors: &[FieldError]) -> String {
  errors
    .iter()
    .map(ToString::to_string)
    .collect::<Vec<_>>()
    .join("; ")
}

/// The store did not confirm the write.
#[derive(Debug, Error)]
pub enum PersistenceError {
  /// The insert returned without error but also without a row reference.
  #[error("Failed to save contact message")]
  Unacknowledged,

  #[error("{0}")]
  Store(#[source] Box<dyn std::error::Error + Send + Sync>),
}

#[derive(Debug, Error)]
pub enum SubmitError {
  #[error(transparent)]
  Validation(#[from] ValidationError),

  #[error(transparent)]
  Persistence(#[from] PersistenceError),
}

// ─── Operation ───────────────────────────────────────────────────────────────

/// Validate `submission`, persist it as a new record, and return the receipt.
#[tracing::instrument(skip_all)]
pub async fn submit<S>(
  store: &S,
  submission: ContactSubmission,
) -> Result<ContactReceipt, SubmitError>
where
  S: ContactStore,
{
  let contact = submission
    .validate()
    .inspect_err(|e| tracing::debug!(%e, "rejected contact submission"))?;

  let record = ContactRecord::new(contact);
  let contact_id = record.id;

  match store.insert_contact(record).await {
    Ok(Some(row)) => {
      tracing::info!(%contact_id, %row, "stored contact message");
      Ok(ContactReceipt::new(contact_id))
    }
    Ok(None) => {
      tracing::error!(%contact_id, "store did not acknowledge contact insert");
      Err(PersistenceError::Unacknowledged.into())
    }
    Err(e) => {
      tracing::error!(%contact_id, error = %e, "failed to store contact message");
      Err(PersistenceError::Store(Box::new(e)).into())
    }
  }
}
