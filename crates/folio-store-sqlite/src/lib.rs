//! SQLite backend for the Folio contacts collection.
//!
//! Each contact is stored as a JSON document in a single `contacts` table.
//! Wraps [`tokio_rusqlite`] so all database access runs on a dedicated thread
//! without blocking the async runtime.

mod encode;
mod schema;
mod store;

pub mod error;

pub use error::{Error, Result};
pub use store::{SqliteStore, StoreLocation};

#[cfg(test)]
mod tests;
