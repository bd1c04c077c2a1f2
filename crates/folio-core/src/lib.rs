//! Core types and trait definitions for the Folio portfolio API.
//!
//! This crate is deliberately free of HTTP and database dependencies. It
//! holds the reference catalog, the contact-form domain types, and the
//! [`store::ContactStore`] abstraction the other crates build on.

pub mod catalog;
pub mod contact;
pub mod error;
pub mod store;

pub use error::{Error, Result};
