//! SQLite backend for the pawtag registry.
//!
//! Wraps [`tokio_rusqlite`] so all database access runs on a dedicated thread
//! without blocking the async runtime. The single serialized connection plus
//! the schema's UNIQUE constraints provide the two correctness-critical
//! guarantees: no duplicate codes under concurrent generation, and exactly
//! one winner per concurrent activation.

mod encode;
mod schema;
mod store;

pub mod error;

pub use error::{Error, Result};
pub use store::SqliteStore;
