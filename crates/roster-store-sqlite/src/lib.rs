//! SQLite backend for the Roster user store.
//!
//! Wraps [`tokio_rusqlite`] so all database access runs on a dedicated
//! thread without blocking the async runtime. That thread executes one
//! statement at a time, which is what keeps writes to the single database
//! file serialized.

mod schema;
mod store;

pub mod error;

pub use error::{Error, Result};
pub use store::SqliteStore;
