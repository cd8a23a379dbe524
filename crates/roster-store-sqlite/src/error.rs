//! Error type for `roster-store-sqlite`.

use roster_core::{ErrorKind, StoreError, UserId};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error(transparent)]
  Core(#[from] roster_core::Error),

  #[error("database error: {0}")]
  Database(#[from] tokio_rusqlite::Error),
}

impl Error {
  pub(crate) fn not_found(id: UserId) -> Self {
    Error::Core(roster_core::Error::NotFound(id))
  }
}

impl StoreError for Error {
  fn kind(&self) -> ErrorKind {
    match self {
      Error::Core(e) => e.kind(),
      Error::Database(_) => ErrorKind::Storage,
    }
  }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
